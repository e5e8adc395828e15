//! The revision pipeline: reset, pull, then cherry-pick and push each
//! revision in order, collecting per-revision outcomes for the final report.

use serde::Serialize;

use crate::error::{Error, Result};
use crate::git::Vcs;
use crate::log_status;

/// Outcome of one pipeline run. The two lists partition the input revisions
/// and preserve input order within each list.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RunReport {
    pub successful: Vec<String>,
    pub failed: Vec<String>,
}

impl RunReport {
    pub fn total(&self) -> usize {
        self.successful.len() + self.failed.len()
    }

    pub fn all_succeeded(&self) -> bool {
        self.failed.is_empty()
    }

    /// Human-readable summary for text output mode.
    pub fn render_text(&self) -> String {
        let mut out = String::new();

        if self.all_succeeded() {
            out.push_str(&format!(
                "All {} revisions cherry-picked and pushed.\n",
                self.successful.len()
            ));
            return out;
        }

        out.push_str(&format!(
            "Completed with errors: {} succeeded, {} failed.\n",
            self.successful.len(),
            self.failed.len()
        ));

        out.push_str("\nFailed revisions:\n");
        for revision in &self.failed {
            out.push_str(&format!("  - {}\n", revision));
        }

        if !self.successful.is_empty() {
            out.push_str("\nSuccessful revisions:\n");
            for revision in &self.successful {
                out.push_str(&format!("  - {}\n", revision));
            }
        }

        out
    }
}

/// Commands a run would execute, without executing any of them.
///
/// The repository check is a precondition, not a mutation, so it is not part
/// of the plan.
pub fn plan(revisions: &[String]) -> Vec<String> {
    let mut lines = vec!["git reset --hard".to_string(), "git pull".to_string()];
    for revision in revisions {
        lines.push(format!("git cherry-pick {}", revision));
        lines.push("git push".to_string());
    }
    lines
}

/// Run the full pipeline: repository check, hard reset, pull, then the
/// per-revision loop.
///
/// The three setup steps are fatal on failure and nothing further executes.
/// Per-revision failures never stop the loop; they are recorded in the
/// report and processing continues with the next revision.
pub fn run(vcs: &impl Vcs, revisions: &[String]) -> Result<RunReport> {
    if !vcs.is_repo() {
        return Err(Error::not_a_repository());
    }

    log_status!("reset", "Running git reset --hard");
    let reset = vcs.reset_hard();
    if !reset.success {
        return Err(Error::git_command_failed(
            "git reset --hard",
            reset.exit_code,
            reset.combined(),
        ));
    }

    log_status!("pull", "Running git pull");
    let pull = vcs.pull();
    if !pull.success {
        return Err(Error::git_command_failed(
            "git pull",
            pull.exit_code,
            pull.combined(),
        ));
    }

    Ok(process(vcs, revisions))
}

/// The per-revision loop. Each revision ends in exactly one of the two
/// report lists: successful (pick and push both succeeded) or failed.
fn process(vcs: &impl Vcs, revisions: &[String]) -> RunReport {
    let total = revisions.len();
    let mut report = RunReport::default();

    for (index, revision) in revisions.iter().enumerate() {
        log_status!("pick", "Revision {}/{}: {}", index + 1, total, revision);

        let pick = vcs.cherry_pick(revision);
        if !pick.success {
            eprintln!(
                "cherry-pick failed for {}: {}",
                revision,
                pick.combined().trim()
            );

            // Best-effort cleanup so the next pick starts clean. A failed
            // abort is a warning only and never stops the loop.
            let abort = vcs.cherry_pick_abort();
            if !abort.success {
                eprintln!(
                    "warning: failed to abort cherry-pick: {}",
                    abort.combined().trim()
                );
            }

            report.failed.push(revision.clone());
            continue;
        }

        let push = vcs.push();
        if push.success {
            report.successful.push(revision.clone());
        } else {
            // The pick stays applied locally; only the record marks it failed.
            eprintln!(
                "push failed for {}: {}",
                revision,
                push.combined().trim()
            );
            report.failed.push(revision.clone());
        }
    }

    report
}
