use crate::utils::command::{self, CommandOutput};

/// Seam between the revision pipeline and the external VCS client.
///
/// Every operation reports success via the process exit status captured in
/// `CommandOutput`; no operation returns a Rust-level error.
pub trait Vcs {
    /// True when the current working directory is inside a repository.
    fn is_repo(&self) -> bool;
    fn reset_hard(&self) -> CommandOutput;
    fn pull(&self) -> CommandOutput;
    fn cherry_pick(&self, revision: &str) -> CommandOutput;
    fn cherry_pick_abort(&self) -> CommandOutput;
    fn push(&self) -> CommandOutput;
}

/// Production implementation invoking the `git` executable on PATH,
/// operating on the current working directory.
pub struct GitCli;

impl Vcs for GitCli {
    fn is_repo(&self) -> bool {
        command::run("git", &["rev-parse", "--git-dir"]).success
    }

    fn reset_hard(&self) -> CommandOutput {
        command::run("git", &["reset", "--hard"])
    }

    fn pull(&self) -> CommandOutput {
        command::run("git", &["pull"])
    }

    fn cherry_pick(&self, revision: &str) -> CommandOutput {
        command::run("git", &["cherry-pick", revision])
    }

    fn cherry_pick_abort(&self) -> CommandOutput {
        command::run("git", &["cherry-pick", "--abort"])
    }

    fn push(&self) -> CommandOutput {
        command::run("git", &["push"])
    }
}
