//! Command execution primitives with consistent failure handling.

use std::process::Command;

/// Captured result of one external command invocation.
///
/// `success` reflects the process exit status only; callers never inspect
/// output text to decide success. A failure to launch the process at all is
/// reported the same way as a failed command: `success = false` with the
/// launch error in `stderr` and `exit_code: -1`.
#[derive(Debug, Clone)]
pub struct CommandOutput {
    pub stdout: String,
    pub stderr: String,
    pub success: bool,
    pub exit_code: i32,
}

impl CommandOutput {
    /// Combined stdout followed by stderr, for surfacing on failure paths.
    pub fn combined(&self) -> String {
        format!("{}{}", self.stdout, self.stderr)
    }
}

/// Run a command in the current working directory, capturing all output.
///
/// Blocks until the process exits. Never returns an error: spawn or IO
/// failure yields a failed `CommandOutput` describing the problem.
pub fn run(program: &str, args: &[&str]) -> CommandOutput {
    let output = Command::new(program).args(args).output();

    match output {
        Ok(out) => CommandOutput {
            stdout: String::from_utf8_lossy(&out.stdout).to_string(),
            stderr: String::from_utf8_lossy(&out.stderr).to_string(),
            success: out.status.success(),
            exit_code: out.status.code().unwrap_or(-1),
        },
        Err(err) => CommandOutput {
            stdout: String::new(),
            stderr: format!("Failed to run {}: {}", program, err),
            success: false,
            exit_code: -1,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn run_captures_stdout_on_success() {
        let out = run("sh", &["-c", "echo hello"]);
        assert!(out.success);
        assert_eq!(out.exit_code, 0);
        assert!(out.stdout.contains("hello"));
    }

    #[test]
    fn run_reports_nonzero_exit_as_failure() {
        let out = run("sh", &["-c", "echo oops 1>&2; exit 3"]);
        assert!(!out.success);
        assert_eq!(out.exit_code, 3);
        assert!(out.stderr.contains("oops"));
    }

    #[test]
    fn run_combines_stdout_then_stderr() {
        let out = run("sh", &["-c", "echo first; echo second 1>&2"]);
        let combined = out.combined();
        let first = combined.find("first").unwrap();
        let second = combined.find("second").unwrap();
        assert!(first < second);
    }

    #[test]
    fn run_turns_spawn_failure_into_failed_output() {
        let out = run("cherrytrain-no-such-program", &[]);
        assert!(!out.success);
        assert_eq!(out.exit_code, -1);
        assert!(out.stderr.contains("Failed to run"));
    }
}
