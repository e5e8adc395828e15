use clap::{CommandFactory, Parser};
use std::path::PathBuf;

mod output;

use cherrytrain::git::GitCli;
use cherrytrain::{pipeline, revisions, ErrorCode};

const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Parser)]
#[command(name = "cherrytrain")]
#[command(version = VERSION)]
#[command(about = "Batch cherry-pick automation: reset, pull, pick, push, report")]
struct Cli {
    /// Revisions to cherry-pick, in order (hashes, tags, or refs)
    revisions: Vec<String>,

    /// Load revisions from a file: a JSON array of strings, or one revision
    /// per line. Replaces any positional revisions.
    #[arg(short, long, value_name = "PATH")]
    file: Option<PathBuf>,

    /// Print the commands a run would execute, without executing any of them
    #[arg(long)]
    dry_run: bool,

    /// Emit the report (or error) as a JSON envelope on stdout
    #[arg(long)]
    json: bool,
}

fn print_usage() {
    let mut cmd = Cli::command();
    cmd.print_help().expect("Failed to print help");
    println!();
}

fn main() -> std::process::ExitCode {
    // Bare invocation shows usage and exits clean.
    if std::env::args().len() <= 1 {
        print_usage();
        return std::process::ExitCode::SUCCESS;
    }

    let cli = Cli::parse();
    let json = cli.json;

    let revisions = match revisions::resolve(cli.revisions, cli.file.as_deref()) {
        Ok(revisions) => revisions,
        Err(err) => {
            let exit_code = output::exit_code_for_error(err.code);
            if json {
                let _ = output::print_result::<serde_json::Value>(Err(err));
            } else {
                output::print_error_text(&err);
                if err.code == ErrorCode::ValidationMissingArgument {
                    print_usage();
                }
            }
            return std::process::ExitCode::from(exit_code_to_u8(exit_code));
        }
    };

    if cli.dry_run {
        let lines = pipeline::plan(&revisions);
        if json {
            let _ = output::print_success(serde_json::json!({ "plan": lines }));
        } else {
            println!("Dry run - commands that would be executed:");
            for line in &lines {
                println!("{}", line);
            }
        }
        return std::process::ExitCode::SUCCESS;
    }

    match pipeline::run(&GitCli, &revisions) {
        Ok(report) => {
            if json {
                let _ = output::print_success(&report);
            } else {
                print!("{}", report.render_text());
            }
            // Per-revision failures are informational; the run completed.
            std::process::ExitCode::SUCCESS
        }
        Err(err) => {
            let exit_code = output::exit_code_for_error(err.code);
            if json {
                let _ = output::print_result::<serde_json::Value>(Err(err));
            } else {
                output::print_error_text(&err);
            }
            std::process::ExitCode::from(exit_code_to_u8(exit_code))
        }
    }
}

fn exit_code_to_u8(code: i32) -> u8 {
    if code <= 0 {
        0
    } else if code >= 255 {
        255
    } else {
        code as u8
    }
}
