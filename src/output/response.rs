//! CLI response formatting and output.
//!
//! Provides the JSON envelope, text-mode error printing, and exit code
//! mapping.

use cherrytrain::error::Hint;
use cherrytrain::{Error, ErrorCode, Result};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct CliResponse<T: Serialize> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<CliError>,
}

#[derive(Debug, Serialize)]
pub struct CliError {
    pub code: String,
    pub message: String,
    pub details: serde_json::Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hints: Option<Vec<Hint>>,
}

impl<T: Serialize> CliResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            Error::internal_json(e.to_string(), Some("serialize response".to_string()))
        })
    }
}

impl CliResponse<()> {
    pub fn from_error(err: &Error) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(CliError {
                code: err.code.as_str().to_string(),
                message: err.message.clone(),
                details: err.details.clone(),
                hints: if err.hints.is_empty() {
                    None
                } else {
                    Some(err.hints.clone())
                },
            }),
        }
    }
}

fn print_response<T: Serialize>(response: &CliResponse<T>) -> Result<()> {
    use std::io::{self, Write};

    let payload = response.to_json()?;
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    if let Err(e) = writeln!(handle, "{}", payload) {
        if e.kind() == io::ErrorKind::BrokenPipe {
            return Ok(()); // Exit gracefully on SIGPIPE
        }
        return Err(Error::internal_io(
            e.to_string(),
            Some("write stdout".to_string()),
        ));
    }
    Ok(())
}

pub fn print_success<T: Serialize>(data: T) -> Result<()> {
    print_response(&CliResponse::success(data))
}

pub fn print_result<T: Serialize>(result: Result<T>) -> Result<()> {
    match result {
        Ok(data) => print_success(data),
        Err(err) => print_response(&CliResponse::<()>::from_error(&err)),
    }
}

/// Text-mode error output: message on stderr, captured command output and
/// hints underneath when present.
pub fn print_error_text(err: &Error) {
    eprintln!("Error: {}", err.message);

    if let Some(output) = err.details.get("output").and_then(|v| v.as_str()) {
        let trimmed = output.trim();
        if !trimmed.is_empty() {
            eprintln!("{}", trimmed);
        }
    }

    for hint in &err.hints {
        eprintln!("hint: {}", hint.message);
    }
}

pub fn exit_code_for_error(code: ErrorCode) -> i32 {
    match code {
        ErrorCode::ValidationMissingArgument
        | ErrorCode::ValidationInvalidArgument
        | ErrorCode::RevisionsFileUnparsable => 2,

        ErrorCode::RevisionsFileNotFound => 4,

        ErrorCode::GitNotARepository | ErrorCode::GitCommandFailed => 20,

        ErrorCode::InternalIoError
        | ErrorCode::InternalJsonError
        | ErrorCode::InternalUnexpected => 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn startup_errors_map_to_nonzero_codes() {
        assert_eq!(exit_code_for_error(ErrorCode::ValidationMissingArgument), 2);
        assert_eq!(exit_code_for_error(ErrorCode::RevisionsFileUnparsable), 2);
        assert_eq!(exit_code_for_error(ErrorCode::RevisionsFileNotFound), 4);
        assert_eq!(exit_code_for_error(ErrorCode::GitNotARepository), 20);
        assert_eq!(exit_code_for_error(ErrorCode::GitCommandFailed), 20);
        assert_eq!(exit_code_for_error(ErrorCode::InternalIoError), 1);
    }

    #[test]
    fn error_envelope_carries_code_and_details() {
        let err = Error::git_command_failed("git pull", 1, "fatal: nope");
        let response = CliResponse::<()>::from_error(&err);
        let value = serde_json::to_value(&response).unwrap();

        assert_eq!(value["success"], false);
        assert_eq!(value["error"]["code"], "git.command_failed");
        assert_eq!(value["error"]["details"]["output"], "fatal: nope");
        assert!(value.get("data").is_none());
    }

    #[test]
    fn success_envelope_wraps_data() {
        let value =
            serde_json::to_value(CliResponse::success(serde_json::json!({ "n": 1 }))).unwrap();
        assert_eq!(value["success"], true);
        assert_eq!(value["data"]["n"], 1);
    }
}
