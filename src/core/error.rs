use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    ValidationMissingArgument,
    ValidationInvalidArgument,

    RevisionsFileNotFound,
    RevisionsFileUnparsable,

    GitNotARepository,
    GitCommandFailed,

    InternalIoError,
    InternalJsonError,
    InternalUnexpected,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::ValidationMissingArgument => "validation.missing_argument",
            ErrorCode::ValidationInvalidArgument => "validation.invalid_argument",

            ErrorCode::RevisionsFileNotFound => "revisions.file_not_found",
            ErrorCode::RevisionsFileUnparsable => "revisions.file_unparsable",

            ErrorCode::GitNotARepository => "git.not_a_repository",
            ErrorCode::GitCommandFailed => "git.command_failed",

            ErrorCode::InternalIoError => "internal.io_error",
            ErrorCode::InternalJsonError => "internal.json_error",
            ErrorCode::InternalUnexpected => "internal.unexpected",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Hint {
    pub message: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MissingArgumentDetails {
    pub args: Vec<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FileDetails {
    pub path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GitCommandFailedDetails {
    pub command: String,
    pub exit_code: i32,
    pub output: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InternalIoErrorDetails {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
}

#[derive(Debug, Clone)]
pub struct Error {
    pub code: ErrorCode,
    pub message: String,
    pub details: Value,
    pub hints: Vec<Hint>,
}

pub type Result<T> = std::result::Result<T, Error>;

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for Error {}

impl Error {
    pub fn new(code: ErrorCode, message: impl Into<String>, details: Value) -> Self {
        Self {
            code,
            message: message.into(),
            details,
            hints: Vec::new(),
        }
    }

    pub fn validation_missing_argument(args: Vec<String>) -> Self {
        let details = serde_json::to_value(MissingArgumentDetails { args })
            .unwrap_or_else(|_| Value::Object(serde_json::Map::new()));
        Self::new(
            ErrorCode::ValidationMissingArgument,
            "No revisions provided",
            details,
        )
    }

    pub fn validation_invalid_argument(field: impl Into<String>, problem: impl Into<String>) -> Self {
        let details = serde_json::json!({
            "field": field.into(),
            "problem": problem.into(),
        });
        Self::new(
            ErrorCode::ValidationInvalidArgument,
            "Invalid argument",
            details,
        )
    }

    pub fn revisions_file_not_found(path: impl Into<String>) -> Self {
        let path = path.into();
        let details = serde_json::to_value(FileDetails {
            path: path.clone(),
            error: None,
        })
        .unwrap_or_else(|_| Value::Object(serde_json::Map::new()));
        Self::new(
            ErrorCode::RevisionsFileNotFound,
            format!("Revisions file not found: {}", path),
            details,
        )
    }

    pub fn revisions_file_unparsable(path: impl Into<String>, problem: impl Into<String>) -> Self {
        let details = serde_json::to_value(FileDetails {
            path: path.into(),
            error: Some(problem.into()),
        })
        .unwrap_or_else(|_| Value::Object(serde_json::Map::new()));
        Self::new(
            ErrorCode::RevisionsFileUnparsable,
            "Revisions file contains no usable revisions",
            details,
        )
        .with_hint("Provide a JSON array of strings or one revision per line")
    }

    pub fn not_a_repository() -> Self {
        Self::new(
            ErrorCode::GitNotARepository,
            "Not inside a git repository",
            Value::Object(serde_json::Map::new()),
        )
        .with_hint("Run cherrytrain from inside a git checkout")
    }

    pub fn git_command_failed(command: impl Into<String>, exit_code: i32, output: impl Into<String>) -> Self {
        let command = command.into();
        let details = serde_json::to_value(GitCommandFailedDetails {
            command: command.clone(),
            exit_code,
            output: output.into(),
        })
        .unwrap_or_else(|_| Value::Object(serde_json::Map::new()));
        Self::new(
            ErrorCode::GitCommandFailed,
            format!("{} failed", command),
            details,
        )
    }

    pub fn internal_io(error: impl Into<String>, context: Option<String>) -> Self {
        let details = serde_json::to_value(InternalIoErrorDetails {
            error: error.into(),
            context,
        })
        .unwrap_or_else(|_| Value::Object(serde_json::Map::new()));
        Self::new(ErrorCode::InternalIoError, "IO error", details)
    }

    pub fn internal_json(error: impl Into<String>, context: Option<String>) -> Self {
        let details = serde_json::json!({
            "error": error.into(),
            "context": context,
        });
        Self::new(ErrorCode::InternalJsonError, "JSON error", details)
    }

    pub fn internal_unexpected(error: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::InternalUnexpected,
            "Unexpected error",
            serde_json::json!({ "error": error.into() }),
        )
    }

    pub fn with_hint(mut self, message: impl Into<String>) -> Self {
        self.hints.push(Hint {
            message: message.into(),
        });
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_codes_have_dotted_form() {
        assert_eq!(
            ErrorCode::GitNotARepository.as_str(),
            "git.not_a_repository"
        );
        assert_eq!(
            ErrorCode::RevisionsFileNotFound.as_str(),
            "revisions.file_not_found"
        );
        assert_eq!(
            ErrorCode::ValidationMissingArgument.as_str(),
            "validation.missing_argument"
        );
    }

    #[test]
    fn git_command_failed_carries_command_details() {
        let err = Error::git_command_failed("git pull", 128, "fatal: no remote");
        assert_eq!(err.code, ErrorCode::GitCommandFailed);
        assert_eq!(err.message, "git pull failed");
        assert_eq!(err.details["command"], "git pull");
        assert_eq!(err.details["exitCode"], 128);
        assert_eq!(err.details["output"], "fatal: no remote");
    }

    #[test]
    fn not_a_repository_includes_hint() {
        let err = Error::not_a_repository();
        assert_eq!(err.hints.len(), 1);
        assert!(err.hints[0].message.contains("git checkout"));
    }
}
