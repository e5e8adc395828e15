//! Revision-list input: positional arguments or a revisions file.
//!
//! File content is tried as a JSON array of strings first; anything that does
//! not parse as one is treated as newline-delimited text, one revision per
//! non-empty line.

use std::path::Path;

use crate::error::{Error, Result};

/// Load an ordered revision list from a file.
///
/// Entries are trimmed and empties dropped on both parse paths. Duplicates
/// and order are preserved. A file that yields zero revisions is an error.
pub fn load_from_file(path: &Path) -> Result<Vec<String>> {
    if !path.exists() {
        return Err(Error::revisions_file_not_found(path.display().to_string()));
    }

    let content = std::fs::read_to_string(path)
        .map_err(|e| Error::internal_io(e.to_string(), Some(format!("read {}", path.display()))))?;

    let revisions = parse_content(&content);
    if revisions.is_empty() {
        return Err(Error::revisions_file_unparsable(
            path.display().to_string(),
            "no non-empty revisions found",
        ));
    }

    Ok(revisions)
}

fn parse_content(content: &str) -> Vec<String> {
    let trimmed = content.trim();

    if let Ok(parsed) = serde_json::from_str::<Vec<String>>(trimmed) {
        return clean(parsed);
    }

    clean(trimmed.lines().map(String::from).collect())
}

fn clean(entries: Vec<String>) -> Vec<String> {
    entries
        .into_iter()
        .map(|e| e.trim().to_string())
        .filter(|e| !e.is_empty())
        .collect()
}

/// Resolve the final revision list from positional arguments and the
/// optional `--file` flag.
///
/// When a file is given its contents replace the positional list entirely.
/// Zero resolved revisions is an error; the caller decides how to surface it.
pub fn resolve(positional: Vec<String>, file: Option<&Path>) -> Result<Vec<String>> {
    let revisions = match file {
        Some(path) => load_from_file(path)?,
        None => clean(positional),
    };

    if revisions.is_empty() {
        return Err(Error::validation_missing_argument(vec![
            "revisions".to_string()
        ]));
    }

    Ok(revisions)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorCode;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_temp(content: &str) -> NamedTempFile {
        let mut temp = NamedTempFile::new().unwrap();
        write!(temp, "{}", content).unwrap();
        temp
    }

    #[test]
    fn json_array_and_newline_text_yield_identical_lists() {
        let json = write_temp(r#"["r1", "r2"]"#);
        let text = write_temp("r1\nr2\n");

        let from_json = load_from_file(json.path()).unwrap();
        let from_text = load_from_file(text.path()).unwrap();

        assert_eq!(from_json, vec!["r1", "r2"]);
        assert_eq!(from_json, from_text);
    }

    #[test]
    fn text_lines_are_trimmed_and_blanks_dropped() {
        let temp = write_temp("  abc123  \n\n   \ndef456\n");
        let revisions = load_from_file(temp.path()).unwrap();
        assert_eq!(revisions, vec!["abc123", "def456"]);
    }

    #[test]
    fn json_entries_are_trimmed_and_blanks_dropped() {
        let temp = write_temp(r#"["  a ", "", "b"]"#);
        let revisions = load_from_file(temp.path()).unwrap();
        assert_eq!(revisions, vec!["a", "b"]);
    }

    #[test]
    fn duplicates_and_order_are_preserved() {
        let temp = write_temp("b\na\nb\n");
        let revisions = load_from_file(temp.path()).unwrap();
        assert_eq!(revisions, vec!["b", "a", "b"]);
    }

    #[test]
    fn invalid_json_falls_back_to_line_parsing() {
        // Not a JSON array of strings, so each line becomes a revision.
        let temp = write_temp("[broken\nabc\n");
        let revisions = load_from_file(temp.path()).unwrap();
        assert_eq!(revisions, vec!["[broken", "abc"]);
    }

    #[test]
    fn missing_file_is_a_not_found_error() {
        let err = load_from_file(Path::new("/nonexistent/revisions.txt")).unwrap_err();
        assert_eq!(err.code, ErrorCode::RevisionsFileNotFound);
    }

    #[test]
    fn empty_file_is_unparsable() {
        let temp = write_temp("");
        let err = load_from_file(temp.path()).unwrap_err();
        assert_eq!(err.code, ErrorCode::RevisionsFileUnparsable);
    }

    #[test]
    fn all_blank_file_is_unparsable() {
        let temp = write_temp("\n   \n\t\n");
        let err = load_from_file(temp.path()).unwrap_err();
        assert_eq!(err.code, ErrorCode::RevisionsFileUnparsable);
    }

    #[test]
    fn empty_json_array_is_unparsable() {
        let temp = write_temp("[]");
        let err = load_from_file(temp.path()).unwrap_err();
        assert_eq!(err.code, ErrorCode::RevisionsFileUnparsable);
    }

    #[test]
    fn resolve_uses_positional_without_file() {
        let revisions = resolve(vec!["a".to_string(), "b".to_string()], None).unwrap();
        assert_eq!(revisions, vec!["a", "b"]);
    }

    #[test]
    fn resolve_file_replaces_positional() {
        let temp = write_temp("x\ny\n");
        let revisions = resolve(vec!["a".to_string()], Some(temp.path())).unwrap();
        assert_eq!(revisions, vec!["x", "y"]);
    }

    #[test]
    fn resolve_rejects_empty_input() {
        let err = resolve(vec![], None).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationMissingArgument);
    }

    #[test]
    fn resolve_rejects_all_blank_positionals() {
        let err = resolve(vec!["  ".to_string(), String::new()], None).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationMissingArgument);
    }
}
