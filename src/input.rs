//! Candidate list and batch file loading
//!
//! Candidate lists hold one version per line; `#` starts a comment.
//! Batch files are JSON arrays of artifacts:
//!
//! ```json
//! [{ "name": "junit", "current": "4.12", "versions": ["4.13", "5.0"], "target": "[4.0,5.0)" }]
//! ```

use crate::error::IoError;
use serde::{Deserialize, Serialize};
use std::io::Read;
use std::path::Path;

/// Path that stands for standard input
pub const STDIN_PATH: &str = "-";

/// One artifact of a batch file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchEntry {
    /// Artifact name
    pub name: String,
    /// Declared version
    pub current: String,
    /// Known versions
    #[serde(default)]
    pub versions: Vec<String>,
    /// Per-artifact target, overriding `--target`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
}

/// Split candidate list content into version strings
pub fn parse_candidate_lines(content: &str) -> Vec<String> {
    content
        .lines()
        .map(|line| line.split('#').next().unwrap_or_default().trim())
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Read a candidate list from a file or from stdin (`-`)
pub fn read_candidates(path: &Path) -> Result<Vec<String>, IoError> {
    let content = read_source(path)?;
    Ok(parse_candidate_lines(&content))
}

/// Parse batch file content
pub fn parse_batch(content: &str, path: &Path) -> Result<Vec<BatchEntry>, IoError> {
    serde_json::from_str(content).map_err(|e| IoError::json_parse_error(path, e.to_string()))
}

/// Read a batch file from disk or from stdin (`-`)
pub fn read_batch(path: &Path) -> Result<Vec<BatchEntry>, IoError> {
    let content = read_source(path)?;
    parse_batch(&content, path)
}

fn read_source(path: &Path) -> Result<String, IoError> {
    if path.as_os_str() == STDIN_PATH {
        let mut content = String::new();
        std::io::stdin()
            .read_to_string(&mut content)
            .map_err(|e| IoError::read_error(path, e))?;
        return Ok(content);
    }
    std::fs::read_to_string(path).map_err(|e| IoError::read_error(path, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_candidate_lines() {
        let content = "1.0\n  1.1  \n\n# comment\n2.0 # trailing\n";
        assert_eq!(parse_candidate_lines(content), vec!["1.0", "1.1", "2.0"]);
    }

    #[test]
    fn test_parse_candidate_lines_empty() {
        assert!(parse_candidate_lines("").is_empty());
        assert!(parse_candidate_lines("# only comments\n\n").is_empty());
    }

    #[test]
    fn test_read_candidates_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "1.0\n1.1-SNAPSHOT\n2.0").unwrap();

        let versions = read_candidates(file.path()).unwrap();
        assert_eq!(versions, vec!["1.0", "1.1-SNAPSHOT", "2.0"]);
    }

    #[test]
    fn test_read_candidates_missing_file() {
        let err = read_candidates(Path::new("/nonexistent/versions.txt")).unwrap_err();
        assert!(matches!(err, IoError::FileNotFound { .. }));
    }

    #[test]
    fn test_parse_batch() {
        let content = r#"[
            {"name": "junit", "current": "4.12", "versions": ["4.13", "5.0"]},
            {"name": "guava", "current": "30.0", "versions": [], "target": "[30.0,31.0)"}
        ]"#;
        let entries = parse_batch(content, Path::new("batch.json")).unwrap();

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].name, "junit");
        assert_eq!(entries[0].versions, vec!["4.13", "5.0"]);
        assert!(entries[0].target.is_none());
        assert_eq!(entries[1].target.as_deref(), Some("[30.0,31.0)"));
    }

    #[test]
    fn test_parse_batch_versions_default_to_empty() {
        let content = r#"[{"name": "a", "current": "1.0"}]"#;
        let entries = parse_batch(content, Path::new("batch.json")).unwrap();
        assert!(entries[0].versions.is_empty());
    }

    #[test]
    fn test_parse_batch_invalid_json() {
        let err = parse_batch("{not json", Path::new("batch.json")).unwrap_err();
        assert!(matches!(err, IoError::JsonParseError { .. }));
        assert!(err.to_string().contains("batch.json"));
    }

    #[test]
    fn test_read_batch_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"[{{"name": "a", "current": "1.0", "versions": ["1.1"]}}]"#).unwrap();

        let entries = read_batch(file.path()).unwrap();
        assert_eq!(entries[0].current, "1.0");
    }
}
