//! Application error types using thiserror
//!
//! Error hierarchy:
//! - RangeError: Malformed range specifications and empty intersections
//! - InvalidSegmentError: Inconsistent allow-major/minor/incremental policy
//! - ConfigError: Issues with CLI configuration
//! - IoError: Reading candidate and batch files
//!
//! "No update available" is never an error; it is reported as `None` or
//! as a skipped [`UpdateResult`](crate::domain::UpdateResult).

use std::path::PathBuf;
use thiserror::Error;

/// Application-level error type
#[derive(Error, Debug)]
pub enum AppError {
    /// Version range related errors
    #[error(transparent)]
    Range(#[from] RangeError),

    /// Segment policy errors
    #[error(transparent)]
    Segment(#[from] InvalidSegmentError),

    /// Configuration related errors
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// IO related errors
    #[error(transparent)]
    Io(#[from] IoError),
}

/// Errors raised while parsing or combining version ranges
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RangeError {
    /// The range specification could not be parsed
    #[error("malformed version range '{spec}': {message}")]
    Malformed { spec: String, message: String },

    /// Intersecting two ranges left no valid interval
    #[error("version ranges {left} and {right} do not overlap")]
    Empty { left: String, right: String },
}

/// A combination of allow-flags that cannot be expressed as a single unchanged segment
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error(
    "inconsistent segment policy: major={allow_major}, minor={allow_minor}, \
     incremental={allow_incremental} (a coarser segment cannot change while a finer one is frozen)"
)]
pub struct InvalidSegmentError {
    pub allow_major: bool,
    pub allow_minor: bool,
    pub allow_incremental: bool,
}

/// Errors related to configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Conflicting options
    #[error("conflicting options: {message}")]
    ConflictingOptions { message: String },

    /// Skip-resolution requested without a target version
    #[error("--skip-resolution is only valid if --target is set")]
    MissingTargetVersion,

    /// Neither positional candidates nor a candidates file were given
    #[error("no candidate versions supplied for '{artifact}'")]
    NoCandidates { artifact: String },

    /// Required option missing
    #[error("missing required option: {option}")]
    MissingOption { option: String },
}

/// Errors related to IO operations
#[derive(Error, Debug)]
pub enum IoError {
    /// Input file not found
    #[error("file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to read an input file
    #[error("failed to read {path}: {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Batch file is not valid JSON
    #[error("failed to parse JSON in {path}: {message}")]
    JsonParseError { path: PathBuf, message: String },
}

impl RangeError {
    /// Creates a new Malformed error
    pub fn malformed(spec: impl Into<String>, message: impl Into<String>) -> Self {
        RangeError::Malformed {
            spec: spec.into(),
            message: message.into(),
        }
    }

    /// Creates a new Empty error
    pub fn empty(left: impl Into<String>, right: impl Into<String>) -> Self {
        RangeError::Empty {
            left: left.into(),
            right: right.into(),
        }
    }
}

impl IoError {
    /// Creates a new FileNotFound error
    pub fn file_not_found(path: impl Into<PathBuf>) -> Self {
        IoError::FileNotFound { path: path.into() }
    }

    /// Creates a new ReadError, mapping `NotFound` to [`IoError::FileNotFound`]
    pub fn read_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        if source.kind() == std::io::ErrorKind::NotFound {
            return IoError::FileNotFound { path };
        }
        IoError::ReadError { path, source }
    }

    /// Creates a new JsonParseError
    pub fn json_parse_error(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        IoError::JsonParseError {
            path: path.into(),
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_error_malformed() {
        let err = RangeError::malformed("[1.0,2.0", "missing closing bracket");
        let msg = format!("{}", err);
        assert!(msg.contains("malformed version range"));
        assert!(msg.contains("[1.0,2.0"));
        assert!(msg.contains("missing closing bracket"));
    }

    #[test]
    fn test_range_error_empty() {
        let err = RangeError::empty("[1.0,2.0)", "[3.0,)");
        let msg = format!("{}", err);
        assert!(msg.contains("do not overlap"));
        assert!(msg.contains("[3.0,)"));
    }

    #[test]
    fn test_invalid_segment_error() {
        let err = InvalidSegmentError {
            allow_major: true,
            allow_minor: false,
            allow_incremental: true,
        };
        let msg = format!("{}", err);
        assert!(msg.contains("inconsistent segment policy"));
        assert!(msg.contains("major=true"));
        assert!(msg.contains("minor=false"));
    }

    #[test]
    fn test_config_error_missing_target() {
        let msg = format!("{}", ConfigError::MissingTargetVersion);
        assert!(msg.contains("--skip-resolution"));
    }

    #[test]
    fn test_config_error_conflicting_options() {
        let err = ConfigError::ConflictingOptions {
            message: "--quiet and --verbose cannot be used together".to_string(),
        };
        let msg = format!("{}", err);
        assert!(msg.contains("conflicting options"));
    }

    #[test]
    fn test_io_error_read_not_found_maps_to_file_not_found() {
        let source = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err = IoError::read_error("/missing/versions.txt", source);
        assert!(matches!(err, IoError::FileNotFound { .. }));
        assert!(format!("{}", err).contains("file not found"));
    }

    #[test]
    fn test_io_error_read_other() {
        let source = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = IoError::read_error("/protected", source);
        assert!(matches!(err, IoError::ReadError { .. }));
    }

    #[test]
    fn test_app_error_from_range_error() {
        let app_err: AppError = RangeError::malformed("(", "unbalanced").into();
        assert!(format!("{}", app_err).contains("malformed version range"));
    }

    #[test]
    fn test_app_error_from_segment_error() {
        let app_err: AppError = InvalidSegmentError {
            allow_major: true,
            allow_minor: true,
            allow_incremental: false,
        }
        .into();
        assert!(format!("{}", app_err).contains("inconsistent segment policy"));
    }

    #[test]
    fn test_app_error_from_io_error() {
        let app_err: AppError = IoError::file_not_found("/missing").into();
        assert!(format!("{}", app_err).contains("file not found"));
    }
}
