use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Graph extracted and written
    Success = 0,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (pipenv failure, undecodable report, file I/O error, etc.)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Application-specific errors for dependency extraction.
///
/// `Execution` and `Decode` are the two failure kinds of the extraction
/// pipeline itself; both are terminal for the scanned project and are
/// surfaced to the caller unchanged. The remaining variants belong to the
/// CLI shell (paths, files, configuration).
#[derive(Debug, Error)]
pub enum DepsError {
    #[error("Failed to run `{command}` in {dir}\nDetails: {details}\n\n💡 Hint: {troubleshooting}\n   See: {link}")]
    Execution {
        command: String,
        dir: PathBuf,
        details: String,
        troubleshooting: String,
        link: String,
    },

    #[error("Failed to decode dependency tree\nThe following output could not be parsed as a `pipenv graph --json-tree` report:\n{raw}\n\n💡 Hint: Try running the command on your own and check for any errors")]
    Decode {
        raw: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid project path: {path}\nReason: {reason}\n\n💡 Hint: Please specify a valid project directory")]
    InvalidProjectPath { path: PathBuf, reason: String },

    #[error("Failed to read file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file exists and you have read permissions")]
    FileReadError { path: PathBuf, details: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    #[error("Invalid config file: {path}\nDetails: {details}\n\n💡 Hint: {hint}")]
    ConfigError {
        path: PathBuf,
        details: String,
        hint: String,
    },
}

impl DepsError {
    /// The raw report text attached to a decode failure, if this is one.
    pub fn raw_output(&self) -> Option<&str> {
        match self {
            DepsError::Decode { raw, .. } => Some(raw),
            _ => None,
        }
    }
}
