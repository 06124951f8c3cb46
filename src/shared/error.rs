use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// Code 2 matches what clap uses for argument parsing failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Graph built and presented
    Success = 0,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (config, registry file, output I/O, etc.)
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

/// Application-specific errors for dependency graph building.
///
/// Unknown packages are deliberately absent: they resolve to an empty
/// dependency list instead of failing.
#[derive(Debug, Error)]
pub enum GraphError {
    /// The backing data of a dependency source could not be loaded.
    #[error("Dependency source unavailable: {path}\nDetails: {details}\n\n💡 Hint: Check that the registry file exists and maps package names to lists of names")]
    SourceUnavailable { path: PathBuf, details: String },

    #[error("Invalid configuration: '{field}'\nReason: {reason}\n\n💡 Hint: Set it in the config file or pass it on the command line")]
    InvalidConfig { field: String, reason: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    #[error("Invalid project path: {path}\nReason: {reason}\n\n💡 Hint: Please specify a valid project directory")]
    InvalidProjectPath { path: PathBuf, reason: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_code_values() {
        assert_eq!(ExitCode::Success.as_i32(), 0);
        assert_eq!(ExitCode::InvalidArguments.as_i32(), 2);
        assert_eq!(ExitCode::ApplicationError.as_i32(), 3);
    }

    #[test]
    fn test_exit_code_display() {
        assert_eq!(format!("{}", ExitCode::Success), "Success (0)");
        assert_eq!(
            format!("{}", ExitCode::InvalidArguments),
            "Invalid Arguments (2)"
        );
        assert_eq!(
            format!("{}", ExitCode::ApplicationError),
            "Application Error (3)"
        );
    }

    #[test]
    fn test_source_unavailable_display() {
        let error = GraphError::SourceUnavailable {
            path: PathBuf::from("/data/test_repo.json"),
            details: "expected value at line 1 column 1".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Dependency source unavailable"));
        assert!(display.contains("/data/test_repo.json"));
        assert!(display.contains("expected value"));
        assert!(display.contains("💡 Hint:"));
    }

    #[test]
    fn test_invalid_config_display() {
        let error = GraphError::InvalidConfig {
            field: "max_depth".to_string(),
            reason: "must be an integer >= 0".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Invalid configuration: 'max_depth'"));
        assert!(display.contains("must be an integer >= 0"));
    }

    #[test]
    fn test_file_write_error_display() {
        let error = GraphError::FileWriteError {
            path: PathBuf::from("/test/graph.html"),
            details: "Permission denied".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Failed to write to file"));
        assert!(display.contains("/test/graph.html"));
        assert!(display.contains("Permission denied"));
    }

    #[test]
    fn test_invalid_project_path_display() {
        let error = GraphError::InvalidProjectPath {
            path: PathBuf::from("/invalid/path"),
            reason: "Directory does not exist".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Invalid project path"));
        assert!(display.contains("Directory does not exist"));
    }
}
