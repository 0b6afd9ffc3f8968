//! Error handling for the CLI application

use std::fmt;

/// CLI-specific errors
#[derive(Debug)]
pub enum CliError {
    /// File not found or inaccessible
    FileNotFound(String),
    /// Invalid file pattern
    InvalidPattern(String),
    /// Configuration error
    ConfigError(String),
    /// Neither text arguments nor input files were given
    NoInput(&'static str),
    /// Break test file line that does not follow the test format
    MalformedTestLine {
        /// 1-based line number
        line: usize,
        /// What is wrong with it
        reason: String,
    },
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::FileNotFound(path) => write!(f, "File not found: {path}"),
            CliError::InvalidPattern(pattern) => write!(f, "Invalid file pattern: {pattern}"),
            CliError::ConfigError(msg) => write!(f, "Configuration error: {msg}"),
            CliError::NoInput(command) => {
                write!(f, "{command}: give text arguments or at least one --input file")
            }
            CliError::MalformedTestLine { line, reason } => write!(f, "Line {line}: {reason}"),
        }
    }
}

impl std::error::Error for CliError {}

/// Result type alias for CLI operations
pub type CliResult<T> = Result<T, anyhow::Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            CliError::FileNotFound("test.txt".to_string()).to_string(),
            "File not found: test.txt"
        );
        assert_eq!(
            CliError::InvalidPattern("[invalid".to_string()).to_string(),
            "Invalid file pattern: [invalid"
        );
        assert_eq!(
            CliError::ConfigError("bad format".to_string()).to_string(),
            "Configuration error: bad format"
        );
        assert_eq!(
            CliError::NoInput("show").to_string(),
            "show: give text arguments or at least one --input file"
        );
        assert_eq!(
            CliError::MalformedTestLine {
                line: 7,
                reason: "missing leading \u{00F7}".to_string()
            }
            .to_string(),
            "Line 7: missing leading \u{00F7}"
        );
    }

    #[test]
    fn test_converts_into_anyhow() {
        let failure: CliResult<()> = Err(CliError::FileNotFound("ファイル.txt".to_string()).into());
        let err = failure.unwrap_err();
        assert!(err.downcast_ref::<CliError>().is_some());
        assert!(err.to_string().contains("ファイル.txt"));
    }
}
