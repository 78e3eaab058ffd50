//! Error handling for the CLI application

use std::fmt;

/// Custom error type for CLI-specific errors
#[derive(Debug)]
pub enum CliError {
    /// File not found or inaccessible
    FileNotFound(String),
    /// Invalid file pattern
    InvalidPattern(String),
    /// Configuration error
    ConfigError(String),
    /// Output destination cannot be created
    OutputUnusable(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::FileNotFound(path) => write!(f, "File not found: {path}"),
            CliError::InvalidPattern(pattern) => write!(f, "Invalid file pattern: {pattern}"),
            CliError::ConfigError(msg) => write!(f, "Configuration error: {msg}"),
            CliError::OutputUnusable(path) => write!(f, "Cannot create output: {path}"),
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
        let error = CliError::FileNotFound("corpus.txt".to_string());
        assert_eq!(error.to_string(), "File not found: corpus.txt");

        let error = CliError::InvalidPattern("[invalid".to_string());
        assert_eq!(error.to_string(), "Invalid file pattern: [invalid");

        let error = CliError::ConfigError("unknown locale 'tlh'".to_string());
        assert_eq!(error.to_string(), "Configuration error: unknown locale 'tlh'");

        let error = CliError::OutputUnusable("/no/such/dir/out.txt".to_string());
        assert_eq!(error.to_string(), "Cannot create output: /no/such/dir/out.txt");
    }

    #[test]
    fn test_error_trait_implementation() {
        let error = CliError::FileNotFound("corpus.txt".to_string());
        let _: &dyn std::error::Error = &error;
        assert!(format!("{error:?}").contains("FileNotFound"));
    }
}
