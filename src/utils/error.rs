//! Error handling for LaTeX generation
//!
//! This module provides a unified error type and result type for recording
//! and rendering operations.

use std::fmt;

/// Generation error type
#[derive(Debug, Clone)]
pub enum LatexError {
    /// An environment was closed without a matching open environment
    UnbalancedEnvironment { message: String },
    /// An environment scope was entered with no macro name recorded before it
    MissingEnvironmentName { message: String },
    /// The token log violated an internal invariant at render time
    MalformedLog { message: String },
    /// IO error (for writer-backed output sinks)
    IoError { message: String },
}

impl fmt::Display for LatexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LatexError::UnbalancedEnvironment { message } => {
                write!(f, "Unbalanced environment: {}", message)
            }
            LatexError::MissingEnvironmentName { message } => {
                write!(f, "Missing environment name: {}", message)
            }
            LatexError::MalformedLog { message } => {
                write!(f, "Malformed token log: {}", message)
            }
            LatexError::IoError { message } => {
                write!(f, "IO error: {}", message)
            }
        }
    }
}

impl std::error::Error for LatexError {}

impl From<std::io::Error> for LatexError {
    fn from(err: std::io::Error) -> Self {
        LatexError::IoError {
            message: err.to_string(),
        }
    }
}

/// Result type for recording and rendering operations
pub type LatexResult<T> = Result<T, LatexError>;

// Convenience constructors for errors
impl LatexError {
    pub fn unbalanced(message: impl Into<String>) -> Self {
        LatexError::UnbalancedEnvironment {
            message: message.into(),
        }
    }

    pub fn missing_name(message: impl Into<String>) -> Self {
        LatexError::MissingEnvironmentName {
            message: message.into(),
        }
    }

    pub fn malformed(message: impl Into<String>) -> Self {
        LatexError::MalformedLog {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unbalanced_display() {
        let err = LatexError::unbalanced("\\end with no open environment");
        assert!(err.to_string().contains("Unbalanced environment"));
        assert!(err.to_string().contains("no open environment"));
    }

    #[test]
    fn test_missing_name_display() {
        let err = LatexError::missing_name("scope entered on an empty log");
        assert!(err.to_string().contains("Missing environment name"));
    }

    #[test]
    fn test_malformed_display() {
        let err = LatexError::malformed("environment marker not followed by a name");
        assert!(err.to_string().contains("Malformed token log"));
    }

    #[test]
    fn test_from_io_error() {
        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
        let err = LatexError::from(io);
        assert!(matches!(err, LatexError::IoError { .. }));
        assert!(err.to_string().contains("pipe closed"));
    }
}
