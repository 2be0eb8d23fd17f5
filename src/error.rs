/// Munge error types for consistent error handling across modules
use std::fmt;

#[derive(Debug, Clone)]
pub enum MungeError {
    /// Configuration errors (no usable seed word or input path)
    Config(String),

    /// I/O errors (file open/create, read/write)
    Io(String),

    /// Generic errors that don't fit other categories
    Other(String),
}

impl fmt::Display for MungeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MungeError::Config(msg) => write!(f, "Configuration error: {}", msg),
            MungeError::Io(msg) => write!(f, "I/O error: {}", msg),
            MungeError::Other(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for MungeError {}

impl From<String> for MungeError {
    fn from(s: String) -> Self {
        MungeError::Other(s)
    }
}

impl From<&str> for MungeError {
    fn from(s: &str) -> Self {
        MungeError::Other(s.to_string())
    }
}

impl From<std::io::Error> for MungeError {
    fn from(err: std::io::Error) -> Self {
        MungeError::Io(err.to_string())
    }
}

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, MungeError>;
