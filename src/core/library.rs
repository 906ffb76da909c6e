use std::fmt;
use std::fmt::{Display, Formatter};
use serde::{Deserialize, Serialize};

#[derive(Debug)]
pub enum LibraryError {
    DuplicateKey {
        message: String,
    },
    NotFound {
        message: String,
    },
    Validation {
        message: String,
        reason_code: Option<String>,
    },
    // A stored record that could not be parsed. Line numbers
    // are 1-based and only present for records read from the data file.
    Serialization {
        message: String,
        line: Option<usize>,
    },
    Io {
        message: String,
        path: Option<String>,
    },
}

impl LibraryError {
    pub fn duplicate_key(message: &str) -> LibraryError {
        LibraryError::DuplicateKey { message: message.to_string() }
    }

    pub fn not_found(message: &str) -> LibraryError {
        LibraryError::NotFound { message: message.to_string() }
    }

    pub fn validation(message: &str, reason_code: Option<String>) -> LibraryError {
        LibraryError::Validation { message: message.to_string(), reason_code }
    }

    pub fn serialization(message: &str) -> LibraryError {
        LibraryError::Serialization { message: message.to_string(), line: None }
    }

    pub fn malformed_line(message: &str, line: usize) -> LibraryError {
        LibraryError::Serialization { message: message.to_string(), line: Some(line) }
    }

    pub fn io(message: &str, path: Option<String>) -> LibraryError {
        LibraryError::Io { message: message.to_string(), path }
    }

    // Attaches the file path to an io error raised without one.
    pub fn with_path(self, file: &str) -> LibraryError {
        match self {
            LibraryError::Io { message, path: None } => {
                LibraryError::Io { message, path: Some(file.to_string()) }
            }
            other => other,
        }
    }
}

impl std::error::Error for LibraryError {}

impl From<std::io::Error> for LibraryError {
    fn from(err: std::io::Error) -> Self {
        LibraryError::io(format!("{}", err).as_str(), None)
    }
}

impl Display for LibraryError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            LibraryError::DuplicateKey { message } => {
                write!(f, "{}", message)
            }
            LibraryError::NotFound { message } => {
                write!(f, "{}", message)
            }
            LibraryError::Validation { message, reason_code } => {
                match reason_code {
                    Some(code) => write!(f, "{} ({})", message, code),
                    None => write!(f, "{}", message),
                }
            }
            LibraryError::Serialization { message, line } => {
                match line {
                    Some(line) => write!(f, "line {}: {}", line, message),
                    None => write!(f, "{}", message),
                }
            }
            LibraryError::Io { message, path } => {
                match path {
                    Some(path) => write!(f, "{}: {}", path, message),
                    None => write!(f, "{}", message),
                }
            }
        }
    }
}

/// A specialized Result type for catalog operations.
pub type LibraryResult<T> = Result<T, LibraryError>;

// Lending status of a single copy. The flat file stores it as "1" / "0".
#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize, Deserialize)]
pub enum BookStatus {
    Available,
    Borrowed,
}

impl BookStatus {
    pub fn is_available(&self) -> bool {
        *self == BookStatus::Available
    }

    pub fn flag(&self) -> &'static str {
        match self {
            BookStatus::Available => "1",
            BookStatus::Borrowed => "0",
        }
    }

    // Only an exact "1" means available; anything else, including garbage, is borrowed.
    pub fn from_flag(flag: &str) -> BookStatus {
        if flag == "1" {
            BookStatus::Available
        } else {
            BookStatus::Borrowed
        }
    }
}

impl Display for BookStatus {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            BookStatus::Available => write!(f, "Available"),
            BookStatus::Borrowed => write!(f, "Borrowed"),
        }
    }
}

// Result of asking a book to change its lending status.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize, Deserialize)]
pub enum TransitionOutcome {
    Changed,
    Unchanged,
}

impl TransitionOutcome {
    pub fn is_changed(&self) -> bool {
        *self == TransitionOutcome::Changed
    }
}
