//! Error types for the reflective bridge

use std::fmt;

/// Errors raised while converting between host values and Watson values.
#[derive(Debug)]
pub enum Error {
    /// A conversion failure reported by serde machinery
    Message(String),

    /// The host value has no Watson mapping; carries a type description
    Unconvertible(String),
}

impl Error {
    pub(crate) fn unconvertible(description: impl Into<String>) -> Self {
        Error::Unconvertible(description.into())
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Message(msg) => write!(f, "{}", msg),
            Error::Unconvertible(what) => write!(f, "can't convert {}", what),
        }
    }
}

impl std::error::Error for Error {}

impl serde::ser::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Message(msg.to_string())
    }
}

impl serde::de::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Message(msg.to_string())
    }
}
