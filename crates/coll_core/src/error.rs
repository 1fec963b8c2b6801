//! Structured error type shared by every collection in the crate.

use std::error::Error as StdError;
use std::fmt;

use thiserror::Error;

/// Category of a contract violation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InvalidArgument,
    NullArgument,
    OutOfRange,
    KeyNotFound,
    UnsupportedOperation,
    /// The receiver is in a state where the call cannot proceed, e.g. a live
    /// view whose store was modified mid-pass or has been dropped.
    InvalidOperation,
}

impl ErrorKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorKind::InvalidArgument => "invalid-argument",
            ErrorKind::NullArgument => "null-argument",
            ErrorKind::OutOfRange => "out-of-range",
            ErrorKind::KeyNotFound => "missing-key",
            ErrorKind::UnsupportedOperation => "unsupported-operation",
            ErrorKind::InvalidOperation => "invalid-operation",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A categorized error carrying an already-resolved message.
///
/// Built through the constructors in [`crate::errors`]; never stored, only
/// propagated.
#[derive(Error, Debug)]
#[error("{message}")]
pub struct CollectionError {
    kind: ErrorKind,
    message: String,
    param: Option<String>,
    #[source]
    source: Option<Box<dyn StdError + Send + Sync + 'static>>,
}

pub type CollectionResult<T> = Result<T, CollectionError>;

impl CollectionError {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            param: None,
            source: None,
        }
    }

    pub fn with_param(mut self, param: impl Into<String>) -> Self {
        self.param = Some(param.into());
        self
    }

    pub fn with_source(mut self, source: impl StdError + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Name of the offending parameter, when the violation concerns one.
    pub fn param(&self) -> Option<&str> {
        self.param.as_deref()
    }
}
