//! Response definitions
//!
//! Represents the outcome of a command, ready to print.

use std::fmt;

use crate::error::CatalogError;

/// Response status codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Ok,
    NotFound,
    InvalidState,
    Error,
}

impl From<&CatalogError> for Status {
    fn from(err: &CatalogError) -> Self {
        match err {
            CatalogError::NotFound { .. } => Status::NotFound,
            CatalogError::InvalidState { .. } => Status::InvalidState,
            _ => Status::Error,
        }
    }
}

/// A response to show the caller
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    /// Status code
    pub status: Status,

    /// Output lines, in display order
    pub lines: Vec<String>,
}

impl Response {
    pub fn new(status: Status, lines: Vec<String>) -> Self {
        Self { status, lines }
    }

    /// Create an OK response with a single message
    pub fn ok(message: impl Into<String>) -> Self {
        Self::new(Status::Ok, vec![message.into()])
    }

    /// Create a response carrying the error's own message
    pub fn from_error(err: &CatalogError) -> Self {
        Self::new(Status::from(err), vec![err.to_string()])
    }

    /// Create a response with the error's status and a caller-facing message
    pub fn failed(err: &CatalogError, message: impl Into<String>) -> Self {
        Self::new(Status::from(err), vec![message.into()])
    }

    pub fn is_ok(&self) -> bool {
        self.status == Status::Ok
    }
}

impl fmt::Display for Response {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, line) in self.lines.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            f.write_str(line)?;
        }
        Ok(())
    }
}
