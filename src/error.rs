//! Error types for graphkeys
//!
//! Provides a unified error type for all key codec operations.

use thiserror::Error;

/// Result type alias using KeyError
pub type Result<T> = std::result::Result<T, KeyError>;

/// Unified error type for key encoding and parsing
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KeyError {
    // -------------------------------------------------------------------------
    // Parse Errors (malformed input, recoverable)
    // -------------------------------------------------------------------------
    #[error("Empty key")]
    Empty,

    #[error("Truncated key: {field} needs {needed} bytes, {remaining} remaining")]
    Truncated {
        field: &'static str,
        needed: usize,
        remaining: usize,
    },

    #[error("Invalid attribute: {0}")]
    InvalidAttr(String),

    #[error("Unknown key prefix: 0x{0:02x}")]
    UnknownPrefix(u8),

    #[error("Unknown key type: 0x{0:02x}")]
    UnknownKeyType(u8),

    // -------------------------------------------------------------------------
    // Contract Errors (caller bugs)
    // -------------------------------------------------------------------------
    #[error("Attribute too long: {0} bytes (max {max})", max = u16::MAX)]
    AttrTooLong(usize),

    #[error("Invalid base key for split: {0}")]
    InvalidBaseKey(String),
}

impl KeyError {
    /// True for errors caused by malformed stored bytes rather than caller bugs
    pub fn is_malformed(&self) -> bool {
        !matches!(self, KeyError::AttrTooLong(_) | KeyError::InvalidBaseKey(_))
    }
}
