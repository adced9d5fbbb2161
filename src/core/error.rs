//! Error types for the search engines.
//!
//! Exhausting a graph-search frontier is not an error: it produces a
//! [`Plan`](crate::search::Plan) marked as exhausted. Errors are reserved
//! for requests the engines refuse to answer.

use thiserror::Error;

/// Main error type for the crate.
#[derive(Error, Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum SearchError {
    #[error("not implemented: {what}")]
    NotImplemented { what: String },

    #[error("invalid search depth {depth}: depth must be at least one full round")]
    InvalidDepth { depth: u32 },

    #[error("invalid agent count {count}: expected 1 to 256 agents")]
    InvalidAgentCount { count: usize },

    #[error("unknown {kind} '{name}'")]
    UnknownName { kind: &'static str, name: String },

    #[error("invalid layout at line {line}, column {column}: {message}")]
    InvalidLayout {
        line: usize,
        column: usize,
        message: String,
    },
}

impl SearchError {
    /// Shorthand for a missing capability.
    pub fn not_implemented(what: impl Into<String>) -> Self {
        Self::NotImplemented { what: what.into() }
    }
}

/// Result alias for crate operations.
pub type Result<T> = std::result::Result<T, SearchError>;
