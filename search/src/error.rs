//! Typed search errors.
//!
//! `SearchError` represents pre-flight failures only. A search that runs
//! always produces a [`crate::result::SearchResult`], including when no goal
//! is reachable; that outcome is a [`crate::result::Termination`], not an
//! error.

/// Typed failure for pre-flight search validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// The policy cannot drive a search (e.g. a zero expansion budget).
    InvalidPolicy { detail: String },
}

impl std::fmt::Display for SearchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidPolicy { detail } => write!(f, "invalid search policy: {detail}"),
        }
    }
}

impl std::error::Error for SearchError {}
