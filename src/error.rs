//! Error types shared by the engine and the client.
//!
//! "Field absent by design" never reaches this module: extractors report it as
//! `Ok(None)`. Everything here is a terminal failure for the chart build.

use std::fmt;

/// Error raised by a [`crate::client::Transport`] implementation. Carried
/// through [`ChartError::Transport`] unchanged.
pub type TransportError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// A required field could not be located or read in the markup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    /// Logical field name, e.g. `"rank"` or `"artist"`.
    pub field: String,
    /// Zero-based entry index when the failure happened inside an entry.
    pub entry: Option<usize>,
    pub reason: String,
}

impl ParseError {
    pub fn new(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            entry: None,
            reason: reason.into(),
        }
    }

    pub fn missing(field: impl Into<String>) -> Self {
        Self::new(field, "element not found")
    }

    pub fn at_entry(mut self, index: usize) -> Self {
        self.entry = Some(index);
        self
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.entry {
            Some(i) => write!(f, "field `{}` (entry {}): {}", self.field, i, self.reason),
            None => write!(f, "field `{}`: {}", self.field, self.reason),
        }
    }
}

impl std::error::Error for ParseError {}

#[derive(Debug, thiserror::Error)]
pub enum ChartError {
    /// The request itself is malformed (bad date, date and year together).
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// Unknown chart, or a date later than the newest published issue.
    #[error("chart not found: {0}")]
    NotFound(String),

    /// The page exists but carries no chart rows.
    #[error("no entries for chart `{name}` ({issue})")]
    EmptyResult { name: String, issue: String },

    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    /// Non-success, non-404 status from the origin.
    #[error("HTTP {status} fetching {url}")]
    Fetch { status: u16, url: String },

    #[error(transparent)]
    Transport(TransportError),

    #[error("serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),
}

pub type Result<T, E = ChartError> = std::result::Result<T, E>;
