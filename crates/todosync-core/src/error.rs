//! Error types for todosync-core

/// Result type for todosync-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in the sync pipeline
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Delimiter matched no line: {pattern}")]
    DelimiterNotFound { pattern: String },

    #[error("Delimiter matched {count} lines, expected exactly one: {pattern}")]
    DelimiterAmbiguous { pattern: String, count: usize },

    #[error("Block end (line {end}) precedes block start (line {start})")]
    InvalidRange { start: usize, end: usize },

    #[error("Failed to compile pattern {pattern:?}: {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("Filter kept no lines and strict mode is enabled")]
    EmptyResult,

    #[error("Document-edge sentinel is not allowed as the {side} delimiter")]
    SentinelNotAllowed { side: &'static str },
}

impl Error {
    pub fn invalid_pattern(pattern: impl Into<String>, source: regex::Error) -> Self {
        Self::InvalidPattern {
            pattern: pattern.into(),
            source,
        }
    }
}
