use thiserror::Error;

/// Per-entry parse failure. Never fatal to a whole transcript: the caller
/// drops the entry and counts it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("malformed timestamp {text:?}: {reason}")]
    MalformedTimestamp { text: String, reason: String },
}

impl ParseError {
    pub fn malformed(text: &str, reason: impl Into<String>) -> Self {
        Self::MalformedTimestamp {
            text: text.to_string(),
            reason: reason.into(),
        }
    }
}

/// Failure of a single aggregation. Other aggregations over the same store
/// are unaffected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnalysisError {
    #[error("sentiment scores misaligned: {scores} score triples for {messages} messages")]
    ScoreAlignmentMismatch { scores: usize, messages: usize },
}
