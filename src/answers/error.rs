use thiserror::Error;

/// Everything that can go wrong while resolving a question.
///
/// All variants end up as `Outcome::Failure` carrying the `Display` text.
#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("question contains no words")]
    EmptyQuestion,
    #[error("network error: {0}")]
    Network(String),
    #[error("HTTP {0} for {1}")]
    Status(u16, String),
    #[error("failed to parse summary: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("failed to decode image: {0}")]
    ImageDecode(String),
}
