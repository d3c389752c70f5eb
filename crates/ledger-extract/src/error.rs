//! Extraction error types.

/// Errors raised while building the extraction pipeline.
///
/// Input text never produces an error: text without matches simply yields
/// empty output.
#[derive(Debug, thiserror::Error)]
pub enum ExtractError {
    #[error("Invalid identifier width {min}..={max}: need 1 <= min <= max")]
    InvalidWidth { min: usize, max: usize },

    #[error("Failed to compile pattern: {0}")]
    Pattern(#[from] regex_lite::Error),
}
