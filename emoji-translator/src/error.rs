use thiserror::Error;

/// Error types for the emoji translator
///
/// None of these escape from `translate`: mapping errors are recovered at
/// registry construction time and option errors are raised while parsing
/// caller input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TranslatorError {
    /// The custom mapping document could not be read
    #[error("Failed to read mapping file '{path}': {reason}")]
    MappingRead { path: String, reason: String },

    /// The custom mapping document is not valid JSON or has the wrong shape
    #[error("Failed to parse mapping file '{path}': {reason}")]
    MappingParse { path: String, reason: String },

    /// A density, mode or style value outside its enumerated set
    #[error("Invalid {kind} '{value}'")]
    InvalidOption { kind: &'static str, value: String },
}

/// Result type for translator operations
pub type TranslatorResult<T> = Result<T, TranslatorError>;
