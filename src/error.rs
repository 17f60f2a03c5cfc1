use thiserror::Error;

/// Errors that can occur while loading or converting a knowledge base.
#[derive(Error, Debug)]
pub enum KnowledgeBaseError {
    #[error("Failed to parse knowledge base JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Failed to read knowledge base file '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid custom knowledge base data: {0}")]
    Conversion(String),
}

/// Errors raised at the evaluation boundary for invalid user input.
///
/// The pure math below the boundary assumes its preconditions hold; these
/// variants are the only failures the engine surfaces.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ProfileError {
    #[error("Height must be positive, got {height_cm} cm")]
    NonPositiveHeight { height_cm: f64 },
}
