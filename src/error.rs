use thiserror::Error;

/// Convenience result type for the fallible edges of the crate.
pub type TransformResult<T> = Result<T, TransformError>;

/// Error type returned by the strict parsers and the JSON bridge.
///
/// Combinators themselves never fail: malformed input degrades to [`crate::types::Value::Undefined`].
/// This enum only covers the places where a caller explicitly asks for validation.
#[derive(Debug, Error)]
pub enum TransformError {
    /// An operator symbol that [`crate::transform::Operator`] does not recognize.
    #[error("unknown operator '{symbol}'")]
    UnknownOperator { symbol: String },

    /// A sort direction that [`crate::processing::Direction`] does not recognize.
    #[error("unknown sort direction '{direction}' (expected inc/increasing or dec/decreasing)")]
    UnknownDirection { direction: String },

    /// Underlying JSON parse error.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// JSON input that was expected to hold a sequence of items.
    #[error("expected a json array or ndjson, found {found}")]
    NotAnArray { found: String },
}
