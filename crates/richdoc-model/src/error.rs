//! Error types for document conversion.

/// Error parsing a serialized document.
///
/// Structural problems inside a parsed payload are never errors — adapters
/// degrade per node instead. Only the JSON text itself failing to parse
/// surfaces here.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum DocumentError {
    /// The payload is not valid JSON.
    #[error("JSON parse error")]
    Json(#[from] serde_json::Error),
}
