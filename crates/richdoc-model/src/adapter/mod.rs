//! Adapters from upstream editor payloads to the shared model.
//!
//! Two content backends feed this repository, each with its own serialized
//! document shape. Rather than maintaining one renderer per backend, each
//! format gets a thin adapter into [`Document`](crate::Document) and the
//! renderer exists once.
//!
//! Adapters are total functions over [`serde_json::Value`]: whatever arrives,
//! a document comes back. Missing or null input is an empty document, a
//! child that is not an object contributes nothing, and unrecognized node
//! types are kept as [`Node::Unknown`](crate::Node::Unknown) so their
//! children still convert.

pub mod legacy;
pub mod lexical;

use crate::error::DocumentError;
use crate::node::Document;

impl Document {
    /// Parse a serialized lexical-editor payload.
    ///
    /// # Errors
    ///
    /// Returns [`DocumentError::Json`] if `json` is not valid JSON. A valid
    /// JSON value of the wrong shape is not an error — it converts to an
    /// empty or partial document.
    pub fn from_lexical_json(json: &str) -> Result<Self, DocumentError> {
        let value: serde_json::Value = serde_json::from_str(json)?;
        Ok(lexical::document(&value))
    }

    /// Parse a serialized legacy-editor payload.
    ///
    /// # Errors
    ///
    /// Returns [`DocumentError::Json`] if `json` is not valid JSON.
    pub fn from_legacy_json(json: &str) -> Result<Self, DocumentError> {
        let value: serde_json::Value = serde_json::from_str(json)?;
        Ok(legacy::document(&value))
    }
}
