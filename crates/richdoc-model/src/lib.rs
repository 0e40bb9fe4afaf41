//! Shared rich-text document model.
//!
//! Editor payloads arrive as loosely-typed JSON trees whose exact shape
//! depends on which content backend produced them. This crate defines the
//! one [`Document`] / [`Node`] model that rendering works against, plus an
//! [`adapter`] per upstream payload format converting into that model.
//!
//! Adapters are total: absent, null, or structurally bogus input converts to
//! an empty document, and unrecognized node types are preserved as
//! [`Node::Unknown`] so their children still render. The only fallible entry
//! points are the `from_*_json` string parsers, which can hit real JSON
//! syntax errors.
//!
//! # Example
//!
//! ```
//! use richdoc_model::{Document, Node, TextFormat};
//! use serde_json::json;
//!
//! let payload = json!({"root": {"children": [
//!     {"type": "paragraph", "children": [
//!         {"type": "text", "text": "hi", "format": 1}
//!     ]}
//! ]}});
//! let doc = richdoc_model::adapter::lexical::document(&payload);
//! assert_eq!(
//!     doc.children,
//!     vec![Node::Paragraph {
//!         children: vec![Node::Text {
//!             text: "hi".to_owned(),
//!             format: TextFormat::BOLD,
//!         }],
//!     }]
//! );
//! ```

pub mod adapter;
mod error;
mod format;
mod node;

pub use error::DocumentError;
pub use format::TextFormat;
pub use node::{Document, ListKind, Node};
