//! Error types for the editor

use pagecraft_document::{CollectionKind, StyleProperty};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum EditorError {
    #[error("index {index} is out of range for {collection:?} (len {len})")]
    IndexOutOfRange {
        collection: CollectionKind,
        index: usize,
        len: usize,
    },

    #[error("section index {index} is out of range (len {len})")]
    SectionIndexOutOfRange { index: usize, len: usize },

    #[error("collection {collection:?} has no slot '{slot}'")]
    UnknownSlot {
        collection: CollectionKind,
        slot: String,
    },

    #[error("value '{value}' is not valid for style property {property:?}")]
    InvalidStyleValue {
        property: StyleProperty,
        value: String,
    },
}
