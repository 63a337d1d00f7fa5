//! # Pagecraft Document
//!
//! The canonical page record and its typed vocabulary.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │ document: PageData + typed style vocabulary │
//! │  - Persisted record shape (camelCase wire)  │
//! │  - Closed set of styleable fields           │
//! │  - Stable field identifiers                 │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ editor: PageStore lifecycle + edit actions  │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ evaluator: PageData → composed sections     │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! The record is the source of truth; composed sections and resolved styles
//! are derived views. Loading is lenient: a sparse or partially malformed
//! stored record always produces a usable `PageData`.

mod field;
mod page;
mod schema;
mod section;
mod style;
mod util;

pub use field::{FieldId, FieldIdError};
pub use page::{
    default_section_order, ColorPalette, FaqItem, Feature, GalleryItem, PageData, PricingTier,
    Testimonial,
};
pub use schema::{CollectionItem, CollectionKind, DescriptorKind, FieldDescriptor, SlotAccess};
pub use section::{SectionId, UnknownSectionError};
pub use style::{
    BorderStyle, FieldKind, FontStyle, FontWeight, ObjectFit, StyleBag, StyleField, StyleProperty,
    StyleValueError, TextAlign, TextDecoration,
};
