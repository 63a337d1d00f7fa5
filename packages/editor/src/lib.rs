//! # Pagecraft Editor
//!
//! Core editing engine for pagecraft pages.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │ document: PageData record + vocabulary      │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ editor: session lifecycle + edit actions    │
//! │  - One store + one selection per session    │
//! │  - Actions validate, then compile to a      │
//! │    patch through the single update path     │
//! │  - Late gateway callbacks become no-ops     │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ evaluator: record → sections + styles       │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## Core Principles
//!
//! 1. **The record is the source of truth**: composed sections and resolved
//!    styles are derived views
//! 2. **One entrypoint**: every change funnels through `PageStore::update`
//! 3. **Total updates**: the store never fails; validation happens in the
//!    action layer before any state changes
//! 4. **Transient selection**: the highlight is session state, never
//!    persisted, and read by both render surfaces from the same place
//!
//! ## Usage
//!
//! ```rust
//! use pagecraft_editor::{EditAction, EditSession};
//! use pagecraft_document::{FieldId, SectionId, StyleField};
//!
//! let mut session = EditSession::from_template("client-1");
//!
//! session.apply(EditAction::AddSection { id: SectionId::Faq })?;
//! session.select_field(FieldId::scalar(StyleField::Title));
//!
//! let preview = session.preview().unwrap();
//! let outline = session.outline();
//! # Ok::<(), pagecraft_editor::EditorError>(())
//! ```

mod actions;
mod errors;
mod patch;
mod session;
mod store;

pub use actions::EditAction;
pub use errors::EditorError;
pub use patch::{ColorPatch, PagePatch};
pub use session::{EditSession, Selection};
pub use store::PageStore;

// Re-export common types for convenience
pub use pagecraft_document::PageData;
pub use pagecraft_evaluator::Node;
