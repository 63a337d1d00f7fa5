//! # Edit session
//!
//! One store plus one selection per editing session; nothing is shared
//! across sessions. The selection is transient UI state: it never touches
//! the record and is never persisted. Both render surfaces read it from
//! here instead of from ambient globals.

use pagecraft_document::{FieldId, PageData};
use pagecraft_evaluator::{outline, render_page, Node, OutlineEntry};
use tracing::debug;

use crate::actions::EditAction;
use crate::errors::EditorError;
use crate::patch::PagePatch;
use crate::store::PageStore;

/// At most one field is highlighted at any time.
#[derive(Debug, Default)]
pub struct Selection {
    current: Option<FieldId>,
}

impl Selection {
    /// Atomically replace any prior selection.
    pub fn select(&mut self, id: FieldId) {
        debug!(field = %id, "field selected");
        self.current = Some(id);
    }

    pub fn clear(&mut self) {
        self.current = None;
    }

    pub fn current(&self) -> Option<&FieldId> {
        self.current.as_ref()
    }

    pub fn is_selected(&self, id: &FieldId) -> bool {
        self.current.as_ref() == Some(id)
    }
}

/// Single edit session over one page record.
pub struct EditSession {
    /// Session identifier, for logs only.
    pub id: String,

    store: PageStore,
    selection: Selection,
}

impl EditSession {
    /// Open a session over an existing record (fetched page).
    pub fn new(id: impl Into<String>, page: PageData) -> Self {
        Self {
            id: id.into(),
            store: PageStore::new(page),
            selection: Selection::default(),
        }
    }

    /// Open a session over the built-in template (new page).
    pub fn from_template(id: impl Into<String>) -> Self {
        Self::new(id, PageData::template())
    }

    pub fn page(&self) -> Option<&PageData> {
        self.store.page()
    }

    pub fn store(&self) -> &PageStore {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut PageStore {
        &mut self.store
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn apply(&mut self, action: EditAction) -> Result<(), EditorError> {
        self.store.apply(action)
    }

    pub fn update(&mut self, patch: PagePatch) {
        self.store.update(patch);
    }

    pub fn select_field(&mut self, id: FieldId) {
        self.selection.select(id);
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    /// Render the preview tree with the current selection highlighted.
    pub fn preview(&self) -> Option<Node> {
        self.store
            .page()
            .map(|page| render_page(page, self.selection.current()))
    }

    /// Section outline for the editor panel, derived from the same
    /// composition as the preview.
    pub fn outline(&self) -> Vec<OutlineEntry> {
        self.store.page().map(outline).unwrap_or_default()
    }

    /// End the session: drop the record and the highlight. Late gateway
    /// callbacks hitting this session become no-ops.
    pub fn teardown(&mut self) {
        self.selection.clear();
        self.store.close();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pagecraft_document::{SectionId, StyleField};

    #[test]
    fn selection_is_atomic() {
        let mut selection = Selection::default();
        assert!(selection.current().is_none());

        let title = FieldId::scalar(StyleField::Title);
        let comment = FieldId::item(SectionId::Testimonials, 0, "comment");

        selection.select(title.clone());
        assert!(selection.is_selected(&title));

        selection.select(comment.clone());
        assert!(selection.is_selected(&comment));
        assert!(!selection.is_selected(&title));

        selection.clear();
        assert!(selection.current().is_none());
    }

    #[test]
    fn session_preview_reflects_selection() {
        let mut session = EditSession::from_template("session-1");
        session.select_field(FieldId::scalar(StyleField::Title));

        let html = session.preview().unwrap().to_html();
        assert!(html.contains("data-selected=\"true\""));

        session.clear_selection();
        let html = session.preview().unwrap().to_html();
        assert!(!html.contains("data-selected"));
    }

    #[test]
    fn teardown_makes_everything_a_no_op() {
        let mut session = EditSession::from_template("session-1");
        session.teardown();

        assert!(session.page().is_none());
        assert!(session.preview().is_none());
        assert!(session.outline().is_empty());

        // A late fetch completion must not resurrect state.
        session.update(PagePatch {
            title: Some("late".to_string()),
            ..PagePatch::default()
        });
        assert!(session.page().is_none());
    }

    #[test]
    fn outline_and_preview_share_visibility() {
        let mut session = EditSession::from_template("session-1");
        session
            .apply(EditAction::AddSection {
                id: SectionId::Faq,
            })
            .unwrap();

        // faq has no items yet, so neither surface shows it.
        let outline_ids: Vec<SectionId> = session.outline().iter().map(|e| e.id).collect();
        assert!(!outline_ids.contains(&SectionId::Faq));
        let html = session.preview().unwrap().to_html();
        assert!(!html.contains("id=\"faq\""));
    }
}
