//! # Page store
//!
//! Holds the canonical record for one edit session and exposes the single
//! mutation entrypoint. The store is total: updates never fail, and a store
//! whose session has been torn down treats late updates (a fetch or save
//! resolving after navigation) as no-ops instead of mutating discarded
//! state.

use pagecraft_document::PageData;
use tracing::{debug, instrument};

use crate::actions::EditAction;
use crate::errors::EditorError;
use crate::patch::PagePatch;

#[derive(Debug)]
pub struct PageStore {
    /// Canonical record; `None` once the session is torn down.
    state: Option<PageData>,

    /// Increments on every applied update.
    version: u64,

    /// Set on update, cleared when the gateway confirms a save.
    dirty: bool,
}

impl PageStore {
    pub fn new(page: PageData) -> Self {
        Self {
            state: Some(page),
            version: 0,
            dirty: false,
        }
    }

    /// Current record, if the session is still live.
    pub fn page(&self) -> Option<&PageData> {
        self.state.as_ref()
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn is_closed(&self) -> bool {
        self.state.is_none()
    }

    /// Merge a partial record into the canonical state. Total, synchronous,
    /// and a no-op after teardown.
    #[instrument(level = "debug", skip(self, patch), fields(version = self.version))]
    pub fn update(&mut self, patch: PagePatch) {
        match self.state.as_mut() {
            Some(page) => {
                patch.apply_to(page);
                self.version += 1;
                self.dirty = true;
            }
            None => {
                debug!("update after teardown ignored");
            }
        }
    }

    /// Replace the whole record, e.g. with a freshly fetched page.
    pub fn reset(&mut self, page: PageData) {
        if self.is_closed() {
            debug!("reset after teardown ignored");
            return;
        }
        self.state = Some(page);
        self.version += 1;
        self.dirty = false;
    }

    /// Validate an edit action against the current record and apply it
    /// through `update`. Actions against a closed store are no-ops.
    pub fn apply(&mut self, action: EditAction) -> Result<(), EditorError> {
        let Some(page) = self.state.as_ref() else {
            debug!("edit action after teardown ignored");
            return Ok(());
        };
        let patch = action.into_patch(page)?;
        self.update(patch);
        Ok(())
    }

    /// The gateway persisted the current state.
    pub fn mark_saved(&mut self) {
        self.dirty = false;
    }

    /// Tear down the session's state. Further updates are no-ops.
    pub fn close(&mut self) {
        self.state = None;
    }
}
