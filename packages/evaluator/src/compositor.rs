//! # Compositor
//!
//! Pure mapping from the canonical record to the ordered, filtered list of
//! sections to render. Every render surface (editor outline, live preview)
//! must go through [`compose`] so they always agree on what is visible.

use pagecraft_document::{PageData, SectionId};
use serde::Serialize;
use tracing::{debug, instrument};

use crate::registry;
use crate::vdom::Node;

/// One visible section, in render order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComposedSection {
    pub id: SectionId,
    pub title: &'static str,
    pub body: Node,
}

/// Walk `sectionOrder`, dropping ids the registry does not know and
/// sections whose `has_content` predicate is false, preserving order.
#[instrument(level = "debug", skip(page), fields(order_len = page.section_order.len()))]
pub fn compose(page: &PageData) -> Vec<ComposedSection> {
    let mut sections = Vec::new();

    for raw_id in &page.section_order {
        let Some(id) = SectionId::parse(raw_id) else {
            debug!(%raw_id, "dropping unknown section id");
            continue;
        };
        if !registry::has_content(id, page) {
            debug!(section = %id, "dropping section without content");
            continue;
        }
        sections.push(ComposedSection {
            id,
            title: registry::get(id).title,
            body: registry::render(id, page),
        });
    }

    sections
}

#[cfg(test)]
mod tests {
    use super::*;
    use pagecraft_document::Feature;

    fn visible_ids(page: &PageData) -> Vec<SectionId> {
        compose(page).into_iter().map(|s| s.id).collect()
    }

    #[test]
    fn output_never_exceeds_order_and_preserves_sequence() {
        let mut page = PageData::default();
        page.features.push(Feature::default());
        page.about_title = "About".to_string();

        let composed = compose(&page);
        assert!(composed.len() <= page.section_order.len());

        // Surviving ids appear in sectionOrder's relative order.
        let order: Vec<&str> = page.section_order.iter().map(String::as_str).collect();
        let mut last_position = 0;
        for section in &composed {
            let position = order
                .iter()
                .position(|id| *id == section.id.as_str())
                .unwrap();
            assert!(position >= last_position);
            last_position = position;
        }
    }

    #[test]
    fn unknown_ids_are_dropped_not_rejected() {
        let mut page = PageData::default();
        page.section_order = vec![
            "hero".to_string(),
            "team".to_string(),
            "services".to_string(),
            "contact".to_string(),
        ];

        assert_eq!(visible_ids(&page), vec![SectionId::Hero, SectionId::Contact]);
    }

    #[test]
    fn empty_collection_excludes_section_and_one_item_includes_it() {
        let mut page = PageData::default();
        assert!(!visible_ids(&page).contains(&SectionId::Features));

        page.features.push(Feature {
            title: "Fast".to_string(),
            description: String::new(),
        });
        assert!(visible_ids(&page).contains(&SectionId::Features));
    }

    #[test]
    fn titles_come_from_the_registry() {
        let page = PageData::default();
        let composed = compose(&page);
        let hero = composed.iter().find(|s| s.id == SectionId::Hero).unwrap();
        assert_eq!(hero.title, "Hero");
    }
}
