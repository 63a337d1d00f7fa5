//! # Section registry
//!
//! The fixed catalog of sections a page can show. Each entry knows its
//! human title, whether the current record gives it anything to render,
//! and how to render its body.

use pagecraft_document::{PageData, SectionId};
use tracing::debug;

use crate::sections;
use crate::vdom::Node;

/// Static catalog entry.
#[derive(Debug, Clone, Copy)]
pub struct SectionMeta {
    pub id: SectionId,
    pub title: &'static str,
    pub description: &'static str,
}

pub static SECTIONS: [SectionMeta; 8] = [
    SectionMeta {
        id: SectionId::Hero,
        title: "Hero",
        description: "Headline, company details and hero image",
    },
    SectionMeta {
        id: SectionId::Features,
        title: "Features",
        description: "Highlight key features and benefits",
    },
    SectionMeta {
        id: SectionId::Testimonials,
        title: "Testimonials",
        description: "Add customer testimonials and reviews",
    },
    SectionMeta {
        id: SectionId::About,
        title: "About Us",
        description: "Add information about your company or yourself",
    },
    SectionMeta {
        id: SectionId::Contact,
        title: "Contact",
        description: "Add contact details and information",
    },
    SectionMeta {
        id: SectionId::Gallery,
        title: "Gallery",
        description: "Showcase images or media",
    },
    SectionMeta {
        id: SectionId::Faq,
        title: "FAQ",
        description: "Frequently asked questions",
    },
    SectionMeta {
        id: SectionId::Pricing,
        title: "Pricing",
        description: "Display pricing plans and options",
    },
];

pub fn get(id: SectionId) -> &'static SectionMeta {
    // SECTIONS covers every SectionId variant.
    SECTIONS
        .iter()
        .find(|meta| meta.id == id)
        .unwrap_or(&SECTIONS[0])
}

/// Whether the record gives this section anything to show. Sections with
/// placeholder copy (hero, contact) always have content; collection-backed
/// sections suppress themselves while empty.
pub fn has_content(id: SectionId, page: &PageData) -> bool {
    match id {
        SectionId::Hero | SectionId::Contact => true,
        SectionId::Features => !page.features.is_empty(),
        SectionId::Testimonials => !page.testimonials.is_empty(),
        SectionId::Gallery => !page.gallery.is_empty(),
        SectionId::Faq => !page.faq.is_empty(),
        SectionId::Pricing => !page.pricing.is_empty(),
        SectionId::About => {
            !page.about_title.is_empty()
                || !page.about_description.is_empty()
                || !page.mission.is_empty()
                || !page.vision.is_empty()
        }
    }
}

/// Render the section body for the current record.
pub fn render(id: SectionId, page: &PageData) -> Node {
    match id {
        SectionId::Hero => sections::render_hero(page),
        SectionId::Features => sections::render_features(page),
        SectionId::Testimonials => sections::render_testimonials(page),
        SectionId::About => sections::render_about(page),
        SectionId::Contact => sections::render_contact(page),
        SectionId::Gallery => sections::render_gallery(page),
        SectionId::Faq => sections::render_faq(page),
        SectionId::Pricing => sections::render_pricing(page),
    }
}

/// Append `id` to the order iff absent. Duplicate adds are no-ops.
pub fn add_section(order: &mut Vec<String>, id: SectionId) {
    if order.iter().any(|existing| existing == id.as_str()) {
        debug!(section = %id, "section already present, add is a no-op");
        return;
    }
    order.push(id.as_str().to_string());
}

/// Filter `id` out, preserving the relative order of the remainder.
pub fn remove_section(order: &mut Vec<String>, id: SectionId) {
    order.retain(|existing| existing != id.as_str());
}

#[cfg(test)]
mod tests {
    use super::*;
    use pagecraft_document::{default_section_order, Feature};

    #[test]
    fn catalog_covers_every_section_id() {
        for id in SectionId::ALL {
            assert_eq!(get(id).id, id);
        }
    }

    #[test]
    fn duplicate_add_is_a_no_op() {
        let mut order = default_section_order();
        add_section(&mut order, SectionId::Pricing);
        add_section(&mut order, SectionId::Pricing);
        assert_eq!(
            order.iter().filter(|id| *id == "pricing").count(),
            1
        );
    }

    #[test]
    fn remove_then_add_appends_at_end() {
        let mut order = default_section_order();
        add_section(&mut order, SectionId::Faq);
        let faq_index = order.iter().position(|id| id == "faq").unwrap();
        assert_eq!(faq_index, order.len() - 1);

        // Put something after it, then remove and re-add: faq lands last,
        // not back at its old index.
        add_section(&mut order, SectionId::Gallery);
        remove_section(&mut order, SectionId::Faq);
        add_section(&mut order, SectionId::Faq);
        assert_eq!(order.last().map(String::as_str), Some("faq"));
    }

    #[test]
    fn remove_preserves_remaining_order() {
        let mut order = default_section_order();
        remove_section(&mut order, SectionId::Testimonials);
        assert_eq!(order, vec!["hero", "features", "about", "contact"]);
    }

    #[test]
    fn empty_collections_have_no_content() {
        let mut page = PageData::default();
        assert!(!has_content(SectionId::Features, &page));
        assert!(has_content(SectionId::Hero, &page));
        assert!(has_content(SectionId::Contact, &page));
        assert!(!has_content(SectionId::About, &page));

        page.features.push(Feature::default());
        assert!(has_content(SectionId::Features, &page));

        page.mission = "Ship".to_string();
        assert!(has_content(SectionId::About, &page));
    }
}
