//! End-to-end evaluator scenarios over realistic records.

use crate::compositor::compose;
use crate::registry::{add_section, remove_section};
use crate::render::{outline, render_page};
use crate::style_resolver::resolve;
use pagecraft_document::{
    FaqItem, Feature, FieldId, PageData, SectionId, StyleField, Testimonial,
};

fn populated_page() -> PageData {
    let mut page = PageData::template();
    page.features.push(Feature {
        title: "Remote-first".to_string(),
        description: "Work from anywhere".to_string(),
    });
    page.testimonials = vec![Testimonial {
        name: "Grace".to_string(),
        role: "CTO".to_string(),
        comment: "Loved it".to_string(),
        rating: 5,
    }];
    page.about_title = "Who we are".to_string();
    page.faq.push(FaqItem {
        question: "Is it remote?".to_string(),
        answer: "Yes".to_string(),
    });
    page
}

#[test]
fn compose_reflects_section_order_changes() {
    let mut page = populated_page();
    add_section(&mut page.section_order, SectionId::Faq);

    let before: Vec<SectionId> = compose(&page).iter().map(|s| s.id).collect();
    assert_eq!(*before.last().unwrap(), SectionId::Faq);

    remove_section(&mut page.section_order, SectionId::Features);
    let after: Vec<SectionId> = compose(&page).iter().map(|s| s.id).collect();
    assert!(!after.contains(&SectionId::Features));
    // Everything else keeps its relative order.
    assert_eq!(
        after,
        before
            .into_iter()
            .filter(|id| *id != SectionId::Features)
            .collect::<Vec<_>>()
    );
}

#[test]
fn preview_and_outline_agree_after_every_change() {
    let mut page = populated_page();
    for mutation in [
        "clear-testimonials",
        "add-gallery-order",
        "set-about-empty",
    ] {
        match mutation {
            "clear-testimonials" => page.testimonials.clear(),
            "add-gallery-order" => add_section(&mut page.section_order, SectionId::Gallery),
            "set-about-empty" => {
                page.about_title.clear();
                page.about_description.clear();
                page.mission.clear();
                page.vision.clear();
            }
            _ => unreachable!(),
        }

        let outline_ids: Vec<SectionId> = outline(&page).iter().map(|e| e.id).collect();
        let composed_ids: Vec<SectionId> = compose(&page).iter().map(|s| s.id).collect();
        assert_eq!(outline_ids, composed_ids, "surfaces diverged after {mutation}");
    }
}

fn is_highlighted(tree: &mut crate::vdom::Node, id: &str) -> bool {
    let Some(node) = tree.find_field_mut(id) else {
        return false;
    };
    match node {
        crate::vdom::Node::Element { attributes, .. } => {
            attributes.get("data-selected").map(String::as_str) == Some("true")
        }
        crate::vdom::Node::Text { .. } => false,
    }
}

#[test]
fn selected_item_field_highlights_in_the_preview() {
    let page = populated_page();
    let selected = FieldId::item(SectionId::Features, 0, "title");

    let mut tree = render_page(&page, Some(&selected));
    assert!(is_highlighted(&mut tree, "features-0-title"));

    // A different selection moves the highlight.
    let other = FieldId::scalar(StyleField::Title);
    let mut tree = render_page(&page, Some(&other));
    assert!(!is_highlighted(&mut tree, "features-0-title"));
    assert!(is_highlighted(&mut tree, "title"));
}

#[test]
fn resolved_styles_reach_the_rendered_tree() {
    let mut page = populated_page();
    page.title_styles.letter_spacing = Some("30px".to_string());

    // Stored value is over the declared 10px maximum; render shows the clamp.
    let resolved = resolve(StyleField::Title, &page);
    assert_eq!(resolved.letter_spacing.as_deref(), Some("10px"));

    let html = render_page(&page, None).to_html();
    assert!(html.contains("letter-spacing: 10px;"));
}

#[test]
fn template_round_trips_through_json_and_composes_identically() {
    let page = populated_page();
    let reloaded = PageData::from_json(&page.to_json().unwrap()).unwrap();

    assert_eq!(compose(&page), compose(&reloaded));
}
