//! # Page rendering
//!
//! Wraps the composed sections with the page frame (header, call-to-action,
//! footer) and applies the transient selection highlight. The editor
//! outline derives from the same [`compose`] call as the preview, which is
//! what keeps the two surfaces in agreement.

use pagecraft_document::{FieldId, PageData, SectionId, StyleField};
use serde::Serialize;
use tracing::instrument;

use crate::compositor::compose;
use crate::vdom::Node;

/// One row of the editor's section outline.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OutlineEntry {
    pub id: SectionId,
    pub title: &'static str,
    /// Editable units inside the section body.
    pub field_count: usize,
}

fn count_fields(node: &Node) -> usize {
    match node {
        Node::Element { children, field, .. } => {
            usize::from(field.is_some())
                + children.iter().map(count_fields).sum::<usize>()
        }
        Node::Text { .. } => 0,
    }
}

/// The editor outline: one entry per visible section, same order and same
/// visibility rules as the preview.
pub fn outline(page: &PageData) -> Vec<OutlineEntry> {
    compose(page)
        .into_iter()
        .map(|section| OutlineEntry {
            id: section.id,
            title: section.title,
            field_count: count_fields(&section.body),
        })
        .collect()
}

fn page_background(page: &PageData) -> String {
    if page.bg_gradient_enabled {
        format!(
            "linear-gradient(to bottom, {}, {})",
            page.bg_gradient_start, page.bg_gradient_end
        )
    } else {
        page.colors.bg.clone()
    }
}

fn header(page: &PageData) -> Node {
    Node::element("header")
        .with_attr("class", "site-header")
        .with_child(
            Node::element("h1")
                .with_field(&FieldId::scalar(StyleField::Company))
                .with_style("color", page.colors.primary.clone())
                .with_text(if page.company.is_empty() {
                    "Your Company".to_string()
                } else {
                    page.company.clone()
                }),
        )
}

fn call_to_action(page: &PageData) -> Node {
    Node::element("section")
        .with_attr("class", "cta")
        .with_style("background-color", page.colors.primary.clone())
        .with_style("border-radius", page.card_border_radius.clone())
        .with_child(Node::element("h2").with_text("Ready to Get Started?"))
        .with_child(Node::element("p").with_text(
            "Join thousands of professionals and unlock new opportunities today.",
        ))
        .with_child(
            Node::element("div")
                .with_attr("class", "cta-actions")
                .with_child(
                    Node::element("button")
                        .with_style("color", page.colors.primary.clone())
                        .with_style("border-radius", page.button_border_radius.clone())
                        .with_text("Apply Now"),
                )
                .with_child(
                    Node::element("button")
                        .with_style("border-radius", page.button_border_radius.clone())
                        .with_text("Contact Us"),
                ),
        )
}

fn footer(page: &PageData) -> Node {
    let company = if page.company.is_empty() {
        "Company"
    } else {
        &page.company
    };
    Node::element("footer")
        .with_attr("class", "site-footer")
        .with_child(Node::text(format!("© {company}. All rights reserved.")))
}

/// Mark every node carrying the selected field id. Both surfaces read the
/// same marker, so a field never highlights in one and not the other.
fn apply_selection(node: &mut Node, id: &str) {
    if node.field() == Some(id) {
        node.set_attr("data-selected", "true");
    }
    if let Node::Element { children, .. } = node {
        for child in children {
            apply_selection(child, id);
        }
    }
}

/// Render the whole page for the preview surface.
#[instrument(level = "debug", skip(page, selected))]
pub fn render_page(page: &PageData, selected: Option<&FieldId>) -> Node {
    let mut root = Node::element("div")
        .with_attr("class", "page")
        .with_style("background", page_background(page))
        .with_style("color", page.colors.text.clone())
        .with_style("font-family", page.font_family.clone())
        .with_style("font-size", page.body_font_size.clone())
        .with_child(header(page));

    let mut main = Node::element("main");
    for section in compose(page) {
        main = main.with_child(section.body);
    }
    main = main.with_child(call_to_action(page));
    root = root.with_child(main).with_child(footer(page));

    if let Some(id) = selected {
        apply_selection(&mut root, &id.to_string());
    }

    root
}
