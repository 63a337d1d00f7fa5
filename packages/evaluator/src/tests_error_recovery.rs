//! Loaded records are never trusted: sparse, stale, or corrupt data must
//! flow through composition and style resolution without a panic.

use crate::compositor::compose;
use crate::render::render_page;
use crate::style_resolver::resolve;
use pagecraft_document::{PageData, StyleField};

#[test]
fn empty_record_composes() {
    let page = PageData::from_json("{}").unwrap();
    let composed = compose(&page);
    // Default order is hero..contact; only hero and contact have content.
    assert_eq!(composed.len(), 2);
}

#[test]
fn record_with_only_unknown_sections_renders_an_empty_main() {
    let page = PageData::from_json(r#"{"sectionOrder": ["team", "services"]}"#).unwrap();
    assert!(compose(&page).is_empty());
    // The frame still renders.
    let html = render_page(&page, None).to_html();
    assert!(html.contains("site-footer"));
}

#[test]
fn corrupt_override_bag_resolves_to_defaults() {
    let page = PageData::from_json(
        r##"{"titleStyles": {"fontSize": "garbage", "fontWeight": 900, "color": "#123456"}}"##,
    )
    .unwrap();

    let resolved = resolve(StyleField::Title, &page);
    // Unparseable size falls back to the page-level title size.
    assert_eq!(resolved.font_size.as_deref(), Some("48px"));
    // Unknown keyword weight degraded at load; the builtin survives.
    assert!(resolved.font_weight.is_some());
    // Well-formed properties still apply.
    assert_eq!(resolved.color.as_deref(), Some("#123456"));
}

#[test]
fn malformed_collections_do_not_reach_renderers() {
    let page = PageData::from_json(
        r#"{
            "sectionOrder": ["features", "faq"],
            "features": "not a list",
            "faq": [{"question": "Q"}, 17]
        }"#,
    )
    .unwrap();

    let composed = compose(&page);
    // features degraded to empty and suppressed itself; faq kept one item.
    assert_eq!(composed.len(), 1);
    let html = composed[0].body.to_html();
    assert!(html.contains("data-field=\"faq-0-question\""));
}

#[test]
fn resolution_never_panics_for_any_field() {
    let page = PageData::from_json(r#"{"colors": [], "textAlign": 3}"#).unwrap();
    for field in StyleField::ALL {
        let bag = resolve(field, &page);
        assert!(!bag.is_empty());
    }
}
