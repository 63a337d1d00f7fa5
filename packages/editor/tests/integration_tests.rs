//! Integration tests for the editor crate: full edit-session flows from
//! action to rendered preview.

use pagecraft_document::{
    CollectionItem, CollectionKind, FieldId, PageData, SectionId, StyleField, StyleProperty,
    Testimonial,
};
use pagecraft_editor::{ColorPatch, EditAction, EditSession, PagePatch};

fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

#[test]
fn new_page_session_starts_from_the_template() {
    init_tracing();
    let session = EditSession::from_template("client-1");

    let page = session.page().unwrap();
    assert_eq!(page.title, "New Page");
    assert!(!session.store().is_dirty());
    assert_eq!(session.store().version(), 0);
}

#[test]
fn full_editing_flow() -> anyhow::Result<()> {
    init_tracing();
    let mut session = EditSession::from_template("client-1");

    // Rename, restyle, fill a collection, reorder sections.
    session.apply(EditAction::Merge {
        patch: PagePatch {
            title: Some("Senior Rust Engineer".to_string()),
            colors: Some(ColorPatch {
                primary: Some("#0f766e".to_string()),
                ..ColorPatch::default()
            }),
            ..PagePatch::default()
        },
    })?;

    session.apply(EditAction::SetStyle {
        field: StyleField::Title,
        property: StyleProperty::FontSize,
        value: "90px".to_string(),
    })?;

    session.apply(EditAction::AppendItem {
        item: CollectionItem::Testimonial(Testimonial {
            name: "Lin".to_string(),
            role: "Engineer".to_string(),
            comment: "Best team".to_string(),
            rating: 5,
        }),
    })?;

    session.apply(EditAction::MoveSection {
        source: 2,
        destination: 1,
    })?;

    let page = session.page().unwrap();
    assert_eq!(page.title, "Senior Rust Engineer");
    assert_eq!(page.colors.primary, "#0f766e");
    // Sibling colors survived the key-wise merge.
    assert_eq!(page.colors.bg, "#f9fafb");
    // 90px is inside the declared 8-100px bounds and stored as written.
    assert_eq!(page.title_styles.font_size.as_deref(), Some("90px"));
    assert_eq!(page.testimonials.len(), 2);
    assert_eq!(
        page.section_order,
        vec!["hero", "testimonials", "features", "about", "contact"]
    );
    assert_eq!(session.store().version(), 4);
    assert!(session.store().is_dirty());

    let html = session.preview().unwrap().to_html();
    assert!(html.contains("Senior Rust Engineer"));
    assert!(html.contains("background-color: #0f766e;"));
    Ok(())
}

#[test]
fn section_add_remove_round_trip_appends_at_end() {
    init_tracing();
    let mut session = EditSession::new("client-1", PageData::default());

    session
        .apply(EditAction::RemoveSection {
            id: SectionId::Features,
        })
        .unwrap();
    session
        .apply(EditAction::AddSection {
            id: SectionId::Features,
        })
        .unwrap();

    let order = &session.page().unwrap().section_order;
    assert_eq!(order.last().map(String::as_str), Some("features"));
    // The remainder kept its relative order.
    assert_eq!(
        order,
        &vec!["hero", "testimonials", "about", "contact", "features"]
    );
}

#[test]
fn duplicate_add_section_is_idempotent() {
    init_tracing();
    let mut session = EditSession::new("client-1", PageData::default());

    for _ in 0..2 {
        session
            .apply(EditAction::AddSection {
                id: SectionId::Pricing,
            })
            .unwrap();
    }

    let order = &session.page().unwrap().section_order;
    assert_eq!(order.iter().filter(|id| *id == "pricing").count(), 1);
}

#[test]
fn failed_actions_leave_the_record_untouched() {
    init_tracing();
    let mut session = EditSession::new("client-1", PageData::default());
    let before = session.page().unwrap().clone();
    let version_before = session.store().version();

    let result = session.apply(EditAction::RemoveItem {
        collection: CollectionKind::Gallery,
        index: 0,
    });
    assert!(result.is_err());

    assert_eq!(session.page().unwrap(), &before);
    assert_eq!(session.store().version(), version_before);
}

#[test]
fn gateway_completion_after_teardown_is_ignored() {
    init_tracing();
    let mut session = EditSession::new("client-1", PageData::default());
    session.teardown();

    // Simulates a fetch resolving after the user navigated away.
    session.update(PagePatch {
        title: Some("fetched too late".to_string()),
        ..PagePatch::default()
    });

    assert!(session.page().is_none());
    assert!(session.preview().is_none());
}

#[test]
fn selection_follows_collection_edits() {
    init_tracing();
    let mut session = EditSession::from_template("client-1");

    let comment = FieldId::item(SectionId::Testimonials, 0, "comment");
    session.select_field(comment.clone());
    assert!(session.selection().is_selected(&comment));

    session
        .apply(EditAction::SetItemField {
            collection: CollectionKind::Testimonials,
            index: 0,
            slot: "comment".to_string(),
            value: "Updated comment".to_string(),
        })
        .unwrap();

    // Selection is transient state and survives record edits untouched.
    assert!(session.selection().is_selected(&comment));
    let html = session.preview().unwrap().to_html();
    assert!(html.contains("Updated comment"));
    assert!(html.contains("data-selected=\"true\""));
}
