//! # Edit actions
//!
//! The operations the editor surface issues. Each action validates against
//! the current record, then compiles to a [`PagePatch`] so every change
//! funnels through the store's single `update` entrypoint.
//!
//! ## Action semantics
//!
//! ### Collections
//! - Item identity is positional: setting one slot of item `i` rebuilds the
//!   array with siblings untouched and in place
//! - Out-of-range indices fail; nothing is partially applied
//!
//! ### Sections
//! - Add appends iff absent (duplicate adds are no-ops)
//! - Remove filters, preserving the order of the remainder
//! - Move uses splice semantics: remove at source, insert at destination
//!
//! ### Styles
//! - Numeric values are clamped into the property's declared bounds
//! - Unparseable values fail the action instead of being stored

use pagecraft_document::{
    CollectionItem, CollectionKind, PageData, SectionId, SlotAccess, StyleField, StyleProperty,
};
use pagecraft_evaluator::{add_section, clamp_style_value, remove_section};
use serde::{Deserialize, Serialize};

use crate::errors::EditorError;
use crate::patch::PagePatch;

/// Semantic edit operations (intent-preserving)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum EditAction {
    /// Merge a partial record: scalar, typography and color writes
    Merge { patch: PagePatch },

    /// Append one item to the collection matching its type
    AppendItem { item: CollectionItem },

    /// Remove the item at `index`, preserving sibling order
    RemoveItem {
        collection: CollectionKind,
        index: usize,
    },

    /// Set one slot of the item at `index` without reordering siblings
    SetItemField {
        collection: CollectionKind,
        index: usize,
        slot: String,
        value: String,
    },

    /// Append a section id to `sectionOrder` iff absent
    AddSection { id: SectionId },

    /// Filter a section id out of `sectionOrder`
    RemoveSection { id: SectionId },

    /// Splice a section from `source` to `destination`
    MoveSection { source: usize, destination: usize },

    /// Set one property of a field's override bag (clamped)
    SetStyle {
        field: StyleField,
        property: StyleProperty,
        value: String,
    },

    /// Drop one property from a field's override bag
    ClearStyle {
        field: StyleField,
        property: StyleProperty,
    },
}

/// Editor input caps, matching the original form limits.
const TITLE_MAX_CHARS: usize = 80;
const DESCRIPTION_MAX_CHARS: usize = 500;

fn truncate_chars(value: &mut String, max: usize) {
    if let Some((offset, _)) = value.char_indices().nth(max) {
        value.truncate(offset);
    }
}

impl EditAction {
    /// Validate against the current record and compile to a patch.
    pub fn into_patch(self, page: &PageData) -> Result<PagePatch, EditorError> {
        match self {
            EditAction::Merge { mut patch } => {
                if let Some(title) = patch.title.as_mut() {
                    truncate_chars(title, TITLE_MAX_CHARS);
                }
                if let Some(description) = patch.description.as_mut() {
                    truncate_chars(description, DESCRIPTION_MAX_CHARS);
                }
                Ok(patch)
            }

            EditAction::AppendItem { item } => Ok(append_item(page, item)),

            EditAction::RemoveItem { collection, index } => {
                check_index(page, collection, index)?;
                Ok(remove_item(page, collection, index))
            }

            EditAction::SetItemField {
                collection,
                index,
                slot,
                value,
            } => {
                check_index(page, collection, index)?;
                set_item_field(page, collection, index, &slot, &value)
            }

            EditAction::AddSection { id } => {
                let mut order = page.section_order.clone();
                add_section(&mut order, id);
                Ok(PagePatch {
                    section_order: Some(order),
                    ..PagePatch::default()
                })
            }

            EditAction::RemoveSection { id } => {
                let mut order = page.section_order.clone();
                remove_section(&mut order, id);
                Ok(PagePatch {
                    section_order: Some(order),
                    ..PagePatch::default()
                })
            }

            EditAction::MoveSection {
                source,
                destination,
            } => {
                let mut order = page.section_order.clone();
                if source >= order.len() {
                    return Err(EditorError::SectionIndexOutOfRange {
                        index: source,
                        len: order.len(),
                    });
                }
                let moved = order.remove(source);
                let insert_index = destination.min(order.len());
                order.insert(insert_index, moved);
                Ok(PagePatch {
                    section_order: Some(order),
                    ..PagePatch::default()
                })
            }

            EditAction::SetStyle {
                field,
                property,
                value,
            } => {
                let clamped = clamp_style_value(property, &value).ok_or_else(|| {
                    EditorError::InvalidStyleValue {
                        property,
                        value: value.clone(),
                    }
                })?;

                let mut bag = page.style_overrides(field).clone();
                bag.set(property, &clamped)
                    .map_err(|e| EditorError::InvalidStyleValue {
                        property,
                        value: e.value,
                    })?;
                Ok(PagePatch::with_style_bag(field, bag))
            }

            EditAction::ClearStyle { field, property } => {
                let mut bag = page.style_overrides(field).clone();
                bag.clear(property);
                Ok(PagePatch::with_style_bag(field, bag))
            }
        }
    }
}

fn check_index(
    page: &PageData,
    collection: CollectionKind,
    index: usize,
) -> Result<(), EditorError> {
    let len = collection.len_in(page);
    if index >= len {
        return Err(EditorError::IndexOutOfRange {
            collection,
            index,
            len,
        });
    }
    Ok(())
}

fn append_item(page: &PageData, item: CollectionItem) -> PagePatch {
    let mut patch = PagePatch::default();
    match item {
        CollectionItem::Feature(feature) => {
            let mut items = page.features.clone();
            items.push(feature);
            patch.features = Some(items);
        }
        CollectionItem::Testimonial(testimonial) => {
            let mut items = page.testimonials.clone();
            items.push(testimonial);
            patch.testimonials = Some(items);
        }
        CollectionItem::Gallery(gallery_item) => {
            let mut items = page.gallery.clone();
            items.push(gallery_item);
            patch.gallery = Some(items);
        }
        CollectionItem::Faq(faq_item) => {
            let mut items = page.faq.clone();
            items.push(faq_item);
            patch.faq = Some(items);
        }
        CollectionItem::Pricing(tier) => {
            let mut items = page.pricing.clone();
            items.push(tier);
            patch.pricing = Some(items);
        }
    }
    patch
}

fn remove_item(page: &PageData, collection: CollectionKind, index: usize) -> PagePatch {
    let mut patch = PagePatch::default();
    match collection {
        CollectionKind::Features => {
            let mut items = page.features.clone();
            items.remove(index);
            patch.features = Some(items);
        }
        CollectionKind::Testimonials => {
            let mut items = page.testimonials.clone();
            items.remove(index);
            patch.testimonials = Some(items);
        }
        CollectionKind::Gallery => {
            let mut items = page.gallery.clone();
            items.remove(index);
            patch.gallery = Some(items);
        }
        CollectionKind::Faq => {
            let mut items = page.faq.clone();
            items.remove(index);
            patch.faq = Some(items);
        }
        CollectionKind::Pricing => {
            let mut items = page.pricing.clone();
            items.remove(index);
            patch.pricing = Some(items);
        }
    }
    patch
}

fn set_item_field(
    page: &PageData,
    collection: CollectionKind,
    index: usize,
    slot: &str,
    value: &str,
) -> Result<PagePatch, EditorError> {
    let unknown_slot = || EditorError::UnknownSlot {
        collection,
        slot: slot.to_string(),
    };

    let mut patch = PagePatch::default();
    match collection {
        CollectionKind::Features => {
            let mut items = page.features.clone();
            if !items[index].set_slot(slot, value) {
                return Err(unknown_slot());
            }
            patch.features = Some(items);
        }
        CollectionKind::Testimonials => {
            let mut items = page.testimonials.clone();
            if !items[index].set_slot(slot, value) {
                return Err(unknown_slot());
            }
            patch.testimonials = Some(items);
        }
        CollectionKind::Gallery => {
            let mut items = page.gallery.clone();
            if !items[index].set_slot(slot, value) {
                return Err(unknown_slot());
            }
            patch.gallery = Some(items);
        }
        CollectionKind::Faq => {
            let mut items = page.faq.clone();
            if !items[index].set_slot(slot, value) {
                return Err(unknown_slot());
            }
            patch.faq = Some(items);
        }
        CollectionKind::Pricing => {
            let mut items = page.pricing.clone();
            if !items[index].set_slot(slot, value) {
                return Err(unknown_slot());
            }
            patch.pricing = Some(items);
        }
    }
    Ok(patch)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pagecraft_document::Feature;

    fn page_with_features(n: usize) -> PageData {
        let mut page = PageData::default();
        for i in 0..n {
            page.features.push(Feature {
                title: format!("f{i}"),
                description: String::new(),
            });
        }
        page
    }

    #[test]
    fn set_item_field_keeps_siblings_in_place() {
        let page = page_with_features(3);
        let patch = EditAction::SetItemField {
            collection: CollectionKind::Features,
            index: 1,
            slot: "title".to_string(),
            value: "updated".to_string(),
        }
        .into_patch(&page)
        .unwrap();

        let features = patch.features.unwrap();
        assert_eq!(features[0].title, "f0");
        assert_eq!(features[1].title, "updated");
        assert_eq!(features[2].title, "f2");
    }

    #[test]
    fn out_of_range_index_fails_cleanly() {
        let page = page_with_features(1);
        let err = EditAction::RemoveItem {
            collection: CollectionKind::Features,
            index: 5,
        }
        .into_patch(&page)
        .unwrap_err();

        assert_eq!(
            err,
            EditorError::IndexOutOfRange {
                collection: CollectionKind::Features,
                index: 5,
                len: 1
            }
        );
    }

    #[test]
    fn unknown_slot_fails() {
        let page = page_with_features(1);
        let err = EditAction::SetItemField {
            collection: CollectionKind::Features,
            index: 0,
            slot: "rating".to_string(),
            value: "5".to_string(),
        }
        .into_patch(&page)
        .unwrap_err();

        assert!(matches!(err, EditorError::UnknownSlot { .. }));
    }

    #[test]
    fn move_section_uses_splice_semantics() {
        let page = PageData::default();
        let patch = EditAction::MoveSection {
            source: 1,
            destination: 3,
        }
        .into_patch(&page)
        .unwrap();

        assert_eq!(
            patch.section_order.unwrap(),
            vec!["hero", "testimonials", "about", "features", "contact"]
        );
    }

    #[test]
    fn move_section_clamps_destination() {
        let page = PageData::default();
        let patch = EditAction::MoveSection {
            source: 0,
            destination: 99,
        }
        .into_patch(&page)
        .unwrap();

        assert_eq!(
            patch.section_order.unwrap().last().map(String::as_str),
            Some("hero")
        );
    }

    #[test]
    fn merge_caps_title_and_description() {
        let page = PageData::default();
        let patch = EditAction::Merge {
            patch: PagePatch {
                title: Some("t".repeat(200)),
                description: Some("d".repeat(900)),
                ..PagePatch::default()
            },
        }
        .into_patch(&page)
        .unwrap();

        assert_eq!(patch.title.unwrap().chars().count(), 80);
        assert_eq!(patch.description.unwrap().chars().count(), 500);
    }

    #[test]
    fn set_style_clamps_numeric_values() {
        let page = PageData::default();
        let patch = EditAction::SetStyle {
            field: StyleField::Title,
            property: StyleProperty::FontSize,
            value: "400px".to_string(),
        }
        .into_patch(&page)
        .unwrap();

        let bag = patch.title_styles.unwrap();
        assert_eq!(bag.font_size.as_deref(), Some("100px"));
    }

    #[test]
    fn set_style_rejects_garbage() {
        let page = PageData::default();
        let err = EditAction::SetStyle {
            field: StyleField::Title,
            property: StyleProperty::FontSize,
            value: "huge".to_string(),
        }
        .into_patch(&page)
        .unwrap_err();

        assert!(matches!(err, EditorError::InvalidStyleValue { .. }));
    }

    #[test]
    fn set_style_keeps_other_overrides() {
        let mut page = PageData::default();
        page.title_styles.color = Some("#ff0000".to_string());

        let patch = EditAction::SetStyle {
            field: StyleField::Title,
            property: StyleProperty::LetterSpacing,
            value: "2px".to_string(),
        }
        .into_patch(&page)
        .unwrap();

        let bag = patch.title_styles.unwrap();
        assert_eq!(bag.color.as_deref(), Some("#ff0000"));
        assert_eq!(bag.letter_spacing.as_deref(), Some("2px"));
    }
}
