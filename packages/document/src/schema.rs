//! # Collection schemas
//!
//! One declarative descriptor set per collection drives both the generic
//! editor form and the generic section renderer, replacing per-section
//! hand-written field lists.

use serde::{Deserialize, Serialize};

use crate::page::{FaqItem, Feature, GalleryItem, PageData, PricingTier, Testimonial};
use crate::section::SectionId;

/// How an editor surface should capture a slot's value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DescriptorKind {
    Text,
    TextArea,
    ImageUrl,
}

/// One editable slot of a collection item.
#[derive(Debug, Clone, Copy)]
pub struct FieldDescriptor {
    pub slot: &'static str,
    pub label: &'static str,
    pub kind: DescriptorKind,
}

const fn text(slot: &'static str, label: &'static str) -> FieldDescriptor {
    FieldDescriptor {
        slot,
        label,
        kind: DescriptorKind::Text,
    }
}

const fn text_area(slot: &'static str, label: &'static str) -> FieldDescriptor {
    FieldDescriptor {
        slot,
        label,
        kind: DescriptorKind::TextArea,
    }
}

const fn image_url(slot: &'static str, label: &'static str) -> FieldDescriptor {
    FieldDescriptor {
        slot,
        label,
        kind: DescriptorKind::ImageUrl,
    }
}

/// The ordered collections a page carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CollectionKind {
    Features,
    Testimonials,
    Gallery,
    Faq,
    Pricing,
}

impl CollectionKind {
    pub const ALL: [CollectionKind; 5] = [
        CollectionKind::Features,
        CollectionKind::Testimonials,
        CollectionKind::Gallery,
        CollectionKind::Faq,
        CollectionKind::Pricing,
    ];

    /// The section that renders this collection.
    pub fn section(&self) -> SectionId {
        match self {
            CollectionKind::Features => SectionId::Features,
            CollectionKind::Testimonials => SectionId::Testimonials,
            CollectionKind::Gallery => SectionId::Gallery,
            CollectionKind::Faq => SectionId::Faq,
            CollectionKind::Pricing => SectionId::Pricing,
        }
    }

    pub fn from_section(section: SectionId) -> Option<CollectionKind> {
        CollectionKind::ALL.iter().copied().find(|k| k.section() == section)
    }

    /// Editable slots of one item, in form order.
    pub fn schema(&self) -> &'static [FieldDescriptor] {
        match self {
            CollectionKind::Features => {
                const FIELDS: &[FieldDescriptor] = &[
                    text("title", "Feature Title"),
                    text_area("description", "Description"),
                ];
                FIELDS
            }
            CollectionKind::Testimonials => {
                const FIELDS: &[FieldDescriptor] = &[
                    text("name", "Name"),
                    text("role", "Role"),
                    text_area("comment", "Comment"),
                ];
                FIELDS
            }
            CollectionKind::Gallery => {
                const FIELDS: &[FieldDescriptor] = &[
                    image_url("url", "Image"),
                    text("title", "Title"),
                    text_area("description", "Description"),
                ];
                FIELDS
            }
            CollectionKind::Faq => {
                const FIELDS: &[FieldDescriptor] = &[
                    text("question", "Question"),
                    text_area("answer", "Answer"),
                ];
                FIELDS
            }
            CollectionKind::Pricing => {
                const FIELDS: &[FieldDescriptor] = &[
                    text("plan", "Plan Name"),
                    text("price", "Price"),
                    text_area("features", "Features"),
                ];
                FIELDS
            }
        }
    }

    pub fn len_in(&self, page: &PageData) -> usize {
        match self {
            CollectionKind::Features => page.features.len(),
            CollectionKind::Testimonials => page.testimonials.len(),
            CollectionKind::Gallery => page.gallery.len(),
            CollectionKind::Faq => page.faq.len(),
            CollectionKind::Pricing => page.pricing.len(),
        }
    }
}

/// Read/write one named slot of a collection item.
pub trait SlotAccess {
    fn get_slot(&self, slot: &str) -> Option<String>;

    /// Returns false when the slot name is not part of this item's schema.
    fn set_slot(&mut self, slot: &str, value: &str) -> bool;
}

impl SlotAccess for Feature {
    fn get_slot(&self, slot: &str) -> Option<String> {
        match slot {
            "title" => Some(self.title.clone()),
            "description" => Some(self.description.clone()),
            _ => None,
        }
    }

    fn set_slot(&mut self, slot: &str, value: &str) -> bool {
        match slot {
            "title" => self.title = value.to_string(),
            "description" => self.description = value.to_string(),
            _ => return false,
        }
        true
    }
}

impl SlotAccess for Testimonial {
    fn get_slot(&self, slot: &str) -> Option<String> {
        match slot {
            "name" => Some(self.name.clone()),
            "role" => Some(self.role.clone()),
            "comment" => Some(self.comment.clone()),
            _ => None,
        }
    }

    fn set_slot(&mut self, slot: &str, value: &str) -> bool {
        match slot {
            "name" => self.name = value.to_string(),
            "role" => self.role = value.to_string(),
            "comment" => self.comment = value.to_string(),
            _ => return false,
        }
        true
    }
}

impl SlotAccess for GalleryItem {
    fn get_slot(&self, slot: &str) -> Option<String> {
        match slot {
            "url" => Some(self.url.clone()),
            "title" => Some(self.title.clone()),
            "description" => Some(self.description.clone()),
            _ => None,
        }
    }

    fn set_slot(&mut self, slot: &str, value: &str) -> bool {
        match slot {
            "url" => self.url = value.to_string(),
            "title" => self.title = value.to_string(),
            "description" => self.description = value.to_string(),
            _ => return false,
        }
        true
    }
}

impl SlotAccess for FaqItem {
    fn get_slot(&self, slot: &str) -> Option<String> {
        match slot {
            "question" => Some(self.question.clone()),
            "answer" => Some(self.answer.clone()),
            _ => None,
        }
    }

    fn set_slot(&mut self, slot: &str, value: &str) -> bool {
        match slot {
            "question" => self.question = value.to_string(),
            "answer" => self.answer = value.to_string(),
            _ => return false,
        }
        true
    }
}

impl SlotAccess for PricingTier {
    fn get_slot(&self, slot: &str) -> Option<String> {
        match slot {
            "plan" => Some(self.plan.clone()),
            "price" => Some(self.price.clone()),
            "features" => Some(self.features.clone()),
            _ => None,
        }
    }

    fn set_slot(&mut self, slot: &str, value: &str) -> bool {
        match slot {
            "plan" => self.plan = value.to_string(),
            "price" => self.price = value.to_string(),
            "features" => self.features = value.to_string(),
            _ => return false,
        }
        true
    }
}

/// One item of any collection, used when appending through the editor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "collection", content = "item", rename_all = "lowercase")]
pub enum CollectionItem {
    Feature(Feature),
    Testimonial(Testimonial),
    Gallery(GalleryItem),
    Faq(FaqItem),
    Pricing(PricingTier),
}

impl CollectionItem {
    pub fn kind(&self) -> CollectionKind {
        match self {
            CollectionItem::Feature(_) => CollectionKind::Features,
            CollectionItem::Testimonial(_) => CollectionKind::Testimonials,
            CollectionItem::Gallery(_) => CollectionKind::Gallery,
            CollectionItem::Faq(_) => CollectionKind::Faq,
            CollectionItem::Pricing(_) => CollectionKind::Pricing,
        }
    }

    /// A blank item of the given kind, the shape "+ Add" buttons append.
    pub fn blank(kind: CollectionKind) -> CollectionItem {
        match kind {
            CollectionKind::Features => CollectionItem::Feature(Feature::default()),
            CollectionKind::Testimonials => CollectionItem::Testimonial(Testimonial::default()),
            CollectionKind::Gallery => CollectionItem::Gallery(GalleryItem::default()),
            CollectionKind::Faq => CollectionItem::Faq(FaqItem::default()),
            CollectionKind::Pricing => CollectionItem::Pricing(PricingTier::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_collection_maps_to_its_section() {
        for kind in CollectionKind::ALL {
            assert_eq!(CollectionKind::from_section(kind.section()), Some(kind));
        }
        assert_eq!(CollectionKind::from_section(SectionId::Hero), None);
    }

    #[test]
    fn schema_slots_are_accessible() {
        for kind in CollectionKind::ALL {
            let mut item = CollectionItem::blank(kind);
            for descriptor in kind.schema() {
                let ok = match &mut item {
                    CollectionItem::Feature(i) => i.set_slot(descriptor.slot, "x"),
                    CollectionItem::Testimonial(i) => i.set_slot(descriptor.slot, "x"),
                    CollectionItem::Gallery(i) => i.set_slot(descriptor.slot, "x"),
                    CollectionItem::Faq(i) => i.set_slot(descriptor.slot, "x"),
                    CollectionItem::Pricing(i) => i.set_slot(descriptor.slot, "x"),
                };
                assert!(ok, "slot {} missing on {:?}", descriptor.slot, kind);
            }
        }
    }

    #[test]
    fn unknown_slot_is_refused() {
        let mut feature = Feature::default();
        assert!(!feature.set_slot("rating", "5"));
        assert_eq!(feature.get_slot("rating"), None);
    }
}
