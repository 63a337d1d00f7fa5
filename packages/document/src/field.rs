//! # Field identifiers
//!
//! Every editable unit on the page is addressable by a stable [`FieldId`]:
//! the styleable page scalars (`title`, `heroImage`, ...), per-section
//! scalars (`about-mission`, `contact-address`), and collection item slots
//! (`features-0-title`). The string form is shared by the editor outline,
//! the preview highlight, and the selection coordinator, so both surfaces
//! always agree on which node is selected.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::section::SectionId;
use crate::style::StyleField;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum FieldId {
    /// One of the styleable page scalars ("title", "heroImage").
    Scalar(StyleField),
    /// A per-section scalar ("about-mission", "contact-address").
    SectionScalar { section: SectionId, slot: String },
    /// One slot of a collection item ("features-0-title").
    Item {
        section: SectionId,
        index: usize,
        slot: String,
    },
}

impl FieldId {
    pub fn scalar(field: StyleField) -> FieldId {
        FieldId::Scalar(field)
    }

    pub fn section(section: SectionId, slot: impl Into<String>) -> FieldId {
        FieldId::SectionScalar {
            section,
            slot: slot.into(),
        }
    }

    pub fn item(section: SectionId, index: usize, slot: impl Into<String>) -> FieldId {
        FieldId::Item {
            section,
            index,
            slot: slot.into(),
        }
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldId::Scalar(field) => f.write_str(field.key()),
            FieldId::SectionScalar { section, slot } => write!(f, "{section}-{slot}"),
            FieldId::Item {
                section,
                index,
                slot,
            } => write!(f, "{section}-{index}-{slot}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldIdError {
    #[error("empty field id")]
    Empty,

    #[error("field id '{0}' does not name a known field or section")]
    UnknownPrefix(String),

    #[error("field id '{0}' is missing a slot")]
    MissingSlot(String),
}

impl FromStr for FieldId {
    type Err = FieldIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(FieldIdError::Empty);
        }
        if let Some(field) = StyleField::parse(s) {
            return Ok(FieldId::Scalar(field));
        }

        let mut parts = s.splitn(2, '-');
        let head = parts.next().unwrap_or_default();
        let section =
            SectionId::parse(head).ok_or_else(|| FieldIdError::UnknownPrefix(s.to_string()))?;
        let rest = parts
            .next()
            .filter(|rest| !rest.is_empty())
            .ok_or_else(|| FieldIdError::MissingSlot(s.to_string()))?;

        // An index segment distinguishes item slots from section scalars.
        let mut rest_parts = rest.splitn(2, '-');
        let maybe_index = rest_parts.next().unwrap_or_default();
        if let (Ok(index), Some(slot)) = (maybe_index.parse::<usize>(), rest_parts.next()) {
            if !slot.is_empty() {
                return Ok(FieldId::item(section, index, slot));
            }
        }

        Ok(FieldId::section(section, rest))
    }
}

impl From<FieldId> for String {
    fn from(id: FieldId) -> String {
        id.to_string()
    }
}

impl TryFrom<String> for FieldId {
    type Error = FieldIdError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scalar_ids_round_trip() {
        for field in StyleField::ALL {
            let id = FieldId::scalar(field);
            let parsed: FieldId = id.to_string().parse().unwrap();
            assert_eq!(parsed, id);
        }
    }

    #[test]
    fn item_id_round_trips() {
        let id = FieldId::item(SectionId::Features, 2, "title");
        assert_eq!(id.to_string(), "features-2-title");
        assert_eq!("features-2-title".parse::<FieldId>().unwrap(), id);
    }

    #[test]
    fn section_scalar_round_trips() {
        let id = FieldId::section(SectionId::About, "mission");
        assert_eq!(id.to_string(), "about-mission");
        assert_eq!("about-mission".parse::<FieldId>().unwrap(), id);
    }

    #[test]
    fn multi_segment_slot_survives() {
        let parsed: FieldId = "contact-social-linkedin".parse().unwrap();
        assert_eq!(parsed, FieldId::section(SectionId::Contact, "social-linkedin"));
    }

    #[test]
    fn bad_ids_are_rejected() {
        assert_eq!("".parse::<FieldId>(), Err(FieldIdError::Empty));
        assert!(matches!(
            "header-company".parse::<FieldId>(),
            Err(FieldIdError::UnknownPrefix(_))
        ));
        assert!(matches!(
            "about".parse::<FieldId>(),
            Err(FieldIdError::MissingSlot(_))
        ));
    }
}
