//! Section identifiers.
//!
//! The registry's key set is fixed; `sectionOrder` on the wire stays a list
//! of raw strings so that records referencing retired or unknown section ids
//! still load. Unknown ids are dropped at composition time, not at write
//! time.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A section known to the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionId {
    Hero,
    Features,
    Testimonials,
    About,
    Contact,
    Gallery,
    Faq,
    Pricing,
}

impl SectionId {
    /// Every section in registry order.
    pub const ALL: [SectionId; 8] = [
        SectionId::Hero,
        SectionId::Features,
        SectionId::Testimonials,
        SectionId::About,
        SectionId::Contact,
        SectionId::Gallery,
        SectionId::Faq,
        SectionId::Pricing,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SectionId::Hero => "hero",
            SectionId::Features => "features",
            SectionId::Testimonials => "testimonials",
            SectionId::About => "about",
            SectionId::Contact => "contact",
            SectionId::Gallery => "gallery",
            SectionId::Faq => "faq",
            SectionId::Pricing => "pricing",
        }
    }

    /// Parse a wire id. Returns `None` for ids outside the registry key set.
    pub fn parse(id: &str) -> Option<SectionId> {
        SectionId::ALL.iter().copied().find(|s| s.as_str() == id)
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SectionId {
    type Err = UnknownSectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SectionId::parse(s).ok_or_else(|| UnknownSectionError(s.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown section id: {0}")]
pub struct UnknownSectionError(pub String);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_ids_round_trip() {
        for id in SectionId::ALL {
            assert_eq!(SectionId::parse(id.as_str()), Some(id));
        }
    }

    #[test]
    fn unknown_id_is_none() {
        assert_eq!(SectionId::parse("team"), None);
        assert_eq!(SectionId::parse(""), None);
    }

    #[test]
    fn serde_uses_lowercase_ids() {
        let json = serde_json::to_string(&SectionId::Faq).unwrap();
        assert_eq!(json, "\"faq\"");
        let back: SectionId = serde_json::from_str("\"pricing\"").unwrap();
        assert_eq!(back, SectionId::Pricing);
    }
}
