//! # Page record
//!
//! `PageData` is the canonical nested configuration record for one page and
//! the exact shape persisted by the gateway. Field names are camelCase on
//! the wire for compatibility with existing stored records; every field has
//! a default so a sparse or partially malformed record always loads.

use serde::{Deserialize, Serialize};

use crate::style::{StyleBag, StyleField, StyleProperty, TextAlign};
use crate::util::{lenient_or_default, lenient_seq};
use pagecraft_common::CommonResult;

/// Shared page colors, merged key-wise on update so that changing one
/// color never discards its siblings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ColorPalette {
    pub primary: String,
    pub secondary: String,
    pub tertiary: String,
    pub bg: String,
    pub text: String,
    pub heading: String,
}

impl Default for ColorPalette {
    fn default() -> Self {
        Self {
            primary: "#3b82f6".to_string(),
            secondary: "#6b7280".to_string(),
            tertiary: "#9ca3af".to_string(),
            bg: "#ffffff".to_string(),
            text: "#1f2937".to_string(),
            heading: "#1f2937".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Feature {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Testimonial {
    pub name: String,
    pub role: String,
    pub comment: String,
    /// 1-5 stars. Stored records without a rating render as five stars.
    #[serde(deserialize_with = "lenient_rating")]
    pub rating: u8,
}

impl Default for Testimonial {
    fn default() -> Self {
        Self {
            name: String::new(),
            role: String::new(),
            comment: String::new(),
            rating: 5,
        }
    }
}

fn lenient_rating<'de, D>(deserializer: D) -> Result<u8, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).unwrap_or(5))
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GalleryItem {
    pub url: String,
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FaqItem {
    pub question: String,
    pub answer: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PricingTier {
    pub plan: String,
    pub price: String,
    /// Comma-separated feature list, split at render time.
    pub features: String,
}

/// The canonical page-configuration record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PageData {
    // Hero / listing content
    pub title: String,
    pub description: String,
    pub company: String,
    pub location: String,
    pub salary: String,
    pub email: String,
    pub phone: String,
    pub hero_image: String,

    // About section
    pub about_title: String,
    pub about_description: String,
    pub mission: String,
    pub vision: String,

    // Contact section
    pub contact_title: String,
    pub address: String,
    pub contact_phone: String,
    pub contact_email: String,
    pub linkedin: String,
    pub twitter: String,
    pub github: String,

    // Shared design settings
    pub font_family: String,
    #[serde(deserialize_with = "lenient_or_default")]
    pub colors: ColorPalette,
    pub title_font_size: String,
    pub description_font_size: String,
    pub heading_font_size: String,
    pub body_font_size: String,
    pub button_border_radius: String,
    pub card_border_radius: String,
    #[serde(deserialize_with = "lenient_or_default")]
    pub text_align: TextAlign,
    #[serde(deserialize_with = "lenient_or_default")]
    pub bg_gradient_enabled: bool,
    pub bg_gradient_start: String,
    pub bg_gradient_end: String,

    // Ordered collections. Item identity is positional.
    #[serde(deserialize_with = "lenient_seq")]
    pub features: Vec<Feature>,
    #[serde(deserialize_with = "lenient_seq")]
    pub testimonials: Vec<Testimonial>,
    #[serde(deserialize_with = "lenient_seq")]
    pub gallery: Vec<GalleryItem>,
    #[serde(deserialize_with = "lenient_seq")]
    pub faq: Vec<FaqItem>,
    #[serde(deserialize_with = "lenient_seq")]
    pub pricing: Vec<PricingTier>,

    /// Which sections are visible and in what sequence. Raw wire ids;
    /// unknown ids are dropped by the compositor, never rejected here.
    #[serde(deserialize_with = "lenient_seq")]
    pub section_order: Vec<String>,

    // Per-field style overrides (partial bags, see `StyleField`).
    #[serde(skip_serializing_if = "StyleBag::is_empty")]
    pub title_styles: StyleBag,
    #[serde(skip_serializing_if = "StyleBag::is_empty")]
    pub description_styles: StyleBag,
    #[serde(skip_serializing_if = "StyleBag::is_empty")]
    pub company_styles: StyleBag,
    #[serde(skip_serializing_if = "StyleBag::is_empty")]
    pub location_styles: StyleBag,
    #[serde(skip_serializing_if = "StyleBag::is_empty")]
    pub salary_styles: StyleBag,
    #[serde(skip_serializing_if = "StyleBag::is_empty")]
    pub email_styles: StyleBag,
    #[serde(skip_serializing_if = "StyleBag::is_empty")]
    pub phone_styles: StyleBag,
    #[serde(skip_serializing_if = "StyleBag::is_empty")]
    pub hero_image_styles: StyleBag,
}

impl Default for PageData {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            company: String::new(),
            location: String::new(),
            salary: String::new(),
            email: String::new(),
            phone: String::new(),
            hero_image: String::new(),
            about_title: String::new(),
            about_description: String::new(),
            mission: String::new(),
            vision: String::new(),
            contact_title: String::new(),
            address: String::new(),
            contact_phone: String::new(),
            contact_email: String::new(),
            linkedin: String::new(),
            twitter: String::new(),
            github: String::new(),
            font_family: "Arial, sans-serif".to_string(),
            colors: ColorPalette::default(),
            title_font_size: "48px".to_string(),
            description_font_size: "20px".to_string(),
            heading_font_size: "32px".to_string(),
            body_font_size: "16px".to_string(),
            button_border_radius: "8px".to_string(),
            card_border_radius: "8px".to_string(),
            text_align: TextAlign::Center,
            bg_gradient_enabled: false,
            bg_gradient_start: "#ffffff".to_string(),
            bg_gradient_end: "#f8fafc".to_string(),
            features: Vec::new(),
            testimonials: Vec::new(),
            gallery: Vec::new(),
            faq: Vec::new(),
            pricing: Vec::new(),
            section_order: default_section_order(),
            title_styles: StyleBag::default(),
            description_styles: StyleBag::default(),
            company_styles: StyleBag::default(),
            location_styles: StyleBag::default(),
            salary_styles: StyleBag::default(),
            email_styles: StyleBag::default(),
            phone_styles: StyleBag::default(),
            hero_image_styles: StyleBag::default(),
        }
    }
}

/// Initial visible sections for a blank page.
pub fn default_section_order() -> Vec<String> {
    ["hero", "features", "testimonials", "about", "contact"]
        .into_iter()
        .map(String::from)
        .collect()
}

impl PageData {
    /// The fixed built-in template used when creating a new page.
    pub fn template() -> Self {
        let mut title_styles = StyleBag::default();
        for (property, value) in [
            (StyleProperty::Color, "#ffffff"),
            (StyleProperty::FontSize, "48px"),
            (StyleProperty::FontWeight, "bold"),
            (StyleProperty::TextAlign, "center"),
            (StyleProperty::FontFamily, "Arial, sans-serif"),
            (StyleProperty::TextDecoration, "none"),
            (StyleProperty::FontStyle, "normal"),
            (StyleProperty::LineHeight, "1.2"),
            (StyleProperty::LetterSpacing, "0px"),
        ] {
            // Template values are all well-formed keywords.
            let _ = title_styles.set(property, value);
        }

        let mut hero_image_styles = StyleBag::default();
        for (property, value) in [
            (StyleProperty::Width, "100%"),
            (StyleProperty::Height, "500px"),
            (StyleProperty::BorderRadius, "0px"),
            (StyleProperty::ObjectFit, "cover"),
            (StyleProperty::BorderWidth, "0px"),
            (StyleProperty::BorderColor, "#000000"),
            (StyleProperty::BorderStyle, "solid"),
            (StyleProperty::BoxShadow, "none"),
            (StyleProperty::Opacity, "1"),
        ] {
            let _ = hero_image_styles.set(property, value);
        }

        Self {
            title: "New Page".to_string(),
            description: "Describe your page here...".to_string(),
            company: "Your Company".to_string(),
            colors: ColorPalette {
                bg: "#f9fafb".to_string(),
                ..ColorPalette::default()
            },
            testimonials: vec![Testimonial::default()],
            title_styles,
            hero_image_styles,
            ..Self::default()
        }
    }

    /// Load a record from its persisted JSON form.
    pub fn from_json(json: &str) -> CommonResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> CommonResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// The override bag stored for `field`.
    pub fn style_overrides(&self, field: StyleField) -> &StyleBag {
        match field {
            StyleField::Title => &self.title_styles,
            StyleField::Description => &self.description_styles,
            StyleField::Company => &self.company_styles,
            StyleField::Location => &self.location_styles,
            StyleField::Salary => &self.salary_styles,
            StyleField::Email => &self.email_styles,
            StyleField::Phone => &self.phone_styles,
            StyleField::HeroImage => &self.hero_image_styles,
        }
    }

    pub fn style_overrides_mut(&mut self, field: StyleField) -> &mut StyleBag {
        match field {
            StyleField::Title => &mut self.title_styles,
            StyleField::Description => &mut self.description_styles,
            StyleField::Company => &mut self.company_styles,
            StyleField::Location => &mut self.location_styles,
            StyleField::Salary => &mut self.salary_styles,
            StyleField::Email => &mut self.email_styles,
            StyleField::Phone => &mut self.phone_styles,
            StyleField::HeroImage => &mut self.hero_image_styles,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_names_are_camel_case() {
        let json = serde_json::to_value(PageData::default()).unwrap();
        assert!(json.get("sectionOrder").is_some());
        assert!(json.get("bgGradientEnabled").is_some());
        assert!(json.get("buttonBorderRadius").is_some());
        assert_eq!(json["fontFamily"], "Arial, sans-serif");
        // Empty override bags stay off the wire.
        assert!(json.get("titleStyles").is_none());
    }

    #[test]
    fn template_seeds_style_bags() {
        let page = PageData::template();
        assert_eq!(page.title, "New Page");
        assert_eq!(page.title_styles.color.as_deref(), Some("#ffffff"));
        assert_eq!(page.hero_image_styles.height.as_deref(), Some("500px"));
        assert_eq!(page.testimonials.len(), 1);
        assert_eq!(page.testimonials[0].rating, 5);

        let json = serde_json::to_value(&page).unwrap();
        assert!(json.get("titleStyles").is_some());
        assert!(json.get("heroImageStyles").is_some());
    }

    #[test]
    fn sparse_record_loads_with_defaults() {
        let page = PageData::from_json(r#"{"title": "Hello"}"#).unwrap();
        assert_eq!(page.title, "Hello");
        assert_eq!(page.colors.primary, "#3b82f6");
        assert!(page.features.is_empty());
        assert_eq!(
            page.section_order,
            vec!["hero", "features", "testimonials", "about", "contact"]
        );
    }

    #[test]
    fn malformed_fields_degrade_instead_of_failing() {
        let page = PageData::from_json(
            r#"{
                "title": "ok",
                "colors": 42,
                "bgGradientEnabled": "yes",
                "features": [{"title": "a"}, "junk", {"title": "b"}],
                "sectionOrder": ["hero", 7, "faq"]
            }"#,
        )
        .unwrap();

        assert_eq!(page.colors, ColorPalette::default());
        assert!(!page.bg_gradient_enabled);
        assert_eq!(page.features.len(), 2);
        assert_eq!(page.section_order, vec!["hero", "faq"]);
    }

    #[test]
    fn unknown_section_ids_survive_the_record() {
        let page = PageData::from_json(r#"{"sectionOrder": ["hero", "team", "faq"]}"#).unwrap();
        assert_eq!(page.section_order, vec!["hero", "team", "faq"]);
    }

    #[test]
    fn round_trip_preserves_collections() {
        let mut page = PageData::template();
        page.features.push(Feature {
            title: "Fast".to_string(),
            description: "Very fast".to_string(),
        });
        page.faq.push(FaqItem {
            question: "Why?".to_string(),
            answer: "Because.".to_string(),
        });

        let back = PageData::from_json(&page.to_json().unwrap()).unwrap();
        assert_eq!(back, page);
    }
}
