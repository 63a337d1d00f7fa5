//! # Page patches
//!
//! A `PagePatch` is a typed partial `PageData`: every field the single
//! mutation entrypoint can touch, each optional. Top-level fields
//! shallow-replace, `colors` merges key-wise, and arrays always arrive
//! whole and replace wholesale.

use pagecraft_document::{
    FaqItem, Feature, GalleryItem, PageData, PricingTier, StyleBag, StyleField, Testimonial,
    TextAlign,
};
use serde::{Deserialize, Serialize};

/// Key-wise update of the shared palette. Updating one color never
/// discards its siblings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ColorPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secondary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tertiary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bg: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub heading: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PagePatch {
    // Scalars: shallow replace.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub salary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hero_image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub about_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub about_description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mission: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vision: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub twitter: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,

    // Shared design settings.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,
    /// The one nested merge: key-wise, never whole-object replacement.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub colors: Option<ColorPatch>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title_font_size: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description_font_size: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub heading_font_size: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body_font_size: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub button_border_radius: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub card_border_radius: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_align: Option<TextAlign>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bg_gradient_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bg_gradient_start: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bg_gradient_end: Option<String>,

    // Collections and order: supplied whole, replaced wholesale.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub features: Option<Vec<Feature>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub testimonials: Option<Vec<Testimonial>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gallery: Option<Vec<GalleryItem>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub faq: Option<Vec<FaqItem>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pricing: Option<Vec<PricingTier>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub section_order: Option<Vec<String>>,

    // Style override bags: whole-bag replace (the bag itself is partial).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title_styles: Option<StyleBag>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description_styles: Option<StyleBag>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_styles: Option<StyleBag>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location_styles: Option<StyleBag>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub salary_styles: Option<StyleBag>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email_styles: Option<StyleBag>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_styles: Option<StyleBag>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hero_image_styles: Option<StyleBag>,
}

macro_rules! shallow_replace {
    ($patch:ident, $page:ident, $($field:ident),+ $(,)?) => {
        $(if let Some(value) = &$patch.$field {
            $page.$field = value.clone();
        })+
    };
}

impl PagePatch {
    /// Merge this patch into the canonical record. Total and synchronous.
    pub fn apply_to(&self, page: &mut PageData) {
        shallow_replace!(
            self, page, title, description, company, location, salary, email, phone, hero_image,
            about_title, about_description, mission, vision, contact_title, address,
            contact_phone, contact_email, linkedin, twitter, github, font_family,
            title_font_size, description_font_size, heading_font_size, body_font_size,
            button_border_radius, card_border_radius, bg_gradient_start, bg_gradient_end,
            features, testimonials, gallery, faq, pricing, section_order, title_styles,
            description_styles, company_styles, location_styles, salary_styles, email_styles,
            phone_styles, hero_image_styles,
        );
        if let Some(text_align) = self.text_align {
            page.text_align = text_align;
        }
        if let Some(enabled) = self.bg_gradient_enabled {
            page.bg_gradient_enabled = enabled;
        }
        if let Some(colors) = &self.colors {
            merge_color(&mut page.colors.primary, &colors.primary);
            merge_color(&mut page.colors.secondary, &colors.secondary);
            merge_color(&mut page.colors.tertiary, &colors.tertiary);
            merge_color(&mut page.colors.bg, &colors.bg);
            merge_color(&mut page.colors.text, &colors.text);
            merge_color(&mut page.colors.heading, &colors.heading);
        }
    }

    /// Patch carrying a replacement for one field's override bag.
    pub fn with_style_bag(field: StyleField, bag: StyleBag) -> PagePatch {
        let mut patch = PagePatch::default();
        match field {
            StyleField::Title => patch.title_styles = Some(bag),
            StyleField::Description => patch.description_styles = Some(bag),
            StyleField::Company => patch.company_styles = Some(bag),
            StyleField::Location => patch.location_styles = Some(bag),
            StyleField::Salary => patch.salary_styles = Some(bag),
            StyleField::Email => patch.email_styles = Some(bag),
            StyleField::Phone => patch.phone_styles = Some(bag),
            StyleField::HeroImage => patch.hero_image_styles = Some(bag),
        }
        patch
    }
}

fn merge_color(slot: &mut String, value: &Option<String>) {
    if let Some(value) = value {
        *slot = value.clone();
    }
}
