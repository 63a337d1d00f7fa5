//! # Typed style bags
//!
//! Per-field presentation overrides. Each styleable field carries one
//! partial [`StyleBag`]; any property left `None` falls through the
//! resolution chain (built-in defaults, then page-level settings).
//!
//! The styleable fields are a closed set ([`StyleField`]) rather than a
//! dynamic `"<field>Styles"` string lookup, so a typo in a field name is a
//! compile error instead of a silently empty bag. Wire names are unchanged:
//! bags serialize under the legacy `titleStyles` / `heroImageStyles` keys
//! with camelCase properties and CSS keyword values.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::util::lenient_opt;

/// Raised when a raw editor value cannot be parsed for a typed property.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid value '{value}' for style property '{property}'")]
pub struct StyleValueError {
    pub property: &'static str,
    pub value: String,
}

macro_rules! css_keyword_enum {
    ($(#[$meta:meta])* $name:ident { $($variant:ident => $css:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
        #[serde(rename_all = "kebab-case")]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub fn as_css(&self) -> &'static str {
                match self {
                    $($name::$variant => $css),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_css())
            }
        }

        impl FromStr for $name {
            type Err = StyleValueError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($css => Ok($name::$variant),)+
                    _ => Err(StyleValueError {
                        property: stringify!($name),
                        value: s.to_string(),
                    }),
                }
            }
        }
    };
}

css_keyword_enum!(FontWeight {
    Normal => "normal",
    Bold => "bold",
    Lighter => "lighter",
    Bolder => "bolder",
});

css_keyword_enum!(FontStyle {
    Normal => "normal",
    Italic => "italic",
    Oblique => "oblique",
});

css_keyword_enum!(TextDecoration {
    None => "none",
    Underline => "underline",
    LineThrough => "line-through",
    Overline => "overline",
});

css_keyword_enum!(
    /// Shared page setting and per-field text property.
    TextAlign {
        Left => "left",
        Center => "center",
        Right => "right",
        Justify => "justify",
    }
);

impl Default for TextAlign {
    fn default() -> Self {
        TextAlign::Center
    }
}

css_keyword_enum!(ObjectFit {
    Fill => "fill",
    Contain => "contain",
    Cover => "cover",
    None => "none",
    ScaleDown => "scale-down",
});

css_keyword_enum!(BorderStyle {
    Solid => "solid",
    Dashed => "dashed",
    Dotted => "dotted",
    Double => "double",
    Groove => "groove",
    Ridge => "ridge",
    Inset => "inset",
    Outset => "outset",
    None => "none",
});

/// Whether a field renders as text or as an image. The two kinds carry
/// different default property sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Image,
}

/// The closed set of fields that accept per-field style overrides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum StyleField {
    Title,
    Description,
    Company,
    Location,
    Salary,
    Email,
    Phone,
    HeroImage,
}

impl StyleField {
    pub const ALL: [StyleField; 8] = [
        StyleField::Title,
        StyleField::Description,
        StyleField::Company,
        StyleField::Location,
        StyleField::Salary,
        StyleField::Email,
        StyleField::Phone,
        StyleField::HeroImage,
    ];

    pub fn kind(&self) -> FieldKind {
        match self {
            StyleField::HeroImage => FieldKind::Image,
            _ => FieldKind::Text,
        }
    }

    /// Stable wire key, also the prefix of the record's `<key>Styles` bag.
    pub fn key(&self) -> &'static str {
        match self {
            StyleField::Title => "title",
            StyleField::Description => "description",
            StyleField::Company => "company",
            StyleField::Location => "location",
            StyleField::Salary => "salary",
            StyleField::Email => "email",
            StyleField::Phone => "phone",
            StyleField::HeroImage => "heroImage",
        }
    }

    /// Human label shown by editor surfaces.
    pub fn label(&self) -> &'static str {
        match self {
            StyleField::Title => "Page Title",
            StyleField::Description => "Description",
            StyleField::Company => "Company Name",
            StyleField::Location => "Location",
            StyleField::Salary => "Salary Range",
            StyleField::Email => "Email",
            StyleField::Phone => "Phone",
            StyleField::HeroImage => "Hero Image",
        }
    }

    pub fn parse(key: &str) -> Option<StyleField> {
        StyleField::ALL.iter().copied().find(|f| f.key() == key)
    }
}

impl fmt::Display for StyleField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Every property a style bag can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum StyleProperty {
    Color,
    FontSize,
    FontFamily,
    FontWeight,
    FontStyle,
    TextDecoration,
    TextAlign,
    LineHeight,
    LetterSpacing,
    Width,
    Height,
    BorderRadius,
    ObjectFit,
    BorderWidth,
    BorderColor,
    BorderStyle,
    BoxShadow,
    Opacity,
}

impl StyleProperty {
    /// CSS property name used in render output.
    pub fn css_name(&self) -> &'static str {
        match self {
            StyleProperty::Color => "color",
            StyleProperty::FontSize => "font-size",
            StyleProperty::FontFamily => "font-family",
            StyleProperty::FontWeight => "font-weight",
            StyleProperty::FontStyle => "font-style",
            StyleProperty::TextDecoration => "text-decoration",
            StyleProperty::TextAlign => "text-align",
            StyleProperty::LineHeight => "line-height",
            StyleProperty::LetterSpacing => "letter-spacing",
            StyleProperty::Width => "width",
            StyleProperty::Height => "height",
            StyleProperty::BorderRadius => "border-radius",
            StyleProperty::ObjectFit => "object-fit",
            StyleProperty::BorderWidth => "border-width",
            StyleProperty::BorderColor => "border-color",
            StyleProperty::BorderStyle => "border-style",
            StyleProperty::BoxShadow => "box-shadow",
            StyleProperty::Opacity => "opacity",
        }
    }
}

/// A partial set of presentation overrides for one field.
///
/// Every property is optional; a bag never needs to be complete. Unknown
/// keyword values in stored records degrade to `None` and fall back through
/// the resolution chain instead of failing the load.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StyleBag {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "lenient_opt")]
    pub font_weight: Option<FontWeight>,
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "lenient_opt")]
    pub font_style: Option<FontStyle>,
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "lenient_opt")]
    pub text_decoration: Option<TextDecoration>,
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "lenient_opt")]
    pub text_align: Option<TextAlign>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_height: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub letter_spacing: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_radius: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "lenient_opt")]
    pub object_fit: Option<ObjectFit>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_width: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "lenient_opt")]
    pub border_style: Option<BorderStyle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub box_shadow: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opacity: Option<String>,
}

impl StyleBag {
    pub fn is_empty(&self) -> bool {
        self == &StyleBag::default()
    }

    /// Current value of a property, stringified to its CSS form.
    pub fn get(&self, property: StyleProperty) -> Option<String> {
        match property {
            StyleProperty::Color => self.color.clone(),
            StyleProperty::FontSize => self.font_size.clone(),
            StyleProperty::FontFamily => self.font_family.clone(),
            StyleProperty::FontWeight => self.font_weight.map(|v| v.as_css().to_string()),
            StyleProperty::FontStyle => self.font_style.map(|v| v.as_css().to_string()),
            StyleProperty::TextDecoration => self.text_decoration.map(|v| v.as_css().to_string()),
            StyleProperty::TextAlign => self.text_align.map(|v| v.as_css().to_string()),
            StyleProperty::LineHeight => self.line_height.clone(),
            StyleProperty::LetterSpacing => self.letter_spacing.clone(),
            StyleProperty::Width => self.width.clone(),
            StyleProperty::Height => self.height.clone(),
            StyleProperty::BorderRadius => self.border_radius.clone(),
            StyleProperty::ObjectFit => self.object_fit.map(|v| v.as_css().to_string()),
            StyleProperty::BorderWidth => self.border_width.clone(),
            StyleProperty::BorderColor => self.border_color.clone(),
            StyleProperty::BorderStyle => self.border_style.map(|v| v.as_css().to_string()),
            StyleProperty::BoxShadow => self.box_shadow.clone(),
            StyleProperty::Opacity => self.opacity.clone(),
        }
    }

    /// Store a raw editor value. Keyword-typed properties are parsed and
    /// reject unknown keywords; string properties are stored verbatim.
    /// Unit-carrying numeric values are expected to be clamped upstream.
    pub fn set(&mut self, property: StyleProperty, value: &str) -> Result<(), StyleValueError> {
        match property {
            StyleProperty::Color => self.color = Some(value.to_string()),
            StyleProperty::FontSize => self.font_size = Some(value.to_string()),
            StyleProperty::FontFamily => self.font_family = Some(value.to_string()),
            StyleProperty::FontWeight => self.font_weight = Some(value.parse()?),
            StyleProperty::FontStyle => self.font_style = Some(value.parse()?),
            StyleProperty::TextDecoration => self.text_decoration = Some(value.parse()?),
            StyleProperty::TextAlign => self.text_align = Some(value.parse()?),
            StyleProperty::LineHeight => self.line_height = Some(value.to_string()),
            StyleProperty::LetterSpacing => self.letter_spacing = Some(value.to_string()),
            StyleProperty::Width => self.width = Some(value.to_string()),
            StyleProperty::Height => self.height = Some(value.to_string()),
            StyleProperty::BorderRadius => self.border_radius = Some(value.to_string()),
            StyleProperty::ObjectFit => self.object_fit = Some(value.parse()?),
            StyleProperty::BorderWidth => self.border_width = Some(value.to_string()),
            StyleProperty::BorderColor => self.border_color = Some(value.to_string()),
            StyleProperty::BorderStyle => self.border_style = Some(value.parse()?),
            StyleProperty::BoxShadow => self.box_shadow = Some(value.to_string()),
            StyleProperty::Opacity => self.opacity = Some(value.to_string()),
        }
        Ok(())
    }

    pub fn clear(&mut self, property: StyleProperty) {
        match property {
            StyleProperty::Color => self.color = None,
            StyleProperty::FontSize => self.font_size = None,
            StyleProperty::FontFamily => self.font_family = None,
            StyleProperty::FontWeight => self.font_weight = None,
            StyleProperty::FontStyle => self.font_style = None,
            StyleProperty::TextDecoration => self.text_decoration = None,
            StyleProperty::TextAlign => self.text_align = None,
            StyleProperty::LineHeight => self.line_height = None,
            StyleProperty::LetterSpacing => self.letter_spacing = None,
            StyleProperty::Width => self.width = None,
            StyleProperty::Height => self.height = None,
            StyleProperty::BorderRadius => self.border_radius = None,
            StyleProperty::ObjectFit => self.object_fit = None,
            StyleProperty::BorderWidth => self.border_width = None,
            StyleProperty::BorderColor => self.border_color = None,
            StyleProperty::BorderStyle => self.border_style = None,
            StyleProperty::BoxShadow => self.box_shadow = None,
            StyleProperty::Opacity => self.opacity = None,
        }
    }

    /// Overlay `other` onto `self`, property by property. Only properties
    /// present in `other` are replaced; this is never a whole-bag swap.
    pub fn apply(&mut self, other: &StyleBag) {
        macro_rules! overlay {
            ($($field:ident),+ $(,)?) => {
                $(if other.$field.is_some() {
                    self.$field = other.$field.clone();
                })+
            };
        }
        overlay!(
            color,
            font_size,
            font_family,
            font_weight,
            font_style,
            text_decoration,
            text_align,
            line_height,
            letter_spacing,
            width,
            height,
            border_radius,
            object_fit,
            border_width,
            border_color,
            border_style,
            box_shadow,
            opacity,
        );
    }

    /// Present properties as `(css-name, value)` pairs in declaration order.
    pub fn css_pairs(&self) -> Vec<(&'static str, String)> {
        const ORDER: [StyleProperty; 18] = [
            StyleProperty::Color,
            StyleProperty::FontSize,
            StyleProperty::FontFamily,
            StyleProperty::FontWeight,
            StyleProperty::FontStyle,
            StyleProperty::TextDecoration,
            StyleProperty::TextAlign,
            StyleProperty::LineHeight,
            StyleProperty::LetterSpacing,
            StyleProperty::Width,
            StyleProperty::Height,
            StyleProperty::BorderRadius,
            StyleProperty::ObjectFit,
            StyleProperty::BorderWidth,
            StyleProperty::BorderColor,
            StyleProperty::BorderStyle,
            StyleProperty::BoxShadow,
            StyleProperty::Opacity,
        ];

        ORDER
            .iter()
            .filter_map(|p| self.get(*p).map(|v| (p.css_name(), v)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bag_serializes_camel_case_keys() {
        let mut bag = StyleBag::default();
        bag.set(StyleProperty::FontSize, "48px").unwrap();
        bag.set(StyleProperty::TextDecoration, "line-through").unwrap();

        let json = serde_json::to_value(&bag).unwrap();
        assert_eq!(json["fontSize"], "48px");
        assert_eq!(json["textDecoration"], "line-through");
        assert!(json.get("color").is_none());
    }

    #[test]
    fn unknown_keyword_is_rejected() {
        let mut bag = StyleBag::default();
        let err = bag.set(StyleProperty::ObjectFit, "stretch").unwrap_err();
        assert_eq!(err.value, "stretch");
        assert_eq!(bag.object_fit, None);
    }

    #[test]
    fn malformed_stored_keyword_degrades_to_none() {
        let bag: StyleBag =
            serde_json::from_str(r##"{"fontWeight": 700, "color": "#fff"}"##).unwrap();
        assert_eq!(bag.font_weight, None);
        assert_eq!(bag.color.as_deref(), Some("#fff"));
    }

    #[test]
    fn apply_is_property_wise() {
        let mut base = StyleBag::default();
        base.set(StyleProperty::Color, "#111111").unwrap();
        base.set(StyleProperty::FontSize, "16px").unwrap();

        let mut over = StyleBag::default();
        over.set(StyleProperty::FontSize, "20px").unwrap();

        base.apply(&over);
        assert_eq!(base.color.as_deref(), Some("#111111"));
        assert_eq!(base.font_size.as_deref(), Some("20px"));
    }

    #[test]
    fn css_pairs_use_kebab_names() {
        let mut bag = StyleBag::default();
        bag.set(StyleProperty::ObjectFit, "scale-down").unwrap();
        bag.set(StyleProperty::BorderRadius, "8px").unwrap();

        let pairs = bag.css_pairs();
        assert!(pairs.contains(&("object-fit", "scale-down".to_string())));
        assert!(pairs.contains(&("border-radius", "8px".to_string())));
    }

    #[test]
    fn style_field_kinds() {
        assert_eq!(StyleField::HeroImage.kind(), FieldKind::Image);
        assert_eq!(StyleField::Salary.kind(), FieldKind::Text);
        assert_eq!(StyleField::parse("heroImage"), Some(StyleField::HeroImage));
        assert_eq!(StyleField::parse("titleStyles"), None);
    }
}
