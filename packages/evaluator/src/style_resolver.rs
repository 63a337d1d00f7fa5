//! # Style resolution
//!
//! Computes the effective presentation style of a field from three layers,
//! lowest to highest precedence:
//!
//! 1. built-in defaults for the field's kind (text and image fields carry
//!    different property sets),
//! 2. page-level shared settings (font family, text alignment, role font
//!    size, text color),
//! 3. the field's own override bag, applied property by property.
//!
//! Unit-carrying numeric properties are `"<number><unit>"` strings with
//! declared bounds. Writes clamp into bounds; values that fail numeric
//! parsing are rejected at write time and ignored at resolution time, so a
//! corrupt stored override can never reach render output.

use pagecraft_document::{
    BorderStyle, FieldKind, FontStyle, FontWeight, ObjectFit, PageData, StyleBag, StyleField,
    StyleProperty, TextAlign, TextDecoration,
};
use tracing::{debug, instrument, warn};

/// Declared range for a unit-carrying numeric property.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NumericBounds {
    pub min: f64,
    pub max: f64,
    pub unit: &'static str,
}

impl NumericBounds {
    pub const fn new(min: f64, max: f64, unit: &'static str) -> Self {
        Self { min, max, unit }
    }
}

/// Bounds catalog. Properties not listed here are free-form strings.
pub fn declared_bounds(property: StyleProperty) -> Option<NumericBounds> {
    match property {
        StyleProperty::FontSize => Some(NumericBounds::new(8.0, 100.0, "px")),
        StyleProperty::LineHeight => Some(NumericBounds::new(0.5, 3.0, "")),
        StyleProperty::LetterSpacing => Some(NumericBounds::new(-5.0, 10.0, "px")),
        StyleProperty::Width => Some(NumericBounds::new(10.0, 100.0, "%")),
        StyleProperty::Height => Some(NumericBounds::new(50.0, 1000.0, "px")),
        StyleProperty::BorderRadius => Some(NumericBounds::new(0.0, 100.0, "px")),
        StyleProperty::BorderWidth => Some(NumericBounds::new(0.0, 20.0, "px")),
        StyleProperty::Opacity => Some(NumericBounds::new(0.0, 1.0, "")),
        _ => None,
    }
}

/// Parse the numeric prefix of a `"<number><unit>"` string.
pub fn parse_numeric(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    let mut end = 0;
    for (i, ch) in trimmed.char_indices() {
        if ch.is_ascii_digit() || ch == '.' || (i == 0 && ch == '-') {
            end = i + ch.len_utf8();
        } else {
            break;
        }
    }
    if end == 0 {
        return None;
    }
    trimmed[..end].parse::<f64>().ok()
}

fn format_number(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        format!("{value}")
    }
}

/// Clamp a raw value into `bounds` and re-append the declared unit.
/// Returns `None` when the value has no numeric prefix.
pub fn clamp_to(raw: &str, bounds: &NumericBounds) -> Option<String> {
    let number = parse_numeric(raw)?;
    let clamped = number.clamp(bounds.min, bounds.max);
    Some(format!("{}{}", format_number(clamped), bounds.unit))
}

/// Normalize a raw editor value for `property`: numeric properties are
/// parsed and clamped into their declared bounds, everything else passes
/// through verbatim. `None` means the value must be rejected, not stored.
pub fn clamp_style_value(property: StyleProperty, raw: &str) -> Option<String> {
    match declared_bounds(property) {
        Some(bounds) => clamp_to(raw, &bounds),
        None => Some(raw.to_string()),
    }
}

/// Built-in defaults for text fields.
pub fn text_defaults() -> StyleBag {
    StyleBag {
        color: Some("#000000".to_string()),
        font_size: Some("16px".to_string()),
        font_family: Some("Arial, sans-serif".to_string()),
        font_weight: Some(FontWeight::Normal),
        font_style: Some(FontStyle::Normal),
        text_decoration: Some(TextDecoration::None),
        text_align: Some(TextAlign::Left),
        line_height: Some("1.2".to_string()),
        letter_spacing: Some("0px".to_string()),
        ..StyleBag::default()
    }
}

/// Built-in defaults for image fields.
pub fn image_defaults() -> StyleBag {
    StyleBag {
        width: Some("100%".to_string()),
        height: Some("500px".to_string()),
        border_radius: Some("0px".to_string()),
        object_fit: Some(ObjectFit::Cover),
        border_width: Some("0px".to_string()),
        border_color: Some("#000000".to_string()),
        border_style: Some(BorderStyle::Solid),
        box_shadow: Some("none".to_string()),
        opacity: Some("1".to_string()),
        ..StyleBag::default()
    }
}

/// The page-level shared settings that apply to `field`.
fn page_layer(field: StyleField, page: &PageData) -> StyleBag {
    if field.kind() == FieldKind::Image {
        // Nothing page-wide applies to image properties.
        return StyleBag::default();
    }

    let role_size = match field {
        StyleField::Title => &page.title_font_size,
        StyleField::Description => &page.description_font_size,
        _ => &page.body_font_size,
    };
    let color = match field {
        StyleField::Title => &page.colors.heading,
        _ => &page.colors.text,
    };

    StyleBag {
        font_family: non_empty(&page.font_family),
        text_align: Some(page.text_align),
        font_size: non_empty(role_size),
        color: non_empty(color),
        ..StyleBag::default()
    }
}

fn non_empty(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

/// Drop or clamp numeric override values so nothing unparseable or
/// out-of-range reaches the resolved bag.
fn sanitize_overrides(mut overrides: StyleBag, field: StyleField) -> StyleBag {
    const NUMERIC: [StyleProperty; 8] = [
        StyleProperty::FontSize,
        StyleProperty::LineHeight,
        StyleProperty::LetterSpacing,
        StyleProperty::Width,
        StyleProperty::Height,
        StyleProperty::BorderRadius,
        StyleProperty::BorderWidth,
        StyleProperty::Opacity,
    ];

    for property in NUMERIC {
        let Some(raw) = overrides.get(property) else {
            continue;
        };
        match clamp_style_value(property, &raw) {
            Some(clamped) => {
                if clamped != raw {
                    debug!(field = %field, property = property.css_name(), %raw, %clamped, "clamped override value");
                }
                // Numeric properties are plain strings; this cannot fail.
                let _ = overrides.set(property, &clamped);
            }
            None => {
                warn!(field = %field, property = property.css_name(), %raw, "dropping unparseable override value");
                overrides.clear(property);
            }
        }
    }

    overrides
}

/// Resolve the effective style bag for one field.
#[instrument(level = "debug", skip(page))]
pub fn resolve(field: StyleField, page: &PageData) -> StyleBag {
    let mut bag = match field.kind() {
        FieldKind::Text => text_defaults(),
        FieldKind::Image => image_defaults(),
    };
    bag.apply(&page_layer(field, page));
    bag.apply(&sanitize_overrides(page.style_overrides(field).clone(), field));
    bag
}
