//! # Section renderers
//!
//! One renderer per catalog section, sharing a schema-driven card renderer
//! for the collection-backed sections. All text falls back to placeholder
//! copy; absent data renders as empty, never as an error.

use pagecraft_document::{
    CollectionKind, FieldId, PageData, SectionId, SlotAccess, StyleField,
};

use crate::style_resolver;
use crate::vdom::Node;

/// A scalar field rendered with its resolved style and `data-field` tag.
fn styled_field(
    tag: &str,
    field: StyleField,
    text: impl Into<String>,
    page: &PageData,
) -> Node {
    Node::element(tag)
        .with_field(&FieldId::scalar(field))
        .with_style_pairs(style_resolver::resolve(field, page).css_pairs())
        .with_text(text)
}

fn or_placeholder<'a>(value: &'a str, placeholder: &'a str) -> &'a str {
    if value.is_empty() {
        placeholder
    } else {
        value
    }
}

/// Centered section heading styled from the shared page settings.
fn section_heading(section: SectionId, slot: &str, text: &str, page: &PageData) -> Node {
    Node::element("h2")
        .with_field(&FieldId::section(section, slot))
        .with_attr("class", "section-heading")
        .with_style("color", page.colors.heading.clone())
        .with_style("font-size", page.heading_font_size.clone())
        .with_style("text-align", "center")
        .with_text(text)
}

fn card(page: &PageData) -> Node {
    Node::element("div")
        .with_attr("class", "card")
        .with_style("background-color", "#ffffff")
        .with_style("border-radius", page.card_border_radius.clone())
}

fn grid() -> Node {
    Node::element("div").with_attr("class", "card-grid")
}

/// Render one collection item's slots per its declarative schema: the
/// first text slot becomes the item title, further text slots metadata,
/// long text a paragraph, and image slots an image when non-empty.
fn item_slot_nodes<T: SlotAccess>(kind: CollectionKind, index: usize, item: &T) -> Vec<Node> {
    use pagecraft_document::DescriptorKind;

    let section = kind.section();
    let mut nodes = Vec::new();
    let mut seen_text = false;

    for descriptor in kind.schema() {
        let value = item.get_slot(descriptor.slot).unwrap_or_default();
        let field = FieldId::item(section, index, descriptor.slot);

        match descriptor.kind {
            DescriptorKind::ImageUrl => {
                if !value.is_empty() {
                    nodes.push(
                        Node::element("img")
                            .with_field(&field)
                            .with_attr("class", "item-image")
                            .with_attr("src", value),
                    );
                }
            }
            DescriptorKind::Text => {
                let tag = if seen_text { "p" } else { "h3" };
                let class = if seen_text { "item-meta" } else { "item-title" };
                seen_text = true;
                nodes.push(
                    Node::element(tag)
                        .with_field(&field)
                        .with_attr("class", class)
                        .with_text(value),
                );
            }
            DescriptorKind::TextArea => {
                nodes.push(
                    Node::element("p")
                        .with_field(&field)
                        .with_attr("class", "item-body")
                        .with_text(value),
                );
            }
        }
    }

    nodes
}

pub fn render_hero(page: &PageData) -> Node {
    let mut section = Node::element("section")
        .with_attr("id", "hero")
        .with_attr("class", "hero");

    if page.hero_image.is_empty() {
        section = section.with_child(
            Node::element("div").with_attr("class", "hero-image-placeholder"),
        );
    } else {
        section = section.with_child(
            Node::element("img")
                .with_field(&FieldId::scalar(StyleField::HeroImage))
                .with_attr("class", "hero-image")
                .with_attr("src", page.hero_image.clone())
                .with_attr("alt", "Hero")
                .with_style_pairs(
                    style_resolver::resolve(StyleField::HeroImage, page).css_pairs(),
                ),
        );
    }

    let mut overlay = Node::element("div")
        .with_attr("class", "hero-overlay")
        .with_child(styled_field(
            "h1",
            StyleField::Title,
            or_placeholder(&page.title, "Welcome to Our Platform"),
            page,
        ))
        .with_child(styled_field(
            "p",
            StyleField::Description,
            or_placeholder(
                &page.description,
                "Transform your career with innovative solutions and opportunities.",
            ),
            page,
        ));

    let mut meta = Node::element("p")
        .with_attr("class", "hero-meta")
        .with_child(styled_field(
            "span",
            StyleField::Company,
            or_placeholder(&page.company, "Your Company"),
            page,
        ))
        .with_child(styled_field(
            "span",
            StyleField::Location,
            or_placeholder(&page.location, "Remote"),
            page,
        ));
    if !page.salary.is_empty() {
        meta = meta.with_child(styled_field("span", StyleField::Salary, page.salary.as_str(), page));
    }
    if !page.email.is_empty() {
        meta = meta.with_child(styled_field("span", StyleField::Email, page.email.as_str(), page));
    }
    if !page.phone.is_empty() {
        meta = meta.with_child(styled_field("span", StyleField::Phone, page.phone.as_str(), page));
    }
    overlay = overlay.with_child(meta);

    overlay = overlay.with_child(
        Node::element("div")
            .with_attr("class", "hero-actions")
            .with_child(
                Node::element("button")
                    .with_attr("class", "btn-primary")
                    .with_style("background-color", page.colors.primary.clone())
                    .with_style("border-radius", page.button_border_radius.clone())
                    .with_text("Get Started"),
            )
            .with_child(
                Node::element("button")
                    .with_attr("class", "btn-secondary")
                    .with_style("border-radius", page.button_border_radius.clone())
                    .with_text("Learn More"),
            ),
    );

    section.with_child(overlay)
}

pub fn render_features(page: &PageData) -> Node {
    let mut cards = grid();
    for (index, feature) in page.features.iter().enumerate() {
        cards = cards.with_child(
            card(page)
                .with_child(
                    Node::element("div")
                        .with_attr("class", "feature-badge")
                        .with_style("background-color", page.colors.primary.clone())
                        .with_text((index + 1).to_string()),
                )
                .with_children(item_slot_nodes(CollectionKind::Features, index, feature)),
        );
    }

    Node::element("section")
        .with_attr("id", "features")
        .with_child(section_heading(
            SectionId::Features,
            "heading",
            "Why Choose Us?",
            page,
        ))
        .with_child(cards)
}

fn star_rating(rating: u8) -> Node {
    let rating = if rating == 0 { 5 } else { rating.min(5) };
    let mut stars = Node::element("div").with_attr("class", "star-rating");
    for position in 1..=5u8 {
        let class = if position <= rating { "star filled" } else { "star" };
        stars = stars.with_child(Node::element("span").with_attr("class", class).with_text("★"));
    }
    stars
}

pub fn render_testimonials(page: &PageData) -> Node {
    let mut cards = grid();
    for (index, testimonial) in page.testimonials.iter().enumerate() {
        let initial = testimonial
            .name
            .chars()
            .next()
            .map(|c| c.to_string())
            .unwrap_or_else(|| "A".to_string());

        cards = cards.with_child(
            card(page)
                .with_style("background-color", page.colors.secondary.clone())
                .with_child(
                    Node::element("div")
                        .with_attr("class", "avatar")
                        .with_style("background-color", page.colors.primary.clone())
                        .with_text(initial),
                )
                .with_children(item_slot_nodes(
                    CollectionKind::Testimonials,
                    index,
                    testimonial,
                ))
                .with_child(star_rating(testimonial.rating)),
        );
    }

    Node::element("section")
        .with_attr("id", "testimonials")
        .with_child(section_heading(
            SectionId::Testimonials,
            "heading",
            "What People Say",
            page,
        ))
        .with_child(cards)
}

pub fn render_about(page: &PageData) -> Node {
    let mut section = Node::element("section")
        .with_attr("id", "about")
        .with_child(section_heading(
            SectionId::About,
            "title",
            or_placeholder(&page.about_title, "About Us"),
            page,
        ));

    if !page.about_description.is_empty() {
        section = section.with_child(
            Node::element("p")
                .with_field(&FieldId::section(SectionId::About, "description"))
                .with_attr("class", "about-description")
                .with_text(page.about_description.clone()),
        );
    }
    if !page.mission.is_empty() {
        section = section.with_child(
            card(page)
                .with_child(Node::element("h3").with_text("Our Mission"))
                .with_child(
                    Node::element("p")
                        .with_field(&FieldId::section(SectionId::About, "mission"))
                        .with_text(page.mission.clone()),
                ),
        );
    }
    if !page.vision.is_empty() {
        section = section.with_child(
            card(page)
                .with_child(Node::element("h3").with_text("Our Vision"))
                .with_child(
                    Node::element("p")
                        .with_field(&FieldId::section(SectionId::About, "vision"))
                        .with_text(page.vision.clone()),
                ),
        );
    }

    section
}

pub fn render_contact(page: &PageData) -> Node {
    let mut details = card(page).with_child(Node::element("h3").with_text("Get In Touch"));
    for (slot, label, value) in [
        ("address", "Address", &page.address),
        ("phone", "Phone", &page.contact_phone),
        ("email", "Email", &page.contact_email),
    ] {
        if !value.is_empty() {
            details = details.with_child(
                Node::element("p")
                    .with_field(&FieldId::section(SectionId::Contact, slot))
                    .with_child(Node::element("strong").with_text(format!("{label}: ")))
                    .with_text((*value).clone()),
            );
        }
    }

    let mut social = card(page).with_child(Node::element("h3").with_text("Follow Us"));
    for (slot, label, url) in [
        ("linkedin", "LinkedIn", &page.linkedin),
        ("twitter", "Twitter", &page.twitter),
        ("github", "GitHub", &page.github),
    ] {
        if !url.is_empty() {
            social = social.with_child(
                Node::element("a")
                    .with_field(&FieldId::section(SectionId::Contact, slot))
                    .with_attr("href", (*url).clone())
                    .with_text(label),
            );
        }
    }

    Node::element("section")
        .with_attr("id", "contact")
        .with_child(section_heading(
            SectionId::Contact,
            "title",
            or_placeholder(&page.contact_title, "Contact Us"),
            page,
        ))
        .with_child(
            Node::element("div")
                .with_attr("class", "card-grid")
                .with_child(details)
                .with_child(social),
        )
}

pub fn render_gallery(page: &PageData) -> Node {
    let mut cards = grid();
    for (index, item) in page.gallery.iter().enumerate() {
        cards = cards
            .with_child(card(page).with_children(item_slot_nodes(
                CollectionKind::Gallery,
                index,
                item,
            )));
    }

    Node::element("section")
        .with_attr("id", "gallery")
        .with_child(section_heading(
            SectionId::Gallery,
            "heading",
            "Gallery",
            page,
        ))
        .with_child(cards)
}

pub fn render_faq(page: &PageData) -> Node {
    let mut list = Node::element("div").with_attr("class", "faq-list");
    for (index, item) in page.faq.iter().enumerate() {
        list = list
            .with_child(card(page).with_children(item_slot_nodes(CollectionKind::Faq, index, item)));
    }

    Node::element("section")
        .with_attr("id", "faq")
        .with_child(section_heading(
            SectionId::Faq,
            "heading",
            "Frequently Asked Questions",
            page,
        ))
        .with_child(list)
}

pub fn render_pricing(page: &PageData) -> Node {
    let mut cards = grid();
    for (index, tier) in page.pricing.iter().enumerate() {
        let mut tier_card = card(page)
            .with_child(
                Node::element("h3")
                    .with_field(&FieldId::item(SectionId::Pricing, index, "plan"))
                    .with_attr("class", "item-title")
                    .with_text(tier.plan.clone()),
            )
            .with_child(
                Node::element("p")
                    .with_field(&FieldId::item(SectionId::Pricing, index, "price"))
                    .with_attr("class", "price")
                    .with_text(tier.price.clone()),
            );

        if !tier.features.is_empty() {
            let mut list = Node::element("ul")
                .with_field(&FieldId::item(SectionId::Pricing, index, "features"));
            for entry in tier.features.split(',') {
                list = list.with_child(Node::element("li").with_text(entry.trim()));
            }
            tier_card = tier_card.with_child(list);
        }

        cards = cards.with_child(tier_card);
    }

    Node::element("section")
        .with_attr("id", "pricing")
        .with_child(section_heading(
            SectionId::Pricing,
            "heading",
            "Pricing Plans",
            page,
        ))
        .with_child(cards)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pagecraft_document::{PricingTier, Testimonial};

    #[test]
    fn hero_uses_placeholders_for_empty_fields() {
        let page = PageData::default();
        let html = render_hero(&page).to_html();
        assert!(html.contains("Welcome to Our Platform"));
        assert!(html.contains("Your Company"));
        assert!(!html.contains("<img"));
        assert!(html.contains("hero-image-placeholder"));
    }

    #[test]
    fn hero_image_carries_resolved_styles() {
        let mut page = PageData::default();
        page.hero_image = "https://example.com/hero.png".to_string();
        page.hero_image_styles.border_radius = Some("12px".to_string());

        let html = render_hero(&page).to_html();
        assert!(html.contains("data-field=\"heroImage\""));
        assert!(html.contains("border-radius: 12px;"));
        assert!(html.contains("object-fit: cover;"));
    }

    #[test]
    fn testimonial_cards_render_stars_and_slots() {
        let mut page = PageData::default();
        page.testimonials.push(Testimonial {
            name: "Ada".to_string(),
            role: "Engineer".to_string(),
            comment: "Great place".to_string(),
            rating: 3,
        });

        let html = render_testimonials(&page).to_html();
        assert!(html.contains("data-field=\"testimonials-0-comment\""));
        assert_eq!(html.matches("star filled").count(), 3);
        assert!(html.contains(">A<"));
    }

    #[test]
    fn pricing_splits_comma_separated_features() {
        let mut page = PageData::default();
        page.pricing.push(PricingTier {
            plan: "Pro".to_string(),
            price: "$10".to_string(),
            features: "One, Two ,Three".to_string(),
        });

        let html = render_pricing(&page).to_html();
        assert_eq!(html.matches("<li>").count(), 3);
        assert!(html.contains("<li>Two</li>"));
    }

    #[test]
    fn contact_skips_empty_rows() {
        let mut page = PageData::default();
        page.contact_email = "hi@example.com".to_string();

        let html = render_contact(&page).to_html();
        assert!(html.contains("data-field=\"contact-email\""));
        assert!(!html.contains("data-field=\"contact-phone\""));
        assert!(!html.contains("data-field=\"contact-linkedin\""));
        assert!(html.contains("Contact Us"));
    }
}
