use criterion::{black_box, criterion_group, criterion_main, Criterion};
use pagecraft_document::{FaqItem, Feature, PageData, StyleField, Testimonial};
use pagecraft_evaluator::{compose, render_page, resolve};

fn populated_page() -> PageData {
    let mut page = PageData::template();
    for i in 0..12 {
        page.features.push(Feature {
            title: format!("Feature {i}"),
            description: "A generous description of the feature".to_string(),
        });
        page.testimonials.push(Testimonial {
            name: format!("Person {i}"),
            role: "Engineer".to_string(),
            comment: "It works very well".to_string(),
            rating: 4,
        });
        page.faq.push(FaqItem {
            question: format!("Question {i}?"),
            answer: "An answer".to_string(),
        });
    }
    page.section_order.push("faq".to_string());
    page.about_title = "About".to_string();
    page
}

fn compose_populated(c: &mut Criterion) {
    let page = populated_page();

    c.bench_function("compose_populated", |b| {
        b.iter(|| compose(black_box(&page)))
    });
}

fn resolve_all_fields(c: &mut Criterion) {
    let mut page = populated_page();
    page.title_styles.font_size = Some("64px".to_string());
    page.hero_image_styles.opacity = Some("0.8".to_string());

    c.bench_function("resolve_all_fields", |b| {
        b.iter(|| {
            for field in StyleField::ALL {
                black_box(resolve(field, black_box(&page)));
            }
        })
    });
}

fn render_full_page(c: &mut Criterion) {
    let page = populated_page();

    c.bench_function("render_full_page", |b| {
        b.iter(|| render_page(black_box(&page), None).to_html())
    });
}

criterion_group!(benches, compose_populated, resolve_all_fields, render_full_page);
criterion_main!(benches);
