//! # showroom-pages
//!
//! Leptos SSR components for the showroom marketing site.
//!
//! Content records (testimonials, projects) go in, static HTML comes out.
//! The crate knows nothing about where records come from; the `showroom`
//! crate fetches and adapts them, then hands finished values to
//! [`render_page`].
//!
//! ## Quick Start
//!
//! ```rust
//! use showroom_pages::render_page;
//! use showroom_pages::types::{Page, PageMeta};
//!
//! let page = Page {
//!     meta: PageMeta {
//!         title: "Flooring | Showroom".into(),
//!         description: "Oak, vinyl and laminate floors fitted in a day.".into(),
//!         ..Default::default()
//!     },
//!     heading: "Flooring".into(),
//!     ..Default::default()
//! };
//!
//! let html = render_page(&page);
//! assert!(html.starts_with("<!DOCTYPE html>"));
//! ```
//!
//! ## Architecture
//!
//! - [`types`] - Record types and the page model
//! - [`components`] - Leptos UI components
//! - [`cache`] - Memoized card rendering
//! - [`styles`] - CSS and the small client script
//!
//! Rendering uses Leptos 0.8's `RenderHtml` trait; no reactive runtime or
//! hydration is involved.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod cache;
pub mod components;
pub mod styles;
pub mod types;

use components::{PageDocument, TestimonialCard, TestimonialMarquee};
use leptos::prelude::*;
use leptos::tachys::view::RenderHtml;
use types::{Page, TestimonialLayout, TestimonialRecord};

pub use cache::RenderCache;

/// Render a complete HTML page.
///
/// Returns a full document including `<!DOCTYPE html>`.
pub fn render_page(page: &Page) -> String {
    let doc = view! { <PageDocument page=page.clone() /> };

    let html = doc.to_html();

    // Leptos doesn't include DOCTYPE, so we add it
    format!("<!DOCTYPE html>\n{}", html)
}

/// Render one testimonial card to an HTML fragment.
pub fn render_card(record: &TestimonialRecord) -> String {
    view! { <TestimonialCard record=record.clone() /> }.to_html()
}

/// Render a testimonial section to an HTML fragment.
///
/// Cards appear in input order. An empty slice yields an empty string.
pub fn render_testimonials(records: &[TestimonialRecord], layout: TestimonialLayout) -> String {
    if records.is_empty() {
        return String::new();
    }

    view! { <TestimonialMarquee testimonials=records.to_vec() layout=layout /> }.to_html()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;
    use types::{GalleryProject, PageMeta, TestimonialAuthor, ToastView};

    fn testimonial(name: &str, text: &str, href: Option<&str>) -> TestimonialRecord {
        TestimonialRecord {
            author: TestimonialAuthor {
                name: name.into(),
                handle: "@customer".into(),
                avatar: None,
            },
            text: text.into(),
            href: href.map(Into::into),
        }
    }

    fn card_count(html: &str) -> usize {
        html.matches("data-card=\"testimonial\"").count()
    }

    #[test]
    fn card_without_href_is_not_a_link() {
        let html = render_card(&testimonial("Jane Q Doe", "Great fitters", None));

        assert!(!html.contains("<a "));
        assert!(!html.contains("href="));
        assert!(html.starts_with("<div "));
        assert!(html.contains("class=\"testimonial-card\""));
        assert!(html.contains("data-card=\"testimonial\""));
    }

    #[test]
    fn card_with_href_is_a_link() {
        let html = render_card(&testimonial(
            "Jane Q Doe",
            "Great fitters",
            Some("https://reviews.example.com/jane"),
        ));

        assert!(html.contains("<a "));
        assert!(html.contains("href=\"https://reviews.example.com/jane\""));
        assert!(html.contains("testimonial-card-link"));
    }

    #[test]
    fn card_shows_initials_without_avatar() {
        let html = render_card(&testimonial("Jane Q Doe", "Great fitters", None));

        assert!(html.contains("testimonial-initials"));
        assert!(html.contains("JQD"));
        assert!(html.contains("Jane Q Doe"));
        assert!(html.contains("@customer"));
        assert!(html.contains("Great fitters"));
    }

    #[test]
    fn card_prefers_avatar_image() {
        let mut record = testimonial("Jane Q Doe", "Great fitters", None);
        record.author.avatar = Some("/avatars/jane.jpg".into());

        let html = render_card(&record);

        assert!(html.contains("src=\"/avatars/jane.jpg\""));
        assert!(!html.contains("testimonial-initials"));
    }

    #[test]
    fn card_with_empty_name_still_renders() {
        let html = render_card(&testimonial("", "Anonymous but happy", None));

        assert!(html.contains("testimonial-initials"));
        assert!(html.contains("Anonymous but happy"));
    }

    #[test]
    fn card_escapes_text() {
        let html = render_card(&testimonial("Bob", "<script>alert(1)</script>", None));
        assert!(!html.contains("<script>"));
    }

    #[test]
    fn empty_testimonials_render_nothing() {
        let html = render_testimonials(&[], TestimonialLayout::Marquee);
        assert_eq!(card_count(&html), 0);
        assert!(html.is_empty());
    }

    #[test]
    fn testimonials_keep_input_order() {
        let records = vec![
            testimonial("Zoe", "quote-one", None),
            testimonial("Adam", "quote-two", None),
            testimonial("Zoe", "quote-one", None),
        ];

        let html = render_testimonials(&records, TestimonialLayout::Marquee);

        assert_eq!(card_count(&html), 3);
        let one = html.find("quote-one").unwrap();
        let two = html.find("quote-two").unwrap();
        assert!(one < two);
        assert!(html.contains("marquee-track"));
    }

    #[test]
    fn sectioned_layout_uses_grid() {
        let records = vec![testimonial("Zoe", "quote", None)];
        let html = render_testimonials(&records, TestimonialLayout::Sectioned);
        assert!(html.contains("testimonial-grid"));
        assert!(!html.contains("marquee-track"));
    }

    #[test]
    fn renders_page_metadata() {
        let mut extra = BTreeMap::new();
        extra.insert("og:title".to_string(), "Blinds made to measure".to_string());

        let page = Page {
            meta: PageMeta {
                title: "Blinds | Showroom".into(),
                description: "Roller, Roman and Venetian blinds.".into(),
                canonical: Some("https://showroom.example/blinds".into()),
                extra,
            },
            site_name: "Showroom".into(),
            heading: "Blinds".into(),
            ..Default::default()
        };

        let html = render_page(&page);

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>Blinds | Showroom</title>"));
        assert!(html.contains("content=\"Roller, Roman and Venetian blinds.\""));
        assert!(html.contains("href=\"https://showroom.example/blinds\""));
        assert!(html.contains("name=\"og:title\""));
    }

    #[test]
    fn renders_gallery_and_toast() {
        let project = GalleryProject {
            id: "p1".into(),
            title: "Sunlit lounge".into(),
            category: Some("blinds".into()),
            thumbnail: Some("/img/lounge-thumb.jpg".into()),
            ..Default::default()
        };
        let page = Page {
            heading: "Contact".into(),
            gallery: Some(vec![project]),
            contact_form: true,
            toast: Some(ToastView {
                message: "Thanks! We'll be in touch.".into(),
                visible: false,
                duration_ms: 3000,
            }),
            ..Default::default()
        };

        let html = render_page(&page);

        assert!(html.contains("Sunlit lounge"));
        assert!(html.contains("src=\"/img/lounge-thumb.jpg\""));
        assert!(html.contains("id=\"success-toast\""));
        assert!(html.contains("data-duration=\"3000\""));
        assert!(html.contains("data-state=\"hidden\""));
        assert!(html.contains("data-role=\"contact-form\""));
    }

    #[test]
    fn visible_toast_carries_message_twice() {
        let page = Page {
            toast: Some(ToastView {
                message: "Message sent".into(),
                visible: true,
                duration_ms: 4500,
            }),
            ..Default::default()
        };

        let html = render_page(&page);

        assert!(html.contains("data-message=\"Message sent\""));
        assert_eq!(html.matches("Message sent").count(), 2);
        assert!(html.contains("data-state=\"visible\""));
        assert!(html.contains("data-duration=\"4500\""));
    }

    #[test]
    fn page_without_gallery_omits_section() {
        let page = Page {
            heading: "About".into(),
            ..Default::default()
        };
        let html = render_page(&page);
        assert!(!html.contains("aria-label=\"Project gallery\""));
        assert!(!html.contains("id=\"success-toast\""));
    }
}
