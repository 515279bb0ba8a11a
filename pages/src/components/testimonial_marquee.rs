//! Testimonial section - composes cards into a marquee row or a grid.
//!
//! Cards keep input order. Nothing is deduplicated or sorted here; if the
//! content store returns duplicates they are shown twice.

use leptos::prelude::*;

use super::TestimonialCard;
use crate::types::{TestimonialLayout, TestimonialRecord};

/// CSS class of the element that directly holds the cards.
pub(crate) fn track_class(layout: TestimonialLayout) -> &'static str {
    match layout {
        TestimonialLayout::Marquee => "marquee-track",
        TestimonialLayout::Sectioned => "testimonial-grid",
    }
}

/// All testimonials for a page. Renders nothing for an empty list.
#[component]
pub fn TestimonialMarquee(
    testimonials: Vec<TestimonialRecord>,
    /// Marquee row (default) or sectioned grid
    #[prop(optional)]
    layout: TestimonialLayout,
) -> impl IntoView {
    if testimonials.is_empty() {
        return view! { "" }.into_any();
    }

    let track = track_class(layout);

    view! {
        <TestimonialFrame layout=layout>
            <div class=track>
                {testimonials
                    .into_iter()
                    .map(|record| view! { <TestimonialCard record=record /> })
                    .collect::<Vec<_>>()}
            </div>
        </TestimonialFrame>
    }
    .into_any()
}

/// Section wrapper around the card track.
///
/// Shared by the component path and the cached string path so both emit the
/// same outer markup.
#[component]
pub fn TestimonialFrame(layout: TestimonialLayout, children: Children) -> impl IntoView {
    let (section_class, viewport_class) = match layout {
        TestimonialLayout::Marquee => ("testimonials testimonials-marquee", "marquee"),
        TestimonialLayout::Sectioned => ("testimonials testimonials-sectioned", "testimonial-section"),
    };

    view! {
        <section class=section_class aria-label="What our customers say">
            <div class="container">
                <h2 class="section-title">"What our customers say"</h2>
            </div>
            <div class=viewport_class>{children()}</div>
        </section>
    }
}
