//! Testimonial card - one quote with its author.
//!
//! Pure transform from a [`TestimonialRecord`] to markup. A card with an
//! `href` is a single `<a>` block, otherwise a plain `<div>`.

use leptos::prelude::*;

use super::{ICON_ARROW_UP_RIGHT, ICON_QUOTES, Icon};
use crate::types::TestimonialRecord;

/// A single testimonial card.
#[component]
pub fn TestimonialCard(record: TestimonialRecord) -> impl IntoView {
    let href = record.link().map(str::to_owned);

    match href {
        Some(href) => view! {
            <a
                class="testimonial-card testimonial-card-link"
                data-card="testimonial"
                href=href
                target="_blank"
                rel="noopener noreferrer"
            >
                <CardBody record=record linked=true />
            </a>
        }
        .into_any(),
        None => view! {
            <div class="testimonial-card" data-card="testimonial">
                <CardBody record=record linked=false />
            </div>
        }
        .into_any(),
    }
}

#[component]
fn CardBody(record: TestimonialRecord, linked: bool) -> impl IntoView {
    let TestimonialRecord { author, text, .. } = record;

    let avatar = match author.avatar_url().map(str::to_owned) {
        Some(src) => view! {
            <img class="testimonial-avatar" src=src alt=author.name.clone() loading="lazy" />
        }
        .into_any(),
        // Blank names leave the bubble empty rather than failing the card
        None => view! {
            <span class="testimonial-avatar testimonial-initials" aria-hidden="true">
                {author.initials()}
            </span>
        }
        .into_any(),
    };

    view! {
        <div class="testimonial-header">
            {avatar}
            <div class="testimonial-author">
                <span class="testimonial-name">{author.name}</span>
                <span class="testimonial-handle">{author.handle}</span>
            </div>
            {linked.then(|| view! {
                <Icon path=ICON_ARROW_UP_RIGHT size="16" class="testimonial-link-icon" />
            })}
        </div>
        <blockquote class="testimonial-text">
            <Icon path=ICON_QUOTES size="18" class="testimonial-quote-icon" />
            {text}
        </blockquote>
    }
}
