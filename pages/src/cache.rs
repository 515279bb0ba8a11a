//! Memoized card rendering.
//!
//! Card markup is a pure function of the record, so it is cached by the
//! record's structural value: an equal record reuses the stored HTML, a
//! record with any field changed is a different key.

use std::collections::HashMap;

use leptos::prelude::*;
use leptos::tachys::view::RenderHtml;

use crate::components::{TestimonialFrame, track_class};
use crate::render_card;
use crate::types::{TestimonialLayout, TestimonialRecord};

/// Rendered-card cache keyed by record value.
#[derive(Debug, Default)]
pub struct RenderCache {
    cards: HashMap<TestimonialRecord, String>,
    hits: usize,
    misses: usize,
}

impl RenderCache {
    /// Empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// HTML for one card, rendered at most once per distinct record.
    pub fn card(&mut self, record: &TestimonialRecord) -> &str {
        if self.cards.contains_key(record) {
            self.hits += 1;
        } else {
            self.misses += 1;
            self.cards.insert(record.clone(), render_card(record));
        }
        &self.cards[record]
    }

    /// Testimonial section built from cached cards.
    ///
    /// Same outer markup as [`crate::render_testimonials`]. An empty slice
    /// yields an empty string.
    pub fn render_testimonials(
        &mut self,
        records: &[TestimonialRecord],
        layout: TestimonialLayout,
    ) -> String {
        if records.is_empty() {
            return String::new();
        }

        let cards: String = records
            .iter()
            .map(|record| self.card(record).to_owned())
            .collect();
        let track = track_class(layout);

        view! {
            <TestimonialFrame layout=layout>
                <div class=track inner_html=cards></div>
            </TestimonialFrame>
        }
        .to_html()
    }

    /// Number of lookups served from the cache.
    pub fn hits(&self) -> usize {
        self.hits
    }

    /// Number of lookups that had to render.
    pub fn misses(&self) -> usize {
        self.misses
    }

    /// Distinct records cached.
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// True when nothing has been rendered yet.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Drop every cached card and reset the counters.
    pub fn clear(&mut self) {
        self.cards.clear();
        self.hits = 0;
        self.misses = 0;
    }
}
