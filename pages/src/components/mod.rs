//! Leptos UI components for rendering site pages.
//!
//! Each component is a Leptos `#[component]` function rendered server-side
//! to static HTML. They take owned record values and never mutate them.
//!
//! # Component Hierarchy
//!
//! ```text
//! PageDocument
//! ├── ProjectGallery (optional)
//! │   └── ProjectTile (per project)
//! ├── TestimonialMarquee
//! │   └── TestimonialFrame
//! │       └── TestimonialCard (per record)
//! ├── ContactForm (optional)
//! └── SuccessToast (optional)
//! ```
//!
//! # Usage
//!
//! Components are typically used via [`crate::render_page`], but
//! can be used directly for custom layouts:
//!
//! ```rust,ignore
//! use leptos::prelude::*;
//! use showroom_pages::components::TestimonialMarquee;
//!
//! view! {
//!     <TestimonialMarquee testimonials=records layout=TestimonialLayout::Sectioned />
//! }
//! ```

mod document;
mod icons;
mod project_gallery;
mod testimonial_card;
mod testimonial_marquee;
mod toast;

pub use document::PageDocument;
pub use icons::*;
pub use project_gallery::ProjectGallery;
pub use testimonial_card::TestimonialCard;
pub(crate) use testimonial_marquee::track_class;
pub use testimonial_marquee::{TestimonialFrame, TestimonialMarquee};
pub use toast::{ContactForm, SuccessToast};
