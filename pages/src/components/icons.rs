//! Inline SVG icons for cards and the toast.
//!
//! Path data is Phosphor (regular weight, 256 viewBox). Icons are purely
//! decorative, so every `<svg>` is hidden from assistive tech.

use leptos::prelude::*;

/// Decorative icon: `path` is the SVG `d` string, drawn in `currentColor`
/// unless `color` says otherwise.
///
/// ```rust,ignore
/// view! { <Icon path=ICON_X size="16" class="toast-dismiss-icon" /> }
/// ```
#[component]
pub fn Icon(
    /// `d` attribute
    path: &'static str,
    /// Square edge in px
    #[prop(default = "20")]
    size: &'static str,
    /// CSS fill
    #[prop(default = "currentColor")]
    color: &'static str,
    /// Extra classes
    #[prop(default = "")]
    class: &'static str,
) -> impl IntoView {
    view! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            width=size
            height=size
            fill=color
            viewBox="0 0 256 256"
            class=class
            aria-hidden="true"
        >
            <path d=path></path>
        </svg>
    }
}

/// Opening quotes on every testimonial.
pub const ICON_QUOTES: &str = "M100,56H40A16,16,0,0,0,24,72v64a16,16,0,0,0,16,16h60v8a32,32,0,0,1-32,32,8,8,0,0,0,0,16,48.05,48.05,0,0,0,48-48V72A16,16,0,0,0,100,56Zm0,80H40V72h60ZM216,56H156a16,16,0,0,0-16,16v64a16,16,0,0,0,16,16h60v8a32,32,0,0,1-32,32,8,8,0,0,0,0,16,48.05,48.05,0,0,0,48-48V72A16,16,0,0,0,216,56Zm0,80H156V72h60Z";

/// Toast success mark.
pub const ICON_CHECK_CIRCLE: &str = "M173.66,98.34a8,8,0,0,1,0,11.32l-56,56a8,8,0,0,1-11.32,0l-24-24a8,8,0,0,1,11.32-11.32L112,148.69l50.34-50.35A8,8,0,0,1,173.66,98.34ZM232,128A104,104,0,1,1,128,24,104.11,104.11,0,0,1,232,128Zm-16,0a88,88,0,1,0-88,88A88.1,88.1,0,0,0,216,128Z";

/// Toast dismiss button.
pub const ICON_X: &str = "M205.66,194.34a8,8,0,0,1-11.32,11.32L128,139.31,61.66,205.66a8,8,0,0,1-11.32-11.32L116.69,128,50.34,61.66A8,8,0,0,1,61.66,50.34L128,116.69l66.34-66.35a8,8,0,0,1,11.32,11.32L139.31,128Z";

/// Marks a card that links out to the original review.
pub const ICON_ARROW_UP_RIGHT: &str = "M200,64V168a8,8,0,0,1-16,0V83.31L69.66,197.66a8,8,0,0,1-11.32-11.32L172.69,72H88a8,8,0,0,1,0-16H192A8,8,0,0,1,200,64Z";
