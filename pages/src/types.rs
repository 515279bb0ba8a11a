//! Content record types shared by the data layer and the components.
//!
//! These types define the render contract. They're designed to be:
//!
//! - **Serializable** - Records come straight out of CMS JSON via serde
//! - **Immutable** - Components take owned clones, nothing is mutated in place
//! - **Default-able** - Build partial pages with `..Default::default()`
//!
//! # Example
//!
//! ```rust
//! use showroom_pages::types::{TestimonialAuthor, TestimonialRecord};
//!
//! let record = TestimonialRecord {
//!     author: TestimonialAuthor {
//!         name: "Jane Q Doe".into(),
//!         handle: "@janeqdoe".into(),
//!         avatar: None,
//!     },
//!     text: "The new oak flooring transformed our hallway.".into(),
//!     href: None,
//! };
//!
//! assert_eq!(record.author.initials(), "JQD");
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// The person quoted in a testimonial.
///
/// `name` and `handle` should be non-empty for a good looking card, but an
/// empty name only degrades the avatar fallback, it never fails a render.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TestimonialAuthor {
    /// Display name, e.g. "Jane Q Doe"
    pub name: String,
    /// Short handle shown under the name, e.g. "@janeqdoe"
    #[serde(default)]
    pub handle: String,
    /// Avatar image URL. Empty strings are treated as absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

impl TestimonialAuthor {
    /// Initials used when no avatar is available.
    ///
    /// Splits `name` on whitespace, takes the first character of every token,
    /// uppercases it and concatenates in order. `"Jane Q Doe"` gives `"JQD"`;
    /// an empty or blank name gives an empty string.
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|token| token.chars().next())
            .flat_map(char::to_uppercase)
            .collect()
    }

    /// Avatar URL if one is set and non-blank.
    pub fn avatar_url(&self) -> Option<&str> {
        self.avatar.as_deref().filter(|url| !url.trim().is_empty())
    }
}

/// One customer testimonial.
///
/// Read-only at render time. Equality and hashing are structural so the
/// record itself can key [`crate::cache::RenderCache`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TestimonialRecord {
    /// Who said it
    pub author: TestimonialAuthor,
    /// The quote
    pub text: String,
    /// Optional link target; when set the whole card becomes a link
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
}

impl TestimonialRecord {
    /// Link target if one is set and non-blank.
    pub fn link(&self) -> Option<&str> {
        self.href.as_deref().filter(|href| !href.trim().is_empty())
    }
}

/// How a list of testimonials is arranged on the page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TestimonialLayout {
    /// Single continuously scrolling row
    #[default]
    Marquee,
    /// Static grid section
    Sectioned,
}

/// A project record from the content store.
///
/// Only the fields the site consumes are typed. Everything else the CMS
/// returns lands in `extra` and is serialized back out untouched.
///
/// # Example
///
/// ```rust
/// use showroom_pages::types::ProjectData;
///
/// let project: ProjectData = serde_json::from_str(r#"{
///     "_id": "p-1",
///     "title": "Herringbone hallway",
///     "slug": { "_type": "slug", "current": "herringbone-hallway" },
///     "category": "flooring",
///     "images": ["/img/hallway-1.jpg"],
///     "client": "Private residence"
/// }"#).unwrap();
///
/// assert_eq!(project.slug.as_deref(), Some("herringbone-hallway"));
/// assert!(project.thumbnail.is_none());
/// assert_eq!(project.extra["client"], "Private residence");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectData {
    /// Document id (`_id` in the CMS)
    #[serde(rename = "_id")]
    pub id: String,
    /// Project title
    pub title: String,
    /// URL slug, accepted either as a plain string or as `{ "current": "..." }`
    #[serde(
        default,
        deserialize_with = "deserialize_slug",
        skip_serializing_if = "Option::is_none"
    )]
    pub slug: Option<String>,
    /// Short description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Product line: "wallpapers", "flooring", "blinds"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Full-size image URLs, first one is the cover
    #[serde(default)]
    pub images: Vec<String>,
    /// Local-only thumbnail, filled by the gallery adapter when missing
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
    /// Opaque pass-through fields
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A project ready for the gallery. Same shape as [`ProjectData`].
pub type GalleryProject = ProjectData;

#[derive(Deserialize)]
#[serde(untagged)]
enum SlugField {
    Plain(String),
    Object { current: String },
}

fn deserialize_slug<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let slug = Option::<SlugField>::deserialize(deserializer)?;
    Ok(slug.map(|field| match field {
        SlugField::Plain(s) => s,
        SlugField::Object { current } => current,
    }))
}

/// Per-page SEO metadata, injected into `<head>` as-is.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageMeta {
    /// `<title>` text
    pub title: String,
    /// `<meta name="description">` content
    pub description: String,
    /// Absolute canonical URL, if known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub canonical: Option<String>,
    /// Additional `<meta name=... content=...>` pairs (e.g. "og:title")
    #[serde(default)]
    pub extra: BTreeMap<String, String>,
}

/// State handed to the success toast component.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToastView {
    /// Text shown in the banner
    pub message: String,
    /// Whether the banner is currently shown
    pub visible: bool,
    /// Auto-dismiss delay in milliseconds for the client-side timer
    pub duration_ms: u64,
}

impl Default for ToastView {
    fn default() -> Self {
        Self {
            message: String::new(),
            visible: false,
            duration_ms: 3000,
        }
    }
}

/// Everything needed to render one full page.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Page {
    /// Head metadata
    pub meta: PageMeta,
    /// Site name shown in the header and footer
    pub site_name: String,
    /// Main heading
    pub heading: String,
    /// Lead paragraph under the heading
    pub intro: String,
    /// Navigation entries: (label, href)
    #[serde(default)]
    pub nav: Vec<(String, String)>,
    /// Testimonials to show, in display order
    #[serde(default)]
    pub testimonials: Vec<TestimonialRecord>,
    /// How to arrange the testimonials
    #[serde(default)]
    pub testimonial_layout: TestimonialLayout,
    /// Adapted gallery projects; `None` leaves the gallery section out
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gallery: Option<Vec<GalleryProject>>,
    /// Render the quote request form
    #[serde(default)]
    pub contact_form: bool,
    /// Success toast, for pages that have one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub toast: Option<ToastView>,
}
