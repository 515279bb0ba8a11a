//! Raw JSON to typed records, one record at a time.
//!
//! A record that lacks a required field is dropped with a warning; the rest
//! of the batch still renders. Optional fields fall back to their defaults.

use serde::Deserialize;
use serde_json::Value;
use tracing::warn;

use showroom_pages::types::{ProjectData, TestimonialAuthor, TestimonialRecord};

#[derive(Deserialize)]
struct RawTestimonial {
    #[serde(default)]
    author: Option<RawAuthor>,
    #[serde(default)]
    text: Option<String>,
    #[serde(default)]
    href: Option<String>,
}

#[derive(Deserialize)]
struct RawAuthor {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    handle: Option<String>,
    // Image objects and other non-string shapes count as "no avatar".
    #[serde(default)]
    avatar: Option<Value>,
}

/// Decode testimonials, keeping input order.
///
/// Required: `author.name` and `text`. Missing `handle` becomes empty,
/// a missing or non-string `avatar` falls back to initials.
pub fn decode_testimonials(raw: &[Value]) -> Vec<TestimonialRecord> {
    raw.iter()
        .enumerate()
        .filter_map(|(index, value)| match decode_testimonial(value) {
            Ok(record) => Some(record),
            Err(reason) => {
                warn!(index, reason, "skipping testimonial record");
                None
            }
        })
        .collect()
}

fn decode_testimonial(value: &Value) -> Result<TestimonialRecord, &'static str> {
    let raw: RawTestimonial =
        serde_json::from_value(value.clone()).map_err(|_| "record is not an object of the expected shape")?;

    let author = raw.author.ok_or("missing author")?;
    let name = author.name.ok_or("missing author.name")?;
    let text = raw.text.ok_or("missing text")?;

    Ok(TestimonialRecord {
        author: TestimonialAuthor {
            name,
            handle: author.handle.unwrap_or_default(),
            avatar: author
                .avatar
                .and_then(|avatar| avatar.as_str().map(str::to_owned))
                .filter(|url| !url.trim().is_empty()),
        },
        text,
        href: raw.href.filter(|href| !href.trim().is_empty()),
    })
}

/// Decode projects, keeping input order.
///
/// Required: `_id` and `title`. Unknown fields are kept in
/// [`ProjectData::extra`].
pub fn decode_projects(raw: &[Value]) -> Vec<ProjectData> {
    raw.iter()
        .enumerate()
        .filter_map(|(index, value)| {
            match serde_json::from_value::<ProjectData>(value.clone()) {
                Ok(project) => Some(project),
                Err(error) => {
                    let id = value.get("_id").and_then(Value::as_str).unwrap_or("?");
                    warn!(index, id, %error, "skipping project record");
                    None
                }
            }
        })
        .collect()
}
