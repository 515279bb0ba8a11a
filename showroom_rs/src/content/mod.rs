//! Content store access.
//!
//! The CMS is an external collaborator. This module only fixes the narrow
//! interface the site needs ([`ContentStore`]), the HTTP store that talks to
//! the hosted API ([`CmsStore`]), a couple of local stores, and the
//! per-record decoding that turns raw JSON into typed records.
//!
//! ```rust,no_run
//! use showroom::content::{ContentKind, ContentStore, JsonFileStore, decode_testimonials};
//!
//! let store = JsonFileStore::new("content");
//! let raw = store.fetch(ContentKind::Testimonials).unwrap();
//! let testimonials = decode_testimonials(&raw);
//! println!("{} testimonials", testimonials.len());
//! ```

mod cms;
mod decode;
mod query;

use std::collections::HashMap;
use std::fmt;
use std::path::{Path, PathBuf};

use serde_json::Value;
use tracing::debug;

use crate::error::ContentError;

pub use decode::{decode_projects, decode_testimonials};
pub use cms::CmsStore;
pub use query::{query_path, query_url};

/// Document types the site reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContentKind {
    Projects,
    Testimonials,
}

impl ContentKind {
    pub const ALL: [ContentKind; 2] = [ContentKind::Projects, ContentKind::Testimonials];

    /// `_type` of the documents in the CMS schema.
    pub fn document_type(self) -> &'static str {
        match self {
            ContentKind::Projects => "project",
            ContentKind::Testimonials => "testimonial",
        }
    }

    /// GROQ query returning every document of this kind, newest first for
    /// projects and in editor order for testimonials.
    pub fn groq(self) -> &'static str {
        match self {
            ContentKind::Projects => {
                r#"*[_type == "project"] | order(_createdAt desc) { ..., "images": images[].asset->url }"#
            }
            ContentKind::Testimonials => {
                r#"*[_type == "testimonial"] | order(orderRank asc) { author, text, href }"#
            }
        }
    }

    /// File name used by [`JsonFileStore`].
    pub fn file_name(self) -> &'static str {
        match self {
            ContentKind::Projects => "projects.json",
            ContentKind::Testimonials => "testimonials.json",
        }
    }
}

impl fmt::Display for ContentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ContentKind::Projects => "projects",
            ContentKind::Testimonials => "testimonials",
        })
    }
}

/// Anything that can hand out raw records of a given kind.
///
/// Records come back as untyped JSON; decoding (and skipping bad records)
/// is the caller's job.
pub trait ContentStore {
    fn fetch(&self, kind: ContentKind) -> Result<Vec<Value>, ContentError>;
}

/// Reads `projects.json` / `testimonials.json` from a directory.
///
/// Each file may be a bare array or a saved query response
/// (`{ "ms": 12, "result": [...] }`). A missing file means no records.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    root: PathBuf,
}

impl JsonFileStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn path_for(&self, kind: ContentKind) -> PathBuf {
        self.root.join(kind.file_name())
    }
}

impl ContentStore for JsonFileStore {
    fn fetch(&self, kind: ContentKind) -> Result<Vec<Value>, ContentError> {
        let path = self.path_for(kind);
        if !path.exists() {
            debug!(path = %path.display(), %kind, "content file missing, no records");
            return Ok(Vec::new());
        }

        let content = std::fs::read_to_string(&path).map_err(|source| ContentError::Read {
            path: path.clone(),
            source,
        })?;
        let value: Value = serde_json::from_str(&content).map_err(|source| ContentError::Json {
            path: path.clone(),
            source,
        })?;

        let records = unwrap_envelope(value).ok_or(ContentError::Shape { path: path.clone() })?;
        debug!(path = %path.display(), %kind, count = records.len(), "loaded content");
        Ok(records)
    }
}

pub(crate) fn unwrap_envelope(value: Value) -> Option<Vec<Value>> {
    match value {
        Value::Array(items) => Some(items),
        Value::Object(mut map) => match map.remove("result") {
            Some(Value::Array(items)) => Some(items),
            Some(Value::Null) => Some(Vec::new()),
            _ => None,
        },
        _ => None,
    }
}

/// In-memory store for static arrays and tests.
#[derive(Debug, Clone, Default)]
pub struct StaticStore {
    records: HashMap<ContentKind, Vec<Value>>,
}

impl StaticStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, kind: ContentKind, records: Vec<Value>) -> Self {
        self.records.insert(kind, records);
        self
    }
}

impl ContentStore for StaticStore {
    fn fetch(&self, kind: ContentKind) -> Result<Vec<Value>, ContentError> {
        Ok(self.records.get(&kind).cloned().unwrap_or_default())
    }
}
