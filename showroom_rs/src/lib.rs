//! # showroom
//!
//! **Content pipeline for the showroom marketing site** - turns CMS records
//! into static pages and keeps the sitemap in step with the routes.
//!
//! ## Features
//!
//! - **Content adapters** - Decode testimonials and projects, skip broken records
//! - **Gallery fallback** - Every project gets a thumbnail
//! - **Success toast** - Single auto-dismissing notification with cancellation
//! - **Sitemap emitter** - Atomic `sitemap.xml` from the route table
//! - **Static build** - One `index.html` per route, rendered with Leptos SSR
//!
//! ## Quick Start (Library Usage)
//!
//! ```rust,no_run
//! use std::path::Path;
//! use showroom::config::SiteConfig;
//! use showroom::content::JsonFileStore;
//! use showroom::site::build_site;
//!
//! let config = SiteConfig::load(Path::new(".")).unwrap();
//! let store = JsonFileStore::new("content");
//! let summary = build_site(&store, &config, Path::new("dist")).unwrap();
//! println!("{} pages", summary.pages);
//! ```
//!
//! ## CLI Usage
//!
//! ```bash
//! showroom build --content content --out dist
//! showroom build --source cms     # query the content API (SANITY_* env)
//! showroom sitemap --base-url https://www.example.co.uk
//! showroom check-config
//! showroom-sitemap                 # one-shot, for prebuild hooks
//! ```

// ============================================================================
// Core Modules
// ============================================================================

/// `.showroom/config.toml` and the CMS environment variables.
pub mod config;

/// Content stores, query URLs and record decoding.
///
/// # Submodules
///
/// - `cms` - HTTP store for the hosted content API
/// - `decode` - raw JSON to typed records
/// - `query` - GROQ query URLs for the hosted content API
pub mod content;

pub mod error;
pub mod fs_utils;

/// Thumbnail fallback for project galleries.
pub mod gallery;

/// Toast state machine and its tokio timer.
pub mod notification;

pub mod progress;

/// Page table and static build.
pub mod site;

/// `sitemap.xml` rendering and atomic write.
pub mod sitemap;

// ============================================================================
// Re-exports
// ============================================================================

pub use config::{CmsConfig, SiteConfig};
pub use content::{CmsStore, ContentKind, ContentStore, JsonFileStore, StaticStore};
pub use error::{BuildError, ConfigError, ContentError, SitemapError};
pub use gallery::GalleryAdapter;
pub use notification::{Notification, ToastState, ToastTimer};
pub use site::{build_site, BuildSummary};
pub use sitemap::{emit, render_sitemap, RouteDescriptor, SitemapOptions};

/// Record and page types shared with the renderer.
pub use showroom_pages::types;
