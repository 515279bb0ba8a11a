//! Sitemap emitter.
//!
//! Serializes the hand-maintained route list into a sitemaps.org `<urlset>`
//! and writes it in one atomic step, so the output path holds either the
//! previous file or the complete new one.

use std::path::{Path, PathBuf};

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::config::SiteConfig;
use crate::error::SitemapError;
use crate::fs_utils::write_atomic;

pub const SITEMAP_XMLNS: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";

/// How often a page is expected to change (sitemap protocol values).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeFreq {
    Always,
    Hourly,
    Daily,
    Weekly,
    Monthly,
    Yearly,
    Never,
}

impl ChangeFreq {
    pub fn as_str(self) -> &'static str {
        match self {
            ChangeFreq::Always => "always",
            ChangeFreq::Hourly => "hourly",
            ChangeFreq::Daily => "daily",
            ChangeFreq::Weekly => "weekly",
            ChangeFreq::Monthly => "monthly",
            ChangeFreq::Yearly => "yearly",
            ChangeFreq::Never => "never",
        }
    }
}

/// One page URL and its sitemap metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteDescriptor {
    /// Site-relative path, starting with `/`
    pub url: String,
    pub changefreq: ChangeFreq,
    /// 0.0 to 1.0
    pub priority: f32,
    /// Fixed modification time; `None` means "time of generation"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lastmod: Option<DateTime<Utc>>,
}

impl RouteDescriptor {
    pub fn new(url: &str, changefreq: ChangeFreq, priority: f32) -> Self {
        Self {
            url: url.to_string(),
            changefreq,
            priority,
            lastmod: None,
        }
    }
}

/// The site's routes. Keep in step with [`crate::site::pages`].
pub fn default_routes() -> Vec<RouteDescriptor> {
    vec![
        RouteDescriptor::new("/", ChangeFreq::Weekly, 1.0),
        RouteDescriptor::new("/wallpapers", ChangeFreq::Monthly, 0.8),
        RouteDescriptor::new("/flooring", ChangeFreq::Monthly, 0.8),
        RouteDescriptor::new("/blinds", ChangeFreq::Monthly, 0.8),
        RouteDescriptor::new("/contact", ChangeFreq::Yearly, 0.5),
    ]
}

/// ISO-8601 UTC with milliseconds, e.g. `2024-05-01T09:30:00.000Z`.
pub fn format_lastmod(timestamp: DateTime<Utc>) -> String {
    timestamp.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Build the sitemap document.
///
/// `now` stamps every route without its own `lastmod`.
pub fn render_sitemap(
    base_url: &str,
    routes: &[RouteDescriptor],
    now: DateTime<Utc>,
) -> Result<String, SitemapError> {
    let origin = base_url.trim().trim_end_matches('/');
    let mut xml = String::with_capacity(128 + routes.len() * 192);

    xml.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    xml.push_str(&format!("<urlset xmlns=\"{}\">\n", SITEMAP_XMLNS));

    for route in routes {
        validate_route(route)?;
        let loc = format!("{}{}", origin, route.url);
        let lastmod = format_lastmod(route.lastmod.unwrap_or(now));

        xml.push_str("  <url>\n");
        xml.push_str(&format!("    <loc>{}</loc>\n", escape_xml(&loc)));
        xml.push_str(&format!("    <lastmod>{}</lastmod>\n", lastmod));
        xml.push_str(&format!(
            "    <changefreq>{}</changefreq>\n",
            route.changefreq.as_str()
        ));
        xml.push_str(&format!(
            "    <priority>{}</priority>\n",
            format_priority(route.priority)
        ));
        xml.push_str("  </url>\n");
    }

    xml.push_str("</urlset>\n");
    Ok(xml)
}

/// Two decimals at most, trailing zeros dropped but one kept: `1.0`, `0.85`.
fn format_priority(priority: f32) -> String {
    let fixed = format!("{:.2}", priority);
    let trimmed = fixed.trim_end_matches('0');
    if trimmed.ends_with('.') {
        format!("{}0", trimmed)
    } else {
        trimmed.to_string()
    }
}

fn validate_route(route: &RouteDescriptor) -> Result<(), SitemapError> {
    if !route.url.starts_with('/') {
        return Err(SitemapError::InvalidRoute {
            url: route.url.clone(),
            reason: "must start with '/'".to_string(),
        });
    }
    if !route.priority.is_finite() || !(0.0..=1.0).contains(&route.priority) {
        return Err(SitemapError::InvalidRoute {
            url: route.url.clone(),
            reason: format!("priority {} outside 0.0..=1.0", route.priority),
        });
    }
    Ok(())
}

/// Escape special characters for XML text content.
fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

/// Write the finished document; the target is replaced atomically.
pub fn write_sitemap(path: &Path, xml: &str) -> Result<(), SitemapError> {
    write_atomic(path, xml.as_bytes()).map_err(|source| SitemapError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), bytes = xml.len(), "sitemap file replaced");
    Ok(())
}

/// What to emit and where.
#[derive(Debug, Clone)]
pub struct SitemapOptions {
    pub base_url: String,
    pub output: PathBuf,
    pub routes: Vec<RouteDescriptor>,
}

impl SitemapOptions {
    /// Default routes, origin and output path from the site config.
    pub fn from_config(config: &SiteConfig) -> Self {
        Self {
            base_url: config.origin().to_string(),
            output: config.sitemap.output.clone(),
            routes: default_routes(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmitSummary {
    pub path: PathBuf,
    pub entries: usize,
    pub bytes: usize,
}

/// Render and write the sitemap once.
pub fn emit(options: &SitemapOptions) -> Result<EmitSummary, SitemapError> {
    let xml = render_sitemap(&options.base_url, &options.routes, Utc::now())?;
    write_sitemap(&options.output, &xml)?;

    let summary = EmitSummary {
        path: options.output.clone(),
        entries: options.routes.len(),
        bytes: xml.len(),
    };
    info!(
        path = %summary.path.display(),
        entries = summary.entries,
        bytes = summary.bytes,
        "sitemap written"
    );
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 1, 9, 30, 0).unwrap()
    }

    fn lastmods(xml: &str) -> Vec<&str> {
        xml.split("<lastmod>")
            .skip(1)
            .filter_map(|chunk| chunk.split("</lastmod>").next())
            .collect()
    }

    #[test]
    fn default_routes_produce_five_entries() {
        let xml = render_sitemap("https://showroom.example", &default_routes(), fixed_now()).unwrap();

        assert_eq!(xml.matches("<url>").count(), 5);
        assert_eq!(xml.matches("<loc>").count(), 5);
        assert!(xml.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>"));
        assert!(xml.contains("<loc>https://showroom.example/</loc>"));
        assert!(xml.contains("<loc>https://showroom.example/flooring</loc>"));
        assert!(xml.contains("<changefreq>yearly</changefreq>"));
        assert!(xml.contains("<priority>1.0</priority>"));
        assert!(xml.contains("<priority>0.5</priority>"));
    }

    #[test]
    fn every_lastmod_is_iso8601() {
        let xml = render_sitemap("https://showroom.example/", &default_routes(), fixed_now()).unwrap();

        let stamps = lastmods(&xml);
        assert_eq!(stamps.len(), 5);
        for stamp in stamps {
            assert_eq!(stamp, "2024-05-01T09:30:00.000Z");
            assert!(DateTime::parse_from_rfc3339(stamp).is_ok());
        }
    }

    #[test]
    fn explicit_lastmod_wins() {
        let mut route = RouteDescriptor::new("/blinds", ChangeFreq::Monthly, 0.8);
        route.lastmod = Some(Utc.with_ymd_and_hms(2023, 12, 24, 18, 0, 0).unwrap());

        let xml = render_sitemap("https://showroom.example", &[route], fixed_now()).unwrap();

        assert_eq!(lastmods(&xml), vec!["2023-12-24T18:00:00.000Z"]);
    }

    #[test]
    fn trailing_slash_on_origin_is_not_doubled() {
        let xml = render_sitemap("https://showroom.example/", &default_routes(), fixed_now()).unwrap();
        assert!(!xml.contains("example//"));
    }

    #[test]
    fn loc_is_escaped() {
        let route = RouteDescriptor::new("/search?a=1&b=2", ChangeFreq::Never, 0.1);
        let xml = render_sitemap("https://showroom.example", &[route], fixed_now()).unwrap();
        assert!(xml.contains("/search?a=1&amp;b=2"));
    }

    #[test]
    fn priority_keeps_two_decimals() {
        let routes = vec![
            RouteDescriptor::new("/a", ChangeFreq::Weekly, 0.85),
            RouteDescriptor::new("/b", ChangeFreq::Weekly, 0.05),
            RouteDescriptor::new("/c", ChangeFreq::Weekly, 0.0),
        ];

        let xml = render_sitemap("https://showroom.example", &routes, fixed_now()).unwrap();

        assert!(xml.contains("<priority>0.85</priority>"));
        assert!(xml.contains("<priority>0.05</priority>"));
        assert!(xml.contains("<priority>0.0</priority>"));
        assert_eq!(format_priority(1.0), "1.0");
        assert_eq!(format_priority(0.8), "0.8");
    }

    #[test]
    fn rejects_out_of_range_priority() {
        let route = RouteDescriptor::new("/", ChangeFreq::Daily, 1.5);
        let err = render_sitemap("https://showroom.example", &[route], fixed_now()).unwrap_err();
        assert!(matches!(err, SitemapError::InvalidRoute { .. }));
    }

    #[test]
    fn rejects_relative_url() {
        let route = RouteDescriptor::new("contact", ChangeFreq::Daily, 0.5);
        assert!(render_sitemap("https://showroom.example", &[route], fixed_now()).is_err());
    }

    #[test]
    fn emit_writes_file_and_creates_parents() {
        let temp = TempDir::new().expect("temp dir");
        let output = temp.path().join("public").join("sitemap.xml");
        let options = SitemapOptions {
            base_url: "https://showroom.example".into(),
            output: output.clone(),
            routes: default_routes(),
        };

        let summary = emit(&options).expect("emit");

        assert_eq!(summary.entries, 5);
        let written = std::fs::read_to_string(&output).expect("read back");
        assert_eq!(written.len(), summary.bytes);
        assert_eq!(written.matches("<url>").count(), 5);
    }

    #[test]
    fn write_failure_is_a_sitemap_error() {
        let temp = TempDir::new().expect("temp dir");
        let blocker = temp.path().join("public");
        std::fs::write(&blocker, "not a directory").expect("write blocker");
        let options = SitemapOptions {
            base_url: "https://showroom.example".into(),
            output: blocker.join("sitemap.xml"),
            routes: default_routes(),
        };

        let err = emit(&options).unwrap_err();

        assert!(matches!(err, SitemapError::Write { .. }));
        assert!(!options.output.exists());
    }
}
