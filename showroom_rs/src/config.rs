//! Configuration for the site build and the content store.
//!
//! Two sources:
//! - optional `.showroom/config.toml` in the project root ([`SiteConfig`])
//! - `SANITY_*` environment variables for the content store ([`CmsConfig`])
//!
//! Both are plain values handed to whoever needs them. Nothing here is
//! global.

use std::path::{Path, PathBuf};
use std::time::Duration;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::content::ContentKind;
use crate::error::ConfigError;

pub const CONFIG_DIR: &str = ".showroom";
pub const CONFIG_FILE: &str = "config.toml";

pub const ENV_PROJECT_ID: &str = "SANITY_PROJECT_ID";
pub const ENV_DATASET: &str = "SANITY_DATASET";
pub const ENV_API_VERSION: &str = "SANITY_API_VERSION";
pub const ENV_USE_CDN: &str = "SANITY_USE_CDN";
pub const ENV_TOKEN: &str = "SANITY_TOKEN";

pub const DEFAULT_API_VERSION: &str = "2024-01-01";
pub const DEFAULT_TOAST_DURATION_MS: u64 = 3000;
pub const DEFAULT_SITEMAP_OUTPUT: &str = "public/sitemap.xml";
pub const DEFAULT_FALLBACK_THUMBNAIL: &str = "/images/project-placeholder.jpg";

/// Root configuration structure
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub site: SiteSection,
    pub gallery: GalleryConfig,
    pub notification: NotificationConfig,
    pub sitemap: SitemapConfig,
}

/// `[site]`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteSection {
    /// Business name shown in headers and titles
    pub name: String,
    /// Public origin, used for canonical links and sitemap `<loc>`
    pub base_url: String,
}

impl Default for SiteSection {
    fn default() -> Self {
        Self {
            name: "Showroom Interiors".to_string(),
            base_url: "https://www.showroom-interiors.co.uk".to_string(),
        }
    }
}

/// `[gallery]`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GalleryConfig {
    /// Placeholder used when a project has neither thumbnail nor images
    pub fallback_thumbnail: String,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            fallback_thumbnail: DEFAULT_FALLBACK_THUMBNAIL.to_string(),
        }
    }
}

/// `[notification]`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NotificationConfig {
    /// Auto-dismiss delay for the success toast
    pub duration_ms: u64,
    /// Text shown after the contact form is sent
    pub success_message: String,
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            duration_ms: DEFAULT_TOAST_DURATION_MS,
            success_message: "Thanks! We'll get back to you within one working day.".to_string(),
        }
    }
}

impl NotificationConfig {
    pub fn duration(&self) -> Duration {
        Duration::from_millis(self.duration_ms)
    }
}

/// `[sitemap]`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SitemapConfig {
    /// Output path, relative to the working directory
    pub output: PathBuf,
}

impl Default for SitemapConfig {
    fn default() -> Self {
        Self {
            output: PathBuf::from(DEFAULT_SITEMAP_OUTPUT),
        }
    }
}

impl SiteConfig {
    /// Load config from `.showroom/config.toml` in the given root directory.
    /// Returns the default config if the file doesn't exist.
    pub fn load(root: &Path) -> Result<Self, ConfigError> {
        let config_path = root.join(CONFIG_DIR).join(CONFIG_FILE);
        Self::load_from_path(&config_path)
    }

    /// Load config from a specific path and validate it.
    pub fn load_from_path(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;

        debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Reject values that would only fail later, mid-build.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let base = self.site.base_url.trim();
        if !(base.starts_with("http://") || base.starts_with("https://")) {
            return Err(ConfigError::Invalid {
                key: "site.base_url",
                reason: format!("expected an http(s) origin, got {:?}", self.site.base_url),
            });
        }
        if self.gallery.fallback_thumbnail.trim().is_empty() {
            return Err(ConfigError::Invalid {
                key: "gallery.fallback_thumbnail",
                reason: "must not be empty".to_string(),
            });
        }
        if self.notification.duration_ms == 0 {
            return Err(ConfigError::Invalid {
                key: "notification.duration_ms",
                reason: "must be greater than zero".to_string(),
            });
        }
        if self.sitemap.output.as_os_str().is_empty() {
            return Err(ConfigError::Invalid {
                key: "sitemap.output",
                reason: "must not be empty".to_string(),
            });
        }
        Ok(())
    }

    /// `base_url` without a trailing slash.
    pub fn origin(&self) -> &str {
        self.site.base_url.trim().trim_end_matches('/')
    }
}

/// Content store coordinates, passed explicitly to the data layer.
#[derive(Clone, PartialEq, Eq)]
pub struct CmsConfig {
    pub project_id: String,
    pub dataset: String,
    pub api_version: String,
    pub use_cdn: bool,
    pub token: Option<String>,
}

// Keep the token out of logs.
impl std::fmt::Debug for CmsConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CmsConfig")
            .field("project_id", &self.project_id)
            .field("dataset", &self.dataset)
            .field("api_version", &self.api_version)
            .field("use_cdn", &self.use_cdn)
            .field("token", &self.token.as_ref().map(|_| "***"))
            .finish()
    }
}

impl CmsConfig {
    /// Read the `SANITY_*` variables from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build from any variable lookup. Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| {
            lookup(name)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let project_id = get(ENV_PROJECT_ID).ok_or(ConfigError::MissingVar(ENV_PROJECT_ID))?;
        if !project_id
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
        {
            return Err(ConfigError::InvalidVar {
                name: ENV_PROJECT_ID,
                value: project_id,
                reason: "only lowercase letters and digits are allowed".to_string(),
            });
        }

        let dataset = get(ENV_DATASET).ok_or(ConfigError::MissingVar(ENV_DATASET))?;
        validate_dataset(&dataset)?;

        let api_version = get(ENV_API_VERSION).unwrap_or_else(|| DEFAULT_API_VERSION.to_string());
        let api_version = api_version.trim_start_matches('v').to_string();
        if NaiveDate::parse_from_str(&api_version, "%Y-%m-%d").is_err() {
            return Err(ConfigError::InvalidVar {
                name: ENV_API_VERSION,
                value: api_version,
                reason: "expected a date like 2024-01-01".to_string(),
            });
        }

        let use_cdn = match get(ENV_USE_CDN) {
            None => false,
            Some(value) => parse_bool(&value).ok_or_else(|| ConfigError::InvalidVar {
                name: ENV_USE_CDN,
                value,
                reason: "expected true/false".to_string(),
            })?,
        };

        Ok(Self {
            project_id,
            dataset,
            api_version,
            use_cdn,
            token: get(ENV_TOKEN),
        })
    }

    /// Query API host for this project.
    pub fn api_host(&self) -> String {
        let domain = if self.use_cdn {
            "apicdn.sanity.io"
        } else {
            "api.sanity.io"
        };
        format!("https://{}.{}", self.project_id, domain)
    }

    /// HTTP query endpoint for one content kind.
    pub fn query_url(&self, kind: ContentKind) -> String {
        crate::content::query_url(self, kind)
    }
}

fn validate_dataset(dataset: &str) -> Result<(), ConfigError> {
    let valid_chars = dataset
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_' || c == '-');
    let valid_start = dataset
        .chars()
        .next()
        .is_some_and(|c| c.is_ascii_lowercase() || c.is_ascii_digit());

    if valid_chars && valid_start && dataset.len() <= 64 {
        Ok(())
    } else {
        Err(ConfigError::InvalidVar {
            name: ENV_DATASET,
            value: dataset.to_string(),
            reason: "lowercase letters, digits, '_' and '-', at most 64 characters".to_string(),
        })
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;
    use tempfile::TempDir;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn test_default_config() {
        let config = SiteConfig::default();
        assert_eq!(config.notification.duration_ms, 3000);
        assert_eq!(config.sitemap.output, PathBuf::from("public/sitemap.xml"));
        assert!(!config.gallery.fallback_thumbnail.is_empty());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_missing_file() {
        let temp = TempDir::new().expect("temp dir");
        let config = SiteConfig::load(temp.path()).expect("defaults");
        assert_eq!(config, SiteConfig::default());
    }

    #[test]
    fn test_load_valid_config() {
        let temp = TempDir::new().expect("temp dir");
        let dir = temp.path().join(".showroom");
        std::fs::create_dir_all(&dir).expect("create .showroom");

        let mut file = std::fs::File::create(dir.join("config.toml")).expect("create config");
        writeln!(
            file,
            r#"
[site]
name = "Northside Floors"
base_url = "https://northside.example/"

[gallery]
fallback_thumbnail = "/img/coming-soon.png"

[notification]
duration_ms = 4500
"#
        )
        .expect("write config");

        let config = SiteConfig::load(temp.path()).expect("valid config");
        assert_eq!(config.site.name, "Northside Floors");
        assert_eq!(config.origin(), "https://northside.example");
        assert_eq!(config.gallery.fallback_thumbnail, "/img/coming-soon.png");
        assert_eq!(config.notification.duration(), Duration::from_millis(4500));
        // untouched section keeps its default
        assert_eq!(config.sitemap.output, PathBuf::from("public/sitemap.xml"));
    }

    #[test]
    fn test_load_invalid_toml_is_an_error() {
        let temp = TempDir::new().expect("temp dir");
        let path = temp.path().join("config.toml");
        std::fs::write(&path, "[site\nname = ").expect("write");

        let err = SiteConfig::load_from_path(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn test_zero_duration_rejected() {
        let temp = TempDir::new().expect("temp dir");
        let path = temp.path().join("config.toml");
        std::fs::write(&path, "[notification]\nduration_ms = 0\n").expect("write");

        let err = SiteConfig::load_from_path(&path).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Invalid {
                key: "notification.duration_ms",
                ..
            }
        ));
    }

    #[test]
    fn test_empty_fallback_rejected() {
        let mut config = SiteConfig::default();
        config.gallery.fallback_thumbnail = " ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_non_http_base_url_rejected() {
        let mut config = SiteConfig::default();
        config.site.base_url = "showroom.example".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn cms_config_from_lookup() {
        let cms = CmsConfig::from_lookup(lookup(&[
            ("SANITY_PROJECT_ID", "abc123xy"),
            ("SANITY_DATASET", "production"),
        ]))
        .expect("valid");

        assert_eq!(cms.project_id, "abc123xy");
        assert_eq!(cms.dataset, "production");
        assert_eq!(cms.api_version, DEFAULT_API_VERSION);
        assert!(!cms.use_cdn);
        assert!(cms.token.is_none());
        assert_eq!(cms.api_host(), "https://abc123xy.api.sanity.io");
    }

    #[test]
    fn cms_config_missing_project_id() {
        let err = CmsConfig::from_lookup(lookup(&[("SANITY_DATASET", "production")])).unwrap_err();
        assert!(matches!(err, ConfigError::MissingVar("SANITY_PROJECT_ID")));
    }

    #[test]
    fn cms_config_blank_value_counts_as_missing() {
        let err = CmsConfig::from_lookup(lookup(&[
            ("SANITY_PROJECT_ID", "abc123"),
            ("SANITY_DATASET", "   "),
        ]))
        .unwrap_err();
        assert!(matches!(err, ConfigError::MissingVar("SANITY_DATASET")));
    }

    #[test]
    fn cms_config_invalid_dataset() {
        let err = CmsConfig::from_lookup(lookup(&[
            ("SANITY_PROJECT_ID", "abc123"),
            ("SANITY_DATASET", "Prod Data"),
        ]))
        .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidVar { name: "SANITY_DATASET", .. }));
    }

    #[test]
    fn cms_config_cdn_and_version() {
        let cms = CmsConfig::from_lookup(lookup(&[
            ("SANITY_PROJECT_ID", "abc123"),
            ("SANITY_DATASET", "staging"),
            ("SANITY_API_VERSION", "v2023-05-03"),
            ("SANITY_USE_CDN", "true"),
            ("SANITY_TOKEN", "sk-secret"),
        ]))
        .expect("valid");

        assert_eq!(cms.api_version, "2023-05-03");
        assert!(cms.use_cdn);
        assert_eq!(cms.api_host(), "https://abc123.apicdn.sanity.io");
        assert!(!format!("{:?}", cms).contains("sk-secret"));
    }

    #[test]
    fn cms_config_bad_version() {
        let err = CmsConfig::from_lookup(lookup(&[
            ("SANITY_PROJECT_ID", "abc123"),
            ("SANITY_DATASET", "production"),
            ("SANITY_API_VERSION", "latest"),
        ]))
        .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidVar { name: "SANITY_API_VERSION", .. }));
    }
}
