//! Error types, one enum per concern.
//!
//! Library code returns these; the binaries wrap them in `anyhow` with
//! context and turn them into a non-zero exit status.

use std::path::PathBuf;

use thiserror::Error;

/// Missing or invalid configuration. Raised eagerly, before any rendering.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A required environment variable is not set (or is blank).
    #[error("missing required environment variable {0}")]
    MissingVar(&'static str),

    /// An environment variable is set but unusable.
    #[error("invalid value {value:?} for {name}: {reason}")]
    InvalidVar {
        name: &'static str,
        value: String,
        reason: String,
    },

    /// The config file exists but could not be read.
    #[error("failed to read config {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The config file is not valid TOML for [`crate::config::SiteConfig`].
    #[error("failed to parse config {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// A config value parsed but breaks an invariant.
    #[error("invalid config value for {key}: {reason}")]
    Invalid { key: &'static str, reason: String },
}

/// Content store failures. Bad individual records are not errors; they are
/// skipped during decoding.
#[derive(Debug, Error)]
pub enum ContentError {
    #[error("failed to read content file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("content file {} is not valid JSON: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Valid JSON, but neither an array nor a `{ "result": [...] }` envelope.
    #[error("content file {} must hold an array or an object with a \"result\" array", path.display())]
    Shape { path: PathBuf },

    /// Transport failure, or a body that is not JSON.
    #[error("content request to {url} failed: {source}")]
    Http {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The API answered with a non-success status.
    #[error("content API returned HTTP {status} for {url}")]
    Status { url: String, status: u16 },

    /// JSON response without a `result` array.
    #[error("content API response from {url} has no \"result\" array")]
    Response { url: String },
}

/// Sitemap emission failures. Always fatal to the run.
#[derive(Debug, Error)]
pub enum SitemapError {
    #[error("invalid route {url:?}: {reason}")]
    InvalidRoute { url: String, reason: String },

    #[error("failed to write sitemap to {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Site build failures.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error(transparent)]
    Content(#[from] ContentError),

    #[error("failed to write page {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
