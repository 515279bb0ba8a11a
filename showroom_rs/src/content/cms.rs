//! HTTP store for the hosted content API.
//!
//! One blocking GET per content kind. The token, when set, goes in an
//! `Authorization: Bearer` header and never into the URL.

use std::time::Duration;

use reqwest::blocking::Client;
use serde_json::Value;
use tracing::debug;

use super::{query_path, unwrap_envelope, ContentKind, ContentStore};
use crate::config::CmsConfig;
use crate::error::ContentError;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// [`ContentStore`] backed by the content API described by a [`CmsConfig`].
#[derive(Debug, Clone)]
pub struct CmsStore {
    config: CmsConfig,
    api_host: String,
    client: Client,
}

impl CmsStore {
    pub fn new(config: CmsConfig) -> Result<Self, ContentError> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .user_agent(concat!("showroom/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|source| ContentError::Http {
                url: config.api_host(),
                source,
            })?;
        Ok(Self::with_client(config, client))
    }

    /// Use a preconfigured client (proxies, custom TLS roots).
    pub fn with_client(config: CmsConfig, client: Client) -> Self {
        let api_host = config.api_host();
        Self {
            config,
            api_host,
            client,
        }
    }

    /// Send queries to another origin, e.g. a caching proxy in front of the API.
    pub fn with_api_host(mut self, api_host: impl Into<String>) -> Self {
        self.api_host = api_host.into().trim_end_matches('/').to_string();
        self
    }

    pub fn config(&self) -> &CmsConfig {
        &self.config
    }

    pub fn url_for(&self, kind: ContentKind) -> String {
        format!("{}{}", self.api_host, query_path(&self.config, kind))
    }
}

impl ContentStore for CmsStore {
    fn fetch(&self, kind: ContentKind) -> Result<Vec<Value>, ContentError> {
        let url = self.url_for(kind);
        debug!(%kind, %url, "querying content API");

        let mut request = self.client.get(&url);
        if let Some(token) = &self.config.token {
            request = request.bearer_auth(token);
        }

        let response = request.send().map_err(|source| ContentError::Http {
            url: url.clone(),
            source,
        })?;
        let status = response.status();
        if !status.is_success() {
            return Err(ContentError::Status {
                url,
                status: status.as_u16(),
            });
        }

        let body: Value = response.json().map_err(|source| ContentError::Http {
            url: url.clone(),
            source,
        })?;
        let records = unwrap_envelope(body).ok_or_else(|| ContentError::Response { url: url.clone() })?;
        debug!(%kind, count = records.len(), "content API answered");
        Ok(records)
    }
}
