//! Query endpoint for the hosted content store.

use super::ContentKind;
use crate::config::CmsConfig;

/// HTTP GET URL that runs the query for `kind` against the configured
/// project and dataset.
///
/// ```rust
/// use showroom::config::CmsConfig;
/// use showroom::content::{ContentKind, query_url};
///
/// let cms = CmsConfig::from_lookup(|name| match name {
///     "SANITY_PROJECT_ID" => Some("abc123".into()),
///     "SANITY_DATASET" => Some("production".into()),
///     _ => None,
/// })
/// .unwrap();
///
/// let url = query_url(&cms, ContentKind::Projects);
/// assert!(url.starts_with("https://abc123.api.sanity.io/v2024-01-01/data/query/production?query="));
/// ```
pub fn query_url(cms: &CmsConfig, kind: ContentKind) -> String {
    format!("{}{}", cms.api_host(), query_path(cms, kind))
}

/// Host-relative part of [`query_url`]: `/v{version}/data/query/{dataset}?query=...`.
pub fn query_path(cms: &CmsConfig, kind: ContentKind) -> String {
    format!(
        "/v{}/data/query/{}?query={}",
        cms.api_version,
        cms.dataset,
        urlencoding::encode(kind.groq())
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cms(use_cdn: bool) -> CmsConfig {
        CmsConfig {
            project_id: "abc123".into(),
            dataset: "production".into(),
            api_version: "2024-01-01".into(),
            use_cdn,
            token: None,
        }
    }

    #[test]
    fn query_is_percent_encoded() {
        let url = query_url(&cms(false), ContentKind::Testimonials);
        let (_, query) = url.split_once("?query=").unwrap();

        assert!(!query.contains(' '));
        assert!(!query.contains('"'));
        assert!(query.contains("%22testimonial%22"));
        assert_eq!(
            urlencoding::decode(query).unwrap(),
            ContentKind::Testimonials.groq()
        );
    }

    #[test]
    fn path_is_host_relative() {
        let path = query_path(&cms(false), ContentKind::Projects);
        assert!(path.starts_with("/v2024-01-01/data/query/production?query="));
        assert_eq!(
            query_url(&cms(false), ContentKind::Projects),
            format!("https://abc123.api.sanity.io{}", path)
        );
    }

    #[test]
    fn cdn_host_when_enabled() {
        let url = query_url(&cms(true), ContentKind::Projects);
        assert!(url.starts_with("https://abc123.apicdn.sanity.io/v2024-01-01/"));
    }
}
