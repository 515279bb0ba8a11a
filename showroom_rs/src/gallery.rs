//! Gallery adapter: project records to display-ready gallery projects.
//!
//! The only decoration is the thumbnail. A project keeps its own thumbnail
//! when it has one; otherwise it gets its cover image (first of `images`),
//! and failing that the configured placeholder.

use showroom_pages::types::{GalleryProject, ProjectData};

use crate::config::GalleryConfig;

/// Decorates projects with a thumbnail fallback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GalleryAdapter {
    placeholder: String,
}

impl GalleryAdapter {
    /// Adapter with an explicit placeholder asset.
    pub fn new(placeholder: impl Into<String>) -> Self {
        Self {
            placeholder: placeholder.into(),
        }
    }

    pub fn from_config(config: &GalleryConfig) -> Self {
        Self::new(config.fallback_thumbnail.clone())
    }

    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    /// New decorated value; the input is left untouched.
    pub fn adapt(&self, project: &ProjectData) -> GalleryProject {
        let mut adapted = project.clone();
        if !has_value(adapted.thumbnail.as_deref()) {
            let fallback = project
                .images
                .iter()
                .find(|url| has_value(Some(url.as_str())))
                .cloned()
                .unwrap_or_else(|| self.placeholder.clone());
            adapted.thumbnail = Some(fallback);
        }
        adapted
    }

    pub fn adapt_all(&self, projects: &[ProjectData]) -> Vec<GalleryProject> {
        projects.iter().map(|project| self.adapt(project)).collect()
    }
}

fn has_value(value: Option<&str>) -> bool {
    value.is_some_and(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn project(thumbnail: Option<&str>, images: &[&str]) -> ProjectData {
        ProjectData {
            id: "p1".into(),
            title: "Kitchen floor".into(),
            images: images.iter().map(|s| s.to_string()).collect(),
            thumbnail: thumbnail.map(Into::into),
            ..Default::default()
        }
    }

    #[test]
    fn keeps_existing_thumbnail() {
        let adapter = GalleryAdapter::new("/placeholder.jpg");
        let input = project(Some("x.png"), &["/cover.jpg"]);

        let out = adapter.adapt(&input);

        assert_eq!(out.thumbnail.as_deref(), Some("x.png"));
        assert_eq!(out, input);
    }

    #[test]
    fn falls_back_to_cover_image() {
        let adapter = GalleryAdapter::new("/placeholder.jpg");
        let out = adapter.adapt(&project(None, &["", "/cover.jpg", "/second.jpg"]));
        assert_eq!(out.thumbnail.as_deref(), Some("/cover.jpg"));
    }

    #[test]
    fn falls_back_to_placeholder() {
        let adapter = GalleryAdapter::new("/placeholder.jpg");
        let input = project(None, &[]);

        let out = adapter.adapt(&input);

        assert_eq!(out.thumbnail.as_deref(), Some("/placeholder.jpg"));
        // input not mutated
        assert_eq!(input.thumbnail, None);
    }

    #[test]
    fn blank_thumbnail_is_replaced() {
        let adapter = GalleryAdapter::new("/placeholder.jpg");
        let out = adapter.adapt(&project(Some("  "), &[]));
        assert_eq!(out.thumbnail.as_deref(), Some("/placeholder.jpg"));
    }

    #[test]
    fn adapt_all_keeps_order() {
        let adapter = GalleryAdapter::from_config(&GalleryConfig::default());
        let mut second = project(Some("b.png"), &[]);
        second.id = "p2".into();

        let out = adapter.adapt_all(&[project(None, &[]), second]);

        assert_eq!(out.len(), 2);
        assert_eq!(out[0].thumbnail.as_deref(), Some(adapter.placeholder()));
        assert_eq!(out[1].id, "p2");
    }
}
