//! Static site builder.
//!
//! Pulls records from a [`ContentStore`], decodes and decorates them, then
//! renders one HTML document per route into an output directory.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use showroom_pages::render_page;
use showroom_pages::types::{
    GalleryProject, Page, PageMeta, TestimonialLayout, TestimonialRecord, ToastView,
};
use tracing::{debug, info};

use crate::config::SiteConfig;
use crate::content::{decode_projects, decode_testimonials, ContentKind, ContentStore};
use crate::error::BuildError;
use crate::fs_utils::write_atomic;
use crate::gallery::GalleryAdapter;
use crate::notification::Notification;

/// What a route shows besides its hero text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageKind {
    /// Full gallery and the scrolling testimonial strip.
    Home,
    /// Projects of one category; testimonials in a static grid.
    Category(&'static str),
    /// Enquiry form plus the success toast.
    Contact,
}

/// One entry of the page table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageEntry {
    pub route: &'static str,
    pub kind: PageKind,
    pub heading: &'static str,
    pub intro: &'static str,
    pub description: &'static str,
}

impl PageEntry {
    /// Output file relative to the site root.
    pub fn output_path(&self) -> PathBuf {
        let trimmed = self.route.trim_matches('/');
        if trimmed.is_empty() {
            PathBuf::from("index.html")
        } else {
            Path::new(trimmed).join("index.html")
        }
    }

    fn nav_label(&self) -> Option<&'static str> {
        match self.kind {
            PageKind::Home => None,
            _ => Some(self.heading),
        }
    }
}

/// Page table; routes match [`crate::sitemap::default_routes`].
pub fn pages() -> Vec<PageEntry> {
    vec![
        PageEntry {
            route: "/",
            kind: PageKind::Home,
            heading: "Interiors made to measure",
            intro: "Wallpapers, flooring and blinds, chosen with you and fitted by our own team.",
            description: "Showroom interiors: wallpapers, flooring and made-to-measure blinds.",
        },
        PageEntry {
            route: "/wallpapers",
            kind: PageKind::Category("wallpapers"),
            heading: "Wallpapers",
            intro: "Designer and everyday wallcoverings, hung by experienced decorators.",
            description: "Wallpaper supply and hanging: recent projects and customer reviews.",
        },
        PageEntry {
            route: "/flooring",
            kind: PageKind::Category("flooring"),
            heading: "Flooring",
            intro: "Engineered wood, luxury vinyl and carpet, measured and laid in-house.",
            description: "Flooring supply and fitting: recent projects and customer reviews.",
        },
        PageEntry {
            route: "/blinds",
            kind: PageKind::Category("blinds"),
            heading: "Blinds",
            intro: "Roller, Roman and Venetian blinds made to fit every window.",
            description: "Made-to-measure blinds: recent projects and customer reviews.",
        },
        PageEntry {
            route: "/contact",
            kind: PageKind::Contact,
            heading: "Contact",
            intro: "Book a home visit or ask us anything. We reply within one working day.",
            description: "Get in touch to book a free measure and quote.",
        },
    ]
}

/// Counts reported after a build.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildSummary {
    pub pages: usize,
    pub testimonials: usize,
    pub projects: usize,
    /// Records dropped because required fields were missing
    pub skipped: usize,
    pub written: Vec<PathBuf>,
}

/// Decoded content shared by every page of one build.
#[derive(Debug, Clone, Default)]
pub struct SiteContent {
    pub testimonials: Vec<TestimonialRecord>,
    pub projects: Vec<GalleryProject>,
}

impl SiteContent {
    /// Fetch both kinds, decode, and decorate projects for the gallery.
    ///
    /// Returns the content and the number of records skipped.
    pub fn load<S: ContentStore + ?Sized>(
        store: &S,
        adapter: &GalleryAdapter,
    ) -> Result<(Self, usize), BuildError> {
        let raw_testimonials = store.fetch(ContentKind::Testimonials)?;
        let raw_projects = store.fetch(ContentKind::Projects)?;

        let testimonials = decode_testimonials(&raw_testimonials);
        let projects = adapter.adapt_all(&decode_projects(&raw_projects));
        let skipped = (raw_testimonials.len() - testimonials.len())
            + (raw_projects.len() - projects.len());

        Ok((
            Self {
                testimonials,
                projects,
            },
            skipped,
        ))
    }

    fn projects_in(&self, category: &str) -> Vec<GalleryProject> {
        self.projects
            .iter()
            .filter(|project| {
                project
                    .category
                    .as_deref()
                    .is_some_and(|c| c.trim().eq_ignore_ascii_case(category))
            })
            .cloned()
            .collect()
    }
}

/// Assemble the props for one page.
pub fn assemble_page(entry: &PageEntry, content: &SiteContent, config: &SiteConfig) -> Page {
    let site_name = config.site.name.clone();
    let canonical = format!("{}{}", config.origin(), entry.route);
    let title = match entry.kind {
        PageKind::Home => format!("{} | {}", site_name, entry.heading),
        _ => format!("{} | {}", entry.heading, site_name),
    };

    let mut extra = BTreeMap::new();
    extra.insert("og:title".to_string(), title.clone());
    extra.insert("og:description".to_string(), entry.description.to_string());
    extra.insert("og:url".to_string(), canonical.clone());
    extra.insert("og:type".to_string(), "website".to_string());

    let nav = pages()
        .iter()
        .filter_map(|page| page.nav_label().map(|label| (label.to_string(), page.route.to_string())))
        .collect();

    let mut page = Page {
        meta: PageMeta {
            title,
            description: entry.description.to_string(),
            canonical: Some(canonical),
            extra,
        },
        site_name,
        heading: entry.heading.to_string(),
        intro: entry.intro.to_string(),
        nav,
        testimonials: content.testimonials.clone(),
        ..Default::default()
    };

    match entry.kind {
        PageKind::Home => {
            page.testimonial_layout = TestimonialLayout::Marquee;
            page.gallery = Some(content.projects.clone());
        }
        PageKind::Category(category) => {
            page.testimonial_layout = TestimonialLayout::Sectioned;
            page.gallery = Some(content.projects_in(category));
        }
        PageKind::Contact => {
            page.contact_form = true;
            page.toast = Some(contact_toast(config));
        }
    }
    page
}

// Hidden until the form script shows it.
fn contact_toast(config: &SiteConfig) -> ToastView {
    let notification = Notification::new(config.notification.duration());
    ToastView {
        message: config.notification.success_message.clone(),
        ..notification.view()
    }
}

/// Render every page into `out_dir`.
pub fn build_site<S: ContentStore + ?Sized>(
    store: &S,
    config: &SiteConfig,
    out_dir: &Path,
) -> Result<BuildSummary, BuildError> {
    let adapter = GalleryAdapter::from_config(&config.gallery);
    let (content, skipped) = SiteContent::load(store, &adapter)?;
    debug!(
        testimonials = content.testimonials.len(),
        projects = content.projects.len(),
        skipped,
        "content loaded"
    );

    let mut summary = BuildSummary {
        testimonials: content.testimonials.len(),
        projects: content.projects.len(),
        skipped,
        ..Default::default()
    };

    for entry in pages() {
        let html = render_page(&assemble_page(&entry, &content, config));
        let path = out_dir.join(entry.output_path());
        write_atomic(&path, html.as_bytes()).map_err(|source| BuildError::Write {
            path: path.clone(),
            source,
        })?;
        debug!(route = entry.route, path = %path.display(), bytes = html.len(), "page written");
        summary.written.push(path);
        summary.pages += 1;
    }

    info!(
        pages = summary.pages,
        out_dir = %out_dir.display(),
        "site built"
    );
    Ok(summary)
}
