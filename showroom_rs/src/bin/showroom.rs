//! # showroom
//!
//! Command-line front end for the showroom site pipeline.
//!
//! ## Usage
//!
//! ```bash
//! showroom build --content content --out dist
//! showroom build --source cms
//! showroom sitemap --output public/sitemap.xml
//! showroom check-config
//! ```

use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use tracing::{debug, info};

use showroom::config::{CmsConfig, SiteConfig};
use showroom::content::{CmsStore, ContentKind, JsonFileStore};
use showroom::progress::{self, format_bytes, format_count, format_duration};
use showroom::site::build_site;
use showroom::sitemap::{emit, SitemapOptions};

// ============================================================================
// CLI Arguments
// ============================================================================

#[derive(Parser, Debug)]
#[command(name = "showroom")]
#[command(about = "Build the showroom site and its sitemap")]
#[command(version)]
struct Args {
    /// Project root holding `.showroom/config.toml`
    #[arg(long, global = true, default_value = ".")]
    root: PathBuf,

    /// Explicit config file (overrides the one under --root)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true, default_value = "info")]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render every page into an output directory
    Build {
        /// Where records come from
        #[arg(long, value_enum, default_value_t = Source::Files)]
        source: Source,
        /// Directory with projects.json and testimonials.json (relative to --root)
        #[arg(long, default_value = "content")]
        content: PathBuf,
        /// Output directory (relative to --root)
        #[arg(long, default_value = "dist")]
        out: PathBuf,
    },
    /// Write sitemap.xml
    Sitemap {
        /// Output file (default from config: public/sitemap.xml)
        #[arg(long)]
        output: Option<PathBuf>,
        /// Public origin (default from config)
        #[arg(long)]
        base_url: Option<String>,
    },
    /// Validate the config file and the SANITY_* environment
    CheckConfig,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum Source {
    /// Saved query results under --content
    Files,
    /// Live content API, configured from SANITY_* variables
    Cms,
}

// ============================================================================
// Commands
// ============================================================================

fn load_config(args: &Args) -> Result<SiteConfig> {
    let config = match &args.config {
        Some(path) => SiteConfig::load_from_path(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => SiteConfig::load(&args.root)
            .with_context(|| format!("loading config under {}", args.root.display()))?,
    };
    config.validate().context("invalid site config")?;
    debug!(?config, "config loaded");
    Ok(config)
}

fn under_root(root: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        root.join(path)
    }
}

fn run_build(config: &SiteConfig, source: Source, content: &Path, out: &Path) -> Result<()> {
    let started = Instant::now();
    let summary = match source {
        Source::Files => build_site(&JsonFileStore::new(content), config, out),
        Source::Cms => {
            // Credentials are checked before any page is touched.
            let cms = CmsConfig::from_env().context("content API environment")?;
            let store = CmsStore::new(cms).context("content API client")?;
            build_site(&store, config, out)
        }
    }
    .with_context(|| format!("building site into {}", out.display()))?;

    if summary.skipped > 0 {
        progress::warning(&format!(
            "Skipped {} (missing required fields)",
            format_count(summary.skipped, "record", "records")
        ));
    }
    progress::success(&format!(
        "Built {} from {} and {} into {} in {}",
        format_count(summary.pages, "page", "pages"),
        format_count(summary.projects, "project", "projects"),
        format_count(summary.testimonials, "testimonial", "testimonials"),
        out.display(),
        format_duration(started.elapsed())
    ));
    Ok(())
}

fn run_sitemap(
    config: &SiteConfig,
    root: &Path,
    output: Option<PathBuf>,
    base_url: Option<String>,
) -> Result<()> {
    let mut options = SitemapOptions::from_config(config);
    options.output = match output {
        Some(path) => path,
        None => under_root(root, &options.output),
    };
    if let Some(base_url) = base_url {
        options.base_url = base_url;
    }

    let summary = emit(&options).context("generating sitemap")?;
    progress::success(&format!(
        "Wrote {} to {} ({})",
        format_count(summary.entries, "entry", "entries"),
        summary.path.display(),
        format_bytes(summary.bytes)
    ));
    Ok(())
}

fn run_check_config(config: &SiteConfig) -> Result<()> {
    progress::success(&format!("Site config OK ({})", config.origin()));

    let cms = CmsConfig::from_env().context("content API environment")?;
    progress::success(&format!(
        "Content API: project {} / dataset {} (v{}, {})",
        cms.project_id,
        cms.dataset,
        cms.api_version,
        if cms.use_cdn { "cdn" } else { "live" }
    ));
    for kind in ContentKind::ALL {
        progress::info(&format!("{}: {}", kind, cms.query_url(kind)));
    }
    Ok(())
}

fn run() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| args.log_level.parse().unwrap_or_default()),
        )
        .init();

    info!("showroom v{}", env!("CARGO_PKG_VERSION"));
    let config = load_config(&args)?;

    match &args.command {
        Command::Build {
            source,
            content,
            out,
        } => run_build(
            &config,
            *source,
            &under_root(&args.root, content),
            &under_root(&args.root, out),
        ),
        Command::Sitemap { output, base_url } => {
            run_sitemap(&config, &args.root, output.clone(), base_url.clone())
        }
        Command::CheckConfig => run_check_config(&config),
    }
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            progress::error(&format!("[showroom] Error: {:#}", e));
            ExitCode::FAILURE
        }
    }
}
