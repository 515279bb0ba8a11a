//! # showroom-sitemap
//!
//! One-shot sitemap emitter for prebuild hooks. Exits 0 after the file is
//! replaced, 1 on any failure (the previous file is left as it was).

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::error;

use showroom::config::SiteConfig;
use showroom::sitemap::{emit, SitemapOptions};

#[derive(Parser, Debug)]
#[command(name = "showroom-sitemap")]
#[command(about = "Write sitemap.xml for the showroom site")]
#[command(version)]
struct Args {
    /// Output file (default from config: public/sitemap.xml)
    #[arg(long, short)]
    output: Option<PathBuf>,

    /// Public origin (default from config)
    #[arg(long)]
    base_url: Option<String>,

    /// Config file (default: .showroom/config.toml if present)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn run(args: Args) -> Result<()> {
    let config = match &args.config {
        Some(path) => SiteConfig::load_from_path(path)?,
        None => SiteConfig::load(std::path::Path::new("."))?,
    };
    config.validate()?;

    let mut options = SitemapOptions::from_config(&config);
    if let Some(output) = args.output {
        options.output = output;
    }
    if let Some(base_url) = args.base_url {
        options.base_url = base_url;
    }

    emit(&options).with_context(|| format!("writing {}", options.output.display()))?;
    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| args.log_level.parse().unwrap_or_default()),
        )
        .init();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("sitemap generation failed: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
