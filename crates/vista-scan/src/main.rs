//! vista-scan
//!
//! Probes a live site the way the gallery does and prints what it finds,
//! one line per folder.
//!
//! ```text
//! vista-scan --site https://example.com/ thumb "Projects/Industrial/4. Brimax"
//! vista-scan --site https://example.com/ slides --exhaustive "News Room/Launch"
//! vista-scan --site https://example.com/ --json projects
//! ```

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;
use vista_gallery::catalog::all_items;
use vista_gallery::{GallerySession, SiteConfig};
use vista_path::AssetPath;

#[derive(Debug, Parser)]
#[command(name = "vista-scan", version, about = "Probe a site for gallery images")]
struct Cli {
    /// Site root URL; overrides `base_url` from the config file
    #[arg(long, global = true)]
    site: Option<String>,

    /// TOML configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Print one JSON object per line
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Thumbnail of each folder
    Thumb {
        /// Raw folder paths, relative to the site root
        #[arg(required = true)]
        folders: Vec<String>,
    },
    /// Slides of each folder
    Slides {
        /// Probe the plain numbered sequence instead of chunking
        #[arg(long)]
        exhaustive: bool,
        /// Raw folder paths, relative to the site root
        #[arg(required = true)]
        folders: Vec<String>,
    },
    /// Thumbnail and slide count of every subfolder project
    Projects,
}

#[derive(Debug, Serialize)]
struct FolderReport {
    folder: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    thumbnail: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    slides: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    slide_count: Option<usize>,
}

impl FolderReport {
    fn new(folder: impl Into<String>) -> Self {
        Self {
            folder: folder.into(),
            thumbnail: None,
            slides: None,
            slide_count: None,
        }
    }

    fn text(&self) -> String {
        let mut line = self.folder.clone();
        match &self.thumbnail {
            Some(Some(thumb)) => line.push_str(&format!("\tthumb={thumb}")),
            Some(None) => line.push_str("\tthumb=-"),
            None => {}
        }
        if let Some(count) = self.slide_count {
            line.push_str(&format!("\tslides={count}"));
        }
        if let Some(slides) = &self.slides {
            line.push('\t');
            line.push_str(&slides.join(" "));
        }
        line
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(cli: &Cli) -> Result<SiteConfig> {
    let mut config = match &cli.config {
        Some(path) => SiteConfig::load_or_default(path)
            .with_context(|| format!("failed to load config from {}", path.display()))?,
        None => SiteConfig::default(),
    };
    if let Some(site) = &cli.site {
        config = config.with_base_url(site.clone());
    }
    Ok(config)
}

fn encode(folder: &str) -> String {
    AssetPath::from_parts([folder]).encoded()
}

fn emit(report: &FolderReport, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string(report).context("failed to serialize report")?);
    } else {
        println!("{}", report.text());
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let config = load_config(&cli)?;
    let session = GallerySession::connect(config).context("failed to set up the site session")?;
    info!(site = ?session.config().base_url, "scanning");

    match &cli.command {
        Command::Thumb { folders } => {
            for folder in folders {
                let encoded = encode(folder);
                let mut report = FolderReport::new(&encoded);
                report.thumbnail = Some(session.thumbnail(&encoded).await);
                emit(&report, cli.json)?;
            }
        }
        Command::Slides { exhaustive, folders } => {
            for folder in folders {
                let encoded = encode(folder);
                let slides = if *exhaustive {
                    session.numbered_slides(&encoded).await
                } else {
                    session.slides(&encoded).await
                };
                let mut report = FolderReport::new(&encoded);
                report.slide_count = Some(slides.len());
                report.slides = Some(slides.into_vec());
                emit(&report, cli.json)?;
            }
        }
        Command::Projects => {
            let items = all_items();
            let folders: Vec<String> = items.iter().filter_map(|item| item.folder()).collect();
            info!(projects = folders.len(), "probing subfolder projects");
            for folder in &folders {
                let mut report = FolderReport::new(folder);
                report.thumbnail = Some(session.thumbnail(folder).await);
                report.slide_count = Some(session.slides(folder).await.len());
                emit(&report, cli.json)?;
            }
        }
    }

    let stats = session.cache_stats();
    info!(lookups = stats.lookups, misses = stats.misses, "scan finished");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn folders_are_encoded_per_segment() {
        assert_eq!(
            encode("Projects/Industrial/4. Brimax"),
            "Projects/Industrial/4.%20Brimax"
        );
    }

    #[test]
    fn missing_thumbnail_prints_dash() {
        let mut report = FolderReport::new("Projects/A");
        report.thumbnail = Some(None);
        report.slide_count = Some(0);
        assert_eq!(report.text(), "Projects/A\tthumb=-\tslides=0");
    }

    #[test]
    fn slides_accept_exhaustive_flag() {
        let cli = Cli::try_parse_from([
            "vista-scan",
            "--site",
            "https://example.com/",
            "slides",
            "--exhaustive",
            "News Room/Launch",
        ])
        .unwrap();
        assert_eq!(cli.site.as_deref(), Some("https://example.com/"));
        match cli.command {
            Command::Slides { exhaustive, folders } => {
                assert!(exhaustive);
                assert_eq!(folders, ["News Room/Launch"]);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn thumb_requires_a_folder() {
        assert!(Cli::try_parse_from(["vista-scan", "thumb"]).is_err());
    }
}
