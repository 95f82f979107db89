//! Command line configuration.

use anyhow::{Result, bail};
use clap::Parser;
use std::path::PathBuf;

/// Command line configuration for Bugboard.
#[derive(Debug, Clone, Parser)]
#[command(name = "bugboard", version, about, long_about = None)]
pub struct Config {
    /// Issue store file (JSON array or JSONL)
    #[arg(default_value = "issues/issues.jsonl")]
    pub data: PathBuf,

    /// Output directory
    #[arg(short, long, default_value = "dist")]
    pub output: PathBuf,

    /// Dashboard title
    #[arg(long)]
    pub title: Option<String>,

    /// Markdown notes file rendered below the issue table
    #[arg(long)]
    pub notes: Option<PathBuf>,

    /// Seed the project filter
    #[arg(long)]
    pub project: Option<String>,

    /// Seed the phase filter
    #[arg(long)]
    pub phase: Option<String>,

    /// Seed the stage filter
    #[arg(long)]
    pub stage: Option<String>,

    /// Seed the status filter
    #[arg(long)]
    pub status: Option<String>,

    /// Seed the severity filter
    #[arg(long)]
    pub severity: Option<String>,

    /// Seed the free-text search query
    #[arg(long)]
    pub search: Option<String>,

    /// Select an issue id for the detail panel
    #[arg(long)]
    pub select: Option<String>,

    /// Skip opening the generated dashboard in a browser
    #[arg(long)]
    pub no_open: bool,
}

impl Config {
    /// Parses configuration from command line arguments.
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Validates configuration.
    ///
    /// # Errors
    ///
    /// Returns error if the output path exists as a regular file.
    pub fn validate(&self) -> Result<()> {
        if self.output.is_file() {
            bail!(
                "Output path is a file, not a directory: {}",
                self.output.display()
            );
        }
        Ok(())
    }

    /// Returns the dashboard title from configuration or the data file
    /// stem.
    pub fn dashboard_title(&self) -> String {
        if let Some(title) = &self.title {
            return title.clone();
        }
        self.data
            .file_stem()
            .and_then(|n| n.to_str())
            .map(str::to_string)
            .unwrap_or_else(|| "Issues".to_string())
    }
}
