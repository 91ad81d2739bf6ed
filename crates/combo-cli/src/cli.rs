//! Command-line arguments and their merge onto the file configuration.

use clap::{Parser, ValueEnum};
use combo_core::{ComboConfig, OutputFormat, Result};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Text,
    Json,
}

impl From<Format> for OutputFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Text => OutputFormat::Text,
            Format::Json => OutputFormat::Json,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "combo")]
#[command(about = "Rank the most frequently ordered item combinations", long_about = None)]
#[command(version)]
pub struct Cli {
    /// URL, file path, or `-` for stdin
    pub source: Option<String>,

    /// Number of combinations to show
    #[arg(short = 'n', long, allow_negative_numbers = true)]
    pub top: Option<i64>,

    /// Abort the run after this many seconds
    #[arg(short, long)]
    pub timeout: Option<u64>,

    #[arg(short, long, value_enum)]
    pub format: Option<Format>,

    /// JSON config file; flags override its values
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Log at debug level
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Config file (or defaults) with flags applied on top.
    pub fn resolve_config(&self) -> Result<ComboConfig> {
        let mut config = match &self.config {
            Some(path) => ComboConfig::load(path)?,
            None => ComboConfig::default(),
        };
        if let Some(source) = &self.source {
            config.source = source.clone();
        }
        if let Some(top) = self.top {
            config.top_n = top;
        }
        if let Some(secs) = self.timeout {
            config.timeout_secs = Some(secs);
        }
        if let Some(format) = self.format {
            config.format = format.into();
        }
        config.validate()?;
        Ok(config)
    }
}
