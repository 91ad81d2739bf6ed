use crate::error::{ComboError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

pub const DEFAULT_SOURCE: &str = "http://files.olo.com/pizzas.json";
pub const DEFAULT_TOP_N: i64 = 20;

/// How the ranking is printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ComboConfig {
    /// URL, file path, or `-` for stdin.
    pub source: String,
    /// Signed so a negative request can be reported instead of rejected by the parser.
    pub top_n: i64,
    pub timeout_secs: Option<u64>,
    pub format: OutputFormat,
}

impl Default for ComboConfig {
    fn default() -> Self {
        Self {
            source: DEFAULT_SOURCE.into(),
            top_n: DEFAULT_TOP_N,
            timeout_secs: None,
            format: OutputFormat::Text,
        }
    }
}

impl ComboConfig {
    pub fn from_json_str(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Load a JSON config file. Missing fields take their defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .map_err(|e| ComboError::Config(format!("cannot read {}: {e}", path.display())))?;
        let config = Self::from_json_str(&text)?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.top_n < 0 {
            return Err(ComboError::InvalidArgument(format!(
                "top_n must be non-negative, got {}",
                self.top_n
            )));
        }
        if self.source.trim().is_empty() {
            return Err(ComboError::Config("source must not be empty".into()));
        }
        if self.timeout_secs == Some(0) {
            return Err(ComboError::Config("timeout_secs must be greater than zero".into()));
        }
        Ok(())
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}
