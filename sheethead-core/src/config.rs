//! Configuration for which template files get reported

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::headers::SourceLabel;

/// Config file picked up from the working directory when present
pub const DEFAULT_CONFIG_FILE: &str = "sheethead.toml";

pub const DEFAULT_EXTRACTION_TEMPLATE: &str = "template.xlsx";
pub const DEFAULT_TINTING_TEMPLATE: &str = "tinting_template.xlsx";

/// Template locations, resolved against the working directory
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReporterConfig {
    #[serde(default = "default_extraction_template")]
    pub extraction_template: PathBuf,
    #[serde(default = "default_tinting_template")]
    pub tinting_template: PathBuf,
}

impl ReporterConfig {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: ReporterConfig = toml::from_str(&content)?;
        Ok(config)
    }

    /// Load `sheethead.toml` from `dir` if it exists, otherwise the defaults
    pub fn load_from_dir<P: AsRef<Path>>(dir: P) -> Result<Self> {
        let config_path = dir.as_ref().join(DEFAULT_CONFIG_FILE);
        if config_path.exists() {
            Self::from_file(&config_path)
                .with_context(|| format!("Failed to load config from {}", config_path.display()))
        } else {
            Ok(Self::default())
        }
    }

    /// Templates in report order: extraction first, then tinting
    pub fn targets(&self) -> [(SourceLabel, &Path); 2] {
        [
            (SourceLabel::Extraction, self.extraction_template.as_path()),
            (SourceLabel::Tinting, self.tinting_template.as_path()),
        ]
    }
}

impl Default for ReporterConfig {
    fn default() -> Self {
        Self {
            extraction_template: default_extraction_template(),
            tinting_template: default_tinting_template(),
        }
    }
}

fn default_extraction_template() -> PathBuf {
    PathBuf::from(DEFAULT_EXTRACTION_TEMPLATE)
}

fn default_tinting_template() -> PathBuf {
    PathBuf::from(DEFAULT_TINTING_TEMPLATE)
}
