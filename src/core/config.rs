//! Optional `vacatur.toml` configuration.
//!
//! Lookup order: explicit `--config` path, then `./vacatur.toml`. A missing
//! default file is not an error; a missing explicit file is.

use crate::core::calendar::FILING_WINDOW_MONTHS;
use crate::core::docx::DOCX_FILE_NAME;
use crate::core::error::VacaturError;
use crate::core::logging;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = "vacatur.toml";

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DraftConfig {
    pub output: OutputConfig,
    pub filing: FilingConfig,
    pub log: LogConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    pub file_name: String,
    pub directory: PathBuf,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            file_name: DOCX_FILE_NAME.to_string(),
            directory: PathBuf::from("."),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FilingConfig {
    pub window_months: i32,
}

impl Default for FilingConfig {
    fn default() -> Self {
        Self {
            window_months: FILING_WINDOW_MONTHS,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LogConfig {
    pub level: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
        }
    }
}

impl DraftConfig {
    pub fn from_toml_str(raw: &str) -> Result<Self, VacaturError> {
        let config: DraftConfig =
            toml::from_str(raw).map_err(|e| VacaturError::Config(e.to_string()))?;
        if config.output.file_name.trim().is_empty() {
            return Err(VacaturError::Config(
                "output.file_name must not be empty".to_string(),
            ));
        }
        if config.filing.window_months < 1 {
            return Err(VacaturError::Config(format!(
                "filing.window_months must be positive, got {}",
                config.filing.window_months
            )));
        }
        logging::level_filter(&config.log.level)?;
        Ok(config)
    }

    /// Default draft destination: `<directory>/<file_name>`.
    pub fn output_path(&self) -> PathBuf {
        self.output.directory.join(&self.output.file_name)
    }
}

/// Load configuration from `explicit`, or from `vacatur.toml` in `cwd`.
pub fn load_config(explicit: Option<&Path>, cwd: &Path) -> Result<DraftConfig, VacaturError> {
    let path = match explicit {
        Some(p) => {
            if !p.exists() {
                return Err(VacaturError::Config(format!(
                    "config file not found: {}",
                    p.display()
                )));
            }
            p.to_path_buf()
        }
        None => {
            let candidate = cwd.join(CONFIG_FILE_NAME);
            if !candidate.exists() {
                return Ok(DraftConfig::default());
            }
            candidate
        }
    };

    let content = fs::read_to_string(&path).map_err(VacaturError::IoError)?;
    DraftConfig::from_toml_str(&content)
}
