//! Persistent CLI configuration
//!
//! Stored as JSON at `<config dir>/mix-design/config.json`. Every field has
//! a default, so a partial or missing file is fine.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use mix_core::MixDesignForm;
use serde::{Deserialize, Serialize};

use crate::cli::OutputFormat;
use crate::error::{CliError, Result};

const APP_DIR: &str = "mix-design";
const CONFIG_FILE: &str = "config.json";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Format used when `--format` is not given
    #[serde(default)]
    pub output_format: OutputFormat,

    /// Material properties used when neither flags nor an input file set them
    #[serde(default)]
    pub materials: MaterialDefaults,
}

/// Fallback material properties.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialDefaults {
    #[serde(default = "default_max_aggregate_size")]
    pub max_aggregate_size_mm: f64,

    #[serde(default = "default_zone")]
    pub fine_aggregate_zone: String,

    #[serde(default = "default_cement_type")]
    pub cement_type: String,

    #[serde(default = "default_cement_sg")]
    pub cement_sg: f64,

    #[serde(default = "default_water_sg")]
    pub water_sg: f64,

    #[serde(default = "default_coarse_sg")]
    pub coarse_aggregate_sg: f64,

    #[serde(default = "default_fine_sg")]
    pub fine_aggregate_sg: f64,
}

fn default_max_aggregate_size() -> f64 {
    20.0
}

fn default_zone() -> String {
    "Zone II".to_string()
}

fn default_cement_type() -> String {
    "OPC 53".to_string()
}

fn default_cement_sg() -> f64 {
    3.15
}

fn default_water_sg() -> f64 {
    1.0
}

fn default_coarse_sg() -> f64 {
    2.7
}

fn default_fine_sg() -> f64 {
    2.6
}

impl Default for MaterialDefaults {
    fn default() -> Self {
        Self {
            max_aggregate_size_mm: default_max_aggregate_size(),
            fine_aggregate_zone: default_zone(),
            cement_type: default_cement_type(),
            cement_sg: default_cement_sg(),
            water_sg: default_water_sg(),
            coarse_aggregate_sg: default_coarse_sg(),
            fine_aggregate_sg: default_fine_sg(),
        }
    }
}

impl MaterialDefaults {
    /// Partial form holding only the material fields; used as the last
    /// fallback when merging design inputs.
    pub fn to_form(&self) -> MixDesignForm {
        MixDesignForm {
            max_aggregate_size_mm: Some(self.max_aggregate_size_mm),
            fine_aggregate_zone: Some(self.fine_aggregate_zone.clone()),
            cement_type: Some(self.cement_type.clone()),
            cement_sg: Some(self.cement_sg),
            water_sg: Some(self.water_sg),
            coarse_aggregate_sg: Some(self.coarse_aggregate_sg),
            fine_aggregate_sg: Some(self.fine_aggregate_sg),
            ..MixDesignForm::default()
        }
    }
}

impl Config {
    /// Default location of the config file
    pub fn default_path() -> Result<PathBuf> {
        let base = dirs::config_dir()
            .ok_or_else(|| CliError::Config("Could not determine config directory".to_string()))?;
        Ok(base.join(APP_DIR).join(CONFIG_FILE))
    }

    /// Resolve an optional `--config` override against the default location
    pub fn resolve_path(explicit: Option<&Path>) -> Result<PathBuf> {
        match explicit {
            Some(path) => Ok(path.to_path_buf()),
            None => Self::default_path(),
        }
    }

    /// Load from `path`; a missing file yields the defaults
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&content)
            .map_err(|e| CliError::Config(format!("{}: {}", path.display(), e)))?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Write to `path`, creating parent directories
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }
}

impl fmt::Display for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let m = &self.materials;
        writeln!(f, "Output format:            {}", self.output_format)?;
        writeln!(f, "Max aggregate size:       {} mm", m.max_aggregate_size_mm)?;
        writeln!(f, "Fine aggregate zone:      {}", m.fine_aggregate_zone)?;
        writeln!(f, "Cement type:              {}", m.cement_type)?;
        writeln!(f, "SG cement:                {}", m.cement_sg)?;
        writeln!(f, "SG water:                 {}", m.water_sg)?;
        writeln!(f, "SG coarse aggregate:      {}", m.coarse_aggregate_sg)?;
        write!(f, "SG fine aggregate:        {}", m.fine_aggregate_sg)
    }
}
