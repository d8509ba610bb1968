use std::fs;
use std::path::Path;

use mertens_arith::{Method, MAX_UPPER_BOUND};
use mertens_core::errors::{ErrorInfo, MertensError};
use mertens_core::from_yaml_slice;
use serde::{Deserialize, Serialize};

/// YAML-configurable parameters for a series run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeriesConfig {
    /// Upper bound `N` of the analysed range `[1, N]`.
    #[serde(default = "default_upper_bound")]
    pub upper_bound: u64,
    /// Evaluation strategy for μ over the range.
    #[serde(default)]
    pub method: Method,
    /// Which artefacts to write on export.
    #[serde(default)]
    pub export: ExportConfig,
}

fn default_upper_bound() -> u64 {
    500
}

impl Default for SeriesConfig {
    fn default() -> Self {
        Self {
            upper_bound: default_upper_bound(),
            method: Method::default(),
            export: ExportConfig::default(),
        }
    }
}

impl SeriesConfig {
    /// Deserializes a YAML (or JSON) configuration file without validating
    /// it, so callers can apply overrides first.
    pub fn read(path: &Path) -> Result<Self, MertensError> {
        let bytes = fs::read(path).map_err(|err| {
            MertensError::Io(
                ErrorInfo::new("config-read", err.to_string())
                    .with_context("path", path.display().to_string()),
            )
        })?;
        from_yaml_slice(&bytes)
    }

    /// Reads and validates a configuration file.
    pub fn load(path: &Path) -> Result<Self, MertensError> {
        let config = Self::read(path)?;
        config.validate()?;
        Ok(config)
    }

    /// Rejects empty ranges and ranges above [`MAX_UPPER_BOUND`].
    pub fn validate(&self) -> Result<(), MertensError> {
        if self.upper_bound == 0 {
            return Err(MertensError::Config(
                ErrorInfo::new("empty-range", "upper_bound must be at least 1")
                    .with_context("upper_bound", "0"),
            ));
        }
        if self.upper_bound > MAX_UPPER_BOUND {
            return Err(MertensError::Config(
                ErrorInfo::new("range-too-large", "upper_bound exceeds the supported range")
                    .with_context("upper_bound", self.upper_bound.to_string())
                    .with_hint(format!("upper_bound must not exceed {MAX_UPPER_BOUND}")),
            ));
        }
        if !self.export.json && !self.export.csv {
            tracing::warn!("export disabled for both json and csv; nothing will be written");
        }
        Ok(())
    }
}

/// Artefact selection for [`crate::export_series`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportConfig {
    /// Write `series.json`.
    #[serde(default = "enabled")]
    pub json: bool,
    /// Write `series.csv`.
    #[serde(default = "enabled")]
    pub csv: bool,
}

fn enabled() -> bool {
    true
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            json: true,
            csv: true,
        }
    }
}
