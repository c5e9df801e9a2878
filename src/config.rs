// SPDX-License-Identifier: PMPL-1.0-or-later

//! Dashboard configuration
//!
//! Loaded from YAML. Resolution order: explicit path, then the
//! `CULTURE_COMPASS_CONFIG` environment variable, then
//! `culture-compass.yaml` in the working directory, then built-in defaults.

use crate::chart::ChartTemplate;
use crate::data::ReferenceData;
use crate::error::{CompassError, CompassResult};
use crate::render::OutputFormat;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

pub const CONFIG_ENV: &str = "CULTURE_COMPASS_CONFIG";
pub const DEFAULT_CONFIG_FILE: &str = "culture-compass.yaml";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompassConfig {
    pub title: String,
    /// Countries preselected in the comparison view.
    pub comparison_preset: Vec<String>,
    pub explorer_template: ChartTemplate,
    pub comparison_template: ChartTemplate,
    pub profile_template: ChartTemplate,
    pub export_dir: PathBuf,
    pub export_formats: Vec<OutputFormat>,
}

impl Default for CompassConfig {
    fn default() -> Self {
        Self {
            title: "Culture Compass".to_string(),
            comparison_preset: vec!["USA".into(), "Japan".into(), "Mexico".into()],
            explorer_template: ChartTemplate::PlotlyWhite,
            comparison_template: ChartTemplate::PlotlyDark,
            profile_template: ChartTemplate::PlotlyWhite,
            export_dir: PathBuf::from("reports"),
            export_formats: vec![OutputFormat::Json, OutputFormat::Html],
        }
    }
}

impl CompassConfig {
    pub fn from_file(path: &Path) -> CompassResult<Self> {
        let text = fs::read_to_string(path)
            .map_err(|err| CompassError::Config(format!("reading {}: {}", path.display(), err)))?;
        Self::from_yaml(&text)
            .map_err(|err| CompassError::Config(format!("{}: {}", path.display(), err)))
    }

    pub fn from_yaml(text: &str) -> CompassResult<Self> {
        // An empty document means "all defaults".
        if text.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(text).map_err(|err| CompassError::Config(err.to_string()))
    }

    /// Resolve and load the configuration for this process.
    pub fn load(explicit: Option<&Path>) -> CompassResult<Self> {
        if let Some(path) = explicit {
            info!(path = %path.display(), "loading config");
            return Self::from_file(path);
        }
        if let Ok(value) = env::var(CONFIG_ENV) {
            if !value.trim().is_empty() {
                info!(path = %value, "loading config from {}", CONFIG_ENV);
                return Self::from_file(Path::new(value.trim()));
            }
        }
        let local = Path::new(DEFAULT_CONFIG_FILE);
        if local.is_file() {
            info!(path = %local.display(), "loading config");
            return Self::from_file(local);
        }
        debug!("no config file found, using defaults");
        Ok(Self::default())
    }

    /// Check the configuration against the reference data.
    pub fn validate(&self, data: &ReferenceData) -> CompassResult<()> {
        if self.title.trim().is_empty() {
            return Err(CompassError::Config("title must not be empty".to_string()));
        }
        for (index, country) in self.comparison_preset.iter().enumerate() {
            if !data.contains(country) {
                return Err(CompassError::Config(format!(
                    "comparison_preset names unknown country {:?}",
                    country
                )));
            }
            if self.comparison_preset[..index].contains(country) {
                return Err(CompassError::Config(format!(
                    "comparison_preset lists {:?} more than once",
                    country
                )));
            }
        }
        if self.export_formats.is_empty() {
            return Err(CompassError::Config(
                "export_formats must list at least one format".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_yields_defaults() {
        assert_eq!(CompassConfig::from_yaml("").unwrap(), CompassConfig::default());
    }

    #[test]
    fn partial_document_keeps_other_defaults() {
        let config = CompassConfig::from_yaml(
            "comparison_preset: [Germany, Brazil]\ncomparison_template: plotly_white\n",
        )
        .unwrap();
        assert_eq!(config.comparison_preset, vec!["Germany", "Brazil"]);
        assert_eq!(config.comparison_template, ChartTemplate::PlotlyWhite);
        assert_eq!(config.title, "Culture Compass");
        assert_eq!(config.export_formats, vec![OutputFormat::Json, OutputFormat::Html]);
    }

    #[test]
    fn malformed_document_is_config_error() {
        let err = CompassConfig::from_yaml("comparison_preset: 12").unwrap_err();
        assert!(matches!(err, CompassError::Config(_)));
    }

    #[test]
    fn validate_rejects_unknown_preset_country() {
        let data = ReferenceData::builtin();
        assert!(CompassConfig::default().validate(&data).is_ok());

        let config = CompassConfig {
            comparison_preset: vec!["USA".into(), "Atlantis".into()],
            ..CompassConfig::default()
        };
        let err = config.validate(&data).unwrap_err();
        assert!(err.to_string().contains("Atlantis"));
    }

    #[test]
    fn validate_rejects_repeated_preset_country() {
        let data = ReferenceData::builtin();
        let config = CompassConfig::from_yaml("comparison_preset: [USA, Japan, USA]\n").unwrap();
        let err = config.validate(&data).unwrap_err();
        assert!(matches!(err, CompassError::Config(_)));
        assert!(err.to_string().contains("more than once"));
    }

    #[test]
    fn from_file_reads_yaml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("compass.yaml");
        fs::write(&path, "title: Team Compass\nexport_formats: [yaml]\n").unwrap();
        let config = CompassConfig::from_file(&path).unwrap();
        assert_eq!(config.title, "Team Compass");
        assert_eq!(config.export_formats, vec![OutputFormat::Yaml]);
    }
}
