// SPDX-License-Identifier: PMPL-1.0-or-later

//! Serialization helpers for exported views

use crate::render::html;
use crate::view::ViewOutcome;
use anyhow::Result;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Json,
    Yaml,
    Html,
}

/// Self-contained document for one rendered view.
#[derive(Debug, Serialize)]
pub struct ViewDocument<'a> {
    pub title: &'a str,
    pub heading: &'static str,
    #[serde(flatten)]
    pub outcome: &'a ViewOutcome,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub figure: Option<Value>,
}

impl<'a> ViewDocument<'a> {
    pub fn new(title: &'a str, outcome: &'a ViewOutcome) -> Self {
        Self {
            title,
            heading: outcome.section().heading(),
            outcome,
            figure: outcome.chart().map(|chart| chart.to_plotly_figure()),
        }
    }
}

impl OutputFormat {
    pub fn parse(value: &str) -> Option<Self> {
        match value.to_ascii_lowercase().as_str() {
            "json" => Some(OutputFormat::Json),
            "yaml" | "yml" => Some(OutputFormat::Yaml),
            "html" | "htm" => Some(OutputFormat::Html),
            _ => None,
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Json => "json",
            OutputFormat::Yaml => "yaml",
            OutputFormat::Html => "html",
        }
    }

    pub fn serialize(&self, title: &str, outcome: &ViewOutcome) -> Result<String> {
        let document = ViewDocument::new(title, outcome);
        match self {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&document)?),
            OutputFormat::Yaml => Ok(serde_yaml::to_string(&document)?),
            OutputFormat::Html => Ok(html::render_page(&document)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::Dashboard;

    #[test]
    fn parse_accepts_aliases() {
        assert_eq!(OutputFormat::parse("YML"), Some(OutputFormat::Yaml));
        assert_eq!(OutputFormat::parse("htm"), Some(OutputFormat::Html));
        assert_eq!(OutputFormat::parse("ncl"), None);
    }

    #[test]
    fn json_document_carries_view_tag_and_figure() {
        let dashboard = Dashboard::builtin();
        let outcome = dashboard.comparison(&["USA", "Japan"]).unwrap();
        let json = OutputFormat::Json.serialize("Culture Compass", &outcome).unwrap();
        let value: Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["view"], "comparison");
        assert_eq!(value["heading"], "Cross-Cultural Comparison Tool");
        assert_eq!(value["figure"]["data"].as_array().unwrap().len(), 2);
    }

    #[test]
    fn yaml_document_omits_figure_for_text_views() {
        let dashboard = Dashboard::builtin();
        let outcome = dashboard.scenario("Team Collaboration Meeting").unwrap();
        let yaml = OutputFormat::Yaml.serialize("Culture Compass", &outcome).unwrap();
        assert!(yaml.contains("view: scenarios"));
        assert!(!yaml.contains("figure"));
    }
}
