// SPDX-License-Identifier: PMPL-1.0-or-later

//! Presentation layer
//!
//! Binds a [`SelectionState`] to the transform layer and chart construction.
//! [`Dashboard::dispatch`] is the single entry point: it resolves the current
//! section and fully recomputes that view. Nothing is cached between calls,
//! so every interactive surface can simply call it again after each event.

use crate::catalog::{DimensionCatalog, ScenarioCatalog};
use crate::chart::ChartSpec;
use crate::config::CompassConfig;
use crate::data::ReferenceData;
use crate::error::{CompassError, CompassResult, LookupKind};
use crate::transform;
use crate::types::{EverydayContext, Section, SelectionState};
use serde::Serialize;
use tracing::debug;

pub const EMPTY_COMPARISON_ADVISORY: &str = "Please select at least one country to compare.";

/// A single input event from the UI boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionEvent {
    Section(Section),
    Dimension(String),
    Countries(Vec<String>),
    Scenario(String),
    ProfileCountry(String),
}

impl SelectionState {
    pub fn apply(&mut self, event: SelectionEvent) {
        match event {
            SelectionEvent::Section(section) => self.section = section,
            SelectionEvent::Dimension(name) => self.dimension = name,
            SelectionEvent::Countries(countries) => self.countries = countries,
            SelectionEvent::Scenario(name) => self.scenario = name,
            SelectionEvent::ProfileCountry(name) => self.profile_country = name,
        }
    }
}

/// An overview card for one dimension.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DimensionCard {
    pub name: &'static str,
    pub icon: &'static str,
    pub color: &'static str,
    pub description: &'static str,
    pub example: &'static str,
    pub low_pole: &'static str,
    pub high_pole: &'static str,
    pub contexts: Vec<EverydayContext>,
}

/// Result of dispatching one selection.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "view", rename_all = "snake_case")]
pub enum ViewOutcome {
    Overview {
        cards: Vec<DimensionCard>,
    },
    Explorer {
        dimension: String,
        chart: ChartSpec,
    },
    Comparison {
        countries: Vec<String>,
        chart: ChartSpec,
    },
    Scenarios {
        scenario: String,
        tips: Vec<String>,
    },
    Profile {
        country: String,
        chart: ChartSpec,
    },
    /// Not an error: the selection is valid but there is nothing to chart.
    Advisory {
        section: Section,
        message: String,
    },
}

impl ViewOutcome {
    pub fn section(&self) -> Section {
        match self {
            ViewOutcome::Overview { .. } => Section::Overview,
            ViewOutcome::Explorer { .. } => Section::Explorer,
            ViewOutcome::Comparison { .. } => Section::Comparison,
            ViewOutcome::Scenarios { .. } => Section::Scenarios,
            ViewOutcome::Profile { .. } => Section::Profile,
            ViewOutcome::Advisory { section, .. } => *section,
        }
    }

    pub fn chart(&self) -> Option<&ChartSpec> {
        match self {
            ViewOutcome::Explorer { chart, .. }
            | ViewOutcome::Comparison { chart, .. }
            | ViewOutcome::Profile { chart, .. } => Some(chart),
            _ => None,
        }
    }

    pub fn is_advisory(&self) -> bool {
        matches!(self, ViewOutcome::Advisory { .. })
    }
}

/// The immutable reference tables plus configuration, built once at startup
/// and passed to every rendering surface.
#[derive(Debug, Clone)]
pub struct Dashboard {
    data: ReferenceData,
    dimensions: DimensionCatalog,
    scenarios: ScenarioCatalog,
    config: CompassConfig,
}

impl Dashboard {
    pub fn new(
        data: ReferenceData,
        dimensions: DimensionCatalog,
        scenarios: ScenarioCatalog,
        config: CompassConfig,
    ) -> Self {
        Self {
            data,
            dimensions,
            scenarios,
            config,
        }
    }

    /// Built-in tables with the given configuration, validated.
    pub fn with_config(config: CompassConfig) -> CompassResult<Self> {
        let data = ReferenceData::builtin();
        config.validate(&data)?;
        Ok(Self::new(
            data,
            DimensionCatalog::builtin(),
            ScenarioCatalog::builtin(),
            config,
        ))
    }

    pub fn builtin() -> Self {
        Self::new(
            ReferenceData::builtin(),
            DimensionCatalog::builtin(),
            ScenarioCatalog::builtin(),
            CompassConfig::default(),
        )
    }

    pub fn data(&self) -> &ReferenceData {
        &self.data
    }

    pub fn dimensions(&self) -> &DimensionCatalog {
        &self.dimensions
    }

    pub fn scenarios(&self) -> &ScenarioCatalog {
        &self.scenarios
    }

    pub fn config(&self) -> &CompassConfig {
        &self.config
    }

    /// Initial selection: first dimension, first scenario, the configured
    /// comparison preset and the first country for the profile.
    pub fn default_selection(&self) -> SelectionState {
        SelectionState {
            section: Section::Overview,
            dimension: self
                .dimensions
                .list_dimensions()
                .first()
                .map(|d| d.to_string())
                .unwrap_or_default(),
            countries: self.config.comparison_preset.clone(),
            scenario: self
                .scenarios
                .list_scenarios()
                .first()
                .map(|s| s.to_string())
                .unwrap_or_default(),
            profile_country: self
                .data
                .list_countries()
                .first()
                .map(|c| c.to_string())
                .unwrap_or_default(),
        }
    }

    /// Apply one event and recompute the view it leads to.
    pub fn handle(
        &self,
        selection: &mut SelectionState,
        event: SelectionEvent,
    ) -> CompassResult<ViewOutcome> {
        selection.apply(event);
        self.dispatch(selection)
    }

    pub fn dispatch(&self, selection: &SelectionState) -> CompassResult<ViewOutcome> {
        debug!(section = %selection.section, "dispatching selection");
        match selection.section {
            Section::Overview => Ok(self.overview()),
            Section::Explorer => self.explorer(&selection.dimension),
            Section::Comparison => self.comparison(&selection.countries),
            Section::Scenarios => self.scenario(&selection.scenario),
            Section::Profile => self.profile(&selection.profile_country),
        }
    }

    pub fn overview(&self) -> ViewOutcome {
        let cards = self
            .dimensions
            .descriptors()
            .iter()
            .map(|d| DimensionCard {
                name: d.name,
                icon: d.icon,
                color: d.color,
                description: self.dimensions.description(d.name),
                example: self.dimensions.example(d.name),
                low_pole: d.low_pole,
                high_pole: d.high_pole,
                contexts: d.contexts.clone(),
            })
            .collect();
        ViewOutcome::Overview { cards }
    }

    pub fn explorer(&self, dimension: &str) -> CompassResult<ViewOutcome> {
        let key = self.dimensions.column_key(dimension)?;
        let points = transform::single_dimension_series(&self.data, &self.dimensions, dimension)?;
        let chart = ChartSpec::bar(
            format!("{} Across Cultures", dimension),
            key.column_name(),
            &points,
            self.config.explorer_template,
        );
        Ok(ViewOutcome::Explorer {
            dimension: dimension.to_string(),
            chart,
        })
    }

    pub fn comparison<S: AsRef<str>>(&self, countries: &[S]) -> CompassResult<ViewOutcome> {
        let countries = transform::distinct_countries(countries);
        for country in &countries {
            if !self.data.contains(country) {
                return Err(CompassError::not_found(LookupKind::Country, *country));
            }
        }
        if countries.is_empty() {
            debug!("empty comparison selection");
            return Ok(ViewOutcome::Advisory {
                section: Section::Comparison,
                message: EMPTY_COMPARISON_ADVISORY.to_string(),
            });
        }
        let rows = transform::multi_country_long_form(&self.data, &self.dimensions, &countries)?;
        let chart = ChartSpec::polar(
            "Cultural Dimensions Radar Chart",
            &rows,
            self.config.comparison_template,
            false,
        );
        Ok(ViewOutcome::Comparison {
            countries: countries.iter().map(|c| c.to_string()).collect(),
            chart,
        })
    }

    pub fn scenario(&self, name: &str) -> CompassResult<ViewOutcome> {
        let tips = self.scenarios.tips(name)?;
        Ok(ViewOutcome::Scenarios {
            scenario: name.to_string(),
            tips: tips.iter().map(|t| t.to_string()).collect(),
        })
    }

    pub fn profile(&self, country: &str) -> CompassResult<ViewOutcome> {
        let rows = transform::country_profile(&self.data, &self.dimensions, country)?;
        let chart = ChartSpec::polar(
            format!("{} Cultural Profile", country),
            &rows,
            self.config.profile_template,
            true,
        );
        Ok(ViewOutcome::Profile {
            country: country.to_string(),
            chart,
        })
    }
}
