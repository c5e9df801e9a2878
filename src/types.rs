// SPDX-License-Identifier: PMPL-1.0-or-later

//! Core type definitions for culture-compass
//!
//! Country scores, dimension descriptors, scenario tip sets and the
//! per-interaction selection state shared by every rendering surface.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Data column of a country record. One per cultural dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DimensionKey {
    #[serde(rename = "Power Distance")]
    PowerDistance,
    #[serde(rename = "Individualism")]
    Individualism,
    #[serde(rename = "Masculinity")]
    Masculinity,
    #[serde(rename = "Uncertainty Avoidance")]
    UncertaintyAvoidance,
    #[serde(rename = "Long-Term Orientation")]
    LongTermOrientation,
    #[serde(rename = "Indulgence")]
    Indulgence,
}

impl DimensionKey {
    pub const ALL: [DimensionKey; 6] = [
        DimensionKey::PowerDistance,
        DimensionKey::Individualism,
        DimensionKey::Masculinity,
        DimensionKey::UncertaintyAvoidance,
        DimensionKey::LongTermOrientation,
        DimensionKey::Indulgence,
    ];

    /// Column name as it appears in the reference table.
    pub fn column_name(&self) -> &'static str {
        match self {
            DimensionKey::PowerDistance => "Power Distance",
            DimensionKey::Individualism => "Individualism",
            DimensionKey::Masculinity => "Masculinity",
            DimensionKey::UncertaintyAvoidance => "Uncertainty Avoidance",
            DimensionKey::LongTermOrientation => "Long-Term Orientation",
            DimensionKey::Indulgence => "Indulgence",
        }
    }

    pub fn from_column(column: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|key| key.column_name() == column)
    }
}

impl fmt::Display for DimensionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.column_name())
    }
}

/// The six dimension scores of one country, each on a 0-100 scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DimensionScores {
    #[serde(rename = "Power Distance")]
    pub power_distance: u8,
    #[serde(rename = "Individualism")]
    pub individualism: u8,
    #[serde(rename = "Masculinity")]
    pub masculinity: u8,
    #[serde(rename = "Uncertainty Avoidance")]
    pub uncertainty_avoidance: u8,
    #[serde(rename = "Long-Term Orientation")]
    pub long_term_orientation: u8,
    #[serde(rename = "Indulgence")]
    pub indulgence: u8,
}

impl DimensionScores {
    pub fn get(&self, key: DimensionKey) -> u8 {
        match key {
            DimensionKey::PowerDistance => self.power_distance,
            DimensionKey::Individualism => self.individualism,
            DimensionKey::Masculinity => self.masculinity,
            DimensionKey::UncertaintyAvoidance => self.uncertainty_avoidance,
            DimensionKey::LongTermOrientation => self.long_term_orientation,
            DimensionKey::Indulgence => self.indulgence,
        }
    }

    /// Scores in column order.
    pub fn iter(&self) -> impl Iterator<Item = (DimensionKey, u8)> + '_ {
        DimensionKey::ALL.iter().map(move |key| (*key, self.get(*key)))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountryRecord {
    #[serde(rename = "Country")]
    pub name: String,
    #[serde(flatten)]
    pub scores: DimensionScores,
}

impl CountryRecord {
    pub fn new(name: impl Into<String>, scores: [u8; 6]) -> Self {
        let [pd, idv, mas, uai, lto, ivr] = scores;
        Self {
            name: name.into(),
            scores: DimensionScores {
                power_distance: pd,
                individualism: idv,
                masculinity: mas,
                uncertainty_avoidance: uai,
                long_term_orientation: lto,
                indulgence: ivr,
            },
        }
    }

    pub fn score(&self, key: DimensionKey) -> u8 {
        self.scores.get(key)
    }
}

/// A setting in which the two poles of a dimension show up differently.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EverydayContext {
    pub context: &'static str,
    pub low: &'static str,
    pub high: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DimensionDescriptor {
    pub name: &'static str,
    pub icon: &'static str,
    pub color: &'static str,
    pub description: &'static str,
    pub example: &'static str,
    pub column_key: DimensionKey,
    pub low_pole: &'static str,
    pub high_pole: &'static str,
    pub contexts: Vec<EverydayContext>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScenarioSet {
    pub name: &'static str,
    pub tips: Vec<&'static str>,
}

/// Top-level dashboard mode. Views are mutually exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    Overview,
    Explorer,
    Comparison,
    Scenarios,
    Profile,
}

impl Section {
    pub fn all() -> &'static [Section] {
        &[
            Section::Overview,
            Section::Explorer,
            Section::Comparison,
            Section::Scenarios,
            Section::Profile,
        ]
    }

    /// Navigation label.
    pub fn label(&self) -> &'static str {
        match self {
            Section::Overview => "🌍 Cultural Dimensions Overview",
            Section::Explorer => "📊 Dimension Explorer",
            Section::Comparison => "⚖️ Cultural Comparison",
            Section::Scenarios => "💡 Real-Life Scenarios",
            Section::Profile => "🧭 Country Profile",
        }
    }

    pub fn heading(&self) -> &'static str {
        match self {
            Section::Overview => "Understanding Hofstede's Framework",
            Section::Explorer => "Interactive Dimension Explorer",
            Section::Comparison => "Cross-Cultural Comparison Tool",
            Section::Scenarios => "Cultural Dimension Scenarios",
            Section::Profile => "Country Cultural Profile",
        }
    }

    pub fn slug(&self) -> &'static str {
        match self {
            Section::Overview => "overview",
            Section::Explorer => "explorer",
            Section::Comparison => "comparison",
            Section::Scenarios => "scenarios",
            Section::Profile => "profile",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

/// Everything the user has currently chosen. Rebuilt on every interaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionState {
    pub section: Section,
    pub dimension: String,
    pub countries: Vec<String>,
    pub scenario: String,
    pub profile_country: String,
}

impl SelectionState {
    pub fn with_section(mut self, section: Section) -> Self {
        self.section = section;
        self
    }

    pub fn with_dimension(mut self, dimension: impl Into<String>) -> Self {
        self.dimension = dimension.into();
        self
    }

    pub fn with_countries<I, S>(mut self, countries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.countries = countries.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_scenario(mut self, scenario: impl Into<String>) -> Self {
        self.scenario = scenario.into();
        self
    }

    pub fn with_profile_country(mut self, country: impl Into<String>) -> Self {
        self.profile_country = country.into();
        self
    }

    /// Add the country if absent, remove it if present. Keeps selection order.
    pub fn toggle_country(&mut self, country: &str) {
        if let Some(pos) = self.countries.iter().position(|c| c == country) {
            self.countries.remove(pos);
        } else {
            self.countries.push(country.to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn column_names_round_trip_through_lookup() {
        for key in DimensionKey::ALL {
            assert_eq!(DimensionKey::from_column(key.column_name()), Some(key));
        }
        assert_eq!(DimensionKey::from_column("Hierarchy"), None);
    }

    #[test]
    fn country_record_serializes_with_table_columns() {
        let record = CountryRecord::new("USA", [40, 91, 62, 46, 26, 68]);
        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["Country"], "USA");
        assert_eq!(value["Individualism"], 91);
        assert_eq!(value["Long-Term Orientation"], 26);
    }

    #[test]
    fn toggle_country_preserves_order() {
        let mut selection = SelectionState {
            section: Section::Comparison,
            dimension: String::new(),
            countries: vec!["USA".into(), "Japan".into()],
            scenario: String::new(),
            profile_country: String::new(),
        };
        selection.toggle_country("Brazil");
        selection.toggle_country("USA");
        assert_eq!(selection.countries, vec!["Japan", "Brazil"]);
    }
}
