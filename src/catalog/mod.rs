// SPDX-License-Identifier: PMPL-1.0-or-later

//! Dimension and scenario catalogs.
//!
//! Both catalogs are closed sets built once from static content. Lookups
//! follow two policies:
//!
//! - descriptive text (`description`, `example`) never fails and falls back
//!   to a placeholder so the overview can always be rendered;
//! - structural lookups (`describe`, `column_key`, `display_name_for_column`,
//!   `tips`) return [`CompassError::NotFound`], since a broken mapping is a
//!   configuration bug rather than a user input problem.

mod content;

use crate::error::{CompassError, CompassResult, LookupKind};
use crate::types::{DimensionDescriptor, DimensionKey, ScenarioSet};

pub const DESCRIPTION_PLACEHOLDER: &str = "Description not available.";
pub const EXAMPLE_PLACEHOLDER: &str = "Example not available.";

#[derive(Debug, Clone)]
pub struct DimensionCatalog {
    descriptors: Vec<DimensionDescriptor>,
}

impl DimensionCatalog {
    pub fn builtin() -> Self {
        let descriptors = content::DIMENSIONS
            .iter()
            .map(|entry| DimensionDescriptor {
                name: entry.name,
                icon: entry.icon,
                color: entry.color,
                description: entry.description,
                example: entry.example,
                column_key: entry.column_key,
                low_pole: entry.low_pole,
                high_pole: entry.high_pole,
                contexts: entry.everyday_contexts(),
            })
            .collect();
        Self { descriptors }
    }

    /// Display names in fixed catalog order.
    pub fn list_dimensions(&self) -> Vec<&'static str> {
        self.descriptors.iter().map(|d| d.name).collect()
    }

    pub fn descriptors(&self) -> &[DimensionDescriptor] {
        &self.descriptors
    }

    pub fn describe(&self, name: &str) -> CompassResult<&DimensionDescriptor> {
        self.descriptors
            .iter()
            .find(|d| d.name == name)
            .ok_or_else(|| CompassError::not_found(LookupKind::Dimension, name))
    }

    pub fn description(&self, name: &str) -> &'static str {
        self.describe(name)
            .map(|d| d.description)
            .unwrap_or(DESCRIPTION_PLACEHOLDER)
    }

    pub fn example(&self, name: &str) -> &'static str {
        self.describe(name)
            .map(|d| d.example)
            .unwrap_or(EXAMPLE_PLACEHOLDER)
    }

    pub fn column_key(&self, name: &str) -> CompassResult<DimensionKey> {
        self.describe(name).map(|d| d.column_key)
    }

    /// Inverse of [`column_key`](Self::column_key).
    pub fn display_name_for_column(&self, key: DimensionKey) -> CompassResult<&'static str> {
        self.descriptors
            .iter()
            .find(|d| d.column_key == key)
            .map(|d| d.name)
            .ok_or_else(|| CompassError::not_found(LookupKind::Column, key.column_name()))
    }
}

#[derive(Debug, Clone)]
pub struct ScenarioCatalog {
    scenarios: Vec<ScenarioSet>,
}

impl ScenarioCatalog {
    pub fn builtin() -> Self {
        let scenarios = content::SCENARIOS
            .iter()
            .map(|&(name, tips)| ScenarioSet {
                name,
                tips: tips.to_vec(),
            })
            .collect();
        Self { scenarios }
    }

    pub fn list_scenarios(&self) -> Vec<&'static str> {
        self.scenarios.iter().map(|s| s.name).collect()
    }

    /// Tips for `name`, in authored order.
    pub fn tips(&self, name: &str) -> CompassResult<&[&'static str]> {
        self.scenarios
            .iter()
            .find(|s| s.name == name)
            .map(|s| s.tips.as_slice())
            .ok_or_else(|| CompassError::not_found(LookupKind::Scenario, name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn six_dimensions_in_fixed_order() {
        let catalog = DimensionCatalog::builtin();
        assert_eq!(
            catalog.list_dimensions(),
            vec![
                "Power Distance",
                "Individualism vs Collectivism",
                "Masculinity vs Femininity",
                "Uncertainty Avoidance",
                "Long-Term Orientation",
                "Indulgence vs Restraint",
            ]
        );
    }

    #[test]
    fn column_keys_are_a_bijection() {
        let catalog = DimensionCatalog::builtin();
        for key in DimensionKey::ALL {
            let name = catalog.display_name_for_column(key).unwrap();
            assert_eq!(catalog.column_key(name).unwrap(), key);
        }
    }

    #[test]
    fn text_lookups_fall_back_to_placeholders() {
        let catalog = DimensionCatalog::builtin();
        assert_eq!(catalog.description("Time Perception"), DESCRIPTION_PLACEHOLDER);
        assert_eq!(catalog.example("Time Perception"), EXAMPLE_PLACEHOLDER);
        assert!(catalog
            .description("Uncertainty Avoidance")
            .starts_with("The extent to which members"));
    }

    #[test]
    fn structural_lookups_fail_loudly() {
        let catalog = DimensionCatalog::builtin();
        assert!(catalog.column_key("Individualism").unwrap_err().is_not_found());
        assert!(catalog.describe("").is_err());
    }

    #[test]
    fn every_dimension_has_poles_and_contexts() {
        let catalog = DimensionCatalog::builtin();
        for descriptor in catalog.descriptors() {
            assert!(!descriptor.low_pole.is_empty());
            assert!(!descriptor.high_pole.is_empty());
            assert_eq!(descriptor.contexts.len(), 3, "{}", descriptor.name);
        }
    }

    #[test]
    fn scenario_tips_keep_authored_order() {
        let scenarios = ScenarioCatalog::builtin();
        assert_eq!(scenarios.list_scenarios().len(), 3);
        let tips = scenarios.tips("Team Collaboration Meeting").unwrap();
        assert_eq!(tips.len(), 10);
        assert_eq!(tips[0], "Encourage equal participation.");
        assert_eq!(tips[9], "Keep the tone collaborative.");
    }

    #[test]
    fn unknown_scenario_is_not_found() {
        let scenarios = ScenarioCatalog::builtin();
        let err = scenarios.tips("Job Interview").unwrap_err();
        assert!(matches!(
            err,
            CompassError::NotFound {
                kind: LookupKind::Scenario,
                ..
            }
        ));
    }
}
