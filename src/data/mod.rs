// SPDX-License-Identifier: PMPL-1.0-or-later

//! Reference data store
//!
//! An immutable table of countries and their six dimension scores. The
//! table is validated once when it is built and never changes afterwards.

use crate::error::{CompassError, CompassResult, LookupKind};
use crate::types::{CountryRecord, DimensionKey};
use std::collections::HashSet;
use tracing::debug;

/// Upper bound of the Hofstede scale.
pub const MAX_SCORE: u8 = 100;

#[derive(Debug, Clone)]
pub struct ReferenceData {
    records: Vec<CountryRecord>,
}

impl ReferenceData {
    /// The reference table shipped with the dashboard.
    pub fn builtin() -> Self {
        let records = vec![
            CountryRecord::new("USA", [40, 91, 62, 46, 26, 68]),
            CountryRecord::new("Japan", [54, 46, 95, 92, 88, 42]),
            CountryRecord::new("Germany", [35, 67, 66, 65, 83, 40]),
            CountryRecord::new("Brazil", [69, 38, 49, 76, 44, 59]),
            CountryRecord::new("Mexico", [81, 30, 69, 82, 24, 97]),
        ];
        debug_assert!(
            check_records(&records).is_ok(),
            "builtin reference table fails load checks"
        );
        Self { records }
    }

    /// Build a store from arbitrary records, rejecting duplicate or blank
    /// country names and scores above the scale.
    pub fn from_records(records: Vec<CountryRecord>) -> CompassResult<Self> {
        check_records(&records)?;
        debug!(countries = records.len(), "reference data loaded");
        Ok(Self { records })
    }

    /// Country names in table order.
    pub fn list_countries(&self) -> Vec<&str> {
        self.records.iter().map(|r| r.name.as_str()).collect()
    }

    pub fn records(&self) -> &[CountryRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn contains(&self, country: &str) -> bool {
        self.records.iter().any(|r| r.name == country)
    }

    pub fn country(&self, country: &str) -> CompassResult<&CountryRecord> {
        self.records
            .iter()
            .find(|r| r.name == country)
            .ok_or_else(|| CompassError::not_found(LookupKind::Country, country))
    }

    /// Score of `country` in the column named `column_key`.
    pub fn get_score(&self, country: &str, column_key: &str) -> CompassResult<u8> {
        let key = DimensionKey::from_column(column_key)
            .ok_or_else(|| CompassError::not_found(LookupKind::Column, column_key))?;
        Ok(self.country(country)?.score(key))
    }
}

/// Load-time checks shared by every way of building the store.
fn check_records(records: &[CountryRecord]) -> CompassResult<()> {
    let mut seen = HashSet::new();
    for record in records {
        let name = record.name.trim();
        if name.is_empty() {
            return Err(CompassError::InvalidData(
                "country name must not be empty".to_string(),
            ));
        }
        if !seen.insert(name.to_string()) {
            return Err(CompassError::InvalidData(format!(
                "duplicate country {:?}",
                record.name
            )));
        }
        for (key, score) in record.scores.iter() {
            if score > MAX_SCORE {
                return Err(CompassError::InvalidData(format!(
                    "{} score for {} is {}, expected 0-{}",
                    key, record.name, score, MAX_SCORE
                )));
            }
        }
    }
    Ok(())
}
