// SPDX-License-Identifier: PMPL-1.0-or-later

//! Reshaping the reference table into chart-ready rows.
//!
//! All functions here are stateless: they read the store and the catalog
//! and return freshly built rows. Nothing is cached between calls.

use crate::catalog::DimensionCatalog;
use crate::data::ReferenceData;
use crate::error::CompassResult;
use serde::Serialize;

/// One bar of a single-dimension chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SeriesPoint {
    #[serde(rename = "Country")]
    pub country: String,
    #[serde(rename = "Score")]
    pub score: u8,
}

/// One (series, angular category) pair of a radar chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LongFormRow {
    #[serde(rename = "Country")]
    pub country: String,
    #[serde(rename = "Dimension")]
    pub dimension: &'static str,
    #[serde(rename = "Score")]
    pub score: u8,
}

/// Every country's score on one dimension, in table order.
pub fn single_dimension_series(
    data: &ReferenceData,
    catalog: &DimensionCatalog,
    dimension: &str,
) -> CompassResult<Vec<SeriesPoint>> {
    let key = catalog.column_key(dimension)?;
    Ok(data
        .records()
        .iter()
        .map(|record| SeriesPoint {
            country: record.name.clone(),
            score: record.score(key),
        })
        .collect())
}

/// The selection as a set: repeated names are dropped, keeping the first
/// occurrence.
pub fn distinct_countries<S: AsRef<str>>(countries: &[S]) -> Vec<&str> {
    let mut distinct: Vec<&str> = Vec::with_capacity(countries.len());
    for country in countries {
        let name = country.as_ref();
        if !distinct.contains(&name) {
            distinct.push(name);
        }
    }
    distinct
}

/// Wide-to-long reshape of the selected countries.
///
/// Rows are ordered by first-occurrence country order, then catalog dimension
/// order, and carry the dimension's display name rather than its column key.
pub fn multi_country_long_form<S: AsRef<str>>(
    data: &ReferenceData,
    catalog: &DimensionCatalog,
    countries: &[S],
) -> CompassResult<Vec<LongFormRow>> {
    let countries = distinct_countries(countries);
    let mut rows = Vec::with_capacity(countries.len() * catalog.descriptors().len());
    for country in countries {
        let record = data.country(country)?;
        for descriptor in catalog.descriptors() {
            let dimension = catalog.display_name_for_column(descriptor.column_key)?;
            rows.push(LongFormRow {
                country: record.name.clone(),
                dimension,
                score: record.score(descriptor.column_key),
            });
        }
    }
    Ok(rows)
}

/// One country's scores keyed by dimension display name.
pub fn country_profile(
    data: &ReferenceData,
    catalog: &DimensionCatalog,
    country: &str,
) -> CompassResult<Vec<LongFormRow>> {
    multi_country_long_form(data, catalog, &[country])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixtures() -> (ReferenceData, DimensionCatalog) {
        (ReferenceData::builtin(), DimensionCatalog::builtin())
    }

    #[test]
    fn long_form_orders_by_country_then_dimension() {
        let (data, catalog) = fixtures();
        let rows = multi_country_long_form(&data, &catalog, &["Mexico", "USA"]).unwrap();
        assert_eq!(rows.len(), 12);
        assert!(rows[..6].iter().all(|r| r.country == "Mexico"));
        assert!(rows[6..].iter().all(|r| r.country == "USA"));
        let dims: Vec<_> = rows[6..].iter().map(|r| r.dimension).collect();
        assert_eq!(dims, catalog.list_dimensions());
    }

    #[test]
    fn long_form_of_nothing_is_empty() {
        let (data, catalog) = fixtures();
        let none: [&str; 0] = [];
        assert!(multi_country_long_form(&data, &catalog, &none)
            .unwrap()
            .is_empty());
    }

    #[test]
    fn long_form_rejects_unknown_country() {
        let (data, catalog) = fixtures();
        let err = multi_country_long_form(&data, &catalog, &["USA", "Narnia"]).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn long_form_treats_selection_as_set() {
        let (data, catalog) = fixtures();
        let rows = multi_country_long_form(&data, &catalog, &["USA", "USA"]).unwrap();
        assert_eq!(rows.len(), 6);

        let rows =
            multi_country_long_form(&data, &catalog, &["Japan", "USA", "Japan"]).unwrap();
        assert_eq!(rows.len(), 12);
        assert!(rows[..6].iter().all(|r| r.country == "Japan"));
    }

    #[test]
    fn distinct_countries_keeps_first_occurrence() {
        assert_eq!(
            distinct_countries(&["Mexico", "USA", "Mexico", "Brazil", "USA"]),
            vec!["Mexico", "USA", "Brazil"]
        );
    }

    #[test]
    fn profile_uses_display_names() {
        let (data, catalog) = fixtures();
        let rows = country_profile(&data, &catalog, "Japan").unwrap();
        assert_eq!(rows.len(), 6);
        assert_eq!(rows[2].dimension, "Masculinity vs Femininity");
        assert_eq!(rows[2].score, 95);
    }
}
