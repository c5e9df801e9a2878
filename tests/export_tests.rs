// SPDX-License-Identifier: PMPL-1.0-or-later

//! Export and configuration round trips through the filesystem

use culture_compass::config::CompassConfig;
use culture_compass::render::{save_view, OutputFormat};
use culture_compass::storage::export_views;
use culture_compass::Dashboard;
use std::fs;

#[test]
fn test_export_writes_one_file_per_section_and_format() {
    let dir = tempfile::tempdir().unwrap();
    let dashboard = Dashboard::builtin();
    let stored = export_views(
        &dashboard,
        Some(dir.path()),
        &[OutputFormat::Json, OutputFormat::Html],
    )
    .expect("export should succeed");

    assert_eq!(stored.len(), 10);
    for path in &stored {
        assert!(path.is_file(), "{} should exist", path.display());
        let name = path.file_name().unwrap().to_string_lossy();
        assert!(name.starts_with("culture-compass-"));
    }
    assert!(stored[0]
        .file_name()
        .unwrap()
        .to_string_lossy()
        .contains("overview"));
}

#[test]
fn test_back_to_back_exports_never_overwrite() {
    let dir = tempfile::tempdir().unwrap();
    let dashboard = Dashboard::builtin();
    let formats = [OutputFormat::Yaml];
    let first = export_views(&dashboard, Some(dir.path()), &formats).unwrap();
    let second = export_views(&dashboard, Some(dir.path()), &formats).unwrap();

    assert_eq!(first.len(), 5);
    assert_eq!(second.len(), 5);
    for path in &second {
        assert!(!first.contains(path), "{} was reused", path.display());
    }
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 10);
}

#[test]
fn test_export_rejects_empty_format_list() {
    let dir = tempfile::tempdir().unwrap();
    let dashboard = Dashboard::builtin();
    assert!(export_views(&dashboard, Some(dir.path()), &[]).is_err());
}

#[test]
fn test_exported_comparison_json_is_plotly_ready() {
    let dir = tempfile::tempdir().unwrap();
    let dashboard = Dashboard::builtin();
    let outcome = dashboard.comparison(&["USA", "Japan", "Mexico"]).unwrap();
    let path = dir.path().join("comparison.json");
    save_view("Culture Compass", &outcome, OutputFormat::Json, &path).unwrap();

    let value: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    let traces = value["figure"]["data"].as_array().unwrap();
    assert_eq!(traces.len(), 3);
    for trace in traces {
        assert_eq!(trace["type"], "scatterpolar");
        // Six dimensions plus the repeated first vertex.
        assert_eq!(trace["r"].as_array().unwrap().len(), 7);
    }
    assert_eq!(value["chart"]["title"], "Cultural Dimensions Radar Chart");
}

#[test]
fn test_config_preset_drives_comparison_default() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("culture-compass.yaml");
    fs::write(&path, "comparison_preset:\n  - Brazil\n  - Germany\n").unwrap();

    let config = CompassConfig::load(Some(&path)).unwrap();
    let dashboard = Dashboard::with_config(config).unwrap();
    assert_eq!(
        dashboard.default_selection().countries,
        vec!["Brazil", "Germany"]
    );
}

#[test]
fn test_config_with_unknown_country_is_rejected() {
    let config = CompassConfig::from_yaml("comparison_preset: [USA, Narnia]\n").unwrap();
    let err = Dashboard::with_config(config).unwrap_err();
    assert!(err.to_string().contains("Narnia"));
}
