// SPDX-License-Identifier: PMPL-1.0-or-later

//! Presentation layer dispatch tests

use culture_compass::chart::{ChartKind, ChartTemplate};
use culture_compass::types::Section;
use culture_compass::view::EMPTY_COMPARISON_ADVISORY;
use culture_compass::{CompassError, Dashboard, LookupKind, SelectionEvent, ViewOutcome};

#[test]
fn test_empty_comparison_is_advisory_not_chart() {
    let dashboard = Dashboard::builtin();
    let selection = dashboard
        .default_selection()
        .with_section(Section::Comparison)
        .with_countries(Vec::<String>::new());
    let outcome = dashboard.dispatch(&selection).expect("empty selection is valid");

    assert!(outcome.is_advisory());
    assert!(outcome.chart().is_none());
    match outcome {
        ViewOutcome::Advisory { section, message } => {
            assert_eq!(section, Section::Comparison);
            assert_eq!(message, EMPTY_COMPARISON_ADVISORY);
        }
        other => panic!("expected advisory, got {:?}", other),
    }
}

#[test]
fn test_default_comparison_is_dark_radar_of_preset() {
    let dashboard = Dashboard::builtin();
    let selection = dashboard
        .default_selection()
        .with_section(Section::Comparison);
    let outcome = dashboard.dispatch(&selection).unwrap();
    let chart = outcome.chart().expect("comparison should chart");

    assert_eq!(chart.kind, ChartKind::ClosedPolarLine);
    assert_eq!(chart.title, "Cultural Dimensions Radar Chart");
    assert_eq!(chart.template, ChartTemplate::PlotlyDark);
    assert_eq!(chart.series(), vec!["USA", "Japan", "Mexico"]);
    assert_eq!(chart.rows.len(), 18);
    assert_eq!(chart.encoding.category, "Dimension");
    assert_eq!(chart.encoding.value, "Score");
    assert!(!chart.fill);
}

#[test]
fn test_explorer_bar_chart_one_bar_per_country() {
    let dashboard = Dashboard::builtin();
    let outcome = dashboard.explorer("Uncertainty Avoidance").unwrap();
    let chart = outcome.chart().unwrap();

    assert_eq!(chart.kind, ChartKind::CategoricalBar);
    assert_eq!(chart.template, ChartTemplate::PlotlyWhite);
    assert_eq!(chart.rows.len(), 5);
    assert_eq!(chart.series().len(), 5);
    assert_eq!(chart.rows[1].category, "Japan");
    assert_eq!(chart.rows[1].value, 92.0);
}

#[test]
fn test_unknown_keys_are_not_found() {
    let dashboard = Dashboard::builtin();
    let base = dashboard.default_selection();

    let err = dashboard
        .dispatch(&base.clone().with_section(Section::Explorer).with_dimension("Hierarchy"))
        .unwrap_err();
    assert!(matches!(
        err,
        CompassError::NotFound {
            kind: LookupKind::Dimension,
            ..
        }
    ));

    let err = dashboard
        .dispatch(&base.clone().with_section(Section::Scenarios).with_scenario("Job Interview"))
        .unwrap_err();
    assert!(matches!(
        err,
        CompassError::NotFound {
            kind: LookupKind::Scenario,
            ..
        }
    ));

    let err = dashboard
        .dispatch(&base.with_section(Section::Profile).with_profile_country("France"))
        .unwrap_err();
    assert!(matches!(
        err,
        CompassError::NotFound {
            kind: LookupKind::Country,
            ..
        }
    ));
}

#[test]
fn test_scenario_tips_in_authored_order() {
    let dashboard = Dashboard::builtin();
    let outcome = dashboard.scenario("Negotiating a Business Deal").unwrap();
    let ViewOutcome::Scenarios { tips, .. } = outcome else {
        panic!("expected scenarios view");
    };
    assert_eq!(tips.first().map(String::as_str), Some("Clearly outline expectations."));
    assert_eq!(tips.last().map(String::as_str), Some("Ask clarifying questions."));
}

#[test]
fn test_events_fully_recompute_each_time() {
    let dashboard = Dashboard::builtin();
    let mut selection = dashboard.default_selection();

    let first = dashboard
        .handle(&mut selection, SelectionEvent::Section(Section::Comparison))
        .unwrap();
    let again = dashboard.dispatch(&selection).unwrap();
    assert_eq!(first, again);

    let narrowed = dashboard
        .handle(
            &mut selection,
            SelectionEvent::Countries(vec!["Germany".to_string()]),
        )
        .unwrap();
    assert_eq!(narrowed.chart().unwrap().rows.len(), 6);

    let cleared = dashboard
        .handle(&mut selection, SelectionEvent::Countries(Vec::new()))
        .unwrap();
    assert!(cleared.is_advisory());
}

#[test]
fn test_every_section_renders_with_defaults() {
    let dashboard = Dashboard::builtin();
    let defaults = dashboard.default_selection();
    for section in Section::all() {
        let outcome = dashboard
            .dispatch(&defaults.clone().with_section(*section))
            .unwrap();
        assert_eq!(outcome.section(), *section);
    }
}

#[test]
fn test_repeated_country_draws_one_radar_loop() {
    let dashboard = Dashboard::builtin();
    let selection = dashboard
        .default_selection()
        .with_section(Section::Comparison)
        .with_countries(vec!["USA".to_string(), "USA".to_string()]);
    let outcome = dashboard.dispatch(&selection).unwrap();
    let chart = outcome.chart().unwrap();
    assert_eq!(chart.rows.len(), 6);
    assert_eq!(chart.series(), vec!["USA"]);

    let figure = chart.to_plotly_figure();
    let traces = figure["data"].as_array().unwrap();
    assert_eq!(traces.len(), 1);
    assert_eq!(traces[0]["r"].as_array().unwrap().len(), 7);
}
