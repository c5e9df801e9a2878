// SPDX-License-Identifier: PMPL-1.0-or-later

//! Self-diagnostics for the reference tables and configuration

use crate::config::CONFIG_ENV;
use crate::data::ReferenceData;
use crate::view::Dashboard;
use anyhow::{anyhow, Result};
use colored::*;
use std::env;
use std::path::Path;

pub fn run_self_diagnostics(dashboard: &Dashboard) -> Result<()> {
    println!("culture-compass self-diagnostics");

    let checks = collect_checks(dashboard);

    println!();
    for entry in &checks {
        entry.print();
    }

    if checks
        .iter()
        .any(|entry| matches!(entry.level, Level::Error))
    {
        Err(anyhow!("self-diagnostics reported issues"))
    } else {
        Ok(())
    }
}

pub(crate) fn collect_checks(dashboard: &Dashboard) -> Vec<Diagnostic> {
    vec![
        Diagnostic::ok(
            "version",
            format!("culture-compass {}", env!("CARGO_PKG_VERSION")),
        ),
        check_reference_data(dashboard.data()),
        check_column_mapping(dashboard),
        check_scenarios(dashboard),
        check_config(dashboard),
        check_directory("export directory", &dashboard.config().export_dir),
        check_env("config override", CONFIG_ENV),
    ]
}

#[derive(Debug, PartialEq, Eq)]
pub(crate) enum Level {
    Ok,
    Warn,
    Error,
}

pub(crate) struct Diagnostic {
    label: &'static str,
    pub(crate) level: Level,
    detail: String,
}

impl Diagnostic {
    fn new(label: &'static str, level: Level, detail: String) -> Self {
        Self {
            label,
            level,
            detail,
        }
    }

    fn ok(label: &'static str, detail: String) -> Self {
        Self::new(label, Level::Ok, detail)
    }

    fn warning(label: &'static str, detail: String) -> Self {
        Self::new(label, Level::Warn, detail)
    }

    fn error(label: &'static str, detail: String) -> Self {
        Self::new(label, Level::Error, detail)
    }

    fn print(&self) {
        println!("  [{}] {:22} {}", self.level.tag(), self.label, self.detail);
    }
}

impl Level {
    fn tag(&self) -> ColoredString {
        match self {
            Level::Ok => "OK".green(),
            Level::Warn => "WARN".yellow(),
            Level::Error => "ERR".red(),
        }
    }
}

fn check_reference_data(data: &ReferenceData) -> Diagnostic {
    match ReferenceData::from_records(data.records().to_vec()) {
        Ok(validated) if validated.is_empty() => {
            Diagnostic::error("reference data", "no countries loaded".to_string())
        }
        Ok(validated) => Diagnostic::ok(
            "reference data",
            format!("{} countries, scores within 0-100", validated.len()),
        ),
        Err(err) => Diagnostic::error("reference data", err.to_string()),
    }
}

fn check_column_mapping(dashboard: &Dashboard) -> Diagnostic {
    let catalog = dashboard.dimensions();
    let data = dashboard.data();
    for name in catalog.list_dimensions() {
        let key = match catalog.column_key(name) {
            Ok(key) => key,
            Err(err) => return Diagnostic::error("column mapping", err.to_string()),
        };
        if let Err(err) = catalog.display_name_for_column(key) {
            return Diagnostic::error("column mapping", err.to_string());
        }
        for country in data.list_countries() {
            if let Err(err) = data.get_score(country, key.column_name()) {
                return Diagnostic::error("column mapping", err.to_string());
            }
        }
    }
    Diagnostic::ok(
        "column mapping",
        format!(
            "{} dimensions resolve in every country record",
            catalog.list_dimensions().len()
        ),
    )
}

fn check_scenarios(dashboard: &Dashboard) -> Diagnostic {
    let scenarios = dashboard.scenarios();
    let names = scenarios.list_scenarios();
    for name in &names {
        match scenarios.tips(name) {
            Ok(tips) if tips.is_empty() => {
                return Diagnostic::warning("scenarios", format!("{} has no tips", name))
            }
            Ok(_) => {}
            Err(err) => return Diagnostic::error("scenarios", err.to_string()),
        }
    }
    Diagnostic::ok("scenarios", format!("{} scenarios with tips", names.len()))
}

fn check_config(dashboard: &Dashboard) -> Diagnostic {
    match dashboard.config().validate(dashboard.data()) {
        Ok(()) => Diagnostic::ok(
            "configuration",
            format!(
                "preset {:?}",
                dashboard.config().comparison_preset
            ),
        ),
        Err(err) => Diagnostic::error("configuration", err.to_string()),
    }
}

fn check_directory(label: &'static str, path: &Path) -> Diagnostic {
    if path.is_dir() {
        Diagnostic::ok(label, format!("{} exists", path.display()))
    } else if path.exists() {
        Diagnostic::warning(
            label,
            format!("{} exists but is not a directory", path.display()),
        )
    } else {
        Diagnostic::warning(
            label,
            format!("{} missing (created on first export)", path.display()),
        )
    }
}

fn check_env(label: &'static str, env_key: &str) -> Diagnostic {
    match env::var(env_key) {
        Ok(value) if !value.trim().is_empty() => {
            Diagnostic::ok(label, format!("{} = {}", env_key, value.trim()))
        }
        _ => Diagnostic::ok(label, format!("not set ({} unset)", env_key)),
    }
}
