// SPDX-License-Identifier: PMPL-1.0-or-later

//! Snapshot export of every dashboard view

use crate::render::OutputFormat;
use crate::types::Section;
use crate::view::Dashboard;
use anyhow::{anyhow, Context, Result};
use chrono::Utc;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// Render each section with its default selection and write one file per
/// section and format. Returns the written paths in section order.
pub fn export_views(
    dashboard: &Dashboard,
    directory: Option<&Path>,
    formats: &[OutputFormat],
) -> Result<Vec<PathBuf>> {
    if formats.is_empty() {
        return Err(anyhow!("no export formats requested"));
    }
    let base_dir = directory
        .map(Path::to_path_buf)
        .unwrap_or_else(|| dashboard.config().export_dir.clone());
    fs::create_dir_all(&base_dir)
        .with_context(|| format!("creating {}", base_dir.display()))?;

    let timestamp = Utc::now().format("%Y%m%d%H%M%S").to_string();
    let title = dashboard.config().title.as_str();
    let defaults = dashboard.default_selection();
    let mut stored = Vec::new();

    for section in Section::all() {
        let selection = defaults.clone().with_section(*section);
        let outcome = dashboard
            .dispatch(&selection)
            .with_context(|| format!("rendering {} view", section))?;
        for format in formats {
            let stem = format!("culture-compass-{}-{}", section.slug(), timestamp);
            let path = unused_path(&base_dir, &stem, format.extension());
            fs::write(&path, format.serialize(title, &outcome)?)
                .with_context(|| format!("writing {}", path.display()))?;
            stored.push(path);
        }
    }

    info!(files = stored.len(), dir = %base_dir.display(), "exported views");
    Ok(stored)
}

/// `{stem}.{ext}` in `dir`, or `{stem}-{n}.{ext}` when earlier exports from
/// the same second already hold that name.
fn unused_path(dir: &Path, stem: &str, extension: &str) -> PathBuf {
    let mut path = dir.join(format!("{}.{}", stem, extension));
    let mut counter = 1;
    while path.exists() {
        path = dir.join(format!("{}-{}.{}", stem, counter, extension));
        counter += 1;
    }
    path
}
