// SPDX-License-Identifier: PMPL-1.0-or-later

//! Rendering surfaces for dashboard views

pub mod formatter;
pub mod gui;
pub mod html;
pub mod output;
pub mod tui;

use crate::view::ViewOutcome;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

pub use formatter::ViewFormatter;
pub use output::{OutputFormat, ViewDocument};

/// Print a view to the terminal
pub fn print_view(title: &str, outcome: &ViewOutcome) {
    let formatter = ViewFormatter::new();
    formatter.print(title, outcome);
}

/// Serialize a view and write it to `path`
pub fn save_view<P: AsRef<Path>>(
    title: &str,
    outcome: &ViewOutcome,
    format: OutputFormat,
    path: P,
) -> Result<()> {
    let content = format.serialize(title, outcome)?;
    fs::write(path.as_ref(), content)
        .with_context(|| format!("writing {}", path.as_ref().display()))?;
    Ok(())
}
