// SPDX-License-Identifier: PMPL-1.0-or-later

//! Culture Compass: Hofstede cultural dimensions dashboard.
//!
//! The crate turns a small, immutable table of country scores into the views
//! of an interactive reference dashboard.
//!
//! LAYERS:
//! 1. **Data**: the reference table of countries x six dimension scores.
//! 2. **Catalog**: dimension descriptors (column key, icon, color, text) and
//!    the closed set of behavioural scenarios.
//! 3. **Transform**: pure reshapes into chart rows, including the
//!    wide-to-long reshape that radar charts need.
//! 4. **View**: dispatches a selection to the matching view and builds the
//!    declarative chart spec handed to a rendering surface.

pub mod catalog;
pub mod chart;
pub mod config;
pub mod data;
pub mod diagnostics;
pub mod error;
pub mod render;
pub mod storage;
pub mod transform;
pub mod types;
pub mod view;

pub use error::{CompassError, CompassResult, LookupKind};
pub use view::{Dashboard, SelectionEvent, ViewOutcome};
