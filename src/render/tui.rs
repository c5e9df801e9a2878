// SPDX-License-Identifier: PMPL-1.0-or-later

//! Lightweight terminal UI for browsing the dashboard

use crate::render::formatter::ViewFormatter;
use crate::types::{Section, SelectionState};
use crate::view::{Dashboard, SelectionEvent, ViewOutcome};
use anyhow::Result;
use colored::*;
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent},
    execute,
    terminal::{self, ClearType},
};
use std::io::{stdout, Write};
use std::time::Duration;
use tracing::warn;

pub struct DashboardTui;

impl DashboardTui {
    pub fn run(dashboard: &Dashboard) -> Result<()> {
        terminal::enable_raw_mode()?;
        let result = Self::run_inner(dashboard);
        terminal::disable_raw_mode()?;
        result
    }

    fn run_inner(dashboard: &Dashboard) -> Result<()> {
        let mut stdout = stdout();
        execute!(
            stdout,
            terminal::Clear(ClearType::All),
            cursor::MoveTo(0, 0)
        )?;
        let formatter = ViewFormatter::new();
        let mut selection = dashboard.default_selection();
        let mut cursor_idx = 0usize;
        let mut outcome = dashboard.dispatch(&selection)?;

        loop {
            Self::render(&mut stdout, dashboard, &formatter, &selection, cursor_idx, &outcome)?;

            if !event::poll(Duration::from_millis(200))? {
                continue;
            }
            let Event::Key(KeyEvent { code, .. }) = event::read()? else {
                continue;
            };
            if matches!(code, KeyCode::Char('q') | KeyCode::Esc) {
                break;
            }
            let Some(next) = key_event(dashboard, &selection, &mut cursor_idx, code) else {
                continue;
            };
            match dashboard.handle(&mut selection, next) {
                Ok(view) => outcome = view,
                Err(err) => {
                    warn!(%err, "selection could not be rendered");
                    outcome = ViewOutcome::Advisory {
                        section: selection.section,
                        message: err.to_string(),
                    };
                }
            }
        }

        Ok(())
    }

    fn render(
        stdout: &mut impl Write,
        dashboard: &Dashboard,
        formatter: &ViewFormatter,
        selection: &SelectionState,
        cursor_idx: usize,
        outcome: &ViewOutcome,
    ) -> Result<()> {
        execute!(
            stdout,
            terminal::Clear(ClearType::All),
            cursor::MoveTo(0, 0)
        )?;
        // Raw mode needs explicit carriage returns.
        write!(
            stdout,
            "{}\r\n\r\n",
            dashboard.config().title.to_uppercase().bold().cyan()
        )?;

        for (idx, section) in Section::all().iter().enumerate() {
            let label = format!("[{}] {}", idx + 1, section.label());
            if *section == selection.section {
                write!(stdout, "{}  ", label.green().bold())?;
            } else {
                write!(stdout, "{}  ", label.dimmed())?;
            }
        }
        write!(stdout, "\r\n\r\n{}\r\n", selection.section.heading().bold().yellow())?;

        for line in selector_lines(dashboard, selection, cursor_idx) {
            write!(stdout, "{}\r\n", line)?;
        }
        write!(stdout, "\r\n")?;

        for line in formatter.lines(outcome) {
            write!(stdout, "{}\r\n", line)?;
        }

        write!(
            stdout,
            "\r\n{}\r\n",
            "Controls: [1-5/Tab] Section, [j/k] Choose, [Space] Toggle country, [q] Quit".dimmed()
        )?;
        stdout.flush()?;
        Ok(())
    }
}

fn selector_lines(
    dashboard: &Dashboard,
    selection: &SelectionState,
    cursor_idx: usize,
) -> Vec<String> {
    match selection.section {
        Section::Overview => Vec::new(),
        Section::Explorer => vec![format!("Choose a Dimension: {}", selection.dimension.bold())],
        Section::Scenarios => vec![format!("Choose a Scenario: {}", selection.scenario.bold())],
        Section::Profile => vec![format!(
            "Choose a Country: {}",
            selection.profile_country.bold()
        )],
        Section::Comparison => {
            let mut lines = vec!["Select Countries:".to_string()];
            for (idx, country) in dashboard.data().list_countries().into_iter().enumerate() {
                let mark = if selection.countries.iter().any(|c| c == country) {
                    "[x]"
                } else {
                    "[ ]"
                };
                let pointer = if idx == cursor_idx { "➤" } else { " " };
                lines.push(format!("  {} {} {}", pointer, mark, country));
            }
            lines
        }
    }
}

/// Translate a key press into a selection event for the current section.
fn key_event(
    dashboard: &Dashboard,
    selection: &SelectionState,
    cursor_idx: &mut usize,
    code: KeyCode,
) -> Option<SelectionEvent> {
    let sections = Section::all();
    let current = sections
        .iter()
        .position(|s| *s == selection.section)
        .unwrap_or(0);

    match code {
        KeyCode::Char(c @ '1'..='5') => {
            let idx = c as usize - '1' as usize;
            sections.get(idx).map(|s| SelectionEvent::Section(*s))
        }
        KeyCode::Tab => Some(SelectionEvent::Section(
            sections[(current + 1) % sections.len()],
        )),
        KeyCode::BackTab => Some(SelectionEvent::Section(
            sections[(current + sections.len() - 1) % sections.len()],
        )),
        KeyCode::Char('j') | KeyCode::Down => step(dashboard, selection, cursor_idx, 1),
        KeyCode::Char('k') | KeyCode::Up => step(dashboard, selection, cursor_idx, -1),
        KeyCode::Char(' ') if selection.section == Section::Comparison => {
            let countries = dashboard.data().list_countries();
            let country = countries.get(*cursor_idx)?;
            let mut next = selection.clone();
            next.toggle_country(country);
            Some(SelectionEvent::Countries(next.countries))
        }
        _ => None,
    }
}

fn step(
    dashboard: &Dashboard,
    selection: &SelectionState,
    cursor_idx: &mut usize,
    delta: isize,
) -> Option<SelectionEvent> {
    match selection.section {
        Section::Overview => None,
        Section::Explorer => {
            let options = dashboard.dimensions().list_dimensions();
            cycle(&options, &selection.dimension, delta)
                .map(|d| SelectionEvent::Dimension(d.to_string()))
        }
        Section::Scenarios => {
            let options = dashboard.scenarios().list_scenarios();
            cycle(&options, &selection.scenario, delta)
                .map(|s| SelectionEvent::Scenario(s.to_string()))
        }
        Section::Profile => {
            let options = dashboard.data().list_countries();
            cycle(&options, &selection.profile_country, delta)
                .map(|c| SelectionEvent::ProfileCountry(c.to_string()))
        }
        Section::Comparison => {
            let len = dashboard.data().len();
            if len > 0 {
                *cursor_idx = wrap(*cursor_idx, delta, len);
            }
            None
        }
    }
}

fn cycle<'a>(options: &[&'a str], current: &str, delta: isize) -> Option<&'a str> {
    if options.is_empty() {
        return None;
    }
    let idx = options.iter().position(|o| *o == current).unwrap_or(0);
    Some(options[wrap(idx, delta, options.len())])
}

fn wrap(idx: usize, delta: isize, len: usize) -> usize {
    (idx as isize + delta).rem_euclid(len as isize) as usize
}
