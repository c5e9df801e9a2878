// SPDX-License-Identifier: PMPL-1.0-or-later

//! Terminal formatting of dashboard views

use crate::chart::{hex_rgb, series_color, ChartKind, ChartSpec};
use crate::view::{DimensionCard, ViewOutcome};
use colored::*;

/// Width of a full-scale (score 100) terminal bar.
const BAR_WIDTH: usize = 40;

pub struct ViewFormatter;

impl ViewFormatter {
    pub fn new() -> Self {
        Self
    }

    pub fn print(&self, title: &str, outcome: &ViewOutcome) {
        println!("\n{}", format!("=== {} ===", title.to_uppercase()).bold().cyan());
        println!("{}", outcome.section().heading().bold().yellow());
        println!();
        for line in self.lines(outcome) {
            println!("{}", line);
        }
        println!();
    }

    /// Body lines for a view, shared by the printer and the TUI.
    pub fn lines(&self, outcome: &ViewOutcome) -> Vec<String> {
        match outcome {
            ViewOutcome::Overview { cards } => cards
                .iter()
                .flat_map(|card| self.card_lines(card))
                .collect(),
            ViewOutcome::Explorer { chart, .. }
            | ViewOutcome::Comparison { chart, .. }
            | ViewOutcome::Profile { chart, .. } => self.chart_lines(chart),
            ViewOutcome::Scenarios { scenario, tips } => self.scenario_lines(scenario, tips),
            ViewOutcome::Advisory { message, .. } => {
                vec![format!("ℹ {}", message).blue().to_string()]
            }
        }
    }

    fn card_lines(&self, card: &DimensionCard) -> Vec<String> {
        let heading = format!("{} {}", card.icon, card.name).bold();
        let heading = match hex_rgb(card.color) {
            Some((r, g, b)) => heading.truecolor(r, g, b),
            None => heading,
        };
        let mut lines = vec![heading.to_string()];
        lines.push(format!("  {}", card.description));
        lines.push(format!("  {} {}", "Real-life Example:".bold(), card.example));
        lines.push(format!(
            "  {} {} ◀──▶ {}",
            "Poles:".bold(),
            card.low_pole,
            card.high_pole
        ));
        for ctx in &card.contexts {
            lines.push(format!("    {}", ctx.context.underline()));
            lines.push(format!("      L: {}", ctx.low.dimmed()));
            lines.push(format!("      H: {}", ctx.high.dimmed()));
        }
        lines.push(String::new());
        lines
    }

    pub fn chart_lines(&self, chart: &ChartSpec) -> Vec<String> {
        let mut lines = vec![chart.title.bold().to_string()];
        match chart.kind {
            ChartKind::CategoricalBar => {
                lines.push(format!(
                    "  {} by {}",
                    chart.encoding.value.dimmed(),
                    chart.encoding.category.dimmed()
                ));
                let label_width = label_width(chart.rows.iter().map(|r| r.category.as_str()));
                for (idx, series) in chart.series().into_iter().enumerate() {
                    for row in chart.rows_for(series) {
                        lines.push(format!(
                            "  {:<width$} {} {:>3}",
                            row.category,
                            colored_bar(row.value, series_color(idx)),
                            row.value,
                            width = label_width
                        ));
                    }
                }
            }
            ChartKind::ClosedPolarLine => {
                let label_width = label_width(chart.rows.iter().map(|r| r.category.as_str()));
                for (idx, series) in chart.series().into_iter().enumerate() {
                    lines.push(format!("  {}", paint(series, series_color(idx)).bold()));
                    for row in chart.rows_for(series) {
                        lines.push(format!(
                            "    {:<width$} {} {:>3}",
                            row.category,
                            colored_bar(row.value, series_color(idx)),
                            row.value,
                            width = label_width
                        ));
                    }
                }
            }
        }
        lines
    }

    fn scenario_lines(&self, scenario: &str, tips: &[String]) -> Vec<String> {
        let mut lines = vec![format!("### {}", scenario).bold().to_string()];
        lines.push("Examples:".to_string());
        let mut row = String::from(" ");
        let mut row_len = 0;
        for tip in tips {
            let chip_len = tip.chars().count() + 4;
            if row_len > 0 && row_len + chip_len > 90 {
                lines.push(std::mem::replace(&mut row, String::from(" ")));
                row_len = 0;
            }
            row.push_str(&format!(" {} ", tip).black().on_truecolor(0xFF, 0xD1, 0x66).to_string());
            row.push(' ');
            row_len += chip_len;
        }
        if row_len > 0 {
            lines.push(row);
        }
        lines
    }
}

impl Default for ViewFormatter {
    fn default() -> Self {
        Self::new()
    }
}

fn label_width<'a>(labels: impl Iterator<Item = &'a str>) -> usize {
    labels.map(|l| l.chars().count()).max().unwrap_or(0)
}

fn paint(text: &str, color: &str) -> ColoredString {
    match hex_rgb(color) {
        Some((r, g, b)) => text.truecolor(r, g, b),
        None => text.normal(),
    }
}

fn colored_bar(value: f64, color: &str) -> ColoredString {
    let cells = ((value.clamp(0.0, 100.0) / 100.0) * BAR_WIDTH as f64).round() as usize;
    let bar = format!("{}{}", "█".repeat(cells), " ".repeat(BAR_WIDTH - cells));
    paint(&bar, color)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::Dashboard;

    fn plain_text(outcome: &ViewOutcome) -> String {
        colored::control::set_override(false);
        ViewFormatter::new().lines(outcome).join("\n")
    }

    #[test]
    fn explorer_lines_list_every_country_with_score() {
        let dashboard = Dashboard::builtin();
        let outcome = dashboard.explorer("Masculinity vs Femininity").unwrap();
        let text = plain_text(&outcome);
        assert!(text.contains("Masculinity vs Femininity Across Cultures"));
        for country in ["USA", "Japan", "Germany", "Brazil", "Mexico"] {
            assert!(text.contains(country), "missing {}", country);
        }
        assert!(text.contains(" 95"));
    }

    #[test]
    fn advisory_is_rendered_as_message() {
        let dashboard = Dashboard::builtin();
        let none: [&str; 0] = [];
        let outcome = dashboard.comparison(&none).unwrap();
        assert_eq!(ViewFormatter::new().lines(&outcome).len(), 1);
        assert!(plain_text(&outcome).contains("Please select at least one country"));
    }

    #[test]
    fn scenario_chips_keep_authored_order() {
        let dashboard = Dashboard::builtin();
        let outcome = dashboard.scenario("Performance Review Discussion").unwrap();
        let text = plain_text(&outcome);
        let first = text.find("Highlight individual achievements.").unwrap();
        let last = text.find("Celebrate successes.").unwrap();
        assert!(first < last);
    }
}
