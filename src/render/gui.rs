// SPDX-License-Identifier: PMPL-1.0-or-later

//! Desktop dashboard.
//!
//! egui repaints in immediate mode, so every frame dispatches the current
//! selection again; widgets edit the selection in place.

use crate::chart::{hex_rgb, series_color, ChartKind, ChartSpec};
use crate::types::{Section, SelectionState};
use crate::view::{Dashboard, DimensionCard, ViewOutcome};
use anyhow::{anyhow, Result};
use eframe::{egui, App, Frame, NativeOptions};
use egui_plot::{Bar, BarChart, Legend, Line, Plot, PlotPoint, PlotPoints, Polygon, Text};
use std::f64::consts::TAU;

const BUBBLE_FILL: egui::Color32 = egui::Color32::from_rgb(0xFF, 0xD1, 0x66);
const GRID: egui::Color32 = egui::Color32::from_rgb(120, 120, 120);

pub struct DashboardGui {
    dashboard: Dashboard,
    selection: SelectionState,
}

impl DashboardGui {
    pub fn run(dashboard: Dashboard) -> Result<()> {
        let options = NativeOptions::default();
        let title = dashboard.config().title.clone();
        let app = Self {
            selection: dashboard.default_selection(),
            dashboard,
        };
        eframe::run_native(&title, options, Box::new(|_cc| Box::new(app)))
            .map_err(|err| anyhow!("failed to launch dashboard GUI: {err}"))?;
        Ok(())
    }
}

impl App for DashboardGui {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.heading(format!("{} 🌐", self.dashboard.config().title));
            });
        });

        egui::SidePanel::left("nav").show(ctx, |ui| {
            ui.heading("Navigation");
            ui.label("Go to:");
            for section in Section::all() {
                ui.radio_value(&mut self.selection.section, *section, section.label());
            }
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading(self.selection.section.heading());
            self.render_selectors(ui);
            ui.separator();

            let outcome = self.dashboard.dispatch(&self.selection);
            egui::ScrollArea::vertical().show(ui, |ui| match outcome {
                Ok(ViewOutcome::Overview { cards }) => render_cards(ui, &cards),
                Ok(ViewOutcome::Scenarios { scenario, tips }) => {
                    render_bubbles(ui, &scenario, &tips)
                }
                Ok(ViewOutcome::Advisory { message, .. }) => {
                    ui.label(egui::RichText::new(format!("ℹ {}", message)).color(egui::Color32::LIGHT_BLUE));
                }
                Ok(ViewOutcome::Explorer { chart, .. })
                | Ok(ViewOutcome::Comparison { chart, .. })
                | Ok(ViewOutcome::Profile { chart, .. }) => render_chart(ui, &chart),
                Err(err) => {
                    ui.colored_label(egui::Color32::RED, err.to_string());
                }
            });
        });
    }
}

impl DashboardGui {
    fn render_selectors(&mut self, ui: &mut egui::Ui) {
        match self.selection.section {
            Section::Overview => {}
            Section::Explorer => {
                let options = self.dashboard.dimensions().list_dimensions();
                combo(ui, "Choose a Dimension", &mut self.selection.dimension, &options);
            }
            Section::Scenarios => {
                let options = self.dashboard.scenarios().list_scenarios();
                combo(ui, "Choose a Scenario", &mut self.selection.scenario, &options);
            }
            Section::Profile => {
                let options = self.dashboard.data().list_countries();
                combo(ui, "Choose a Country", &mut self.selection.profile_country, &options);
            }
            Section::Comparison => {
                ui.label("Select Countries");
                let countries = self.dashboard.data().list_countries();
                ui.horizontal_wrapped(|ui| {
                    for country in countries {
                        let mut checked = self.selection.countries.iter().any(|c| c == country);
                        if ui.checkbox(&mut checked, country).changed() {
                            self.selection.toggle_country(country);
                        }
                    }
                });
            }
        }
    }
}

fn combo(ui: &mut egui::Ui, label: &str, current: &mut String, options: &[&str]) {
    egui::ComboBox::from_label(label)
        .selected_text(current.clone())
        .show_ui(ui, |ui| {
            for option in options {
                ui.selectable_value(&mut *current, option.to_string(), *option);
            }
        });
}

fn color32(hex: &str) -> egui::Color32 {
    hex_rgb(hex)
        .map(|(r, g, b)| egui::Color32::from_rgb(r, g, b))
        .unwrap_or(egui::Color32::GRAY)
}

fn render_cards(ui: &mut egui::Ui, cards: &[DimensionCard]) {
    ui.columns(2, |cols| {
        for (idx, card) in cards.iter().enumerate() {
            let ui = &mut cols[idx % 2];
            egui::CollapsingHeader::new(format!("{} {}", card.icon, card.name))
                .default_open(true)
                .show(ui, |ui| render_card(ui, card));
        }
    });
}

fn render_card(ui: &mut egui::Ui, card: &DimensionCard) {
    let accent = color32(card.color);
    let [r, g, b, _] = accent.to_array();
    egui::Frame::none()
        .fill(egui::Color32::from_rgba_unmultiplied(r, g, b, 0x20))
        .stroke(egui::Stroke::new(2.0, accent))
        .rounding(15.0)
        .inner_margin(egui::Margin::same(20.0))
        .show(ui, |ui| {
            ui.label(egui::RichText::new(card.name).color(accent).strong().size(18.0));
            ui.label(card.description);
            ui.add_space(10.0);
            ui.label(egui::RichText::new("Real-life Example:").strong());
            ui.label(card.example);
            ui.add_space(10.0);
            ui.horizontal(|ui| {
                ui.label(egui::RichText::new(card.low_pole).color(accent).strong());
                ui.label("◀──▶");
                ui.label(egui::RichText::new(card.high_pole).color(accent).strong());
            });
            for ctx in &card.contexts {
                ui.collapsing(ctx.context, |ui| {
                    ui.label(format!("L: {}", ctx.low));
                    ui.label(format!("H: {}", ctx.high));
                });
            }
        });
}

fn render_bubbles(ui: &mut egui::Ui, scenario: &str, tips: &[String]) {
    ui.heading(scenario);
    ui.label("Examples:");
    ui.horizontal_wrapped(|ui| {
        for tip in tips {
            egui::Frame::none()
                .fill(BUBBLE_FILL)
                .rounding(20.0)
                .inner_margin(egui::Margin::symmetric(15.0, 10.0))
                .show(ui, |ui| {
                    ui.label(egui::RichText::new(tip).color(egui::Color32::BLACK));
                });
        }
    });
}

fn render_chart(ui: &mut egui::Ui, chart: &ChartSpec) {
    ui.label(egui::RichText::new(&chart.title).strong().size(16.0));
    match chart.kind {
        ChartKind::CategoricalBar => render_bars(ui, chart),
        ChartKind::ClosedPolarLine => render_radar(ui, chart),
    }
}

fn render_bars(ui: &mut egui::Ui, chart: &ChartSpec) {
    Plot::new("explorer-bars")
        .height(420.0)
        .y_axis_label(chart.encoding.value.clone())
        .x_axis_label(chart.encoding.category.clone())
        .include_y(0.0)
        .include_y(100.0)
        .legend(Legend::default())
        .show(ui, |plot_ui| {
            for (idx, row) in chart.rows.iter().enumerate() {
                let series_idx = chart
                    .series()
                    .iter()
                    .position(|s| *s == row.series)
                    .unwrap_or(idx);
                let bar = Bar::new(idx as f64, row.value)
                    .name(&row.category)
                    .fill(color32(series_color(series_idx)));
                plot_ui.bar_chart(BarChart::new(vec![bar]).width(0.7).name(&row.series));
            }
        });
}

fn polar_point(angle_idx: usize, count: usize, radius: f64) -> [f64; 2] {
    // First category at twelve o'clock, proceeding clockwise.
    let theta = TAU / 4.0 - TAU * angle_idx as f64 / count as f64;
    [radius * theta.cos(), radius * theta.sin()]
}

fn render_radar(ui: &mut egui::Ui, chart: &ChartSpec) {
    let series = chart.series();
    let categories: Vec<&str> = match series.first() {
        Some(first) => chart.rows_for(first).map(|r| r.category.as_str()).collect(),
        None => Vec::new(),
    };
    let count = categories.len().max(1);

    Plot::new("radar")
        .height(520.0)
        .data_aspect(1.0)
        .show_axes(false)
        .show_grid(false)
        .legend(Legend::default())
        .show(ui, |plot_ui| {
            for ring in [20.0, 40.0, 60.0, 80.0, 100.0] {
                let pts: PlotPoints = (0..=count).map(|i| polar_point(i % count, count, ring)).collect();
                plot_ui.line(Line::new(pts).color(GRID).width(0.5));
            }
            for (i, category) in categories.iter().enumerate() {
                let spoke: PlotPoints = vec![[0.0, 0.0], polar_point(i, count, 100.0)].into();
                plot_ui.line(Line::new(spoke).color(GRID).width(0.5));
                let [x, y] = polar_point(i, count, 115.0);
                plot_ui.text(Text::new(PlotPoint::new(x, y), *category));
            }

            for (idx, name) in series.iter().enumerate() {
                let color = color32(series_color(idx));
                let mut pts: Vec<[f64; 2]> = chart
                    .rows_for(name)
                    .enumerate()
                    .map(|(i, row)| polar_point(i, count, row.value))
                    .collect();
                if chart.fill {
                    let [r, g, b, _] = color.to_array();
                    plot_ui.polygon(
                        Polygon::new(PlotPoints::from(pts.clone()))
                            .fill_color(egui::Color32::from_rgba_unmultiplied(r, g, b, 0x40))
                            .stroke(egui::Stroke::new(2.0, color))
                            .name(*name),
                    );
                } else {
                    if let Some(first) = pts.first().copied() {
                        pts.push(first);
                    }
                    plot_ui.line(Line::new(PlotPoints::from(pts)).color(color).width(2.0).name(*name));
                }
            }
        });
}
