// SPDX-License-Identifier: PMPL-1.0-or-later

//! Declarative chart specifications
//!
//! A [`ChartSpec`] is what the dashboard core hands to a rendering surface:
//! the chart kind, the data rows, the field names used for each encoding
//! channel and a title. Surfaces own layout and interactivity. The
//! [`ChartSpec::to_plotly_figure`] projection turns a spec into a Plotly
//! figure object for the HTML export.

use crate::transform::{LongFormRow, SeriesPoint};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// Plotly's default qualitative palette. Series take colors in order of
/// first appearance.
pub const SERIES_PALETTE: [&str; 10] = [
    "#636EFA", "#EF553B", "#00CC96", "#AB63FA", "#FFA15A", "#19D3F3", "#FF6692", "#B6E880",
    "#FF97FF", "#FECB52",
];

pub fn series_color(index: usize) -> &'static str {
    SERIES_PALETTE[index % SERIES_PALETTE.len()]
}

/// Parse `#RRGGBB` into its components.
pub fn hex_rgb(color: &str) -> Option<(u8, u8, u8)> {
    let hex = color.strip_prefix('#')?;
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some((r, g, b))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartKind {
    CategoricalBar,
    ClosedPolarLine,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartTemplate {
    PlotlyWhite,
    PlotlyDark,
}

impl ChartTemplate {
    pub fn name(&self) -> &'static str {
        match self {
            ChartTemplate::PlotlyWhite => "plotly_white",
            ChartTemplate::PlotlyDark => "plotly_dark",
        }
    }

    pub fn is_dark(&self) -> bool {
        matches!(self, ChartTemplate::PlotlyDark)
    }

    fn layout(&self) -> Value {
        match self {
            ChartTemplate::PlotlyWhite => json!({
                "paper_bgcolor": "#FFFFFF",
                "plot_bgcolor": "#FFFFFF",
                "font": { "color": "#2A3F5F" },
            }),
            ChartTemplate::PlotlyDark => json!({
                "paper_bgcolor": "#111111",
                "plot_bgcolor": "#111111",
                "font": { "color": "#F2F5FA" },
            }),
        }
    }
}

/// Field names for each encoding channel.
///
/// For bars `category` is the x axis and `value` the y axis; for polar
/// charts `category` is theta and `value` the radius.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Encoding {
    pub category: String,
    pub value: String,
    pub series: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartRow {
    pub category: String,
    pub value: f64,
    pub series: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSpec {
    pub kind: ChartKind,
    pub title: String,
    pub template: ChartTemplate,
    pub encoding: Encoding,
    pub rows: Vec<ChartRow>,
    /// Fill the area enclosed by each polar loop.
    #[serde(default)]
    pub fill: bool,
}

impl ChartSpec {
    /// Bar chart with one bar per country, colored by country.
    pub fn bar(
        title: impl Into<String>,
        value_field: impl Into<String>,
        points: &[SeriesPoint],
        template: ChartTemplate,
    ) -> Self {
        let rows = points
            .iter()
            .map(|p| ChartRow {
                category: p.country.clone(),
                value: f64::from(p.score),
                series: p.country.clone(),
            })
            .collect();
        Self {
            kind: ChartKind::CategoricalBar,
            title: title.into(),
            template,
            encoding: Encoding {
                category: "Country".to_string(),
                value: value_field.into(),
                series: "Country".to_string(),
            },
            rows,
            fill: false,
        }
    }

    /// Closed polar line chart with one loop per country.
    pub fn polar(
        title: impl Into<String>,
        rows: &[LongFormRow],
        template: ChartTemplate,
        fill: bool,
    ) -> Self {
        let rows = rows
            .iter()
            .map(|r| ChartRow {
                category: r.dimension.to_string(),
                value: f64::from(r.score),
                series: r.country.clone(),
            })
            .collect();
        Self {
            kind: ChartKind::ClosedPolarLine,
            title: title.into(),
            template,
            encoding: Encoding {
                category: "Dimension".to_string(),
                value: "Score".to_string(),
                series: "Country".to_string(),
            },
            rows,
            fill,
        }
    }

    /// Distinct series names in order of first appearance.
    pub fn series(&self) -> Vec<&str> {
        let mut names: Vec<&str> = Vec::new();
        for row in &self.rows {
            if !names.contains(&row.series.as_str()) {
                names.push(&row.series);
            }
        }
        names
    }

    pub fn rows_for<'a>(&'a self, series: &'a str) -> impl Iterator<Item = &'a ChartRow> + 'a {
        self.rows.iter().filter(move |row| row.series == series)
    }

    /// Plotly figure (`data` + `layout`) equivalent to this spec.
    pub fn to_plotly_figure(&self) -> Value {
        let traces: Vec<Value> = self
            .series()
            .into_iter()
            .enumerate()
            .map(|(idx, name)| self.trace(name, series_color(idx)))
            .collect();

        let mut layout = self.template.layout();
        layout["title"] = json!({ "text": self.title });
        layout["showlegend"] = json!(true);
        layout["legend"] = json!({ "title": { "text": self.encoding.series } });
        match self.kind {
            ChartKind::CategoricalBar => {
                layout["xaxis"] = json!({ "title": { "text": self.encoding.category } });
                layout["yaxis"] = json!({ "title": { "text": self.encoding.value } });
            }
            ChartKind::ClosedPolarLine => {
                layout["polar"] = json!({
                    "radialaxis": { "visible": true, "range": [0, 100] },
                });
            }
        }

        json!({ "data": traces, "layout": layout })
    }

    fn trace(&self, name: &str, color: &str) -> Value {
        let rows: Vec<&ChartRow> = self.rows_for(name).collect();
        match self.kind {
            ChartKind::CategoricalBar => json!({
                "type": "bar",
                "name": name,
                "x": rows.iter().map(|r| r.category.as_str()).collect::<Vec<_>>(),
                "y": rows.iter().map(|r| r.value).collect::<Vec<_>>(),
                "marker": { "color": color },
            }),
            ChartKind::ClosedPolarLine => {
                let mut theta: Vec<&str> = rows.iter().map(|r| r.category.as_str()).collect();
                let mut r: Vec<f64> = rows.iter().map(|r| r.value).collect();
                // Repeat the first vertex to close the loop.
                if let Some(first) = rows.first() {
                    theta.push(first.category.as_str());
                    r.push(first.value);
                }
                let mut trace = json!({
                    "type": "scatterpolar",
                    "mode": "lines",
                    "name": name,
                    "theta": theta,
                    "r": r,
                    "line": { "color": color },
                });
                if self.fill {
                    trace["fill"] = json!("toself");
                }
                trace
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn long_rows() -> Vec<LongFormRow> {
        vec![
            LongFormRow {
                country: "USA".into(),
                dimension: "Power Distance",
                score: 40,
            },
            LongFormRow {
                country: "USA".into(),
                dimension: "Indulgence vs Restraint",
                score: 68,
            },
            LongFormRow {
                country: "Japan".into(),
                dimension: "Power Distance",
                score: 54,
            },
            LongFormRow {
                country: "Japan".into(),
                dimension: "Indulgence vs Restraint",
                score: 42,
            },
        ]
    }

    #[test]
    fn hex_rgb_parses_palette_entries() {
        assert_eq!(hex_rgb("#FFD166"), Some((0xFF, 0xD1, 0x66)));
        assert_eq!(hex_rgb("FFD166"), None);
        assert_eq!(hex_rgb("#FFD16"), None);
    }

    #[test]
    fn polar_figure_has_one_closed_trace_per_country() {
        let spec = ChartSpec::polar("Radar", &long_rows(), ChartTemplate::PlotlyDark, false);
        let figure = spec.to_plotly_figure();
        let data = figure["data"].as_array().unwrap();
        assert_eq!(data.len(), 2);
        assert_eq!(data[0]["name"], "USA");
        assert_eq!(data[0]["r"], json!([40.0, 68.0, 40.0]));
        assert_eq!(data[1]["theta"][0], data[1]["theta"][2]);
        assert!(data[0].get("fill").is_none());
        assert_eq!(figure["layout"]["paper_bgcolor"], "#111111");
    }

    #[test]
    fn filled_polar_sets_toself() {
        let spec = ChartSpec::polar("Profile", &long_rows()[..2], ChartTemplate::PlotlyWhite, true);
        let figure = spec.to_plotly_figure();
        assert_eq!(figure["data"][0]["fill"], "toself");
    }

    #[test]
    fn bar_figure_colors_each_country_differently() {
        let points = vec![
            SeriesPoint {
                country: "Japan".into(),
                score: 95,
            },
            SeriesPoint {
                country: "Brazil".into(),
                score: 49,
            },
        ];
        let spec = ChartSpec::bar("Masculinity", "Masculinity", &points, ChartTemplate::PlotlyWhite);
        let figure = spec.to_plotly_figure();
        assert_eq!(figure["data"][0]["marker"]["color"], SERIES_PALETTE[0]);
        assert_eq!(figure["data"][1]["marker"]["color"], SERIES_PALETTE[1]);
        assert_eq!(figure["layout"]["yaxis"]["title"]["text"], "Masculinity");
    }
}
