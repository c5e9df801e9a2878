// SPDX-License-Identifier: PMPL-1.0-or-later

//! Standalone HTML page for a rendered view.
//!
//! Cards and bubbles are plain HTML; charts are embedded as Plotly figures
//! and drawn client-side by plotly.js.

use crate::render::output::ViewDocument;
use crate::view::{DimensionCard, ViewOutcome};
use std::fmt::Write as _;

const PLOTLY_CDN: &str = "https://cdn.plot.ly/plotly-2.35.2.min.js";

const STYLE: &str = r#"
    body { font-family: sans-serif; background-color: #F5F5F5; margin: 0 auto; max-width: 1100px; }
    .header-text { font-size: 3em; color: #2F4F4F; text-align: center; padding: 20px; }
    .cards { display: grid; grid-template-columns: 1fr 1fr; gap: 0 20px; }
    .dimension-card { border-radius: 15px; padding: 25px; margin: 15px 0;
        box-shadow: 0 4px 6px rgba(0, 0, 0, 0.1); transition: transform 0.2s; }
    .dimension-card:hover { transform: translateY(-5px); }
    .poles { display: flex; justify-content: space-between; font-weight: 600; }
    .context { margin-top: 8px; font-size: 0.9em; }
    .bubble-container { display: flex; flex-wrap: wrap; gap: 10px; }
    .bubble { background-color: #FFD166; color: #000; border-radius: 20px; padding: 10px 15px;
        font-size: 0.9em; box-shadow: 1px 1px 3px rgba(0,0,0,0.2); }
    .info { background-color: #E8F1FB; color: #1C4E80; border-radius: 8px; padding: 12px 16px; }
"#;

pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

pub fn render_page(document: &ViewDocument<'_>) -> String {
    let mut html = String::new();
    let _ = write!(
        html,
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n<title>{}</title>\n<style>{}</style>\n",
        escape(document.title),
        STYLE
    );
    if document.figure.is_some() {
        let _ = writeln!(html, "<script src=\"{}\"></script>", PLOTLY_CDN);
    }
    html.push_str("</head>\n<body>\n");
    let _ = writeln!(
        html,
        "<p class=\"header-text\">{} 🌐</p>\n<h2>{}</h2>",
        escape(document.title),
        escape(document.heading)
    );

    match document.outcome {
        ViewOutcome::Overview { cards } => {
            html.push_str("<div class=\"cards\">\n");
            for card in cards {
                render_card(&mut html, card);
            }
            html.push_str("</div>\n");
        }
        ViewOutcome::Scenarios { scenario, tips } => {
            let _ = writeln!(html, "<h3>{}</h3>\n<p>Examples:</p>", escape(scenario));
            html.push_str("<div class=\"bubble-container\">");
            for tip in tips {
                let _ = write!(html, "<div class=\"bubble\">{}</div>", escape(tip));
            }
            html.push_str("</div>\n");
        }
        ViewOutcome::Advisory { message, .. } => {
            let _ = writeln!(html, "<div class=\"info\">{}</div>", escape(message));
        }
        ViewOutcome::Explorer { .. } | ViewOutcome::Comparison { .. } | ViewOutcome::Profile { .. } => {}
    }

    if let Some(figure) = &document.figure {
        // "</" inside the JSON would end the script element early.
        let payload = figure.to_string().replace("</", "<\\/");
        let _ = writeln!(
            html,
            "<div id=\"chart\" style=\"width:100%;height:600px;\"></div>\n<script>\nconst figure = {};\nPlotly.newPlot(\"chart\", figure.data, figure.layout, {{responsive: true}});\n</script>",
            payload
        );
    }

    html.push_str("</body>\n</html>\n");
    html
}

fn render_card(html: &mut String, card: &DimensionCard) {
    let color = escape(card.color);
    let _ = writeln!(
        html,
        "<div class=\"dimension-card\" style=\"background-color: {color}20; border-left: 5px solid {color}\">\n  <h4 style=\"color: {color};\">{} {}</h4>\n  <p>{}</p>\n  <div style=\"margin-top: 15px;\"><strong>Real-life Example:</strong><br><p>{}</p></div>",
        escape(card.icon),
        escape(card.name),
        escape(card.description),
        escape(card.example),
    );
    let _ = writeln!(
        html,
        "  <div class=\"poles\"><span>{}</span><span>{}</span></div>",
        escape(card.low_pole),
        escape(card.high_pole)
    );
    for ctx in &card.contexts {
        let _ = writeln!(
            html,
            "  <div class=\"context\"><strong>{}</strong><br>L: {}<br>H: {}</div>",
            escape(ctx.context),
            escape(ctx.low),
            escape(ctx.high)
        );
    }
    html.push_str("</div>\n");
}
