//! Plain-text rendition of a [`View`], used by `hud render` and `hud status`.

use std::fmt::Write;

use super::render::{DashboardView, Element, GateView, Panel, Screen, View};

const GAUGE_WIDTH: usize = 20;

/// Render a view as plain text, one panel after another in column order.
pub fn render_text(view: &View) -> String {
    match &view.screen {
        Screen::Gate(gate) => render_gate(gate),
        Screen::Dashboard(dashboard) => render_dashboard(dashboard),
    }
}

fn render_gate(gate: &GateView) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", gate.eyebrow);
    let _ = writeln!(out, "{}", gate.title);
    let _ = writeln!(out);
    let _ = writeln!(out, "{}", gate.prompt);
    if gate.masked_input.is_empty() {
        let _ = writeln!(out, "[ {} ]", gate.placeholder);
    } else {
        let _ = writeln!(out, "[ {} ]", gate.masked_input);
    }
    if let Some(error) = &gate.error {
        let _ = writeln!(out, "! {}", error);
    }
    let _ = writeln!(out);
    let _ = writeln!(out, "{}", gate.footer);
    out
}

fn render_dashboard(dashboard: &DashboardView) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", dashboard.eyebrow);
    let _ = writeln!(out, "{}", dashboard.title);
    let _ = writeln!(out, "{}", dashboard.subtitle);

    for panel in dashboard.panels() {
        let _ = writeln!(out);
        render_panel(&mut out, panel);
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "{}", dashboard.footer);
    out
}

fn render_panel(out: &mut String, panel: &Panel) {
    let _ = writeln!(out, "== {} ==", panel.title);
    for element in &panel.body {
        let _ = writeln!(out, "{}", render_element(element));
    }
    if let Some(footer) = &panel.footer {
        let _ = writeln!(out, "  {}", footer);
    }
}

fn render_element(element: &Element) -> String {
    match element {
        Element::Item {
            label,
            detail,
            status,
            trailing,
        } => {
            let mut line = match status {
                Some(ind) => format!("  {} {} [{}]", ind.tone.glyph(), label, ind.label),
                None => format!("  - {}", label),
            };
            if let Some(detail) = detail {
                let _ = write!(line, " · {}", detail);
            }
            if let Some(trailing) = trailing {
                let _ = write!(line, " ({})", trailing);
            }
            line
        }
        Element::Metric { label, value } => format!("  {}: {}", label, value),
        Element::Gauge {
            label,
            percent,
            caption,
            ..
        } => {
            let filled = usize::from(*percent) * GAUGE_WIDTH / 100;
            format!(
                "  {} [{}{}] {}",
                label,
                "#".repeat(filled),
                ".".repeat(GAUGE_WIDTH - filled),
                caption
            )
        }
        Element::Heading { text } => format!(" {}", text),
        Element::Note { text, .. } => format!("  {}", text),
    }
}
