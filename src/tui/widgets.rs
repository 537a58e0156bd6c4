//! Draws a [`View`] tree with ratatui.
//!
//! Each panel is a bordered block. Body elements get one row each, so a
//! scrollable panel is just a window over its rows.

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Clear, Gauge, Paragraph},
};

use crate::hud::{DashboardView, Element, GateView, Panel, Screen, View};
use crate::theme::{Palette, Rgb};

const GATE_WIDTH: u16 = 52;
const GATE_HEIGHT: u16 = 11;

/// Per-frame inputs that are not part of the view tree.
pub struct Chrome<'a> {
    pub palette: Palette,
    /// First visible row of the scrollable skills panel
    pub scroll_offset: usize,
    pub hints: &'a str,
    pub clock: String,
}

fn color(rgb: Rgb) -> Color {
    Color::Rgb(rgb.0, rgb.1, rgb.2)
}

/// Draw the whole frame.
pub fn draw(frame: &mut Frame, view: &View, chrome: &Chrome) {
    let area = frame.area();
    let p = &chrome.palette;

    frame.render_widget(
        Block::default().style(Style::default().bg(color(p.bg)).fg(color(p.fg))),
        area,
    );

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(3),    // Screen
            Constraint::Length(1), // Build footer
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    let footer = match &view.screen {
        Screen::Gate(gate) => {
            draw_gate(frame, chunks[0], gate, p);
            &gate.footer
        }
        Screen::Dashboard(dashboard) => {
            draw_dashboard(frame, chunks[0], dashboard, chrome);
            &dashboard.footer
        }
    };

    frame.render_widget(
        Paragraph::new(footer.as_str())
            .alignment(Alignment::Center)
            .style(Style::default().fg(color(p.muted))),
        chunks[1],
    );
    draw_status_bar(frame, chunks[2], chrome);
}

fn draw_gate(frame: &mut Frame, area: Rect, gate: &GateView, p: &Palette) {
    let width = GATE_WIDTH.min(area.width);
    let height = GATE_HEIGHT.min(area.height);
    let rect = Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    };

    let input = if gate.masked_input.is_empty() {
        Span::styled(gate.placeholder.as_str(), Style::default().fg(color(p.muted)))
    } else {
        Span::styled(gate.masked_input.as_str(), Style::default().fg(color(p.fg)))
    };

    let mut lines = vec![
        Line::styled(gate.eyebrow.as_str(), Style::default().fg(color(p.muted))),
        Line::styled(
            gate.title.as_str(),
            Style::default().fg(color(p.fg)).add_modifier(Modifier::BOLD),
        ),
        Line::from(""),
        Line::styled(gate.prompt.as_str(), Style::default().fg(color(p.muted))),
        Line::from(""),
        Line::from(vec![
            Span::styled("> ", Style::default().fg(color(p.accent))),
            input,
            Span::styled("_", Style::default().fg(color(p.accent))),
        ]),
        Line::from(""),
    ];
    if let Some(error) = &gate.error {
        lines.push(Line::styled(error.as_str(), Style::default().fg(color(p.bad))));
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color(p.border)))
        .style(Style::default().bg(color(p.card)))
        .title(" Engage: Enter ");

    frame.render_widget(Clear, rect);
    frame.render_widget(Paragraph::new(lines).block(block), rect);
}

fn draw_dashboard(frame: &mut Frame, area: Rect, dashboard: &DashboardView, chrome: &Chrome) {
    let p = &chrome.palette;
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(area);

    let header = vec![
        Line::styled(dashboard.eyebrow.as_str(), Style::default().fg(color(p.muted))),
        Line::from(vec![
            Span::styled(
                dashboard.title.as_str(),
                Style::default().fg(color(p.accent)).add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            Span::styled(dashboard.subtitle.as_str(), Style::default().fg(color(p.muted))),
        ]),
    ];
    frame.render_widget(Paragraph::new(header), chunks[0]);

    let total: u32 = dashboard.columns.iter().map(|c| u32::from(c.span)).sum();
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(
            dashboard
                .columns
                .iter()
                .map(|c| Constraint::Ratio(u32::from(c.span), total.max(1))),
        )
        .split(chunks[1]);

    for (column, rect) in dashboard.columns.iter().zip(columns.iter()) {
        let mut constraints: Vec<Constraint> = column
            .panels
            .iter()
            .map(|panel| Constraint::Length(panel_height(panel)))
            .collect();
        constraints.push(Constraint::Min(0));

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints(constraints)
            .split(*rect);

        for (panel, row) in column.panels.iter().zip(rows.iter()) {
            draw_panel(frame, *row, panel, chrome);
        }
    }
}

/// Rows a panel wants, borders included.
fn panel_height(panel: &Panel) -> u16 {
    let body = match panel.scroll {
        Some(region) => panel.body.len().min(usize::from(region.max_rows)),
        None => panel.body.len(),
    };
    let footer = usize::from(panel.footer.is_some());
    u16::try_from(body + footer + 2).unwrap_or(u16::MAX)
}

fn draw_panel(frame: &mut Frame, area: Rect, panel: &Panel, chrome: &Chrome) {
    let p = &chrome.palette;

    let (start, visible) = match panel.scroll {
        Some(region) => {
            let rows = usize::from(region.max_rows);
            let max_offset = panel.body.len().saturating_sub(rows);
            (chrome.scroll_offset.min(max_offset), rows)
        }
        None => (0, panel.body.len()),
    };

    let mut title = format!(" {} ", panel.title);
    if panel.scroll.is_some() && panel.body.len() > visible {
        let end = (start + visible).min(panel.body.len());
        title = format!(" {} {}-{}/{} ", panel.title, start + 1, end, panel.body.len());
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color(p.border)))
        .style(Style::default().bg(color(p.card)))
        .title(Span::styled(
            title,
            Style::default().fg(color(p.fg)).add_modifier(Modifier::BOLD),
        ));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let footer_rows = u16::from(panel.footer.is_some());
    let body_rows = inner.height.saturating_sub(footer_rows);

    for (i, element) in panel.body.iter().skip(start).take(visible).enumerate() {
        let Ok(i) = u16::try_from(i) else { break };
        if i >= body_rows {
            break;
        }
        let row = Rect {
            y: inner.y + i,
            height: 1,
            ..inner
        };
        draw_element(frame, row, element, p);
    }

    if let Some(footer) = &panel.footer {
        if inner.height > 0 {
            let row = Rect {
                y: inner.y + inner.height - 1,
                height: 1,
                ..inner
            };
            frame.render_widget(
                Paragraph::new(footer.as_str()).style(Style::default().fg(color(p.muted))),
                row,
            );
        }
    }
}

fn draw_element(frame: &mut Frame, row: Rect, element: &Element, p: &Palette) {
    match element {
        Element::Gauge {
            label,
            percent,
            tone,
            caption,
        } => {
            let gauge = Gauge::default()
                .gauge_style(Style::default().fg(color(p.tone(*tone))).bg(color(p.border)))
                .percent(u16::from(*percent))
                .label(format!("{} {}", label, caption));
            frame.render_widget(gauge, row);
        }
        other => frame.render_widget(Paragraph::new(element_line(other, p)), row),
    }
}

/// One row of text for a non-gauge element.
fn element_line<'a>(element: &'a Element, p: &Palette) -> Line<'a> {
    let muted = Style::default().fg(color(p.muted));
    match element {
        Element::Item {
            label,
            detail,
            status,
            trailing,
        } => {
            let mut spans = Vec::new();
            match status {
                Some(ind) => spans.push(Span::styled(
                    format!("{} ", ind.tone.glyph()),
                    Style::default().fg(color(p.tone(ind.tone))),
                )),
                None => spans.push(Span::raw("  ")),
            }
            spans.push(Span::styled(label.as_str(), Style::default().fg(color(p.fg))));
            if let Some(detail) = detail {
                spans.push(Span::styled(format!("  {}", detail), muted));
            }
            if let Some(ind) = status {
                spans.push(Span::styled(
                    format!("  {}", ind.label),
                    Style::default().fg(color(p.tone(ind.tone))),
                ));
            }
            if let Some(trailing) = trailing {
                spans.push(Span::styled(format!("  {}", trailing), muted));
            }
            Line::from(spans)
        }
        Element::Metric { label, value } => Line::from(vec![
            Span::styled(format!("{}  ", label), muted),
            Span::styled(
                value.as_str(),
                Style::default().fg(color(p.fg)).add_modifier(Modifier::BOLD),
            ),
        ]),
        Element::Heading { text } => Line::styled(
            text.as_str(),
            Style::default().fg(color(p.accent)).add_modifier(Modifier::BOLD),
        ),
        Element::Note { text, tone } => {
            let fg = match tone {
                Some(tone) => p.tone(*tone),
                None => p.muted,
            };
            Line::styled(text.as_str(), Style::default().fg(color(fg)))
        }
        Element::Gauge { caption, .. } => Line::raw(caption.as_str()),
    }
}

fn draw_status_bar(frame: &mut Frame, area: Rect, chrome: &Chrome) {
    let p = &chrome.palette;
    let padding = area
        .width
        .saturating_sub(chrome.hints.chars().count() as u16 + chrome.clock.chars().count() as u16 + 2);

    let bar = Paragraph::new(Line::from(vec![
        Span::raw(format!(" {}", chrome.hints)),
        Span::raw(" ".repeat(usize::from(padding))),
        Span::raw(format!("{} ", chrome.clock)),
    ]))
    .style(Style::default().fg(color(p.muted)).bg(color(p.card)));
    frame.render_widget(bar, area);
}
