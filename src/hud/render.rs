//! Platform-neutral visual tree.
//!
//! Panels and screens are described with these types and handed to a
//! frontend (the terminal UI, the plain-text renderer, or JSON output).
//! Nothing here knows about terminals or colors beyond [`Tone`].

use serde::Serialize;

use super::tone::Tone;
use crate::theme::ThemePreference;

/// A complete frame: presentation mode plus the selected screen.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct View {
    pub theme: ThemePreference,
    /// Mirrors `theme` for frontends that only care about the flag
    pub dark: bool,
    pub screen: Screen,
}

/// Which root screen is showing.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "screen", rename_all = "snake_case")]
pub enum Screen {
    /// Passphrase form, shown while locked
    Gate(GateView),
    /// Panel grid, shown while unlocked
    Dashboard(DashboardView),
}

/// The passphrase form.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GateView {
    pub eyebrow: String,
    pub title: String,
    pub prompt: String,
    pub placeholder: String,
    /// One bullet per typed character
    pub masked_input: String,
    /// Inline error from the last rejected submit
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub footer: String,
}

/// The panel grid.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardView {
    pub eyebrow: String,
    pub title: String,
    pub subtitle: String,
    /// Left to right
    pub columns: Vec<Column>,
    pub footer: String,
}

impl DashboardView {
    /// All panels, column by column.
    pub fn panels(&self) -> impl Iterator<Item = &Panel> {
        self.columns.iter().flat_map(|c| c.panels.iter())
    }

    /// Find a panel by kind.
    pub fn panel(&self, kind: PanelKind) -> Option<&Panel> {
        self.panels().find(|p| p.kind == kind)
    }
}

/// One grid column. Spans add up to 12.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Column {
    pub span: u8,
    /// Top to bottom
    pub panels: Vec<Panel>,
}

/// Identifies a panel independent of its title.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PanelKind {
    Skills,
    MissingTools,
    Connections,
    Pulse,
    Projects,
    Crons,
    Security,
}

/// A self-contained display unit.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Panel {
    pub kind: PanelKind,
    pub title: String,
    pub body: Vec<Element>,
    /// Trailing line under the body, e.g. "+ 1 more"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub footer: Option<String>,
    /// Present when the body sits in a bounded, scrollable region
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scroll: Option<ScrollRegion>,
}

impl Panel {
    pub fn new(kind: PanelKind, title: impl Into<String>) -> Self {
        Self {
            kind,
            title: title.into(),
            body: Vec::new(),
            footer: None,
            scroll: None,
        }
    }

    pub fn push(&mut self, element: Element) {
        self.body.push(element);
    }

    /// Labels of every item, in order. Handy for assertions and summaries.
    pub fn item_labels(&self) -> Vec<&str> {
        self.body
            .iter()
            .filter_map(|e| match e {
                Element::Item { label, .. } => Some(label.as_str()),
                _ => None,
            })
            .collect()
    }
}

/// Height bound for a scrollable panel body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScrollRegion {
    /// Rows visible at once
    pub max_rows: u16,
}

/// A status indicator: colored dot plus its text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Indicator {
    pub tone: Tone,
    pub label: String,
}

impl Indicator {
    pub fn new(tone: Tone, label: impl Into<String>) -> Self {
        Self {
            tone,
            label: label.into(),
        }
    }
}

/// Building blocks of a panel body.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Element {
    /// A list row
    Item {
        label: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        detail: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        status: Option<Indicator>,
        /// Right-aligned text, e.g. a time label
        #[serde(skip_serializing_if = "Option::is_none")]
        trailing: Option<String>,
    },
    /// A labelled headline number
    Metric { label: String, value: String },
    /// A proportional bar
    Gauge {
        label: String,
        /// Bar width, 0-100
        percent: u8,
        tone: Tone,
        caption: String,
    },
    /// Sub-section heading inside a panel
    Heading { text: String },
    /// Free text
    Note {
        text: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        tone: Option<Tone>,
    },
}

impl Element {
    /// A plain row with just a label.
    pub fn item(label: impl Into<String>) -> Self {
        Element::Item {
            label: label.into(),
            detail: None,
            status: None,
            trailing: None,
        }
    }

    pub fn heading(text: impl Into<String>) -> Self {
        Element::Heading { text: text.into() }
    }

    pub fn note(text: impl Into<String>) -> Self {
        Element::Note {
            text: text.into(),
            tone: None,
        }
    }

    pub fn metric(label: impl Into<String>, value: impl Into<String>) -> Self {
        Element::Metric {
            label: label.into(),
            value: value.into(),
        }
    }

    /// Set the detail line of an item. No-op on other elements.
    pub fn with_detail(mut self, text: impl Into<String>) -> Self {
        if let Element::Item { detail, .. } = &mut self {
            *detail = Some(text.into());
        }
        self
    }

    /// Set the status indicator of an item. No-op on other elements.
    pub fn with_status(mut self, tone: Tone, label: impl Into<String>) -> Self {
        if let Element::Item { status, .. } = &mut self {
            *status = Some(Indicator::new(tone, label));
        }
        self
    }

    /// Set the trailing text of an item. No-op on other elements.
    pub fn with_trailing(mut self, text: impl Into<String>) -> Self {
        if let Element::Item { trailing, .. } = &mut self {
            *trailing = Some(text.into());
        }
        self
    }

    /// Set the tone of a note. No-op on other elements.
    pub fn with_tone(mut self, new_tone: Tone) -> Self {
        if let Element::Note { tone, .. } = &mut self {
            *tone = Some(new_tone);
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_builders() {
        let el = Element::item("GitHub")
            .with_detail("Token OK")
            .with_status(Tone::Good, "connected")
            .with_trailing("now");
        assert_eq!(
            el,
            Element::Item {
                label: "GitHub".to_string(),
                detail: Some("Token OK".to_string()),
                status: Some(Indicator::new(Tone::Good, "connected")),
                trailing: Some("now".to_string()),
            }
        );
    }

    #[test]
    fn test_builders_ignore_other_elements() {
        let el = Element::heading("API status").with_detail("x").with_status(Tone::Bad, "y");
        assert_eq!(el, Element::heading("API status"));
        let el = Element::item("a").with_tone(Tone::Bad);
        assert_eq!(el, Element::item("a"));
    }

    #[test]
    fn test_item_labels_skips_non_items() {
        let mut panel = Panel::new(PanelKind::Pulse, "Core");
        panel.push(Element::heading("API status"));
        panel.push(Element::item("GitHub"));
        panel.push(Element::metric("Tokens", "1"));
        panel.push(Element::item("Grok"));
        assert_eq!(panel.item_labels(), vec!["GitHub", "Grok"]);
    }

    #[test]
    fn test_element_json_shape() {
        let json = serde_json::to_value(Element::item("cron").with_trailing("in 14 min")).unwrap();
        assert_eq!(json["type"], "item");
        assert_eq!(json["trailing"], "in 14 min");
        assert!(json.get("detail").is_none());
    }
}
