//! Grid composition and the root view selector.
//!
//! The whole screen is a pure function of the theme preference, the
//! session gate and the snapshot. Frontends re-evaluate [`view`] after
//! every state change instead of patching what they drew before.

use serde::{Deserialize, Serialize};

use super::format::mask;
use super::panels;
use super::render::{Column, DashboardView, GateView, Screen, View};
use crate::models::Snapshot;
use crate::session::SessionGate;
use crate::theme::ThemePreference;

/// Default truncation threshold for the skills panel.
pub const DEFAULT_SKILLS_LIMIT: usize = 5;

/// Default visible rows for the scrollable skills panel.
pub const DEFAULT_SKILLS_ROWS: u16 = 8;

/// Which panel grid to compose.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HudLayout {
    /// Five cards around the core, no security panel
    Standard,
    /// Standard plus the security panel under the core
    #[default]
    Extended,
}

impl HudLayout {
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "standard" => Some(Self::Standard),
            "extended" => Some(Self::Extended),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Extended => "extended",
        }
    }
}

impl std::fmt::Display for HudLayout {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// How the skills panel deals with long lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum SkillsPolicy {
    /// First `limit` skills plus a `+ N more` counter
    Truncate { limit: usize },
    /// Every skill in a scroll region `max_rows` tall
    ShowAll { max_rows: u16 },
}

impl Default for SkillsPolicy {
    fn default() -> Self {
        Self::ShowAll {
            max_rows: DEFAULT_SKILLS_ROWS,
        }
    }
}

/// Display options that shape the dashboard.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct HudOptions {
    pub layout: HudLayout,
    pub skills: SkillsPolicy,
}

/// Everything presentation-wide a panel may depend on, passed explicitly.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderContext {
    pub theme: ThemePreference,
    pub options: HudOptions,
}

impl RenderContext {
    pub fn new(theme: ThemePreference, options: HudOptions) -> Self {
        Self { theme, options }
    }
}

/// Footer label identifying the build.
pub fn build_label() -> String {
    format!(
        "v{} ({}) • Space HUD / orbital core",
        env!("CARGO_PKG_VERSION"),
        env!("HUD_GIT_COMMIT")
    )
}

/// Compose the panel grid for an unlocked session.
pub fn compose(options: &HudOptions, data: &Snapshot) -> DashboardView {
    let left = Column {
        span: 4,
        panels: vec![
            panels::skills(&data.skills, options.skills),
            panels::missing_tools(&data.missing_tools),
        ],
    };

    let mut center = Column {
        span: 4,
        panels: vec![panels::pulse(&data.system_health, &data.usage)],
    };
    if options.layout == HudLayout::Extended {
        match &data.security {
            Some(posture) => center.panels.push(panels::security(posture)),
            None => tracing::debug!("extended layout requested but data has no security posture"),
        }
    }

    let right = Column {
        span: 4,
        panels: vec![
            panels::connections(&data.connections),
            panels::projects(&data.projects, &data.sub_agents),
            panels::crons(&data.crons),
        ],
    };

    DashboardView {
        eyebrow: "MISSION CONTROL".to_string(),
        title: "Orbital HUD".to_string(),
        subtitle: "A cockpit-inspired layout with a central core.".to_string(),
        columns: vec![left, center, right],
        footer: build_label(),
    }
}

/// The passphrase form for a locked session.
pub fn gate(session: &SessionGate) -> GateView {
    GateView {
        eyebrow: "MISSION CONTROL".to_string(),
        title: "Docking".to_string(),
        prompt: "Enter passphrase to access the HUD.".to_string(),
        placeholder: "Passphrase".to_string(),
        masked_input: mask(session.input()),
        error: session.error().map(str::to_string),
        footer: build_label(),
    }
}

/// Root selector: gate while locked, dashboard while unlocked.
pub fn view(ctx: &RenderContext, session: &SessionGate, data: &Snapshot) -> View {
    let screen = if session.is_unlocked() {
        Screen::Dashboard(compose(&ctx.options, data))
    } else {
        Screen::Gate(gate(session))
    };

    View {
        theme: ctx.theme,
        dark: ctx.theme.is_dark(),
        screen,
    }
}
