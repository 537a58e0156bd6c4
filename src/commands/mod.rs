//! Headless command implementations for the `hud` CLI.
//!
//! Each command returns a result type implementing [`Output`], so the
//! binary can print it as JSON or as human-readable text.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::Result;
use crate::config::{Resolved, ResolvedConfig};
use crate::hud::{self, HudLayout, HudOptions, RenderContext, SkillsPolicy, View};
use crate::models::DataProvider;
use crate::session::{SessionGate, SessionState, SubmitOutcome};
use crate::storage::Storage;
use crate::theme::{ThemeController, ThemePreference};

/// Command results that can be serialized to JSON or formatted for humans.
pub trait Output {
    fn to_json(&self) -> String;
    fn to_human(&self) -> String;
}

fn json<T: Serialize>(value: &T) -> String {
    serde_json::to_string(value).unwrap_or_else(|e| format!(r#"{{"error":"{}"}}"#, e))
}

#[derive(Debug, Serialize)]
pub struct StatusResult {
    pub session: SessionState,
    pub theme: ThemePreference,
    pub backend: &'static str,
    pub location: String,
    pub data_dir: PathBuf,
    pub data: String,
    pub layout: Resolved<HudLayout>,
    pub skills: SkillsPolicy,
    pub version: String,
}

impl Output for StatusResult {
    fn to_json(&self) -> String {
        json(self)
    }

    fn to_human(&self) -> String {
        let skills = match self.skills {
            SkillsPolicy::Truncate { limit } => format!("first {}", limit),
            SkillsPolicy::ShowAll { max_rows } => format!("all ({} rows visible)", max_rows),
        };
        [
            format!("Session:  {}", self.session),
            format!("Theme:    {}", self.theme),
            format!("Storage:  {} ({})", self.location, self.backend),
            format!("Data:     {}", self.data),
            format!("Layout:   {} [{}]", self.layout.value, self.layout.source),
            format!("Skills:   {}", skills),
            format!("Version:  {}", self.version),
        ]
        .join("\n")
    }
}

/// Report session state, theme and where everything lives.
pub fn status(
    storage: &Storage,
    data_dir: &Path,
    provider: &dyn DataProvider,
    config: &ResolvedConfig,
) -> StatusResult {
    let session = SessionGate::initialize(storage);
    let theme = ThemeController::initialize(storage);

    StatusResult {
        session: session.state(),
        theme: theme.preference(),
        backend: storage.backend_type(),
        location: storage.location(),
        data_dir: data_dir.to_path_buf(),
        data: provider.describe(),
        layout: config.layout.clone(),
        skills: config.skills_policy(),
        version: version_string(),
    }
}

#[derive(Debug, Serialize)]
pub struct LoginResult {
    pub outcome: SubmitOutcome,
    pub session: SessionState,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl LoginResult {
    pub fn rejected(&self) -> bool {
        self.outcome == SubmitOutcome::Rejected
    }
}

impl Output for LoginResult {
    fn to_json(&self) -> String {
        json(self)
    }

    fn to_human(&self) -> String {
        match self.outcome {
            SubmitOutcome::Unlocked => "Unlocked.".to_string(),
            SubmitOutcome::AlreadyUnlocked => "Already unlocked.".to_string(),
            SubmitOutcome::Rejected => self.error.clone().unwrap_or_default(),
        }
    }
}

/// Submit a passphrase to the gate.
pub fn login(storage: &mut Storage, passphrase: &str) -> LoginResult {
    let mut session = SessionGate::initialize(storage);
    let outcome = session.submit_passphrase(passphrase, storage);
    LoginResult {
        outcome,
        session: session.state(),
        error: session.error().map(str::to_string),
    }
}

#[derive(Debug, Serialize)]
pub struct LogoutResult {
    pub was_unlocked: bool,
    pub session: SessionState,
}

impl Output for LogoutResult {
    fn to_json(&self) -> String {
        json(self)
    }

    fn to_human(&self) -> String {
        if self.was_unlocked {
            "Locked.".to_string()
        } else {
            "Already locked.".to_string()
        }
    }
}

/// Lock the session.
pub fn logout(storage: &mut Storage) -> LogoutResult {
    let mut session = SessionGate::initialize(storage);
    let was_unlocked = session.logout(storage);
    LogoutResult {
        was_unlocked,
        session: session.state(),
    }
}

#[derive(Debug, Serialize)]
pub struct ThemeResult {
    pub theme: ThemePreference,
    pub dark: bool,
    pub changed: bool,
}

impl Output for ThemeResult {
    fn to_json(&self) -> String {
        json(self)
    }

    fn to_human(&self) -> String {
        if self.changed {
            format!("Theme set to {}.", self.theme)
        } else {
            self.theme.to_string()
        }
    }
}

impl ThemeResult {
    fn new(theme: ThemePreference, changed: bool) -> Self {
        Self {
            theme,
            dark: theme.is_dark(),
            changed,
        }
    }
}

pub fn theme_show(storage: &Storage) -> ThemeResult {
    ThemeResult::new(ThemeController::initialize(storage).preference(), false)
}

pub fn theme_toggle(storage: &mut Storage) -> ThemeResult {
    let mut theme = ThemeController::initialize(storage);
    ThemeResult::new(theme.toggle(storage), true)
}

pub fn theme_set(storage: &mut Storage, preference: ThemePreference) -> ThemeResult {
    let mut theme = ThemeController::initialize(storage);
    let before = theme.preference();
    ThemeResult::new(theme.set(preference, storage), before != preference)
}

#[derive(Debug, Serialize)]
#[serde(transparent)]
pub struct RenderResult {
    pub view: View,
}

impl Output for RenderResult {
    fn to_json(&self) -> String {
        json(&self.view)
    }

    fn to_human(&self) -> String {
        hud::render_text(&self.view).trim_end().to_string()
    }
}

/// Compose the current screen without a terminal.
pub fn render(
    storage: &Storage,
    provider: &dyn DataProvider,
    options: HudOptions,
) -> Result<RenderResult> {
    let session = SessionGate::initialize(storage);
    let theme = ThemeController::initialize(storage);
    let data = provider.load()?;

    let ctx = RenderContext::new(theme.preference(), options);
    Ok(RenderResult {
        view: hud::view(&ctx, &session, &data),
    })
}

/// Version plus build metadata, as shown by `--version`.
pub fn version_string() -> String {
    format!(
        "{} ({} {})",
        env!("CARGO_PKG_VERSION"),
        env!("HUD_GIT_COMMIT"),
        env!("HUD_BUILD_TIMESTAMP")
    )
}
