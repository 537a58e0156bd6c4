//! Theme preference and the controller that owns it.
//!
//! The preference is read once at startup, flipped only by an explicit
//! toggle, and written back on every change. Frontends never read the
//! preference from storage themselves; they receive a [`Palette`] through
//! the render context.

use serde::{Deserialize, Serialize};

use crate::hud::Tone;
use crate::storage::{Storage, THEME_KEY};

/// Light or dark presentation mode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    #[default]
    Dark,
    Light,
}

impl ThemePreference {
    /// Parse a persisted value. Only the exact literals are accepted.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "dark" => Some(Self::Dark),
            "light" => Some(Self::Light),
            _ => None,
        }
    }

    /// Convert to the persisted string literal.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }

    /// The opposite mode.
    pub fn toggled(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    pub fn is_dark(&self) -> bool {
        matches!(self, Self::Dark)
    }

    /// Colors for this mode.
    pub fn palette(&self) -> Palette {
        match self {
            Self::Dark => Palette::DARK,
            Self::Light => Palette::LIGHT,
        }
    }
}

impl std::fmt::Display for ThemePreference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// An RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

/// The colors a frontend uses for one presentation mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Palette {
    /// Screen background
    pub bg: Rgb,
    /// Primary text
    pub fg: Rgb,
    /// Secondary text and labels
    pub muted: Rgb,
    /// Panel background
    pub card: Rgb,
    /// Panel borders
    pub border: Rgb,
    /// Highlights and focused input
    pub accent: Rgb,
    pub good: Rgb,
    pub warn: Rgb,
    pub bad: Rgb,
}

impl Palette {
    /// Deep-space dark mode.
    pub const DARK: Palette = Palette {
        bg: Rgb(7, 10, 20),
        fg: Rgb(232, 237, 247),
        muted: Rgb(148, 163, 184),
        card: Rgb(17, 24, 39),
        border: Rgb(51, 65, 85),
        accent: Rgb(125, 211, 252),
        good: Rgb(52, 211, 153),
        warn: Rgb(251, 191, 36),
        bad: Rgb(248, 113, 113),
    };

    /// Light mode.
    pub const LIGHT: Palette = Palette {
        bg: Rgb(248, 250, 252),
        fg: Rgb(15, 23, 42),
        muted: Rgb(71, 85, 105),
        card: Rgb(255, 255, 255),
        border: Rgb(203, 213, 225),
        accent: Rgb(2, 132, 199),
        good: Rgb(5, 150, 105),
        warn: Rgb(217, 119, 6),
        bad: Rgb(220, 38, 38),
    };

    /// Color used for a status indicator of the given tone.
    pub fn tone(&self, tone: Tone) -> Rgb {
        match tone {
            Tone::Good => self.good,
            Tone::Warn => self.warn,
            Tone::Bad => self.bad,
            Tone::Neutral => self.muted,
        }
    }
}

/// Owns the theme preference for the lifetime of the process.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ThemeController {
    preference: ThemePreference,
}

impl ThemeController {
    /// Restore the persisted preference. Absent or unrecognized values
    /// fall back to dark.
    ///
    /// Call this before the first frame is drawn so the screen never
    /// flashes the wrong mode.
    pub fn initialize(storage: &Storage) -> Self {
        let preference = match storage.get(THEME_KEY) {
            Some(raw) => ThemePreference::parse(&raw).unwrap_or_else(|| {
                tracing::debug!(value = %raw, "ignoring unrecognized theme value");
                ThemePreference::default()
            }),
            None => ThemePreference::default(),
        };
        tracing::debug!(theme = %preference, "theme initialized");
        Self { preference }
    }

    /// Flip the preference and persist it. Returns the new preference.
    pub fn toggle(&mut self, storage: &mut Storage) -> ThemePreference {
        self.set(self.preference.toggled(), storage)
    }

    /// Set an explicit preference and persist it.
    pub fn set(&mut self, preference: ThemePreference, storage: &mut Storage) -> ThemePreference {
        self.preference = preference;
        storage.set(THEME_KEY, preference.as_str());
        tracing::info!(theme = %preference, "theme changed");
        preference
    }

    pub fn preference(&self) -> ThemePreference {
        self.preference
    }

    /// Whether dark mode is active.
    pub fn is_dark(&self) -> bool {
        self.preference.is_dark()
    }

    pub fn palette(&self) -> Palette {
        self.preference.palette()
    }
}
