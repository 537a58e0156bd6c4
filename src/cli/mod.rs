//! CLI argument definitions for the HUD.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::config::ConfigOverrides;
use crate::hud::HudLayout;
use crate::theme::ThemePreference;

const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("HUD_GIT_COMMIT"),
    " ",
    env!("HUD_BUILD_TIMESTAMP"),
    ")"
);

/// Orbital HUD - a passphrase-gated mission control dashboard for the terminal.
///
/// Run without a command to open the interactive HUD.
#[derive(Parser, Debug)]
#[command(name = "hud")]
#[command(author, version, long_version = LONG_VERSION, about, long_about = None)]
pub struct Cli {
    /// Directory holding persisted settings and the log file
    #[arg(long, global = true, env = "HUD_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// Path to config.kdl
    #[arg(long, global = true, env = "HUD_CONFIG")]
    pub config: Option<PathBuf>,

    /// JSON data file to render instead of the bundled data set
    #[arg(long, global = true, env = "HUD_DATA")]
    pub data: Option<PathBuf>,

    /// Panel grid to compose
    #[arg(long, global = true, value_enum)]
    pub layout: Option<LayoutArg>,

    /// Show only the first N skills, with a "+ N more" line
    #[arg(long, global = true, value_name = "N")]
    pub skills_limit: Option<usize>,

    /// List every skill in a scrollable region
    #[arg(long, global = true, conflicts_with = "skills_limit")]
    pub show_all_skills: bool,

    /// Keep settings in memory only; nothing is written to disk
    #[arg(long, global = true)]
    pub ephemeral: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// Display options given on the command line.
    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            layout: self.layout.map(HudLayout::from),
            skills_limit: self.skills_limit,
            show_all_skills: self.show_all_skills.then_some(true),
        }
    }
}

/// Top-level commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Open the interactive HUD (default)
    Tui,

    /// Print the current screen without a terminal
    Render {
        /// Emit the view tree as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show session state, theme and storage location
    Status {
        /// Emit JSON
        #[arg(long)]
        json: bool,
    },

    /// Read a passphrase from stdin and unlock the HUD
    Login {
        /// Emit JSON
        #[arg(long)]
        json: bool,
    },

    /// Lock the HUD
    Logout {
        /// Emit JSON
        #[arg(long)]
        json: bool,
    },

    /// Theme preference commands
    Theme {
        #[command(subcommand)]
        command: ThemeCommands,
    },
}

/// Theme subcommands
#[derive(Subcommand, Debug)]
pub enum ThemeCommands {
    /// Print the current theme
    Show {
        #[arg(long)]
        json: bool,
    },

    /// Switch between dark and light
    Toggle {
        #[arg(long)]
        json: bool,
    },

    /// Set the theme explicitly
    Set {
        #[arg(value_enum)]
        theme: ThemeArg,
        #[arg(long)]
        json: bool,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LayoutArg {
    Standard,
    Extended,
}

impl From<LayoutArg> for HudLayout {
    fn from(arg: LayoutArg) -> Self {
        match arg {
            LayoutArg::Standard => HudLayout::Standard,
            LayoutArg::Extended => HudLayout::Extended,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ThemeArg {
    Dark,
    Light,
}

impl From<ThemeArg> for ThemePreference {
    fn from(arg: ThemeArg) -> Self {
        match arg {
            ThemeArg::Dark => ThemePreference::Dark,
            ThemeArg::Light => ThemePreference::Light,
        }
    }
}
