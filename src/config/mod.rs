//! Configuration for the HUD.
//!
//! ## config.kdl - display preferences
//!
//! Located at `--config <FILE>`, `HUD_CONFIG`, or
//! `~/.config/orbital-hud/config.kdl`.
//!
//! Contains:
//! - `layout` - "standard" or "extended"
//! - `skills-limit` - truncation threshold for the skills panel
//! - `show-all-skills` - list every skill in a scroll region
//! - `log-level` - default log filter
//!
//! Runtime state (theme, auth marker) does not live here; see
//! [`crate::storage`].
//!
//! ## Precedence
//!
//! CLI flag > config.kdl > defaults. Use the [`resolver`] module.

pub mod resolver;
pub mod schema;

pub use resolver::{ConfigOverrides, Resolved, ResolvedConfig, ValueSource, resolve_config};
pub use schema::{CONFIG_FILE, HudConfig, LOG_LEVELS, default_config_path};
