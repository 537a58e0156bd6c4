//! Terminal user interface for the HUD.
//!
//! Keyboard-driven rendition of [`crate::hud::view`]: a passphrase gate
//! while locked, the panel grid while unlocked.

#[cfg(feature = "tui")]
mod app;
#[cfg(feature = "tui")]
mod widgets;

#[cfg(feature = "tui")]
pub use app::{HudApp, run_tui};
