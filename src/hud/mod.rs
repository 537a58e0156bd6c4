//! The dashboard model: panels, layout and the root view.
//!
//! Everything in here is a pure function of its inputs. Frontends call
//! [`view`] and draw the returned tree.

pub mod format;
pub mod layout;
pub mod panels;
pub mod render;
pub mod text;
pub mod tone;

pub use layout::{
    DEFAULT_SKILLS_LIMIT, DEFAULT_SKILLS_ROWS, HudLayout, HudOptions, RenderContext, SkillsPolicy,
    compose, view,
};
pub use render::{Column, DashboardView, Element, GateView, Indicator, Panel, PanelKind, Screen, View};
pub use text::render_text;
pub use tone::{ScoreTier, Tone, Toned};
