//! KDL schema for config.kdl.
//!
//! ```kdl
//! layout "extended"      // or "standard"
//! skills-limit 5
//! show-all-skills #true
//! log-level "info"
//! ```
//!
//! Every node is optional. Unknown nodes are ignored so newer config files
//! keep working with older binaries.

use std::path::{Path, PathBuf};

use kdl::{KdlDocument, KdlNode};
use serde::Serialize;

use crate::hud::HudLayout;
use crate::{Error, Result};

/// File name inside the config directory.
pub const CONFIG_FILE: &str = "config.kdl";

/// Levels accepted by `log-level`.
pub const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// User preferences stored in config.kdl.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct HudConfig {
    /// Panel grid to compose
    pub layout: Option<HudLayout>,
    /// Truncation threshold for the skills panel
    pub skills_limit: Option<usize>,
    /// List every skill in a scroll region instead of truncating
    pub show_all_skills: Option<bool>,
    /// Default log filter when `HUD_LOG` is unset
    pub log_level: Option<String>,
}

impl HudConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse config from a KDL document.
    ///
    /// A known node with a value of the wrong type or out of range is an
    /// error naming that node.
    pub fn from_kdl(doc: &KdlDocument) -> Result<Self> {
        let mut config = Self::new();

        if let Some(node) = doc.get("layout") {
            let s = string_arg(node)?;
            config.layout = Some(
                HudLayout::parse(&s)
                    .ok_or_else(|| invalid(node, "expected \"standard\" or \"extended\""))?,
            );
        }

        if let Some(node) = doc.get("skills-limit") {
            let n = node
                .entries()
                .first()
                .and_then(|e| e.value().as_integer())
                .ok_or_else(|| invalid(node, "expected an integer"))?;
            let n = usize::try_from(n).map_err(|_| invalid(node, "must not be negative"))?;
            config.skills_limit = Some(n);
        }

        if let Some(node) = doc.get("show-all-skills") {
            let b = node
                .entries()
                .first()
                .and_then(|e| e.value().as_bool())
                .ok_or_else(|| invalid(node, "expected #true or #false"))?;
            config.show_all_skills = Some(b);
        }

        if let Some(node) = doc.get("log-level") {
            let s = string_arg(node)?.to_lowercase();
            if !LOG_LEVELS.contains(&s.as_str()) {
                return Err(invalid(node, &format!("expected one of {}", LOG_LEVELS.join(", "))));
            }
            config.log_level = Some(s);
        }

        Ok(config)
    }

    /// Load config from a file. A missing file yields an empty config.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file");
            return Ok(Self::new());
        }

        let content = std::fs::read_to_string(path)?;
        let doc: KdlDocument = content
            .parse()
            .map_err(|e| Error::Config(format!("Failed to parse {}: {}", path.display(), e)))?;

        Self::from_kdl(&doc).map_err(|e| match e {
            Error::Config(msg) => Error::Config(format!("{}: {}", path.display(), msg)),
            other => other,
        })
    }
}

/// Default location: `<config dir>/orbital-hud/config.kdl`.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join(crate::storage::APP_DIR_NAME).join(CONFIG_FILE))
}

fn string_arg(node: &KdlNode) -> Result<String> {
    node.entries()
        .first()
        .and_then(|e| e.value().as_string())
        .map(|s| s.to_string())
        .ok_or_else(|| invalid(node, "expected a string"))
}

fn invalid(node: &KdlNode, reason: &str) -> Error {
    Error::Config(format!("invalid `{}`: {}", node.name().value(), reason))
}
