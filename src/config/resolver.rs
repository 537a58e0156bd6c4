//! Precedence resolution for display options.
//!
//! ## Precedence (highest to lowest)
//!
//! 1. CLI flags
//! 2. config.kdl
//! 3. Built-in defaults

use serde::Serialize;

use super::schema::HudConfig;
use crate::hud::{DEFAULT_SKILLS_LIMIT, DEFAULT_SKILLS_ROWS, HudLayout, HudOptions, SkillsPolicy};

/// Tracks where a resolved value came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueSource {
    /// Value from a CLI flag
    Cli,
    /// Value from config.kdl
    Config,
    /// Built-in default value
    Default,
}

impl ValueSource {
    /// Precedence rank; higher wins.
    fn rank(&self) -> u8 {
        match self {
            ValueSource::Cli => 2,
            ValueSource::Config => 1,
            ValueSource::Default => 0,
        }
    }
}

impl std::fmt::Display for ValueSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValueSource::Cli => write!(f, "cli"),
            ValueSource::Config => write!(f, "config"),
            ValueSource::Default => write!(f, "default"),
        }
    }
}

/// A resolved value with its source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Resolved<T> {
    pub value: T,
    pub source: ValueSource,
}

impl<T> Resolved<T> {
    pub fn new(value: T, source: ValueSource) -> Self {
        Self { value, source }
    }
}

/// Pick the first present value, recording which layer supplied it.
fn pick<T>(cli: Option<T>, config: Option<T>, default: T) -> Resolved<T> {
    if let Some(v) = cli {
        Resolved::new(v, ValueSource::Cli)
    } else if let Some(v) = config {
        Resolved::new(v, ValueSource::Config)
    } else {
        Resolved::new(default, ValueSource::Default)
    }
}

/// CLI overrides for configuration resolution.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub layout: Option<HudLayout>,
    pub skills_limit: Option<usize>,
    /// `Some(true)` only when `--show-all-skills` was passed
    pub show_all_skills: Option<bool>,
}

impl ConfigOverrides {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_layout(mut self, layout: HudLayout) -> Self {
        self.layout = Some(layout);
        self
    }

    pub fn with_skills_limit(mut self, limit: usize) -> Self {
        self.skills_limit = Some(limit);
        self
    }

    pub fn with_show_all_skills(mut self) -> Self {
        self.show_all_skills = Some(true);
        self
    }
}

/// Fully resolved configuration with source tracking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedConfig {
    pub layout: Resolved<HudLayout>,
    pub skills_limit: Resolved<usize>,
    pub show_all_skills: Resolved<bool>,
    /// No built-in default; absent means "use the verbosity flag"
    pub log_level: Option<String>,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        resolve_config(&HudConfig::default(), &ConfigOverrides::default())
    }
}

impl ResolvedConfig {
    /// Skills policy implied by the resolved values.
    ///
    /// The setting from the higher-precedence layer decides: a limit means
    /// truncation, show-all means its own value. On a tie the show-all
    /// setting decides, so with neither set show-all is the default.
    pub fn skills_policy(&self) -> SkillsPolicy {
        let show_all = if self.skills_limit.source.rank() > self.show_all_skills.source.rank() {
            false
        } else {
            self.show_all_skills.value
        };

        if show_all {
            SkillsPolicy::ShowAll {
                max_rows: DEFAULT_SKILLS_ROWS,
            }
        } else {
            SkillsPolicy::Truncate {
                limit: self.skills_limit.value,
            }
        }
    }

    pub fn hud_options(&self) -> HudOptions {
        HudOptions {
            layout: self.layout.value,
            skills: self.skills_policy(),
        }
    }
}

/// Resolve configuration with full precedence chain.
pub fn resolve_config(config: &HudConfig, overrides: &ConfigOverrides) -> ResolvedConfig {
    ResolvedConfig {
        layout: pick(overrides.layout, config.layout, HudLayout::default()),
        skills_limit: pick(overrides.skills_limit, config.skills_limit, DEFAULT_SKILLS_LIMIT),
        show_all_skills: pick(overrides.show_all_skills, config.show_all_skills, true),
        log_level: config.log_level.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_source_display() {
        assert_eq!(ValueSource::Cli.to_string(), "cli");
        assert_eq!(ValueSource::Config.to_string(), "config");
        assert_eq!(ValueSource::Default.to_string(), "default");
    }

    #[test]
    fn test_resolve_config_defaults() {
        let resolved = resolve_config(&HudConfig::default(), &ConfigOverrides::new());

        assert_eq!(resolved.layout, Resolved::new(HudLayout::Extended, ValueSource::Default));
        assert_eq!(resolved.skills_limit.value, 5);
        assert_eq!(resolved.show_all_skills.source, ValueSource::Default);
        assert_eq!(resolved.hud_options(), HudOptions::default());
    }

    #[test]
    fn test_resolve_config_from_file() {
        let config = HudConfig {
            layout: Some(HudLayout::Standard),
            skills_limit: Some(3),
            ..HudConfig::default()
        };
        let resolved = resolve_config(&config, &ConfigOverrides::new());

        assert_eq!(resolved.layout.source, ValueSource::Config);
        assert_eq!(resolved.skills_policy(), SkillsPolicy::Truncate { limit: 3 });
    }

    #[test]
    fn test_resolve_config_cli_overrides_file() {
        let config = HudConfig {
            layout: Some(HudLayout::Standard),
            skills_limit: Some(3),
            ..HudConfig::default()
        };
        let overrides = ConfigOverrides::new()
            .with_layout(HudLayout::Extended)
            .with_skills_limit(4);
        let resolved = resolve_config(&config, &overrides);

        assert_eq!(resolved.layout, Resolved::new(HudLayout::Extended, ValueSource::Cli));
        assert_eq!(resolved.skills_limit, Resolved::new(4, ValueSource::Cli));
        assert_eq!(resolved.skills_policy(), SkillsPolicy::Truncate { limit: 4 });
    }

    #[test]
    fn test_explicit_show_all_beats_limit() {
        let config = HudConfig {
            skills_limit: Some(3),
            ..HudConfig::default()
        };
        let resolved = resolve_config(&config, &ConfigOverrides::new().with_show_all_skills());
        assert!(matches!(resolved.skills_policy(), SkillsPolicy::ShowAll { .. }));
    }

    #[test]
    fn test_cli_limit_beats_config_show_all() {
        let config = HudConfig {
            show_all_skills: Some(true),
            ..HudConfig::default()
        };
        let resolved = resolve_config(&config, &ConfigOverrides::new().with_skills_limit(2));
        assert_eq!(resolved.skills_policy(), SkillsPolicy::Truncate { limit: 2 });
    }

    #[test]
    fn test_config_show_all_beats_config_limit() {
        let config = HudConfig {
            skills_limit: Some(2),
            show_all_skills: Some(true),
            ..HudConfig::default()
        };
        let resolved = resolve_config(&config, &ConfigOverrides::new());
        assert!(matches!(resolved.skills_policy(), SkillsPolicy::ShowAll { .. }));
    }

    #[test]
    fn test_config_disables_show_all() {
        let config = HudConfig {
            show_all_skills: Some(false),
            ..HudConfig::default()
        };
        let resolved = resolve_config(&config, &ConfigOverrides::new());
        assert_eq!(
            resolved.skills_policy(),
            SkillsPolicy::Truncate {
                limit: DEFAULT_SKILLS_LIMIT
            }
        );
    }

    #[test]
    fn test_log_level_passes_through() {
        let config = HudConfig {
            log_level: Some("debug".to_string()),
            ..HudConfig::default()
        };
        let resolved = resolve_config(&config, &ConfigOverrides::new());
        assert_eq!(resolved.log_level.as_deref(), Some("debug"));
    }
}
