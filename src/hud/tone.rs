//! Uniform status classification across panels.
//!
//! | tone      | statuses                                   |
//! |-----------|--------------------------------------------|
//! | `good`    | ok, connected, done, success               |
//! | `warn`    | warn, degraded, med (alert)                |
//! | `bad`     | off, offline, blocked, bad, failed, high (alert) |
//! | `neutral` | in-progress                                |

use serde::Serialize;

use crate::models::{
    AccessResult, AlertSeverity, ApiHealth, ConnectionStatus, KeyStatus, ProjectStatus,
    SkillStatus,
};

/// Four-way semantic color of a status indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Good,
    Warn,
    Bad,
    Neutral,
}

impl Tone {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Good => "good",
            Self::Warn => "warn",
            Self::Bad => "bad",
            Self::Neutral => "neutral",
        }
    }

    /// Glyph used by text renditions.
    pub fn glyph(&self) -> &'static str {
        match self {
            Self::Good => "●",
            Self::Warn => "◐",
            Self::Bad => "✗",
            Self::Neutral => "○",
        }
    }
}

impl std::fmt::Display for Tone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A status value that has a tone.
pub trait Toned {
    fn tone(&self) -> Tone;
}

impl Toned for SkillStatus {
    fn tone(&self) -> Tone {
        match self {
            Self::Ok => Tone::Good,
            Self::Warn => Tone::Warn,
            Self::Off => Tone::Bad,
        }
    }
}

impl Toned for ConnectionStatus {
    fn tone(&self) -> Tone {
        match self {
            Self::Connected => Tone::Good,
            Self::Degraded => Tone::Warn,
            Self::Offline => Tone::Bad,
        }
    }
}

impl Toned for ProjectStatus {
    fn tone(&self) -> Tone {
        match self {
            Self::Done => Tone::Good,
            Self::Blocked => Tone::Bad,
            Self::InProgress => Tone::Neutral,
        }
    }
}

impl Toned for ApiHealth {
    fn tone(&self) -> Tone {
        match self {
            Self::Ok => Tone::Good,
            Self::Warn => Tone::Warn,
        }
    }
}

impl Toned for KeyStatus {
    fn tone(&self) -> Tone {
        match self {
            Self::Ok => Tone::Good,
            Self::Warn => Tone::Warn,
            Self::Bad => Tone::Bad,
        }
    }
}

impl Toned for AccessResult {
    fn tone(&self) -> Tone {
        match self {
            Self::Success => Tone::Good,
            Self::Failed => Tone::Bad,
        }
    }
}

impl Toned for AlertSeverity {
    fn tone(&self) -> Tone {
        match self {
            Self::High => Tone::Bad,
            Self::Med => Tone::Warn,
        }
    }
}

/// Three-tier classification of a security score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoreTier {
    /// 85 and above
    Strong,
    /// 70 to 84
    Watch,
    /// Below 70
    Risk,
}

impl ScoreTier {
    pub const STRONG_MIN: u8 = 85;
    pub const WATCH_MIN: u8 = 70;

    pub fn classify(score: u8) -> Self {
        if score >= Self::STRONG_MIN {
            Self::Strong
        } else if score >= Self::WATCH_MIN {
            Self::Watch
        } else {
            Self::Risk
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Strong => "STRONG",
            Self::Watch => "WATCH",
            Self::Risk => "RISK",
        }
    }
}

impl Toned for ScoreTier {
    fn tone(&self) -> Tone {
        match self {
            Self::Strong => Tone::Good,
            Self::Watch => Tone::Warn,
            Self::Risk => Tone::Bad,
        }
    }
}

/// Width of a score bar as a percentage, clamped to 0-100.
pub fn bar_percent(score: u8) -> u8 {
    score.min(100)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skill_tones() {
        assert_eq!(SkillStatus::Ok.tone(), Tone::Good);
        assert_eq!(SkillStatus::Warn.tone(), Tone::Warn);
        assert_eq!(SkillStatus::Off.tone(), Tone::Bad);
    }

    #[test]
    fn test_connection_tones() {
        assert_eq!(ConnectionStatus::Connected.tone(), Tone::Good);
        assert_eq!(ConnectionStatus::Degraded.tone(), Tone::Warn);
        assert_eq!(ConnectionStatus::Offline.tone(), Tone::Bad);
    }

    #[test]
    fn test_project_tones() {
        assert_eq!(ProjectStatus::Done.tone(), Tone::Good);
        assert_eq!(ProjectStatus::Blocked.tone(), Tone::Bad);
        assert_eq!(ProjectStatus::InProgress.tone(), Tone::Neutral);
    }

    #[test]
    fn test_security_tones() {
        assert_eq!(KeyStatus::Ok.tone(), Tone::Good);
        assert_eq!(KeyStatus::Warn.tone(), Tone::Warn);
        assert_eq!(KeyStatus::Bad.tone(), Tone::Bad);
        assert_eq!(AccessResult::Success.tone(), Tone::Good);
        assert_eq!(AccessResult::Failed.tone(), Tone::Bad);
        assert_eq!(AlertSeverity::High.tone(), Tone::Bad);
        assert_eq!(AlertSeverity::Med.tone(), Tone::Warn);
    }

    /// Every status with a given name maps to the same tone regardless of
    /// which entity it belongs to, and opposite names never share a tone.
    #[test]
    fn test_mapping_is_consistent_by_name() {
        let all: Vec<(&str, Tone)> = vec![
            (SkillStatus::Ok.as_str(), SkillStatus::Ok.tone()),
            (SkillStatus::Warn.as_str(), SkillStatus::Warn.tone()),
            (SkillStatus::Off.as_str(), SkillStatus::Off.tone()),
            (ConnectionStatus::Connected.as_str(), ConnectionStatus::Connected.tone()),
            (ConnectionStatus::Degraded.as_str(), ConnectionStatus::Degraded.tone()),
            (ConnectionStatus::Offline.as_str(), ConnectionStatus::Offline.tone()),
            (ProjectStatus::InProgress.as_str(), ProjectStatus::InProgress.tone()),
            (ProjectStatus::Done.as_str(), ProjectStatus::Done.tone()),
            (ProjectStatus::Blocked.as_str(), ProjectStatus::Blocked.tone()),
            (ApiHealth::Ok.as_str(), ApiHealth::Ok.tone()),
            (ApiHealth::Warn.as_str(), ApiHealth::Warn.tone()),
            (KeyStatus::Ok.as_str(), KeyStatus::Ok.tone()),
            (KeyStatus::Warn.as_str(), KeyStatus::Warn.tone()),
            (KeyStatus::Bad.as_str(), KeyStatus::Bad.tone()),
            (AccessResult::Success.as_str(), AccessResult::Success.tone()),
            (AccessResult::Failed.as_str(), AccessResult::Failed.tone()),
        ];

        for (name_a, tone_a) in &all {
            for (name_b, tone_b) in &all {
                if name_a == name_b {
                    assert_eq!(tone_a, tone_b, "{} maps inconsistently", name_a);
                }
            }
        }

        let tone_of = |name: &str| all.iter().find(|(n, _)| *n == name).map(|(_, t)| *t);
        for (good, bad) in [
            ("ok", "off"),
            ("connected", "offline"),
            ("done", "blocked"),
            ("success", "failed"),
            ("ok", "bad"),
        ] {
            assert_ne!(tone_of(good), tone_of(bad), "{} vs {}", good, bad);
        }
    }

    #[test]
    fn test_tone_display() {
        assert_eq!(Tone::Good.to_string(), "good");
        assert_eq!(Tone::Neutral.to_string(), "neutral");
    }

    #[test]
    fn test_score_tiers() {
        assert_eq!(ScoreTier::classify(100), ScoreTier::Strong);
        assert_eq!(ScoreTier::classify(85), ScoreTier::Strong);
        assert_eq!(ScoreTier::classify(84), ScoreTier::Watch);
        assert_eq!(ScoreTier::classify(78), ScoreTier::Watch);
        assert_eq!(ScoreTier::classify(70), ScoreTier::Watch);
        assert_eq!(ScoreTier::classify(69), ScoreTier::Risk);
        assert_eq!(ScoreTier::classify(0), ScoreTier::Risk);
    }

    #[test]
    fn test_score_tier_labels_and_tones() {
        assert_eq!(ScoreTier::classify(78).label(), "WATCH");
        assert_eq!(ScoreTier::Strong.tone(), Tone::Good);
        assert_eq!(ScoreTier::Watch.tone(), Tone::Warn);
        assert_eq!(ScoreTier::Risk.tone(), Tone::Bad);
    }

    #[test]
    fn test_bar_percent() {
        assert_eq!(bar_percent(78), 78);
        assert_eq!(bar_percent(0), 0);
        assert_eq!(bar_percent(250), 100);
    }
}
