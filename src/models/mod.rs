//! Data models for HUD panels.
//!
//! Every record here is read-only from the HUD's point of view: it is
//! produced by a [`DataProvider`] and only ever projected into panels.
//!
//! - `Skill` - Installed agent skill with health status
//! - `Connection` - Upstream integration and its link state
//! - `MissingTool` - Integration not yet wired up, with the reason it is wanted
//! - `Project` / `SubAgentLog` - Ongoing work and recent sub-agent runs
//! - `CronJob` - Scheduled job with a precomputed next-run label
//! - `SystemHealth` / `UsageStats` - Inputs to the core pulse panel
//! - `SecurityPosture` - Score, credentials, access log, alerts
//!
//! Field names serialize in camelCase so data files can be written in the
//! same shape the web dashboard used.

mod builtin;
pub mod cron;
mod provider;
mod snapshot;

pub use provider::{BuiltinProvider, DataProvider, FileProvider, provider_for};
pub use snapshot::Snapshot;

use serde::{Deserialize, Serialize};
use std::fmt;

/// Health of an installed skill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkillStatus {
    Ok,
    Warn,
    Off,
}

impl SkillStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ok => "ok",
            Self::Warn => "warn",
            Self::Off => "off",
        }
    }
}

/// Link state of an upstream connection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConnectionStatus {
    Connected,
    Degraded,
    Offline,
}

impl ConnectionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Connected => "connected",
            Self::Degraded => "degraded",
            Self::Offline => "offline",
        }
    }
}

/// Project progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProjectStatus {
    InProgress,
    Done,
    Blocked,
}

impl ProjectStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::InProgress => "in-progress",
            Self::Done => "done",
            Self::Blocked => "blocked",
        }
    }
}

/// Status of an upstream API in the pulse grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApiHealth {
    Ok,
    Warn,
}

impl ApiHealth {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ok => "ok",
            Self::Warn => "warn",
        }
    }
}

/// Health of a stored credential.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KeyStatus {
    Ok,
    Warn,
    Bad,
}

impl KeyStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ok => "ok",
            Self::Warn => "warn",
            Self::Bad => "bad",
        }
    }
}

/// Outcome of an access-log entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccessResult {
    Success,
    Failed,
}

impl AccessResult {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Failed => "failed",
        }
    }
}

/// Security alert severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertSeverity {
    High,
    Med,
}

impl AlertSeverity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Med => "med",
        }
    }
}

macro_rules! impl_display_via_as_str {
    ($($ty:ty),* $(,)?) => {
        $(
            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    write!(f, "{}", self.as_str())
                }
            }
        )*
    };
}

impl_display_via_as_str!(
    SkillStatus,
    ConnectionStatus,
    ProjectStatus,
    ApiHealth,
    KeyStatus,
    AccessResult,
    AlertSeverity,
);

/// An installed agent skill.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Skill {
    /// Unique skill name
    pub name: String,
    pub status: SkillStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

/// An upstream integration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Connection {
    /// Unique connection name
    pub name: String,
    pub status: ConnectionStatus,
    /// Free-text detail shown under the name
    pub note: String,
}

/// An integration that is wanted but not wired up.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MissingTool {
    pub name: String,
    /// Why the tool is wanted
    pub why: String,
}

/// A tracked project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub name: String,
    pub status: ProjectStatus,
    /// Free-text recency label, e.g. "2 min ago"
    pub updated: String,
}

/// One sub-agent run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubAgentLog {
    /// Unique run id, e.g. "A-102"
    pub id: String,
    pub task: String,
    pub result: String,
    pub when: String,
}

/// A scheduled job. `next` is a precomputed label; the HUD never
/// evaluates the schedule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CronJob {
    pub name: String,
    /// Five-field cron expression
    pub schedule: String,
    pub next: String,
}

/// Status of one upstream API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiStatusEntry {
    pub name: String,
    pub status: ApiHealth,
}

/// Process health summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SystemHealth {
    /// Free-text uptime, e.g. "12h 42m"
    pub uptime: String,
    pub recent_errors: u32,
    /// Ordered as displayed
    pub api_status: Vec<ApiStatusEntry>,
}

/// Share of usage attributed to one model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelShare {
    pub name: String,
    /// Percentage; shares need not sum to 100
    pub share: u8,
}

/// Token and cost usage over the last 24 hours.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UsageStats {
    #[serde(rename = "tokens24h")]
    pub tokens_24h: u64,
    #[serde(rename = "cost24h")]
    pub cost_24h: f64,
    pub top_models: Vec<ModelShare>,
}

/// A stored credential.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiKey {
    pub name: String,
    pub status: KeyStatus,
    pub note: String,
}

/// One access-log line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccessEntry {
    pub when: String,
    pub ip: String,
    pub action: String,
    pub result: AccessResult,
}

/// A security alert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Alert {
    pub severity: AlertSeverity,
    pub title: String,
    pub note: String,
}

/// Credential and access posture.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SecurityPosture {
    /// 0-100
    pub score: u8,
    pub api_keys: Vec<ApiKey>,
    /// Chronological, most recent first
    pub access: Vec<AccessEntry>,
    pub alerts: Vec<Alert>,
    pub recommendations: Vec<String>,
}
