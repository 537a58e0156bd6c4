//! The complete read-only data set behind one HUD frame.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::{
    Connection, CronJob, MissingTool, Project, SecurityPosture, Skill, SubAgentLog, SystemHealth,
    UsageStats, cron,
};
use crate::{Error, Result};

/// Every slice the panels project from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    pub skills: Vec<Skill>,
    pub connections: Vec<Connection>,
    pub missing_tools: Vec<MissingTool>,
    pub projects: Vec<Project>,
    pub sub_agents: Vec<SubAgentLog>,
    pub crons: Vec<CronJob>,
    pub system_health: SystemHealth,
    pub usage: UsageStats,
    /// Absent in data sets that predate the security panel
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub security: Option<SecurityPosture>,
}

impl Snapshot {
    /// Check the invariants panels rely on.
    ///
    /// - names are unique within skills, connections, missing tools,
    ///   projects and crons; sub-agent ids are unique
    /// - every cron schedule is a valid five-field expression
    /// - cost is a finite, non-negative number
    /// - security score is at most 100
    pub fn validate(&self) -> Result<()> {
        ensure_unique("skill", self.skills.iter().map(|s| s.name.as_str()))?;
        ensure_unique("connection", self.connections.iter().map(|c| c.name.as_str()))?;
        ensure_unique("missing tool", self.missing_tools.iter().map(|m| m.name.as_str()))?;
        ensure_unique("project", self.projects.iter().map(|p| p.name.as_str()))?;
        ensure_unique("sub-agent id", self.sub_agents.iter().map(|a| a.id.as_str()))?;
        ensure_unique("cron", self.crons.iter().map(|c| c.name.as_str()))?;

        for job in &self.crons {
            cron::validate(&job.schedule)
                .map_err(|e| Error::InvalidData(format!("cron {:?}: {}", job.name, e)))?;
        }

        if !self.usage.cost_24h.is_finite() || self.usage.cost_24h < 0.0 {
            return Err(Error::InvalidData(format!(
                "cost24h must be a non-negative number, got {}",
                self.usage.cost_24h
            )));
        }

        if let Some(security) = &self.security {
            if security.score > 100 {
                return Err(Error::InvalidData(format!(
                    "security score must be 0-100, got {}",
                    security.score
                )));
            }
        }

        Ok(())
    }
}

fn ensure_unique<'a>(kind: &str, keys: impl Iterator<Item = &'a str>) -> Result<()> {
    let mut seen = HashSet::new();
    for key in keys {
        if !seen.insert(key) {
            return Err(Error::InvalidData(format!("duplicate {} {:?}", kind, key)));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CronJob, Skill, SkillStatus};

    #[test]
    fn test_builtin_validates() {
        Snapshot::builtin().validate().unwrap();
    }

    #[test]
    fn test_duplicate_skill_rejected() {
        let mut snapshot = Snapshot::builtin();
        snapshot.skills.push(Skill {
            name: snapshot.skills[0].name.clone(),
            status: SkillStatus::Off,
            version: None,
        });
        let err = snapshot.validate().unwrap_err().to_string();
        assert!(err.contains("duplicate skill"), "{}", err);
    }

    #[test]
    fn test_duplicate_sub_agent_id_rejected() {
        let mut snapshot = Snapshot::builtin();
        let first = snapshot.sub_agents[0].clone();
        snapshot.sub_agents.push(first);
        assert!(snapshot.validate().is_err());
    }

    #[test]
    fn test_invalid_cron_rejected() {
        let mut snapshot = Snapshot::builtin();
        snapshot.crons.push(CronJob {
            name: "Broken".to_string(),
            schedule: "every day".to_string(),
            next: "never".to_string(),
        });
        let err = snapshot.validate().unwrap_err().to_string();
        assert!(err.contains("Broken"), "{}", err);
    }

    #[test]
    fn test_score_over_100_rejected() {
        let mut snapshot = Snapshot::builtin();
        if let Some(security) = snapshot.security.as_mut() {
            security.score = 101;
        }
        assert!(snapshot.validate().is_err());
    }

    #[test]
    fn test_negative_cost_rejected() {
        let mut snapshot = Snapshot::builtin();
        snapshot.usage.cost_24h = -1.0;
        assert!(snapshot.validate().is_err());
    }

    #[test]
    fn test_missing_security_is_valid() {
        let mut snapshot = Snapshot::builtin();
        snapshot.security = None;
        snapshot.validate().unwrap();
    }

    #[test]
    fn test_camel_case_wire_shape() {
        let json = serde_json::to_value(Snapshot::builtin()).unwrap();
        assert!(json.get("missingTools").is_some());
        assert!(json.get("subAgents").is_some());
        assert_eq!(json["usage"]["tokens24h"], 183_240);
        assert_eq!(json["systemHealth"]["recentErrors"], 2);
        assert_eq!(json["projects"][0]["status"], "in-progress");
        assert!(json["security"]["apiKeys"].is_array());
    }
}
