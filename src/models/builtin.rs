//! The bundled data set shown when no data file is given.

use super::{
    AccessEntry, AccessResult, Alert, AlertSeverity, ApiHealth, ApiKey, ApiStatusEntry,
    Connection, ConnectionStatus, CronJob, KeyStatus, MissingTool, ModelShare, Project,
    ProjectStatus, SecurityPosture, Skill, SkillStatus, Snapshot, SubAgentLog, SystemHealth,
    UsageStats,
};

fn skill(name: &str, status: SkillStatus, version: &str) -> Skill {
    Skill {
        name: name.to_string(),
        status,
        version: Some(version.to_string()),
    }
}

fn connection(name: &str, status: ConnectionStatus, note: &str) -> Connection {
    Connection {
        name: name.to_string(),
        status,
        note: note.to_string(),
    }
}

fn missing(name: &str, why: &str) -> MissingTool {
    MissingTool {
        name: name.to_string(),
        why: why.to_string(),
    }
}

fn project(name: &str, status: ProjectStatus, updated: &str) -> Project {
    Project {
        name: name.to_string(),
        status,
        updated: updated.to_string(),
    }
}

fn sub_agent(id: &str, task: &str, result: &str, when: &str) -> SubAgentLog {
    SubAgentLog {
        id: id.to_string(),
        task: task.to_string(),
        result: result.to_string(),
        when: when.to_string(),
    }
}

fn cron(name: &str, schedule: &str, next: &str) -> CronJob {
    CronJob {
        name: name.to_string(),
        schedule: schedule.to_string(),
        next: next.to_string(),
    }
}

fn api(name: &str, status: ApiHealth) -> ApiStatusEntry {
    ApiStatusEntry {
        name: name.to_string(),
        status,
    }
}

fn model(name: &str, share: u8) -> ModelShare {
    ModelShare {
        name: name.to_string(),
        share,
    }
}

fn security() -> SecurityPosture {
    SecurityPosture {
        score: 78,
        api_keys: vec![
            ApiKey {
                name: "GitHub".to_string(),
                status: KeyStatus::Ok,
                note: "Fine-grained token, repo scope".to_string(),
            },
            ApiKey {
                name: "OpenAI".to_string(),
                status: KeyStatus::Ok,
                note: "Rotated 12 days ago".to_string(),
            },
            ApiKey {
                name: "Vercel".to_string(),
                status: KeyStatus::Warn,
                note: "Expires in 9 days".to_string(),
            },
            ApiKey {
                name: "Supabase".to_string(),
                status: KeyStatus::Bad,
                note: "Service key found in .env history".to_string(),
            },
        ],
        access: vec![
            AccessEntry {
                when: "today 09:12".to_string(),
                ip: "82.64.17.203".to_string(),
                action: "HUD login".to_string(),
                result: AccessResult::Success,
            },
            AccessEntry {
                when: "today 03:47".to_string(),
                ip: "185.220.101.4".to_string(),
                action: "HUD login".to_string(),
                result: AccessResult::Failed,
            },
            AccessEntry {
                when: "yesterday 22:05".to_string(),
                ip: "82.64.17.203".to_string(),
                action: "Token refresh".to_string(),
                result: AccessResult::Success,
            },
        ],
        alerts: vec![
            Alert {
                severity: AlertSeverity::High,
                title: "Leaked service key".to_string(),
                note: "Supabase key present in git history".to_string(),
            },
            Alert {
                severity: AlertSeverity::Med,
                title: "Token nearing expiry".to_string(),
                note: "Vercel deploy token expires in 9 days".to_string(),
            },
        ],
        recommendations: vec![
            "Revoke and reissue the Supabase service key".to_string(),
            "Rotate the Vercel token before it expires".to_string(),
            "Alert on repeated failed HUD logins".to_string(),
        ],
    }
}

impl Snapshot {
    /// The bundled data set.
    pub fn builtin() -> Self {
        Self {
            skills: vec![
                skill("grok-search", SkillStatus::Ok, "1.3.0"),
                skill("elevenlabs-tts", SkillStatus::Ok, "0.9.2"),
                skill("whisper", SkillStatus::Ok, "2.1.1"),
                skill("vercel-deploy", SkillStatus::Warn, "0.4.0"),
                skill("github-sync", SkillStatus::Ok, "0.8.7"),
                skill("system-health", SkillStatus::Ok, "1.0.0"),
            ],
            connections: vec![
                connection("GitHub", ConnectionStatus::Connected, "Token OK • iamlordbot-cmd"),
                connection("Vercel", ConnectionStatus::Connected, "Deploy pipeline ready"),
                connection("OpenAI", ConnectionStatus::Degraded, "Rate-limit spikes (last 24h)"),
                connection("Grok", ConnectionStatus::Connected, "Web + X search enabled"),
                connection("ElevenLabs", ConnectionStatus::Connected, "Voice synthesis online"),
            ],
            missing_tools: vec![
                missing("Sentry", "Error traces & release health"),
                missing("Grafana", "Time-series & alerting"),
                missing("PostHog", "Product analytics"),
                missing("Supabase", "Auth + DB + RLS"),
            ],
            projects: vec![
                project("Mission Control — v1", ProjectStatus::InProgress, "2 min ago"),
                project("Ops: nightly work window", ProjectStatus::Done, "yesterday"),
                project("API connectors", ProjectStatus::Blocked, "awaiting keys"),
            ],
            sub_agents: vec![
                sub_agent("A-102", "Design 5 dashboard variants", "v1 shipped", "today"),
                sub_agent(
                    "A-097",
                    "Draft cron schedule proposal",
                    "8h briefing + 23h deep work",
                    "yesterday",
                ),
            ],
            crons: vec![
                cron("Briefing", "0 8 * * *", "tomorrow 08:00"),
                cron("Night Work", "0 23 * * *", "today 23:00"),
                cron("Health ping", "*/30 * * * *", "in 14 min"),
            ],
            system_health: SystemHealth {
                uptime: "12h 42m".to_string(),
                recent_errors: 2,
                api_status: vec![
                    api("GitHub", ApiHealth::Ok),
                    api("Vercel", ApiHealth::Ok),
                    api("OpenAI", ApiHealth::Warn),
                    api("Grok", ApiHealth::Ok),
                ],
            },
            usage: UsageStats {
                tokens_24h: 183_240,
                cost_24h: 7.92,
                top_models: vec![
                    model("Claude Opus 4.5", 48),
                    model("GPT-5.2", 32),
                    model("Grok", 20),
                ],
            },
            security: Some(security()),
        }
    }
}
