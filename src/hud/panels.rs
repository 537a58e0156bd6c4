//! One pure projection per panel.
//!
//! Each function takes the slice of the snapshot its panel shows and
//! returns a [`Panel`]. None of them read or write any state.

use super::format::{format_cost, format_share, group_thousands};
use super::layout::SkillsPolicy;
use super::render::{Element, Panel, PanelKind, ScrollRegion};
use super::tone::{ScoreTier, Tone, Toned, bar_percent};
use crate::models::{
    Connection, CronJob, MissingTool, Project, SecurityPosture, Skill, SubAgentLog, SystemHealth,
    UsageStats,
};

/// Skills with their health indicator.
///
/// Truncation shows the first `limit` entries and a `+ N more` footer.
/// Show-all lists everything in a bounded scroll region and puts the total
/// in the title instead.
pub fn skills(skills: &[Skill], policy: SkillsPolicy) -> Panel {
    let row = |s: &Skill| {
        let mut el = Element::item(&s.name).with_status(s.status.tone(), s.status.as_str());
        if let Some(version) = &s.version {
            el = el.with_detail(format!("v{}", version));
        }
        el
    };

    match policy {
        SkillsPolicy::Truncate { limit } => {
            let mut panel = Panel::new(PanelKind::Skills, "Skills");
            panel.body = skills.iter().take(limit).map(row).collect();
            panel.footer = Some(format!("+ {} more", skills.len().saturating_sub(limit)));
            panel
        }
        SkillsPolicy::ShowAll { max_rows } => {
            let mut panel = Panel::new(PanelKind::Skills, format!("Skills ({})", skills.len()));
            panel.body = skills.iter().map(row).collect();
            panel.scroll = Some(ScrollRegion { max_rows });
            panel
        }
    }
}

/// Tools that are wanted but missing. No status indicator.
pub fn missing_tools(tools: &[MissingTool]) -> Panel {
    let mut panel = Panel::new(PanelKind::MissingTools, "Missing");
    panel.body = tools
        .iter()
        .map(|t| Element::item(&t.name).with_detail(&t.why))
        .collect();
    panel
}

pub fn connections(connections: &[Connection]) -> Panel {
    let mut panel = Panel::new(PanelKind::Connections, "Connections");
    panel.body = connections
        .iter()
        .map(|c| {
            Element::item(&c.name)
                .with_detail(&c.note)
                .with_status(c.status.tone(), c.status.as_str())
        })
        .collect();
    panel
}

/// The core: uptime, error count, 24h usage, upstream grid and top models.
pub fn pulse(health: &SystemHealth, usage: &UsageStats) -> Panel {
    let mut panel = Panel::new(PanelKind::Pulse, "System Pulse");

    panel.push(Element::note(format!(
        "Uptime {} • Errors {}",
        health.uptime, health.recent_errors
    )));
    panel.push(Element::metric("Tokens (24h)", group_thousands(usage.tokens_24h)));
    panel.push(Element::metric("Cost (24h)", format_cost(usage.cost_24h)));

    panel.push(Element::heading("API status"));
    for api in &health.api_status {
        panel.push(
            Element::item(&api.name).with_status(api.status.tone(), api.status.as_str().to_uppercase()),
        );
    }

    if !usage.top_models.is_empty() {
        panel.push(Element::heading("Top models"));
        for model in &usage.top_models {
            panel.push(Element::item(&model.name).with_trailing(format_share(model.share)));
        }
    }

    panel
}

/// Projects followed by the sub-agent log.
pub fn projects(projects: &[Project], sub_agents: &[SubAgentLog]) -> Panel {
    let mut panel = Panel::new(PanelKind::Projects, "Work & Agents");

    for p in projects {
        panel.push(
            Element::item(&p.name)
                .with_detail(format!("Updated {}", p.updated))
                .with_status(p.status.tone(), p.status.as_str()),
        );
    }

    panel.push(Element::heading("Sub-agents"));
    for a in sub_agents {
        panel.push(
            Element::item(&a.task)
                .with_detail(&a.result)
                .with_trailing(&a.when),
        );
    }

    panel
}

/// Scheduled jobs, shown verbatim.
pub fn crons(jobs: &[CronJob]) -> Panel {
    let mut panel = Panel::new(PanelKind::Crons, "Crons");
    panel.body = jobs
        .iter()
        .map(|c| {
            Element::item(&c.name)
                .with_detail(&c.schedule)
                .with_trailing(format!("next {}", c.next))
        })
        .collect();
    panel
}

/// Score bar, alerts, credentials, access log and recommendations.
pub fn security(posture: &SecurityPosture) -> Panel {
    let mut panel = Panel::new(PanelKind::Security, "Security");
    let tier = ScoreTier::classify(posture.score);

    panel.push(Element::Gauge {
        label: "Score".to_string(),
        percent: bar_percent(posture.score),
        tone: tier.tone(),
        caption: format!("{}/100 {}", posture.score, tier.label()),
    });

    panel.push(Element::heading("Alerts"));
    for alert in &posture.alerts {
        panel.push(
            Element::item(&alert.title)
                .with_detail(&alert.note)
                .with_status(alert.severity.tone(), alert.severity.as_str().to_uppercase()),
        );
    }

    panel.push(Element::heading("API keys"));
    for key in &posture.api_keys {
        panel.push(
            Element::item(&key.name)
                .with_detail(&key.note)
                .with_status(key.status.tone(), key.status.as_str()),
        );
    }

    panel.push(Element::heading("Access"));
    for entry in &posture.access {
        panel.push(
            Element::item(&entry.action)
                .with_detail(&entry.ip)
                .with_status(entry.result.tone(), entry.result.as_str())
                .with_trailing(&entry.when),
        );
    }

    panel.push(Element::heading("Recommendations"));
    for rec in &posture.recommendations {
        panel.push(Element::note(format!("• {}", rec)).with_tone(Tone::Neutral));
    }

    panel
}
