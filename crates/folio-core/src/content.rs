//! Portfolio content model.
//!
//! The page controller treats this as plain data: section order, skill and
//! project tables, experience entries, hero roles and stat counters. A JSON
//! file can replace the built-in content.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::anim::rotator::Rotator;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Portfolio {
    pub name: String,
    pub tagline: String,
    /// Roles cycled by the typing-text hero effect
    pub roles: Vec<String>,
    pub about: String,
    pub stats: Vec<StatCounter>,
    pub skill_categories: Vec<String>,
    pub skills: Vec<Skill>,
    pub projects: Vec<Project>,
    pub experience: Vec<ExperienceEntry>,
    pub contact_note: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatCounter {
    pub label: String,
    /// Numeric target as written in the content; non-numeric values are
    /// skipped at rotator discovery
    pub target: String,
    #[serde(default)]
    pub suffix: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    pub category: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    pub description: String,
    pub technologies: Vec<String>,
    #[serde(default)]
    pub details: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExperienceEntry {
    pub title: String,
    pub company: String,
    pub period: String,
    pub description: String,
    #[serde(default)]
    pub responsibilities: Vec<String>,
}

impl Portfolio {
    /// Load content from a JSON file
    pub fn load(path: &Path) -> crate::Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        let portfolio: Portfolio = serde_json::from_str(&raw)?;
        portfolio.validate()?;
        Ok(portfolio)
    }

    /// Sanity-check content before it reaches the controller
    pub fn validate(&self) -> crate::Result<()> {
        if self.name.trim().is_empty() {
            return Err(crate::Error::Content("name must not be empty".into()));
        }
        if self.roles.is_empty() {
            return Err(crate::Error::Content(
                "at least one hero role is required".into(),
            ));
        }
        for skill in &self.skills {
            if !self.skill_categories.iter().any(|c| c == &skill.category) {
                return Err(crate::Error::Content(format!(
                    "skill '{}' references unknown category '{}'",
                    skill.name, skill.category
                )));
            }
        }
        // Stats with unparseable targets are tolerated (skipped at rotator
        // discovery) but flagged here so `folio check` reports them.
        for stat in &self.stats {
            if Rotator::parse_target(&stat.target).is_none() {
                tracing::warn!(
                    label = %stat.label,
                    target = %stat.target,
                    "stat target is not numeric; counter will be skipped"
                );
            }
        }
        Ok(())
    }

    /// Skills filtered by category; "All" (or an unknown category) passes
    /// everything through
    pub fn skills_in(&self, category: &str) -> Vec<&Skill> {
        if category == "All" || !self.skill_categories.iter().any(|c| c == category) {
            self.skills.iter().collect()
        } else {
            self.skills
                .iter()
                .filter(|s| s.category == category)
                .collect()
        }
    }
}

impl Default for Portfolio {
    fn default() -> Self {
        Self {
            name: "Alex Ferris".to_string(),
            tagline: "Building fast, reliable software for the terminal and beyond".to_string(),
            roles: vec![
                "Systems Engineer".to_string(),
                "Rust Developer".to_string(),
                "CLI Tooling Author".to_string(),
                "Open Source Maintainer".to_string(),
            ],
            about: "I design and ship networked services, developer tools and \
                    terminal interfaces. I care about correctness, latency \
                    budgets and software that respects its users."
                .to_string(),
            stats: vec![
                StatCounter {
                    label: "Years of experience".to_string(),
                    target: "8.5".to_string(),
                    suffix: String::new(),
                },
                StatCounter {
                    label: "Projects shipped".to_string(),
                    target: "42".to_string(),
                    suffix: "+".to_string(),
                },
                StatCounter {
                    label: "Open source crates".to_string(),
                    target: "17".to_string(),
                    suffix: String::new(),
                },
                StatCounter {
                    label: "Mean uptime".to_string(),
                    target: "99".to_string(),
                    suffix: "%".to_string(),
                },
            ],
            skill_categories: vec![
                "All".to_string(),
                "Languages".to_string(),
                "Backend".to_string(),
                "Infra".to_string(),
                "Tools".to_string(),
            ],
            skills: vec![
                Skill { name: "Rust".into(), category: "Languages".into() },
                Skill { name: "Go".into(), category: "Languages".into() },
                Skill { name: "TypeScript".into(), category: "Languages".into() },
                Skill { name: "SQL".into(), category: "Languages".into() },
                Skill { name: "Axum / Tokio".into(), category: "Backend".into() },
                Skill { name: "gRPC".into(), category: "Backend".into() },
                Skill { name: "PostgreSQL".into(), category: "Backend".into() },
                Skill { name: "Redis".into(), category: "Backend".into() },
                Skill { name: "Kubernetes".into(), category: "Infra".into() },
                Skill { name: "Terraform".into(), category: "Infra".into() },
                Skill { name: "AWS".into(), category: "Infra".into() },
                Skill { name: "Git".into(), category: "Tools".into() },
                Skill { name: "Neovim".into(), category: "Tools".into() },
                Skill { name: "perf / flamegraph".into(), category: "Tools".into() },
            ],
            projects: vec![
                Project {
                    title: "ledgerd — embedded time-series store".to_string(),
                    description: "Append-only storage engine with mmap-backed \
                                  segments and a query planner tuned for \
                                  sub-millisecond range scans."
                        .to_string(),
                    technologies: vec!["Rust".into(), "mmap".into(), "LSM".into()],
                    details: vec![
                        "Sustains 1.2M writes/sec on commodity hardware".into(),
                        "Crash-safe via checksummed WAL with torn-write detection".into(),
                    ],
                },
                Project {
                    title: "relay — multiplexing reverse proxy".to_string(),
                    description: "HTTP/2-aware edge proxy with live config \
                                  reload and per-route circuit breakers."
                        .to_string(),
                    technologies: vec!["Rust".into(), "Tokio".into(), "HTTP/2".into()],
                    details: vec![
                        "p99 added latency under 400µs at 50k rps".into(),
                        "Zero-downtime reloads via socket handoff".into(),
                    ],
                },
                Project {
                    title: "tidewatch — terminal dashboard".to_string(),
                    description: "Ratatui dashboard aggregating service health, \
                                  deploy state and on-call schedules."
                        .to_string(),
                    technologies: vec!["Rust".into(), "ratatui".into(), "crossterm".into()],
                    details: vec![
                        "Renders 40+ live panels at 60fps in a tmux pane".into(),
                    ],
                },
            ],
            experience: vec![
                ExperienceEntry {
                    title: "Senior Systems Engineer".to_string(),
                    company: "Harbourline Systems".to_string(),
                    period: "2021 – Present".to_string(),
                    description: "Own the ingestion tier of a metrics platform \
                                  handling billions of points per day."
                        .to_string(),
                    responsibilities: vec![
                        "Rewrote the ingest path in Rust, cutting tail latency 70%".into(),
                        "Led the on-call rotation redesign for a 12-person team".into(),
                        "Mentor two engineers through their first production services".into(),
                    ],
                },
                ExperienceEntry {
                    title: "Backend Engineer".to_string(),
                    company: "Quartz Analytics".to_string(),
                    period: "2017 – 2021".to_string(),
                    description: "Built and operated customer-facing reporting \
                                  APIs and the batch pipeline behind them."
                        .to_string(),
                    responsibilities: vec![
                        "Shipped the v2 reporting API used by 300+ customers".into(),
                        "Moved nightly batch jobs from cron to a queue-based scheduler".into(),
                    ],
                },
            ],
            contact_note: "Have a project in mind? Send a message and I will \
                           get back to you soon."
                .to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_content_is_valid() {
        Portfolio::default().validate().unwrap();
    }

    #[test]
    fn test_skills_filter() {
        let portfolio = Portfolio::default();
        let all = portfolio.skills_in("All");
        assert_eq!(all.len(), portfolio.skills.len());

        let langs = portfolio.skills_in("Languages");
        assert!(!langs.is_empty());
        assert!(langs.iter().all(|s| s.category == "Languages"));
    }

    #[test]
    fn test_unknown_category_passes_through() {
        let portfolio = Portfolio::default();
        let filtered = portfolio.skills_in("Nonexistent");
        assert_eq!(filtered.len(), portfolio.skills.len());
    }

    #[test]
    fn test_validate_rejects_orphan_skill() {
        let mut portfolio = Portfolio::default();
        portfolio.skills.push(Skill {
            name: "Mystery".into(),
            category: "NoSuchCategory".into(),
        });
        assert!(portfolio.validate().is_err());
    }
}
