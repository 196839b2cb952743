//! Project records and the job board filter

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CadcardsError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProjectStatus {
    Active,
    Hold,
    Completed,
    Archived,
    Bidding,
}

impl ProjectStatus {
    pub const ALL: [ProjectStatus; 5] = [
        ProjectStatus::Active,
        ProjectStatus::Hold,
        ProjectStatus::Completed,
        ProjectStatus::Archived,
        ProjectStatus::Bidding,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectStatus::Active => "ACTIVE",
            ProjectStatus::Hold => "HOLD",
            ProjectStatus::Completed => "COMPLETED",
            ProjectStatus::Archived => "ARCHIVED",
            ProjectStatus::Bidding => "BIDDING",
        }
    }
}

impl fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProjectStatus {
    type Err = CadcardsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_uppercase();
        ProjectStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == wanted)
            .ok_or_else(|| CadcardsError::UnknownValue {
                kind: "project status",
                value: s.to_string(),
            })
    }
}

/// Someone assigned to a project
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamMember {
    pub id: String,
    pub name: String,
    /// PM, Lead Surveyor, Drafter, ...
    pub role: String,
}

/// One job on the board
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    /// Job number, e.g. `24-105`
    pub id: String,
    pub name: String,
    pub client: String,
    pub location: String,
    pub status: ProjectStatus,
    /// "Design Development", "Construction Docs", "Permitting", ...
    pub phase: String,
    /// Percent complete, 0-100
    pub progress: u8,
    /// ISO date
    pub due_date: String,
    pub manager: TeamMember,
    #[serde(default)]
    pub team: Vec<TeamMember>,
    #[serde(default)]
    pub tags: Vec<String>,
    /// Scope narrative, usually generated
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Project {
    pub fn due_date(&self) -> Option<chrono::NaiveDate> {
        chrono::NaiveDate::parse_from_str(&self.due_date, "%Y-%m-%d").ok()
    }
}

/// Search and status filter for the job board
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectFilter {
    pub search_term: String,
    /// `None` shows every status
    pub status: Option<ProjectStatus>,
}

impl ProjectFilter {
    /// Case-insensitive match on name, job number or client, plus status
    pub fn matches(&self, project: &Project) -> bool {
        let needle = self.search_term.to_lowercase();
        let matches_search = project.name.to_lowercase().contains(&needle)
            || project.id.to_lowercase().contains(&needle)
            || project.client.to_lowercase().contains(&needle);
        let matches_status = self.status.map_or(true, |s| project.status == s);
        matches_search && matches_status
    }

    pub fn apply<'a>(&self, projects: &'a [Project]) -> Vec<&'a Project> {
        projects.iter().filter(|p| self.matches(p)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::directory::seed_projects;

    #[test]
    fn test_search_covers_job_number_and_client() {
        let projects = seed_projects();
        let by_job = ProjectFilter {
            search_term: "24-1".to_string(),
            status: None,
        };
        let ids: Vec<&str> = by_job.apply(&projects).iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["24-105", "24-112", "24-115"]);

        let by_client = ProjectFilter {
            search_term: "caltrans".to_string(),
            status: None,
        };
        assert_eq!(by_client.apply(&projects)[0].id, "24-089");
    }

    #[test]
    fn test_status_filter() {
        let projects = seed_projects();
        let active = ProjectFilter {
            status: Some(ProjectStatus::Active),
            ..Default::default()
        };
        assert_eq!(active.apply(&projects).len(), 2);

        let archived = ProjectFilter {
            status: Some(ProjectStatus::Archived),
            ..Default::default()
        };
        assert!(archived.apply(&projects).is_empty());
    }

    #[test]
    fn test_status_parse() {
        assert_eq!("hold".parse::<ProjectStatus>().unwrap(), ProjectStatus::Hold);
        assert!("paused".parse::<ProjectStatus>().is_err());
    }

    #[test]
    fn test_due_date_parses() {
        let projects = seed_projects();
        let due = projects[0].due_date().unwrap();
        assert_eq!(due.to_string(), "2024-06-15");
    }
}
