//! Project entity.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::services::validation::{project_schema, validate, FieldErrors, FormInput};
use crate::domain::value_objects::{CollectionKey, EntityId, Money};

use super::Record;

/// Lifecycle status of a project
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum ProjectStatus {
    #[default]
    Planning,
    InProgress,
    OnHold,
    Completed,
}

impl ProjectStatus {
    pub const LITERALS: &'static [&'static str] =
        &["planning", "in-progress", "on-hold", "completed"];

    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectStatus::Planning => "planning",
            ProjectStatus::InProgress => "in-progress",
            ProjectStatus::OnHold => "on-hold",
            ProjectStatus::Completed => "completed",
        }
    }

    /// Human-facing label, e.g. `In Progress`.
    pub fn label(&self) -> &'static str {
        match self {
            ProjectStatus::Planning => "Planning",
            ProjectStatus::InProgress => "In Progress",
            ProjectStatus::OnHold => "On Hold",
            ProjectStatus::Completed => "Completed",
        }
    }

    pub fn from_literal(s: &str) -> Option<Self> {
        match s {
            "planning" => Some(ProjectStatus::Planning),
            "in-progress" => Some(ProjectStatus::InProgress),
            "on-hold" => Some(ProjectStatus::OnHold),
            "completed" => Some(ProjectStatus::Completed),
            _ => None,
        }
    }
}

impl std::fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A construction project
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: EntityId,
    pub name: String,
    pub description: String,
    pub client_name: String,
    pub start_date: NaiveDate,
    pub expected_end_date: NaiveDate,
    #[serde(default)]
    pub status: ProjectStatus,
    pub total_budget: Money,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Validated input for creating or editing a project.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectDraft {
    pub name: String,
    pub description: String,
    pub client_name: String,
    pub start_date: NaiveDate,
    pub expected_end_date: NaiveDate,
    pub status: ProjectStatus,
    pub total_budget: Money,
}

impl ProjectDraft {
    /// Validate raw form input against the project schema.
    pub fn from_form(input: &FormInput) -> Result<Self, FieldErrors> {
        let values = validate(input, project_schema())?;
        Ok(ProjectDraft {
            name: values.text("name").unwrap_or_default().to_string(),
            description: values.text("description").unwrap_or_default().to_string(),
            client_name: values.text("client_name").unwrap_or_default().to_string(),
            start_date: values.date("start_date").unwrap_or_default(),
            expected_end_date: values.date("expected_end_date").unwrap_or_default(),
            status: values
                .choice("status")
                .and_then(ProjectStatus::from_literal)
                .unwrap_or_default(),
            total_budget: values.amount("total_budget").unwrap_or_default(),
        })
    }
}

impl Project {
    /// Create a new project with a generated id and fresh timestamps.
    pub fn create(draft: ProjectDraft) -> Self {
        let now = Utc::now();
        Project {
            id: EntityId::generate(),
            name: draft.name,
            description: draft.description,
            client_name: draft.client_name,
            start_date: draft.start_date,
            expected_end_date: draft.expected_end_date,
            status: draft.status,
            total_budget: draft.total_budget,
            created_at: now,
            updated_at: now,
        }
    }

    /// Replace the editable fields in place. Id and `created_at` are
    /// preserved; `updated_at` is refreshed.
    pub fn apply(&mut self, draft: ProjectDraft) {
        self.name = draft.name;
        self.description = draft.description;
        self.client_name = draft.client_name;
        self.start_date = draft.start_date;
        self.expected_end_date = draft.expected_end_date;
        self.status = draft.status;
        self.total_budget = draft.total_budget;
        self.updated_at = Utc::now();
    }
}

impl Record for Project {
    const KEY: CollectionKey = CollectionKey::Projects;

    fn id(&self) -> &EntityId {
        &self.id
    }
}
