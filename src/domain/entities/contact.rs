//! Workforce and supplier records.
//!
//! These collections are carried by the store and kept in the stored format,
//! but no ledger operation surfaces them yet.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{CollectionKey, EntityId, Money};

use super::Record;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ContactStatus {
    #[default]
    Active,
    Inactive,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SupplyCategory {
    Cement,
    Steel,
    Sand,
    Aggregates,
    Bricks,
    Electrical,
    Plumbing,
    Hardware,
    #[default]
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum AssignmentStatus {
    #[default]
    Active,
    Completed,
}

/// A worker available for assignment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Labor {
    pub id: EntityId,
    pub name: String,
    pub phone: String,
    pub address: String,
    pub daily_rate: Money,
    pub skills: Vec<String>,
    #[serde(default)]
    pub status: ContactStatus,
    pub created_at: DateTime<Utc>,
}

/// A material supplier
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Supplier {
    pub id: EntityId,
    pub name: String,
    pub contact_person: String,
    pub phone: String,
    pub email: String,
    pub address: String,
    #[serde(default)]
    pub category: SupplyCategory,
    #[serde(default)]
    pub status: ContactStatus,
    pub created_at: DateTime<Utc>,
}

/// A worker engaged on a project for a span of days
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LaborAssignment {
    pub id: EntityId,
    pub project_id: EntityId,
    pub labor_id: EntityId,
    pub start_date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
    pub days_worked: u32,
    pub total_amount: Money,
    #[serde(default)]
    pub status: AssignmentStatus,
    pub created_at: DateTime<Utc>,
}

impl Record for Labor {
    const KEY: CollectionKey = CollectionKey::Labor;

    fn id(&self) -> &EntityId {
        &self.id
    }
}

impl Record for Supplier {
    const KEY: CollectionKey = CollectionKey::Suppliers;

    fn id(&self) -> &EntityId {
        &self.id
    }
}

impl Record for LaborAssignment {
    const KEY: CollectionKey = CollectionKey::LaborAssignments;

    fn id(&self) -> &EntityId {
        &self.id
    }
}
