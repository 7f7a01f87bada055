//! Expense entity.
//!
//! Expenses are immutable once recorded; there is no edit or delete surface.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::services::validation::{expense_schema, validate, FieldErrors, FormInput};
use crate::domain::value_objects::{CollectionKey, EntityId, Money};

use super::Record;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ExpenseCategory {
    #[default]
    Materials,
    Labor,
    Equipment,
    Transport,
    Other,
}

impl ExpenseCategory {
    pub const LITERALS: &'static [&'static str] =
        &["materials", "labor", "equipment", "transport", "other"];

    pub fn as_str(&self) -> &'static str {
        match self {
            ExpenseCategory::Materials => "materials",
            ExpenseCategory::Labor => "labor",
            ExpenseCategory::Equipment => "equipment",
            ExpenseCategory::Transport => "transport",
            ExpenseCategory::Other => "other",
        }
    }

    pub fn from_literal(s: &str) -> Option<Self> {
        match s {
            "materials" => Some(ExpenseCategory::Materials),
            "labor" => Some(ExpenseCategory::Labor),
            "equipment" => Some(ExpenseCategory::Equipment),
            "transport" => Some(ExpenseCategory::Transport),
            "other" => Some(ExpenseCategory::Other),
            _ => None,
        }
    }
}

impl std::fmt::Display for ExpenseCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A cost recorded against a project
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Expense {
    pub id: EntityId,
    pub project_id: EntityId,
    #[serde(default)]
    pub category: ExpenseCategory,
    pub description: String,
    pub amount: Money,
    pub date: NaiveDate,
    pub created_at: DateTime<Utc>,
}

/// Validated input for recording an expense.
#[derive(Debug, Clone, PartialEq)]
pub struct ExpenseDraft {
    pub category: ExpenseCategory,
    pub description: String,
    pub amount: Money,
    pub date: NaiveDate,
}

impl ExpenseDraft {
    pub fn from_form(input: &FormInput) -> Result<Self, FieldErrors> {
        let values = validate(input, expense_schema())?;
        Ok(ExpenseDraft {
            category: values
                .choice("category")
                .and_then(ExpenseCategory::from_literal)
                .unwrap_or_default(),
            description: values.text("description").unwrap_or_default().to_string(),
            amount: values.amount("amount").unwrap_or_default(),
            date: values.date("date").unwrap_or_default(),
        })
    }
}

impl Expense {
    pub fn record(project_id: EntityId, draft: ExpenseDraft) -> Self {
        Expense {
            id: EntityId::generate(),
            project_id,
            category: draft.category,
            description: draft.description,
            amount: draft.amount,
            date: draft.date,
            created_at: Utc::now(),
        }
    }
}

impl Record for Expense {
    const KEY: CollectionKey = CollectionKey::Expenses;

    fn id(&self) -> &EntityId {
        &self.id
    }
}
