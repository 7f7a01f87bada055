//! Project detail: the overview + financial summary bundle the detail view
//! renders.

use serde::Serialize;

use crate::domain::entities::{Expense, Payment, Project};
use crate::domain::ports::StorageBackend;
use crate::domain::services::summary::{expenses_for, payments_for, summarize, ProjectSummary};
use crate::domain::value_objects::EntityId;
use crate::error::{LedgerError, LedgerResult};
use crate::store::Ledger;

/// How many recent entries the detail view shows per section.
pub const RECENT_LIMIT: usize = 5;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectDetail {
    pub project: Project,
    pub summary: ProjectSummary,
    /// Most recent first, capped at [`RECENT_LIMIT`].
    pub recent_expenses: Vec<Expense>,
    pub recent_payments: Vec<Payment>,
    pub expense_count: usize,
    pub payment_count: usize,
}

pub fn project_detail<B: StorageBackend>(
    ledger: &mut Ledger<B>,
    id: &EntityId,
) -> LedgerResult<ProjectDetail> {
    let project: Project = ledger
        .find(id)
        .ok_or_else(|| LedgerError::ProjectNotFound { id: id.to_string() })?;

    let expenses = ledger.collection::<Expense>();
    let payments = ledger.collection::<Payment>();
    let summary = summarize(id, &expenses, &payments);

    let mine = expenses_for(&expenses, id);
    let expense_count = mine.len();
    let recent_expenses: Vec<Expense> =
        mine.into_iter().rev().take(RECENT_LIMIT).cloned().collect();

    let mine = payments_for(&payments, id);
    let payment_count = mine.len();
    let recent_payments: Vec<Payment> =
        mine.into_iter().rev().take(RECENT_LIMIT).cloned().collect();

    Ok(ProjectDetail {
        project,
        summary,
        recent_expenses,
        recent_payments,
        expense_count,
        payment_count,
    })
}
