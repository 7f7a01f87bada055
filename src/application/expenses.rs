//! Expense use cases.

use crate::domain::entities::{Expense, ExpenseDraft, Project};
use crate::domain::ports::StorageBackend;
use crate::domain::services::summary::expenses_for;
use crate::domain::value_objects::EntityId;
use crate::error::{LedgerError, LedgerResult};
use crate::store::Ledger;

/// Record an expense against an existing project.
pub fn record_expense<B: StorageBackend>(
    ledger: &mut Ledger<B>,
    project_id: &EntityId,
    draft: ExpenseDraft,
) -> LedgerResult<Expense> {
    ensure_project_exists(ledger, project_id)?;
    let expense = Expense::record(project_id.clone(), draft);
    let mut expenses = ledger.collection::<Expense>();
    expenses.push(expense.clone());
    ledger.save_collection(&expenses);
    Ok(expense)
}

/// A project's expenses in insertion order; empty for unknown projects.
pub fn project_expenses<B: StorageBackend>(
    ledger: &mut Ledger<B>,
    project_id: &EntityId,
) -> Vec<Expense> {
    let expenses = ledger.collection::<Expense>();
    expenses_for(&expenses, project_id)
        .into_iter()
        .cloned()
        .collect()
}

pub(crate) fn ensure_project_exists<B: StorageBackend>(
    ledger: &mut Ledger<B>,
    project_id: &EntityId,
) -> LedgerResult<()> {
    if ledger.find::<Project>(project_id).is_some() {
        Ok(())
    } else {
        Err(LedgerError::ProjectNotFound {
            id: project_id.to_string(),
        })
    }
}
