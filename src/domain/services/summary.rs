//! Financial aggregation over the expense and payment collections.
//!
//! Pure and stateless: callers pass full collections and a project id. A
//! project with no entries yields zero everywhere, never an error.

use serde::Serialize;

use crate::domain::entities::{Expense, Payment, PaymentDirection};
use crate::domain::value_objects::{EntityId, Money};

/// Derived financial figures for one project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ProjectSummary {
    pub total_expenses: Money,
    pub total_received: Money,
    pub total_paid: Money,
    pub net_balance: Money,
}

impl ProjectSummary {
    /// Budget left after expenses. Negative when spending exceeds budget.
    pub fn budget_remaining(&self, total_budget: Money) -> Money {
        total_budget - self.total_expenses
    }
}

/// Expenses belonging to a project, in collection insertion order.
pub fn expenses_for<'a>(expenses: &'a [Expense], project_id: &EntityId) -> Vec<&'a Expense> {
    expenses
        .iter()
        .filter(|e| e.project_id == *project_id)
        .collect()
}

/// Payments belonging to a project, in collection insertion order.
pub fn payments_for<'a>(payments: &'a [Payment], project_id: &EntityId) -> Vec<&'a Payment> {
    payments
        .iter()
        .filter(|p| p.project_id == *project_id)
        .collect()
}

pub fn total_expenses(expenses: &[Expense], project_id: &EntityId) -> Money {
    expenses_for(expenses, project_id)
        .into_iter()
        .map(|e| e.amount)
        .sum()
}

pub fn total_received(payments: &[Payment], project_id: &EntityId) -> Money {
    directed_total(payments, project_id, PaymentDirection::Received)
}

pub fn total_paid(payments: &[Payment], project_id: &EntityId) -> Money {
    directed_total(payments, project_id, PaymentDirection::Given)
}

fn directed_total(
    payments: &[Payment],
    project_id: &EntityId,
    direction: PaymentDirection,
) -> Money {
    payments_for(payments, project_id)
        .into_iter()
        .filter(|p| p.direction == direction)
        .map(|p| p.amount)
        .sum()
}

/// `received - paid - expenses`; may be negative.
pub fn net_balance(expenses: &[Expense], payments: &[Payment], project_id: &EntityId) -> Money {
    total_received(payments, project_id)
        - total_paid(payments, project_id)
        - total_expenses(expenses, project_id)
}

/// All four figures in one pass over the collections.
pub fn summarize(
    project_id: &EntityId,
    expenses: &[Expense],
    payments: &[Payment],
) -> ProjectSummary {
    let total_expenses = total_expenses(expenses, project_id);
    let total_received = total_received(payments, project_id);
    let total_paid = total_paid(payments, project_id);
    ProjectSummary {
        total_expenses,
        total_received,
        total_paid,
        net_balance: total_received - total_paid - total_expenses,
    }
}
