//! Payment use cases.

use crate::domain::entities::{Payment, PaymentDraft};
use crate::domain::ports::StorageBackend;
use crate::domain::services::summary::payments_for;
use crate::domain::value_objects::EntityId;
use crate::error::LedgerResult;
use crate::store::Ledger;

use super::expenses::ensure_project_exists;

/// Record a payment against an existing project.
pub fn record_payment<B: StorageBackend>(
    ledger: &mut Ledger<B>,
    project_id: &EntityId,
    draft: PaymentDraft,
) -> LedgerResult<Payment> {
    ensure_project_exists(ledger, project_id)?;
    let payment = Payment::record(project_id.clone(), draft);
    let mut payments = ledger.collection::<Payment>();
    payments.push(payment.clone());
    ledger.save_collection(&payments);
    Ok(payment)
}

/// A project's payments in insertion order; empty for unknown projects.
pub fn project_payments<B: StorageBackend>(
    ledger: &mut Ledger<B>,
    project_id: &EntityId,
) -> Vec<Payment> {
    let payments = ledger.collection::<Payment>();
    payments_for(&payments, project_id)
        .into_iter()
        .cloned()
        .collect()
}
