//! Core domain entities.
//!
//! Entities are plain serde records matching the stored JSON documents
//! (camelCase field names, lowercase/kebab-case enum literals). Construction
//! goes through draft structs built from validated form input; ids and
//! timestamps are assigned here, never by callers.

mod contact;
mod expense;
mod payment;
mod project;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::domain::value_objects::{CollectionKey, EntityId};

pub use contact::{
    AssignmentStatus, ContactStatus, Labor, LaborAssignment, Supplier, SupplyCategory,
};
pub use expense::{Expense, ExpenseCategory, ExpenseDraft};
pub use payment::{Payment, PaymentDirection, PaymentDraft, PaymentStatus};
pub use project::{Project, ProjectDraft, ProjectStatus};

/// A storable entity: lives in exactly one collection document and carries a
/// unique id.
pub trait Record: Serialize + DeserializeOwned + Clone {
    const KEY: CollectionKey;

    fn id(&self) -> &EntityId;
}
