//! SiteLedger - construction project ledger
//!
//! SiteLedger tracks construction projects together with the expenses and
//! payments recorded against them, and derives per-project financial
//! summaries. All state lives in a local key-value store of JSON collection
//! documents; there is no server and no network.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod store;

// Re-exports for convenience
pub use config::{default_config_path, default_data_dir, Config, ConfigWarning};
pub use domain::entities::{
    Expense, ExpenseCategory, ExpenseDraft, Payment, PaymentDirection, PaymentDraft,
    PaymentStatus, Project, ProjectDraft, ProjectStatus, Record,
};
pub use domain::ports::{StorageBackend, StorageError};
pub use domain::services::summary::{net_balance, summarize, ProjectSummary};
pub use domain::services::validation::{validate, FieldErrors, FormInput, FormSchema};
pub use domain::value_objects::{CollectionKey, EntityId, Money};
pub use error::{LedgerError, LedgerResult};
pub use infrastructure::storage::{FileStorage, MemoryStorage};
pub use store::{DeletedProject, Ledger};
