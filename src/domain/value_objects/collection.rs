//! Collection keys for the key-value store.

use std::fmt;

/// Key of one stored collection document.
///
/// Each key maps to an independent JSON array; there is no relational schema
/// between them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CollectionKey {
    Projects,
    Expenses,
    Payments,
    Labor,
    Suppliers,
    LaborAssignments,
}

impl CollectionKey {
    pub const ALL: [CollectionKey; 6] = [
        CollectionKey::Projects,
        CollectionKey::Expenses,
        CollectionKey::Payments,
        CollectionKey::Labor,
        CollectionKey::Suppliers,
        CollectionKey::LaborAssignments,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CollectionKey::Projects => "projects",
            CollectionKey::Expenses => "expenses",
            CollectionKey::Payments => "payments",
            CollectionKey::Labor => "labor",
            CollectionKey::Suppliers => "suppliers",
            CollectionKey::LaborAssignments => "labor-assignments",
        }
    }
}

impl fmt::Display for CollectionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
