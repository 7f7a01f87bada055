//! Property tests for the store: save/load is identity, get is idempotent.

use chrono::NaiveDate;
use proptest::prelude::*;

use siteledger::domain::entities::{Expense, ExpenseCategory, ExpenseDraft};
use siteledger::{EntityId, Ledger, MemoryStorage, Money};

fn expense() -> impl Strategy<Value = Expense> {
    (
        "[a-z0-9-]{1,12}",
        "[A-Za-z0-9 ]{0,24}",
        0i64..=10_000_000_00,
        prop_oneof![
            Just(ExpenseCategory::Materials),
            Just(ExpenseCategory::Labor),
            Just(ExpenseCategory::Equipment),
            Just(ExpenseCategory::Transport),
            Just(ExpenseCategory::Other),
        ],
    )
        .prop_map(|(project, description, paise, category)| {
            Expense::record(
                EntityId::from(project.as_str()),
                ExpenseDraft {
                    category,
                    description,
                    amount: Money::from_paise(paise),
                    date: NaiveDate::from_ymd_opt(2026, 2, 1).unwrap(),
                },
            )
        })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: save then load returns exactly what was saved, and a second
    /// load returns it again.
    #[test]
    fn property_save_load_identity(expenses in proptest::collection::vec(expense(), 0..16)) {
        let mut ledger = Ledger::new(MemoryStorage::new());
        ledger.save_collection(&expenses);

        let loaded = ledger.collection::<Expense>();
        prop_assert_eq!(&loaded, &expenses);
        // Idempotent between sets
        prop_assert_eq!(ledger.collection::<Expense>(), loaded);
    }

    /// PROPERTY: the round trip survives the raw JSON boundary (a fresh
    /// ledger over the same backend state reads the same collection).
    #[test]
    fn property_round_trip_through_raw_document(
        expenses in proptest::collection::vec(expense(), 0..16),
    ) {
        let mut ledger = Ledger::new(MemoryStorage::new());
        ledger.save_collection(&expenses);

        let raw = ledger
            .backend()
            .raw(siteledger::CollectionKey::Expenses)
            .unwrap_or("[]")
            .to_string();

        let mut backend = MemoryStorage::new();
        use siteledger::StorageBackend;
        backend.write_raw(siteledger::CollectionKey::Expenses, &raw).unwrap();
        let mut fresh = Ledger::new(backend);
        prop_assert_eq!(fresh.collection::<Expense>(), expenses);
    }
}
