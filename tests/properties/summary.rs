//! Property tests for the aggregation engine.

use chrono::NaiveDate;
use proptest::prelude::*;

use siteledger::domain::entities::{
    Expense, ExpenseCategory, ExpenseDraft, Payment, PaymentDirection, PaymentDraft,
    PaymentStatus,
};
use siteledger::domain::services::summary::{
    net_balance, summarize, total_expenses, total_paid, total_received,
};
use siteledger::{EntityId, Money};

fn project_id() -> impl Strategy<Value = EntityId> {
    prop_oneof![
        Just(EntityId::from("site-a")),
        Just(EntityId::from("site-b")),
        Just(EntityId::from("site-c")),
    ]
}

fn amount() -> impl Strategy<Value = Money> {
    (0i64..=10_000_000_00).prop_map(Money::from_paise)
}

fn expense() -> impl Strategy<Value = Expense> {
    (project_id(), amount()).prop_map(|(project, amount)| {
        Expense::record(
            project,
            ExpenseDraft {
                category: ExpenseCategory::Other,
                description: "entry".to_string(),
                amount,
                date: NaiveDate::from_ymd_opt(2026, 2, 1).unwrap(),
            },
        )
    })
}

fn payment() -> impl Strategy<Value = Payment> {
    (project_id(), amount(), prop::bool::ANY).prop_map(|(project, amount, received)| {
        Payment::record(
            project,
            PaymentDraft {
                direction: if received {
                    PaymentDirection::Received
                } else {
                    PaymentDirection::Given
                },
                counterparty: "counterparty".to_string(),
                amount,
                description: "entry".to_string(),
                date: NaiveDate::from_ymd_opt(2026, 2, 10).unwrap(),
                status: PaymentStatus::Completed,
            },
        )
    })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: the balance identity holds for any set of entries.
    #[test]
    fn property_net_balance_identity(
        expenses in proptest::collection::vec(expense(), 0..24),
        payments in proptest::collection::vec(payment(), 0..24),
    ) {
        let id = EntityId::from("site-a");
        prop_assert_eq!(
            net_balance(&expenses, &payments, &id),
            total_received(&payments, &id) - total_paid(&payments, &id)
                - total_expenses(&expenses, &id)
        );

        let summary = summarize(&id, &expenses, &payments);
        prop_assert_eq!(
            summary.net_balance,
            summary.total_received - summary.total_paid - summary.total_expenses
        );
    }

    /// PROPERTY: a project with no entries always totals zero.
    #[test]
    fn property_untouched_project_is_zero(
        expenses in proptest::collection::vec(expense(), 0..24),
        payments in proptest::collection::vec(payment(), 0..24),
    ) {
        let ghost = EntityId::from("never-used");
        let summary = summarize(&ghost, &expenses, &payments);
        prop_assert_eq!(summary.total_expenses, Money::ZERO);
        prop_assert_eq!(summary.total_received, Money::ZERO);
        prop_assert_eq!(summary.total_paid, Money::ZERO);
        prop_assert_eq!(summary.net_balance, Money::ZERO);
    }

    /// PROPERTY: totals are order-independent.
    #[test]
    fn property_totals_ignore_order(
        mut expenses in proptest::collection::vec(expense(), 0..24),
    ) {
        let id = EntityId::from("site-a");
        let forward = total_expenses(&expenses, &id);
        expenses.reverse();
        prop_assert_eq!(total_expenses(&expenses, &id), forward);
    }
}
