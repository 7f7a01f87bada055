//! Property tests for form validation.

use proptest::prelude::*;

use siteledger::domain::services::validation::{
    expense_schema, payment_schema, project_schema, validate, FormInput,
};

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: validation never panics, whatever strings arrive.
    #[test]
    fn property_validate_never_panics(
        category in "(?s).{0,32}",
        description in "(?s).{0,32}",
        amount in "(?s).{0,32}",
        date in "(?s).{0,32}",
    ) {
        let input = FormInput::new()
            .with("category", category)
            .with("description", description)
            .with("amount", amount)
            .with("date", date);
        let _ = validate(&input, expense_schema());
        let _ = validate(&input, payment_schema());
        let _ = validate(&input, project_schema());
    }

    /// PROPERTY: whitespace-only required fields always fail with the
    /// field's own message.
    #[test]
    fn property_blank_required_fields_fail(blank in "[ \t]{0,8}") {
        let input = FormInput::new().with("description", blank);
        let errors = validate(&input, expense_schema()).unwrap_err();
        prop_assert_eq!(
            errors.get("description").map(String::as_str),
            Some("Description is required")
        );
    }

    /// PROPERTY: a fully valid expense form always validates, and the parsed
    /// amount is non-negative.
    #[test]
    fn property_valid_expense_forms_validate(
        rupees in 0i64..=1_000_000_000,
        description in "[A-Za-z][A-Za-z0-9 ]{0,24}",
    ) {
        let input = FormInput::new()
            .with("category", "materials")
            .with("description", description)
            .with("amount", rupees.to_string())
            .with("date", "2026-02-01");
        let values = validate(&input, expense_schema()).unwrap();
        let amount = values.amount("amount").unwrap();
        prop_assert!(!amount.is_negative());
    }
}
