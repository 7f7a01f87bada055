//! Property tests for the fixed-point money type.

use proptest::prelude::*;

use siteledger::Money;

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: the plain decimal rendering parses back to the same value.
    #[test]
    fn property_plain_round_trips(paise in -1_000_000_000_00i64..=1_000_000_000_00i64) {
        let money = Money::from_paise(paise);
        prop_assert_eq!(Money::parse(&money.plain()), Ok(money));
    }

    /// PROPERTY: JSON serialization round-trips exactly.
    #[test]
    fn property_serde_round_trips(paise in -1_000_000_000_00i64..=1_000_000_000_00i64) {
        let money = Money::from_paise(paise);
        let json = serde_json::to_string(&money).unwrap();
        let back: Money = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(back, money);
    }

    /// PROPERTY: grouped display only ever inserts commas and a fraction.
    #[test]
    fn property_display_strips_to_plain_digits(paise in 0i64..=1_000_000_000_00i64) {
        let money = Money::from_paise(paise);
        let grouped = money.to_string().replace(',', "");
        prop_assert_eq!(Money::parse(&grouped), Ok(money));
    }

    /// PROPERTY: parse never panics on arbitrary short input.
    #[test]
    fn property_parse_never_panics(input in "(?s).{0,64}") {
        let _ = Money::parse(&input);
    }
}
