//! Property tests for the humanizer laws

use money_humanizer::domain::{humanize, humanize_digits, DigitSequence};
use proptest::prelude::*;
use rust_decimal::Decimal;

fn words(n: u128) -> String {
    humanize_digits(&DigitSequence::from_u128(n))
}

/// Decimals with up to four fractional digits
fn any_amount() -> impl Strategy<Value = Decimal> {
    (any::<i64>(), 0u32..=4).prop_map(|(mantissa, scale)| Decimal::new(mantissa, scale))
}

proptest! {
    #[test]
    fn prop_deterministic(value in any_amount()) {
        prop_assert_eq!(humanize(value), humanize(value));
    }

    #[test]
    fn prop_sign_law(mantissa in 1i64..i64::MAX, scale in 0u32..=4) {
        let value = Decimal::new(mantissa, scale);
        prop_assert_eq!(humanize(-value), format!("minus {}", humanize(value)));
    }

    #[test]
    fn prop_dollar_pluralization(dollars in 0u64..10_000_000) {
        let humanized = humanize(Decimal::from(dollars));
        prop_assert_eq!(humanized.ends_with(" dollars"), dollars > 1);
        prop_assert!(humanized.ends_with(" dollar") || humanized.ends_with(" dollars"));
    }

    #[test]
    fn prop_cent_pluralization(dollars in 0i64..1_000, cents in 1i64..100) {
        let humanized = humanize(Decimal::new(dollars * 100 + cents, 2));
        prop_assert_eq!(humanized.ends_with(" cents"), cents > 1);
        prop_assert!(humanized.ends_with(" cent") || humanized.ends_with(" cents"));
    }

    #[test]
    fn prop_zero_cents_suppressed(dollars in 0i64..1_000_000_000) {
        let humanized = humanize(Decimal::new(dollars * 100, 2));
        prop_assert!(!humanized.contains(" cent"));
    }

    #[test]
    fn prop_thousand_conjunction(leading in 1u128..1_000, remainder in 0u128..1_000) {
        let humanized = words(leading * 1_000 + remainder);
        let head = format!("{} thousand", words(leading));

        let expected = match remainder {
            0 => head,
            1..=99 => format!("{head} and {}", words(remainder)),
            _ => format!("{head} {}", words(remainder)),
        };
        prop_assert_eq!(humanized, expected);
    }

    #[test]
    fn prop_hundred_conjunction(hundreds in 1u128..10, remainder in 0u128..100) {
        let humanized = words(hundreds * 100 + remainder);
        let head = format!("{} hundred", words(hundreds));

        let expected = if remainder == 0 {
            head
        } else {
            format!("{head} and {}", words(remainder))
        };
        prop_assert_eq!(humanized, expected);
    }

    #[test]
    fn prop_leading_zeros_do_not_change_words(n in 0u128..1_000_000_000, pad in 0usize..6) {
        let padded: DigitSequence = format!("{}{}", "0".repeat(pad), n).parse().unwrap();
        prop_assert_eq!(humanize_digits(&padded), words(n));
    }
}
