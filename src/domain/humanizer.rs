//! Money humanizer
//!
//! Joins the dollar and cent clauses produced by the word assembler.

use rust_decimal::Decimal;

use super::digits::{decompose, DigitSequence};
use super::words::humanize_digits;

/// Converts a monetary amount into words.
///
/// The HTTP layer holds one of these behind an `Arc`, so implementations
/// must be shareable across request tasks.
pub trait MoneyHumanizer: Send + Sync {
    fn humanize(&self, value: Decimal) -> String;
}

/// English dollars-and-cents humanizer.
///
/// # Example
/// ```
/// use rust_decimal::Decimal;
/// use money_humanizer::domain::{EnglishMoneyHumanizer, MoneyHumanizer};
///
/// let humanizer = EnglishMoneyHumanizer::new();
/// assert_eq!(
///     humanizer.humanize(Decimal::new(-525, 2)),
///     "minus five dollars and twenty-five cents"
/// );
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct EnglishMoneyHumanizer;

impl EnglishMoneyHumanizer {
    pub fn new() -> Self {
        Self
    }
}

impl MoneyHumanizer for EnglishMoneyHumanizer {
    fn humanize(&self, value: Decimal) -> String {
        humanize(value)
    }
}

/// Humanize `value` as dollars and cents.
///
/// The plural unit is used only above one, so zero reads "zero dollar".
/// The cents clause is left out when the cents round to zero.
pub fn humanize(value: Decimal) -> String {
    let parts = decompose(value);

    let mut humanized = format!(
        "{}{} {}",
        parts.sign(),
        humanize_digits(&parts.whole),
        unit(&parts.whole, "dollar", "dollars"),
    );

    if parts.cents.digit_sum() > 0 {
        humanized.push_str(" and ");
        humanized.push_str(&humanize_digits(&parts.cents));
        humanized.push(' ');
        humanized.push_str(unit(&parts.cents, "cent", "cents"));
    }

    humanized
}

fn unit(count: &DigitSequence, singular: &'static str, plural: &'static str) -> &'static str {
    if count.exceeds_one() {
        plural
    } else {
        singular
    }
}
