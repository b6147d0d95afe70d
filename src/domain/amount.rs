//! Amount type
//!
//! A monetary amount as received from the outside world. Any finite
//! decimal is accepted, negative values included; the only failure is
//! text that does not read as a number.

use rust_decimal::Decimal;
use std::fmt;
use std::str::FromStr;

use super::error::HumanizeError;

/// Largest exponent magnitude accepted in scientific notation
const MAX_EXPONENT: u32 = 1024;

/// A parsed monetary amount.
///
/// # Example
/// ```
/// use rust_decimal::Decimal;
/// use money_humanizer::domain::Amount;
///
/// let amount: Amount = " 1.5e3 ".parse().unwrap();
/// assert_eq!(amount.value(), Decimal::new(1500, 0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Amount(Decimal);

impl Amount {
    /// Get the underlying Decimal value.
    pub fn value(&self) -> Decimal {
        self.0
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Amount {
    type Err = HumanizeError;

    /// Parse plain (`-12.50`) or scientific (`1.25e2`) notation.
    /// Surrounding whitespace is ignored.
    ///
    /// Scientific input is rewritten to plain notation first, so both forms
    /// of the same number parse to the same amount.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let well_formed = !trimmed.is_empty()
            && trimmed
                .chars()
                .all(|c| c.is_ascii_digit() || matches!(c, '+' | '-' | '.' | 'e' | 'E'));
        if !well_formed {
            return Err(HumanizeError::invalid_decimal(trimmed));
        }

        let parsed = if trimmed.contains(['e', 'E']) {
            expand_scientific(trimmed)
                .ok_or_else(|| HumanizeError::invalid_decimal(trimmed))
                .and_then(|plain| {
                    Decimal::from_str(&plain).map_err(|_| HumanizeError::invalid_decimal(trimmed))
                })
        } else {
            Decimal::from_str(trimmed).map_err(|_| HumanizeError::invalid_decimal(trimmed))
        };

        parsed.map(Self)
    }
}

/// Rewrite `<mantissa>e<exponent>` as plain decimal text.
///
/// Returns `None` when the mantissa is not `[sign]digits[.digits]` or the
/// exponent is not an integer within [`MAX_EXPONENT`].
fn expand_scientific(text: &str) -> Option<String> {
    let (mantissa, exponent) = text.split_once(['e', 'E'])?;
    let exponent: i32 = exponent.parse().ok()?;
    if exponent.unsigned_abs() > MAX_EXPONENT {
        return None;
    }

    let (sign, unsigned) = match mantissa.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", mantissa.strip_prefix('+').unwrap_or(mantissa)),
    };
    let (int_part, frac_part) = unsigned.split_once('.').unwrap_or((unsigned, ""));
    let digits = format!("{int_part}{frac_part}");
    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }

    let point = int_part.len() as i64 + i64::from(exponent);
    let plain = if point <= 0 {
        format!("0.{}{digits}", "0".repeat(point.unsigned_abs() as usize))
    } else if point as usize >= digits.len() {
        format!("{digits}{}", "0".repeat(point as usize - digits.len()))
    } else {
        let (whole, fraction) = digits.split_at(point as usize);
        format!("{whole}.{fraction}")
    };

    Some(format!("{sign}{plain}"))
}
