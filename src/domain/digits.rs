//! Digit sequences
//!
//! Splits a signed decimal into a sign, the digits of its whole part and the
//! two digits of its cents part. Everything downstream works on digits
//! rather than on the decimal itself, so magnitudes larger than any
//! primitive integer can still be named.

use rust_decimal::{Decimal, RoundingStrategy};
use std::fmt;
use std::str::FromStr;

use super::error::HumanizeError;

/// Number of fractional digits kept for the cents part
pub const CENT_PLACES: u32 = 2;

/// Cents value that no longer fits in two digits
const CENTS_PER_DOLLAR: u128 = 100;

/// Ordered decimal digits, most significant first.
///
/// Sequences built by [`decompose`] never carry a leading zero, except the
/// single `0` for zero and the fixed-width cents part (`[0, 5]` for five
/// cents). Sequences built by hand may be padded; the word assembler
/// ignores leading zeros.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DigitSequence(Vec<u8>);

impl DigitSequence {
    /// Build from raw digits.
    ///
    /// # Errors
    /// - `HumanizeError::EmptyDigits` if `digits` is empty
    /// - `HumanizeError::DigitOutOfRange` if any element is above 9
    pub fn from_digits(digits: Vec<u8>) -> Result<Self, HumanizeError> {
        if digits.is_empty() {
            return Err(HumanizeError::EmptyDigits);
        }

        if let Some(position) = digits.iter().position(|&d| d > 9) {
            return Err(HumanizeError::DigitOutOfRange {
                position,
                value: digits[position],
            });
        }

        Ok(Self(digits))
    }

    /// Digits of `value` without padding.
    pub fn from_u128(value: u128) -> Self {
        Self::padded(value, 1)
    }

    /// Digits of `value`, left-padded with zeros to at least `width` digits.
    pub fn padded(mut value: u128, width: usize) -> Self {
        let mut digits = Vec::with_capacity(width.max(1));
        loop {
            digits.push((value % 10) as u8);
            value /= 10;
            if value == 0 {
                break;
            }
        }
        while digits.len() < width {
            digits.push(0);
        }
        digits.reverse();
        Self(digits)
    }

    /// All digits, padding included
    pub fn digits(&self) -> &[u8] {
        &self.0
    }

    /// Digits with leading zeros removed; empty when the value is zero.
    pub fn significant(&self) -> &[u8] {
        strip_leading_zeros(&self.0)
    }

    /// Whether every digit is zero
    pub fn is_zero(&self) -> bool {
        self.significant().is_empty()
    }

    /// Whether the value is strictly greater than one.
    ///
    /// Works for sequences of any length, unlike [`Self::to_u128`].
    pub fn exceeds_one(&self) -> bool {
        !matches!(self.significant(), [] | [1])
    }

    /// Sum of all digits
    pub fn digit_sum(&self) -> u32 {
        self.0.iter().map(|&d| u32::from(d)).sum()
    }

    /// Numeric value, or `None` when it does not fit in a `u128`.
    pub fn to_u128(&self) -> Option<u128> {
        self.0.iter().try_fold(0u128, |acc, &d| {
            acc.checked_mul(10)?.checked_add(u128::from(d))
        })
    }
}

impl fmt::Display for DigitSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for digit in &self.0 {
            write!(f, "{digit}")?;
        }
        Ok(())
    }
}

impl FromStr for DigitSequence {
    type Err = HumanizeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s
            .chars()
            .enumerate()
            .map(|(position, found)| {
                found
                    .to_digit(10)
                    .map(|d| d as u8)
                    .ok_or(HumanizeError::InvalidDigit { position, found })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Self::from_digits(digits)
    }
}

/// Drop leading zeros; an all-zero slice becomes empty.
pub(crate) fn strip_leading_zeros(digits: &[u8]) -> &[u8] {
    let start = digits
        .iter()
        .position(|&d| d != 0)
        .unwrap_or(digits.len());
    &digits[start..]
}

/// A decimal split into the pieces the word assembler needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decomposition {
    /// Value was strictly below zero
    pub negative: bool,

    /// Whole part of the magnitude
    pub whole: DigitSequence,

    /// Cents, always exactly two digits
    pub cents: DigitSequence,

    /// Cents rounded up to a full dollar and were moved into `whole`
    pub carried: bool,
}

impl Decomposition {
    /// Prefix placed before the words: `"minus "` or nothing
    pub fn sign(&self) -> &'static str {
        if self.negative {
            "minus "
        } else {
            ""
        }
    }
}

/// Split `value` into sign, whole digits and two cents digits.
///
/// The fractional part is rounded half-to-even to two places. When that
/// rounding reaches a full dollar (`1.996`, `0.995`) the extra dollar is
/// added to the whole part and the cents become `00`.
pub fn decompose(value: Decimal) -> Decomposition {
    let negative = value < Decimal::ZERO;
    let magnitude = value.abs();
    let whole = magnitude.trunc();
    let fraction = (magnitude - whole)
        .round_dp_with_strategy(CENT_PLACES, RoundingStrategy::MidpointNearestEven);

    let mut whole_units = units(whole, 0);
    let mut cent_units = units(fraction, CENT_PLACES);
    let carried = cent_units >= CENTS_PER_DOLLAR;

    if carried {
        tracing::debug!(%value, "cents rounded up to a whole dollar");
        whole_units += 1;
        cent_units -= CENTS_PER_DOLLAR;
    }

    Decomposition {
        negative,
        whole: DigitSequence::from_u128(whole_units),
        cents: DigitSequence::padded(cent_units, CENT_PLACES as usize),
        carried,
    }
}

/// Integer value of `magnitude * 10^places` for a non-negative decimal,
/// dropping any digits beyond `places`.
fn units(magnitude: Decimal, places: u32) -> u128 {
    let mantissa = magnitude.mantissa().unsigned_abs();
    let scale = magnitude.scale();

    if scale <= places {
        mantissa * 10u128.pow(places - scale)
    } else {
        mantissa / 10u128.pow(scale - places)
    }
}
