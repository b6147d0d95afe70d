//! English number words
//!
//! Table-driven recursion over a digit sequence. Values under one hundred
//! are named directly; anything longer is split at the largest digit group
//! that fits ("thousand", "million", ...), the leading part is named
//! recursively, and the remainder follows after the group name.

use std::fmt;

use super::digits::{strip_leading_zeros, DigitSequence};

/// Uniquely named numbers, indexed by value
const SMALL_NUMBERS: [&str; 20] = [
    "zero",
    "one",
    "two",
    "three",
    "four",
    "five",
    "six",
    "seven",
    "eight",
    "nine",
    "ten",
    "eleven",
    "twelve",
    "thirteen",
    "fourteen",
    "fifteen",
    "sixteen",
    "seventeen",
    "eighteen",
    "nineteen",
];

/// Multiples of ten, indexed by `tens digit - 1`
const TENS: [&str; 9] = [
    "ten", "twenty", "thirty", "forty", "fifty", "sixty", "seventy", "eighty", "ninety",
];

/// A named magnitude tier, selected by digit count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DigitGroup {
    Singular,
    Teen,
    Hundred,
    Thousand,
    Million,
    Billion,
    Trillion,
    Quadrillion,
    Quintillion,
    Googol,
}

/// Minimum digit count for each group, strictly increasing.
///
/// Nothing sits between quintillion (19) and googol (101), so 20 to 100
/// digit values are framed in quintillions.
pub const DIGIT_GROUPS: [(usize, DigitGroup); 10] = [
    (1, DigitGroup::Singular),
    (2, DigitGroup::Teen),
    (3, DigitGroup::Hundred),
    (4, DigitGroup::Thousand),
    (7, DigitGroup::Million),
    (10, DigitGroup::Billion),
    (13, DigitGroup::Trillion),
    (16, DigitGroup::Quadrillion),
    (19, DigitGroup::Quintillion),
    (101, DigitGroup::Googol),
];

impl DigitGroup {
    /// Largest group whose threshold is at most `len`.
    ///
    /// Lengths below the first threshold resolve to `Singular`.
    pub fn for_length(len: usize) -> Self {
        DIGIT_GROUPS
            .iter()
            .rev()
            .find(|(threshold, _)| *threshold <= len)
            .map_or(DigitGroup::Singular, |&(_, group)| group)
    }

    /// Minimum digit count for this group
    pub fn threshold(self) -> usize {
        DIGIT_GROUPS
            .iter()
            .find(|(_, group)| *group == self)
            .map_or(1, |&(threshold, _)| threshold)
    }

    pub fn name(self) -> &'static str {
        match self {
            DigitGroup::Singular => "singular",
            DigitGroup::Teen => "teen",
            DigitGroup::Hundred => "hundred",
            DigitGroup::Thousand => "thousand",
            DigitGroup::Million => "million",
            DigitGroup::Billion => "billion",
            DigitGroup::Trillion => "trillion",
            DigitGroup::Quadrillion => "quadrillion",
            DigitGroup::Quintillion => "quintillion",
            DigitGroup::Googol => "googol",
        }
    }
}

impl fmt::Display for DigitGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Name the value held by `digits` in English words.
///
/// Leading zeros are ignored; an all-zero sequence is "zero".
pub fn humanize_digits(digits: &DigitSequence) -> String {
    humanize_slice(digits.digits())
}

fn humanize_slice(digits: &[u8]) -> String {
    let digits = strip_leading_zeros(digits);

    if digits.len() < 3 {
        return below_hundred(digits);
    }

    let group = DigitGroup::for_length(digits.len());
    let (prefix, rest) = digits.split_at(digits.len() - (group.threshold() - 1));

    let mut words = humanize_slice(prefix);
    words.push(' ');
    words.push_str(group.name());

    let remainder = strip_leading_zeros(rest);
    if !remainder.is_empty() {
        // "and" only joins a trailing value between 1 and 99
        if remainder.len() <= 2 {
            words.push_str(" and");
        }
        words.push(' ');
        words.push_str(&humanize_slice(remainder));
    }

    words
}

/// Name a value of at most two significant digits.
fn below_hundred(digits: &[u8]) -> String {
    let value = digits
        .iter()
        .fold(0usize, |acc, &d| acc * 10 + usize::from(d));

    if value < SMALL_NUMBERS.len() {
        return SMALL_NUMBERS[value].to_string();
    }

    let tens = TENS[usize::from(digits[0]) - 1];
    match digits[1] {
        0 => tens.to_string(),
        ones => format!("{tens}-{}", SMALL_NUMBERS[usize::from(ones)]),
    }
}
