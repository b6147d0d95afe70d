//! Domain module
//!
//! Decimal decomposition and English word assembly. Nothing here knows
//! about HTTP.

pub mod amount;
pub mod digits;
pub mod error;
pub mod humanizer;
pub mod words;

pub use amount::Amount;
pub use digits::{decompose, Decomposition, DigitSequence};
pub use error::HumanizeError;
pub use humanizer::{humanize, EnglishMoneyHumanizer, MoneyHumanizer};
pub use words::{humanize_digits, DigitGroup};
