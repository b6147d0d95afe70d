//! moneyHumanizer Library
//!
//! Re-exports modules for integration testing and the binaries.

pub mod api;
pub mod config;
pub mod domain;
mod error;

pub use config::{Config, LogFormat};
pub use domain::{humanize, Amount, EnglishMoneyHumanizer, HumanizeError, MoneyHumanizer};
pub use error::{AppError, AppResult, ErrorResponse};
