//! Core business logic abstractions

pub mod config;
pub mod currency;
pub mod log;
pub mod observable;

// Re-export main types for cleaner imports
pub use currency::{
    CurrencyAcronym, CurrencyClient, CurrencyType, CurrencyTypeResult, ExchangeRateResult,
    Outcome,
};
pub use observable::Observable;
