pub mod context;
pub mod currency_code;
pub mod currency_errors;
pub mod display_service;
pub mod format;
pub mod registry;

pub use context::CurrencyContext;
pub use currency_code::CurrencyCode;
pub use currency_errors::CurrencyError;
pub use display_service::{CurrencyDisplayService, CurrencyDisplayServiceTrait};

#[cfg(test)]
pub(crate) mod tests;
