use std::error::Error;
use std::fmt;

#[derive(Debug)]
pub enum CurrencyError {
    UnknownCurrency(String),
    CacheError(String),
}

impl fmt::Display for CurrencyError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            CurrencyError::UnknownCurrency(code) => {
                write!(f, "Unknown currency code: {}", code)
            }
            CurrencyError::CacheError(msg) => write!(f, "Cache error: {}", msg),
        }
    }
}

impl Error for CurrencyError {}
