use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::currency_errors::CurrencyError;

/// The closed set of display currencies offered by the storefront.
///
/// Canonical prices are stored in the base currency (USD); every other
/// member is a fixed-rate regional currency. Persisted values outside this
/// set are treated as absent and fall back to the base currency.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum CurrencyCode {
    #[default]
    Usd,
    Xcd,
    Bbd,
    Ttd,
    Jmd,
    Kyd,
}

impl CurrencyCode {
    /// The base currency in which canonical prices are stored.
    pub const BASE: CurrencyCode = CurrencyCode::Usd;

    pub const ALL: [CurrencyCode; 6] = [
        CurrencyCode::Usd,
        CurrencyCode::Xcd,
        CurrencyCode::Bbd,
        CurrencyCode::Ttd,
        CurrencyCode::Jmd,
        CurrencyCode::Kyd,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CurrencyCode::Usd => "USD",
            CurrencyCode::Xcd => "XCD",
            CurrencyCode::Bbd => "BBD",
            CurrencyCode::Ttd => "TTD",
            CurrencyCode::Jmd => "JMD",
            CurrencyCode::Kyd => "KYD",
        }
    }
}

impl FromStr for CurrencyCode {
    type Err = CurrencyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "USD" => Ok(CurrencyCode::Usd),
            "XCD" => Ok(CurrencyCode::Xcd),
            "BBD" => Ok(CurrencyCode::Bbd),
            "TTD" => Ok(CurrencyCode::Ttd),
            "JMD" => Ok(CurrencyCode::Jmd),
            "KYD" => Ok(CurrencyCode::Kyd),
            other => Err(CurrencyError::UnknownCurrency(other.to_string())),
        }
    }
}

impl fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
