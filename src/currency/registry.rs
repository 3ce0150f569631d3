use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::collections::HashMap;
use std::sync::OnceLock;

use super::currency_code::CurrencyCode;

/// Display properties for one member of the closed currency set.
#[derive(Debug, Clone)]
pub struct CurrencyEntry {
    /// Factor converting a base-currency amount into this currency.
    pub multiplier: Decimal,
    /// Display prefix, prepended to the formatted amount with no space.
    pub symbol: &'static str,
}

static CURRENCY_TABLE: OnceLock<HashMap<CurrencyCode, CurrencyEntry>> = OnceLock::new();

fn get_table() -> &'static HashMap<CurrencyCode, CurrencyEntry> {
    CURRENCY_TABLE.get_or_init(|| {
        let mut map = HashMap::new();

        map.insert(
            CurrencyCode::Usd,
            CurrencyEntry {
                multiplier: dec!(1.0),
                symbol: "$",
            },
        );

        // XCD is pegged at 2.70 per USD
        map.insert(
            CurrencyCode::Xcd,
            CurrencyEntry {
                multiplier: dec!(2.70),
                symbol: "EC$",
            },
        );

        map.insert(
            CurrencyCode::Bbd,
            CurrencyEntry {
                multiplier: dec!(2.00),
                symbol: "Bds$",
            },
        );

        map.insert(
            CurrencyCode::Ttd,
            CurrencyEntry {
                multiplier: dec!(6.80),
                symbol: "TT$",
            },
        );

        map.insert(
            CurrencyCode::Jmd,
            CurrencyEntry {
                multiplier: dec!(156.50),
                symbol: "J$",
            },
        );

        map.insert(
            CurrencyCode::Kyd,
            CurrencyEntry {
                multiplier: dec!(0.82),
                symbol: "CI$",
            },
        );

        map
    })
}

/// Returns the registry entry for a currency, if one exists.
pub fn get_entry(code: CurrencyCode) -> Option<&'static CurrencyEntry> {
    get_table().get(&code)
}

/// Returns the multiplier converting a base-currency amount into `code`,
/// defaulting to 1 for a code with no registered entry.
pub fn multiplier_for(code: CurrencyCode) -> Decimal {
    get_entry(code).map(|e| e.multiplier).unwrap_or(Decimal::ONE)
}

/// Returns the display symbol for `code`, defaulting to the base symbol.
pub fn symbol_for(code: CurrencyCode) -> &'static str {
    get_entry(code).map(|e| e.symbol).unwrap_or("$")
}
