/// Settings key under which the selected display currency is persisted
pub const DISPLAY_CURRENCY_KEY: &str = "display_currency";

/// Decimal precision for displayed prices
pub const DISPLAY_DECIMAL_PRECISION: u32 = 2;
