use rust_decimal::{Decimal, RoundingStrategy};

use crate::constants::DISPLAY_DECIMAL_PRECISION;

/// Formats an amount with exactly two decimal places and `,` thousands
/// separators, e.g. `1234567.891` -> `"1,234,567.89"`.
///
/// Grouping is pinned to en-US conventions; the storefront ships a single
/// locale.
pub fn format_display_amount(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(
        DISPLAY_DECIMAL_PRECISION,
        RoundingStrategy::MidpointAwayFromZero,
    );
    let fixed = format!("{:.prec$}", rounded, prec = DISPLAY_DECIMAL_PRECISION as usize);

    let (integer_part, fraction_part) = match fixed.split_once('.') {
        Some((int_part, frac)) => (int_part.to_string(), frac.to_string()),
        None => (fixed, String::new()),
    };

    let (sign, digits) = match integer_part.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", integer_part.as_str()),
    };

    if fraction_part.is_empty() {
        format!("{}{}", sign, group_thousands(digits))
    } else {
        format!("{}{}.{}", sign, group_thousands(digits), fraction_part)
    }
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    let offset = digits.len() % 3;

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && i % 3 == offset % 3 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    grouped
}
