//! Currency and quantity display formatting.
//!
//! Amounts are computed as unrounded `f64` dollars; rounding happens here
//! and only here, at two decimal places, half away from zero.

use rust_decimal::prelude::FromPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

/// Formats a dollar amount in en-US currency style.
///
/// `$` symbol, comma thousands separators, exactly two decimals. Negative
/// amounts carry a leading minus (`-$5.00`); amounts that round to zero are
/// shown unsigned.
///
/// # Examples
///
/// ```
/// use paystub_engine::render::format_currency;
///
/// assert_eq!(format_currency(1234.5), "$1,234.50");
/// assert_eq!(format_currency(0.0), "$0.00");
/// assert_eq!(format_currency(-5.0), "-$5.00");
/// ```
pub fn format_currency(amount: f64) -> String {
    if amount.is_nan() {
        return "$NaN".to_string();
    }
    if amount.is_infinite() {
        return if amount > 0.0 { "$∞" } else { "-$∞" }.to_string();
    }

    let (negative, digits) = match Decimal::from_f64(amount) {
        Some(value) => {
            let mut rounded =
                value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
            let negative = rounded.is_sign_negative() && !rounded.is_zero();
            rounded.set_sign_positive(true);
            rounded.rescale(2);
            (negative, rounded.to_string())
        }
        // Beyond Decimal's range; plain float formatting is precise enough there.
        None => (amount < 0.0, format!("{:.2}", amount.abs())),
    };

    let (whole, fraction) = digits.split_once('.').unwrap_or((digits.as_str(), "00"));
    let sign = if negative { "-" } else { "" };
    format!("{}${}.{}", sign, group_thousands(whole), fraction)
}

/// Formats a quantity the way it was entered: integers without decimals,
/// fractions with as many digits as needed.
///
/// # Examples
///
/// ```
/// use paystub_engine::render::format_quantity;
///
/// assert_eq!(format_quantity(2.0), "2");
/// assert_eq!(format_quantity(25.5), "25.5");
/// ```
pub fn format_quantity(quantity: f64) -> String {
    if quantity == 0.0 {
        // Avoids printing "-0".
        return "0".to_string();
    }
    format!("{}", quantity)
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut grouped = String::with_capacity(len + len / 3);
    for (index, ch) in digits.chars().enumerate() {
        if index > 0 && (len - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}
