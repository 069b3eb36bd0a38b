//! Presentation helpers for dashboards and reports.
//!
//! Inputs are dollar amounts as `f64` (the shape a UI works with); the
//! stored representation is [`Money`]. All functions are pure.

use crate::Money;

/// Formats `amount` as en-US currency.
///
/// ```rust
/// use engine::format::format_currency;
///
/// assert_eq!(format_currency(1000.0, false), "$1,000");
/// assert_eq!(format_currency(1000.0, true), "$1,000.00");
/// ```
#[must_use]
pub fn format_currency(amount: f64, show_cents: bool) -> String {
    if !amount.is_finite() {
        return "$0".to_string();
    }
    if show_cents {
        Money::new(round_half_away(amount * 100.0)).format(true)
    } else {
        Money::from_dollars(round_half_away(amount)).format(false)
    }
}

/// Formats large amounts with a `K`/`M` suffix.
///
/// Millions keep one decimal, thousands none; smaller amounts fall back to
/// [`format_currency`] without cents.
///
/// ```rust
/// use engine::format::format_compact_currency;
///
/// assert_eq!(format_compact_currency(1_000_000.0), "$1.0M");
/// assert_eq!(format_compact_currency(1_000.0), "$1K");
/// assert_eq!(format_compact_currency(999.0), "$999");
/// ```
#[must_use]
pub fn format_compact_currency(amount: f64) -> String {
    let sign = if amount < 0.0 { "-" } else { "" };
    let abs = amount.abs();
    if abs >= 1_000_000.0 {
        format!("{sign}${}M", to_fixed(abs / 1_000_000.0, 1))
    } else if abs >= 1_000.0 {
        format!("{sign}${}K", to_fixed(abs / 1_000.0, 0))
    } else {
        format_currency(amount, false)
    }
}

/// Formats a value that is already expressed in percent: `5.25, 1` → `5.3%`.
#[must_use]
pub fn format_percent(value: f64, decimals: u8) -> String {
    let sign = if value < 0.0 { "-" } else { "" };
    let fixed = to_fixed(value.abs(), decimals);
    if fixed.chars().all(|c| c == '0' || c == '.') {
        return format!("{fixed}%");
    }
    format!("{sign}{fixed}%")
}

fn round_half_away(value: f64) -> i64 {
    // `f64::round` already rounds half away from zero; the cast saturates.
    value.round() as i64
}

/// Fixed-point rendering of a non-negative value with ties rounded up.
fn to_fixed(value: f64, decimals: u8) -> String {
    let factor = 10f64.powi(i32::from(decimals));
    let rounded = (value * factor).round() / factor;
    format!("{rounded:.prec$}", prec = usize::from(decimals))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn currency_whole_dollars() {
        assert_eq!(format_currency(1000.0, false), "$1,000");
        assert_eq!(format_currency(0.0, false), "$0");
        assert_eq!(format_currency(1234567.0, false), "$1,234,567");
        assert_eq!(format_currency(999.5, false), "$1,000");
        assert_eq!(format_currency(-2500.0, false), "-$2,500");
    }

    #[test]
    fn currency_with_cents() {
        assert_eq!(format_currency(1000.0, true), "$1,000.00");
        assert_eq!(format_currency(12.5, true), "$12.50");
        assert_eq!(format_currency(0.07, true), "$0.07");
        assert_eq!(format_currency(-1.25, true), "-$1.25");
    }

    #[test]
    fn compact_currency() {
        assert_eq!(format_compact_currency(1_000_000.0), "$1.0M");
        assert_eq!(format_compact_currency(2_450_000.0), "$2.5M");
        assert_eq!(format_compact_currency(1_000.0), "$1K");
        assert_eq!(format_compact_currency(1_500.0), "$2K");
        assert_eq!(format_compact_currency(250_000.0), "$250K");
        assert_eq!(format_compact_currency(999.0), "$999");
        assert_eq!(format_compact_currency(-3_000.0), "-$3K");
    }

    #[test]
    fn percent() {
        assert_eq!(format_percent(5.0, 1), "5.0%");
        assert_eq!(format_percent(7.25, 2), "7.25%");
        assert_eq!(format_percent(33.333, 0), "33%");
        assert_eq!(format_percent(-4.5, 1), "-4.5%");
        assert_eq!(format_percent(-0.01, 1), "0.0%");
    }

    #[test]
    fn non_finite_is_zero() {
        assert_eq!(format_currency(f64::NAN, true), "$0");
    }
}
