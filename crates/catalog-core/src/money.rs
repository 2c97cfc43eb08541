//! Price formatting.
//!
//! The API sends prices as decimal numbers next to a free-form currency code,
//! so formatting is a fixed two-place rendering rather than a currency-aware
//! one.

/// Format a price as `{currency} {amount}` with exactly two decimals.
///
/// ```
/// use catalog_core::format_price;
/// assert_eq!(format_price("USD", 19.5), "USD 19.50");
/// ```
pub fn format_price(currency: &str, amount: f64) -> String {
    format!("{} {}", currency, fixed_two(amount))
}

/// Two-decimal rendering where an exact half cent rounds away from zero.
///
/// `{:.2}` rounds exact ties to even, so `2.625` would print `2.62`. The only
/// binary values sitting exactly on a half cent are odd multiples of `1/8`;
/// those are rounded in integer cents instead.
fn fixed_two(amount: f64) -> String {
    let eighths = amount.abs() * 8.0;
    let exact_tie = eighths < 9_007_199_254_740_992.0 // 2^53
        && eighths.fract() == 0.0
        && eighths % 2.0 == 1.0;
    if !exact_tie {
        return format!("{:.2}", amount);
    }

    // eighths * 12.5 cents, rounded up.
    let cents = (eighths as u128 * 25 + 1) / 2;
    let sign = if amount.is_sign_negative() { "-" } else { "" };
    format!("{sign}{}.{:02}", cents / 100, cents % 100)
}

/// Format a rating with a `/ 5.0` scale suffix.
///
/// Whole ratings print without a fraction (`4 / 5.0`), matching how the
/// value reads in the API payload.
pub fn format_rating(rating: f64) -> String {
    format!("{} / 5.0", rating)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_price_two_decimals() {
        assert_eq!(format_price("USD", 10.0), "USD 10.00");
        assert_eq!(format_price("USD", 0.5), "USD 0.50");
        assert_eq!(format_price("GBP", 1234.567), "GBP 1234.57");
        assert_eq!(format_price("JPY", 0.0), "JPY 0.00");
    }

    #[test]
    fn test_format_price_half_cent_rounds_up() {
        assert_eq!(format_price("USD", 0.125), "USD 0.13");
        assert_eq!(format_price("USD", 2.625), "USD 2.63");
        assert_eq!(format_price("USD", 10.375), "USD 10.38");
        assert_eq!(format_price("USD", 7.875), "USD 7.88");
        assert_eq!(format_price("USD", -0.125), "USD -0.13");
        // Values that only look like ties are not exact in binary.
        assert_eq!(format_price("USD", 1.005), "USD 1.00");
        assert_eq!(format_price("USD", 0.5), "USD 0.50");
    }

    #[test]
    fn test_format_rating() {
        assert_eq!(format_rating(4.5), "4.5 / 5.0");
        assert_eq!(format_rating(4.0), "4 / 5.0");
        assert_eq!(format_rating(0.0), "0 / 5.0");
    }
}
