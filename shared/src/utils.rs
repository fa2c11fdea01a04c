// Display formatting for prices and percentage moves. The UI renders these
// verbatim, so the rules live in one place.

/// Formats a price with two decimals and thousands separators,
/// e.g. `42580.5` -> `"42,580.50"`.
pub fn format_price(value: f64) -> String {
    let negative = value < 0.0;
    let fixed = format!("{:.2}", value.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if negative { "-" } else { "" };
    format!("{sign}{grouped}.{frac_part}")
}

/// Formats a percentage-point move with an explicit sign,
/// e.g. `0.82` -> `"+0.82%"`, `-0.64` -> `"-0.64%"`.
pub fn format_percent(value: f64) -> String {
    format!("{value:+.2}%")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn price_groups_thousands() {
        assert_eq!(format_price(192.34), "192.34");
        assert_eq!(format_price(42580.5), "42,580.50");
        assert_eq!(format_price(1234567.891), "1,234,567.89");
        assert_eq!(format_price(0.0), "0.00");
    }

    #[test]
    fn price_keeps_sign_outside_grouping() {
        assert_eq!(format_price(-1234.5), "-1,234.50");
    }

    #[test]
    fn percent_is_signed_with_two_decimals() {
        assert_eq!(format_percent(0.82), "+0.82%");
        assert_eq!(format_percent(-0.64), "-0.64%");
        assert_eq!(format_percent(0.0), "+0.00%");
    }
}
