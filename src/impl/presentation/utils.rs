use iso_currency::Currency;
use num_format::{Locale, ToFormattedString as _};

/// Standard number decimal places for the given currency
/// (ex. JPY = 0, USD = 2, LYD = 3).
fn decimal_places(currency: Currency) -> u32 {
    currency.exponent().unwrap_or(0) as u32
}

/// Format cash amount with currency symbol, correct number of decimal places
/// and thousands separators.
///
/// For consistency, uses en locale ('.' as decimal mark, i.e. 1,000.00)
/// regardless of user's locale or currency.
pub(crate) fn format_amount(amount: f64, currency: Currency) -> String {
    let decimal_places = decimal_places(currency);
    let scale = 10_i64.pow(decimal_places);
    let scaled = (amount.abs() * scale as f64).round() as i64;
    let sign = if amount < 0.0 && scaled != 0 { "-" } else { "" };
    let integer_part = (scaled / scale).to_formatted_string(&Locale::en);
    if decimal_places == 0 {
        format!("{}{} {}", sign, integer_part, currency.symbol())
    } else {
        format!(
            "{}{}.{:0width$} {}",
            sign,
            integer_part,
            scaled % scale,
            currency.symbol(),
            width = decimal_places as usize,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_with_currency_precision() {
        assert!(format_amount(1234.5, Currency::USD).starts_with("1,234.50 "));
        assert!(format_amount(1234.5, Currency::JPY).starts_with("1,235 "));
        assert!(format_amount(60.0, Currency::LYD).starts_with("60.000 "));
    }

    #[test]
    fn rounds_with_carry() {
        assert!(format_amount(0.999, Currency::USD).starts_with("1.00 "));
        assert!(format_amount(1999.996, Currency::USD).starts_with("2,000.00 "));
    }

    #[test]
    fn keeps_sign_of_negative_balance() {
        assert!(format_amount(-60.0, Currency::USD).starts_with("-60.00 "));
        assert!(format_amount(-0.001, Currency::USD).starts_with("0.00 "));
    }
}
