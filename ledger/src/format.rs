//! Display formatting for money and dates.

use chrono::NaiveDate;

/// How currency amounts are rendered: `R$ 1.234,50`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrencyFormat {
    pub prefix: String,
    pub thousands_separator: char,
    pub decimal_separator: char,
}

impl Default for CurrencyFormat {
    fn default() -> Self {
        Self {
            prefix: "R$".to_string(),
            thousands_separator: '.',
            decimal_separator: ',',
        }
    }
}

impl CurrencyFormat {
    /// Format an amount. Cents are only shown when non-zero; negative values
    /// carry the sign in front of the prefix.
    pub fn amount(&self, value: f64) -> String {
        let sign = if value < 0.0 { "-" } else { "" };
        format!("{}{} {}", sign, self.prefix, self.digits(value.abs()))
    }

    /// Format an amount with an explicit `+` / `-` direction marker.
    pub fn signed(&self, value: f64, incoming: bool) -> String {
        let sign = if incoming { "+" } else { "-" };
        format!("{}{} {}", sign, self.prefix, self.digits(value.abs()))
    }

    /// Works on the decimal text rather than integer cents so amounts past
    /// `u64::MAX / 100` keep every digit.
    fn digits(&self, value: f64) -> String {
        let text = format!("{:.2}", value);
        let (int_part, frac) = text.split_once('.').unwrap_or((text.as_str(), "00"));
        let whole = group_thousands(int_part, self.thousands_separator);
        match frac {
            "00" => whole,
            frac => format!("{}{}{}", whole, self.decimal_separator, frac),
        }
    }
}

fn group_thousands(digits: &str, separator: char) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(separator);
        }
        out.push(c);
    }
    out
}

/// ISO calendar date, `YYYY-MM-DD`.
pub fn format_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_amount_grouping() {
        let fmt = CurrencyFormat::default();
        assert_eq!(fmt.amount(0.0), "R$ 0");
        assert_eq!(fmt.amount(999.0), "R$ 999");
        assert_eq!(fmt.amount(1_000.0), "R$ 1.000");
        assert_eq!(fmt.amount(75_000.0), "R$ 75.000");
        assert_eq!(fmt.amount(1_234_567.5), "R$ 1.234.567,50");
        assert_eq!(fmt.amount(60_000.04), "R$ 60.000,04");
    }

    #[test]
    fn test_huge_amount_keeps_every_digit() {
        let fmt = CurrencyFormat::default();
        assert_eq!(fmt.amount(1e18), "R$ 1.000.000.000.000.000.000");
        assert_eq!(fmt.amount(1e20), "R$ 100.000.000.000.000.000.000");
        assert_eq!(fmt.signed(1e18, true), "+R$ 1.000.000.000.000.000.000");
        assert_eq!(fmt.amount(1e15 + 0.5), "R$ 1.000.000.000.000.000,50");
    }

    #[test]
    fn test_cents_round_to_two_places() {
        let fmt = CurrencyFormat::default();
        assert_eq!(fmt.amount(0.004), "R$ 0");
        assert_eq!(fmt.amount(10.1), "R$ 10,10");
        assert_eq!(fmt.amount(99.999), "R$ 100");
    }

    #[test]
    fn test_negative_amount() {
        let fmt = CurrencyFormat::default();
        assert_eq!(fmt.amount(-2_500.0), "-R$ 2.500");
    }

    #[test]
    fn test_signed() {
        let fmt = CurrencyFormat::default();
        assert_eq!(fmt.signed(5_000.0, true), "+R$ 5.000");
        assert_eq!(fmt.signed(2_500.0, false), "-R$ 2.500");
    }

    #[test]
    fn test_custom_separators() {
        let fmt = CurrencyFormat {
            prefix: "$".to_string(),
            thousands_separator: ',',
            decimal_separator: '.',
        };
        assert_eq!(fmt.amount(1_234_567.25), "$ 1,234,567.25");
    }

    #[test]
    fn test_format_date() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
        assert_eq!(format_date(date), "2024-03-05");
    }
}
