//! Money formatting for generated messages

/// Whole units with comma thousands separators: 2500.4 -> "2,500"
pub fn format_thousands(amount: f64) -> String {
    let rounded = amount.round();
    let digits = format!("{:.0}", rounded.abs());

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    if rounded < 0.0 {
        format!("-{}", grouped)
    } else {
        grouped
    }
}

/// "USD 2,500"
pub fn format_currency(currency: &str, amount: f64) -> String {
    format!("{} {}", currency, format_thousands(amount))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_thousands() {
        assert_eq!(format_thousands(0.0), "0");
        assert_eq!(format_thousands(950.0), "950");
        assert_eq!(format_thousands(2500.0), "2,500");
        assert_eq!(format_thousands(30000.0), "30,000");
        assert_eq!(format_thousands(1234567.0), "1,234,567");
        assert_eq!(format_thousands(2500.6), "2,501");
        assert_eq!(format_thousands(-4200.0), "-4,200");
    }

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency("CAD", 6350.0), "CAD 6,350");
    }
}
