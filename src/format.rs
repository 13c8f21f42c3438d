//! BRL currency formatting

/// Currency marker placed before every formatted amount
pub const CURRENCY_PREFIX: &str = "R$";

/// Round an amount to currency precision (2 decimal places)
pub fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Format a currency value in BRL style (e.g., 1200.5 -> "R$ 1.200,50")
///
/// Thousands are grouped with '.' and the decimal separator is ','.
pub fn format_brl(value: f64) -> String {
    let cents = (value.abs() * 100.0).round() as u64;
    let reais = cents / 100;
    let centavos = cents % 100;

    // Add thousands separators
    let reais_str = reais.to_string();
    let mut result = String::new();
    for (i, c) in reais_str.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push('.');
        }
        result.push(c);
    }
    let reais_formatted: String = result.chars().rev().collect();

    if value < 0.0 && cents > 0 {
        format!("-{} {},{:02}", CURRENCY_PREFIX, reais_formatted, centavos)
    } else {
        format!("{} {},{:02}", CURRENCY_PREFIX, reais_formatted, centavos)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_brl_grouping() {
        assert_eq!(format_brl(1200.5), "R$ 1.200,50");
        assert_eq!(format_brl(700.0), "R$ 700,00");
        assert_eq!(format_brl(0.0), "R$ 0,00");
        assert_eq!(format_brl(1234567.891), "R$ 1.234.567,89");
    }

    #[test]
    fn test_format_brl_rounds_installment() {
        // 2000 / 3 contract installments
        assert_eq!(format_brl(2000.0 / 3.0), "R$ 666,67");
        assert_eq!(format_brl(999.999), "R$ 1.000,00");
    }

    #[test]
    fn test_format_brl_negative() {
        assert_eq!(format_brl(-1500.25), "-R$ 1.500,25");
        assert_eq!(format_brl(-0.001), "R$ 0,00");
    }

    #[test]
    fn test_round_cents() {
        assert_eq!(round_cents(2000.0 / 3.0), 666.67);
        assert_eq!(round_cents(400.0), 400.0);
        assert_eq!(round_cents(1140.0 + 666.67), 1806.67);
    }
}
