//! Display formatting for prices.

/// Currency the storefront quotes in when nothing else is configured.
pub const DEFAULT_CURRENCY: &str = "AED";

/// Formats amounts as `1,234.50` with an optional currency prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriceFormatter {
    currency_code: String,
}

impl Default for PriceFormatter {
    fn default() -> Self {
        Self::new(DEFAULT_CURRENCY)
    }
}

impl PriceFormatter {
    pub fn new(currency_code: impl Into<String>) -> Self {
        Self {
            currency_code: currency_code.into(),
        }
    }

    pub fn currency_code(&self) -> &str {
        &self.currency_code
    }

    /// Amount with two decimals and thousands separators, no currency.
    pub fn format_amount(&self, amount: f64) -> String {
        let fixed = format!("{:.2}", amount.abs());
        let (whole, fraction) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

        let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
        for (i, digit) in whole.chars().enumerate() {
            if i > 0 && (whole.len() - i) % 3 == 0 {
                grouped.push(',');
            }
            grouped.push(digit);
        }

        let sign = if amount < 0.0 && fixed != "0.00" { "-" } else { "" };
        format!("{sign}{grouped}.{fraction}")
    }

    /// Amount prefixed with the currency code, e.g. `AED 1,234.50`.
    pub fn format(&self, amount: f64) -> String {
        format!("{} {}", self.currency_code, self.format_amount(amount))
    }
}
