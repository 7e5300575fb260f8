//! Currency formatting for table cells, chart labels and the status bar.

use budgetcast_core::input::coerce_amount_in;
use serde::{Deserialize, Serialize};

/// Where the currency symbol goes relative to the number
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SymbolPosition {
    Prefix,
    Suffix,
}

/// Named currency layouts selectable from the CLI and the settings file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum CurrencyPreset {
    /// Swedish kronor, `15 000,00 kr`
    #[default]
    Sek,
    /// US dollars, `$15,000.00`
    Usd,
}

impl CurrencyPreset {
    pub fn format(&self) -> CurrencyFormat {
        match self {
            CurrencyPreset::Sek => CurrencyFormat::sek(),
            CurrencyPreset::Usd => CurrencyFormat::usd(),
        }
    }
}

/// Locale-dependent pieces of a formatted amount
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrencyFormat {
    pub symbol: String,
    pub position: SymbolPosition,
    pub group_separator: char,
    pub decimal_separator: char,
}

impl Default for CurrencyFormat {
    fn default() -> Self {
        Self::sek()
    }
}

impl CurrencyFormat {
    pub fn sek() -> Self {
        Self {
            symbol: "kr".to_string(),
            position: SymbolPosition::Suffix,
            group_separator: '\u{a0}',
            decimal_separator: ',',
        }
    }

    pub fn usd() -> Self {
        Self {
            symbol: "$".to_string(),
            position: SymbolPosition::Prefix,
            group_separator: ',',
            decimal_separator: '.',
        }
    }

    /// Read an amount typed under this format, e.g. `15,000` as fifteen
    /// thousand dollars or `1.000` as one thousand kronor
    pub fn parse_amount(&self, raw: &str) -> f64 {
        coerce_amount_in(raw, self.decimal_separator, &self.symbol)
    }

    fn wrap(&self, negative: bool, digits: &str) -> String {
        let sign = if negative { "-" } else { "" };
        match self.position {
            SymbolPosition::Prefix => format!("{sign}{}{digits}", self.symbol),
            SymbolPosition::Suffix => format!("{sign}{digits}\u{a0}{}", self.symbol),
        }
    }
}

fn group_thousands(digits: &str, separator: char) -> String {
    let mut result = String::new();
    for (i, c) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(separator);
        }
        result.push(c);
    }
    result.chars().rev().collect()
}

/// Whether a rendered magnitude has any non-zero digit
fn is_nonzero(digits: &str) -> bool {
    digits.bytes().any(|b| matches!(b, b'1'..=b'9'))
}

/// Format with two fixed decimals, e.g. `15 000,00 kr` or `$15,000.00`
pub fn format_currency(value: f64, currency: &CurrencyFormat) -> String {
    let text = format!("{:.2}", value.abs());
    let (whole, fraction) = text.split_once('.').unwrap_or((text.as_str(), "00"));

    let digits = format!(
        "{}{}{}",
        group_thousands(whole, currency.group_separator),
        currency.decimal_separator,
        fraction
    );
    currency.wrap(value < 0.0 && is_nonzero(&text), &digits)
}

/// Format without decimals (shorter format for chart axes)
pub fn format_currency_short(value: f64, currency: &CurrencyFormat) -> String {
    let whole = format!("{:.0}", value.abs());
    currency.wrap(
        value < 0.0 && is_nonzero(&whole),
        &group_thousands(&whole, currency.group_separator),
    )
}

/// Format an optional amount, blank when absent
pub fn format_optional_currency(value: Option<f64>, currency: &CurrencyFormat) -> String {
    value
        .map(|v| format_currency(v, currency))
        .unwrap_or_default()
}

/// Plain editable representation used to prefill input fields
pub fn format_editable(value: f64) -> String {
    if value == 0.0 {
        String::new()
    } else if value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        let text = format!("{value:.2}");
        text.trim_end_matches('0').trim_end_matches('.').to_string()
    }
}
