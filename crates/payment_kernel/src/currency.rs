//! Currency catalog with fixed display formatting
//!
//! The catalog is a closed, table-driven registry: every supported code is
//! an enum variant bound to a static [`CurrencyInfo`] entry carrying its
//! minor-unit exponent and display template. A code outside the registry
//! is unrepresentable as a [`Currency`] value.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors raised by currency lookup
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CurrencyError {
    #[error("Unsupported currency code: {0}")]
    UnsupportedCurrency(String),
}

/// Supported currency codes following ISO 4217
///
/// Every supported currency uses a minor-unit exponent of 2.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    BRL,
    USD,
    EUR,
    GBP,
    MXN,
    ARS,
}

/// Static display and scale template for one currency
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurrencyInfo {
    /// ISO 4217 code
    pub code: &'static str,
    /// Display symbol
    pub symbol: &'static str,
    /// Number of minor-unit digits
    pub minor_exponent: u32,
    /// Separator between the integer and fractional parts
    pub decimal_separator: char,
    /// Separator between integer-part groups of three
    pub group_separator: char,
    /// Whether a space follows the symbol
    pub space_after_symbol: bool,
}

const BRL_INFO: CurrencyInfo = CurrencyInfo {
    code: "BRL",
    symbol: "R$",
    minor_exponent: 2,
    decimal_separator: ',',
    group_separator: '.',
    space_after_symbol: true,
};

const USD_INFO: CurrencyInfo = CurrencyInfo {
    code: "USD",
    symbol: "$",
    minor_exponent: 2,
    decimal_separator: '.',
    group_separator: ',',
    space_after_symbol: false,
};

const EUR_INFO: CurrencyInfo = CurrencyInfo {
    code: "EUR",
    symbol: "€",
    minor_exponent: 2,
    decimal_separator: ',',
    group_separator: '.',
    space_after_symbol: false,
};

const GBP_INFO: CurrencyInfo = CurrencyInfo {
    code: "GBP",
    symbol: "£",
    minor_exponent: 2,
    decimal_separator: '.',
    group_separator: ',',
    space_after_symbol: false,
};

const MXN_INFO: CurrencyInfo = CurrencyInfo {
    code: "MXN",
    symbol: "MX$",
    minor_exponent: 2,
    decimal_separator: '.',
    group_separator: ',',
    space_after_symbol: false,
};

const ARS_INFO: CurrencyInfo = CurrencyInfo {
    code: "ARS",
    symbol: "AR$",
    minor_exponent: 2,
    decimal_separator: ',',
    group_separator: '.',
    space_after_symbol: true,
};

impl Currency {
    /// Every currency in the registry, in a stable order
    pub const ALL: &'static [Currency] = &[
        Currency::BRL,
        Currency::USD,
        Currency::EUR,
        Currency::GBP,
        Currency::MXN,
        Currency::ARS,
    ];

    /// Returns the static registry entry for this currency
    pub fn info(&self) -> &'static CurrencyInfo {
        match self {
            Currency::BRL => &BRL_INFO,
            Currency::USD => &USD_INFO,
            Currency::EUR => &EUR_INFO,
            Currency::GBP => &GBP_INFO,
            Currency::MXN => &MXN_INFO,
            Currency::ARS => &ARS_INFO,
        }
    }

    /// Returns the ISO 4217 code
    pub fn code(&self) -> &'static str {
        self.info().code
    }

    /// Returns the currency symbol
    pub fn symbol(&self) -> &'static str {
        self.info().symbol
    }

    /// Returns the number of minor-unit digits
    pub fn minor_exponent(&self) -> u32 {
        self.info().minor_exponent
    }

    /// Case-insensitive lookup of a currency by its ISO code
    pub fn from_code(code: &str) -> Result<Self, CurrencyError> {
        let trimmed = code.trim();
        Currency::ALL
            .iter()
            .copied()
            .find(|c| c.code().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| CurrencyError::UnsupportedCurrency(code.to_string()))
    }

    /// Renders a major-unit amount using this currency's fixed template
    ///
    /// Rounds half-away-from-zero at the currency's exponent, groups the
    /// integer part in threes, and renders exactly `minor_exponent`
    /// fractional digits. No locale negotiation.
    pub fn format(&self, amount: Decimal) -> String {
        let info = self.info();
        let rounded = amount.round_dp_with_strategy(
            info.minor_exponent,
            RoundingStrategy::MidpointAwayFromZero,
        );
        let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
            "-"
        } else {
            ""
        };
        let text = format!("{:.*}", info.minor_exponent as usize, rounded.abs());
        let (int_part, frac_part) = match text.split_once('.') {
            Some((int_part, frac_part)) => (int_part, frac_part),
            None => (text.as_str(), ""),
        };
        let grouped = group_thousands(int_part, info.group_separator);
        let space = if info.space_after_symbol { " " } else { "" };
        if frac_part.is_empty() {
            format!("{}{}{}{}", info.symbol, space, sign, grouped)
        } else {
            format!(
                "{}{}{}{}{}{}",
                info.symbol, space, sign, grouped, info.decimal_separator, frac_part
            )
        }
    }
}

fn group_thousands(digits: &str, separator: char) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(separator);
        }
        out.push(c);
    }
    out
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for Currency {
    type Err = CurrencyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Currency::from_code(s)
    }
}
