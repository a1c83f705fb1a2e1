//! Money types with exact minor-unit arithmetic
//!
//! Money is stored as a non-negative count of minor units (cents) plus a
//! [`Currency`], so no amount a refund or debit flow could corrupt ever
//! exists in floating point. Negative money is unrepresentable; callers
//! model direction at a higher level. Every operation returns a new value,
//! and cross-currency arithmetic or comparison is a typed error.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::ser::SerializeStruct;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::cmp::Ordering;
use std::fmt;
use thiserror::Error;

use crate::currency::Currency;

/// Errors that can occur during money operations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MoneyError {
    #[error("Currency mismatch: cannot operate on {0} and {1}")]
    CurrencyMismatch(String, String),

    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    #[error("Division by zero")]
    DivisionByZero,

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

/// A non-negative monetary amount with associated currency
///
/// The derived `PartialEq`/`Eq`/`Hash` give structural equality over
/// `(minor_units, currency)`, which collections rely on. Monetary
/// comparison between two values goes through the `checked_*` methods,
/// which reject a currency mismatch in both directions; `PartialOrd` is
/// deliberately not implemented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Money {
    minor_units: u64,
    currency: Currency,
}

impl Money {
    /// Creates Money from a major-unit decimal amount
    ///
    /// Converts at the currency's exponent, rounding half-away-from-zero.
    pub fn from_major(amount: Decimal, currency: Currency) -> Result<Self, MoneyError> {
        if amount.is_sign_negative() && !amount.is_zero() {
            return Err(MoneyError::InvalidAmount(format!(
                "amount must not be negative: {amount}"
            )));
        }
        // Negative zero would trip the unsigned conversion below
        let amount = if amount.is_zero() { Decimal::ZERO } else { amount };
        let scale = Decimal::from(10u64.pow(currency.minor_exponent()));
        let minor = amount
            .checked_mul(scale)
            .map(|scaled| scaled.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero))
            .and_then(|rounded| rounded.to_u64())
            .ok_or_else(|| {
                MoneyError::InvalidAmount(format!("amount out of range: {amount}"))
            })?;
        Ok(Self {
            minor_units: minor,
            currency,
        })
    }

    /// Creates Money from an integer amount in minor units (e.g., cents)
    pub fn from_minor(minor_units: u64, currency: Currency) -> Self {
        Self {
            minor_units,
            currency,
        }
    }

    /// Creates a zero amount in the specified currency
    pub fn zero(currency: Currency) -> Self {
        Self {
            minor_units: 0,
            currency,
        }
    }

    /// Returns the amount in minor units
    pub fn minor_units(&self) -> u64 {
        self.minor_units
    }

    /// Returns the amount in major units at the currency's exponent
    pub fn amount(&self) -> Decimal {
        Decimal::from_i128_with_scale(self.minor_units as i128, self.currency.minor_exponent())
    }

    /// Returns the currency
    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// Returns true if the amount is zero
    pub fn is_zero(&self) -> bool {
        self.minor_units == 0
    }

    /// Checked addition that returns an error on currency mismatch
    pub fn checked_add(&self, other: &Money) -> Result<Money, MoneyError> {
        self.ensure_same_currency(other)?;
        let minor = self
            .minor_units
            .checked_add(other.minor_units)
            .ok_or_else(|| MoneyError::InvalidAmount("addition overflow".to_string()))?;
        Ok(Self::from_minor(minor, self.currency))
    }

    /// Checked subtraction
    ///
    /// Fails on currency mismatch, and with `InvalidAmount` when the
    /// result would drop below zero — negative money does not exist in
    /// this domain.
    pub fn checked_sub(&self, other: &Money) -> Result<Money, MoneyError> {
        self.ensure_same_currency(other)?;
        let minor = self.minor_units.checked_sub(other.minor_units).ok_or_else(|| {
            MoneyError::InvalidAmount(format!(
                "subtracting {} minor units from {} would be negative",
                other.minor_units, self.minor_units
            ))
        })?;
        Ok(Self::from_minor(minor, self.currency))
    }

    /// Multiplies by a non-negative scalar, rounding half-away-from-zero
    /// to the nearest minor unit
    pub fn multiply(&self, factor: Decimal) -> Result<Money, MoneyError> {
        if factor.is_sign_negative() && !factor.is_zero() {
            return Err(MoneyError::InvalidAmount(format!(
                "factor must not be negative: {factor}"
            )));
        }
        let minor = Decimal::from(self.minor_units)
            .checked_mul(factor)
            .map(|product| product.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero))
            .and_then(|rounded| rounded.to_u64())
            .ok_or_else(|| MoneyError::InvalidAmount("multiplication overflow".to_string()))?;
        Ok(Self::from_minor(minor, self.currency))
    }

    /// Divides by a positive scalar, rounding half-away-from-zero
    pub fn divide(&self, divisor: Decimal) -> Result<Money, MoneyError> {
        if divisor.is_zero() {
            return Err(MoneyError::DivisionByZero);
        }
        if divisor.is_sign_negative() {
            return Err(MoneyError::InvalidAmount(format!(
                "divisor must not be negative: {divisor}"
            )));
        }
        let minor = Decimal::from(self.minor_units)
            .checked_div(divisor)
            .map(|quotient| quotient.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero))
            .and_then(|rounded| rounded.to_u64())
            .ok_or_else(|| MoneyError::InvalidAmount("division overflow".to_string()))?;
        Ok(Self::from_minor(minor, self.currency))
    }

    /// Returns the given percentage of this amount
    pub fn percentage(&self, pct: Decimal) -> Result<Money, MoneyError> {
        self.multiply(pct / Decimal::ONE_HUNDRED)
    }

    /// Splits into `n` parts that sum exactly to the original
    ///
    /// The first `minor_units % n` parts carry one extra minor unit; no
    /// cent is ever created or lost.
    pub fn split(&self, n: u32) -> Result<Vec<Money>, MoneyError> {
        if n == 0 {
            return Err(MoneyError::InvalidArgument(
                "cannot split into zero parts".to_string(),
            ));
        }
        let n = u64::from(n);
        let base = self.minor_units / n;
        let remainder = self.minor_units % n;
        let parts = (0..n)
            .map(|i| {
                let minor = if i < remainder { base + 1 } else { base };
                Self::from_minor(minor, self.currency)
            })
            .collect();
        Ok(parts)
    }

    /// Compares two amounts of the same currency
    pub fn checked_cmp(&self, other: &Money) -> Result<Ordering, MoneyError> {
        self.ensure_same_currency(other)?;
        Ok(self.minor_units.cmp(&other.minor_units))
    }

    /// Monetary equality; fails on currency mismatch
    pub fn checked_eq(&self, other: &Money) -> Result<bool, MoneyError> {
        Ok(self.checked_cmp(other)? == Ordering::Equal)
    }

    /// Returns true if this amount is strictly greater; fails on currency mismatch
    pub fn checked_gt(&self, other: &Money) -> Result<bool, MoneyError> {
        Ok(self.checked_cmp(other)? == Ordering::Greater)
    }

    /// Returns true if this amount is strictly smaller; fails on currency mismatch
    pub fn checked_lt(&self, other: &Money) -> Result<bool, MoneyError> {
        Ok(self.checked_cmp(other)? == Ordering::Less)
    }

    /// Renders the amount using the currency's fixed template
    pub fn formatted(&self) -> String {
        self.currency.format(self.amount())
    }

    fn ensure_same_currency(&self, other: &Money) -> Result<(), MoneyError> {
        if self.currency != other.currency {
            return Err(MoneyError::CurrencyMismatch(
                self.currency.to_string(),
                other.currency.to_string(),
            ));
        }
        Ok(())
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.formatted())
    }
}

impl Serialize for Money {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut state = serializer.serialize_struct("Money", 4)?;
        state.serialize_field("amount", &self.amount())?;
        state.serialize_field("cents", &self.minor_units)?;
        state.serialize_field("currency", &self.currency)?;
        state.serialize_field("formatted", &self.formatted())?;
        state.end()
    }
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        // `cents` and `currency` are authoritative; the derived fields
        // emitted by `Serialize` are ignored on the way back in.
        #[derive(Deserialize)]
        struct MoneyRepr {
            cents: u64,
            currency: Currency,
        }

        let repr = MoneyRepr::deserialize(deserializer)?;
        Ok(Money::from_minor(repr.cents, repr.currency))
    }
}
