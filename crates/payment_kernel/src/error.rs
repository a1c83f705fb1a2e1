//! Crate-level error type aggregating the per-module failures

use thiserror::Error;

use crate::card::CardError;
use crate::currency::CurrencyError;
use crate::documents::DocumentError;
use crate::email::EmailError;
use crate::money::MoneyError;

/// Aggregate error for the value kernel
///
/// Every failure is a hard, synchronous rejection of caller input; no
/// partially constructed value ever escapes.
#[derive(Debug, Error)]
pub enum KernelError {
    #[error("Currency error: {0}")]
    Currency(#[from] CurrencyError),

    #[error("Money error: {0}")]
    Money(#[from] MoneyError),

    #[error("Document error: {0}")]
    Document(#[from] DocumentError),

    #[error("Card error: {0}")]
    Card(#[from] CardError),

    #[error("Email error: {0}")]
    Email(#[from] EmailError),
}
