//! Payment Kernel - Foundational value types for the payment system
//!
//! This crate provides the validated, immutable building blocks every
//! payment request and response is assembled from:
//! - Money types with precise minor-unit arithmetic
//! - National tax identifiers (CPF/CNPJ) with check-digit validation
//! - Payment card numbers with Luhn validation and brand classification

pub mod card;
pub mod checksum;
pub mod currency;
pub mod documents;
pub mod email;
pub mod error;
pub mod money;

pub use card::{CardBrand, CardError, CardNumber};
pub use currency::{Currency, CurrencyError};
pub use documents::{DocumentError, NationalTaxId};
pub use email::{EmailAddress, EmailError};
pub use error::KernelError;
pub use money::{Money, MoneyError};
