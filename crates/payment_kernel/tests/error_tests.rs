//! Tests for payment_kernel error types

use payment_kernel::card::CardError;
use payment_kernel::currency::CurrencyError;
use payment_kernel::documents::DocumentError;
use payment_kernel::error::KernelError;
use payment_kernel::money::MoneyError;

#[test]
fn test_kernel_error_from_money_error() {
    let money_error = MoneyError::CurrencyMismatch("BRL".to_string(), "USD".to_string());
    let kernel_error: KernelError = money_error.into();

    assert!(matches!(kernel_error, KernelError::Money(_)));
}

#[test]
fn test_kernel_error_from_currency_error() {
    let currency_error = CurrencyError::UnsupportedCurrency("XYZ".to_string());
    let kernel_error: KernelError = currency_error.into();

    assert!(matches!(kernel_error, KernelError::Currency(_)));
}

#[test]
fn test_kernel_error_from_document_error() {
    let document_error = DocumentError::InvalidDocument("wrong length".to_string());
    let kernel_error: KernelError = document_error.into();

    assert!(matches!(kernel_error, KernelError::Document(_)));
}

#[test]
fn test_kernel_error_from_card_error() {
    let card_error = CardError::InvalidCardNumber("failed checksum".to_string());
    let kernel_error: KernelError = card_error.into();

    assert!(matches!(kernel_error, KernelError::Card(_)));
}

#[test]
fn test_kernel_error_display_includes_cause() {
    let kernel_error: KernelError = MoneyError::DivisionByZero.into();
    let display = format!("{}", kernel_error);

    assert!(display.contains("Money error"));
    assert!(display.contains("Division by zero"));
}

#[test]
fn test_money_error_display() {
    let error = MoneyError::CurrencyMismatch("BRL".to_string(), "USD".to_string());
    let display = format!("{}", error);

    assert!(display.contains("BRL"));
    assert!(display.contains("USD"));
}
