//! Syntactically validated email addresses

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use thiserror::Error;

/// Errors raised by email parsing
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EmailError {
    #[error("Invalid email address: {0}")]
    InvalidEmail(String),
}

/// A syntactically valid email address
///
/// Validation is purely structural: one `@`, a non-empty local part, and
/// a domain with an interior dot. No deliverability checks.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Parses a raw email address
    pub fn parse(raw: &str) -> Result<Self, EmailError> {
        let trimmed = raw.trim();
        if trimmed.chars().any(|c| c.is_whitespace() || c.is_control()) {
            return Err(EmailError::InvalidEmail(trimmed.to_string()));
        }
        let (local, domain) = trimmed
            .split_once('@')
            .ok_or_else(|| EmailError::InvalidEmail(trimmed.to_string()))?;
        if local.is_empty() || domain.contains('@') {
            return Err(EmailError::InvalidEmail(trimmed.to_string()));
        }
        let has_interior_dot = domain
            .find('.')
            .is_some_and(|i| i > 0 && i < domain.len() - 1);
        if !has_interior_dot || domain.ends_with('.') {
            return Err(EmailError::InvalidEmail(trimmed.to_string()));
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Returns the full address
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the part before the `@`
    pub fn local_part(&self) -> &str {
        self.0.split_once('@').map(|(local, _)| local).unwrap_or("")
    }

    /// Returns the part after the `@`
    pub fn domain(&self) -> &str {
        self.0
            .split_once('@')
            .map(|(_, domain)| domain)
            .unwrap_or("")
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl<'de> Deserialize<'de> for EmailAddress {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        EmailAddress::parse(&raw).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_address() {
        let email = EmailAddress::parse("buyer@example.com").unwrap();
        assert_eq!(email.as_str(), "buyer@example.com");
        assert_eq!(email.local_part(), "buyer");
        assert_eq!(email.domain(), "example.com");
    }

    #[test]
    fn test_parse_trims_surrounding_space() {
        let email = EmailAddress::parse("  buyer@example.com  ").unwrap();
        assert_eq!(email.as_str(), "buyer@example.com");
    }

    #[test]
    fn test_reject_malformed_addresses() {
        for raw in [
            "",
            "buyer",
            "@example.com",
            "buyer@",
            "buyer@example",
            "buyer@.com",
            "buyer@example.com.",
            "buy er@example.com",
            "buyer@exam@ple.com",
        ] {
            assert!(
                matches!(EmailAddress::parse(raw), Err(EmailError::InvalidEmail(_))),
                "expected rejection for {raw:?}"
            );
        }
    }
}
