//! Payment card numbers with Luhn validation and brand classification
//!
//! A [`CardNumber`] only exists after passing the Luhn checksum, so every
//! instance is a plausible PAN. The raw digits are reachable only through
//! the explicitly named [`value`](CardNumber::value) accessor; `Debug`,
//! `Display`, and `Serialize` all render the masked form.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use thiserror::Error;

use crate::checksum::luhn_valid;

/// Errors raised by card number parsing
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CardError {
    #[error("Invalid card number: {0}")]
    InvalidCardNumber(String),
}

const MIN_LEN: usize = 13;
const MAX_LEN: usize = 19;
const BIN_LEN: usize = 6;

/// Card scheme derived from the leading digits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CardBrand {
    Visa,
    Mastercard,
    Amex,
    Elo,
    Hipercard,
    Discover,
    Diners,
    Unknown,
}

impl CardBrand {
    /// Returns the lowercase scheme name
    pub fn name(&self) -> &'static str {
        match self {
            CardBrand::Visa => "visa",
            CardBrand::Mastercard => "mastercard",
            CardBrand::Amex => "amex",
            CardBrand::Elo => "elo",
            CardBrand::Hipercard => "hipercard",
            CardBrand::Discover => "discover",
            CardBrand::Diners => "diners",
            CardBrand::Unknown => "unknown",
        }
    }
}

impl fmt::Display for CardBrand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

// Elo BINs overlap Visa's leading 4 and the 50/63/65 space, so the
// enumerated lists are checked before the broad prefix ranges.
const ELO_BINS: &[u32] = &[
    401_178, 401_179, 431_274, 438_935, 451_416, 457_393, 457_631, 457_632, 504_175, 627_780,
    636_297, 636_368,
];
const ELO_RANGES: &[(u32, u32)] = &[(506_699, 506_778), (509_000, 509_999)];
const HIPERCARD_PREFIXES: &[&str] = &["606282", "3841"];

/// A validated payment card number
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct CardNumber {
    digits: String,
}

impl CardNumber {
    /// Parses a raw card number
    ///
    /// Strips spaces and dashes, then requires an all-digit string of 13
    /// to 19 characters that passes the Luhn checksum.
    pub fn parse(raw: &str) -> Result<Self, CardError> {
        let digits: String = raw
            .chars()
            .filter(|c| *c != ' ' && *c != '-')
            .collect();
        if digits.is_empty() {
            return Err(CardError::InvalidCardNumber(
                "no digits present".to_string(),
            ));
        }
        if !digits.chars().all(|c| c.is_ascii_digit()) {
            return Err(CardError::InvalidCardNumber(
                "contains non-digit characters".to_string(),
            ));
        }
        if digits.len() < MIN_LEN || digits.len() > MAX_LEN {
            return Err(CardError::InvalidCardNumber(format!(
                "expected 13 to 19 digits, found {}",
                digits.len()
            )));
        }
        let values: Vec<u8> = digits.bytes().map(|b| b - b'0').collect();
        if !luhn_valid(&values) {
            return Err(CardError::InvalidCardNumber(
                "failed checksum".to_string(),
            ));
        }
        Ok(Self { digits })
    }

    /// Returns the full digit string
    ///
    /// Callers must never log or persist this unmasked.
    pub fn value(&self) -> &str {
        &self.digits
    }

    /// Returns the digits with all but the last four replaced by `*`
    pub fn masked(&self) -> String {
        let visible = self.digits.len() - 4;
        let mut out = "*".repeat(visible);
        out.push_str(&self.digits[visible..]);
        out
    }

    /// Returns the masked form space-grouped in runs of four
    pub fn formatted_masked(&self) -> String {
        let masked = self.masked();
        let chunks: Vec<&str> = masked
            .as_bytes()
            .chunks(4)
            .map(|chunk| std::str::from_utf8(chunk).unwrap_or_default())
            .collect();
        chunks.join(" ")
    }

    /// Returns the last four digits
    pub fn last_four(&self) -> &str {
        &self.digits[self.digits.len() - 4..]
    }

    /// Returns the Bank Identification Number (first six digits)
    pub fn bin(&self) -> &str {
        &self.digits[..BIN_LEN]
    }

    /// Classifies the card scheme from its leading digits
    pub fn brand(&self) -> CardBrand {
        let bin6: u32 = self.bin().parse().unwrap_or(0);
        let two = leading(&self.digits, 2);
        let three = leading(&self.digits, 3);
        let four = leading(&self.digits, 4);

        if ELO_BINS.contains(&bin6)
            || ELO_RANGES.iter().any(|(lo, hi)| (*lo..=*hi).contains(&bin6))
        {
            return CardBrand::Elo;
        }
        if HIPERCARD_PREFIXES.iter().any(|p| self.digits.starts_with(p)) {
            return CardBrand::Hipercard;
        }
        if two == 34 || two == 37 {
            return CardBrand::Amex;
        }
        if (300..=305).contains(&three) || two == 36 || two == 38 {
            return CardBrand::Diners;
        }
        if four == 6011
            || two == 65
            || (644..=649).contains(&three)
            || (622_126..=622_925).contains(&bin6)
        {
            return CardBrand::Discover;
        }
        if (51..=55).contains(&two) || (2221..=2720).contains(&four) {
            return CardBrand::Mastercard;
        }
        if self.digits.starts_with('4') {
            return CardBrand::Visa;
        }
        CardBrand::Unknown
    }
}

fn leading(digits: &str, n: usize) -> u32 {
    digits[..n].parse().unwrap_or(0)
}

impl fmt::Display for CardNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.masked())
    }
}

impl fmt::Debug for CardNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CardNumber")
            .field("digits", &self.masked())
            .finish()
    }
}

impl Serialize for CardNumber {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.masked())
    }
}

impl<'de> Deserialize<'de> for CardNumber {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        CardNumber::parse(&raw).map_err(serde::de::Error::custom)
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::checksum::luhn_check_digit;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn synthesized_pans_parse(payload in proptest::collection::vec(0u8..10, 12..=18)) {
            let check = luhn_check_digit(&payload);
            let mut digits = payload;
            digits.push(check);
            let raw: String = digits.iter().map(|d| (d + b'0') as char).collect();

            let card = CardNumber::parse(&raw).unwrap();
            prop_assert_eq!(card.value(), raw.as_str());
            prop_assert_eq!(card.last_four(), &raw[raw.len() - 4..]);
        }

        #[test]
        fn masked_never_reveals_more_than_four(
            payload in proptest::collection::vec(0u8..10, 12..=18)
        ) {
            let check = luhn_check_digit(&payload);
            let mut digits = payload;
            digits.push(check);
            let raw: String = digits.iter().map(|d| (d + b'0') as char).collect();

            let card = CardNumber::parse(&raw).unwrap();
            let masked = card.masked();
            prop_assert_eq!(masked.len(), raw.len());
            prop_assert_eq!(masked.matches('*').count(), raw.len() - 4);
        }
    }
}
