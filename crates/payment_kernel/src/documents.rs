//! National tax identifiers with check-digit validation
//!
//! Models the two Brazilian taxpayer documents as one tagged sum type:
//! `Individual` (CPF, 11 digits) and `Organization` (CNPJ, 14 digits).
//! Both embed two trailing modulo-11 check digits, verified by the shared
//! engine in [`crate::checksum`]. A value of this type is always fully
//! validated; there is no partially-valid state.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use thiserror::Error;

use crate::checksum::{all_same, mod11_check_digit};

/// Errors raised by tax identifier parsing
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DocumentError {
    #[error("Invalid document: {0}")]
    InvalidDocument(String),
}

const INDIVIDUAL_LEN: usize = 11;
const ORGANIZATION_LEN: usize = 14;

const INDIVIDUAL_WEIGHTS_1: [u32; 9] = [10, 9, 8, 7, 6, 5, 4, 3, 2];
const INDIVIDUAL_WEIGHTS_2: [u32; 10] = [11, 10, 9, 8, 7, 6, 5, 4, 3, 2];
const ORGANIZATION_WEIGHTS_1: [u32; 12] = [5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2];
const ORGANIZATION_WEIGHTS_2: [u32; 13] = [6, 5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2];

/// A validated national tax identifier
///
/// An `Individual` and an `Organization` are never equal, regardless of
/// digit overlap; equality is structural over `(variant, digits)`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum NationalTaxId {
    /// CPF - 11 digits
    Individual(String),
    /// CNPJ - 14 digits
    Organization(String),
}

impl NationalTaxId {
    /// Parses and classifies a raw document string
    ///
    /// Strips every non-digit character, classifies by the remaining
    /// length, rejects all-identical digit sequences, and verifies both
    /// modulo-11 check digits for the classified variant.
    pub fn parse(raw: &str) -> Result<Self, DocumentError> {
        let digits: String = raw.chars().filter(|c| c.is_ascii_digit()).collect();
        match digits.len() {
            INDIVIDUAL_LEN => {
                validate(&digits, &INDIVIDUAL_WEIGHTS_1, &INDIVIDUAL_WEIGHTS_2)?;
                Ok(NationalTaxId::Individual(digits))
            }
            ORGANIZATION_LEN => {
                validate(&digits, &ORGANIZATION_WEIGHTS_1, &ORGANIZATION_WEIGHTS_2)?;
                Ok(NationalTaxId::Organization(digits))
            }
            0 => Err(DocumentError::InvalidDocument(
                "no digits present".to_string(),
            )),
            n => Err(DocumentError::InvalidDocument(format!(
                "expected 11 or 14 digits, found {n}"
            ))),
        }
    }

    /// Returns the raw, unmasked digit string
    ///
    /// This is the explicit raw accessor; default conversions and
    /// serialization use [`masked`](Self::masked) instead.
    pub fn digits(&self) -> &str {
        match self {
            NationalTaxId::Individual(digits) | NationalTaxId::Organization(digits) => digits,
        }
    }

    /// Returns true for the CPF variant
    pub fn is_individual(&self) -> bool {
        matches!(self, NationalTaxId::Individual(_))
    }

    /// Returns true for the CNPJ variant
    pub fn is_organization(&self) -> bool {
        matches!(self, NationalTaxId::Organization(_))
    }

    /// Renders the canonical punctuated form
    ///
    /// CPF: `###.###.###-##`; CNPJ: `##.###.###/####-##`.
    pub fn formatted(&self) -> String {
        match self {
            NationalTaxId::Individual(d) => format!(
                "{}.{}.{}-{}",
                &d[0..3],
                &d[3..6],
                &d[6..9],
                &d[9..11]
            ),
            NationalTaxId::Organization(d) => format!(
                "{}.{}.{}/{}-{}",
                &d[0..2],
                &d[2..5],
                &d[5..8],
                &d[8..12],
                &d[12..14]
            ),
        }
    }

    /// Renders a partially redacted form
    ///
    /// Keeps the leading segment and the trailing check-digit group, masks
    /// everything in between.
    pub fn masked(&self) -> String {
        match self {
            NationalTaxId::Individual(d) => {
                format!("{}.***.***-{}", &d[0..3], &d[9..11])
            }
            NationalTaxId::Organization(d) => {
                format!("{}.***.***/****-{}", &d[0..2], &d[12..14])
            }
        }
    }
}

fn validate(digits: &str, weights_1: &[u32], weights_2: &[u32]) -> Result<(), DocumentError> {
    let values: Vec<u8> = digits.bytes().map(|b| b - b'0').collect();
    if all_same(&values) {
        return Err(DocumentError::InvalidDocument(
            "all digits are identical".to_string(),
        ));
    }
    // First pass covers the payload; the second shifts one position right
    // to include the just-validated first check digit.
    let first = mod11_check_digit(&values[..weights_1.len()], weights_1);
    if first != values[weights_1.len()] {
        return Err(DocumentError::InvalidDocument(
            "first check digit does not match".to_string(),
        ));
    }
    let second = mod11_check_digit(&values[..weights_2.len()], weights_2);
    if second != values[weights_2.len()] {
        return Err(DocumentError::InvalidDocument(
            "second check digit does not match".to_string(),
        ));
    }
    Ok(())
}

impl fmt::Display for NationalTaxId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.masked())
    }
}

impl Serialize for NationalTaxId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.masked())
    }
}

impl<'de> Deserialize<'de> for NationalTaxId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        NationalTaxId::parse(&raw).map_err(serde::de::Error::custom)
    }
}
