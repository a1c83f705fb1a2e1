//! Comprehensive unit tests for the CardNumber module
//!
//! Brand fixtures use the standard industry test PANs, plus synthesized
//! Luhn-valid numbers for the ranges without a published fixture.

use payment_kernel::{CardBrand, CardError, CardNumber};

mod parsing {
    use super::*;

    #[test]
    fn test_parse_plain_digits() {
        let card = CardNumber::parse("4111111111111111").unwrap();
        assert_eq!(card.value(), "4111111111111111");
    }

    #[test]
    fn test_parse_with_spaces_and_dashes() {
        let card = CardNumber::parse("4111-1111 1111-1111").unwrap();
        assert_eq!(card.value(), "4111111111111111");
    }

    #[test]
    fn test_reject_bad_checksum() {
        let result = CardNumber::parse("4111111111111112");
        assert!(matches!(result, Err(CardError::InvalidCardNumber(_))));
    }

    #[test]
    fn test_reject_too_short() {
        let result = CardNumber::parse("4111");
        assert!(matches!(result, Err(CardError::InvalidCardNumber(_))));
    }

    #[test]
    fn test_reject_too_long() {
        let result = CardNumber::parse("41111111111111111111");
        assert!(matches!(result, Err(CardError::InvalidCardNumber(_))));
    }

    #[test]
    fn test_reject_empty_and_non_digit() {
        assert!(CardNumber::parse("").is_err());
        assert!(CardNumber::parse("   ").is_err());
        assert!(CardNumber::parse("4111x11111111111").is_err());
    }

    #[test]
    fn test_accepts_13_digit_number() {
        let card = CardNumber::parse("4222222222222").unwrap();
        assert_eq!(card.value().len(), 13);
    }
}

mod masking {
    use super::*;

    #[test]
    fn test_masked_keeps_only_last_four() {
        let card = CardNumber::parse("4111111111111111").unwrap();
        assert_eq!(card.masked(), "************1111");
    }

    #[test]
    fn test_formatted_masked_groups_of_four() {
        let card = CardNumber::parse("4111111111111111").unwrap();
        assert_eq!(card.formatted_masked(), "**** **** **** 1111");
    }

    #[test]
    fn test_masked_15_digit_amex() {
        let card = CardNumber::parse("378282246310005").unwrap();
        assert_eq!(card.masked(), "***********0005");
        assert_eq!(card.formatted_masked(), "**** **** ***0 005");
    }

    #[test]
    fn test_last_four_and_bin() {
        let card = CardNumber::parse("5555555555554444").unwrap();
        assert_eq!(card.last_four(), "4444");
        assert_eq!(card.bin(), "555555");
    }
}

mod brands {
    use super::*;

    fn brand_of(raw: &str) -> CardBrand {
        CardNumber::parse(raw).unwrap().brand()
    }

    #[test]
    fn test_visa() {
        assert_eq!(brand_of("4111111111111111"), CardBrand::Visa);
        assert_eq!(brand_of("4222222222222"), CardBrand::Visa);
    }

    #[test]
    fn test_mastercard_legacy_range() {
        assert_eq!(brand_of("5555555555554444"), CardBrand::Mastercard);
    }

    #[test]
    fn test_mastercard_2_series_range() {
        assert_eq!(brand_of("2221000000000009"), CardBrand::Mastercard);
    }

    #[test]
    fn test_amex() {
        assert_eq!(brand_of("378282246310005"), CardBrand::Amex);
    }

    #[test]
    fn test_elo_bin_list() {
        assert_eq!(brand_of("6362970000457013"), CardBrand::Elo);
    }

    #[test]
    fn test_elo_wins_over_visa_prefix() {
        // BIN 451416 is in the Elo list even though it starts with 4
        assert_eq!(brand_of("4514160000000003"), CardBrand::Elo);
    }

    #[test]
    fn test_hipercard() {
        assert_eq!(brand_of("6062826786276634"), CardBrand::Hipercard);
    }

    #[test]
    fn test_discover() {
        assert_eq!(brand_of("6011111111111117"), CardBrand::Discover);
    }

    #[test]
    fn test_diners() {
        assert_eq!(brand_of("30569309025904"), CardBrand::Diners);
    }

    #[test]
    fn test_unknown_prefix() {
        assert_eq!(brand_of("1234567890128"), CardBrand::Unknown);
    }

    #[test]
    fn test_brand_name() {
        assert_eq!(CardBrand::Mastercard.name(), "mastercard");
        assert_eq!(CardBrand::Unknown.to_string(), "unknown");
    }
}

mod exposure {
    use super::*;

    #[test]
    fn test_serializes_masked_only() {
        let card = CardNumber::parse("4111111111111111").unwrap();
        let json = serde_json::to_string(&card).unwrap();
        assert_eq!(json, "\"************1111\"");
        assert!(!json.contains("4111111111111111"));
    }

    #[test]
    fn test_display_is_masked() {
        let card = CardNumber::parse("378282246310005").unwrap();
        assert_eq!(card.to_string(), "***********0005");
    }

    #[test]
    fn test_debug_is_masked() {
        let card = CardNumber::parse("4111111111111111").unwrap();
        assert!(!format!("{card:?}").contains("4111111111111111"));
    }

    #[test]
    fn test_deserializes_from_raw_pan() {
        let card: CardNumber = serde_json::from_str("\"4111 1111 1111 1111\"").unwrap();
        assert_eq!(card.last_four(), "1111");
    }

    #[test]
    fn test_deserialize_rejects_invalid_pan() {
        let result: Result<CardNumber, _> = serde_json::from_str("\"4111111111111112\"");
        assert!(result.is_err());
    }
}
