//! Property-based tests for the classifier
//!
//! Properties that must hold for every input of a given shape.

use barcheck::core::services::checksum::ean13_check_digit;
use barcheck::core::services::validate;
use barcheck::{Symbology, classify};
use proptest::prelude::*;

proptest! {
    #[test]
    fn thirteen_digits_are_ean13(code in "[0-9]{13}") {
        let c = classify(&code, None);
        prop_assert_eq!(c.format, Symbology::Ean13);
        let expected = ean13_check_digit(&code);
        prop_assert_eq!(c.is_valid, expected == code.chars().last());
        prop_assert_eq!(c.check_digit, expected);
    }

    #[test]
    fn upca_matches_zero_padded_ean13(code in "[0-9]{12}") {
        let c = classify(&code, None);
        prop_assert_eq!(c.format, Symbology::UpcA);
        prop_assert_eq!(c.is_valid, validate(&format!("0{code}"), Symbology::Ean13));
    }

    #[test]
    fn accented_is_never_valid(
        prefix in "[A-Z0-9]{0,10}",
        accent in "[àéèçñüÀÉÑ]",
        suffix in "[A-Z0-9]{0,10}",
    ) {
        let code = format!("{prefix}{accent}{suffix}");
        prop_assert!(!classify(&code, None).is_valid);
    }

    #[test]
    fn reclassifying_code_is_stable(raw in "\\PC{0,60}") {
        let first = classify(&raw, None);
        let second = classify(&first.code, None);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn out_of_range_lengths_are_invalid(code in "[A-Z0-9]{51,80}|[A-Z0-9]{0,2}") {
        prop_assert!(!classify(&code, None).is_valid);
    }

    #[test]
    fn generic_alphanumeric_is_code128(code in "[a-z][a-zA-Z0-9]{5,19}") {
        prop_assert_eq!(classify(&code, None).format, Symbology::Code128);
    }

    #[test]
    fn classify_never_panics(raw in "\\PC*") {
        let _ = classify(&raw, None);
    }
}
