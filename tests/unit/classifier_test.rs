//! Tests for the classifier entry point
//!
//! Exercises detection, noise filtering, validation and check digits together
//! through `classify`.

use barcheck::core::services::classify_localized;
use barcheck::{Locale, ScannerFormat, Symbology, classify};

use crate::common::{NOISE, VALID_EAN8, VALID_EAN13, VALID_UPCA, classify_all, corrupt_check_digit};

// =============================================================================
// RETAIL FORMATS
// =============================================================================

#[test]
fn test_valid_ean13_fixtures() {
    for c in classify_all(VALID_EAN13) {
        assert_eq!(c.format, Symbology::Ean13, "{}", c.code);
        assert!(c.is_valid, "{}", c.code);
        assert_eq!(c.check_digit, c.code.chars().last());
    }
}

#[test]
fn test_corrupted_ean13_keeps_format() {
    for code in VALID_EAN13 {
        let bad = corrupt_check_digit(code);
        let c = classify(&bad, None);
        assert_eq!(c.format, Symbology::Ean13);
        assert!(!c.is_valid, "{bad} should fail its checksum");
        assert_eq!(c.check_digit, code.chars().last());
    }
}

#[test]
fn test_valid_ean8_fixtures() {
    for c in classify_all(VALID_EAN8) {
        assert_eq!(c.format, Symbology::Ean8);
        assert!(c.is_valid);
    }
}

#[test]
fn test_valid_upca_fixtures() {
    for c in classify_all(VALID_UPCA) {
        assert_eq!(c.format, Symbology::UpcA);
        assert!(c.is_valid);
        assert_eq!(c.check_digit, c.code.chars().last());
    }
}

#[test]
fn test_upce_is_length_only() {
    let c = classify("123456", None);
    assert_eq!(c.format, Symbology::UpcE);
    assert!(c.is_valid);
    assert_eq!(c.check_digit, None);
}

// =============================================================================
// CODE39 / CODE128
// =============================================================================

#[test]
fn test_code39_needs_delimiters() {
    let framed = classify("*CODE39*", None);
    assert_eq!(framed.format, Symbology::Code39);
    assert!(framed.is_valid);

    let bare = classify("CODE39", None);
    assert_ne!(bare.format, Symbology::Code39);

    let hinted = classify("CODE39", Some(ScannerFormat::Code39));
    assert_eq!(hinted.format, Symbology::Code39);
    assert!(!hinted.is_valid);
}

#[test]
fn test_alphanumeric_falls_through_to_code128() {
    let c = classify("SKU-2024-0001", None);
    assert_eq!(c.format, Symbology::Code128);
    assert!(c.is_valid);
}

// =============================================================================
// NOISE AND EDGE CASES
// =============================================================================

#[test]
fn test_noise_is_never_valid() {
    for c in classify_all(NOISE) {
        assert!(!c.is_valid, "{:?} should be rejected", c.code);
    }
}

#[test]
fn test_noise_rejected_even_when_hinted() {
    let c = classify("CAFÉ-01", Some(ScannerFormat::Codabar));
    assert_eq!(c.format, Symbology::Codabar);
    assert!(!c.is_valid);
}

#[test]
fn test_empty_and_whitespace() {
    for raw in ["", "   ", "\n\t"] {
        let c = classify(raw, None);
        assert_eq!(c.code, "");
        assert_eq!(c.format, Symbology::Unknown);
        assert!(!c.is_valid);
        assert_eq!(c.check_digit, None);
    }
}

#[test]
fn test_non_ascii_is_unknown() {
    let c = classify("バーコード", None);
    assert_eq!(c.format, Symbology::Unknown);
    assert!(!c.is_valid);
}

#[test]
fn test_hint_outside_symbologies_is_ignored() {
    let hinted = classify("96385074", Some(ScannerFormat::DataMatrix));
    let plain = classify("96385074", None);
    assert_eq!(hinted, plain);
}

#[test]
fn test_locale_changes_only_description() {
    let en = classify_localized("4006381333931", None, Locale::En);
    let fr = classify_localized("4006381333931", None, Locale::Fr);
    assert_ne!(en.description, fr.description);
    assert_eq!(en.format, fr.format);
    assert_eq!(en.is_valid, fr.is_valid);
    assert_eq!(en.check_digit, fr.check_digit);
}
