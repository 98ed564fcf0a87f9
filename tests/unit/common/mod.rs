//! Shared test fixtures and helpers
//!
//! Known-good and known-bad codes used across the unit tests.

use barcheck::{Classification, classify};

/// Valid EAN-13 codes (check digit correct)
pub const VALID_EAN13: &[&str] = &["4006381333931", "5901234123457", "9780306406157"];

/// Valid EAN-8 codes
pub const VALID_EAN8: &[&str] = &["96385074", "55123457"];

/// Valid UPC-A codes
pub const VALID_UPCA: &[&str] = &["036000291452", "012345678905"];

/// Typical misreads of on-screen text
pub const NOISE: &[&str] = &["café", "Entrée", "- & -", "\"'<>", "…", "@@##"];

/// Classify every code without a hint
pub fn classify_all(codes: &[&str]) -> Vec<Classification> {
    codes.iter().map(|code| classify(code, None)).collect()
}

/// Replace the last digit of a numeric code with a wrong one
pub fn corrupt_check_digit(code: &str) -> String {
    let (body, last) = code.split_at(code.len() - 1);
    let last: u32 = last.parse().unwrap();
    format!("{body}{}", (last + 1) % 10)
}
