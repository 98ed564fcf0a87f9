//! Classification services
//!
//! Pure functions over strings and domain models. Nothing here does I/O.
//!
//! - [`classifier`] - The `classify` entry point
//! - [`detector`] - Format auto-detection
//! - [`noise`] - False-positive filter
//! - [`validator`] - Per-format validation
//! - [`checksum`] - EAN/UPC check digits
//! - [`stats`] - Statistics over scan history
//! - [`dedup`] - Duplicate-scan suppression for callers

pub mod checksum;
pub mod classifier;
pub mod dedup;
pub mod detector;
pub mod noise;
pub mod stats;
pub mod validator;

pub use checksum::{CheckDigitError, PayloadCheck, check_payload, complete_ean8, complete_ean13};
pub use classifier::{classify, classify_localized};
pub use dedup::DuplicateFilter;
pub use detector::detect;
pub use noise::{NoiseReason, noise_reason};
pub use stats::{ScanStats, TypeCount};
pub use validator::{validate, validate_format};
