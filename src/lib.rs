//! barcheck - Barcode classification and validation
//!
//! This library classifies decoded barcode text (from a camera scanner or
//! keyboard entry) into a symbology, validates its shape and check digit, and
//! filters out misreads of ordinary text.

// Deny all clippy warnings in this crate
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cargo_common_metadata
)]

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod config;
pub mod core;
pub mod output;

pub use crate::core::models::{Classification, Locale, ScannerFormat, Symbology};
pub use crate::core::services::{classify, classify_localized};
