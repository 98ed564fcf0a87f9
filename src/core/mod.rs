//! Core domain logic for barcheck
//!
//! This module contains pure classification logic with no I/O dependencies.
//!
//! ## Architecture
//!
//! - `models/` - Domain types (Symbology, ScannerFormat, Classification, Locale)
//! - `services/` - Detection, validation, checksums and statistics

pub mod models;
pub mod services;
