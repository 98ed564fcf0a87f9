//! Classification result
//!
//! A classification is created fresh for every call to
//! [`classify`](crate::core::services::classify) and owned by the caller.

use serde::Serialize;

use super::Symbology;

/// Outcome of classifying one decoded string
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Classification {
    /// The trimmed input
    pub code: String,

    /// Resolved symbology
    pub format: Symbology,

    /// Recognized format, shape and checksum rules hold, and not noise
    pub is_valid: bool,

    /// Display sentence for the format
    pub description: &'static str,

    /// Recomputed check digit (EAN-13, EAN-8 and UPC-A only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub check_digit: Option<char>,
}

impl Classification {
    /// Badge color classes for this result's format
    #[must_use]
    pub const fn color_class(&self) -> &'static str {
        self.format.color_class()
    }

    /// Icon glyph for this result's format
    #[must_use]
    pub const fn icon(&self) -> &'static str {
        self.format.icon()
    }
}
