//! Barcode symbologies
//!
//! The closed set of formats the classifier can resolve a code to, plus the
//! static lookup tables hung off it (descriptions, badge colors, icons).
//! Every table is an exhaustive `match`, so adding a variant fails to compile
//! until each table covers it.

use serde::{Deserialize, Serialize};

use super::Locale;

/// Barcode symbology resolved by the classifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub enum Symbology {
    /// Code 128, high-density alphanumeric
    #[serde(rename = "Code128")]
    Code128,
    /// Code 39, industrial alphanumeric framed by `*`
    #[serde(rename = "Code39")]
    Code39,
    /// Code 93
    #[serde(rename = "Code93")]
    Code93,
    /// EAN-13 retail
    #[serde(rename = "EAN-13")]
    Ean13,
    /// EAN-8 retail (short form)
    #[serde(rename = "EAN-8")]
    Ean8,
    /// UPC-A retail
    #[serde(rename = "UPC-A")]
    UpcA,
    /// UPC-E retail (zero-suppressed)
    #[serde(rename = "UPC-E")]
    UpcE,
    /// Codabar
    #[serde(rename = "Codabar")]
    Codabar,
    /// No pattern matched
    #[default]
    #[serde(rename = "Unknown")]
    Unknown,
}

impl Symbology {
    /// Every symbology, in display order
    pub const ALL: [Self; 9] = [
        Self::Code128,
        Self::Code39,
        Self::Code93,
        Self::Ean13,
        Self::Ean8,
        Self::UpcA,
        Self::UpcE,
        Self::Codabar,
        Self::Unknown,
    ];

    /// Canonical display name (e.g. `"EAN-13"`)
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Code128 => "Code128",
            Self::Code39 => "Code39",
            Self::Code93 => "Code93",
            Self::Ean13 => "EAN-13",
            Self::Ean8 => "EAN-8",
            Self::UpcA => "UPC-A",
            Self::UpcE => "UPC-E",
            Self::Codabar => "Codabar",
            Self::Unknown => "Unknown",
        }
    }

    /// Whether this symbology carries a mod-10 check digit we recompute
    #[must_use]
    pub const fn has_check_digit(self) -> bool {
        matches!(self, Self::Ean13 | Self::Ean8 | Self::UpcA)
    }

    /// Human-readable description in the given locale
    #[must_use]
    pub const fn description(self, locale: Locale) -> &'static str {
        match locale {
            Locale::En => match self {
                Self::Code128 => "Code 128 - High-density format for alphanumeric data",
                Self::Code39 => "Code 39 - Industrial alphanumeric format",
                Self::Code93 => "Code 93 - Improved version of Code 39",
                Self::Ean13 => "EAN-13 - European standard for consumer products",
                Self::Ean8 => "EAN-8 - Short version for small products",
                Self::UpcA => "UPC-A - American standard for consumer products",
                Self::UpcE => "UPC-E - Compact UPC version for small spaces",
                Self::Codabar => "Codabar - Format for libraries and medical use",
                Self::Unknown => "Unrecognized barcode format",
            },
            Locale::Fr => match self {
                Self::Code128 => "Code 128 - Format haute densité pour données alphanumériques",
                Self::Code39 => "Code 39 - Format alphanumérique industriel",
                Self::Code93 => "Code 93 - Version améliorée de Code 39",
                Self::Ean13 => "EAN-13 - Standard européen pour produits de consommation",
                Self::Ean8 => "EAN-8 - Version courte pour petits produits",
                Self::UpcA => "UPC-A - Standard américain pour produits de consommation",
                Self::UpcE => "UPC-E - Version compacte UPC pour petits espaces",
                Self::Codabar => "Codabar - Format pour bibliothèques et médical",
                Self::Unknown => "Format de code-barres non reconnu",
            },
        }
    }

    /// Badge color classes used by the inventory UI
    #[must_use]
    pub const fn color_class(self) -> &'static str {
        match self {
            Self::Code128 => "bg-blue-100 text-blue-800 border-blue-200",
            Self::Ean13 | Self::Ean8 => "bg-green-100 text-green-800 border-green-200",
            Self::UpcA | Self::UpcE => "bg-purple-100 text-purple-800 border-purple-200",
            Self::Code39 | Self::Code93 => "bg-orange-100 text-orange-800 border-orange-200",
            Self::Codabar => "bg-yellow-100 text-yellow-800 border-yellow-200",
            Self::Unknown => "bg-gray-100 text-gray-800 border-gray-200",
        }
    }

    /// Icon glyph shown next to the badge
    #[must_use]
    pub const fn icon(self) -> &'static str {
        match self {
            Self::Code128 => "📊",
            Self::Ean13 | Self::Ean8 => "🛒",
            Self::UpcA | Self::UpcE => "🇺🇸",
            Self::Code39 | Self::Code93 => "🏭",
            Self::Codabar => "📚",
            Self::Unknown => "❓",
        }
    }
}

impl std::fmt::Display for Symbology {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.display_name())
    }
}
