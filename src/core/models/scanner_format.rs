//! Formats reported by scanning libraries
//!
//! Decoders such as ZXing report a wider set of formats than the classifier
//! understands. Only the linear retail and industrial formats map onto a
//! [`Symbology`]; a hint outside that set is treated as no hint at all and the
//! classifier falls back to auto-detection.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::Symbology;

/// Error returned when a format name cannot be parsed
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown barcode format: {0}")]
pub struct FormatParseError(pub String);

/// Format hint as reported by a scanning library
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScannerFormat {
    /// Aztec 2D
    Aztec,
    /// Codabar
    Codabar,
    /// Code 39
    Code39,
    /// Code 93
    Code93,
    /// Code 128
    Code128,
    /// Data Matrix 2D
    DataMatrix,
    /// EAN-8
    Ean8,
    /// EAN-13
    Ean13,
    /// Interleaved 2 of 5
    Itf,
    /// MaxiCode 2D
    MaxiCode,
    /// PDF417 stacked
    Pdf417,
    /// QR Code 2D
    QrCode,
    /// GS1 DataBar (RSS-14)
    Rss14,
    /// GS1 DataBar Expanded
    RssExpanded,
    /// UPC-A
    UpcA,
    /// UPC-E
    UpcE,
    /// UPC/EAN 2 or 5 digit extension
    UpcEanExtension,
}

impl ScannerFormat {
    /// The symbology this hint resolves to, if the classifier knows it
    #[must_use]
    pub const fn symbology(self) -> Option<Symbology> {
        match self {
            Self::Codabar => Some(Symbology::Codabar),
            Self::Code39 => Some(Symbology::Code39),
            Self::Code93 => Some(Symbology::Code93),
            Self::Code128 => Some(Symbology::Code128),
            Self::Ean8 => Some(Symbology::Ean8),
            Self::Ean13 => Some(Symbology::Ean13),
            Self::UpcA => Some(Symbology::UpcA),
            Self::UpcE => Some(Symbology::UpcE),
            Self::Aztec
            | Self::DataMatrix
            | Self::Itf
            | Self::MaxiCode
            | Self::Pdf417
            | Self::QrCode
            | Self::Rss14
            | Self::RssExpanded
            | Self::UpcEanExtension => None,
        }
    }

    /// Library-style constant name (e.g. `"EAN_13"`)
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Aztec => "AZTEC",
            Self::Codabar => "CODABAR",
            Self::Code39 => "CODE_39",
            Self::Code93 => "CODE_93",
            Self::Code128 => "CODE_128",
            Self::DataMatrix => "DATA_MATRIX",
            Self::Ean8 => "EAN_8",
            Self::Ean13 => "EAN_13",
            Self::Itf => "ITF",
            Self::MaxiCode => "MAXICODE",
            Self::Pdf417 => "PDF_417",
            Self::QrCode => "QR_CODE",
            Self::Rss14 => "RSS_14",
            Self::RssExpanded => "RSS_EXPANDED",
            Self::UpcA => "UPC_A",
            Self::UpcE => "UPC_E",
            Self::UpcEanExtension => "UPC_EAN_EXTENSION",
        }
    }
}

impl Symbology {
    /// The scanner hint that resolves back to this symbology
    #[must_use]
    pub const fn scanner_format(self) -> Option<ScannerFormat> {
        match self {
            Self::Code128 => Some(ScannerFormat::Code128),
            Self::Code39 => Some(ScannerFormat::Code39),
            Self::Code93 => Some(ScannerFormat::Code93),
            Self::Ean13 => Some(ScannerFormat::Ean13),
            Self::Ean8 => Some(ScannerFormat::Ean8),
            Self::UpcA => Some(ScannerFormat::UpcA),
            Self::UpcE => Some(ScannerFormat::UpcE),
            Self::Codabar => Some(ScannerFormat::Codabar),
            Self::Unknown => None,
        }
    }
}

impl std::fmt::Display for ScannerFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.as_str())
    }
}

impl std::str::FromStr for ScannerFormat {
    type Err = FormatParseError;

    /// Accepts `EAN_13`, `ean-13`, `ean13`, `Code128`, `qr_code` and similar
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .chars()
            .filter(|c| !matches!(c, '_' | '-' | ' '))
            .flat_map(char::to_lowercase)
            .collect();

        match key.as_str() {
            "aztec" => Ok(Self::Aztec),
            "codabar" => Ok(Self::Codabar),
            "code39" => Ok(Self::Code39),
            "code93" => Ok(Self::Code93),
            "code128" => Ok(Self::Code128),
            "datamatrix" => Ok(Self::DataMatrix),
            "ean8" => Ok(Self::Ean8),
            "ean13" => Ok(Self::Ean13),
            "itf" => Ok(Self::Itf),
            "maxicode" => Ok(Self::MaxiCode),
            "pdf417" => Ok(Self::Pdf417),
            "qrcode" | "qr" => Ok(Self::QrCode),
            "rss14" => Ok(Self::Rss14),
            "rssexpanded" => Ok(Self::RssExpanded),
            "upca" => Ok(Self::UpcA),
            "upce" => Ok(Self::UpcE),
            "upceanextension" => Ok(Self::UpcEanExtension),
            _ => Err(FormatParseError(s.to_string())),
        }
    }
}
