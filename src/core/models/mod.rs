//! Domain models for barcheck
//!
//! Pure data structures with no I/O dependencies.
//!
//! - [`Symbology`] - The closed set of formats a code resolves to
//! - [`ScannerFormat`] - What a scanning library says it decoded
//! - [`Classification`] - The result of classifying one code
//! - [`Locale`] - Language of the description copy

mod classification;
mod locale;
mod scanner_format;
mod symbology;

pub use classification::Classification;
pub use locale::Locale;
pub use scanner_format::{FormatParseError, ScannerFormat};
pub use symbology::Symbology;
