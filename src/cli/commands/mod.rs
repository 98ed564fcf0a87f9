//! Command implementations

mod batch;
mod check_digit;
mod classify;
mod formats;
mod init;
mod stream;

pub use batch::batch;
pub use check_digit::check_digit;
pub use classify::classify;
pub use formats::formats;
pub use init::init;
pub use stream::stream;

use barcheck::ScannerFormat;
use barcheck::config::Config;
use barcheck::output::OutputMode;

/// Settings shared by every command
#[derive(Debug)]
pub struct Context {
    /// Human or JSON output
    pub mode: OutputMode,
    /// Resolved configuration
    pub config: Config,
    /// Hint from the config, used when a command gets none
    pub default_hint: Option<ScannerFormat>,
    /// Explain rejections
    pub verbose: bool,
}

impl Context {
    /// Build the context, validating the configured hint
    pub fn new(mode: OutputMode, config: Config, verbose: bool) -> anyhow::Result<Self> {
        let default_hint = config.hint()?;
        Ok(Self {
            mode,
            config,
            default_hint,
            verbose,
        })
    }

    /// Command-line hint if given, otherwise the configured one
    pub fn hint(&self, explicit: Option<ScannerFormat>) -> Option<ScannerFormat> {
        explicit.or(self.default_hint)
    }
}
