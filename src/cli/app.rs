//! CLI definitions and entry point

use std::io::IsTerminal;
use std::path::PathBuf;

use clap::{Parser, Subcommand};

use super::commands::{self, Context};
use barcheck::ScannerFormat;
use barcheck::config::Config;
use barcheck::output::OutputMode;

/// barcheck - Barcode classification and validation
#[derive(Parser, Debug)]
#[command(
    name = "barcheck",
    version,
    about = "Barcode classification and validation",
    long_about = "Classify decoded barcode text into a symbology and validate it.\n\n\
                  Retail codes (EAN-13, EAN-8, UPC-A) get their check digit verified.\n\
                  Misreads of ordinary text are rejected as noise."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    /// Use this config file instead of the discovered one
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Write a default .barcheck.toml in the current directory
    Init {
        /// Overwrite an existing file
        #[arg(short, long)]
        force: bool,
    },

    /// Classify a single code
    Classify {
        /// Decoded text or typed code (may start with '-')
        #[arg(allow_hyphen_values = true)]
        code: String,

        /// Format reported by the scanner (e.g. ean13, code128, qr_code)
        #[arg(long)]
        hint: Option<ScannerFormat>,

        /// Exit with an error when the code is invalid
        #[arg(long)]
        strict: bool,
    },

    /// Classify one code per line from a file or stdin
    Batch {
        /// Input file ("-" or omitted for stdin)
        file: Option<PathBuf>,

        /// Format hint applied to every line
        #[arg(long)]
        hint: Option<ScannerFormat>,

        /// Exit with an error when any code is invalid
        #[arg(long)]
        strict: bool,
    },

    /// Classify scanner frames from stdin, suppressing repeats
    Stream {
        /// Duplicate window in milliseconds (overrides config)
        #[arg(long, value_name = "MS")]
        window_ms: Option<u64>,

        /// Format hint applied to every frame
        #[arg(long)]
        hint: Option<ScannerFormat>,
    },

    /// Compute or verify an EAN-13 / EAN-8 check digit
    CheckDigit {
        /// 7 or 12 digits to complete, 8 or 13 digits to verify
        payload: String,
    },

    /// List supported formats
    Formats,

    /// Show version
    Version,
}

/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    if !std::io::stdout().is_terminal() {
        colored::control::set_override(false);
    }

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    if let Some(Command::Init { force }) = cli.command {
        return commands::init(force, output_mode);
    }

    let config = Config::discover(cli.config.as_deref())?;
    let ctx = Context::new(output_mode, config, cli.verbose)?;

    match cli.command {
        Some(Command::Classify { code, hint, strict }) => commands::classify(&ctx, &code, hint, strict),
        Some(Command::Batch { file, hint, strict }) => {
            commands::batch(&ctx, file.as_deref(), hint, strict)
        },
        Some(Command::Stream { window_ms, hint }) => commands::stream(&ctx, window_ms, hint),
        Some(Command::CheckDigit { payload }) => commands::check_digit(&ctx, &payload),
        Some(Command::Formats) => commands::formats(&ctx),
        Some(Command::Version) => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": barcheck::VERSION
                    })
                );
            } else {
                println!("barcheck v{}", barcheck::VERSION);
            }
            Ok(())
        },
        Some(Command::Init { .. }) => Ok(()),
        None => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": barcheck::VERSION,
                        "commands": ["classify", "batch", "stream", "check-digit", "formats", "init"]
                    })
                );
            } else {
                println!("barcheck v{}", barcheck::VERSION);
                println!("\nClassify one code:    barcheck classify 4006381333931");
                println!("Classify a file:      barcheck batch codes.txt --strict");
                println!("Scanner frames:       <scanner> | barcheck --json stream");
                println!("\nRun 'barcheck --help' for all commands");
            }
            Ok(())
        },
    }
}
