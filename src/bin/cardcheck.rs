//! CLI tool for card number validation and formatting.
//!
//! # Usage
//!
//! ```bash
//! # Validate a card number
//! cardcheck validate "4539 5787 6362 1486"
//!
//! # Detect the brand of a (partial) number
//! cardcheck detect 3782
//!
//! # Format for display, optionally forcing a brand
//! cardcheck format 378282246310005
//! cardcheck format 4111111111111111 --brand amex --separator -
//!
//! # Everything at once, as JSON
//! cardcheck inspect 6011000000000004 --output json
//!
//! # Append the Luhn check digit to a partial number
//! cardcheck complete 411111111111111
//! ```
//!
//! Set `RUST_LOG=card_classifier=trace` (or pass `--verbose`) to see
//! library events on stderr.

use std::process::ExitCode;

use card_classifier::{
    check, detect_brand, format, inspect, is_valid_card_number, luhn, mask, normalize, BrandTag,
};
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(name = "cardcheck")]
#[command(author, version, about = "Card number validation and formatting tool")]
struct Cli {
    /// Log library events at debug level (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a card number (length guard + Luhn checksum)
    Validate {
        /// Card number to validate (any separators allowed)
        card_number: String,
    },

    /// Detect card brand from number
    Detect {
        /// Card number (or partial number)
        card_number: String,
    },

    /// Format a card number for display
    Format {
        /// Card number to format
        card_number: String,

        /// Brand grouping to use (detected from the number if omitted)
        #[arg(short, long)]
        brand: Option<BrandArg>,

        /// Separator to use
        #[arg(short, long, default_value = " ")]
        separator: String,
    },

    /// Show brand, validity and display string together
    Inspect {
        /// Card number to inspect
        card_number: String,

        /// Output format
        #[arg(short, long, default_value = "text")]
        output: OutputFormat,
    },

    /// Mask a card number, showing only the last four digits
    Mask {
        /// Card number to mask
        card_number: String,
    },

    /// Append the Luhn check digit to a partial number
    Complete {
        /// Digits without the check digit
        partial: String,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Clone, Copy, ValueEnum)]
enum BrandArg {
    Visa,
    Mastercard,
    Amex,
    Discover,
    Jcb,
    Diners,
    Unknown,
}

impl From<BrandArg> for BrandTag {
    fn from(arg: BrandArg) -> Self {
        match arg {
            BrandArg::Visa => BrandTag::Visa,
            BrandArg::Mastercard => BrandTag::Mastercard,
            BrandArg::Amex => BrandTag::Amex,
            BrandArg::Discover => BrandTag::Discover,
            BrandArg::Jcb => BrandTag::Jcb,
            BrandArg::Diners => BrandTag::Diners,
            BrandArg::Unknown => BrandTag::Unknown,
        }
    }
}

#[derive(Serialize)]
struct InspectReport {
    brand: BrandTag,
    brand_name: &'static str,
    valid: bool,
    display: String,
    masked: String,
    digits: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Validate { card_number } => cmd_validate(&card_number),
        Commands::Detect { card_number } => cmd_detect(&card_number),
        Commands::Format {
            card_number,
            brand,
            separator,
        } => cmd_format(&card_number, brand.map(BrandTag::from), &separator),
        Commands::Inspect {
            card_number,
            output,
        } => cmd_inspect(&card_number, output),
        Commands::Mask { card_number } => cmd_mask(&card_number),
        Commands::Complete { partial } => cmd_complete(&partial),
    }
}

fn cmd_validate(card_number: &str) -> ExitCode {
    match check(card_number) {
        Ok(entry) => {
            println!("Valid: yes");
            println!("Brand: {}", entry.brand());
            println!("Masked: {}", entry.masked());
            ExitCode::SUCCESS
        }
        Err(e) => {
            println!("Valid: no");
            println!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn cmd_detect(card_number: &str) -> ExitCode {
    let brand = detect_brand(card_number);
    println!("Detected Brand: {}", brand);
    if brand.is_known() {
        println!("Tag: {}", brand.tag());
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

fn cmd_format(card_number: &str, brand: Option<BrandTag>, separator: &str) -> ExitCode {
    let brand = brand.unwrap_or_else(|| detect_brand(card_number));
    println!("{}", format::format_with_separator(card_number, brand, separator));
    ExitCode::SUCCESS
}

fn inspect_report(card_number: &str) -> InspectReport {
    let (entry, error) = match check(card_number) {
        Ok(entry) => (entry, None),
        Err(e) => (inspect(card_number), Some(e.to_string())),
    };

    InspectReport {
        brand: entry.brand(),
        brand_name: entry.brand().name(),
        valid: entry.is_valid(),
        display: entry.display(),
        masked: entry.masked(),
        digits: entry.length(),
        error,
    }
}

fn cmd_inspect(card_number: &str, output: OutputFormat) -> ExitCode {
    let report = inspect_report(card_number);

    match output {
        OutputFormat::Text => {
            println!("Brand: {}", report.brand_name);
            println!("Valid: {}", if report.valid { "yes" } else { "no" });
            println!("Display: {}", report.display);
            println!("Masked: {}", report.masked);
            if let Some(error) = &report.error {
                println!("Error: {}", error);
            }
        }
        OutputFormat::Json => match serde_json::to_string_pretty(&report) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("Error: {}", e);
                return ExitCode::FAILURE;
            }
        },
    }

    if report.valid {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

fn cmd_mask(card_number: &str) -> ExitCode {
    if normalize(card_number).len() < 4 {
        eprintln!("Error: need at least 4 digits to mask");
        return ExitCode::FAILURE;
    }
    println!("{}", mask::mask_string(card_number));
    ExitCode::SUCCESS
}

fn cmd_complete(partial: &str) -> ExitCode {
    let digits = normalize(partial);
    if digits.is_empty() {
        eprintln!("Error: no digits provided");
        return ExitCode::FAILURE;
    }

    let check_digit = luhn::generate_check_digit(digits.as_slice());
    let full = format!("{}{}", digits.to_digit_string(), check_digit);
    tracing::debug!(check_digit, valid = is_valid_card_number(&full), "completed number");

    println!("{}", full);
    ExitCode::SUCCESS
}
