//! CLI tool converting a Sui Shou Ji (随手记) CSV export into a five-field ledger.
//!
//! # Usage
//!
//! ```bash
//! # Convert src.csv into dst.csv in the current directory
//! sui-convert
//!
//! # Explicit paths
//! sui-convert --input export.csv --output ledger.csv
//!
//! # Read from stdin, write to stdout, pair empty-account transfer halves too
//! cat export.csv | sui-convert -i - -o - --pairing strict > ledger.csv
//! ```
//!
//! Set `RUST_LOG=debug` to see skipped rows and unmatched transfers.

use std::{
    fmt::Write as _,
    fs::File,
    io::{Read, Write, stdin, stdout},
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use sui_ledger::{
    classify::PairingMode,
    convert::{ConversionSummary, ConvertOptions, convert},
    reader::DEFAULT_HEADER_ROWS,
};
use tracing::error;

/// Convert a Sui Shou Ji export into `time,from,to,value,description` rows.
///
/// Income and expense rows become single transactions, transfer halves are
/// paired by association id, and loans booked against the receivable/payable
/// placeholders are resolved to the counterparty named in the remark.
#[derive(Parser, Debug)]
#[command(name = "sui-convert")]
#[command(version, about)]
struct Args {
    /// Input export. `-` reads from stdin.
    #[arg(short, long, default_value = "src.csv")]
    input: PathBuf,

    /// Output ledger. `-` writes to stdout.
    #[arg(short, long, default_value = "dst.csv")]
    output: PathBuf,

    /// Header rows to skip at the top of the export.
    #[arg(long, default_value_t = DEFAULT_HEADER_ROWS)]
    skip_rows: usize,

    /// How to pair transfer halves whose account is empty.
    #[arg(long, value_enum, default_value_t = PairingArg::Lenient)]
    pairing: PairingArg,
}

/// Transfer pairing modes for CLI arguments.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum PairingArg {
    /// A half with an empty account counts as missing.
    Lenient,
    /// Any arrived half counts, even with an empty account.
    Strict,
}

impl From<PairingArg> for PairingMode {
    fn from(arg: PairingArg) -> Self {
        match arg {
            PairingArg::Lenient => PairingMode::Lenient,
            PairingArg::Strict => PairingMode::Strict,
        }
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run() {
        error!("{e:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let args = Args::parse();

    let input: Box<dyn Read> = if is_stdio(&args.input) {
        Box::new(stdin().lock())
    } else {
        let file = File::open(&args.input)
            .with_context(|| format!("Failed to open input file: {}", args.input.display()))?;
        Box::new(file)
    };

    let output: Box<dyn Write> = if is_stdio(&args.output) {
        Box::new(stdout().lock())
    } else {
        let file = File::create(&args.output)
            .with_context(|| format!("Failed to create output file: {}", args.output.display()))?;
        Box::new(file)
    };

    let options = ConvertOptions { header_rows: args.skip_rows, pairing: args.pairing.into() };
    let summary = convert(input, output, options)
        .with_context(|| format!("Failed to convert {}", args.input.display()))?;

    // stderr, so stdout can carry the ledger
    eprintln!("{}", report(&summary));

    Ok(())
}

fn is_stdio(path: &Path) -> bool {
    path.as_os_str() == "-"
}

/// One-line summary of a finished run.
fn report(summary: &ConversionSummary) -> String {
    let mut line = format!(
        "Converted {} transaction(s) from {} record(s)",
        summary.transactions_written, summary.records_read
    );
    if summary.skipped > 0 {
        let _ = write!(line, ", skipped {} of unknown kind", summary.skipped);
    }
    if summary.unmatched_transfers > 0 {
        let _ = write!(line, ", dropped {} unmatched transfer half(s)", summary.unmatched_transfers);
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_args() {
        let args = Args::try_parse_from(["sui-convert"]).unwrap();
        assert_eq!(args.input, PathBuf::from("src.csv"));
        assert_eq!(args.output, PathBuf::from("dst.csv"));
        assert_eq!(args.skip_rows, 2);
        assert!(matches!(args.pairing, PairingArg::Lenient));
    }

    #[test]
    fn test_explicit_args() {
        let args = Args::try_parse_from([
            "sui-convert",
            "-i",
            "-",
            "-o",
            "out.csv",
            "--skip-rows",
            "0",
            "--pairing",
            "strict",
        ])
        .unwrap();
        assert!(is_stdio(&args.input));
        assert!(!is_stdio(&args.output));
        assert_eq!(args.skip_rows, 0);
        assert_eq!(PairingMode::from(args.pairing), PairingMode::Strict);
    }

    #[test]
    fn test_rejects_unknown_pairing() {
        assert!(Args::try_parse_from(["sui-convert", "--pairing", "loose"]).is_err());
    }

    #[test]
    fn test_report_plain() {
        let summary =
            ConversionSummary { records_read: 4, transactions_written: 3, ..Default::default() };
        assert_eq!(report(&summary), "Converted 3 transaction(s) from 4 record(s)");
    }

    #[test]
    fn test_report_with_drops() {
        let summary = ConversionSummary {
            records_read: 5,
            transactions_written: 2,
            skipped: 1,
            unmatched_transfers: 1,
        };
        assert_eq!(
            report(&summary),
            "Converted 2 transaction(s) from 5 record(s), skipped 1 of unknown kind, \
             dropped 1 unmatched transfer half(s)"
        );
    }
}
