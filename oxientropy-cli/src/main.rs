//! OxiEntropy CLI
//!
//! Compress and decompress single files with a static Huffman coder or a
//! 32-bit integer range coder.

mod commands;
mod utils;

use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use commands::{cmd_compress, cmd_decompress, cmd_detect, cmd_info};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "oxientropy")]
#[command(author, version, about = "Pure Rust entropy coders - Huffman and range coding")]
#[command(long_about = "
OxiEntropy compresses a file as a whole with an order-0 entropy coder.
Supported codecs: arith (integer range coder), huffman

Examples:
  oxientropy compress book.txt book.arc
  oxientropy compress book.txt book.huf --codec huffman
  oxientropy decompress book.arc book.txt
  oxientropy decompress book.arc book.txt --strict
  oxientropy info book.arc
  oxientropy detect book.huf

Set RUST_LOG (e.g. RUST_LOG=debug) to override the log level.
")]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compress a file
    #[command(alias = "c")]
    Compress {
        /// File to compress
        input: PathBuf,

        /// Output container file
        output: PathBuf,

        /// Entropy coder to use
        #[arg(short, long, value_enum, default_value = "arith")]
        codec: CodecKind,

        /// Print the report as JSON (machine-readable)
        #[arg(short, long)]
        json: bool,
    },

    /// Decompress a container (codec detected from its magic tag)
    #[command(alias = "d")]
    Decompress {
        /// Container file to decompress
        input: PathBuf,

        /// Output file
        output: PathBuf,

        /// Fail on a truncated range coder payload instead of zero-filling it
        #[arg(short, long)]
        strict: bool,

        /// Print the report as JSON (machine-readable)
        #[arg(short, long)]
        json: bool,
    },

    /// Show container header information without decoding
    #[command(alias = "i")]
    Info {
        /// Container file to inspect
        file: PathBuf,

        /// Print as JSON (machine-readable)
        #[arg(short, long)]
        json: bool,
    },

    /// Detect container format
    Detect {
        /// File to detect
        file: PathBuf,
    },
}

/// Entropy coder selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CodecKind {
    /// Static integer range coder (arithmetic coding)
    Arith,
    /// Static Huffman coder
    Huffman,
}

/// Log filter for a `-v` count; `RUST_LOG` takes precedence.
fn log_filter(verbose: u8) -> EnvFilter {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level))
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(log_filter(cli.verbose))
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Compress {
            input,
            output,
            codec,
            json,
        } => cmd_compress(&input, &output, codec, json),
        Commands::Decompress {
            input,
            output,
            strict,
            json,
        } => cmd_decompress(&input, &output, strict, json),
        Commands::Info { file, json } => cmd_info(&file, json),
        Commands::Detect { file } => cmd_detect(&file),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
