//! OxiJPEG CLI
//!
//! Inspect JPEG Huffman tables, decode bit streams against them, and run
//! the 8x8 inverse DCT on a coefficient block.

mod commands;
mod utils;

use clap::{ArgGroup, Parser, Subcommand};
use commands::{DecodeInput, cmd_decode, cmd_idct, cmd_table};
use utils::TableArgs;

#[derive(Parser)]
#[command(name = "oxijpeg")]
#[command(author, version, about = "Pure Rust JPEG entropy-decoding tools")]
#[command(long_about = "
OxiJPEG exposes the Huffman decode tree and inverse DCT stages of a JPEG
decoder for inspection and testing.

Examples:
  oxijpeg table --preset dc-luminance
  oxijpeg table --lengths 0,2 --values 10,20 --json
  oxijpeg decode --preset dc-luminance --bits 00_010_1110
  oxijpeg decode --preset ac-luminance --hex 'a5 ff'
  oxijpeg idct 1024,0,-30
")]
struct Cli {
    /// Enable debug logging (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the code assigned to every symbol of a table
    #[command(alias = "t")]
    Table {
        #[command(flatten)]
        table: TableArgs,

        /// Output as JSON (machine-readable)
        #[arg(short, long)]
        json: bool,
    },

    /// Decode a bit string or hex byte stream
    #[command(alias = "d")]
    #[command(group(ArgGroup::new("input").required(true).args(["bits", "hex"])))]
    Decode {
        #[command(flatten)]
        table: TableArgs,

        /// Bits as 0/1 characters ('_' and spaces ignored)
        #[arg(short, long)]
        bits: Option<String>,

        /// Bytes as hex, read most significant bit first
        #[arg(short = 'x', long)]
        hex: Option<String>,

        /// Output as JSON (machine-readable)
        #[arg(short, long)]
        json: bool,
    },

    /// Run the inverse DCT on one 8x8 block
    Idct {
        /// Row-major coefficients; missing trailing values are zero
        #[arg(value_delimiter = ',', allow_negative_numbers = true)]
        coefficients: Vec<f64>,

        /// Output as JSON (machine-readable)
        #[arg(short, long)]
        json: bool,
    },
}

fn init_logging(verbose: bool) {
    let level = if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Warn
    };
    env_logger::builder()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Table { table, json } => cmd_table(&table, json),
        Commands::Decode {
            table,
            bits,
            hex,
            json,
        } => {
            let input = match (bits, hex) {
                (Some(bits), _) => DecodeInput::Bits(bits),
                (None, Some(hex)) => DecodeInput::Hex(hex),
                (None, None) => unreachable!("clap requires --bits or --hex"),
            };
            cmd_decode(&table, &input, json)
        }
        Commands::Idct { coefficients, json } => cmd_idct(&coefficients, json),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
