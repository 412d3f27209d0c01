//! Decode command implementation.

use crate::utils::{TableArgs, parse_bit_string, parse_hex};
use oxijpeg_core::MsbBitReader;
use oxijpeg_huffman::HuffmanDecoder;
use serde::Serialize;

/// Bit source for the decode command.
#[derive(Debug, Clone)]
pub enum DecodeInput {
    /// Literal `0`/`1` string.
    Bits(String),
    /// Hex bytes, read MSB first.
    Hex(String),
}

/// JSON output for a decode run.
#[derive(Debug, Serialize)]
struct DecodeJson {
    bits: usize,
    symbols: Vec<u8>,
    pending_bits: usize,
}

pub fn cmd_decode(
    args: &TableArgs,
    input: &DecodeInput,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let table = args.resolve()?;
    let mut decoder = HuffmanDecoder::from_table(&table)?;

    let bits = match input {
        DecodeInput::Bits(text) => parse_bit_string(text)?,
        DecodeInput::Hex(text) => {
            let data = parse_hex(text)?;
            MsbBitReader::new(&data).collect()
        }
    };
    log::debug!("decoding {} bits against {} codes", bits.len(), decoder.leaf_count());

    let symbols = decoder.decode_bits(bits.iter().copied())?;
    let pending = decoder.pending_bits();

    if json {
        let output = DecodeJson {
            bits: bits.len(),
            symbols,
            pending_bits: pending,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    println!("Bits: {}", bits.len());
    println!("Symbols ({}):", symbols.len());
    for chunk in symbols.chunks(16) {
        let line: Vec<String> = chunk.iter().map(|s| format!("{:02X}", s)).collect();
        println!("  {}", line.join(" "));
    }
    if pending > 0 {
        println!("Trailing bits (incomplete code): {}", pending);
    }

    Ok(())
}
