//! Table command implementation.

use crate::utils::{TableArgs, bit_string};
use oxijpeg_huffman::HuffmanDecoder;
use serde::Serialize;

/// JSON serializable code entry.
#[derive(Debug, Serialize)]
struct CodeJson {
    symbol: u8,
    length: u8,
    code: String,
}

/// JSON output for a code table.
#[derive(Debug, Serialize)]
struct TableJson {
    bits: Vec<u8>,
    total_codes: usize,
    nodes: usize,
    codes: Vec<CodeJson>,
}

pub fn cmd_table(args: &TableArgs, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let table = args.resolve()?;
    let decoder = HuffmanDecoder::from_table(&table)?;
    let entries = decoder.code_table();

    if json {
        let output = TableJson {
            bits: table.bits.clone(),
            total_codes: entries.len(),
            nodes: decoder.node_count(),
            codes: entries
                .iter()
                .map(|e| CodeJson {
                    symbol: e.symbol,
                    length: e.length,
                    code: bit_string(e.bits()),
                })
                .collect(),
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    println!("Codes: {}  Max length: {}", entries.len(), table.max_length());
    println!();
    println!("{:>6}  {:>6}  Code", "Symbol", "Length");
    println!("{}", "-".repeat(32));
    for entry in &entries {
        println!("  0x{:02X}  {:>6}  {}", entry.symbol, entry.length, entry);
    }

    Ok(())
}
