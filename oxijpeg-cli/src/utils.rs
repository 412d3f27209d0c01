//! Utility functions for the CLI.

use clap::{Args, ValueEnum};
use oxijpeg_core::{OxiJpegError, Result};
use oxijpeg_huffman::HuffmanTable;

/// Standard table presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Preset {
    /// Annex K luminance DC table
    DcLuminance,
    /// Annex K chrominance DC table
    DcChrominance,
    /// Annex K luminance AC table
    AcLuminance,
    /// Annex K chrominance AC table
    AcChrominance,
}

impl Preset {
    pub fn table(self) -> HuffmanTable {
        match self {
            Preset::DcLuminance => HuffmanTable::dc_luminance(),
            Preset::DcChrominance => HuffmanTable::dc_chrominance(),
            Preset::AcLuminance => HuffmanTable::ac_luminance(),
            Preset::AcChrominance => HuffmanTable::ac_chrominance(),
        }
    }
}

/// Where the Huffman table comes from.
#[derive(Debug, Clone, Args)]
pub struct TableArgs {
    /// Use a standard table
    #[arg(short, long, value_enum, conflicts_with_all = ["lengths", "values"])]
    pub preset: Option<Preset>,

    /// Code counts per length, starting at length 1 (e.g. 0,2,1,3)
    #[arg(short = 'L', long, value_delimiter = ',', value_parser = parse_byte)]
    pub lengths: Vec<u8>,

    /// Symbols in code order; accepts decimal or 0x-prefixed hex
    #[arg(short = 'S', long, value_delimiter = ',', value_parser = parse_byte)]
    pub values: Vec<u8>,
}

impl TableArgs {
    /// Resolve the arguments into a table.
    pub fn resolve(&self) -> Result<HuffmanTable> {
        match self.preset {
            Some(preset) => Ok(preset.table()),
            None if self.lengths.is_empty() => Err(OxiJpegError::invalid_input(
                "either --preset or --lengths is required",
            )),
            None => Ok(HuffmanTable::new(self.lengths.clone(), self.values.clone())),
        }
    }
}

/// Parse a byte given as decimal or `0x`-prefixed hex.
pub fn parse_byte(s: &str) -> std::result::Result<u8, String> {
    let s = s.trim();
    let parsed = match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        Some(hex) => u8::from_str_radix(hex, 16),
        None => s.parse(),
    };
    parsed.map_err(|e| format!("invalid byte '{s}': {e}"))
}

/// Parse a string of `0`/`1` characters; `_` and whitespace are ignored.
pub fn parse_bit_string(s: &str) -> Result<Vec<bool>> {
    s.chars()
        .filter(|c| *c != '_' && !c.is_whitespace())
        .map(|c| match c {
            '0' => Ok(false),
            '1' => Ok(true),
            other => Err(OxiJpegError::invalid_input(format!(
                "unexpected character '{other}' in bit string"
            ))),
        })
        .collect()
}

/// Parse hex bytes; whitespace between digits is ignored.
pub fn parse_hex(s: &str) -> Result<Vec<u8>> {
    let digits: Vec<char> = s.chars().filter(|c| !c.is_whitespace()).collect();
    if digits.len() % 2 != 0 {
        return Err(OxiJpegError::invalid_input("odd number of hex digits"));
    }

    digits
        .chunks_exact(2)
        .map(|pair| {
            let text: String = pair.iter().collect();
            u8::from_str_radix(&text, 16)
                .map_err(|_| OxiJpegError::invalid_input(format!("invalid hex byte '{text}'")))
        })
        .collect()
}

/// Render a code as `0`/`1` characters.
pub fn bit_string(bits: impl Iterator<Item = bool>) -> String {
    bits.map(|b| if b { '1' } else { '0' }).collect()
}
