//! Bit-at-a-time Huffman decoder.

use crate::tables::HuffmanTable;
use crate::tree::{CodeTree, NodeId};
use oxijpeg_core::{BuildError, DecodeError};
use std::fmt;

/// Position of the decoder within the current code word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Cursor {
    /// At `node`, having consumed `bits` bits of the code word.
    At { node: NodeId, bits: usize },
    /// A bit was rejected; only [`HuffmanDecoder::reset`] or a rebuild leaves this state.
    Faulted,
}

impl Cursor {
    const ROOT: Cursor = Cursor::At {
        node: CodeTree::ROOT,
        bits: 0,
    };
}

/// A symbol and the bit path that decodes to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodeEntry {
    /// Decoded symbol.
    pub symbol: u8,
    /// Path bits, first bit in the most significant position.
    pub code: u16,
    /// Number of bits in the path.
    pub length: u8,
}

impl CodeEntry {
    /// Path bits in decode order (`false` = left, `true` = right).
    pub fn bits(&self) -> impl Iterator<Item = bool> + '_ {
        (0..self.length).rev().map(move |i| (self.code >> i) & 1 == 1)
    }
}

impl fmt::Display for CodeEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:0width$b}", self.code, width = self.length as usize)
    }
}

/// Huffman decoder driven one bit per call.
///
/// The decoder owns the decode tree and a single cursor into it, so one
/// instance decodes one bitstream at a time.
///
/// # Example
///
/// ```rust
/// use oxijpeg_huffman::HuffmanDecoder;
///
/// let mut decoder = HuffmanDecoder::new();
/// decoder.build(&[0, 2], &[10, 20]).unwrap();
///
/// assert_eq!(decoder.move_bit(false).unwrap(), None);
/// assert_eq!(decoder.move_bit(true).unwrap(), Some(20));
/// ```
#[derive(Debug, Clone)]
pub struct HuffmanDecoder {
    tree: CodeTree,
    cursor: Cursor,
}

impl HuffmanDecoder {
    /// Create a decoder with an empty tree.
    pub fn new() -> Self {
        Self {
            tree: CodeTree::new(),
            cursor: Cursor::ROOT,
        }
    }

    /// Create a decoder and build it from `table`.
    pub fn from_table(table: &HuffmanTable) -> Result<Self, BuildError> {
        let mut decoder = Self::new();
        decoder.build(&table.bits, &table.values)?;
        Ok(decoder)
    }

    /// Replace the decode tree.
    ///
    /// `code_lengths[i]` is the number of codes of length `i + 1` (at most
    /// [`MAX_CODE_LENGTH`](crate::MAX_CODE_LENGTH) entries). `values` are
    /// assigned to codes in canonical order: shorter codes first, and
    /// left to right within a length.
    ///
    /// The previous tree is discarded whether or not the build succeeds; a
    /// failed build leaves an empty tree that rejects every bit.
    pub fn build(&mut self, code_lengths: &[u8], values: &[u8]) -> Result<(), BuildError> {
        self.cursor = Cursor::ROOT;
        self.tree.build(code_lengths, values)
    }

    /// Feed one bit (`true` follows the right edge).
    ///
    /// Returns `Some(symbol)` when the bit completes a code word, after
    /// which the cursor is back at the root. A bit with no matching edge
    /// faults the decoder; every later call returns
    /// [`DecodeError::Faulted`] until [`reset`](Self::reset) is called.
    pub fn move_bit(&mut self, bit: bool) -> Result<Option<u8>, DecodeError> {
        let Cursor::At { node, bits } = self.cursor else {
            return Err(DecodeError::Faulted);
        };

        let Some(next) = self.tree.child(node, bit) else {
            self.cursor = Cursor::Faulted;
            return Err(DecodeError::InvalidCode { bits: bits + 1 });
        };

        if self.tree.is_leaf(next) {
            self.cursor = Cursor::ROOT;
            Ok(Some(self.tree.value(next)))
        } else {
            self.cursor = Cursor::At {
                node: next,
                bits: bits + 1,
            };
            Ok(None)
        }
    }

    /// Decode every complete code word in `bits`.
    ///
    /// Bits of a trailing incomplete code word stay pending in the cursor.
    pub fn decode_bits<I>(&mut self, bits: I) -> Result<Vec<u8>, DecodeError>
    where
        I: IntoIterator<Item = bool>,
    {
        let mut symbols = Vec::new();
        for bit in bits {
            if let Some(symbol) = self.move_bit(bit)? {
                symbols.push(symbol);
            }
        }
        Ok(symbols)
    }

    /// Move the cursor back to the root and clear a fault.
    pub fn reset(&mut self) {
        self.cursor = Cursor::ROOT;
    }

    /// Whether no code word is in progress.
    pub fn is_at_root(&self) -> bool {
        self.cursor == Cursor::ROOT
    }

    /// Whether a rejected bit is waiting for [`reset`](Self::reset).
    pub fn is_faulted(&self) -> bool {
        self.cursor == Cursor::Faulted
    }

    /// Bits consumed for the code word in progress.
    pub fn pending_bits(&self) -> usize {
        match self.cursor {
            Cursor::At { bits, .. } => bits,
            Cursor::Faulted => 0,
        }
    }

    /// Every symbol with its code, in left-to-right tree order.
    pub fn code_table(&self) -> Vec<CodeEntry> {
        self.tree
            .leaves()
            .into_iter()
            .map(|leaf| CodeEntry {
                symbol: leaf.value,
                code: leaf.code,
                length: leaf.length,
            })
            .collect()
    }

    /// Number of decodable symbols.
    pub fn leaf_count(&self) -> usize {
        self.tree.leaf_count()
    }

    /// Number of tree nodes, root included.
    pub fn node_count(&self) -> usize {
        self.tree.node_count()
    }
}

impl Default for HuffmanDecoder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bits(s: &str) -> impl Iterator<Item = bool> + '_ {
        s.chars().map(|c| c == '1')
    }

    #[test]
    fn test_empty_decoder_rejects_bits() {
        let mut decoder = HuffmanDecoder::new();
        assert!(decoder.is_at_root());
        assert_eq!(
            decoder.move_bit(false),
            Err(DecodeError::InvalidCode { bits: 1 })
        );
    }

    #[test]
    fn test_symbol_only_on_last_bit() {
        let mut decoder = HuffmanDecoder::new();
        decoder.build(&[1, 1, 2], &[1, 2, 3, 4]).unwrap();

        assert_eq!(decoder.move_bit(true), Ok(None));
        assert_eq!(decoder.pending_bits(), 1);
        assert_eq!(decoder.move_bit(true), Ok(None));
        assert_eq!(decoder.pending_bits(), 2);
        assert_eq!(decoder.move_bit(false), Ok(Some(3)));
        assert!(decoder.is_at_root());
    }

    #[test]
    fn test_fault_requires_reset() {
        let mut decoder = HuffmanDecoder::new();
        decoder.build(&[1, 1], &[5, 6]).unwrap();

        // "11" is not a code.
        assert_eq!(decoder.move_bit(true), Ok(None));
        assert_eq!(
            decoder.move_bit(true),
            Err(DecodeError::InvalidCode { bits: 2 })
        );
        assert!(decoder.is_faulted());
        assert_eq!(decoder.move_bit(false), Err(DecodeError::Faulted));

        decoder.reset();
        assert_eq!(decoder.move_bit(false), Ok(Some(5)));
    }

    #[test]
    fn test_rebuild_clears_fault_and_cursor() {
        let mut decoder = HuffmanDecoder::new();
        decoder.build(&[0, 2], &[10, 20]).unwrap();
        assert_eq!(decoder.move_bit(false), Ok(None));

        decoder.build(&[2], &[1, 2]).unwrap();
        assert!(decoder.is_at_root());
        assert_eq!(decoder.move_bit(true), Ok(Some(2)));
    }

    #[test]
    fn test_decode_bits_keeps_partial_code() {
        let mut decoder = HuffmanDecoder::new();
        decoder.build(&[1, 1, 2], &[1, 2, 3, 4]).unwrap();

        let symbols = decoder.decode_bits(bits("0101101111")).unwrap();
        assert_eq!(symbols, vec![1, 2, 3, 4]);
        assert_eq!(decoder.pending_bits(), 1);
    }

    #[test]
    fn test_code_entry_display_and_bits() {
        let entry = CodeEntry {
            symbol: 9,
            code: 0b0110,
            length: 4,
        };
        assert_eq!(entry.to_string(), "0110");
        assert_eq!(
            entry.bits().collect::<Vec<_>>(),
            vec![false, true, true, false]
        );
    }
}
