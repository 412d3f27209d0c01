//! MSB-first bit stream operations.
//!
//! JPEG entropy-coded segments pack Huffman codes most significant bit
//! first, and pad the final byte with 1-bits. Marker handling and byte
//! stuffing belong to the container layer and are not done here.

use crate::error::BitstreamError;

type Result<T> = std::result::Result<T, BitstreamError>;

/// MSB-first bit reader over a byte slice.
#[derive(Debug, Clone)]
pub struct MsbBitReader<'a> {
    /// Input data.
    data: &'a [u8],
    /// Current byte position.
    byte_pos: usize,
    /// Bit buffer (MSB-first).
    buffer: u32,
    /// Number of valid bits in buffer.
    bits_in_buffer: u8,
    /// Total bits read (for error reporting).
    total_bits_read: u64,
}

impl<'a> MsbBitReader<'a> {
    /// Create a new MSB bit reader.
    pub fn new(data: &'a [u8]) -> Self {
        Self {
            data,
            byte_pos: 0,
            buffer: 0,
            bits_in_buffer: 0,
            total_bits_read: 0,
        }
    }

    #[inline]
    fn fill_buffer(&mut self, count: u8) -> Result<()> {
        while self.bits_in_buffer < count && self.byte_pos < self.data.len() {
            let byte = self.data[self.byte_pos];
            self.byte_pos += 1;

            self.buffer = (self.buffer << 8) | (byte as u32);
            self.bits_in_buffer += 8;
        }

        if self.bits_in_buffer < count {
            return Err(BitstreamError::UnexpectedEof {
                position: self.total_bits_read,
            });
        }

        Ok(())
    }

    /// Read a single bit.
    #[inline]
    pub fn read_bit(&mut self) -> Result<bool> {
        Ok(self.read_bits(1)? == 1)
    }

    /// Read up to 16 bits from the stream (MSB-first).
    pub fn read_bits(&mut self, count: u8) -> Result<u16> {
        if count == 0 || count > 16 {
            return Err(BitstreamError::InvalidBitWidth(count));
        }

        self.fill_buffer(count)?;

        let shift = self.bits_in_buffer - count;
        let mask = (1u32 << count) - 1;
        let value = (self.buffer >> shift) & mask;

        self.bits_in_buffer -= count;
        self.total_bits_read += count as u64;

        Ok(value as u16)
    }

    /// Number of bits not yet read.
    pub fn bits_remaining(&self) -> u64 {
        (self.data.len() - self.byte_pos) as u64 * 8 + self.bits_in_buffer as u64
    }

    /// Get total bits read.
    pub fn bits_read(&self) -> u64 {
        self.total_bits_read
    }
}

impl Iterator for MsbBitReader<'_> {
    type Item = bool;

    fn next(&mut self) -> Option<bool> {
        self.read_bit().ok()
    }
}

/// MSB-first bit writer.
#[derive(Debug, Default)]
pub struct MsbBitWriter {
    /// Output buffer.
    output: Vec<u8>,
    /// Bit buffer (MSB-first).
    buffer: u32,
    /// Number of bits in buffer.
    bits_in_buffer: u8,
}

impl MsbBitWriter {
    /// Create a new MSB bit writer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Write a single bit.
    pub fn write_bit(&mut self, bit: bool) {
        self.push(u32::from(bit), 1);
    }

    /// Write up to 16 bits to the stream (MSB-first).
    pub fn write_bits(&mut self, value: u16, count: u8) -> Result<()> {
        if count == 0 || count > 16 {
            return Err(BitstreamError::InvalidBitWidth(count));
        }
        self.push(value as u32 & ((1u32 << count) - 1), count);
        Ok(())
    }

    fn push(&mut self, value: u32, count: u8) {
        self.buffer = (self.buffer << count) | value;
        self.bits_in_buffer += count;

        while self.bits_in_buffer >= 8 {
            let byte = (self.buffer >> (self.bits_in_buffer - 8)) as u8;
            self.output.push(byte);
            self.bits_in_buffer -= 8;
        }
    }

    /// Flush remaining bits, padding the last byte with 1-bits.
    pub fn flush(&mut self) {
        if self.bits_in_buffer > 0 {
            let remaining = 8 - self.bits_in_buffer;
            self.push((1u32 << remaining) - 1, remaining);
            self.buffer = 0;
        }
    }

    /// Get the output data.
    pub fn into_vec(mut self) -> Vec<u8> {
        self.flush();
        self.output
    }
}
