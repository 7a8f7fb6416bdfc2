//! Range decoder for LZMA decompression.
//!
//! The range coder is an entropy coding method similar to arithmetic coding.
//! LZMA uses a specific variant with:
//! - 32-bit range tracking
//! - Normalization when range drops below 2^24
//! - 11-bit probability model (2048 = 100%, 1024 = 50%)
//!
//! The decoder reads from an in-memory byte slice; the whole compressed
//! stream is resident before decoding starts, so running off the end of the
//! slice means the stream was truncated.

use oxipak_core::error::{PakError, Result};

/// Number of bits in the probability model.
pub const PROB_BITS: u32 = 11;

/// Probability representing 50%.
pub const PROB_INIT: u16 = 1 << (PROB_BITS - 1);

/// Maximum probability value.
pub const PROB_MAX: u16 = 1 << PROB_BITS;

/// Number of bits to shift for probability adaptation.
pub const MOVE_BITS: u32 = 5;

/// Top value for range normalization.
const TOP_VALUE: u32 = 1 << 24;

/// Range decoder over an in-memory LZMA stream.
#[derive(Debug)]
pub struct RangeDecoder<'a> {
    stream: &'a [u8],
    pos: usize,
    range: u32,
    code: u32,
    corrupted: bool,
}

impl<'a> RangeDecoder<'a> {
    /// Create a new range decoder.
    ///
    /// Consumes the 5-byte stream prologue: one byte that must be zero,
    /// then four big-endian bytes forming the initial code value. A
    /// non-zero first byte, or an initial code equal to the full range,
    /// rejects the stream before any output is produced.
    pub fn new(stream: &'a [u8]) -> Result<Self> {
        let mut dec = Self {
            stream,
            pos: 0,
            range: 0xFFFF_FFFF,
            code: 0,
            corrupted: false,
        };

        let first = dec.next_byte()?;
        let mut code = 0u32;
        for _ in 0..4 {
            code = (code << 8) | u32::from(dec.next_byte()?);
        }
        dec.code = code;

        if first != 0 || dec.code == dec.range {
            return Err(PakError::corrupted(0, "invalid LZMA stream prologue"));
        }

        Ok(dec)
    }

    fn next_byte(&mut self) -> Result<u8> {
        let byte = *self
            .stream
            .get(self.pos)
            .ok_or_else(|| PakError::unexpected_eof(1))?;
        self.pos += 1;
        Ok(byte)
    }

    /// Normalize the range (refill when range gets small).
    fn normalize(&mut self) -> Result<()> {
        while self.range < TOP_VALUE {
            self.range <<= 8;
            self.code = (self.code << 8) | u32::from(self.next_byte()?);
        }
        Ok(())
    }

    /// Decode a single bit with the given adaptive probability.
    pub fn decode_bit(&mut self, prob: &mut u16) -> Result<u32> {
        let bound = (self.range >> PROB_BITS) * u32::from(*prob);

        let bit = if self.code < bound {
            self.range = bound;
            *prob += (PROB_MAX - *prob) >> MOVE_BITS;
            0
        } else {
            self.range -= bound;
            self.code -= bound;
            *prob -= *prob >> MOVE_BITS;
            1
        };

        self.normalize()?;
        Ok(bit)
    }

    /// Decode a bit with fixed 50% probability.
    fn decode_direct_bit(&mut self) -> Result<u32> {
        self.range >>= 1;
        self.code = self.code.wrapping_sub(self.range);

        let bit = if (self.code as i32) < 0 {
            self.code = self.code.wrapping_add(self.range);
            0
        } else {
            1
        };

        // code == range here means the encoder could never have produced
        // this stream; decoding past this point is undefined.
        if self.code == self.range {
            self.corrupted = true;
        }

        self.normalize()?;
        Ok(bit)
    }

    /// Decode multiple context-free, non-adaptive bits.
    pub fn decode_direct_bits(&mut self, count: u32) -> Result<u32> {
        let mut result = 0u32;
        for _ in 0..count {
            result = (result << 1) | self.decode_direct_bit()?;
        }
        Ok(result)
    }

    /// Decode a bit-tree symbol (MSB first).
    ///
    /// The probability for tree node `m` lives at `probs[m]`, so a tree of
    /// `num_bits` bits needs `1 << num_bits` entries (entry 0 unused).
    pub fn decode_bit_tree(&mut self, probs: &mut [u16], num_bits: u32) -> Result<u32> {
        let mut m = 1usize;

        for _ in 0..num_bits {
            let bit = self.decode_bit(&mut probs[m])?;
            m = (m << 1) | bit as usize;
        }

        Ok((m as u32) - (1 << num_bits))
    }

    /// Decode a bit-tree symbol in reverse order (bit i lands at position i).
    ///
    /// Tree node `m` maps to `probs[m - 1]`, so the caller hands a slice
    /// view beginning at the subtree's first probability cell. This is how
    /// the shared position-decoder array is addressed per distance slot
    /// without pointer arithmetic into the middle of an allocation.
    pub fn decode_bit_tree_reverse(&mut self, probs: &mut [u16], num_bits: u32) -> Result<u32> {
        let mut m = 1usize;
        let mut symbol = 0u32;

        for i in 0..num_bits {
            let bit = self.decode_bit(&mut probs[m - 1])?;
            m = (m << 1) | bit as usize;
            symbol |= bit << i;
        }

        Ok(symbol)
    }

    /// Check if the stream violated a range-coder invariant.
    pub fn is_corrupted(&self) -> bool {
        self.corrupted
    }
}
