//! Sliding window (dictionary) for LZMA decompression.
//!
//! The window keeps the most recent `capacity` output bytes in a circular
//! buffer so match copies can be resolved, and accumulates the linear
//! output alongside it. Distances are 1-based: distance 1 is the byte most
//! recently written.

/// Minimum dictionary capacity mandated by the container format.
pub const DICT_SIZE_MIN: u32 = 1 << 12;

/// Circular history buffer plus the linear output it feeds.
#[derive(Debug)]
pub struct Window {
    buf: Vec<u8>,
    pos: usize,
    is_full: bool,
    output: Vec<u8>,
}

impl Window {
    /// Create a window. `dict_size` is clamped up to [`DICT_SIZE_MIN`];
    /// `unpack_size` pre-sizes the linear output.
    pub fn new(dict_size: u32, unpack_size: usize) -> Self {
        let capacity = dict_size.max(DICT_SIZE_MIN) as usize;
        Self {
            buf: vec![0u8; capacity],
            pos: 0,
            is_full: false,
            output: Vec::with_capacity(unpack_size),
        }
    }

    /// Dictionary capacity.
    pub fn capacity(&self) -> usize {
        self.buf.len()
    }

    /// Total bytes produced so far.
    pub fn total_pos(&self) -> u64 {
        self.output.len() as u64
    }

    /// True until the first byte is written.
    pub fn is_empty(&self) -> bool {
        self.pos == 0 && !self.is_full
    }

    /// Append one byte to the history and the linear output.
    pub fn put_byte(&mut self, byte: u8) {
        self.buf[self.pos] = byte;
        self.pos += 1;
        if self.pos == self.buf.len() {
            self.pos = 0;
            self.is_full = true;
        }
        self.output.push(byte);
    }

    /// Read the byte `dist` positions behind the write cursor (1-based).
    ///
    /// The caller must have validated `dist` with [`Self::check_distance`];
    /// an unchecked distance would read stale buffer contents, which is a
    /// corruption condition, not a silent wrap.
    pub fn get_byte(&self, dist: usize) -> u8 {
        let index = if dist <= self.pos {
            self.pos - dist
        } else {
            self.buf.len() - dist + self.pos
        };
        self.buf[index]
    }

    /// Check that a 1-based distance refers to bytes actually produced.
    pub fn check_distance(&self, dist: usize) -> bool {
        dist <= self.pos || self.is_full
    }

    /// Copy `len` bytes from `dist` back, byte by byte, so overlapping
    /// self-referential copies reproduce correctly.
    pub fn copy_match(&mut self, dist: usize, len: usize) {
        for _ in 0..len {
            let byte = self.get_byte(dist);
            self.put_byte(byte);
        }
    }

    /// Consume the window and return the accumulated output.
    pub fn into_output(self) -> Vec<u8> {
        self.output
    }
}
