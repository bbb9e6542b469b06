//! BitReader: bit-at-a-time input for the huff compressor.
//!
//! Reads a packed bitstream most significant bit first, the order the
//! encoder queues bits. The decoder pulls single bits to walk the code
//! tree, nine bit groups for leaf symbols, and whole bytes when counting
//! frequencies.
//!
//! NOTE: This module can read from any I/O source that supports the read()
//! call. Rewinding additionally needs seek(), which the two-pass encoder
//! requires of its input anyway.
//!

use crate::{BITS_PER_INT, BITS_PER_WORD};

const BUFFER_SIZE: usize = 64 * 1024;

/// Reads a binary huff stream, or the plain input on the encode side.
#[derive(Debug)]
pub struct BitReader<R> {
    buffer: Vec<u8>,
    cursor: usize,
    bit_index: usize,
    source: R,
}

impl<R: std::io::Read> BitReader<R> {
    /// Creates a new BitReader. The buffer starts empty and fills on the
    /// first read.
    pub fn new(source: R) -> Self {
        Self {
            buffer: Vec::new(),
            cursor: 0,
            bit_index: 0,
            source,
        }
    }

    /// Check (and refill) the buffer. Returns true if we have data, false
    /// if there is no more.
    fn have_data(&mut self) -> bool {
        if self.cursor < self.buffer.len() {
            return true;
        }
        self.buffer.resize(BUFFER_SIZE, 0);
        let size = self
            .source
            .read(&mut self.buffer)
            .expect("Unable to read source data");
        self.buffer.truncate(size);
        self.cursor = 0;
        self.bit_index = 0;
        size > 0
    }

    /// Return the next bit as Option<usize> (1 or 0), or None if there is
    /// no more data to read.
    pub fn bit(&mut self) -> Option<usize> {
        if !self.have_data() {
            return None;
        }
        let bit = self.buffer[self.cursor] >> (7 - self.bit_index) & 1;
        self.bit_index += 1;
        if self.bit_index == 8 {
            self.bit_index = 0;
            self.cursor += 1;
        }
        Some(bit as usize)
    }

    /// Return Option<bool> *true* if the next bit is 1, *false* if 0,
    /// consuming the bit, or None if there is no more data to read.
    pub fn bool_bit(&mut self) -> Option<bool> {
        self.bit().map(|bit| bit == 1)
    }

    /// Return Option<usize> of the next n bits (n <= 32), or None if the
    /// stream cannot supply all of them. Used for the magic number and for
    /// the nine-bit symbols in the tree header.
    pub fn bint(&mut self, n: usize) -> Option<usize> {
        debug_assert!(n <= BITS_PER_INT);
        let mut result = 0_usize;
        let mut left = n;
        // Drain the partial byte first, take whole bytes while they fit,
        // then the head of the final byte.
        while left > 0 {
            if !self.have_data() {
                return None;
            }
            if self.bit_index == 0 && left >= 8 {
                result = result << 8 | self.buffer[self.cursor] as usize;
                self.cursor += 1;
                left -= 8;
                continue;
            }
            let take = left.min(8 - self.bit_index);
            let chunk = (self.buffer[self.cursor] >> (8 - self.bit_index - take)) as usize
                & ((1 << take) - 1);
            result = result << take | chunk;
            self.bit_index += take;
            if self.bit_index == 8 {
                self.bit_index = 0;
                self.cursor += 1;
            }
            left -= take;
        }
        Some(result)
    }

    /// Returns a byte as an Option<u8>, or None if there is no more data to
    /// read. Byte-aligned reads skip the bit-shuffling path, which matters
    /// in the encoder's counting and coding passes.
    pub fn byte(&mut self) -> Option<u8> {
        if self.bit_index == 0 {
            if !self.have_data() {
                return None;
            }
            let byte = self.buffer[self.cursor];
            self.cursor += 1;
            return Some(byte);
        }
        self.bint(BITS_PER_WORD).map(|byte| byte as u8)
    }

    /// Debugging function. Report current position in the buffer.
    pub fn loc(&self) -> String {
        format!("[{}.{}]", self.cursor, self.bit_index)
    }
}

impl<R: std::io::Read + std::io::Seek> BitReader<R> {
    /// Rewind to the start of the source, dropping any buffered data. The
    /// encoder reads its input twice, once to count and once to code.
    pub fn rewind(&mut self) -> std::io::Result<()> {
        self.source.rewind()?;
        self.buffer.clear();
        self.cursor = 0;
        self.bit_index = 0;
        Ok(())
    }
}
