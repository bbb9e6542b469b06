//! BitWriter: bit-at-a-time output for the huff compressor.
//!
//! Packs the magic number, tree header and variable-length codes into a
//! contiguous in-memory stream. Bits enter a 64 bit queue most significant
//! bit first and leave as whole bytes, so everything the encoder emits is
//! packed with no alignment gaps until the final flush pads out the last
//! byte.
//!

use log::error;

/// Creates a bitstream for output.
pub struct BitWriter {
    pub output: Vec<u8>,
    queue: u64,
    q_bits: u8,
}

impl BitWriter {
    /// Create a new BitWriter with an output buffer of the size specified.
    /// Suggest an estimate of the compressed size. Call flush() to flush the
    /// bit queue to the buffer before using the output.
    pub fn new(size: usize) -> Self {
        Self {
            output: Vec::with_capacity(size),
            queue: 0,
            q_bits: 0,
        }
    }

    /// Internal bitstream write function. Drains whole bytes from the queue.
    fn write_stream(&mut self) {
        while self.q_bits > 7 {
            let byte = (self.queue >> (self.q_bits - 8)) as u8;
            self.output.push(byte);
            self.q_bits -= 8;
        }
    }

    /// Writes the `count` least significant bits of `data` onto the stream.
    /// The queue carries at most 7 bits between calls, so count can go up
    /// to 57. Codes from a tree over 257 weights never get near that.
    pub fn out_bits(&mut self, count: usize, data: u64) {
        debug_assert!(count >= 1 && count <= 57);
        self.queue <<= count;
        self.queue |= data & (u64::MAX >> (64 - count));
        self.q_bits += count as u8;
        self.write_stream();
    }

    /// Puts a 32 bit word of pre-packed binary encoded data on the stream.
    /// Used for the magic number.
    pub fn out32(&mut self, data: u32) {
        self.out_bits(32, data as u64);
    }

    /// Flushes the remaining bits (1-7) from the queue, padding with 0s in
    /// the least significant bits.
    pub fn flush(&mut self) {
        if self.q_bits > 0 {
            self.queue <<= 8 - self.q_bits;
            self.q_bits += 8 - self.q_bits;
            self.write_stream();
            if self.q_bits > 0 {
                error!("Stuff left in the BitWriter queue.");
            }
        }
    }

    /// Debugging function to return the number of bytes.bits output so far.
    pub fn loc(&self) -> String {
        format! {"[{}.{}]",((self.output.len() * 8) + self.q_bits as usize)/8, ((self.output.len() * 8) + self.q_bits as usize)%8}
    }
}
