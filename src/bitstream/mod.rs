//! The bitstream module forms the I/O subsystem for the huff compressor.
//!
//! Huff streams are bit-oriented, not byte-oriented. Tree nodes cost one
//! bit, leaf symbols cost nine, and the codes themselves are arbitrary bit
//! strings, so nothing in a compressed stream is byte aligned except the
//! leading magic number.
//!
//! This I/O subsystem is designed to interface with the other modules of
//! huff. It is not intended for more general use.
//!
pub mod bitreader;
pub mod bitwriter;
