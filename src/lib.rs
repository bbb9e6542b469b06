//! Rust version of the classic huff file compressor.
//!
//! Provides safe, lossless compression and decompression of files using a
//! single Huffman code built from the byte frequencies of the input. The
//! compressed stream is self-describing: a magic number, a preorder
//! serialization of the code tree, then the coded data terminated by a
//! reserved end-of-stream symbol.
//!
//! Basic usage to compress a file is as follows:
//!
//! `$> huff -z test.txt`
//!
//! This will compress the file and create the file test.txt.huf.
//! The original file will be deleted.
//!
pub mod bitstream;
pub mod compression;
pub mod error;
pub mod huffman_coding;
pub mod tools;

/// Bits in one uncompressed word. The coder reads plain bytes.
pub const BITS_PER_WORD: usize = 8;

/// Bits in the magic number at the front of every compressed stream.
pub const BITS_PER_INT: usize = 32;

/// Number of distinct words in the input alphabet.
pub const ALPH_SIZE: usize = 1 << BITS_PER_WORD;

/// Reserved symbol marking the logical end of the coded data. One past the
/// largest real word, so it can never occur in an input stream.
pub const PSEUDO_EOF: u16 = ALPH_SIZE as u16;

/// Family magic number for huff output.
pub const HUFF_NUMBER: u32 = 0xface8200;

/// Magic number for the tree-header format, the only format written.
pub const HUFF_TREE: u32 = HUFF_NUMBER | 1;
