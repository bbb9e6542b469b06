//! The compression module manages both directions of the huff codec.
//!
//! Compression happens in the following steps:
//! - Frequency count: Read the whole input and count every word, seeding
//!   the end-of-stream marker with a count of 1.
//! - Tree construction: Merge the two lightest roots until one tree holds
//!   every counted symbol.
//! - Code assignment: Each leaf's path through the tree becomes its code.
//! - Stream assembly: Write the magic number and the preorder tree header,
//!   rewind the input, write the code for every word and then the
//!   end-of-stream code, and zero pad to a byte boundary.
//!
//! Decompression follows the inverse. Check the magic number, rebuild the
//! tree from the header, then walk the tree bit by bit, emitting a word at
//! each leaf, until the end-of-stream marker surfaces. The padding bits
//! never reach the output because the walk stops at the marker.
//!

pub mod compress;
pub mod decompress;
