//! The huffman_coding module builds and serializes the code tree for huff.
//! Decoding the coded data happens in the decompress function.
//!
//! Huff uses a single Huffman table for the whole file. The encoder counts
//! every word in the input, builds one tree over the 257 possible symbols
//! (256 words plus the end-of-stream marker), and derives the code for each
//! symbol from its path through the tree. The decoder never sees the
//! counts. It rebuilds the tree from a preorder serialization at the front
//! of the stream and walks it bit by bit.
//!
//! Tree construction is deterministic. Ties between equal weights resolve
//! by insertion order, so the same input always yields the same tree, the
//! same codes and the same compressed stream.
//!

pub mod codes;
pub mod header;
pub mod tree;
