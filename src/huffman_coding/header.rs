//! Tree header serialization. The compressed stream carries the code tree
//! itself, not the counts it was built from.
//!
//! The layout is a preorder walk. A 0 bit opens an internal node and is
//! followed by the left then the right subtree. A 1 bit opens a leaf and is
//! followed by the symbol in nine bits. The grammar is self-describing, so
//! the header needs no length field, and the bit after the last leaf is the
//! first bit of the coded data.

use std::io::Read;

use log::error;

use crate::bitstream::bitreader::BitReader;
use crate::bitstream::bitwriter::BitWriter;
use crate::error::HuffError;
use crate::huffman_coding::tree::{HuffNode, NodeData};
use crate::{ALPH_SIZE, BITS_PER_WORD, PSEUDO_EOF};

/// Serialize the tree onto the stream in preorder.
pub fn write_header(node: &HuffNode, bw: &mut BitWriter) {
    match &node.node_data {
        NodeData::Kids(left, right) => {
            bw.out_bits(1, 0);
            write_header(left, bw);
            write_header(right, bw);
        }
        NodeData::Leaf(symbol) => {
            bw.out_bits(1, 1);
            bw.out_bits(BITS_PER_WORD + 1, *symbol as u64);
        }
    }
}

/// Rebuild the code tree from its preorder serialization. Counts are not
/// stored in the stream, so rebuilt nodes carry weight 0; the decoder only
/// follows the tree's shape.
pub fn read_header<R: Read>(input: &mut BitReader<R>) -> Result<HuffNode, HuffError> {
    read_node(input, 0)
}

fn read_node<R: Read>(input: &mut BitReader<R>, depth: usize) -> Result<HuffNode, HuffError> {
    // A real tree has at most 257 leaves, so no root-to-leaf path can be
    // longer than the alphabet. Deeper nesting means a corrupt stream, and
    // bailing out here keeps a flood of 0 bits from burning the stack.
    if depth > ALPH_SIZE + 1 {
        error!("Fatal error: tree header nests deeper than the alphabet allows.");
        return Err(HuffError::InvalidHeader);
    }
    match input.bit() {
        None => Err(HuffError::TruncatedHeader),
        Some(0) => {
            let left = read_node(input, depth + 1)?;
            let right = read_node(input, depth + 1)?;
            Ok(HuffNode::new(
                0,
                0,
                NodeData::Kids(Box::new(left), Box::new(right)),
            ))
        }
        Some(_) => {
            let symbol = input
                .bint(BITS_PER_WORD + 1)
                .ok_or(HuffError::TruncatedHeader)?;
            if symbol > PSEUDO_EOF as usize {
                error!("Fatal error: tree header holds symbol {}, beyond the alphabet.", symbol);
                return Err(HuffError::InvalidHeader);
            }
            Ok(HuffNode::new(0, 0, NodeData::Leaf(symbol as u16)))
        }
    }
}
