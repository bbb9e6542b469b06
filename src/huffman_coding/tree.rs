//! Code tree construction. One tree per file, built by the classic greedy
//! merge: keep joining the two lightest roots until a single tree remains.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use log::trace;

use crate::ALPH_SIZE;

/// A node holds either a pair of children or a leaf's symbol (0-256, where
/// 256 is the end-of-stream marker).
#[derive(Eq, PartialEq, Debug)]
pub enum NodeData {
    Kids(Box<HuffNode>, Box<HuffNode>),
    Leaf(u16),
}

/// One node of the code tree. `weight` is the total frequency under the
/// node and `seq` records creation order. Both only matter while the tree
/// is being built; nodes rebuilt from a stream header leave them at 0.
#[derive(Eq, PartialEq, Debug)]
pub struct HuffNode {
    pub weight: u32,
    pub seq: u32,
    pub node_data: NodeData,
}

impl HuffNode {
    /// Create a new node
    pub fn new(weight: u32, seq: u32, node_data: NodeData) -> HuffNode {
        HuffNode {
            weight,
            seq,
            node_data,
        }
    }
}

impl Ord for HuffNode {
    /// Sort nodes by decreasing weight and decreasing creation order, so
    /// the std max-heap pops the oldest of the lightest nodes first.
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .weight
            .cmp(&self.weight)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}
impl PartialOrd for HuffNode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Build the code tree for the given counts by repeatedly merging the two
/// lightest roots. The first node removed becomes the left (0) child, and
/// ties resolve by age, so identical counts always build identical trees.
///
/// The counts must include the end-of-stream marker, so at least one entry
/// is positive.
pub fn build_tree(freqs: &[u32; ALPH_SIZE + 1]) -> HuffNode {
    let mut queue = BinaryHeap::with_capacity(ALPH_SIZE + 1);
    let mut seq = 0_u32;
    for (symbol, &weight) in freqs.iter().enumerate() {
        if weight > 0 {
            queue.push(HuffNode::new(weight, seq, NodeData::Leaf(symbol as u16)));
            seq += 1;
        }
    }

    // An input with no words at all seeds only the end-of-stream leaf. Pad
    // the queue with a zero-weight leaf so the marker still ends up with a
    // code and the root is an internal node.
    if queue.len() == 1 {
        queue.push(HuffNode::new(0, seq, NodeData::Leaf(0)));
        seq += 1;
    }

    while queue.len() > 1 {
        let left = queue.pop().unwrap();
        let right = queue.pop().unwrap();
        let weight = left.weight + right.weight;
        queue.push(HuffNode::new(
            weight,
            seq,
            NodeData::Kids(Box::new(left), Box::new(right)),
        ));
        seq += 1;
    }
    let root = queue.pop().unwrap();
    trace!("Built code tree weighing {}", root.weight);
    root
}
