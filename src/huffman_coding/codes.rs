//! Code assignment: one variable-length code per symbol in the tree.

use crate::huffman_coding::tree::{HuffNode, NodeData};
use crate::ALPH_SIZE;

/// One symbol's code: the `len` low bits of `bits`, most significant bit
/// first. A len of 0 means the symbol never occurs in the input and has no
/// code.
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
pub struct Code {
    pub len: u8,
    pub bits: u64,
}

/// Walk the tree and record each leaf's path as its code. Stepping to a
/// left child appends a 0 bit, stepping to a right child appends a 1.
///
/// Codes from a 257 symbol tree with u32 counts cannot exceed 57 bits even
/// on adversarial inputs. The weight needed for a deeper leaf grows
/// Fibonacci-fast and overflows the counts first.
pub fn make_codes(root: &HuffNode) -> [Code; ALPH_SIZE + 1] {
    let mut codes = [Code::default(); ALPH_SIZE + 1];
    descend(root, Code::default(), &mut codes);
    codes
}

fn descend(node: &HuffNode, path: Code, codes: &mut [Code; ALPH_SIZE + 1]) {
    match &node.node_data {
        NodeData::Leaf(symbol) => codes[*symbol as usize] = path,
        NodeData::Kids(left, right) => {
            debug_assert!(path.len < 57, "code does not fit the bit queue");
            descend(
                left,
                Code {
                    len: path.len + 1,
                    bits: path.bits << 1,
                },
                codes,
            );
            descend(
                right,
                Code {
                    len: path.len + 1,
                    bits: path.bits << 1 | 1,
                },
                codes,
            );
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::huffman_coding::tree::build_tree;
    use crate::PSEUDO_EOF;

    fn freqs_of(pairs: &[(usize, u32)]) -> [u32; ALPH_SIZE + 1] {
        let mut freqs = [0_u32; ALPH_SIZE + 1];
        for &(sym, count) in pairs {
            freqs[sym] = count;
        }
        freqs[PSEUDO_EOF as usize] = 1;
        freqs
    }

    #[test]
    fn skewed_counts_test() {
        // A 8/3/1 split plus the end marker yields the unique optimal
        // depths 1/2/3/3.
        let freqs = freqs_of(&[(b'A' as usize, 8), (b'B' as usize, 3), (b'C' as usize, 1)]);
        let codes = make_codes(&build_tree(&freqs));
        assert_eq!(codes[b'A' as usize], Code { len: 1, bits: 0b1 });
        assert_eq!(codes[b'B' as usize], Code { len: 2, bits: 0b01 });
        assert_eq!(codes[b'C' as usize], Code { len: 3, bits: 0b000 });
        assert_eq!(codes[PSEUDO_EOF as usize], Code { len: 3, bits: 0b001 });
        let total: usize = [(b'A', 8), (b'B', 3), (b'C', 1)]
            .iter()
            .map(|&(sym, n)| codes[sym as usize].len as usize * n)
            .sum();
        assert_eq!(total, 17);
    }

    #[test]
    fn flat_counts_test() {
        // Four equal weights build a complete two-level tree.
        let freqs = freqs_of(&[(b'a' as usize, 1), (b'b' as usize, 1), (b'c' as usize, 1)]);
        let codes = make_codes(&build_tree(&freqs));
        assert_eq!(codes[b'a' as usize], Code { len: 2, bits: 0b00 });
        assert_eq!(codes[b'b' as usize], Code { len: 2, bits: 0b01 });
        assert_eq!(codes[b'c' as usize], Code { len: 2, bits: 0b10 });
        assert_eq!(codes[PSEUDO_EOF as usize], Code { len: 2, bits: 0b11 });
    }

    #[test]
    fn absent_symbols_have_no_code_test() {
        let freqs = freqs_of(&[(b'x' as usize, 10)]);
        let codes = make_codes(&build_tree(&freqs));
        assert_eq!(codes[b'y' as usize].len, 0);
        assert_ne!(codes[b'x' as usize].len, 0);
        assert_ne!(codes[PSEUDO_EOF as usize].len, 0);
    }

    #[test]
    fn prefix_free_test() {
        let mut freqs = freqs_of(&[]);
        for (i, slot) in freqs.iter_mut().enumerate().take(32) {
            *slot = i as u32 * i as u32 + 1;
        }
        let codes = make_codes(&build_tree(&freqs));
        let coded: Vec<Code> = codes.iter().copied().filter(|c| c.len > 0).collect();
        for (i, a) in coded.iter().enumerate() {
            for (j, b) in coded.iter().enumerate() {
                if i == j {
                    continue;
                }
                let shorter = a.len.min(b.len);
                let a_head = a.bits >> (a.len - shorter);
                let b_head = b.bits >> (b.len - shorter);
                assert!(
                    a_head != b_head,
                    "code {:0width$b} is a prefix of another code",
                    a.bits,
                    width = a.len as usize
                );
            }
        }
    }
}
