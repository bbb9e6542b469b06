//! Frequency counting, the first of the encoder's two passes over the input.

use std::io::Read;

use crate::bitstream::bitreader::BitReader;
use crate::{ALPH_SIZE, PSEUDO_EOF};

/// Returns a frequency count of every word in the input, reading the source
/// to exhaustion. The caller must rewind the reader before the coding pass.
///
/// The PSEUDO_EOF entry is always set to 1. The marker cannot occur in the
/// input, and seeding it here guarantees the code tree gives it a code.
pub fn frequencies<R: Read>(input: &mut BitReader<R>) -> [u32; ALPH_SIZE + 1] {
    let mut freqs = [0_u32; ALPH_SIZE + 1];
    while let Some(byte) = input.byte() {
        freqs[byte as usize] += 1;
    }
    freqs[PSEUDO_EOF as usize] = 1;
    freqs
}

#[cfg(test)]
mod test {
    use super::frequencies;
    use crate::bitstream::bitreader::BitReader;
    use crate::PSEUDO_EOF;

    #[test]
    fn count_test() {
        let mut br = BitReader::new("abracadabra".as_bytes());
        let freqs = frequencies(&mut br);
        assert_eq!(freqs[b'a' as usize], 5);
        assert_eq!(freqs[b'b' as usize], 2);
        assert_eq!(freqs[b'r' as usize], 2);
        assert_eq!(freqs[b'c' as usize], 1);
        assert_eq!(freqs[b'd' as usize], 1);
        assert_eq!(freqs[b'z' as usize], 0);
        assert_eq!(freqs[PSEUDO_EOF as usize], 1);
    }

    #[test]
    fn empty_input_test() {
        let mut br = BitReader::new([].as_slice());
        let freqs = frequencies(&mut br);
        assert_eq!(freqs.iter().sum::<u32>(), 1);
        assert_eq!(freqs[PSEUDO_EOF as usize], 1);
    }

    #[test]
    fn drains_the_reader_test() {
        let mut br = BitReader::new([1, 2, 3].as_slice());
        frequencies(&mut br);
        assert_eq!(br.byte(), None);
    }
}
