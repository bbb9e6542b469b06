//! File compression orchestration and the core stream encoder.

use std::fs::{self, File, OpenOptions};
use std::io::{self, Read, Seek, Write};

use log::{debug, error, info};

use crate::bitstream::bitreader::BitReader;
use crate::bitstream::bitwriter::BitWriter;
use crate::error::HuffError;
use crate::huffman_coding::codes::make_codes;
use crate::huffman_coding::header::write_header;
use crate::huffman_coding::tree::build_tree;
use crate::tools::cli::{HuffOpts, Output};
use crate::tools::freq_count::frequencies;
use crate::{HUFF_TREE, PSEUDO_EOF};

/// Compress every input file named in opts <HuffOpts>. Each file FILE is
/// replaced by FILE.huf unless -k or -c says otherwise. Processing stops
/// at the first file that fails.
pub fn compress(opts: &HuffOpts) -> Result<(), HuffError> {
    for fname in &opts.files {
        compress_file(fname, opts)?;
    }
    Ok(())
}

/// Compress one named file.
fn compress_file(fname: &str, opts: &HuffOpts) -> Result<(), HuffError> {
    let fin = File::open(fname)?;
    let fin_size = fin.metadata()?.len() as usize;
    let mut input = BitReader::new(fin);

    // Worst case output is the header plus nine bits per word. A skewed
    // input does far better, so half the input is a fair opening guess.
    let mut bw = BitWriter::new(fin_size / 2 + 64);
    compress_stream(&mut input, &mut bw)?;

    if fin_size > 0 {
        info!(
            "Compressed {} from {} to {} bytes, {:.1}% of the original.",
            fname,
            fin_size,
            bw.output.len(),
            bw.output.len() as f64 * 100.0 / fin_size as f64
        );
    } else {
        info!(
            "Compressed empty file {} to {} bytes.",
            fname,
            bw.output.len()
        );
    }

    match opts.output {
        Output::Stdout => io::stdout().write_all(&bw.output)?,
        Output::File => {
            let fname_out = format!("{}.huf", fname);
            write_output(&fname_out, &bw.output, opts)?;
            if !opts.keep_input_files {
                fs::remove_file(fname)?;
            }
        }
    }
    Ok(())
}

/// Create the named output file and write the whole buffer to it. Unless
/// -f was given, an existing file with the same name is an error.
pub(crate) fn write_output(fname: &str, data: &[u8], opts: &HuffOpts) -> Result<(), HuffError> {
    let mut f_out = if opts.force_overwrite {
        File::create(fname)?
    } else {
        OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(fname)
            .map_err(|e| {
                if e.kind() == io::ErrorKind::AlreadyExists {
                    error!(
                        "Output file {} already exists. Use -f to overwrite it.",
                        fname
                    );
                }
                e
            })?
    };
    f_out.write_all(data)?;
    Ok(())
}

/// Compress one stream. Counts the words, builds the tree and code table,
/// writes the magic number and tree header, then rewinds the input and
/// writes the code for every word followed by the end-of-stream code. The
/// output is flushed, so its last byte is zero padded.
pub fn compress_stream<R: Read + Seek>(
    input: &mut BitReader<R>,
    bw: &mut BitWriter,
) -> Result<(), HuffError> {
    let freqs = frequencies(input);
    let root = build_tree(&freqs);
    let codes = make_codes(&root);

    bw.out32(HUFF_TREE);
    write_header(&root, bw);
    debug!("Wrote the tree header, output now at {}", bw.loc());

    // The counting pass drained the input. Reread it for the coding pass.
    input.rewind()?;

    while let Some(byte) = input.byte() {
        let code = codes[byte as usize];
        bw.out_bits(code.len as usize, code.bits);
    }
    let eof = codes[PSEUDO_EOF as usize];
    bw.out_bits(eof.len as usize, eof.bits);
    bw.flush();
    debug!("Wrote the coded data, output now at {}", bw.loc());
    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;
    use std::io::Cursor;

    fn compress_to_vec(data: &[u8]) -> Vec<u8> {
        let mut input = BitReader::new(Cursor::new(data.to_vec()));
        let mut bw = BitWriter::new(64);
        compress_stream(&mut input, &mut bw).unwrap();
        bw.output
    }

    #[test]
    fn empty_input_test() {
        // Magic, then the padded two-leaf tree, then the one-bit
        // end-of-stream code: 54 bits, 7 bytes.
        let out = compress_to_vec(&[]);
        assert_eq!(out, [0xfa, 0xce, 0x82, 0x01, 0x40, 0x18, 0x04]);
    }

    #[test]
    fn repeated_byte_test() {
        // 32 magic bits, a 21 bit header for the two-leaf tree, 100 one-bit
        // codes and the end-of-stream bit: 154 bits, 20 bytes.
        let out = compress_to_vec(&[0x41; 100]);
        assert_eq!(out.len(), 20);
        assert_eq!(&out[..4], [0xfa, 0xce, 0x82, 0x01]);
    }

    #[test]
    fn deterministic_test() {
        let data = b"the quick brown fox jumps over the lazy dog";
        assert_eq!(compress_to_vec(data), compress_to_vec(data));
    }

    #[test]
    fn magic_heads_every_stream_test() {
        for data in [&b""[..], b"x", b"mississippi"] {
            assert_eq!(&compress_to_vec(data)[..4], [0xfa, 0xce, 0x82, 0x01]);
        }
    }
}
