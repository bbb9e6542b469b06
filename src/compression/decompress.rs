//! File decompression orchestration and the core stream decoder.

use std::fs::{self, File};
use std::io::{self, Read, Write};

use log::{error, info, warn};

use crate::bitstream::bitreader::BitReader;
use crate::error::HuffError;
use crate::huffman_coding::header::read_header;
use crate::huffman_coding::tree::NodeData;
use crate::tools::cli::{HuffOpts, Output};
use crate::{BITS_PER_INT, HUFF_TREE, PSEUDO_EOF};

use super::compress::write_output;

/// Decompress every input file named in opts <HuffOpts>. Each FILE.huf is
/// replaced by FILE unless -k or -c says otherwise. Processing stops at
/// the first file that fails.
pub fn decompress(opts: &HuffOpts) -> Result<(), HuffError> {
    for fname in &opts.files {
        decompress_file(fname, opts)?;
    }
    Ok(())
}

/// Decompress one named file.
fn decompress_file(fname: &str, opts: &HuffOpts) -> Result<(), HuffError> {
    let mut input = BitReader::new(File::open(fname)?);
    let mut out = Vec::new();
    decompress_stream(&mut input, &mut out)?;
    info!("Decompressed {} to {} bytes.", fname, out.len());

    match opts.output {
        Output::Stdout => io::stdout().write_all(&out)?,
        Output::File => {
            let fname_out = match fname.strip_suffix(".huf") {
                Some(stem) if !stem.is_empty() => stem.to_string(),
                _ => {
                    warn!(
                        "Can't guess the original name of {}. Writing to {}.out.",
                        fname, fname
                    );
                    format!("{}.out", fname)
                }
            };
            write_output(&fname_out, &out, opts)?;
            if !opts.keep_input_files {
                fs::remove_file(fname)?;
            }
        }
    }
    Ok(())
}

/// Integrity check for -t. Decode each named file completely and throw the
/// result away. Any format damage surfaces as the usual fatal error.
pub fn test_integrity(opts: &HuffOpts) -> Result<(), HuffError> {
    for fname in &opts.files {
        let mut input = BitReader::new(File::open(fname)?);
        let mut out = Vec::new();
        decompress_stream(&mut input, &mut out)?;
        info!("{}: ok, {} bytes.", fname, out.len());
    }
    Ok(())
}

/// Decompress one stream into `out`. Checks the magic number, rebuilds the
/// code tree from the header, then walks the tree bit by bit, emitting a
/// word at every leaf, until the end-of-stream marker surfaces. The zero
/// bits padding the last byte never reach the output because the walk
/// stops at the marker.
pub fn decompress_stream<R: Read>(
    input: &mut BitReader<R>,
    out: &mut Vec<u8>,
) -> Result<(), HuffError> {
    let found = match input.bint(BITS_PER_INT) {
        Some(word) => word as u32,
        None => u32::MAX,
    };
    if found != HUFF_TREE {
        error!("Fatal error: this is not a huff compressed stream.");
        return Err(HuffError::BadMagic { found });
    }
    info!("Found a valid huff signature.");

    let root = read_header(input)?;

    // A bare-leaf header carries no decodable words. The marker alone
    // describes an empty payload; any other lone leaf is corrupt.
    if let NodeData::Leaf(symbol) = &root.node_data {
        if *symbol == PSEUDO_EOF {
            return Ok(());
        }
        error!("Fatal error: the tree header is a single leaf with no end-of-stream marker.");
        return Err(HuffError::InvalidHeader);
    }

    let mut current = &root;
    loop {
        let bit = match input.bit() {
            Some(bit) => bit,
            None => {
                error!("Fatal error: the stream ended before the end-of-stream code.");
                return Err(HuffError::TruncatedBody);
            }
        };
        current = match &current.node_data {
            NodeData::Kids(left, right) => {
                if bit == 0 {
                    left
                } else {
                    right
                }
            }
            // The walk restarts at the root after every word and the bare
            // leaf case returned above, so this node is internal.
            NodeData::Leaf(_) => unreachable!(),
        };
        if let NodeData::Leaf(symbol) = &current.node_data {
            if *symbol == PSEUDO_EOF {
                break;
            }
            out.push(*symbol as u8);
            current = &root;
        }
    }
    Ok(())
}
