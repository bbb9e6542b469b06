//! Error type for the huff codec.
//!
//! Every variant is fatal to the operation that raised it. The format
//! carries no synchronization points, so nothing is recoverable: callers
//! report the error and discard any partial output.

use std::io;

use thiserror::Error;

/// Failures raised while reading or writing huff streams.
#[derive(Debug, Error)]
pub enum HuffError {
    /// The stream does not begin with the huff magic number.
    #[error("not a huff stream (magic number was {found:#010x})")]
    BadMagic { found: u32 },

    /// The stream ended inside the serialized code tree.
    #[error("compressed stream ended inside the tree header")]
    TruncatedHeader,

    /// The stream ended before the end-of-stream code was decoded.
    #[error("compressed stream ended before the end-of-stream code")]
    TruncatedBody,

    /// The tree header decoded to something no encoder writes, such as an
    /// out-of-range symbol or runaway nesting.
    #[error("tree header is not a valid code tree")]
    InvalidHeader,

    /// An underlying file read or write failed.
    #[error(transparent)]
    Io(#[from] io::Error),
}
