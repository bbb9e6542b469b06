//! Command line interface for huff - uses the external CLAP crate.

use std::{fmt::Display, fmt::Formatter};

use clap::Parser;
use log::{info, warn};

/// The three things huff can do with a file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Zip,
    Unzip,
    Test,
}
impl Display for Mode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Where decoded or encoded data ends up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Output {
    File,
    Stdout,
}
impl Display for Output {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// All user settable options controlling a run of huff.
#[derive(Debug)]
pub struct HuffOpts {
    /// Names of the files to process, in order
    pub files: Vec<String>,
    /// Compress/Decompress/Test
    pub op_mode: Mode,
    /// Silently overwrite existing files with the same name
    pub force_overwrite: bool,
    /// Don't remove input files after processing
    pub keep_input_files: bool,
    /// Location where output is sent
    pub output: Output,
}

/// Command Line Interpretation - uses external CLAP crate.
#[derive(Parser, Debug)]
#[clap(
    version,
    about = "A Huffman coding file compressor",
    long_about = "
    Compresses files with a single Huffman code built from the byte
    frequencies of the input. Each input file FILE is replaced by the
    compressed file FILE.huf; decompression reverses the process.

    The compressed stream is self-describing, so no side tables or
    options need to survive from compression to decompression."
)]
struct Args {
    /// Names of files to process
    #[clap()]
    files: Vec<String>,

    /// Perform compression on the input files (the default)
    #[clap(short = 'z', long = "compress")]
    compress: bool,

    /// Perform decompression on the input files
    #[clap(short = 'd', long = "decompress")]
    decompress: bool,

    /// Test compressed file integrity
    #[clap(short = 't', long = "test")]
    test: bool,

    /// Force overwriting output files
    #[clap(short = 'f', long = "force")]
    force: bool,

    /// Keep (don't delete) input files
    #[clap(short = 'k', long = "keep")]
    keep: bool,

    /// Send output to the terminal
    #[clap(short = 'c', long = "stdout")]
    stdout: bool,

    /// Suppress noncritical messages
    #[clap(short = 'q', long = "quiet")]
    quiet: bool,

    /// Be verbose (a 2nd -v gives more)
    #[clap(short = 'v', long = "verbose", parse(from_occurrences))]
    verbose: usize,
}

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Put command line information from CLAP into our internal structure and
/// set the log level.
pub fn huffopts_init() -> HuffOpts {
    let args = Args::parse();

    // Print opening line
    println!("huff, a Huffman coding file compressor. Rust version {}", VERSION);

    if args.compress && args.decompress {
        warn!("Both -z and -d given. Decompressing.");
    }
    let op_mode = if args.decompress {
        Mode::Unzip
    } else if args.test {
        Mode::Test
    } else {
        Mode::Zip
    };

    // Set the log level. -q beats any -v.
    let level = if args.quiet {
        log::LevelFilter::Off
    } else {
        match args.verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            2 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        }
    };
    log::set_max_level(level);

    let opts = HuffOpts {
        files: args.files,
        op_mode,
        force_overwrite: args.force,
        keep_input_files: args.keep,
        output: if args.stdout { Output::Stdout } else { Output::File },
    };

    // Below we report initialization status to the user
    info!("Verbosity set to {}", log::max_level());
    info!("Operational mode set to {}", opts.op_mode);
    if opts.force_overwrite {
        info!("Forcing file overwriting")
    };
    if opts.keep_input_files {
        info!("Keeping input files")
    };
    opts
}
