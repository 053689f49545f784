//! CLI definitions for hexe.
//!
//! Kept in the library so the xtask can generate the man page from the same
//! definition.

use std::path::PathBuf;

use clap::Parser;

use crate::codec::{Endian, NumberBase};

/// Build version string.
/// - Release builds (--features release): "0.1.0"
/// - Dev builds: "0.1.0-dev+abc1234 (2026-10-19)"
#[cfg(feature = "release")]
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(not(feature = "release"))]
pub const VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    "-dev+",
    env!("VERGEN_GIT_SHA"),
    " (",
    env!("HEXE_BUILD_DATE"),
    ")"
);

#[derive(Parser, Debug)]
#[command(name = "hexe")]
#[command(version = VERSION)]
#[command(about = "A modal terminal editor for raw bytes")]
#[command(long_about = "A modal terminal editor for raw bytes.

Bytes are shown as numbers in a selectable base next to their ASCII
characters. Type digits to overwrite or insert bytes, Tab to switch to
typing characters, Ctrl+F to search and Ctrl+S to save.

EXAMPLES:
    hexe firmware.bin              Edit a file in hexadecimal
    hexe -b dec --insert notes.txt Start in decimal insert mode
    hexe --ascii -w 8 data.bin     Type characters, 8 bytes per row
    hexe -b dec --write-config     Make decimal the default base")]
pub struct Cli {
    /// File to edit (created on save if it does not exist)
    pub file: Option<PathBuf>,

    /// Initial number base [bin, oct, dec, hex]
    #[arg(short = 'b', long, value_name = "BASE")]
    pub base: Option<NumberBase>,

    /// Byte order for multi-byte values [native, little, big]
    #[arg(short = 'e', long, value_name = "ENDIAN")]
    pub endian: Option<Endian>,

    /// Start in insert mode instead of overwrite mode
    #[arg(long)]
    pub insert: bool,

    /// Start typing characters instead of numbers
    #[arg(long)]
    pub ascii: bool,

    /// Fixed number of bytes per row (0 fits the terminal)
    #[arg(short = 'w', long, value_name = "N")]
    pub bytes_per_row: Option<usize>,

    /// Use an alternate config file
    #[arg(short = 'c', long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log filter, e.g. "debug" (overrides the config file)
    #[arg(long, value_name = "LEVEL")]
    pub log_level: Option<String>,

    /// Write the effective settings to the config file and exit
    #[arg(long)]
    pub write_config: bool,
}
