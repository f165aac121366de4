use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Fatal conditions. No target bytes are produced once one of these is hit.
#[derive(Debug, Error)]
pub enum Error {
    #[error("specified size ({requested}) is too small for the source to fit into, must be at least {minimum} bytes")]
    SizeTooSmall { requested: u64, minimum: u64 },

    #[error("specified size ({requested}) does not fit into memory")]
    SizeTooLarge { requested: u64 },

    #[error("image is {len} bytes, shorter than its {minimum} byte header")]
    ImageTooSmall { len: usize, minimum: usize },

    #[error("invalid flags value {0}, expected 0 (obsolete) or 1 (active)")]
    InvalidFlags(u8),

    #[error("can't {op} '{}'", .path.display())]
    Io {
        op: &'static str,
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Advisory conditions. The operation still completes and produces output.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Warning {
    #[error("bad CRC: stored {stored:#010x}, computed {computed:#010x}, using data anyway")]
    ChecksumMismatch { stored: u32, computed: u32 },

    #[error("no double-NUL terminator in {scanned} data bytes, using the whole image")]
    NoTerminatorFound { scanned: usize },

    #[error("unknown flags value {0:#04x}")]
    UnknownFlags(u8),

    #[error("option {0} is ignored in reverse mode")]
    IgnoredOption(&'static str),
}

pub type Result<T> = std::result::Result<T, Error>;
