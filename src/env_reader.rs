use log::{debug, warn};

use crate::crc::*;
use crate::env_format::*;
use crate::error::{Error, Result, Warning};

/// Receives the advisory findings of a decode. Decoding never stops on them.
pub trait Reporter {
    fn warning(&mut self, warning: Warning);
}

impl<R: Reporter + ?Sized> Reporter for &mut R {
    fn warning(&mut self, warning: Warning) {
        (**self).warning(warning)
    }
}

/// Keeps every warning for later inspection.
#[derive(Debug, Default)]
pub struct CollectingReporter {
    pub warnings: Vec<Warning>,
}

impl Reporter for CollectingReporter {
    fn warning(&mut self, warning: Warning) {
        self.warnings.push(warning);
    }
}

/// Forwards warnings to the `log` facade.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogReporter;

impl Reporter for LogReporter {
    fn warning(&mut self, warning: Warning) {
        warn!("{}", warning);
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decoded {
    /// Plaintext, one `name=value` entry per line.
    pub data: Vec<u8>,
    /// Raw flags byte, present only for the redundant layout.
    pub flags: Option<u8>,
    pub stored_crc: u32,
    pub computed_crc: u32,
}

impl Decoded {
    pub fn crc_ok(&self) -> bool {
        self.stored_crc == self.computed_crc
    }
}

fn get_fixed32_ne(src4: &[u8]) -> u32 {
    u32::from_ne_bytes([src4[0], src4[1], src4[2], src4[3]])
}

/// Length of the logical data in `data`, up to and including the NUL that
/// ends the last entry. `None` when no double-NUL exists.
fn find_terminator(data: &[u8]) -> Option<usize> {
    let mut i = 0;
    // pairs are read at i and i + 1, so stop one byte short of the end
    while i + 1 < data.len() {
        if data[i] == 0 && data[i + 1] == 0 {
            // an empty list is just the double-NUL
            return Some(if i == 0 { 0 } else { i + 1 });
        }
        i += 1;
    }
    None
}

/// Turns a binary environment image back into newline separated plaintext.
pub fn decode<Rep: Reporter>(image: &[u8], layout: Layout, mut reporter: Rep) -> Result<Decoded> {
    let start = layout.data_offset();
    if image.len() < start {
        return Err(Error::ImageTooSmall {
            len: image.len(),
            minimum: start,
        });
    }

    let stored_crc = get_fixed32_ne(&image[..CRC32_SIZE]);
    let computed_crc = crc32::value(&image[start..]);
    debug!("crc: stored {:08x}, computed {:08x}", stored_crc, computed_crc);
    if stored_crc != computed_crc {
        reporter.warning(Warning::ChecksumMismatch {
            stored: stored_crc,
            computed: computed_crc,
        });
    }

    let flags = match layout {
        Layout::Single => None,
        Layout::Redundant => {
            let raw = image[CRC32_SIZE];
            if Flags::try_from(raw).is_err() {
                reporter.warning(Warning::UnknownFlags(raw));
            }
            Some(raw)
        }
    };

    let body = &image[start..];
    let len = match find_terminator(body) {
        Some(len) => len,
        None => {
            reporter.warning(Warning::NoTerminatorFound { scanned: body.len() });
            body.len()
        }
    };
    debug!("data: {} bytes, {} discarded", len, body.len() - len);

    let data = body[..len]
        .iter()
        .map(|&b| if b == 0 { b'\n' } else { b })
        .collect();

    Ok(Decoded {
        data,
        flags,
        stored_crc,
        computed_crc,
    })
}
