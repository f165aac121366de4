use log::debug;

use crate::crc::*;
use crate::env_format::*;
use crate::error::{Error, Result};

#[derive(Debug, Clone, Copy)]
pub struct EncodeOptions {
    /// Total image size. `None` means the smallest image the data fits in.
    pub size: Option<u64>,
    /// Presence selects the redundant layout.
    pub flags: Option<Flags>,
    /// When false the checksum field is left zeroed.
    pub checksum: bool,
}

impl Default for EncodeOptions {
    fn default() -> Self {
        Self {
            size: None,
            flags: None,
            checksum: true,
        }
    }
}

impl EncodeOptions {
    pub fn size(mut self, size: u64) -> Self {
        self.size = Some(size);
        self
    }

    pub fn flags(mut self, flags: Flags) -> Self {
        self.flags = Some(flags);
        self
    }

    pub fn checksum(mut self, on: bool) -> Self {
        self.checksum = on;
        self
    }

    pub fn layout(&self) -> Layout {
        Layout::with_flags(self.flags.is_some())
    }

    /// Final image size for `data_len` bytes of plaintext.
    pub fn resolve_size(&self, data_len: usize) -> Result<usize> {
        let minimum = self.layout().min_image_size(data_len);
        match self.size {
            None => Ok(minimum),
            Some(requested) if requested < minimum as u64 => Err(Error::SizeTooSmall {
                requested,
                minimum: minimum as u64,
            }),
            Some(requested) => {
                usize::try_from(requested).map_err(|_| Error::SizeTooLarge { requested })
            }
        }
    }
}

fn put_fixed32_ne(dst4: &mut [u8], v: u32) {
    dst4.copy_from_slice(&v.to_ne_bytes());
}

/// Builds a binary environment image out of newline separated `name=value` lines.
pub fn encode(data: &[u8], opts: &EncodeOptions) -> Result<Vec<u8>> {
    let layout = opts.layout();
    let size = opts.resolve_size(data.len())?;
    let start = layout.data_offset();

    // zeroed: crc placeholder, and everything past the data is the trailer
    let mut image = Vec::new();
    image
        .try_reserve_exact(size)
        .map_err(|_| Error::SizeTooLarge {
            requested: size as u64,
        })?;
    image.resize(size, 0u8);

    if let Some(flags) = opts.flags {
        image[CRC32_SIZE] = flags.as_u8();
    }

    debug!("writing data...");
    for (dst, &b) in image[start..start + data.len()].iter_mut().zip(data) {
        *dst = if b == b'\n' { 0 } else { b };
    }
    debug!("trailer: {} bytes", size - start - data.len());

    if opts.checksum {
        let crc = crc32::value(&image[start..]);
        put_fixed32_ne(&mut image[..CRC32_SIZE], crc);
        debug!("crc: {:08x}", crc);
    } else {
        debug!("crc: skipped");
    }

    Ok(image)
}
