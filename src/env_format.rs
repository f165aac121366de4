use crate::error::Error;

pub const CRC32_SIZE: usize = 4;
// minimum trailing NUL bytes: entry terminator plus list terminator
pub const TRAILER_SIZE: usize = 2;
pub const FLAGS_SIZE: usize = 1;

/// Redundant-environment state stored right after the checksum.
#[repr(u8)]
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Flags {
    Obsolete = 0,
    Active = 1,
}

impl Flags {
    pub fn as_u8(self) -> u8 {
        self as u8
    }
}

impl TryFrom<u8> for Flags {
    type Error = Error;

    fn try_from(v: u8) -> Result<Self, Error> {
        match v {
            0 => Ok(Flags::Obsolete),
            1 => Ok(Flags::Active),
            other => Err(Error::InvalidFlags(other)),
        }
    }
}

/// Header shape of an image. The image itself does not say which one it
/// uses, the caller has to know.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum Layout {
    #[default]
    Single,
    Redundant,
}

impl Layout {
    pub fn with_flags(present: bool) -> Self {
        if present {
            Layout::Redundant
        } else {
            Layout::Single
        }
    }

    pub fn flags_size(self) -> usize {
        match self {
            Layout::Single => 0,
            Layout::Redundant => FLAGS_SIZE,
        }
    }

    /// Offset of the first data byte, also the start of the checksummed region.
    pub fn data_offset(self) -> usize {
        CRC32_SIZE + self.flags_size()
    }

    pub fn min_image_size(self, data_len: usize) -> usize {
        self.data_offset() + data_len + TRAILER_SIZE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offsets() {
        assert_eq!(Layout::Single.data_offset(), 4);
        assert_eq!(Layout::Redundant.data_offset(), 5);
        assert_eq!(Layout::Single.min_image_size(29), 35);
        assert_eq!(Layout::Redundant.min_image_size(29), 36);
        assert_eq!(Layout::with_flags(true), Layout::Redundant);
        assert_eq!(Layout::default(), Layout::Single);
    }

    #[test]
    fn flags_from_byte() {
        assert_eq!(Flags::try_from(0).unwrap(), Flags::Obsolete);
        assert_eq!(Flags::try_from(1).unwrap(), Flags::Active);
        assert!(matches!(Flags::try_from(2), Err(Error::InvalidFlags(2))));
        assert_eq!(Flags::Active.as_u8(), 1);
    }
}
