pub mod crc32 {
    // Reflected polynomial for CRC-32 (IEEE 802.3, the one U-Boot uses).
    // Seed convention matches zlib: complement on entry and on exit, so a
    // zero seed yields the plain checksum and results can be chained.
    const POLY_REFLECTED: u32 = 0xEDB8_8320;

    const TABLE: [u32; 256] = make_table();

    const fn make_table() -> [u32; 256] {
        let mut table = [0u32; 256];
        let mut i = 0;
        while i < 256 {
            let mut crc = i as u32;
            let mut bit = 0;
            while bit < 8 {
                let mask = (crc & 1).wrapping_neg() & POLY_REFLECTED;
                crc = (crc >> 1) ^ mask;
                bit += 1;
            }
            table[i] = crc;
            i += 1;
        }
        table
    }

    #[inline]
    fn update_byte(crc: u32, b: u8) -> u32 {
        TABLE[((crc ^ b as u32) & 0xFF) as usize] ^ (crc >> 8)
    }

    #[inline]
    pub fn value(data: &[u8]) -> u32 {
        extend(0, data)
    }

    // Extend a prior CRC with more bytes (i.e., crc(data0 || data1)).
    #[inline]
    pub fn extend(initial_crc: u32, data: &[u8]) -> u32 {
        let mut crc = initial_crc ^ 0xFFFF_FFFF;
        for &b in data {
            crc = update_byte(crc, b);
        }
        crc ^ 0xFFFF_FFFF
    }
}

#[cfg(test)]
mod tests {
    use super::crc32;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    const ORACLE: crc::Crc<u32> = crc::Crc::<u32>::new(&crc::CRC_32_ISO_HDLC);

    #[test]
    fn check_value() {
        assert_eq!(crc32::value(b"123456789"), 0xCBF4_3926);
    }

    #[test]
    fn empty_input_returns_seed() {
        assert_eq!(crc32::value(b""), 0);
        assert_eq!(crc32::extend(0xDEAD_BEEF, b""), 0xDEAD_BEEF);
    }

    #[test]
    fn extend_chains() {
        let whole = crc32::value(b"baudrate=115200\0bootdelay=5\0");
        let first = crc32::value(b"baudrate=115200\0");
        assert_eq!(crc32::extend(first, b"bootdelay=5\0"), whole);
    }

    #[test]
    fn matches_reference_implementation() {
        let mut rng = StdRng::seed_from_u64(0x5EED);
        for _ in 0..64 {
            let len = rng.random_range(0..4096);
            let buf: Vec<u8> = (0..len).map(|_| rng.random()).collect();
            assert_eq!(crc32::value(&buf), ORACLE.checksum(&buf));
        }
    }

    #[test]
    fn single_byte_change_is_detected() {
        let mut data = b"bootcmd=run distro_bootcmd\0\0".to_vec();
        let original = crc32::value(&data);
        assert_eq!(crc32::value(&data), original);
        for i in 0..data.len() {
            for bit in 0..8 {
                data[i] ^= 1 << bit;
                assert_ne!(crc32::value(&data), original, "byte {} bit {}", i, bit);
                data[i] ^= 1 << bit;
            }
        }
    }
}
