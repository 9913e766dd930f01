use crate::compress::LookupTable;
use crate::params::DigestSize;
use crate::streebog::Streebog;

/// The size in bytes of the 512-bit checksum.
pub const DIGEST_SIZE: usize = 64;

/// The block size, in bytes, of the hash function.
pub const DIGEST_BLOCK_SIZE: usize = 64;

/// new returns a 512-bit hash object that has already absorbed `data`.
pub fn new(data: &[u8]) -> Streebog {
    let mut h = Streebog::with_compressor(LookupTable::default(), DigestSize::Bits512);
    h.update(data);
    h
}

#[cfg(test)]
pub mod test {
    use super::*;

    #[test]
    fn sizes() {
        let h = new(&[]);
        assert_eq!(h.size(), DIGEST_SIZE, "got size {}, want {}", h.size(), DIGEST_SIZE);
        assert_eq!(
            h.block_size(),
            DIGEST_BLOCK_SIZE,
            "got block size {}, want {}",
            h.block_size(),
            DIGEST_BLOCK_SIZE
        );
    }

    #[test]
    fn checksum() {
        let mut h = new(b"hello");
        h.update(b" world");
        h.update(b"\n");

        let sum = h.hexdigest();
        let expected_sum = "9d295fa56ebe77b83db37832685ce874c43a5add7afc5f1aaa94ca21b12a12897a48bb3dbbe20cd9cfafa22a6e3c82eb4c6503109bfb0b4514c7bc27e69ec120";
        assert_eq!(sum, expected_sum, "got {}, want {}", sum, expected_sum);
    }
}
