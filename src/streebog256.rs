use crate::compress::LookupTable;
use crate::params::DigestSize;
use crate::streebog::Streebog;

/// The size in bytes of the 256-bit checksum.
pub const DIGEST_SIZE: usize = 32;

/// The block size, in bytes, of the hash function.
pub const DIGEST_BLOCK_SIZE: usize = 64;

/// new returns a 256-bit hash object that has already absorbed `data`.
pub fn new(data: &[u8]) -> Streebog {
    let mut h = Streebog::with_compressor(LookupTable::default(), DigestSize::Bits256);
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
        let expected_sum = "f72018189a5cfb803dbe1f2149cf554c40093d8e7f81c21e08ac5bcd09d9934d";
        assert_eq!(sum, expected_sum, "got {}, want {}", sum, expected_sum);
    }

    #[test]
    fn not_a_truncation() {
        let long = crate::streebog512::new(b"hello world\n").digest();
        let short = new(b"hello world\n").digest();
        assert_ne!(&long[crate::streebog512::DIGEST_SIZE - DIGEST_SIZE..], &short[..]);
    }
}
