use std::fmt;
use std::str::FromStr;

use crate::compress::Block;
use crate::consts::BLOCK_SIZE;
use crate::error::Error;

/// DigestSize selects one of the two output lengths of the hash.
///
/// The two sizes start from different initial chaining values, so a 256-bit
/// digest is not a truncation of the 512-bit digest of the same message.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum DigestSize {
    /// 256-bit output, the last 32 bytes of the final chaining value.
    Bits256,
    /// 512-bit output, the whole final chaining value.
    #[default]
    Bits512,
}

impl DigestSize {
    /// bits returns the output length in bits.
    pub fn bits(&self) -> usize {
        match self {
            DigestSize::Bits256 => 256,
            DigestSize::Bits512 => 512,
        }
    }

    /// bytes returns the output length in bytes.
    pub fn bytes(&self) -> usize {
        self.bits() / 8
    }

    /// iv returns the initial chaining value for this size.
    pub fn iv(&self) -> Block {
        match self {
            DigestSize::Bits256 => [0x01; BLOCK_SIZE],
            DigestSize::Bits512 => [0x00; BLOCK_SIZE],
        }
    }

    /// truncate selects the output bytes from a final chaining value.
    pub fn truncate<'a>(&self, h: &'a Block) -> &'a [u8] {
        &h[BLOCK_SIZE - self.bytes()..]
    }
}

impl TryFrom<usize> for DigestSize {
    type Error = Error;

    fn try_from(bits: usize) -> Result<Self, Self::Error> {
        match bits {
            256 => Ok(DigestSize::Bits256),
            512 => Ok(DigestSize::Bits512),
            _ => Err(Error::InvalidDigestSize(bits)),
        }
    }
}

impl FromStr for DigestSize {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bits = s
            .trim()
            .parse::<usize>()
            .map_err(|_| Error::ParseDigestSize(s.to_string()))?;
        DigestSize::try_from(bits)
    }
}

impl fmt::Display for DigestSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.bits())
    }
}

#[cfg(test)]
pub mod test {
    use super::*;

    #[test]
    fn valid_sizes() -> anyhow::Result<()> {
        assert_eq!(DigestSize::try_from(256)?, DigestSize::Bits256);
        assert_eq!(DigestSize::try_from(512)?, DigestSize::Bits512);
        assert_eq!("256".parse::<DigestSize>()?, DigestSize::Bits256);
        assert_eq!(DigestSize::default(), DigestSize::Bits512);
        assert_eq!(DigestSize::Bits256.to_string(), "256");
        Ok(())
    }

    #[test]
    fn invalid_sizes() {
        for bits in [0, 128, 255, 257, 384, 1024] {
            match DigestSize::try_from(bits) {
                Err(Error::InvalidDigestSize(got)) => assert_eq!(got, bits),
                other => panic!("digest size {} accepted: {:?}", bits, other),
            }
        }
        assert!(matches!(
            "five hundred".parse::<DigestSize>(),
            Err(Error::ParseDigestSize(_))
        ));
        assert!(matches!(
            "384".parse::<DigestSize>(),
            Err(Error::InvalidDigestSize(384))
        ));
    }

    #[test]
    fn truncation() {
        let mut h = [0u8; BLOCK_SIZE];
        h.iter_mut().enumerate().for_each(|(i, b)| *b = i as u8);

        assert_eq!(DigestSize::Bits512.truncate(&h), &h[..]);
        assert_eq!(DigestSize::Bits256.truncate(&h), &h[32..]);
        assert_eq!(DigestSize::Bits256.truncate(&h)[0], 32);
    }

    #[test]
    fn initial_values() {
        assert!(DigestSize::Bits256.iv().iter().all(|&b| b == 0x01));
        assert!(DigestSize::Bits512.iv().iter().all(|&b| b == 0x00));
    }
}
