use log::trace;

use crate::compress::{add512, counter_block, Block, Compressor};
use crate::consts::BLOCK_SIZE;
use crate::params::DigestSize;

const ZERO: Block = [0; BLOCK_SIZE];

/// HashState is the running state of the hash between full blocks.
#[derive(Clone)]
pub struct HashState<C: Compressor> {
    c: C,
    size: DigestSize,

    h: Block,     // chaining value (from last compression, or IV)
    n: Block,     // number of message bits processed, mod 2^512
    sigma: Block, // sum of all message blocks, mod 2^512
}

impl<C: Compressor> HashState<C> {
    /// new returns a state positioned at the start of an empty message.
    pub fn new(c: C, size: DigestSize) -> Self {
        HashState {
            c,
            size,
            h: size.iv(),
            n: ZERO,
            sigma: ZERO,
        }
    }

    /// size returns the digest size the state was created for.
    pub fn size(&self) -> DigestSize {
        self.size
    }

    /// reset discards everything absorbed so far.
    pub fn reset(&mut self) {
        self.h = self.size.iv();
        self.n = ZERO;
        self.sigma = ZERO;
    }

    /// compress_block absorbs one full message block.
    pub fn compress_block(&mut self, block: &Block) {
        self.h = self.c.compress(&self.n, &self.h, block);
        self.sigma = add512(&self.sigma, block);
        self.n = add512(&self.n, &counter_block((BLOCK_SIZE * 8) as u64));
    }

    /// finalize pads the trailing bytes, folds in the length and the checksum
    /// and returns the final chaining value. `tail` must be shorter than a block.
    ///
    /// The state is consumed logically: callers that keep hashing afterwards
    /// finalize a clone instead.
    pub fn finalize(&mut self, tail: &[u8]) -> Block {
        debug_assert!(tail.len() < BLOCK_SIZE, "tail of {} bytes", tail.len());
        trace!("finalizing {}-bit digest with {} trailing bytes", self.size, tail.len());

        // Padding. The tail is followed by a single 0x01 byte and zeros.
        let mut padded = ZERO;
        padded[..tail.len()].copy_from_slice(tail);
        padded[tail.len()] = 0x01;

        self.h = self.c.compress(&self.n, &self.h, &padded);
        // N counts only the real message bits; Σ takes the padded block.
        self.n = add512(&self.n, &counter_block((tail.len() * 8) as u64));
        self.sigma = add512(&self.sigma, &padded);

        self.h = self.c.compress(&ZERO, &self.h, &self.n);
        self.h = self.c.compress(&ZERO, &self.h, &self.sigma);
        self.h
    }
}

#[cfg(test)]
pub mod test {
    use super::*;
    use crate::compress::Reference;

    #[test]
    fn counters() {
        let mut state = HashState::new(Reference, DigestSize::Bits512);
        let block = [0x01u8; BLOCK_SIZE];
        state.compress_block(&block);
        state.compress_block(&block);

        assert_eq!(state.n, counter_block(1024));
        let mut expected = ZERO;
        expected.iter_mut().for_each(|b| *b = 0x02);
        assert_eq!(state.sigma, expected);
    }

    #[test]
    fn finalize_counts_unpadded_bits() {
        let mut state = HashState::new(Reference, DigestSize::Bits256);
        state.finalize(&[0xaa; 3]);

        assert_eq!(state.n, counter_block(24));
        let mut expected = ZERO;
        expected[..3].copy_from_slice(&[0xaa; 3]);
        expected[3] = 0x01;
        assert_eq!(state.sigma, expected);
    }

    #[test]
    fn reset_restores_iv() {
        let mut state = HashState::new(Reference, DigestSize::Bits256);
        state.compress_block(&[0x55; BLOCK_SIZE]);
        state.reset();

        assert_eq!(state.h, DigestSize::Bits256.iv());
        assert_eq!(state.n, ZERO);
        assert_eq!(state.sigma, ZERO);
    }
}
