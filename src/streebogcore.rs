use core::fmt;
use core::marker::PhantomData;

use digest::{
    block_buffer::Eager,
    core_api::{AlgorithmName, Buffer, BufferKindUser, CoreWrapper, FixedOutputCore, UpdateCore},
    crypto_common::{Block, BlockSizeUser},
    generic_array::ArrayLength,
    typenum::{U32, U64},
    HashMarker, Output, OutputSizeUser, Reset,
};

use crate::compress::{Compressor, LookupTable};
use crate::consts::BLOCK_SIZE;
use crate::params::DigestSize;
use crate::state::HashState;

/// Variant fixes the output length of a `StreebogCore`.
pub trait Variant: Clone {
    /// Output length as a type-level number.
    type OutputSize: ArrayLength<u8> + 'static;
    /// Output length as a runtime value.
    const SIZE: DigestSize;
    /// Algorithm name reported through `AlgorithmName`.
    const NAME: &'static str;
}

/// 256-bit output.
#[derive(Clone, Copy, Debug, Default)]
pub struct V256;

/// 512-bit output.
#[derive(Clone, Copy, Debug, Default)]
pub struct V512;

impl Variant for V256 {
    type OutputSize = U32;
    const SIZE: DigestSize = DigestSize::Bits256;
    const NAME: &'static str = "Streebog256";
}

impl Variant for V512 {
    type OutputSize = U64;
    const SIZE: DigestSize = DigestSize::Bits512;
    const NAME: &'static str = "Streebog512";
}

/// Streebog256Core is the 256-bit core with the lookup table compressor.
pub type Streebog256Core = StreebogCore<V256>;

/// Streebog512Core is the 512-bit core with the lookup table compressor.
pub type Streebog512Core = StreebogCore<V512>;

/// Streebog256 is the ready to use 256-bit hasher.
pub type Streebog256 = CoreWrapper<Streebog256Core>;

/// Streebog512 is the ready to use 512-bit hasher.
pub type Streebog512 = CoreWrapper<Streebog512Core>;

/// StreebogCore is the block level core of the hash for the `digest` traits.
/// Buffering of partial blocks is left to `CoreWrapper`.
#[derive(Clone)]
pub struct StreebogCore<V: Variant, C: Compressor = LookupTable> {
    state: HashState<C>,
    _variant: PhantomData<V>,
}

impl<V: Variant, C: Compressor> StreebogCore<V, C> {
    /// new returns a core using the given round function implementation.
    pub fn new(c: C) -> Self {
        Self {
            state: HashState::new(c, V::SIZE),
            _variant: PhantomData,
        }
    }
}

impl<V: Variant, C: Compressor + Default> Default for StreebogCore<V, C> {
    fn default() -> Self {
        Self::new(C::default())
    }
}

impl<V: Variant, C: Compressor> Reset for StreebogCore<V, C> {
    fn reset(&mut self) {
        self.state.reset();
    }
}

impl<V: Variant, C: Compressor> HashMarker for StreebogCore<V, C> {}

impl<V: Variant, C: Compressor> BlockSizeUser for StreebogCore<V, C> {
    type BlockSize = U64;
}

impl<V: Variant, C: Compressor> BufferKindUser for StreebogCore<V, C> {
    type BufferKind = Eager;
}

impl<V: Variant, C: Compressor> OutputSizeUser for StreebogCore<V, C> {
    type OutputSize = V::OutputSize;
}

impl<V: Variant, C: Compressor> AlgorithmName for StreebogCore<V, C> {
    fn write_alg_name(f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(V::NAME)
    }
}

impl<V: Variant, C: Compressor> fmt::Debug for StreebogCore<V, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}Core {{ ... }}", V::NAME)
    }
}

impl<V: Variant, C: Compressor> FixedOutputCore for StreebogCore<V, C> {
    fn finalize_fixed_core(&mut self, buffer: &mut Buffer<Self>, out: &mut Output<Self>) {
        // the eager buffer never holds a full block
        let h = self.state.finalize(buffer.get_data());
        out.copy_from_slice(V::SIZE.truncate(&h));
    }
}

impl<V: Variant, C: Compressor> UpdateCore for StreebogCore<V, C> {
    fn update_blocks(&mut self, blocks: &[Block<Self>]) {
        for b in blocks {
            let mut block = [0u8; BLOCK_SIZE];
            block.copy_from_slice(b);
            self.state.compress_block(&block);
        }
    }
}
