use byteorder::{ByteOrder, LittleEndian};
use once_cell::sync::Lazy;

use crate::consts::{A, BLOCK_SIZE, C, PI, TAU};

/// Block is the 512-bit unit every transform operates on.
pub type Block = [u8; BLOCK_SIZE];

/// s replaces every byte of the block by its image under PI.
pub fn s(block: &Block) -> Block {
    let mut out = [0u8; BLOCK_SIZE];
    out.iter_mut()
        .zip(block.iter())
        .for_each(|(o, &b)| *o = PI[b as usize]);
    out
}

/// p moves byte `i` of the block to position `TAU[i]`.
pub fn p(block: &Block) -> Block {
    let mut out = [0u8; BLOCK_SIZE];
    block
        .iter()
        .enumerate()
        .for_each(|(i, &b)| out[TAU[i] as usize] = b);
    out
}

/// l applies the GF(2) linear map to each of the eight little-endian words.
pub fn l(block: &Block) -> Block {
    let mut out = [0u8; BLOCK_SIZE];
    block
        .chunks_exact(8)
        .zip(out.chunks_exact_mut(8))
        .for_each(|(src, dst)| LittleEndian::write_u64(dst, linear(LittleEndian::read_u64(src))));
    out
}

// the bits are scanned from the most significant one down, bit 63 - j selects A[j].
fn linear(word: u64) -> u64 {
    A.iter().enumerate().fold(0u64, |acc, (j, a)| {
        if (word >> (63 - j)) & 1 == 1 {
            acc ^ a
        } else {
            acc
        }
    })
}

/// xor returns the bytewise exclusive or of two blocks.
pub fn xor(a: &Block, b: &Block) -> Block {
    let mut out = [0u8; BLOCK_SIZE];
    out.iter_mut()
        .enumerate()
        .for_each(|(i, val)| *val = a[i] ^ b[i]);
    out
}

/// add512 adds two little-endian 512-bit numbers modulo 2^512.
pub fn add512(a: &Block, b: &Block) -> Block {
    let mut out = [0u8; BLOCK_SIZE];
    let mut carry = 0u16;
    (0..BLOCK_SIZE).for_each(|i| {
        carry = a[i] as u16 + b[i] as u16 + (carry >> 8);
        out[i] = carry as u8;
    });
    out
}

/// counter_block encodes a 64-bit value into the low bytes of a zero block.
pub fn counter_block(n: u64) -> Block {
    let mut out = [0u8; BLOCK_SIZE];
    LittleEndian::write_u64(&mut out[..8], n);
    out
}

/// Compressor represents the round function and the constructions built on it.
///
/// Implementors only provide `lps`; the block cipher and the compression
/// function are derived from it, so two compressors agreeing on `lps` agree
/// on every digest.
pub trait Compressor: Clone {
    /// lps computes L(P(S(block))).
    fn lps(&self, block: &Block) -> Block;

    /// encrypt runs the 12-round cipher E keyed with `key` over `msg`.
    fn encrypt(&self, key: &Block, msg: &Block) -> Block {
        let mut k = *key;
        let mut m = *msg;
        C.iter().for_each(|c| {
            m = self.lps(&xor(&k, &m));
            k = self.lps(&xor(&k, c));
        });
        xor(&k, &m)
    }

    /// compress is the compression function g: it absorbs `msg` into the
    /// chaining value `h` under the step counter `n`.
    fn compress(&self, n: &Block, h: &Block, msg: &Block) -> Block {
        let key = self.lps(&xor(h, n));
        xor(&xor(&self.encrypt(&key, msg), h), msg)
    }
}

/// Reference computes each layer separately, exactly as the standard writes it.
#[derive(Clone, Copy, Debug, Default)]
pub struct Reference;

impl Reference {
    /// lookup_table returns the precomputed tables fusing the three layers.
    pub fn lookup_table(&self) -> LookupTable {
        LookupTable::default()
    }
}

impl Compressor for Reference {
    fn lps(&self, block: &Block) -> Block {
        l(&p(&s(block)))
    }
}

static LPS_TABLE: Lazy<[[u64; 256]; 8]> = Lazy::new(precompute);

// table[b][v] is the linear map applied to a word whose byte b is PI[v] and
// every other byte is zero. Since TAU is a transpose, output word i is built
// from input bytes i, 8 + i, ..., 56 + i, which land on bytes 0..8 of it.
fn precompute() -> [[u64; 256]; 8] {
    let mut table = [[0u64; 256]; 8];
    (0..8).for_each(|b| {
        (0..256).for_each(|v| {
            table[b][v] = linear((PI[v] as u64) << (8 * b));
        });
    });
    table
}

/// LookupTable is the S, P and L layers merged into eight 256-entry tables.
/// The tables are built once per process and shared by every instance.
#[derive(Clone, Copy)]
pub struct LookupTable {
    table: &'static [[u64; 256]; 8],
}

impl Default for LookupTable {
    fn default() -> Self {
        LookupTable {
            table: &LPS_TABLE,
        }
    }
}

impl Compressor for LookupTable {
    fn lps(&self, block: &Block) -> Block {
        let mut out = [0u8; BLOCK_SIZE];
        (0..8).for_each(|i| {
            let word = (0..8).fold(0u64, |acc, b| acc ^ self.table[b][block[8 * b + i] as usize]);
            LittleEndian::write_u64(&mut out[8 * i..8 * i + 8], word);
        });
        out
    }
}
