use std::io::{self, Read};

use log::debug;

use crate::compress::{Block, Compressor, LookupTable};
use crate::consts::BLOCK_SIZE;
use crate::error::Error;
use crate::params::DigestSize;
use crate::state::HashState;

/// Size of the chunks `hash_reader` pulls from a stream.
pub const CHUNK_SIZE: usize = 8192;

/// Streebog is a hash object computing a GOST R 34.11-2012 digest.
///
/// Full blocks are compressed as soon as they are written and only the
/// trailing partial block is buffered. `digest` finalizes a copy of the
/// state, so it can be called any number of times and writing can continue
/// afterwards.
#[derive(Clone)]
pub struct Streebog<C: Compressor = LookupTable> {
    state: HashState<C>,
    x: Block,  // data written since last compression
    nx: usize, // number of bytes buffered in x
}

impl Streebog<LookupTable> {
    /// new returns a hash object of `digest_size` bits that has already
    /// absorbed `data`. Only 256 and 512 are accepted.
    pub fn new(data: &[u8], digest_size: usize) -> Result<Self, Error> {
        let size = DigestSize::try_from(digest_size)?;
        let mut d = Streebog::with_compressor(LookupTable::default(), size);
        d.update(data);
        Ok(d)
    }
}

impl Default for Streebog<LookupTable> {
    fn default() -> Self {
        Streebog::with_compressor(LookupTable::default(), DigestSize::default())
    }
}

impl<C: Compressor> Streebog<C> {
    /// with_compressor returns an empty hash object using the given round
    /// function implementation.
    pub fn with_compressor(c: C, size: DigestSize) -> Self {
        Streebog {
            state: HashState::new(c, size),
            x: [0; BLOCK_SIZE],
            nx: 0,
        }
    }

    /// size returns the number of bytes `digest` returns.
    pub fn size(&self) -> usize {
        self.state.size().bytes()
    }

    /// block_size returns the number of bytes consumed per compression.
    pub fn block_size(&self) -> usize {
        BLOCK_SIZE
    }

    /// digest_size returns the configured output length.
    pub fn digest_size(&self) -> DigestSize {
        self.state.size()
    }

    /// reset forgets every byte written so far.
    pub fn reset(&mut self) {
        self.state.reset();
        self.nx = 0;
    }

    /// update appends `p` to the message.
    pub fn update(&mut self, mut p: &[u8]) {
        if self.nx > 0 {
            // continue with existing buffer, if nonempty
            let n = (BLOCK_SIZE - self.nx).min(p.len());
            self.x[self.nx..self.nx + n].copy_from_slice(&p[..n]);
            self.nx += n;
            p = &p[n..];
            if self.nx == BLOCK_SIZE {
                let block = self.x;
                self.state.compress_block(&block);
                self.nx = 0;
            }
        }

        // handle any remaining full input blocks
        let mut blocks = p.chunks_exact(BLOCK_SIZE);
        for chunk in &mut blocks {
            let mut block = [0u8; BLOCK_SIZE];
            block.copy_from_slice(chunk);
            self.state.compress_block(&block);
        }

        let rest = blocks.remainder();
        if !rest.is_empty() {
            // a partial block can only be left over once the buffer was drained
            self.x[..rest.len()].copy_from_slice(rest);
            self.nx = rest.len();
        }
    }

    /// digest returns the hash of everything written so far.
    pub fn digest(&self) -> Vec<u8> {
        // Finalize a copy of the state so that caller can keep writing.
        let mut d0 = self.state.clone();
        let h = d0.finalize(&self.x[..self.nx]);
        d0.size().truncate(&h).to_vec()
    }

    /// hexdigest returns `digest` as a lowercase hexadecimal string.
    pub fn hexdigest(&self) -> String {
        hex::encode(self.digest())
    }
}

impl<C: Compressor> io::Write for Streebog<C> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.update(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// hash_reader reads `reader` to the end in `CHUNK_SIZE` pieces and returns
/// the hexadecimal digest of its content.
pub fn hash_reader<R: Read>(mut reader: R, size: DigestSize) -> Result<String, Error> {
    let mut h = Streebog::with_compressor(LookupTable::default(), size);
    let mut chunk = vec![0u8; CHUNK_SIZE];
    let mut total = 0u64;

    loop {
        let n = match reader.read(&mut chunk) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e.into()),
        };
        h.update(&chunk[..n]);
        total += n as u64;
    }

    let digest = h.hexdigest();
    debug!("hashed {} bytes into {}-bit digest {}", total, size, digest);
    Ok(digest)
}
