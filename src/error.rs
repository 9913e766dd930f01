use thiserror::Error;

/// Error is returned by the fallible parts of the crate.
///
/// Hashing itself never fails; only configuration and I/O do.
#[derive(Debug, Error)]
pub enum Error {
    /// The requested digest size is neither 256 nor 512 bits.
    #[error("invalid digest size: {0} bits, want 256 or 512")]
    InvalidDigestSize(usize),

    /// The digest size text is not a decimal number.
    #[error("could not parse digest size {0:?}")]
    ParseDigestSize(String),

    /// Reading the message from a stream failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
