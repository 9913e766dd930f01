#![warn(missing_docs)]
//! A Rust implementation of the GOST R 34.11-2012 hash function, also known
//! as Streebog.
//!
//! The hash compresses a message into a 256-bit or 512-bit digest. It is
//! built from a 12-round substitution-permutation cipher used in a
//! Miyaguchi–Preneel style compression function, plus a length counter and a
//! running checksum that are folded in at the end. The algorithm is published
//! in [`RFC 6986`].
//!
//! Two APIs are provided: the [`streebog::Streebog`] hash object (construct,
//! `update`, `digest`, `hexdigest`) and the [`Streebog256`]/[`Streebog512`]
//! types which implement the traits of the [`digest`] crate.
//!
//! # Example
//! ```
//! use streebog::streebog::Streebog;
//! use anyhow::Result;
//!
//! fn main() -> Result<()> {
//!   let mut h = Streebog::new(b"hello ", 512)?;
//!   h.update(b"world\n");
//!   println!("Result: {}", h.hexdigest());
//!
//!   assert!(Streebog::new(b"", 384).is_err());
//!   Ok(())
//! }
//! ```
//!
//! [`RFC 6986`]: https://www.rfc-editor.org/rfc/rfc6986
/// `compress` holds the round function, the block cipher and the compression function.
pub mod compress;
/// `consts` holds the tables fixed by the standard.
pub mod consts;
/// `error` defines the crate error type.
pub mod error;
/// `params` defines the supported digest sizes.
pub mod params;
mod state;
/// `streebog` is the hash object.
pub mod streebog;
/// `streebog256` is the variant with an output of 32 bytes (256 bits).
pub mod streebog256;
/// `streebog512` is the variant with an output of 64 bytes (512 bits).
pub mod streebog512;
/// `streebogcore` adapts the hash to the `digest` crate.
pub mod streebogcore;

pub use error::Error;
pub use params::DigestSize;
pub use streebogcore::{Streebog256, Streebog512};
