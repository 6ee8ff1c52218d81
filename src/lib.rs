//! SHA-3 fixed-output hash functions from [FIPS 202].
//!
//! The crate is the two halves of the sponge construction and nothing else:
//!
//! 1. [`keccak::f1600`], the Keccak-f[1600] permutation over 25 64-bit
//!    lanes;
//! 2. [`Sha3`], the sponge driver that absorbs input into the permutation
//!    state at the algorithm's rate and squeezes out a single digest.
//!
//! Digests are byte-for-byte those of FIPS 202 for all four fixed-output
//! algorithms: SHA3-224, SHA3-256, SHA3-384 and SHA3-512. Extendable-output
//! functions (SHAKE) and keyed constructions are out of scope.
//!
//! Contexts are plain owned values with no heap storage and no shared
//! state; independent threads may hash with independent contexts without
//! synchronization. The permutation state is wiped on finalization and on
//! drop.
//!
//! # Examples
//!
//! Streaming, with the algorithm chosen at run time:
//!
//! ```
//! use fips202::{Algorithm, Sha3};
//!
//! let mut ctx = Sha3::new(Algorithm::Sha3_256);
//! ctx.update(b"hello ");
//! ctx.update(b"world");
//!
//! let mut digest = [0u8; 32];
//! ctx.finalize_into(&mut digest).unwrap();
//! assert_eq!(digest, fips202::sha3_256(b"hello world"));
//! ```
//!
//! [FIPS 202]: https://nvlpubs.nist.gov/nistpubs/FIPS/NIST.FIPS.202.pdf

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]

pub mod keccak;

mod error;
mod sponge;

pub use error::Sha3Error;
pub use sponge::{Algorithm, Sha3, STATE_BYTES};

/// Returns the SHA3-224 digest of `message`.
#[must_use]
pub fn sha3_224(message: &[u8]) -> [u8; 28] {
    hash_message(Algorithm::Sha3_224, message)
}

/// Returns the SHA3-256 digest of `message`.
#[must_use]
pub fn sha3_256(message: &[u8]) -> [u8; 32] {
    hash_message(Algorithm::Sha3_256, message)
}

/// Returns the SHA3-384 digest of `message`.
#[must_use]
pub fn sha3_384(message: &[u8]) -> [u8; 48] {
    hash_message(Algorithm::Sha3_384, message)
}

/// Returns the SHA3-512 digest of `message`.
#[must_use]
pub fn sha3_512(message: &[u8]) -> [u8; 64] {
    hash_message(Algorithm::Sha3_512, message)
}

fn hash_message<const N: usize>(algorithm: Algorithm, message: &[u8]) -> [u8; N] {
    debug_assert_eq!(N, algorithm.digest_size());
    let mut ctx = Sha3::new(algorithm);
    ctx.update(message);
    let mut digest = [0u8; N];
    ctx.finalize_raw(&mut digest);
    digest
}
