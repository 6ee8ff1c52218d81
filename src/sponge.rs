//! The sponge driver for the SHA-3 fixed-output hashes.
//!
//! A [`Sha3`] context owns one 200-byte Keccak state and a fill index into
//! the rate-sized prefix of that state. Input bytes are XORed in at the
//! fill index; each time a full rate-sized block has accumulated the state
//! is run through [`f1600`]. Finalization applies the pad10*1 rule carrying
//! the SHA-3 "01" domain-separation suffix, permutes once more, copies the
//! digest out of the state prefix and wipes the state.

use core::fmt;

use zerocopy::{transmute_mut, FromBytes, Immutable, IntoBytes, KnownLayout};
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::error::Sha3Error;
use crate::keccak::{f1600, LANES};

/// Size of the Keccak-f[1600] state in bytes.
pub const STATE_BYTES: usize = 200;

/// The "01" domain-separation suffix of SHA-3 together with the opening bit
/// of pad10*1, packed into one byte.
const PAD_SUFFIX: u8 = 0x06;

/// The closing bit of pad10*1, XORed into the last byte of the rate region.
/// Shares its byte with [`PAD_SUFFIX`] when the message ends one byte short
/// of the block boundary.
const PAD_FINAL: u8 = 0x80;

/// Selects one of the four fixed-output SHA-3 algorithms.
///
/// Discriminants equal the digest size in bytes, so conversion to the FIPS
/// security-parameter convention is a plain cast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    /// SHA3-224: 28-byte digest, 144-byte rate.
    Sha3_224 = 28,
    /// SHA3-256: 32-byte digest, 136-byte rate.
    Sha3_256 = 32,
    /// SHA3-384: 48-byte digest, 104-byte rate.
    Sha3_384 = 48,
    /// SHA3-512: 64-byte digest, 72-byte rate.
    Sha3_512 = 64,
}

impl Algorithm {
    /// Digest size in bytes.
    #[must_use]
    pub const fn digest_size(self) -> usize {
        self as usize
    }

    /// Rate in bytes: the state size minus twice the digest size.
    ///
    /// This is the block size of the absorption loop; the remaining bytes
    /// of the state form the capacity and are never touched by input.
    #[must_use]
    pub const fn rate(self) -> usize {
        STATE_BYTES - 2 * self.digest_size()
    }

    /// Maps a digest size in bytes back to its algorithm.
    #[must_use]
    pub const fn from_digest_size(size: usize) -> Option<Self> {
        match size {
            28 => Some(Self::Sha3_224),
            32 => Some(Self::Sha3_256),
            48 => Some(Self::Sha3_384),
            64 => Some(Self::Sha3_512),
            _ => None,
        }
    }
}

/// A wrapper around the 200-byte state buffer that is always 8-byte
/// aligned, to make references to it safely convertible to references to
/// `[u64; 25]` (u64 words must be 8-byte aligned).
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop, Immutable, KnownLayout, FromBytes, IntoBytes)]
#[repr(align(8))]
struct AlignedKeccakState([u8; STATE_BYTES]);

/// Censored version of Debug.
impl fmt::Debug for AlignedKeccakState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("AlignedKeccakState")
            .field(&"<redacted>")
            .finish()
    }
}

impl Default for AlignedKeccakState {
    fn default() -> Self {
        Self([0u8; STATE_BYTES])
    }
}

impl AlignedKeccakState {
    /// Physical index of logical state byte `i`.
    ///
    /// The logical view is the FIPS string layout: byte `i` is the
    /// little-endian byte `i % 8` of lane `i / 8`. On little-endian hosts
    /// that is the identity; on big-endian hosts the order reverses within
    /// each 8-byte group.
    const fn position(index: usize) -> usize {
        if cfg!(target_endian = "little") {
            index
        } else {
            (index & !7) | (7 - (index & 7))
        }
    }

    fn lanes_mut(&mut self) -> &mut [u64; LANES] {
        transmute_mut!(self)
    }

    fn permute(&mut self) {
        f1600(self.lanes_mut());
    }

    fn xor_byte(&mut self, index: usize, byte: u8) {
        self.0[Self::position(index)] ^= byte;
    }

    fn xor_lane(&mut self, lane: usize, word: u64) {
        self.lanes_mut()[lane] ^= word;
    }

    /// Copies the logical state prefix into `out`.
    fn copy_prefix(&self, out: &mut [u8]) {
        for (index, byte) in out.iter_mut().enumerate() {
            *byte = self.0[Self::position(index)];
        }
    }
}

/// A streaming SHA-3 hashing context.
///
/// The lifecycle is `new` -> zero or more `update` calls -> one
/// `finalize_into`. The digest is independent of how the input stream is
/// split across `update` calls. Finalization wipes the permutation state;
/// continuing to `update` a finalized context without calling [`reset`]
/// first is unspecified use and yields no meaningful digest. Dropping a
/// context wipes it as well.
///
/// [`reset`]: Sha3::reset
#[derive(Debug, Clone, Zeroize, ZeroizeOnDrop)]
pub struct Sha3 {
    state: AlignedKeccakState,
    fill: usize,
    #[zeroize(skip)]
    algorithm: Algorithm,
}

impl Sha3 {
    /// Creates a zeroed context for the given algorithm.
    #[must_use]
    pub fn new(algorithm: Algorithm) -> Self {
        Self {
            state: AlignedKeccakState::default(),
            fill: 0,
            algorithm,
        }
    }

    /// The algorithm this context was created for.
    #[must_use]
    pub const fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// Absorbs `input` into the state.
    ///
    /// Each byte is XORed into the rate-sized prefix at the fill index; the
    /// state is permuted whenever a full block has accumulated. Lanes are
    /// filled in little-endian byte order on every host.
    pub fn update(&mut self, input: &[u8]) {
        let rate = self.algorithm.rate();

        // Whole lanes can be XORed in directly when the fill index and the
        // input length are both lane-aligned. The rate is always a multiple
        // of 8, so block boundaries stay aligned too.
        if self.fill % 8 == 0 && input.len() % 8 == 0 {
            for group in input.chunks_exact(8) {
                let word = u64::from_le_bytes([
                    group[0], group[1], group[2], group[3], group[4], group[5], group[6], group[7],
                ]);
                self.state.xor_lane(self.fill / 8, word);
                self.fill += 8;
                if self.fill == rate {
                    self.state.permute();
                    self.fill = 0;
                }
            }
            return;
        }

        for &byte in input {
            self.state.xor_byte(self.fill, byte);
            self.fill += 1;
            if self.fill == rate {
                self.state.permute();
                self.fill = 0;
            }
        }
    }

    /// Finalizes the context and writes the digest into `output`.
    ///
    /// Exactly [`Algorithm::digest_size`] bytes are written; any remaining
    /// bytes of `output` are left untouched. Fails without touching the
    /// context if `output` is smaller than the digest. On success the
    /// permutation state has been wiped to all-zero bytes.
    pub fn finalize_into(&mut self, output: &mut [u8]) -> Result<(), Sha3Error> {
        let size = self.algorithm.digest_size();
        if output.len() < size {
            return Err(Sha3Error::OutputBufferTooSmall {
                expected: size,
                actual: output.len(),
            });
        }
        self.finalize_raw(&mut output[..size]);
        Ok(())
    }

    /// Wipes the context back to its freshly-initialized state, keeping the
    /// algorithm. Required before reusing a finalized context.
    pub fn reset(&mut self) {
        self.state.zeroize();
        self.fill = 0;
    }

    /// Padding, final permutation, digest extraction, state wipe.
    ///
    /// `output` must be exactly the digest size; callers validate.
    pub(crate) fn finalize_raw(&mut self, output: &mut [u8]) {
        debug_assert_eq!(output.len(), self.algorithm.digest_size());
        let rate = self.algorithm.rate();

        // pad10*1 with the domain suffix. The fill index is always below
        // the rate here, and the two masks land on the same byte when the
        // message ends one byte short of the block boundary.
        self.state.xor_byte(self.fill, PAD_SUFFIX);
        self.state.xor_byte(rate - 1, PAD_FINAL);
        self.state.permute();

        self.state.copy_prefix(output);
        self.state.zeroize();
        self.fill = 0;
    }
}
