//! The Keccak-f[1600] permutation.
//!
//! The permutation state is 25 lanes of 64 bits, 1600 bits in total, laid
//! out as a 5x5 grid with lane (x, y) at flat index `x + 5 * y`. One call
//! to [`f1600`] runs the 24 rounds of [FIPS 202], section 3.3, each round
//! applying the five step mappings theta, rho, pi, chi and iota in order.
//!
//! Rho and pi are fused into a single pass here: both steps only move bits
//! between fixed positions, so the pass walks the pi lane cycle once,
//! rotating each lane as it is relocated. The result is bit-identical to
//! applying the two steps separately.
//!
//! [FIPS 202]: https://nvlpubs.nist.gov/nistpubs/FIPS/NIST.FIPS.202.pdf

/// Number of 64-bit lanes in the permutation state.
pub const LANES: usize = 25;

/// Round constants for the iota step, one per round, XORed into lane 0.
///
/// Precomputed output of the rc(t) LFSR from Algorithm 5 of FIPS 202.
const ROUND_CONSTANTS: [u64; 24] = [
    0x0000000000000001,
    0x0000000000008082,
    0x800000000000808a,
    0x8000000080008000,
    0x000000000000808b,
    0x0000000080000001,
    0x8000000080008081,
    0x8000000000008009,
    0x000000000000008a,
    0x0000000000000088,
    0x0000000080008009,
    0x000000008000000a,
    0x000000008000808b,
    0x800000000000008b,
    0x8000000000008089,
    0x8000000000008003,
    0x8000000000008002,
    0x8000000000000080,
    0x000000000000800a,
    0x800000008000000a,
    0x8000000080008081,
    0x8000000000008080,
    0x0000000080000001,
    0x8000000080008008,
];

/// Rotation offsets for the rho step, from Table 2 of FIPS 202 reduced
/// modulo the lane width.
///
/// Listed in pi-cycle order rather than lane-index order, so `RHO[i]` is
/// the offset applied to the lane relocated at step `i` of the fused pass.
const RHO: [u32; 24] = [
    1, 3, 6, 10, 15, 21, 28, 36, 45, 55, 2, 14, 27, 41, 56, 8, 25, 43, 62, 18, 39, 61, 20, 44,
];

/// The pi lane cycle. The pass starts by picking up lane 1; the lane picked
/// up at step `i` is written to flat index `PI[i]`, evicting the lane for
/// step `i + 1`. Lane 0 is the fixed point of pi and never moves.
const PI: [usize; 24] = [
    10, 7, 11, 17, 18, 3, 5, 16, 8, 21, 24, 4, 15, 23, 19, 13, 12, 2, 20, 14, 22, 9, 6, 1,
];

/// Applies the Keccak-f[1600] permutation to the state in place.
///
/// Pure and total: there are no inputs beyond the state, no failure
/// conditions, and the only effect is the in-place transformation. All 24
/// rounds run unconditionally.
pub fn f1600(state: &mut [u64; LANES]) {
    for &round_constant in ROUND_CONSTANTS.iter() {
        // Theta. Fold each column into its parity, then cross the parities
        // back over the neighbouring columns.
        let mut parity = [0u64; 5];
        for (i, lane) in state.iter().enumerate() {
            parity[i % 5] ^= lane;
        }
        for x in 0..5 {
            let d = parity[(x + 4) % 5] ^ parity[(x + 1) % 5].rotate_left(1);
            for y in 0..5 {
                state[x + 5 * y] ^= d;
            }
        }

        // Rho and pi, fused along the lane cycle.
        let mut carried = state[1];
        for (&slot, &offset) in PI.iter().zip(RHO.iter()) {
            let evicted = state[slot];
            state[slot] = carried.rotate_left(offset);
            carried = evicted;
        }

        // Chi, row by row over a snapshot of the row.
        for row in state.chunks_exact_mut(5) {
            let snapshot = [row[0], row[1], row[2], row[3], row[4]];
            for x in 0..5 {
                row[x] = snapshot[x] ^ (!snapshot[(x + 1) % 5] & snapshot[(x + 2) % 5]);
            }
        }

        // Iota.
        state[0] ^= round_constant;
    }
}
