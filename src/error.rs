//! Errors reported at the validated API boundary.

use thiserror::Error;

/// The one caller-visible failure of the crate.
///
/// Absorption and the permutation are total functions. The only runtime
/// check is on the caller-supplied digest buffer; every other precondition
/// is unrepresentable through this API (the algorithm selector is a closed
/// enum) or documented as a usage contract on [`Sha3`](crate::Sha3).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Sha3Error {
    /// The output buffer is smaller than the selected digest size.
    #[error("output buffer holds {actual} bytes but the digest needs {expected}")]
    OutputBufferTooSmall {
        /// Digest size of the selected algorithm, in bytes.
        expected: usize,
        /// Capacity the caller actually supplied.
        actual: usize,
    },
}
