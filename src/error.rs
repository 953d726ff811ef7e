//! Error types for the galois-tables library.
//!
//! All failures are reported through a single [`Error`] enum built with the
//! `thiserror` crate. Construction errors abort construction entirely; no
//! partially built field is ever returned.

use thiserror::Error;

/// The main error type for the galois-tables library.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    // ============ Construction Errors ============
    /// The field parameters (characteristic, degree, polynomial) are invalid.
    #[error("invalid field configuration: {message}")]
    InvalidConfig {
        /// Description of what is invalid.
        message: String,
    },

    /// The defining polynomial does not generate the full multiplicative group.
    #[error(
        "polynomial is not primitive over GF({p}): power {index} of the root repeats an earlier element of GF({p}^{n})"
    )]
    NotPrimitive {
        /// The characteristic.
        p: u32,
        /// The extension degree.
        n: u32,
        /// The first power of the root whose coordinates were already in the table.
        index: usize,
    },

    // ============ Arithmetic Errors ============
    /// The operands belong to fields with different (p, n).
    #[error("cannot combine an element of {left} with an element of {right}")]
    FieldMismatch {
        /// Field of the left operand, e.g. `GF(2^4)`.
        left: String,
        /// Field of the right operand.
        right: String,
    },

    /// Attempted division by the zero element.
    #[error("division by zero in GF({order})")]
    DivisionByZero {
        /// The order of the field where division by zero occurred.
        order: usize,
    },

    /// Attempted to invert the zero element.
    #[error("zero has no multiplicative inverse in GF({order})")]
    InverseOfZero {
        /// The order of the field.
        order: usize,
    },

    /// Index is out of bounds.
    #[error("index {index} is out of bounds for size {size}")]
    IndexOutOfBounds {
        /// The invalid index.
        index: usize,
        /// The number of elements in the field.
        size: usize,
    },

    // ============ Basis Errors ============
    /// The proposed basis is the wrong size or not orthonormal under the trace form.
    #[error("invalid basis: {message}")]
    InvalidBasis {
        /// Description of why the basis was rejected.
        message: String,
    },
}

/// A specialized `Result` type for galois-tables operations.
pub type Result<T, E = Error> = std::result::Result<T, E>;

impl Error {
    /// Create a new `InvalidConfig` error.
    #[must_use]
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }

    /// Create a new `InvalidBasis` error.
    #[must_use]
    pub fn invalid_basis(message: impl Into<String>) -> Self {
        Self::InvalidBasis {
            message: message.into(),
        }
    }
}
