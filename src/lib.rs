//! # galois-tables
//!
//! Galois fields GF(p) and GF(p^n) built as explicit, ordered element tables.
//!
//! ## Overview
//!
//! An extension field GF(p^n) is generated from a primitive polynomial of
//! degree n over GF(p). Its root α generates every nonzero element, so the
//! field is tabulated as 0, α, α², ..., α^(p^n - 1) = 1 and each element's
//! table position is its discrete logarithm. Multiplication, powers and
//! inverses are then O(1) index arithmetic, while addition works directly on
//! coordinates.
//!
//! This library provides:
//! - Table construction with detection of non-primitive polynomials
//! - Element arithmetic: `+ - * /`, powers, inverses and the field trace
//! - Verification of, and transformation to, a self-dual basis
//! - Polynomial evaluation over the field
//!
//! ## Quick Start
//!
//! ```rust
//! use galois_tables::GaloisField;
//!
//! // GF(7)
//! let gf7 = GaloisField::prime(7).unwrap();
//! let two = gf7.element(2).unwrap();
//! let three = gf7.element(3).unwrap();
//! assert_eq!(two.mul(&three).unwrap().value(), 6);
//! assert_eq!(two.inv().unwrap().value(), 4);
//!
//! // GF(2^4) from 1 + x + x^4
//! let gf16 = GaloisField::new(2, 4, &[1, 1, 0, 0, 1]).unwrap();
//! let a = gf16.element(4).unwrap();
//! let b = gf16.element(14).unwrap();
//! assert_eq!(&a * &b, gf16.element(3).unwrap());
//! ```
//!
//! ## Conventions
//!
//! - The characteristic p is assumed to be prime; it is not tested.
//! - In an extension field, `e.pow(0)` is the zero element, not one.
//! - Elements remember the table snapshot they came from; after a basis
//!   change, old and new elements never compare equal.
//!
//! ## Features
//!
//! - `serde`: Enable serialization of [`FieldParams`], [`gf::Basis`] and [`gf::IrreduciblePoly`]
//! - `parallel`: Compute basis transforms in parallel using rayon

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod builder;
pub mod error;
pub mod gf;

#[cfg(feature = "parallel")]
mod parallel;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::builder::{FieldParams, GaloisFieldBuilder};
    pub use crate::error::{Error, Result};
    pub use crate::gf::{
        inverse, trace, Basis, Coefficient, FieldElement, GaloisField, IrreduciblePoly,
    };
}

// Re-export commonly used items at crate root
pub use builder::{FieldParams, GaloisFieldBuilder};
pub use error::{Error, Result};
pub use gf::{inverse, trace, Coefficient, FieldElement, GaloisField};
