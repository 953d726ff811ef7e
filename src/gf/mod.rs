//! Galois field (finite field) arithmetic.
//!
//! This module builds the fields GF(p) and GF(p^n) as explicit, ordered
//! element tables and provides their arithmetic.
//!
//! ## Overview
//!
//! - [`GaloisField`]: Field construction, element access, evaluation and basis changes
//! - [`FieldElement`]: Element of a field, with `+ - * /`, powers, inverse and trace
//! - [`ElementTable`]: The discrete-log table shared by the elements of one field snapshot
//! - [`IrreduciblePoly`]: Defining polynomial of an extension field
//! - [`Basis`]: Polynomial or self-dual coordinates
//!
//! ## Example
//!
//! ```
//! use galois_tables::gf::{inverse, trace, GaloisField};
//!
//! // GF(3^3) from the primitive polynomial 1 + 2x + x^3
//! let gf27 = GaloisField::new(3, 3, &[1, 2, 0, 1]).unwrap();
//!
//! let a = gf27.element(2).unwrap();
//! let b = gf27.element(3).unwrap();
//!
//! assert_eq!(a.add(&b).unwrap(), gf27.element(11).unwrap());
//! assert_eq!(a.mul(&b).unwrap(), gf27.element(5).unwrap());
//! assert_eq!(inverse(&gf27.element(16).unwrap()).unwrap(), gf27.element(10).unwrap());
//! assert_eq!(trace(&gf27.element(11).unwrap()), 2);
//! ```

pub(crate) mod basis;
mod element;
mod field;
mod poly;
mod tables;

pub use basis::Basis;
pub use element::FieldElement;
pub use field::{Coefficient, Elements, GaloisField};
pub use poly::IrreduciblePoly;
pub use tables::ElementTable;

use crate::error::Result;

/// Field trace of `e`, as a base-field integer. Same as [`FieldElement::trace`].
#[must_use]
pub fn trace(e: &FieldElement) -> u32 {
    e.trace()
}

/// Multiplicative inverse of `e`. Same as [`FieldElement::inv`].
///
/// # Errors
///
/// Returns [`Error::InverseOfZero`](crate::Error::InverseOfZero) if `e` is zero.
pub fn inverse(e: &FieldElement) -> Result<FieldElement> {
    e.inv()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_axioms_gf27() {
        let gf27 = GaloisField::new(3, 3, &[1, 2, 0, 1]).unwrap();
        let zero = gf27.zero();
        let one = gf27.one();

        for a in gf27.elements() {
            for b in gf27.elements() {
                // Commutativity
                assert_eq!(a.add(&b).unwrap(), b.add(&a).unwrap());
                assert_eq!(a.mul(&b).unwrap(), b.mul(&a).unwrap());
            }

            // Identity
            assert_eq!(a.add(&zero).unwrap(), a);
            assert_eq!(a.mul(&one).unwrap(), a);
            assert_eq!(a.mul(&zero).unwrap(), zero);

            // Additive inverse
            assert_eq!(a.add(&a.neg()).unwrap(), zero);

            // Multiplicative inverse (for non-zero)
            if !a.is_zero() {
                assert_eq!(a.mul(&inverse(&a).unwrap()).unwrap(), one);
            }
        }
    }

    #[test]
    fn test_distributivity_gf16() {
        let gf16 = GaloisField::new(2, 4, &[1, 1, 0, 0, 1]).unwrap();
        let c = gf16.element(6).unwrap();
        for a in gf16.elements() {
            for b in gf16.elements() {
                let lhs = c.mul(&a.add(&b).unwrap()).unwrap();
                let rhs = c.mul(&a).unwrap().add(&c.mul(&b).unwrap()).unwrap();
                assert_eq!(lhs, rhs);
            }
        }
    }

    #[test]
    fn test_trace_is_linear() {
        let gf27 = GaloisField::new(3, 3, &[1, 2, 0, 1]).unwrap();
        for a in gf27.elements() {
            for b in gf27.units() {
                let sum = a.add(&b).unwrap();
                assert_eq!(trace(&sum), (trace(&a) + trace(&b)) % 3);
            }
            assert!(trace(&a) < 3);
        }
    }
}
