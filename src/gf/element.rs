//! Field elements and their arithmetic.
//!
//! A [`FieldElement`] is an immutable value: its coordinates in the field's
//! current basis, its position in the element table, and a shared handle to
//! that table. The table holds plain coordinate rows, never elements, so the
//! handle cannot form a cycle.
//!
//! Addition, subtraction and scalar multiplication work coordinate-wise and
//! are valid in any basis. Multiplication, powers and inverses of
//! extension-field elements are index arithmetic on the discrete-log table.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use super::basis::Basis;
use super::tables::{add_mod, mod_pow, mul_mod, ElementTable};
use crate::error::{Error, Result};

/// An element of a Galois field GF(p^n).
///
/// Two elements are equal when they have the same coordinates in the same
/// table snapshot. Elements captured before a basis change are never equal
/// to elements created after it.
///
/// # Example
///
/// ```
/// use galois_tables::GaloisField;
///
/// let gf7 = GaloisField::prime(7).unwrap();
/// let a = gf7.element(2).unwrap();
/// let b = gf7.element(3).unwrap();
///
/// assert_eq!(a.add(&b).unwrap().value(), 5);
/// assert_eq!(a.mul(&b).unwrap().value(), 6);
/// assert_eq!(a.inv().unwrap().value(), 4);
/// ```
#[derive(Clone)]
pub struct FieldElement {
    coords: Vec<u32>,
    index: usize,
    table: Arc<ElementTable>,
}

impl FieldElement {
    /// Element at position `index` of `table`.
    pub(crate) fn at(table: &Arc<ElementTable>, index: usize) -> Self {
        Self {
            coords: table.row(index).to_vec(),
            index,
            table: Arc::clone(table),
        }
    }

    /// Element with the given coordinates (each already reduced mod p).
    fn from_coords(table: &Arc<ElementTable>, coords: Vec<u32>) -> Self {
        Self {
            index: table.position(&coords),
            coords,
            table: Arc::clone(table),
        }
    }

    /// The characteristic p.
    #[must_use]
    pub fn characteristic(&self) -> u32 {
        self.table.characteristic()
    }

    /// The extension degree n.
    #[must_use]
    pub fn degree(&self) -> u32 {
        self.table.degree()
    }

    /// The field order p^n.
    #[must_use]
    pub fn order(&self) -> usize {
        self.table.len()
    }

    /// Coordinates in the field's basis at the time this element was created.
    #[must_use]
    pub fn coordinates(&self) -> &[u32] {
        &self.coords
    }

    /// Position in the element table.
    ///
    /// For extension fields this is the discrete logarithm with respect to
    /// the primitive element (with 1 at position p^n - 1); for prime fields
    /// it is the integer value.
    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    /// First coordinate. For prime fields this is the integer value.
    #[must_use]
    pub fn value(&self) -> u32 {
        self.coords[0]
    }

    /// Check if this element is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.index == 0
    }

    /// Check if this element is the multiplicative identity.
    #[must_use]
    pub fn is_one(&self) -> bool {
        if self.degree() == 1 {
            self.coords[0] == 1
        } else {
            self.index == self.order() - 1
        }
    }

    fn is_prime_field(&self) -> bool {
        self.table.degree() == 1
    }

    fn field_name(&self) -> String {
        field_name(self.characteristic(), self.degree())
    }

    fn describe(&self) -> String {
        match self.table.basis() {
            Basis::Polynomial => self.field_name(),
            Basis::SelfDual => format!("{} in a self-dual basis", self.field_name()),
        }
    }

    /// Fail unless `rhs` belongs to a field with the same (p, n) and the same kind of basis.
    ///
    /// Two snapshots in different self-dual bases, or built from different
    /// polynomials, are not told apart; mixing them in `add` or `sub` gives
    /// an element with no meaning.
    pub(crate) fn check_same_field(&self, rhs: &Self) -> Result<()> {
        if self.characteristic() != rhs.characteristic()
            || self.degree() != rhs.degree()
            || self.table.basis() != rhs.table.basis()
        {
            return Err(Error::FieldMismatch {
                left: self.describe(),
                right: rhs.describe(),
            });
        }
        Ok(())
    }

    /// Field addition.
    ///
    /// # Errors
    ///
    /// Returns [`Error::FieldMismatch`] if the operands come from different
    /// fields or from tables in different kinds of basis.
    pub fn add(&self, rhs: &Self) -> Result<Self> {
        self.check_same_field(rhs)?;
        Ok(self.add_unchecked(rhs))
    }

    pub(crate) fn add_unchecked(&self, rhs: &Self) -> Self {
        let p = self.characteristic();
        let coords = self
            .coords
            .iter()
            .zip(&rhs.coords)
            .map(|(&a, &b)| add_mod(a, b, p))
            .collect();
        Self::from_coords(&self.table, coords)
    }

    /// Field subtraction.
    ///
    /// # Errors
    ///
    /// Returns [`Error::FieldMismatch`] if the operands come from different fields.
    pub fn sub(&self, rhs: &Self) -> Result<Self> {
        self.check_same_field(rhs)?;
        let p = self.characteristic();
        let coords = self
            .coords
            .iter()
            .zip(&rhs.coords)
            .map(|(&a, &b)| add_mod(a, p - b, p))
            .collect();
        Ok(Self::from_coords(&self.table, coords))
    }

    /// Additive inverse (-a).
    #[must_use]
    pub fn neg(&self) -> Self {
        let p = self.characteristic();
        let coords = self.coords.iter().map(|&a| (p - a) % p).collect();
        Self::from_coords(&self.table, coords)
    }

    /// Multiply by an integer, i.e. by the base-field element `scalar mod p`.
    #[must_use]
    pub fn scale(&self, scalar: u32) -> Self {
        let p = self.characteristic();
        let coords = self.coords.iter().map(|&a| mul_mod(a, scalar, p)).collect();
        Self::from_coords(&self.table, coords)
    }

    /// Field multiplication.
    ///
    /// For extension fields the discrete logarithms add, wrapping within
    /// [1, p^n - 1]; the result is taken from this element's table.
    ///
    /// # Errors
    ///
    /// Returns [`Error::FieldMismatch`] if the operands come from different fields.
    pub fn mul(&self, rhs: &Self) -> Result<Self> {
        self.check_same_field(rhs)?;
        Ok(self.mul_unchecked(rhs))
    }

    pub(crate) fn mul_unchecked(&self, rhs: &Self) -> Self {
        if self.is_prime_field() {
            let value = mul_mod(self.coords[0], rhs.coords[0], self.characteristic());
            Self::from_coords(&self.table, vec![value])
        } else {
            Self::at(&self.table, self.table.mul_index(self.index, rhs.index))
        }
    }

    /// Field division, `self * rhs^(-1)`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::FieldMismatch`] if the operands come from different
    /// fields and [`Error::DivisionByZero`] if `rhs` is zero.
    pub fn div(&self, rhs: &Self) -> Result<Self> {
        self.check_same_field(rhs)?;
        if rhs.is_zero() {
            return Err(Error::DivisionByZero {
                order: self.order(),
            });
        }
        Ok(self.mul_unchecked(&rhs.inv()?))
    }

    /// Raise to the power `exp`.
    ///
    /// In an extension field, zero and `exp == 0` both give the zero element.
    /// This deliberately differs from the usual convention e^0 = 1; prime
    /// fields keep e^0 = 1.
    #[must_use]
    pub fn pow(&self, exp: u64) -> Self {
        if self.is_prime_field() {
            let value = mod_pow(self.coords[0], exp, self.characteristic());
            Self::from_coords(&self.table, vec![value])
        } else {
            Self::at(&self.table, self.table.pow_index(self.index, exp))
        }
    }

    /// Multiplicative inverse.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InverseOfZero`] if called on zero.
    pub fn inv(&self) -> Result<Self> {
        let zero_err = || Error::InverseOfZero {
            order: self.order(),
        };

        if self.is_prime_field() {
            let p = self.characteristic();
            let value = self.coords[0];
            if value == 0 {
                return Err(zero_err());
            }
            // Exhaustive search; prime fields are small enough to tabulate anyway
            let inverse = (1..p)
                .find(|&i| mul_mod(value, i, p) == 1)
                .ok_or_else(zero_err)?;
            Ok(Self::from_coords(&self.table, vec![inverse]))
        } else {
            let index = self.table.inv_index(self.index).ok_or_else(zero_err)?;
            Ok(Self::at(&self.table, index))
        }
    }

    /// Field trace e + e^p + e^(p^2) + ... + e^(p^(n-1)), as a base-field integer.
    ///
    /// The sum t lies in the base field, so its coordinates are t times those
    /// of the identity. In the polynomial basis this is the first coordinate;
    /// in a self-dual basis over an odd prime the identity may have several
    /// nonzero coordinates, so t is read off the first of them.
    #[must_use]
    pub fn trace(&self) -> u32 {
        if self.is_prime_field() {
            return self.coords[0];
        }

        let p = self.characteristic();
        let mut frobenius = 1u64;
        let mut sum = self.clone();
        for _ in 1..self.degree() {
            frobenius *= u64::from(p);
            sum = sum.add_unchecked(&self.pow(frobenius));
        }

        let one = self.table.row(self.table.len() - 1);
        match one.iter().position(|&c| c != 0) {
            // p is prime, so c^(p-2) is the inverse of c
            Some(j) => mul_mod(sum.coords[j], mod_pow(one[j], u64::from(p - 2), p), p),
            None => sum.coords[0],
        }
    }
}

pub(crate) fn field_name(p: u32, n: u32) -> String {
    if n == 1 {
        format!("GF({p})")
    } else {
        format!("GF({p}^{n})")
    }
}

impl PartialEq for FieldElement {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.table, &other.table) && self.coords == other.coords
    }
}

impl Eq for FieldElement {}

impl Hash for FieldElement {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.coords.hash(state);
        Arc::as_ptr(&self.table).hash(state);
    }
}

impl fmt::Debug for FieldElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}[{}]", self.field_name(), self)
    }
}

impl fmt::Display for FieldElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_prime_field() {
            write!(f, "{}", self.coords[0])
        } else {
            write!(f, "{:?}", self.coords)
        }
    }
}

// Operators panic where the fallible methods return errors.
macro_rules! impl_binary_op {
    ($trait:ident, $method:ident) => {
        impl std::ops::$trait<&FieldElement> for &FieldElement {
            type Output = FieldElement;

            fn $method(self, rhs: &FieldElement) -> FieldElement {
                match FieldElement::$method(self, rhs) {
                    Ok(value) => value,
                    Err(err) => panic!("{err}"),
                }
            }
        }

        impl std::ops::$trait for FieldElement {
            type Output = FieldElement;

            fn $method(self, rhs: FieldElement) -> FieldElement {
                std::ops::$trait::$method(&self, &rhs)
            }
        }
    };
}

impl_binary_op!(Add, add);
impl_binary_op!(Sub, sub);
impl_binary_op!(Mul, mul);
impl_binary_op!(Div, div);

impl std::ops::Mul<u32> for &FieldElement {
    type Output = FieldElement;

    fn mul(self, scalar: u32) -> FieldElement {
        self.scale(scalar)
    }
}

impl std::ops::Mul<u32> for FieldElement {
    type Output = FieldElement;

    fn mul(self, scalar: u32) -> FieldElement {
        self.scale(scalar)
    }
}

impl std::ops::Neg for &FieldElement {
    type Output = FieldElement;

    fn neg(self) -> FieldElement {
        FieldElement::neg(self)
    }
}

impl std::ops::Neg for FieldElement {
    type Output = FieldElement;

    fn neg(self) -> FieldElement {
        FieldElement::neg(&self)
    }
}

#[cfg(test)]
mod tests {
    use crate::error::Error;
    use crate::gf::GaloisField;

    fn gf16() -> GaloisField {
        GaloisField::new(2, 4, &[1, 1, 0, 0, 1]).unwrap()
    }

    fn gf27() -> GaloisField {
        GaloisField::new(3, 3, &[1, 2, 0, 1]).unwrap()
    }

    #[test]
    fn test_prime_arithmetic() {
        let gf7 = GaloisField::prime(7).unwrap();
        let a = gf7.element(2).unwrap();
        let b = gf7.element(3).unwrap();

        assert_eq!(a.add(&b).unwrap().value(), 5);
        assert_eq!(a.sub(&b).unwrap().value(), 6);
        assert_eq!(a.mul(&b).unwrap().value(), 6);
        assert_eq!(a.div(&b).unwrap().value(), 3);
        assert_eq!(a.inv().unwrap().value(), 4);
        assert_eq!(a.pow(3).value(), 1);
        assert_eq!(a.pow(0).value(), 1);
        assert_eq!(a.neg().value(), 5);
        assert_eq!(a.scale(4).value(), 1);
        assert_eq!(a.trace(), 2);
    }

    #[test]
    fn test_prime_index_tracks_value() {
        let gf5 = GaloisField::prime(5).unwrap();
        let a = gf5.element(3).unwrap();
        let b = gf5.element(4).unwrap();
        let product = a.mul(&b).unwrap();
        assert_eq!(product.value(), 2);
        assert_eq!(product.index(), 2);
        assert_eq!(product, gf5.element(2).unwrap());
    }

    #[test]
    fn test_extension_multiplication_wraps() {
        let gf16 = gf16();
        let e = |i| gf16.element(i).unwrap();

        assert_eq!(e(2).mul(&e(3)).unwrap(), e(5));
        assert_eq!(e(4).mul(&e(14)).unwrap(), e(3));
        assert_eq!(e(5).mul(&e(0)).unwrap(), e(0));
        assert_eq!(e(15).mul(&e(15)).unwrap(), e(15));
    }

    #[test]
    fn test_extension_power() {
        let gf16 = gf16();
        let e = |i| gf16.element(i).unwrap();

        assert_eq!(e(2).pow(3), e(6));
        assert_eq!(e(9).pow(2), e(3));
        assert_eq!(e(0).pow(3), e(0));
        assert_eq!(e(7).pow(15), e(15));
        // Exponent zero yields zero in extension fields
        assert_eq!(e(7).pow(0), e(0));
    }

    #[test]
    fn test_extension_inverse() {
        let gf27 = gf27();
        let e = |i| gf27.element(i).unwrap();

        assert_eq!(e(16).inv().unwrap(), e(10));
        assert_eq!(e(26).inv().unwrap(), e(26));
        assert_eq!(e(0).inv().unwrap_err(), Error::InverseOfZero { order: 27 });
    }

    #[test]
    fn test_division_by_zero() {
        let gf27 = gf27();
        let a = gf27.element(5).unwrap();
        assert_eq!(
            a.div(&gf27.zero()).unwrap_err(),
            Error::DivisionByZero { order: 27 }
        );

        let gf7 = GaloisField::prime(7).unwrap();
        assert!(gf7.zero().div(&gf7.one()).unwrap().is_zero());
        assert!(gf7.one().div(&gf7.zero()).is_err());
    }

    #[test]
    fn test_field_mismatch() {
        let gf16 = gf16();
        let gf27 = gf27();
        let err = gf16.one().add(&gf27.one()).unwrap_err();
        assert_eq!(
            err,
            Error::FieldMismatch {
                left: "GF(2^4)".into(),
                right: "GF(3^3)".into()
            }
        );
        assert!(gf16.one().mul(&gf27.one()).is_err());
        assert!(gf16.one().sub(&gf27.one()).is_err());
        assert!(gf16.one().div(&gf27.one()).is_err());
    }

    #[test]
    fn test_basis_mismatch() {
        let gf16 = gf16();
        let sdb = gf16.with_self_dual_basis(&[3, 7, 12, 13]).unwrap();
        assert_eq!(
            gf16.one().add(&sdb.one()).unwrap_err(),
            Error::FieldMismatch {
                left: "GF(2^4)".into(),
                right: "GF(2^4) in a self-dual basis".into()
            }
        );
        assert!(sdb.one().sub(&gf16.one()).is_err());
        assert!(gf16.evaluate(&[], &sdb.one()).is_err());
    }

    #[test]
    fn test_snapshots_are_distinct() {
        let first = gf16();
        let second = gf16();
        assert_ne!(first.element(3).unwrap(), second.element(3).unwrap());
        assert_eq!(
            first.element(3).unwrap().coordinates(),
            second.element(3).unwrap().coordinates()
        );
        // Arithmetic across snapshots of the same field is allowed
        assert_eq!(
            first.element(2).unwrap().mul(&second.element(3).unwrap()).unwrap(),
            first.element(5).unwrap()
        );
    }

    #[test]
    fn test_trace() {
        let gf27 = gf27();
        assert_eq!(gf27.element(0).unwrap().trace(), 0);
        assert_eq!(gf27.element(11).unwrap().trace(), 2);
        assert_eq!(gf27.one().trace(), 0); // 1 + 1 + 1 = 0 in GF(3)

        let gf16 = gf16();
        assert_eq!(gf16.element(3).unwrap().trace(), 1);
        assert_eq!(gf16.element(1).unwrap().trace(), 0);
    }

    #[test]
    fn test_operators() {
        let gf27 = gf27();
        let e = |i| gf27.element(i).unwrap();

        assert_eq!(&e(2) + &e(3), e(11));
        assert_eq!(&e(2) - &e(3), e(18));
        assert_eq!(&e(2) * &e(3), e(5));
        assert_eq!(&e(2) / &e(3), e(25));
        assert_eq!(e(4) * e(24), e(2));
        assert_eq!(-(-e(7)), e(7));
        assert_eq!(&e(7) * 3, e(0));
        assert_eq!(&e(7) * 1, e(7));
    }

    #[test]
    #[should_panic(expected = "division by zero")]
    fn test_operator_division_by_zero_panics() {
        let gf7 = GaloisField::prime(7).unwrap();
        let _ = gf7.one() / gf7.zero();
    }

    #[test]
    fn test_display() {
        let gf27 = gf27();
        assert_eq!(gf27.element(11).unwrap().to_string(), "[2, 1, 1]");
        assert_eq!(format!("{:?}", gf27.one()), "GF(3^3)[[1, 0, 0]]");

        let gf7 = GaloisField::prime(7).unwrap();
        assert_eq!(gf7.element(5).unwrap().to_string(), "5");
    }
}
