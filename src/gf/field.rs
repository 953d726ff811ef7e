//! The Galois field type: construction, element access and evaluation.

use std::fmt;
use std::iter::FusedIterator;
use std::ops::Range;
use std::sync::Arc;

use super::basis::Basis;
use super::element::{field_name, FieldElement};
use super::poly::IrreduciblePoly;
use super::tables::ElementTable;
use crate::error::{Error, Result};

/// A Galois field GF(p) or GF(p^n) together with its ordered element table.
///
/// The table lists the zero element first, followed (for extension fields)
/// by the successive powers α, α², ..., α^(p^n - 1) = 1 of a root α of the
/// defining polynomial. Element `i` is therefore α^i, and products, powers
/// and inverses become index arithmetic.
///
/// The characteristic is assumed to be prime and is not tested.
///
/// # Example
///
/// ```
/// use galois_tables::GaloisField;
///
/// // GF(2^4) from the primitive polynomial 1 + x + x^4
/// let gf16 = GaloisField::new(2, 4, &[1, 1, 0, 0, 1]).unwrap();
/// assert_eq!(gf16.order(), 16);
///
/// let a = gf16.element(4).unwrap();
/// let b = gf16.element(14).unwrap();
/// assert_eq!(a.mul(&b).unwrap(), gf16.element(3).unwrap());
/// ```
#[derive(Clone)]
pub struct GaloisField {
    poly: Option<IrreduciblePoly>,
    table: Arc<ElementTable>,
}

impl GaloisField {
    /// Create the field GF(p^n).
    ///
    /// For `n > 1`, `coefs` holds the `n + 1` coefficients
    /// `[c_0, ..., c_n]` of a monic primitive polynomial
    /// c_0 + c_1*x + ... + x^n over GF(p). For `n == 1` it is ignored.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfig`] if `p < 2`, `n < 1`, the coefficient
    /// count is not `n + 1`, or the polynomial is not monic.
    /// Returns [`Error::NotPrimitive`] if the polynomial's root does not
    /// generate all p^n - 1 nonzero elements.
    ///
    /// # Example
    ///
    /// ```
    /// use galois_tables::{Error, GaloisField};
    ///
    /// let gf27 = GaloisField::new(3, 3, &[1, 2, 0, 1]).unwrap();
    /// assert_eq!(gf27.order(), 27);
    ///
    /// // (1 + x)^4 is not primitive
    /// assert!(matches!(
    ///     GaloisField::new(2, 4, &[1, 0, 0, 0, 1]),
    ///     Err(Error::NotPrimitive { .. })
    /// ));
    /// ```
    pub fn new(p: u32, n: u32, coefs: &[u32]) -> Result<Self> {
        match n {
            0 => Err(Error::invalid_config(
                "extension degree must be at least 1, got 0",
            )),
            1 => {
                if !coefs.is_empty() {
                    tracing::debug!(p, "ignoring polynomial coefficients for a prime field");
                }
                Self::prime(p)
            }
            _ => {
                let poly = IrreduciblePoly::new(p, n, coefs)?;
                Self::from_poly(poly)
            }
        }
    }

    /// Create the prime field GF(p).
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfig`] if `p < 2`.
    pub fn prime(p: u32) -> Result<Self> {
        let table = ElementTable::prime(p)?;
        tracing::debug!(p, "built prime field table");
        Ok(Self {
            poly: None,
            table: Arc::new(table),
        })
    }

    /// Create GF(p^n) from an already validated defining polynomial.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotPrimitive`] if the polynomial is not primitive.
    pub fn from_poly(poly: IrreduciblePoly) -> Result<Self> {
        let table = ElementTable::polynomial(&poly)?;
        Ok(Self {
            poly: Some(poly),
            table: Arc::new(table),
        })
    }

    /// Replace the element table, keeping the defining polynomial.
    pub(crate) fn with_table(&self, table: ElementTable) -> Self {
        Self {
            poly: self.poly.clone(),
            table: Arc::new(table),
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

    /// The number of elements, p^n.
    #[must_use]
    pub fn order(&self) -> usize {
        self.table.len()
    }

    /// The defining polynomial, `None` for prime fields.
    #[must_use]
    pub fn polynomial(&self) -> Option<&IrreduciblePoly> {
        self.poly.as_ref()
    }

    /// The basis element coordinates are currently expressed in.
    #[must_use]
    pub fn basis(&self) -> Basis {
        self.table.basis()
    }

    /// Check if the coordinates are expressed in a self-dual basis.
    #[must_use]
    pub fn is_self_dual(&self) -> bool {
        self.basis() == Basis::SelfDual
    }

    /// Element at table position `index`.
    ///
    /// For prime fields this is the integer `index`; for extension fields it
    /// is α^index (with the zero element at 0 and 1 at p^n - 1).
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfBounds`] if `index >= p^n`.
    pub fn element(&self, index: usize) -> Result<FieldElement> {
        self.get(index).ok_or(Error::IndexOutOfBounds {
            index,
            size: self.order(),
        })
    }

    /// Element at table position `index`, or `None` if out of range.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<FieldElement> {
        (index < self.order()).then(|| FieldElement::at(&self.table, index))
    }

    /// The additive identity.
    #[must_use]
    pub fn zero(&self) -> FieldElement {
        FieldElement::at(&self.table, 0)
    }

    /// The multiplicative identity.
    #[must_use]
    pub fn one(&self) -> FieldElement {
        let index = if self.degree() == 1 { 1 } else { self.order() - 1 };
        FieldElement::at(&self.table, index)
    }

    /// The root α of the defining polynomial, `None` for prime fields.
    #[must_use]
    pub fn primitive_element(&self) -> Option<FieldElement> {
        (self.degree() > 1).then(|| FieldElement::at(&self.table, 1))
    }

    /// Iterate over all elements in table order.
    #[must_use]
    pub fn elements(&self) -> Elements<'_> {
        Elements {
            table: &self.table,
            range: 0..self.order(),
        }
    }

    /// Iterate over all nonzero elements in table order.
    #[must_use]
    pub fn units(&self) -> Elements<'_> {
        Elements {
            table: &self.table,
            range: 1..self.order(),
        }
    }

    /// Evaluate c_0 + c_1*x + ... + c_k*x^k at `argument`.
    ///
    /// Each coefficient is an integer or a field element. The constant term
    /// multiplies the identity; the remaining terms multiply powers of
    /// `argument`. An empty coefficient list evaluates to zero.
    ///
    /// # Errors
    ///
    /// Returns [`Error::FieldMismatch`] if `argument` or an element
    /// coefficient belongs to a different field.
    ///
    /// # Example
    ///
    /// ```
    /// use galois_tables::{Coefficient, GaloisField};
    ///
    /// let gf7 = GaloisField::prime(7).unwrap();
    /// let x = gf7.element(3).unwrap();
    ///
    /// // 2 + 3x + x^2 at x = 3 gives 2 + 9 + 9 = 20 = 6 (mod 7)
    /// let coefs = [Coefficient::Scalar(2), Coefficient::Scalar(3), Coefficient::Scalar(1)];
    /// assert_eq!(gf7.evaluate(&coefs, &x).unwrap().value(), 6);
    /// ```
    pub fn evaluate(&self, coefs: &[Coefficient], argument: &FieldElement) -> Result<FieldElement> {
        let one = self.one();
        one.check_same_field(argument)?;

        let mut result = self.zero();
        for (power, coef) in coefs.iter().enumerate() {
            let base = if power == 0 {
                one.clone()
            } else {
                argument.pow(power as u64)
            };
            let term = match coef {
                Coefficient::Scalar(c) => base.scale(*c),
                Coefficient::Element(e) => e.mul(&base)?,
            };
            result = result.add(&term)?;
        }
        Ok(result)
    }
}

impl fmt::Debug for GaloisField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut dbg = f.debug_struct("GaloisField");
        dbg.field("p", &self.characteristic())
            .field("n", &self.degree());
        if let Some(poly) = &self.poly {
            dbg.field("polynomial", &poly.to_string());
        }
        dbg.field("basis", &self.basis()).finish()
    }
}

impl fmt::Display for GaloisField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", field_name(self.characteristic(), self.degree()))
    }
}

impl<'a> IntoIterator for &'a GaloisField {
    type Item = FieldElement;
    type IntoIter = Elements<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements()
    }
}

/// Iterator over the elements of a [`GaloisField`] in table order.
#[derive(Debug, Clone)]
pub struct Elements<'a> {
    table: &'a Arc<ElementTable>,
    range: Range<usize>,
}

impl Iterator for Elements<'_> {
    type Item = FieldElement;

    fn next(&mut self) -> Option<Self::Item> {
        self.range.next().map(|i| FieldElement::at(self.table, i))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.range.size_hint()
    }
}

impl DoubleEndedIterator for Elements<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.range.next_back().map(|i| FieldElement::at(self.table, i))
    }
}

impl ExactSizeIterator for Elements<'_> {}

impl FusedIterator for Elements<'_> {}

/// A coefficient of a polynomial passed to [`GaloisField::evaluate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Coefficient {
    /// An integer, i.e. a base-field multiple of the identity.
    Scalar(u32),
    /// A field element.
    Element(FieldElement),
}

impl From<u32> for Coefficient {
    fn from(value: u32) -> Self {
        Self::Scalar(value)
    }
}

impl From<FieldElement> for Coefficient {
    fn from(value: FieldElement) -> Self {
        Self::Element(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prime_field_creation() {
        let gf7 = GaloisField::prime(7).unwrap();
        assert_eq!(gf7.order(), 7);
        assert_eq!(gf7.characteristic(), 7);
        assert_eq!(gf7.degree(), 1);
        assert!(gf7.polynomial().is_none());
        assert!(gf7.primitive_element().is_none());
        assert_eq!(gf7.one().value(), 1);
        assert_eq!(gf7.zero().value(), 0);
    }

    #[test]
    fn test_extension_field_creation() {
        let gf16 = GaloisField::new(2, 4, &[1, 1, 0, 0, 1]).unwrap();
        assert_eq!(gf16.order(), 16);
        assert_eq!(gf16.characteristic(), 2);
        assert_eq!(gf16.degree(), 4);
        assert_eq!(gf16.basis(), Basis::Polynomial);
        assert!(!gf16.is_self_dual());
        assert_eq!(gf16.one().coordinates(), &[1, 0, 0, 0]);
        assert_eq!(gf16.zero().coordinates(), &[0, 0, 0, 0]);
        assert_eq!(gf16.primitive_element().unwrap().coordinates(), &[0, 1, 0, 0]);
    }

    #[test]
    fn test_invalid_config() {
        assert!(matches!(
            GaloisField::new(2, 0, &[]),
            Err(Error::InvalidConfig { .. })
        ));
        assert!(matches!(
            GaloisField::new(2, 4, &[]),
            Err(Error::InvalidConfig { .. })
        ));
        assert!(matches!(
            GaloisField::new(2, 4, &[1, 1, 0, 1]),
            Err(Error::InvalidConfig { .. })
        ));
        assert!(GaloisField::prime(0).is_err());
        assert!(GaloisField::prime(1).is_err());
        // Coefficients are ignored for prime fields
        assert_eq!(GaloisField::new(5, 1, &[1, 2]).unwrap().order(), 5);
    }

    #[test]
    fn test_element_access() {
        let gf16 = GaloisField::new(2, 4, &[1, 1, 0, 0, 1]).unwrap();
        assert!(gf16.element(15).is_ok());
        assert_eq!(
            gf16.element(16).unwrap_err(),
            Error::IndexOutOfBounds { index: 16, size: 16 }
        );
        assert!(gf16.get(16).is_none());
        assert_eq!(gf16.element(15).unwrap(), gf16.one());
    }

    #[test]
    fn test_iteration() {
        let gf5 = GaloisField::prime(5).unwrap();
        let values: Vec<u32> = gf5.elements().map(|e| e.value()).collect();
        assert_eq!(values, vec![0, 1, 2, 3, 4]);

        let units: Vec<u32> = gf5.units().map(|e| e.value()).collect();
        assert_eq!(units, vec![1, 2, 3, 4]);

        // Restartable
        assert_eq!((&gf5).into_iter().count(), 5);
        assert_eq!(gf5.elements().len(), 5);
        assert_eq!(gf5.elements().next_back().unwrap().value(), 4);
    }

    #[test]
    fn test_evaluate() {
        let gf16 = GaloisField::new(2, 4, &[1, 1, 0, 0, 1]).unwrap();
        let e = |i| gf16.element(i).unwrap();

        // α^3 + α^5 * x + x^2 at x = α^2
        let coefs = [
            Coefficient::from(e(3)),
            Coefficient::from(e(5)),
            Coefficient::from(1),
        ];
        let expected = e(3).add(&e(7)).unwrap().add(&e(4)).unwrap();
        assert_eq!(gf16.evaluate(&coefs, &e(2)).unwrap(), expected);

        // Scalar constant term is a multiple of the identity
        assert_eq!(gf16.evaluate(&[Coefficient::Scalar(1)], &e(9)).unwrap(), gf16.one());
        assert_eq!(gf16.evaluate(&[Coefficient::Scalar(2)], &e(9)).unwrap(), gf16.zero());
        assert_eq!(gf16.evaluate(&[], &e(9)).unwrap(), gf16.zero());

        let gf27 = GaloisField::new(3, 3, &[1, 2, 0, 1]).unwrap();
        assert!(gf16.evaluate(&[Coefficient::Scalar(1)], &gf27.one()).is_err());
    }

    #[test]
    fn test_display() {
        let gf7 = GaloisField::prime(7).unwrap();
        assert_eq!(gf7.to_string(), "GF(7)");

        let gf27 = GaloisField::new(3, 3, &[1, 2, 0, 1]).unwrap();
        assert_eq!(gf27.to_string(), "GF(3^3)");
        assert!(format!("{gf27:?}").contains("1 + 2x + x^3"));
    }
}
