//! The ordered element table of a Galois field.
//!
//! Entry 0 of the table is the zero element. For an extension field GF(p^n)
//! entry i (1 <= i < p^n) is the i-th power of the root of the defining
//! polynomial, so entry p^n - 1 is the multiplicative identity and the table
//! position of a nonzero element is its discrete logarithm. Multiplication,
//! powers and inverses then reduce to index arithmetic.
//!
//! Each entry is stored as a row of `n` coordinates in an `ndarray::Array2`.
//! Coordinates are mapped back to table positions through a dense lookup
//! keyed by the base-p encoding of the coordinate vector.

use ndarray::{Array2, ArrayView1};

use super::basis::Basis;
use super::poly::IrreduciblePoly;
use crate::error::{Error, Result};

const VACANT: usize = usize::MAX;

/// Coordinate table and discrete-log lookup for one field snapshot.
///
/// Tables are immutable once built. A basis change builds a new table.
#[derive(Debug, Clone)]
pub struct ElementTable {
    /// The prime characteristic.
    p: u32,
    /// The extension degree.
    n: u32,
    /// coords[[i, j]] = j-th coordinate of table entry i
    coords: Array2<u32>,
    /// positions[encode(v)] = table index of coordinate vector v
    positions: Vec<usize>,
    /// Basis the coordinates are expressed in.
    basis: Basis,
}

impl ElementTable {
    /// Build the table of the prime field GF(p): entry i is the integer i.
    ///
    /// # Errors
    ///
    /// Returns an error if `p < 2`.
    pub fn prime(p: u32) -> Result<Self> {
        if p < 2 {
            return Err(Error::invalid_config(format!(
                "characteristic must be at least 2, got {p}"
            )));
        }

        let dim = p as usize;
        let coords = Array2::from_shape_fn((dim, 1), |(i, _)| i as u32);
        let positions = (0..dim).collect();

        Ok(Self {
            p,
            n: 1,
            coords,
            positions,
            basis: Basis::Polynomial,
        })
    }

    /// Build the power table of GF(p^n) in the polynomial basis {1, α, ..., α^(n-1)}.
    ///
    /// Each power α^k is obtained from α^(k-1) by shifting its coordinates up
    /// one power of α and folding the overflow back in with the reduction of
    /// α^n given by the polynomial.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotPrimitive`] if some power of α repeats an earlier
    /// entry, and [`Error::InvalidConfig`] if p^n does not fit in memory indices.
    pub fn polynomial(poly: &IrreduciblePoly) -> Result<Self> {
        let p = poly.characteristic();
        let n = poly.degree();
        let dim = field_order(p, n)?;
        let width = n as usize;

        let mut coords = Array2::<u32>::zeros((dim, width));
        let mut positions = vec![VACANT; dim];
        positions[0] = 0;

        // α^1 .. α^(n-1) are the basis vectors themselves
        for i in 1..width {
            coords[[i, i]] = 1;
        }

        // α^n from the defining relation
        let reduction = poly.reduction();
        for (j, &c) in reduction.iter().enumerate() {
            coords[[width, j]] = c;
        }

        // α^(n+1) .. α^(p^n - 1)
        for k in width + 1..dim {
            let lead = coords[[k - 1, width - 1]];
            for j in (1..width).rev() {
                let shifted = coords[[k - 1, j - 1]];
                coords[[k, j]] = add_mod(shifted, mul_mod(lead, reduction[j], p), p);
            }
            coords[[k, 0]] = mul_mod(lead, reduction[0], p);
        }

        for k in 1..dim {
            let key = encode(&coords.row(k), p);
            if positions[key] != VACANT {
                tracing::debug!(
                    p,
                    n,
                    index = k,
                    repeats = positions[key],
                    "polynomial is not primitive"
                );
                return Err(Error::NotPrimitive { p, n, index: k });
            }
            positions[key] = k;
        }

        tracing::debug!(p, n, dim, "built element table in polynomial basis");

        Ok(Self {
            p,
            n,
            coords,
            positions,
            basis: Basis::Polynomial,
        })
    }

    /// Build a table from re-expanded coordinates, keeping the index of every entry.
    ///
    /// `coords` must hold one row per table entry.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidBasis`] if the rows are not pairwise distinct,
    /// which happens when the new basis is not linearly independent.
    pub(crate) fn from_rows(p: u32, coords: Array2<u32>, basis: Basis) -> Result<Self> {
        let (dim, width) = coords.dim();
        let mut positions = vec![VACANT; dim];

        for k in 0..dim {
            let key = encode(&coords.row(k), p);
            if positions[key] != VACANT {
                return Err(Error::invalid_basis(format!(
                    "entries {} and {k} have identical coordinates",
                    positions[key]
                )));
            }
            positions[key] = k;
        }

        Ok(Self {
            p,
            n: width as u32,
            coords,
            positions,
            basis,
        })
    }

    /// Get the field characteristic.
    #[must_use]
    pub fn characteristic(&self) -> u32 {
        self.p
    }

    /// Get the extension degree.
    #[must_use]
    pub fn degree(&self) -> u32 {
        self.n
    }

    /// Number of entries, p^n.
    #[must_use]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// A table always holds at least the zero element and the identity.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Basis the coordinates are expressed in.
    #[must_use]
    pub fn basis(&self) -> Basis {
        self.basis
    }

    /// Coordinates of entry `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.len()`.
    #[must_use]
    pub fn row(&self, index: usize) -> ArrayView1<'_, u32> {
        self.coords.row(index)
    }

    /// Table position of a coordinate vector with every entry in `[0, p)`.
    ///
    /// Every such vector is in the table because the entries are a bijection
    /// onto GF(p)^n.
    #[must_use]
    pub fn position(&self, coords: &[u32]) -> usize {
        self.positions[encode(coords, self.p)]
    }

    /// Index of the product of entries `a` and `b`.
    #[must_use]
    pub fn mul_index(&self, a: usize, b: usize) -> usize {
        if a == 0 || b == 0 {
            return 0;
        }
        self.wrap(a as u128 + b as u128)
    }

    /// Index of entry `a` raised to the power `k`.
    ///
    /// Zero to any power, and any entry to the power 0, give index 0.
    #[must_use]
    pub fn pow_index(&self, a: usize, k: u64) -> usize {
        if a == 0 || k == 0 {
            return 0;
        }
        self.wrap(a as u128 * u128::from(k))
    }

    /// Index of the multiplicative inverse of entry `a`, `None` for zero.
    #[must_use]
    pub fn inv_index(&self, a: usize) -> Option<usize> {
        let group_order = self.len() - 1;
        match a {
            0 => None,
            a if a == group_order => Some(group_order),
            a => Some(group_order - a),
        }
    }

    /// Fold a positive exponent sum into [1, p^n - 1]; index 0 stays reserved for zero.
    fn wrap(&self, index: u128) -> usize {
        let group_order = (self.len() - 1) as u128;
        if index > group_order {
            (((index - 1) % group_order) + 1) as usize
        } else {
            index as usize
        }
    }
}

/// Compute p^n as a table size.
pub(crate) fn field_order(p: u32, n: u32) -> Result<usize> {
    (p as usize)
        .checked_pow(n)
        .filter(|&dim| dim.checked_mul(n as usize).is_some())
        .ok_or_else(|| Error::invalid_config(format!("GF({p}^{n}) is too large to tabulate")))
}

/// Modular exponentiation: base^exp mod modulus
pub(crate) fn mod_pow(base: u32, mut exp: u64, modulus: u32) -> u32 {
    let modulus = u64::from(modulus);
    let mut result = 1u64 % modulus;
    let mut base = u64::from(base) % modulus;
    while exp > 0 {
        if exp & 1 == 1 {
            result = result * base % modulus;
        }
        exp >>= 1;
        base = base * base % modulus;
    }
    result as u32
}

pub(crate) fn add_mod(a: u32, b: u32, p: u32) -> u32 {
    ((u64::from(a) + u64::from(b)) % u64::from(p)) as u32
}

pub(crate) fn mul_mod(a: u32, b: u32, p: u32) -> u32 {
    ((u64::from(a) * u64::from(b)) % u64::from(p)) as u32
}

/// Encode a coordinate vector as c_0 + c_1*p + ... + c_{n-1}*p^{n-1}.
fn encode<'a, I>(coords: I, p: u32) -> usize
where
    I: IntoIterator<Item = &'a u32>,
    I::IntoIter: DoubleEndedIterator,
{
    coords
        .into_iter()
        .rev()
        .fold(0usize, |acc, &c| acc * p as usize + c as usize)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gf16() -> ElementTable {
        let poly = IrreduciblePoly::new(2, 4, &[1, 1, 0, 0, 1]).unwrap();
        ElementTable::polynomial(&poly).unwrap()
    }

    #[test]
    fn test_prime_table() {
        let gf7 = ElementTable::prime(7).unwrap();
        assert_eq!(gf7.len(), 7);
        assert_eq!(gf7.degree(), 1);
        for i in 0..7 {
            assert_eq!(gf7.row(i).to_vec(), vec![i as u32]);
            assert_eq!(gf7.position(&[i as u32]), i);
        }
        assert!(ElementTable::prime(1).is_err());
    }

    #[test]
    fn test_gf16_power_table() {
        let table = gf16();
        assert_eq!(table.len(), 16);
        assert_eq!(table.row(0).to_vec(), vec![0, 0, 0, 0]);
        assert_eq!(table.row(1).to_vec(), vec![0, 1, 0, 0]);
        assert_eq!(table.row(4).to_vec(), vec![1, 1, 0, 0]);
        assert_eq!(table.row(7).to_vec(), vec![1, 1, 0, 1]);
        assert_eq!(table.row(14).to_vec(), vec![1, 0, 0, 1]);
        // α^15 = 1
        assert_eq!(table.row(15).to_vec(), vec![1, 0, 0, 0]);
    }

    #[test]
    fn test_gf27_power_table() {
        let poly = IrreduciblePoly::new(3, 3, &[1, 2, 0, 1]).unwrap();
        let table = ElementTable::polynomial(&poly).unwrap();
        assert_eq!(table.row(3).to_vec(), vec![2, 1, 0]);
        assert_eq!(table.row(5).to_vec(), vec![2, 1, 2]);
        assert_eq!(table.row(11).to_vec(), vec![2, 1, 1]);
        assert_eq!(table.row(26).to_vec(), vec![1, 0, 0]);
    }

    #[test]
    fn test_positions_are_a_bijection() {
        let table = gf16();
        for i in 0..table.len() {
            let coords = table.row(i).to_vec();
            assert_eq!(table.position(&coords), i);
        }
    }

    #[test]
    fn test_not_primitive() {
        // 1 + x^4 = (1 + x)^4 over GF(2)
        let poly = IrreduciblePoly::new(2, 4, &[1, 0, 0, 0, 1]).unwrap();
        assert_eq!(
            ElementTable::polynomial(&poly).unwrap_err(),
            Error::NotPrimitive { p: 2, n: 4, index: 5 }
        );

        // 1 + x + x^2 + x^3 + x^4 is irreducible but its root has order 5
        let poly = IrreduciblePoly::new(2, 4, &[1, 1, 1, 1, 1]).unwrap();
        assert!(matches!(
            ElementTable::polynomial(&poly),
            Err(Error::NotPrimitive { index: 6, .. })
        ));

        // x + x^4 has the root 0
        let poly = IrreduciblePoly::new(2, 4, &[0, 1, 0, 0, 1]).unwrap();
        assert!(ElementTable::polynomial(&poly).is_err());
    }

    #[test]
    fn test_index_arithmetic() {
        let table = gf16();
        assert_eq!(table.mul_index(2, 3), 5);
        assert_eq!(table.mul_index(4, 14), 3);
        assert_eq!(table.mul_index(0, 7), 0);
        assert_eq!(table.mul_index(15, 7), 7);
        assert_eq!(table.mul_index(15, 15), 15);

        assert_eq!(table.pow_index(2, 3), 6);
        assert_eq!(table.pow_index(9, 2), 3);
        assert_eq!(table.pow_index(5, 3), 15);
        assert_eq!(table.pow_index(0, 3), 0);
        assert_eq!(table.pow_index(7, 0), 0);
        // 2^64 - 1 is a multiple of 15
        assert_eq!(table.pow_index(1, u64::MAX), 15);

        assert_eq!(table.inv_index(0), None);
        assert_eq!(table.inv_index(15), Some(15));
        assert_eq!(table.inv_index(4), Some(11));
    }

    #[test]
    fn test_from_rows_rejects_duplicates() {
        let coords = Array2::from_shape_vec((4, 2), vec![0, 0, 1, 0, 1, 0, 1, 1]).unwrap();
        assert!(matches!(
            ElementTable::from_rows(2, coords, Basis::SelfDual),
            Err(Error::InvalidBasis { .. })
        ));
    }

    #[test]
    fn test_mod_pow() {
        assert_eq!(mod_pow(2, 3, 7), 1);
        assert_eq!(mod_pow(3, 6, 7), 1);
        assert_eq!(mod_pow(0, 0, 7), 1);
        assert_eq!(mod_pow(0, 5, 7), 0);
    }

    #[test]
    fn test_field_order() {
        assert_eq!(field_order(2, 4).unwrap(), 16);
        assert_eq!(field_order(3, 3).unwrap(), 27);
        assert!(field_order(u32::MAX, 64).is_err());
    }
}
