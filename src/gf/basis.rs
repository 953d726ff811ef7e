//! Basis changes for extension fields.
//!
//! Elements are first expressed in the polynomial basis {1, α, ..., α^(n-1)}.
//! A self-dual basis {b_0, ..., b_{n-1}} satisfies tr(b_i * b_j) = δ_ij, so
//! the coordinates of any element e in that basis are simply
//! [tr(e * b_0), ..., tr(e * b_{n-1})].
//!
//! A basis change never edits a table in place: a complete new table is
//! built and swapped in, and elements taken from the old table stay valid
//! but compare unequal to elements of the new one.

use ndarray::Array2;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::element::FieldElement;
use super::field::GaloisField;
use super::tables::ElementTable;
use crate::error::{Error, Result};

/// Upper bound on candidate sets examined by [`GaloisField::compute_self_dual_basis`].
const SEARCH_BUDGET: usize = 100_000;

/// The basis element coordinates are expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Basis {
    /// The polynomial basis {1, α, ..., α^(n-1)}.
    #[default]
    Polynomial,
    /// A basis orthonormal under the trace form.
    SelfDual,
}

impl GaloisField {
    /// Check whether the elements at `indices` form a self-dual basis.
    ///
    /// Requires exactly n indices with tr(e_i * e_i) = 1 for every i and
    /// tr(e_i * e_j) = 0 for every i < j. A candidate of the wrong size is
    /// simply not a basis.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfBounds`] if an index is not in the field.
    ///
    /// # Example
    ///
    /// ```
    /// use galois_tables::GaloisField;
    ///
    /// let gf8 = GaloisField::new(2, 3, &[1, 1, 0, 1]).unwrap();
    /// assert!(gf8.verify_self_dual_basis(&[3, 5, 6]).unwrap());
    /// assert!(!gf8.verify_self_dual_basis(&[1, 2, 3]).unwrap());
    /// assert!(!gf8.verify_self_dual_basis(&[3, 5]).unwrap());
    /// ```
    pub fn verify_self_dual_basis(&self, indices: &[usize]) -> Result<bool> {
        let candidate = self.basis_elements(indices)?;
        if candidate.len() != self.degree() as usize {
            tracing::debug!(
                expected = self.degree(),
                got = candidate.len(),
                "basis candidate has the wrong size"
            );
            return Ok(false);
        }

        for (i, a) in candidate.iter().enumerate() {
            for (j, b) in candidate.iter().enumerate().skip(i) {
                let expected = u32::from(i == j);
                let actual = a.mul_unchecked(b).trace();
                if actual != expected {
                    tracing::debug!(
                        i = indices[i],
                        j = indices[j],
                        trace = actual,
                        "basis candidate is not orthonormal"
                    );
                    return Ok(false);
                }
            }
        }
        Ok(true)
    }

    /// Build a copy of this field with coordinates in the self-dual basis at `indices`.
    ///
    /// The copy is an independent snapshot; this field is unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidBasis`] for prime fields or if the candidate
    /// fails [`verify_self_dual_basis`](Self::verify_self_dual_basis), and
    /// [`Error::IndexOutOfBounds`] if an index is not in the field.
    pub fn with_self_dual_basis(&self, indices: &[usize]) -> Result<GaloisField> {
        if self.degree() == 1 {
            return Err(Error::invalid_basis(format!(
                "prime field {self} has no self-dual basis"
            )));
        }
        if !self.verify_self_dual_basis(indices)? {
            return Err(Error::invalid_basis(format!(
                "elements {indices:?} are not a self-dual basis of {self}"
            )));
        }

        let basis = self.basis_elements(indices)?;
        let elements: Vec<FieldElement> = self.elements().collect();

        #[cfg(feature = "parallel")]
        let flat = crate::parallel::trace_coordinates(&elements, &basis);
        #[cfg(not(feature = "parallel"))]
        let flat = trace_coordinates(&elements, &basis);

        let coords = Array2::from_shape_vec((elements.len(), basis.len()), flat)
            .map_err(|e| Error::invalid_basis(e.to_string()))?;
        let table = ElementTable::from_rows(self.characteristic(), coords, Basis::SelfDual)?;

        tracing::info!(field = %self, ?indices, "changed to self-dual basis");
        Ok(self.with_table(table))
    }

    /// Re-express every element in the self-dual basis at `indices`.
    ///
    /// The element table is replaced as a whole; on error the field is unchanged.
    ///
    /// # Errors
    ///
    /// Same as [`with_self_dual_basis`](Self::with_self_dual_basis).
    ///
    /// # Example
    ///
    /// ```
    /// use galois_tables::GaloisField;
    ///
    /// let mut gf8 = GaloisField::new(2, 3, &[1, 1, 0, 1]).unwrap();
    /// let before = gf8.element(3).unwrap();
    ///
    /// gf8.to_self_dual_basis(&[3, 5, 6]).unwrap();
    /// assert!(gf8.is_self_dual());
    /// assert_eq!(gf8.element(3).unwrap().coordinates(), &[1, 0, 0]);
    /// assert_ne!(gf8.element(3).unwrap(), before);
    /// ```
    pub fn to_self_dual_basis(&mut self, indices: &[usize]) -> Result<()> {
        *self = self.with_self_dual_basis(indices)?;
        Ok(())
    }

    /// Rebuild the table in the polynomial basis from the defining polynomial.
    ///
    /// Does nothing for prime fields or when already in the polynomial basis.
    ///
    /// # Errors
    ///
    /// Returns an error only if the table cannot be rebuilt from the stored
    /// polynomial, which was already accepted once.
    pub fn to_polynomial_basis(&mut self) -> Result<()> {
        if self.basis() == Basis::Polynomial {
            return Ok(());
        }
        if let Some(poly) = self.polynomial() {
            let table = ElementTable::polynomial(poly)?;
            *self = self.with_table(table);
            tracing::info!(field = %self, "changed to polynomial basis");
        }
        Ok(())
    }

    /// Search for a self-dual basis, returning its table indices.
    ///
    /// This is a best-effort helper: it filters the elements with
    /// tr(e * e) = 1 and looks depth-first for n mutually orthogonal ones,
    /// giving up after a fixed number of steps. `None` does not prove that no
    /// self-dual basis exists. Prime fields always give `None`.
    ///
    /// # Example
    ///
    /// ```
    /// use galois_tables::GaloisField;
    ///
    /// let gf16 = GaloisField::new(2, 4, &[1, 1, 0, 0, 1]).unwrap();
    /// let basis = gf16.compute_self_dual_basis().unwrap();
    /// assert!(gf16.verify_self_dual_basis(&basis).unwrap());
    /// ```
    #[must_use]
    pub fn compute_self_dual_basis(&self) -> Option<Vec<usize>> {
        let n = self.degree() as usize;
        if n == 1 {
            return None;
        }

        let candidates: Vec<FieldElement> = self
            .units()
            .filter(|e| e.mul_unchecked(e).trace() == 1)
            .collect();
        tracing::debug!(field = %self, count = candidates.len(), "self-dual basis candidates");

        let mut search = BasisSearch {
            candidates: &candidates,
            target: n,
            chosen: Vec::with_capacity(n),
            budget: SEARCH_BUDGET,
        };
        if search.extend(0) {
            Some(search.chosen.iter().map(|&c| candidates[c].index()).collect())
        } else {
            None
        }
    }

    fn basis_elements(&self, indices: &[usize]) -> Result<Vec<FieldElement>> {
        indices.iter().map(|&i| self.element(i)).collect()
    }
}

/// Depth-first search for `target` mutually orthogonal candidates.
struct BasisSearch<'a> {
    candidates: &'a [FieldElement],
    target: usize,
    chosen: Vec<usize>,
    budget: usize,
}

impl BasisSearch<'_> {
    fn extend(&mut self, start: usize) -> bool {
        if self.chosen.len() == self.target {
            return true;
        }
        for next in start..self.candidates.len() {
            if self.budget == 0 {
                tracing::trace!("self-dual basis search budget exhausted");
                return false;
            }
            self.budget -= 1;

            let e = &self.candidates[next];
            let orthogonal = self
                .chosen
                .iter()
                .all(|&c| self.candidates[c].mul_unchecked(e).trace() == 0);
            if !orthogonal {
                tracing::trace!(index = e.index(), "rejected basis candidate");
                continue;
            }

            self.chosen.push(next);
            if self.extend(next + 1) {
                return true;
            }
            self.chosen.pop();
        }
        false
    }
}

/// Row-major coordinates [tr(e * b_0), ..., tr(e * b_{n-1})] for every element e.
#[cfg_attr(all(feature = "parallel", not(test)), allow(dead_code))]
pub(crate) fn trace_coordinates(elements: &[FieldElement], basis: &[FieldElement]) -> Vec<u32> {
    elements
        .iter()
        .flat_map(|e| basis.iter().map(move |b| e.mul_unchecked(b).trace()))
        .collect()
}
