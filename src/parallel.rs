//! Parallel basis transforms using Rayon.
//!
//! Enable with the `parallel` feature flag. Re-expanding a field in a new
//! basis costs n products and traces per element; for large fields the rows
//! are computed in parallel. The resulting table is identical to the
//! sequential one.

use rayon::prelude::*;

use crate::gf::FieldElement;

/// Row-major coordinates [tr(e * b_0), ..., tr(e * b_{n-1})] for every element e.
pub(crate) fn trace_coordinates(elements: &[FieldElement], basis: &[FieldElement]) -> Vec<u32> {
    let rows: Vec<Vec<u32>> = elements
        .par_iter()
        .map(|e| basis.iter().map(|b| e.mul_unchecked(b).trace()).collect())
        .collect();

    rows.into_iter().flatten().collect()
}
