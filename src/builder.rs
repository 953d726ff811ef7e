//! Builder pattern and configuration record for Galois fields.
//!
//! [`FieldParams`] is the plain description of a field (characteristic,
//! degree, polynomial coefficients) and can be stored or loaded with serde
//! when the `serde` feature is enabled. [`GaloisFieldBuilder`] assembles the
//! same parameters step by step.
//!
//! # Example
//!
//! ```
//! use galois_tables::GaloisFieldBuilder;
//!
//! let gf16 = GaloisFieldBuilder::new()
//!     .characteristic(2)
//!     .degree(4)
//!     .polynomial(vec![1, 1, 0, 0, 1])
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(gf16.order(), 16);
//!
//! // The degree defaults to 1
//! let gf7 = GaloisFieldBuilder::new().characteristic(7).build().unwrap();
//! assert_eq!(gf7.order(), 7);
//! ```

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::gf::GaloisField;

/// Parameters describing a Galois field GF(p^n).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FieldParams {
    /// Characteristic (assumed prime).
    pub p: u32,
    /// Extension degree.
    #[cfg_attr(feature = "serde", serde(default = "default_degree"))]
    pub n: u32,
    /// Coefficients `[c_0, ..., c_n]` of the defining polynomial, empty for prime fields.
    #[cfg_attr(feature = "serde", serde(default))]
    pub coefs: Vec<u32>,
}

#[cfg(feature = "serde")]
fn default_degree() -> u32 {
    1
}

impl FieldParams {
    /// Parameters of the prime field GF(p).
    #[must_use]
    pub fn prime(p: u32) -> Self {
        Self {
            p,
            n: 1,
            coefs: Vec::new(),
        }
    }

    /// Parameters of GF(p^n) defined by the polynomial with coefficients `coefs`.
    #[must_use]
    pub fn extension(p: u32, n: u32, coefs: Vec<u32>) -> Self {
        Self { p, n, coefs }
    }

    /// The field order p^n, or `None` on overflow.
    #[must_use]
    pub fn order(&self) -> Option<usize> {
        (self.p as usize).checked_pow(self.n)
    }

    /// Construct the field.
    ///
    /// # Errors
    ///
    /// See [`GaloisField::new`].
    pub fn build(&self) -> Result<GaloisField> {
        GaloisField::new(self.p, self.n, &self.coefs)
    }
}

/// Builder for constructing Galois fields.
#[derive(Debug, Clone, Default)]
pub struct GaloisFieldBuilder {
    p: Option<u32>,
    n: Option<u32>,
    coefs: Vec<u32>,
}

impl GaloisFieldBuilder {
    /// Create a new builder with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the characteristic p.
    #[must_use]
    pub fn characteristic(mut self, p: u32) -> Self {
        self.p = Some(p);
        self
    }

    /// Set the extension degree n. Default is 1.
    #[must_use]
    pub fn degree(mut self, n: u32) -> Self {
        self.n = Some(n);
        self
    }

    /// Set the coefficients `[c_0, ..., c_n]` of the defining polynomial.
    #[must_use]
    pub fn polynomial(mut self, coefs: Vec<u32>) -> Self {
        self.coefs = coefs;
        self
    }

    /// The parameters collected so far.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfig`] if no characteristic was set.
    pub fn params(&self) -> Result<FieldParams> {
        let p = self
            .p
            .ok_or_else(|| Error::invalid_config("characteristic must be specified"))?;
        Ok(FieldParams {
            p,
            n: self.n.unwrap_or(1),
            coefs: self.coefs.clone(),
        })
    }

    /// Build the field.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfig`] if no characteristic was set, and
    /// otherwise any error of [`GaloisField::new`].
    pub fn build(self) -> Result<GaloisField> {
        self.params()?.build()
    }
}

impl From<FieldParams> for GaloisFieldBuilder {
    fn from(params: FieldParams) -> Self {
        Self {
            p: Some(params.p),
            n: Some(params.n),
            coefs: params.coefs,
        }
    }
}
