//! Defining polynomials for extension field construction.
//!
//! An extension field GF(p^n) is built from a monic polynomial of degree n
//! over GF(p). The polynomial is stored as the full coefficient vector
//! `[c_0, c_1, ..., c_n]` for
//! c_0 + c_1*x + ... + c_{n-1}*x^{n-1} + x^n,
//! so the leading coefficient is explicit and must be 1.
//!
//! Only polynomials whose root generates the whole multiplicative group
//! (primitive polynomials) yield a field; that property is checked while the
//! element table is built, not here.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A monic polynomial over GF(p) used to define GF(p^n).
///
/// Deserialization validates the record the same way as [`IrreduciblePoly::new`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "PolyRecord"))]
pub struct IrreduciblePoly {
    p: u32,
    coeffs: Vec<u32>,
}

/// Unvalidated serialized form of [`IrreduciblePoly`].
#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct PolyRecord {
    p: u32,
    coeffs: Vec<u32>,
}

#[cfg(feature = "serde")]
impl TryFrom<PolyRecord> for IrreduciblePoly {
    type Error = Error;

    fn try_from(record: PolyRecord) -> Result<Self> {
        let n = record
            .coeffs
            .len()
            .checked_sub(1)
            .and_then(|n| u32::try_from(n).ok())
            .ok_or_else(|| Error::invalid_config("polynomial has no coefficients"))?;
        Self::new(record.p, n, &record.coeffs)
    }
}

impl IrreduciblePoly {
    /// Create the defining polynomial of GF(p^n).
    ///
    /// Coefficients are reduced modulo `p`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfig`] if:
    /// - `p < 2` or `n < 2`
    /// - `coeffs.len() != n + 1`
    /// - the leading coefficient is not 1 modulo `p`
    ///
    /// # Example
    ///
    /// ```
    /// use galois_tables::gf::IrreduciblePoly;
    ///
    /// // 1 + x + x^4 over GF(2)
    /// let poly = IrreduciblePoly::new(2, 4, &[1, 1, 0, 0, 1]).unwrap();
    /// assert_eq!(poly.degree(), 4);
    /// assert_eq!(poly.to_string(), "1 + x + x^4");
    ///
    /// assert!(IrreduciblePoly::new(2, 4, &[1, 1, 0, 1]).is_err());
    /// ```
    pub fn new(p: u32, n: u32, coeffs: &[u32]) -> Result<Self> {
        if p < 2 {
            return Err(Error::invalid_config(format!(
                "characteristic must be at least 2, got {p}"
            )));
        }
        if n < 2 {
            return Err(Error::invalid_config(format!(
                "a defining polynomial needs degree at least 2, got {n}"
            )));
        }
        if coeffs.len() != n as usize + 1 {
            return Err(Error::invalid_config(format!(
                "GF({p}^{n}) needs {} polynomial coefficients, got {}",
                n + 1,
                coeffs.len()
            )));
        }

        let coeffs: Vec<u32> = coeffs.iter().map(|&c| c % p).collect();
        if coeffs[n as usize] != 1 {
            return Err(Error::invalid_config(format!(
                "polynomial must be monic, leading coefficient is {}",
                coeffs[n as usize]
            )));
        }

        Ok(Self { p, coeffs })
    }

    /// The characteristic p of the base field.
    #[must_use]
    pub fn characteristic(&self) -> u32 {
        self.p
    }

    /// The degree n of the polynomial.
    #[must_use]
    pub fn degree(&self) -> u32 {
        (self.coeffs.len() - 1) as u32
    }

    /// Coefficients `[c_0, ..., c_n]`, lowest power first.
    #[must_use]
    pub fn coefficients(&self) -> &[u32] {
        &self.coeffs
    }

    /// Coordinates of x^n in the polynomial basis {1, x, ..., x^(n-1)}.
    ///
    /// From the defining relation x^n = -(c_0 + c_1*x + ... + c_{n-1}*x^{n-1}).
    #[must_use]
    pub fn reduction(&self) -> Vec<u32> {
        let n = self.coeffs.len() - 1;
        self.coeffs[..n]
            .iter()
            .map(|&c| (self.p - c) % self.p)
            .collect()
    }
}

impl fmt::Display for IrreduciblePoly {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (power, &c) in self.coeffs.iter().enumerate() {
            if c == 0 {
                continue;
            }
            if !first {
                write!(f, " + ")?;
            }
            first = false;

            match (power, c) {
                (0, c) => write!(f, "{c}")?,
                (1, 1) => write!(f, "x")?,
                (1, c) => write!(f, "{c}x")?,
                (k, 1) => write!(f, "x^{k}")?,
                (k, c) => write!(f, "{c}x^{k}")?,
            }
        }
        Ok(())
    }
}
