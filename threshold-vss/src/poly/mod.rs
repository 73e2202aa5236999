//! This package provides tools for working with polynomials over prime
//! fields.
//!
//! Features include:
//!
//! - Univariate polynomials with random coefficients
//! - Evaluation of points on polynomials
//! - Lagrange coefficients for interpolation at zero

pub mod lagrange;
mod scalar;
mod univariate;

// Re-exports.
pub use self::{scalar::*, univariate::*};
