//! # Threshold Verifiable Secret Sharing
//!
//! This library splits a master secret into `n` shares such that any `t`
//! of them reconstruct the secret, while Feldman commitments to the secret
//! polynomial let every shareholder verify its share without learning
//! the secret.
//!
//! ## Supported Suites
//!
//! - BLS12-381 G1 with SHA-256 (default)
//! - NIST P-384 with SHA3-384

pub mod config;
pub mod errors;
pub mod keys;
pub mod logger;
pub mod poly;
pub mod scheme;
pub mod shamir;
pub mod suites;
pub mod vss;

#[cfg(test)]
mod testing;

// Re-exports.
pub use self::{
    config::Config,
    errors::{Error, Result},
    keys::{MasterPublicKey, MasterSecretKey},
    scheme::{Bls12381Scheme, DealtShares, Scheme},
    shamir::Share,
    vss::VerificationVector,
};
