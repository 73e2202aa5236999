//! Verifiable secret sharing.

mod vector;

// Re-exports.
pub use self::vector::*;
