//! Cipher suites.
use digest::Digest;
use group::{
    ff::{Field, PrimeField},
    Group, GroupEncoding,
};

pub mod bls12_381;
pub mod h3;
mod order;
pub mod p384;

// Re-exports.
pub use self::{bls12_381::Bls12381Sha256, order::*, p384::NistP384Sha3_384};

/// A cipher suite containing a cryptographic group, the prime field of its
/// scalars, and a hash function used to derive scalars from arbitrary-length
/// byte strings.
pub trait Suite {
    /// The type representing an element modulo the order of the group.
    type PrimeField: PrimeField;

    /// The type representing an element of a cryptographic group.
    type Group: Group<Scalar = Self::PrimeField> + GroupEncoding;

    /// The hash function whose output size matches the size of the canonical
    /// encoding of the prime field elements.
    type Hash: Digest;

    /// The byte order of the canonical encoding of the prime field elements.
    const BYTE_ORDER: ByteOrder;

    /// Returns the order of the group.
    fn group_order() -> GroupOrder {
        GroupOrder::of::<Self::PrimeField>(Self::BYTE_ORDER)
    }

    /// Erases secret scalars once they are no longer needed.
    ///
    /// The default overwrites them with zero. Suites whose prime field
    /// implements `Zeroize` use it instead.
    fn wipe(scalars: &mut [Self::PrimeField]) {
        scalars.fill(<Self::PrimeField as Field>::ZERO);
    }
}
