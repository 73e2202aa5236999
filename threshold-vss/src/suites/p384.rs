use p384::{ProjectivePoint, Scalar};
use sha3::Sha3_384;
use zeroize::Zeroize;

use super::{ByteOrder, Suite};

/// The NIST P-384 elliptic curve group with the SHA3-384 hash function used
/// to derive scalars from arbitrary-length byte strings.
#[derive(Debug)]
pub struct NistP384Sha3_384;

impl Suite for NistP384Sha3_384 {
    type PrimeField = Scalar;
    type Group = ProjectivePoint;
    type Hash = Sha3_384;

    const BYTE_ORDER: ByteOrder = ByteOrder::BigEndian;

    fn wipe(scalars: &mut [Scalar]) {
        scalars.iter_mut().for_each(Zeroize::zeroize);
    }
}
