use blstrs::{G1Projective, Scalar};
use sha2::Sha256;

use super::{ByteOrder, Suite};

/// The BLS12-381 G1 group with the SHA-256 hash function used to derive
/// scalars from arbitrary-length byte strings.
#[derive(Debug)]
pub struct Bls12381Sha256;

impl Suite for Bls12381Sha256 {
    type PrimeField = Scalar;
    type Group = G1Projective;
    type Hash = Sha256;

    const BYTE_ORDER: ByteOrder = ByteOrder::LittleEndian;
}
