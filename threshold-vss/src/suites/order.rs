use group::ff::PrimeField;
use num_bigint::BigUint;
use rand_core::{CryptoRng, RngCore};
use zeroize::Zeroize;

use crate::{
    errors::{Error, Result},
    poly::{scalar_from_bytes, scalar_to_bytes},
};

/// Number of additional random bytes drawn when sampling a scalar, so that
/// the bias of the modular reduction stays below 2^-128.
const WIDE_SAMPLE_PADDING: usize = 16;

/// Byte order of the canonical encoding of prime field elements.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ByteOrder {
    /// The most significant byte comes first.
    BigEndian,
    /// The least significant byte comes first.
    LittleEndian,
}

/// The prime order of a cryptographic group, i.e. the modulus of the prime
/// field of its scalars.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GroupOrder {
    /// The order as an arbitrary-precision integer.
    value: BigUint,
    /// The byte order of the scalar encoding.
    byte_order: ByteOrder,
}

impl GroupOrder {
    /// Creates a new group order.
    pub fn new(value: BigUint, byte_order: ByteOrder) -> Self {
        Self { value, byte_order }
    }

    /// Returns the modulus of the given prime field.
    ///
    /// A modulus that fails to parse yields a zero order, which every
    /// sampling operation rejects.
    pub fn of<F: PrimeField>(byte_order: ByteOrder) -> Self {
        let hex = F::MODULUS.trim_start_matches("0x");
        let value = BigUint::parse_bytes(hex.as_bytes(), 16).unwrap_or_default();

        Self::new(value, byte_order)
    }

    /// Returns the order as an integer.
    pub fn value(&self) -> &BigUint {
        &self.value
    }

    /// Returns the byte order of the scalar encoding.
    pub fn byte_order(&self) -> ByteOrder {
        self.byte_order
    }

    /// Verifies that random non-zero scalars can be sampled below the order
    /// and that every such scalar is an element of the given prime field.
    pub fn validate<F: PrimeField>(&self) -> Result<()> {
        if self.value < BigUint::from(2u32) {
            return Err(Error::InvalidParameter("group order below two"));
        }

        let modulus = Self::of::<F>(self.byte_order);
        if self.value > modulus.value {
            return Err(Error::InvalidParameter("group order exceeds field modulus"));
        }

        Ok(())
    }

    /// Converts an integer below the order to an element of the prime field.
    pub fn to_scalar<F: PrimeField>(&self, n: &BigUint) -> Result<F> {
        if n >= &self.value {
            return Err(Error::InvalidParameter("integer exceeds group order"));
        }

        let size = F::Repr::default().as_ref().len();
        let mut bytes = match self.byte_order {
            ByteOrder::BigEndian => n.to_bytes_be(),
            ByteOrder::LittleEndian => n.to_bytes_le(),
        };
        if bytes.len() > size {
            bytes.zeroize();
            return Err(Error::InvalidParameter("integer exceeds scalar size"));
        }

        let mut repr = vec![0u8; size];
        match self.byte_order {
            ByteOrder::BigEndian => repr[size - bytes.len()..].copy_from_slice(&bytes),
            ByteOrder::LittleEndian => repr[..bytes.len()].copy_from_slice(&bytes),
        }
        bytes.zeroize();

        let scalar = scalar_from_bytes(&repr);
        repr.zeroize();

        scalar.ok_or(Error::InvalidParameter("group order exceeds field modulus"))
    }

    /// Converts an element of the prime field to an integer.
    pub fn to_integer<F: PrimeField>(&self, s: &F) -> BigUint {
        let mut bytes = scalar_to_bytes(s);
        let n = match self.byte_order {
            ByteOrder::BigEndian => BigUint::from_bytes_be(&bytes),
            ByteOrder::LittleEndian => BigUint::from_bytes_le(&bytes),
        };
        bytes.zeroize();
        n
    }

    /// Samples a scalar uniformly from `[1, order - 1]`.
    ///
    /// The scalar is derived from a random byte string wider than the field
    /// encoding, reduced modulo `order - 1`.
    pub fn random_nonzero_scalar<F: PrimeField>(
        &self,
        rng: &mut (impl RngCore + CryptoRng),
    ) -> Result<F> {
        self.validate::<F>()?;

        let size = F::Repr::default().as_ref().len() + WIDE_SAMPLE_PADDING;
        let mut bytes = vec![0u8; size];
        if rng.try_fill_bytes(&mut bytes).is_err() {
            return Err(Error::RandomSource);
        }

        let wide = BigUint::from_bytes_le(&bytes);
        bytes.zeroize();

        let n = wide % (&self.value - 1u32) + 1u32;
        self.to_scalar(&n)
    }
}
