//! Master keys.
use std::fmt;

use group::{ff::PrimeField, Group, GroupEncoding};
use subtle::ConstantTimeEq;
use zeroize::Zeroize;

use crate::poly::scalar_to_bytes;

/// The master secret key, i.e. the secret shared among shareholders.
#[derive(Clone)]
pub struct MasterSecretKey<F>(pub(crate) F);

impl<F> MasterSecretKey<F>
where
    F: PrimeField,
{
    /// Wraps the given secret.
    pub fn new(secret: F) -> Self {
        Self(secret)
    }

    /// Returns the secret.
    pub fn secret(&self) -> &F {
        &self.0
    }

    /// Derives the master public key `secret * G`.
    pub fn public_key<G>(&self) -> MasterPublicKey<G>
    where
        G: Group<Scalar = F>,
    {
        MasterPublicKey(G::generator() * self.0)
    }
}

impl<F> PartialEq for MasterSecretKey<F>
where
    F: PrimeField,
{
    fn eq(&self, other: &Self) -> bool {
        let mut a = scalar_to_bytes(&self.0);
        let mut b = scalar_to_bytes(&other.0);
        let eq = a.ct_eq(&b).into();
        a.zeroize();
        b.zeroize();
        eq
    }
}

impl<F> Eq for MasterSecretKey<F> where F: PrimeField {}

impl<F> fmt::Debug for MasterSecretKey<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("MasterSecretKey(<redacted>)")
    }
}

impl<F> Zeroize for MasterSecretKey<F>
where
    F: Zeroize,
{
    fn zeroize(&mut self) {
        self.0.zeroize();
    }
}

/// The master public key, i.e. the master secret key multiplied by
/// the group generator.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MasterPublicKey<G>(pub(crate) G);

impl<G> MasterPublicKey<G>
where
    G: Group + GroupEncoding,
{
    /// Returns the group element.
    pub fn point(&self) -> &G {
        &self.0
    }

    /// Returns the canonical encoding of the group element.
    pub fn to_bytes(&self) -> Vec<u8> {
        self.0.to_bytes().as_ref().to_vec()
    }
}
