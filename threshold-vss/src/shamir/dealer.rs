use group::Group;
use rand_core::{CryptoRng, RngCore};

use crate::{
    errors::{Error, Result},
    keys::{MasterPublicKey, MasterSecretKey},
    poly::Polynomial,
    suites::GroupOrder,
    vss::VerificationVector,
};

use super::Share;

/// A holder of the secret-sharing polynomial responsible for generating
/// secret shares and the verification vector.
pub struct Dealer<G>
where
    G: Group,
{
    /// The secret-sharing polynomial where the coefficient of the constant
    /// term represents the shared secret.
    poly: Polynomial<G::Scalar>,

    /// Feldman commitments to the coefficients of the polynomial.
    vv: VerificationVector<G>,
}

impl<G> Dealer<G>
where
    G: Group,
{
    /// Creates a new dealer with a predefined shared secret.
    pub fn new(
        threshold: u32,
        secret: G::Scalar,
        order: &GroupOrder,
        rng: &mut (impl RngCore + CryptoRng),
    ) -> Result<Self> {
        let poly = Polynomial::random(threshold, secret, order, rng)?;
        Ok(poly.into())
    }

    /// Generates a master secret key uniformly from `[1, order - 1]`
    /// together with its master public key.
    pub fn generate_msk_and_mpk(
        order: &GroupOrder,
        rng: &mut (impl RngCore + CryptoRng),
    ) -> Result<(MasterSecretKey<G::Scalar>, MasterPublicKey<G>)> {
        let msk = MasterSecretKey::new(order.random_nonzero_scalar(rng)?);
        let mpk = msk.public_key();
        Ok((msk, mpk))
    }

    /// Returns the number of shares required to reconstruct the secret.
    pub fn threshold(&self) -> u32 {
        self.poly.size() as u32
    }

    /// Returns the verification vector.
    pub fn verification_vector(&self) -> &VerificationVector<G> {
        &self.vv
    }

    /// Generates shares for indices `1..=n`.
    pub fn make_shares(&self, n: u32) -> Vec<Share<G::Scalar>> {
        (1..=n).map(|index| self.share_at(index)).collect()
    }

    /// Generates the share for the given index.
    pub fn make_share(&self, index: u32) -> Result<Share<G::Scalar>> {
        if index == 0 {
            return Err(Error::InvalidParameter("zero share index"));
        }
        Ok(self.share_at(index))
    }

    /// Consumes the dealer and returns the secret-sharing polynomial.
    pub(crate) fn into_polynomial(self) -> Polynomial<G::Scalar> {
        self.poly
    }

    fn share_at(&self, index: u32) -> Share<G::Scalar> {
        let x = G::Scalar::from(index as u64);
        Share::new(index, self.poly.eval(&x))
    }
}

impl<G> From<Polynomial<G::Scalar>> for Dealer<G>
where
    G: Group,
{
    fn from(poly: Polynomial<G::Scalar>) -> Self {
        let vv = VerificationVector::from(&poly);
        Self { poly, vv }
    }
}
