//! Threshold verifiable secret-sharing scheme.
use std::{marker::PhantomData, slice};

use group::Group;
use rand_core::{CryptoRng, RngCore};
use slog::{debug, Logger};
use zeroize::Zeroize;

use crate::{
    config::Config,
    errors::{Error, Result},
    keys::{MasterPublicKey, MasterSecretKey},
    logger::get_logger,
    shamir::{Dealer, Player, Share},
    suites::{h3, Bls12381Sha256, GroupOrder, Suite},
    vss::VerificationVector,
};

/// The output of share generation.
pub struct DealtShares<S: Suite> {
    /// Shares for indices `1..=n`.
    pub shares: Vec<Share<S::PrimeField>>,
    /// The master public key.
    pub master_public_key: MasterPublicKey<S::Group>,
    /// Feldman commitments to the coefficients of the secret-sharing
    /// polynomial.
    pub commitments: VerificationVector<S::Group>,
}

/// Threshold verifiable secret-sharing scheme over BLS12-381.
pub type Bls12381Scheme = Scheme<Bls12381Sha256>;

/// Threshold verifiable secret-sharing scheme over the given suite.
///
/// The scheme is immutable once constructed and can be shared between
/// threads.
pub struct Scheme<S: Suite> {
    config: Config,
    group_order: GroupOrder,
    logger: Logger,
    _suite: PhantomData<fn() -> S>,
}

impl<S: Suite> Scheme<S> {
    /// Creates a new scheme with the given configuration.
    pub fn new(config: Config) -> Self {
        Self {
            config,
            group_order: S::group_order(),
            logger: get_logger("vss/scheme"),
            _suite: PhantomData,
        }
    }

    /// Returns the configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Returns the order of the group.
    pub fn group_order(&self) -> &GroupOrder {
        &self.group_order
    }

    /// Generates a random master secret key and its master public key.
    pub fn generate_msk_and_mpk(
        &self,
        rng: &mut (impl RngCore + CryptoRng),
    ) -> Result<(MasterSecretKey<S::PrimeField>, MasterPublicKey<S::Group>)> {
        Dealer::<S::Group>::generate_msk_and_mpk(&self.group_order, rng)
    }

    /// Derives a fresh master secret and splits it into `n` shares, any `t`
    /// of which reconstruct it.
    pub fn generate_shares(
        &self,
        n: u32,
        t: u32,
        rng: &mut (impl RngCore + CryptoRng),
    ) -> Result<DealtShares<S>> {
        Self::validate_threshold(n, t)?;
        self.config.validate()?;

        let mut sigma = vec![0u8; self.config.sigma_size];
        if rng.try_fill_bytes(&mut sigma).is_err() {
            return Err(Error::RandomSource);
        }
        let secret = self.hash_to_scalar(&sigma, &self.config.secret_msg);
        sigma.zeroize();
        let mut secret = secret?;

        let master_public_key = MasterPublicKey(S::Group::generator() * secret);
        let dealer = Dealer::<S::Group>::new(t, secret, &self.group_order, rng);
        S::wipe(slice::from_mut(&mut secret));
        let dealer = dealer?;

        let shares = dealer.make_shares(n);
        let commitments = dealer.verification_vector().clone();
        let mut poly = dealer.into_polynomial();
        S::wipe(&mut poly.a);

        debug!(self.logger, "Shares generated"; "n" => n, "t" => t);

        Ok(DealtShares {
            shares,
            master_public_key,
            commitments,
        })
    }

    /// Verifies the share against the commitments.
    pub fn verify_share(
        &self,
        share: &Share<S::PrimeField>,
        commitments: &VerificationVector<S::Group>,
    ) -> bool {
        commitments.verify(share)
    }

    /// Reconstructs the master secret key from exactly `t` shares.
    pub fn regenerate_secret(
        &self,
        t: u32,
        shares: &[Share<S::PrimeField>],
    ) -> Result<MasterSecretKey<S::PrimeField>> {
        let secret = Player::new(t).reconstruct_secret(shares)?;
        Ok(MasterSecretKey::new(secret))
    }

    /// Hashes sigma and the message to a scalar under the configured domain
    /// separation tag.
    pub fn hash_to_scalar(&self, sigma: &[u8], msg: &[u8]) -> Result<S::PrimeField> {
        h3::hash_to_scalar::<S>(&self.config.h3_dst, sigma, msg)
    }

    fn validate_threshold(n: u32, t: u32) -> Result<()> {
        if t == 0 {
            return Err(Error::InvalidParameter("zero threshold"));
        }
        if t > n {
            return Err(Error::InvalidParameter("threshold exceeds number of shares"));
        }
        Ok(())
    }
}

impl<S: Suite> Default for Scheme<S> {
    fn default() -> Self {
        Self::new(Config::default())
    }
}
