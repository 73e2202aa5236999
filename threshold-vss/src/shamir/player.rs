use std::iter::zip;

use group::ff::PrimeField;
use slog::{debug, Logger};

use crate::{
    errors::{Error, Result},
    logger::get_logger,
    poly::lagrange,
};

use super::Share;

/// A constructor of the shared secret.
pub struct Player {
    /// The number of shares required to reconstruct the secret.
    threshold: u32,
    logger: Logger,
}

impl Player {
    /// Creates a new player.
    pub fn new(threshold: u32) -> Self {
        Player {
            threshold,
            logger: get_logger("vss/shamir/player"),
        }
    }

    /// Returns the number of shares required to reconstruct the secret.
    pub fn threshold(&self) -> u32 {
        self.threshold
    }

    /// Reconstructs the secret from exactly `threshold` shares with
    /// distinct non-zero indices.
    pub fn reconstruct_secret<F: PrimeField>(&self, shares: &[Share<F>]) -> Result<F> {
        let required = self.threshold as usize;
        if required == 0 {
            return Err(Error::InvalidParameter("zero threshold"));
        }
        if shares.len() < required {
            return Err(Error::InsufficientShares {
                required,
                provided: shares.len(),
            });
        }
        if shares.len() > required {
            return Err(Error::InvalidParameter("too many shares"));
        }
        if shares.iter().any(|share| share.index == 0) {
            return Err(Error::InvalidParameter("zero share index"));
        }

        let xs: Vec<F> = shares.iter().map(Share::x).collect();
        let cs = lagrange::coefficients(&xs)?;
        let secret = zip(cs, shares).map(|(c, share)| share.value * c).sum();

        debug!(self.logger, "Secret reconstructed"; "shares" => shares.len());

        Ok(secret)
    }
}
