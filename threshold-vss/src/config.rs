//! Secret-sharing configuration.
use crate::{
    errors::{Error, Result},
    suites::h3::H3_DST,
};

/// Message hashed together with fresh randomness when deriving the master
/// secret.
const SECRET_MSG: &[u8] = b"msg";

/// Number of random bytes from which the master secret is derived.
const SIGMA_SIZE: usize = 128;

/// The smallest accepted number of random bytes for the master secret.
pub const MIN_SIGMA_SIZE: usize = 32;

/// Secret-sharing configuration.
///
/// The configuration is fixed when a scheme is constructed and never changes
/// afterwards.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// Domain separation tag of the hash-to-scalar function used to derive
    /// the master secret.
    pub h3_dst: Vec<u8>,
    /// The number of random bytes (sigma) hashed into the master secret.
    pub sigma_size: usize,
    /// The message hashed together with sigma.
    pub secret_msg: Vec<u8>,
}

impl Config {
    /// Verifies that the master secret is derived from enough randomness.
    pub fn validate(&self) -> Result<()> {
        if self.sigma_size < MIN_SIGMA_SIZE {
            return Err(Error::InvalidParameter("sigma too short"));
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            h3_dst: H3_DST.to_vec(),
            sigma_size: SIGMA_SIZE,
            secret_msg: SECRET_MSG.to_vec(),
        }
    }
}
