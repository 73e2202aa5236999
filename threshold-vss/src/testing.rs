//! Test helpers.
use std::num::NonZeroU32;

use rand_core::{CryptoRng, RngCore};

/// A random source whose entropy is always unavailable.
pub struct FailingRng;

impl RngCore for FailingRng {
    fn next_u32(&mut self) -> u32 {
        0
    }

    fn next_u64(&mut self) -> u64 {
        0
    }

    fn fill_bytes(&mut self, _dest: &mut [u8]) {}

    fn try_fill_bytes(&mut self, _dest: &mut [u8]) -> Result<(), rand_core::Error> {
        let code = NonZeroU32::new(rand_core::Error::CUSTOM_START).unwrap();
        Err(rand_core::Error::from(code))
    }
}

impl CryptoRng for FailingRng {}
