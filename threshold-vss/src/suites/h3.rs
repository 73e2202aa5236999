//! Hashing to scalars via rejection sampling.
use digest::Digest;
use group::ff::PrimeField;
use slog::error;
use zeroize::Zeroize;

use crate::{
    errors::{Error, Result},
    logger::get_logger,
    poly::scalar_from_bytes,
};

use super::{ByteOrder, Suite};

/// Default domain separation tag for hashing to scalars.
pub const H3_DST: &[u8] = b"IBE-H3";

/// The maximum number of candidates tried before sampling fails.
pub const MAX_SAMPLING_ATTEMPTS: u16 = 65534;

/// Hashes the domain separation tag, sigma and the message to a scalar
/// distributed uniformly over the prime field.
///
/// The inputs are hashed once, `buffer = H(dst || sigma || msg)`, after which
/// candidates `H(i || buffer)` are derived for an increasing 16-bit counter
/// `i` (little-endian), starting at one. The excess high bits of every
/// candidate are shifted away and the first candidate that is a canonical
/// encoding of a field element is returned.
pub fn hash_to_scalar<S: Suite>(dst: &[u8], sigma: &[u8], msg: &[u8]) -> Result<S::PrimeField> {
    let mut buffer = S::Hash::new()
        .chain_update(dst)
        .chain_update(sigma)
        .chain_update(msg)
        .finalize()
        .to_vec();

    let scalar = rejection_sample(S::BYTE_ORDER, |i| {
        S::Hash::new()
            .chain_update(i.to_le_bytes())
            .chain_update(&buffer)
            .finalize()
            .to_vec()
    });
    buffer.zeroize();

    scalar
}

/// Returns the first candidate that decodes to an element of the prime field
/// after its excess high bits are shifted away.
fn rejection_sample<F: PrimeField>(
    byte_order: ByteOrder,
    mut candidate: impl FnMut(u16) -> Vec<u8>,
) -> Result<F> {
    let size = F::Repr::default().as_ref().len();
    let excess_bits = (size as u32 * 8).saturating_sub(F::NUM_BITS);

    for i in 1..=MAX_SAMPLING_ATTEMPTS {
        let mut bytes = candidate(i);
        if bytes.len() != size {
            bytes.zeroize();
            return Err(Error::InvalidParameter(
                "digest size does not match scalar encoding",
            ));
        }

        let msb = match byte_order {
            ByteOrder::BigEndian => 0,
            ByteOrder::LittleEndian => size - 1,
        };
        bytes[msb] = bytes[msb].checked_shr(excess_bits).unwrap_or(0);

        let scalar = scalar_from_bytes(&bytes);
        bytes.zeroize();

        if let Some(scalar) = scalar {
            return Ok(scalar);
        }
    }

    let logger = get_logger("vss/suites/h3");
    error!(logger, "Rejection sampling exhausted"; "attempts" => MAX_SAMPLING_ATTEMPTS);

    Err(Error::ExhaustedSampling)
}
