//! Lagrange interpolation at zero.
//!
//! Every entry point validates that the x-coordinates are distinct before
//! any inversion takes place, so a repeated coordinate is reported as an
//! error rather than surfacing as a failed field inversion.

use group::ff::PrimeField;

use crate::errors::{Error, Result};

/// Returns Lagrange coefficients for the given set of x-coordinates.
///
/// The i-th Lagrange coefficient is defined as:
/// ```text
/// L_i(0) = \prod_{j=0,j≠i}^n x_j / (x_j - x_i)
/// ```
pub fn coefficients<F: PrimeField>(xs: &[F]) -> Result<Vec<F>> {
    ensure_distinct(xs)?;
    (0..xs.len()).map(|i| basis_at_zero(xs, i)).collect()
}

/// Returns the i-th Lagrange coefficient for the given set of x-coordinates.
pub fn coefficient<F: PrimeField>(xs: &[F], i: usize) -> Result<F> {
    if i >= xs.len() {
        return Err(Error::InvalidParameter("coefficient index out of range"));
    }
    ensure_distinct(xs)?;
    basis_at_zero(xs, i)
}

/// Returns the Lagrange coefficient of the given signer with respect to
/// a set of signer indices.
///
/// The signer must be a member of the set.
pub fn index_coefficient<F: PrimeField>(signer: u32, set: &[u32]) -> Result<F> {
    let i = set
        .iter()
        .position(|&s| s == signer)
        .ok_or(Error::InvalidParameter("signer not in index set"))?;
    let xs: Vec<F> = set.iter().map(|&s| F::from(s as u64)).collect();

    coefficient(&xs, i)
}

/// Returns an error if any two x-coordinates are equal.
fn ensure_distinct<F: PrimeField>(xs: &[F]) -> Result<()> {
    // For a small number of shareholders, a brute-force approach should
    // suffice, and it doesn't require the prime field to be hashable.
    for i in 0..xs.len() {
        for j in (i + 1)..xs.len() {
            if xs[i] == xs[j] {
                return Err(Error::DuplicateShareIndex);
            }
        }
    }
    Ok(())
}

/// Evaluates the i-th Lagrange basis polynomial at zero.
fn basis_at_zero<F: PrimeField>(xs: &[F], i: usize) -> Result<F> {
    let mut nom = F::ONE;
    let mut denom = F::ONE;
    for (j, xj) in xs.iter().enumerate() {
        if j == i {
            continue;
        }
        nom *= xj; // x_j
        denom *= *xj - xs[i]; // (x_j - x_i)
    }
    let denom_inv: Option<F> = denom.invert().into();
    let denom_inv = denom_inv.ok_or(Error::DuplicateShareIndex)?;

    Ok(nom * denom_inv) // L_i(0) = nom / denom
}

#[cfg(test)]
mod tests {
    use std::iter::zip;

    use group::ff::Field;
    use rand::{rngs::StdRng, SeedableRng};

    use crate::{
        errors::Error,
        poly::Polynomial,
        suites::{Bls12381Sha256, Suite},
    };

    use super::{coefficient, coefficients, index_coefficient};

    type PrimeField = blstrs::Scalar;

    fn scalar(value: i64) -> PrimeField {
        scalars(&vec![value])[0]
    }

    fn scalars(values: &[i64]) -> Vec<PrimeField> {
        values
            .iter()
            .map(|&w| match w.is_negative() {
                false => PrimeField::from(w as u64),
                true => -PrimeField::from(-w as u64),
            })
            .collect()
    }

    #[test]
    fn test_coefficients() {
        let cs = coefficients(&scalars(&[1, 2, 3])).unwrap();
        assert_eq!(cs, scalars(&[3, -3, 1]));

        // A single point is its own interpolation.
        let cs = coefficients(&scalars(&[5])).unwrap();
        assert_eq!(cs, scalars(&[1]));

        let cs = coefficients::<PrimeField>(&[]).unwrap();
        assert!(cs.is_empty());
    }

    #[test]
    fn test_coefficients_sum_to_one() {
        // Interpolating the constant polynomial one yields one.
        let xs = scalars(&(1..=50).collect::<Vec<_>>());
        let cs = coefficients(&xs).unwrap();
        let sum: PrimeField = cs.into_iter().sum();
        assert_eq!(sum, PrimeField::ONE);
    }

    #[test]
    fn test_interpolation_at_zero() {
        let mut rng: StdRng = SeedableRng::from_seed([1u8; 32]);
        let order = Bls12381Sha256::group_order();
        let secret = scalar(42);
        let p = Polynomial::random(4, secret, &order, &mut rng).unwrap();

        let xs = scalars(&[9, 2, 7, 4]);
        let cs = coefficients(&xs).unwrap();
        let r: PrimeField = zip(cs, &xs).map(|(c, x)| p.eval(x) * c).sum();
        assert_eq!(r, secret);
    }

    #[test]
    fn test_coefficient() {
        let xs = scalars(&[1, 2, 3]);
        let cs = coefficients(&xs).unwrap();
        for (i, c) in cs.iter().enumerate() {
            assert_eq!(&coefficient(&xs, i).unwrap(), c);
        }

        let res = coefficient(&xs, 3);
        assert_eq!(
            res.unwrap_err(),
            Error::InvalidParameter("coefficient index out of range")
        );
    }

    #[test]
    fn test_index_coefficient() {
        let set = [1, 2, 3];
        let xs = scalars(&[1, 2, 3]);
        let cs = coefficients(&xs).unwrap();

        for (signer, c) in zip(set, cs) {
            let ci: PrimeField = index_coefficient(signer, &set).unwrap();
            assert_eq!(ci, c);
        }

        let res = index_coefficient::<PrimeField>(4, &set);
        assert_eq!(
            res.unwrap_err(),
            Error::InvalidParameter("signer not in index set")
        );
    }

    #[test]
    fn test_duplicates() {
        let xs = scalars(&[1, 2, 2]);
        assert_eq!(coefficients(&xs).unwrap_err(), Error::DuplicateShareIndex);
        assert_eq!(coefficient(&xs, 0).unwrap_err(), Error::DuplicateShareIndex);

        let res = index_coefficient::<PrimeField>(1, &[1, 3, 3]);
        assert_eq!(res.unwrap_err(), Error::DuplicateShareIndex);

        // Equal values are detected even if they were computed differently.
        let xs = vec![scalar(4), scalar(2) + scalar(2)];
        assert_eq!(coefficients(&xs).unwrap_err(), Error::DuplicateShareIndex);
    }
}
