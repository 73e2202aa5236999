use group::ff::PrimeField;
use rand_core::{CryptoRng, RngCore};
use zeroize::Zeroize;

use crate::{
    errors::{Error, Result},
    suites::GroupOrder,
};

/// Univariate polynomial over a non-binary prime field.
///
/// ```text
/// A(x) = \sum_{i=0}^{t-1} a_i x^i
/// ```
///
/// A polynomial created for threshold `t` always holds exactly `t`
/// coefficients, even if the leading ones are zero, so that the number of
/// commitments derived from it equals the threshold.
///
/// The constant zero polynomial is represented by a vector with one zero
/// element, rather than by an empty vector.
#[derive(Clone, PartialEq, Eq)]
pub struct Polynomial<F> {
    pub(crate) a: Vec<F>,
}

impl<F> Polynomial<F>
where
    F: PrimeField,
{
    /// Creates a polynomial with `threshold` coefficients initialized
    /// to zero.
    pub fn zero(threshold: u32) -> Self {
        let size = (threshold as usize).max(1);

        let a = vec![F::ZERO; size];
        Self { a }
    }

    /// Creates a polynomial with `threshold` coefficients whose constant
    /// term is the given secret and whose remaining coefficients are drawn
    /// uniformly from `[1, order - 1]`.
    pub fn random(
        threshold: u32,
        secret: F,
        order: &GroupOrder,
        rng: &mut (impl RngCore + CryptoRng),
    ) -> Result<Self> {
        if threshold == 0 {
            return Err(Error::InvalidParameter("zero threshold"));
        }
        order.validate::<F>()?;

        let mut p = Self::zero(threshold);
        p.a[0] = secret;
        for ai in p.a.iter_mut().skip(1) {
            *ai = order.random_nonzero_scalar(rng)?;
        }

        Ok(p)
    }

    /// Creates a polynomial with the given coefficients.
    pub fn with_coefficients(a: Vec<F>) -> Self {
        if a.is_empty() {
            return Self::zero(1);
        }

        Self { a }
    }

    /// Returns the number of coefficients in the polynomial.
    pub fn size(&self) -> usize {
        self.a.len()
    }

    /// Returns the i-th coefficient of the polynomial.
    pub fn coefficient(&self, i: usize) -> Option<&F> {
        self.a.get(i)
    }

    /// Returns all coefficients, starting with the constant term.
    pub fn coefficients(&self) -> &[F] {
        &self.a
    }

    /// Evaluates the polynomial using Horner's method.
    pub fn eval(&self, x: &F) -> F {
        self.a.iter().rev().fold(F::ZERO, |y, ai| y * x + ai)
    }
}

impl<F> Default for Polynomial<F>
where
    F: PrimeField,
{
    fn default() -> Self {
        Self::zero(1)
    }
}

impl<F> Zeroize for Polynomial<F>
where
    F: PrimeField + Zeroize,
{
    fn zeroize(&mut self) {
        self.a.iter_mut().for_each(Zeroize::zeroize);
    }
}

#[cfg(test)]
mod tests {
    use group::ff::Field;
    use num_bigint::BigUint;
    use rand::{rngs::StdRng, SeedableRng};
    use zeroize::Zeroize;

    use crate::{
        errors::Error,
        suites::{Bls12381Sha256, ByteOrder, GroupOrder, NistP384Sha3_384, Suite},
        testing::FailingRng,
    };

    type PrimeField = blstrs::Scalar;
    type Polynomial = super::Polynomial<PrimeField>;

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
    fn test_zero() {
        let p = Polynomial::zero(0);
        assert_eq!(p.a, scalars(&[0]));

        let p = Polynomial::zero(1);
        assert_eq!(p.a, scalars(&[0]));

        let p = Polynomial::zero(3);
        assert_eq!(p.a, scalars(&[0, 0, 0]));
    }

    #[test]
    fn test_with_coefficients() {
        let p = Polynomial::with_coefficients(vec![]);
        assert_eq!(p.a, scalars(&[0]));

        let p = Polynomial::with_coefficients(scalars(&[1, 2, 3]));
        assert_eq!(p.a, scalars(&[1, 2, 3]));
        assert_eq!(p.coefficients(), &scalars(&[1, 2, 3])[..]);
    }

    #[test]
    fn test_random() {
        let mut rng: StdRng = SeedableRng::from_seed([1u8; 32]);
        let order = Bls12381Sha256::group_order();
        let secret = scalar(100);

        for threshold in 1..=10 {
            let p = Polynomial::random(threshold, secret, &order, &mut rng).unwrap();
            assert_eq!(p.size(), threshold as usize);
            assert_eq!(p.coefficient(0), Some(&secret));
            for ai in &p.a[1..] {
                assert!(!bool::from(ai.is_zero()));
            }
        }

        // Coefficients are distinct with overwhelming probability.
        let p = Polynomial::random(3, secret, &order, &mut rng).unwrap();
        assert_ne!(p.a[1], p.a[2]);

        // Other prime fields work as well.
        let order = NistP384Sha3_384::group_order();
        let p = super::Polynomial::<p384::Scalar>::random(
            3,
            p384::Scalar::from(100u64),
            &order,
            &mut rng,
        )
        .unwrap();
        assert_eq!(p.size(), 3);
    }

    #[test]
    fn test_random_failures() {
        let mut rng: StdRng = SeedableRng::from_seed([1u8; 32]);
        let order = Bls12381Sha256::group_order();
        let secret = scalar(100);

        let res = Polynomial::random(0, secret, &order, &mut rng);
        assert_eq!(
            res.err(),
            Some(Error::InvalidParameter("zero threshold"))
        );

        // Group order is validated even if no coefficient is sampled.
        let zero = GroupOrder::new(BigUint::from(0u32), ByteOrder::LittleEndian);
        let res = Polynomial::random(1, secret, &zero, &mut rng);
        assert_eq!(
            res.err(),
            Some(Error::InvalidParameter("group order below two"))
        );

        let res = Polynomial::random(3, secret, &order, &mut FailingRng);
        assert_eq!(res.err(), Some(Error::RandomSource));

        // A single coefficient needs no randomness.
        let p = Polynomial::random(1, secret, &order, &mut FailingRng).unwrap();
        assert_eq!(p.a, vec![secret]);
    }

    #[test]
    fn test_eval() {
        let f = Polynomial::with_coefficients(scalars(&[1, 2, 3]));

        let r = f.eval(&scalar(0));
        assert_eq!(r, scalar(1 + 2 * 0 + 3 * 0 * 0));

        let r = f.eval(&scalar(1));
        assert_eq!(r, scalar(1 + 2 * 1 + 3 * 1 * 1));

        let r = f.eval(&scalar(2));
        assert_eq!(r, scalar(1 + 2 * 2 + 3 * 2 * 2));

        let r = f.eval(&scalar(-2));
        assert_eq!(r, scalar(1 - 2 * 2 + 3 * 2 * 2));
    }

    #[test]
    fn test_eval_matches_power_sum() {
        let mut rng: StdRng = SeedableRng::from_seed([1u8; 32]);
        let order = Bls12381Sha256::group_order();
        let p = Polynomial::random(5, scalar(7), &order, &mut rng).unwrap();

        for _ in 0..10 {
            let x = PrimeField::random(&mut rng);
            let expected: PrimeField = p
                .a
                .iter()
                .enumerate()
                .map(|(i, ai)| x.pow_vartime([i as u64]) * ai)
                .sum();
            assert_eq!(p.eval(&x), expected);
        }
    }

    #[test]
    fn test_eval_at_zero() {
        let mut rng: StdRng = SeedableRng::from_seed([1u8; 32]);
        let order = Bls12381Sha256::group_order();

        for threshold in 1..=5 {
            let secret = PrimeField::random(&mut rng);
            let p = Polynomial::random(threshold, secret, &order, &mut rng).unwrap();
            assert_eq!(p.eval(&PrimeField::ZERO), secret);
        }
    }

    #[test]
    fn test_zeroize() {
        let order = NistP384Sha3_384::group_order();
        let mut rng: StdRng = SeedableRng::from_seed([1u8; 32]);
        let mut p = super::Polynomial::<p384::Scalar>::random(
            3,
            p384::Scalar::from(100u64),
            &order,
            &mut rng,
        )
        .unwrap();

        p.zeroize();
        assert_eq!(p.a, vec![p384::Scalar::ZERO; 3]);
    }
}
