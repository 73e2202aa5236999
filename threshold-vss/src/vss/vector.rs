use group::{ff::Field, Group};

use crate::{keys::MasterPublicKey, poly::Polynomial, shamir::Share};

/// Verification vector for a univariate polynomial.
///
/// The verification vector `V` is computed through scalar multiplication
/// of the coefficients of a univariate polynomial `P(x)` with a group
/// generator `G`.
///
/// Verification vector:
/// ```text
///     V = [a_i * G]
/// ```
///
/// Univariate polynomial:
/// ```text
///     P(x) = \sum_{i=0}^{t-1} a_i x^i
/// ```
///
/// The first element commits to the shared secret and therefore equals
/// the master public key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerificationVector<G>
where
    G: Group,
{
    /// The verification vector elements, where `v[i]` represents the element
    /// `a_i * G`.
    v: Vec<G>,
}

impl<G> VerificationVector<G>
where
    G: Group,
{
    /// Constructs a new verification vector.
    pub fn new(v: Vec<G>) -> Self {
        Self { v }
    }

    /// Returns the number of commitments.
    pub fn len(&self) -> usize {
        self.v.len()
    }

    /// Returns true if the vector holds no commitments.
    pub fn is_empty(&self) -> bool {
        self.v.is_empty()
    }

    /// Returns the commitments, starting with the one to the secret.
    pub fn as_slice(&self) -> &[G] {
        &self.v
    }

    /// Returns the i-th commitment.
    pub fn element(&self, i: usize) -> Option<&G> {
        self.v.get(i)
    }

    /// Returns the master public key, if any commitment exists.
    pub fn master_public_key(&self) -> Option<MasterPublicKey<G>> {
        self.v.first().map(|v0| MasterPublicKey(*v0))
    }

    /// Verifies if the verification vector belongs to the given univariate
    /// polynomial.
    pub fn is_from(&self, p: &Polynomial<G::Scalar>) -> bool {
        if self.v.len() != p.a.len() {
            return false;
        }

        for (ai, vi) in p.a.iter().zip(&self.v) {
            let diff = G::generator() * ai - vi;
            if !Into::<bool>::into(diff.is_identity()) {
                return false;
            }
        }

        true
    }

    /// Verifies that the share lies on the committed polynomial,
    /// i.e. that `value * G == \sum_{i=0}^{t-1} index^i * V_i`.
    ///
    /// Empty verification vectors and shares with a zero index never
    /// verify.
    pub fn verify(&self, share: &Share<G::Scalar>) -> bool {
        let Some((v0, rest)) = self.v.split_first() else {
            return false;
        };
        if share.index == 0 {
            return false;
        }

        let x = share.x();
        let mut sum = *v0;
        for (i, vi) in rest.iter().enumerate() {
            sum += *vi * x.pow_vartime([i as u64 + 1]); // x^i * V_i = a_i x^i * G
        }

        sum == G::generator() * share.value
    }
}

impl<G> From<&Polynomial<G::Scalar>> for VerificationVector<G>
where
    G: Group,
{
    /// Constructs a new verification vector from the given univariate
    /// polynomial.
    fn from(p: &Polynomial<G::Scalar>) -> Self {
        let v = p.a.iter().map(|ai| G::generator() * ai).collect();
        Self::new(v)
    }
}
