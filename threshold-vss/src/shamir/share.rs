use std::fmt;

use group::ff::PrimeField;
use zeroize::Zeroize;

/// A secret share, i.e. the evaluation of the secret-sharing polynomial
/// at a non-zero index.
#[derive(Clone, PartialEq, Eq)]
pub struct Share<F> {
    /// The index of the shareholder.
    pub(crate) index: u32,
    /// The value of the polynomial at the index.
    pub(crate) value: F,
}

impl<F> Share<F>
where
    F: PrimeField,
{
    /// Creates a new share.
    pub fn new(index: u32, value: F) -> Self {
        Self { index, value }
    }

    /// Returns the index of the shareholder.
    pub fn index(&self) -> u32 {
        self.index
    }

    /// Returns the share value.
    pub fn value(&self) -> &F {
        &self.value
    }

    /// Returns the index as an element of the prime field.
    pub fn x(&self) -> F {
        F::from(self.index as u64)
    }
}

impl<F> fmt::Debug for Share<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Share")
            .field("index", &self.index)
            .finish_non_exhaustive()
    }
}

impl<F> Zeroize for Share<F>
where
    F: Zeroize,
{
    fn zeroize(&mut self) {
        self.index.zeroize();
        self.value.zeroize();
    }
}

#[cfg(test)]
mod tests {
    use zeroize::Zeroize;

    use super::Share;

    #[test]
    fn test_accessors() {
        let share = Share::new(3, p384::Scalar::from(7u64));
        assert_eq!(share.index(), 3);
        assert_eq!(share.value(), &p384::Scalar::from(7u64));
        assert_eq!(share.x(), p384::Scalar::from(3u64));
    }

    #[test]
    fn test_debug_hides_value() {
        let share = Share::new(3, blstrs::Scalar::from(7u64));
        assert_eq!(format!("{:?}", share), "Share { index: 3, .. }");
    }

    #[test]
    fn test_zeroize() {
        let mut share = Share::new(3, p384::Scalar::from(7u64));
        share.zeroize();
        assert_eq!(share.index(), 0);
        assert_eq!(share.value(), &p384::Scalar::ZERO);
    }
}
