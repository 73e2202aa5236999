use group::ff::PrimeField;

/// Converts an element of a non-binary prime field to its canonical
/// encoding.
pub fn scalar_to_bytes<F: PrimeField>(element: &F) -> Vec<u8> {
    element.to_repr().as_ref().to_vec()
}

/// Converts a canonical encoding to an element of a non-binary prime field.
///
/// Returns `None` if the length of the slice does not match the encoding
/// or if the encoded value is not below the modulus.
pub fn scalar_from_bytes<F: PrimeField>(bytes: &[u8]) -> Option<F> {
    let mut repr: F::Repr = Default::default();
    let slice = repr.as_mut();

    if slice.len() != bytes.len() {
        return None;
    }

    slice.copy_from_slice(bytes);

    F::from_repr(repr).into()
}
