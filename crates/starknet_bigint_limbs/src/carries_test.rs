use assert_matches::assert_matches;
use num_bigint::BigInt;
use rstest::rstest;

use crate::carries::{compute_addition_flags, AdditionFlags, MAX_N_LIMBS};
use crate::errors::LimbsError;
use crate::field::PrimeField;
use crate::limbs::{evaluate, BASE};
use crate::test_utils::{xa, xb, ya, yb};

fn base_limbs(values: &[(i64, i64)]) -> Vec<BigInt> {
    // Each entry is `multiplier * BASE + offset`.
    values.iter().map(|&(multiplier, offset)| &*BASE * multiplier + offset).collect()
}

#[rstest]
#[case::small(xa(), ya(), false, vec![0, 0])]
#[case::both_large(xb(), yb(), true, vec![1, 1])]
#[case::mixed(xa(), yb(), false, vec![0, 0])]
#[case::wraps(xb(), ya(), true, vec![0, 0])]
fn test_fixture_flags(
    #[case] x: Vec<BigInt>,
    #[case] y: Vec<BigInt>,
    #[case] needs_reduction: bool,
    #[case] flags: Vec<i8>,
) {
    let field = PrimeField::bn254();
    assert_eq!(field.addition_flags(&x, &y).unwrap(), AdditionFlags { needs_reduction, flags });

    let sum = evaluate(&x, &BASE) + evaluate(&y, &BASE);
    assert_eq!(needs_reduction, sum >= *field.modulus());
}

#[rstest]
#[case::single_carry(&[(1, -1), (0, 0), (0, 0)], vec![1, 0])]
#[case::propagated_carry(&[(1, -1), (1, -1), (0, 0)], vec![1, 1])]
fn test_carry_propagation(#[case] a: &[(i64, i64)], #[case] expected: Vec<i8>) {
    let one = base_limbs(&[(0, 1), (0, 0), (0, 0)]);
    let flags = PrimeField::bn254().addition_flags(&base_limbs(a), &one).unwrap();
    assert_eq!(flags, AdditionFlags { needs_reduction: false, flags: expected });
}

#[test]
fn test_single_limb_has_no_flags() {
    let flags = compute_addition_flags(
        &[BigInt::from(5)],
        &[BigInt::from(6)],
        &[BigInt::from(7)],
        &BigInt::from(16),
    )
    .unwrap();
    assert_eq!(flags, AdditionFlags { needs_reduction: true, flags: vec![] });
}

fn ints(values: &[i64]) -> Vec<BigInt> {
    values.iter().copied().map(BigInt::from).collect()
}

#[rstest]
// Reduced limbs are [16, -1]: the carry out of limb 0 covers the borrow of limb 1.
#[case::carry_into_borrow(&[8, 0], &[8, 0], &[0, 1], vec![1])]
// Reduced limbs are [-1, 1].
#[case::borrow(&[1, 1], &[0, 0], &[2, 0], vec![-1])]
// Reduced limbs are [3, 0].
#[case::exact(&[5, 1], &[0, 0], &[2, 1], vec![0])]
fn test_borrow_carry_flags(
    #[case] a: &[i64],
    #[case] b: &[i64],
    #[case] modulus_limbs: &[i64],
    #[case] expected: Vec<i8>,
) {
    let flags =
        compute_addition_flags(&ints(a), &ints(b), &ints(modulus_limbs), &BigInt::from(16))
            .unwrap();
    assert_eq!(flags, AdditionFlags { needs_reduction: true, flags: expected });
}

#[test]
fn test_limb_count_mismatch() {
    let error = PrimeField::bn254().addition_flags(&xa(), &ya()[..2]).unwrap_err();
    assert_matches!(error, LimbsError::LimbCountMismatch { left: 3, right: 2 });
}

#[rstest]
#[case::empty(0)]
#[case::too_many(MAX_N_LIMBS + 1)]
fn test_invalid_limb_count(#[case] n_limbs: usize) {
    let limbs = vec![BigInt::from(1); n_limbs];
    let error = compute_addition_flags(&limbs, &limbs, &limbs, &BASE).unwrap_err();
    assert_matches!(
        error,
        LimbsError::InvalidLimbCount { n_limbs: actual, .. } if actual == n_limbs
    );
}
