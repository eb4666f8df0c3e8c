//! Carry and borrow flags for the limb-wise addition of two field elements.
//!
//! Adding `a + b` limb by limb and, when the sum reaches the modulus, subtracting `p` limb by limb,
//! leaves each intermediate limb off by a multiple of the base. The flags computed here are the
//! per-limb corrections (1 for a carry, -1 for a borrow) a verifier needs to check the result
//! without reconstructing the full integers.

use num_bigint::BigInt;
use num_traits::Signed;
use serde::Serialize;
use tracing::debug;

use crate::errors::{LimbsError, LimbsResult};
use crate::limbs::evaluate;

#[cfg(test)]
#[path = "carries_test.rs"]
pub mod carries_test;

pub const MAX_N_LIMBS: usize = 255;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct AdditionFlags {
    /// Whether `a + b >= p`.
    pub needs_reduction: bool,
    /// One flag per limb except the most significant one.
    pub flags: Vec<i8>,
}

fn carry_chain(sum_limbs: &[BigInt], base: &BigInt) -> Vec<i8> {
    let mut carries: Vec<i8> = Vec::with_capacity(sum_limbs.len());
    for limb in sum_limbs {
        let incoming = carries.last().copied().unwrap_or(0);
        carries.push(if limb + BigInt::from(incoming) >= *base { 1 } else { 0 });
    }
    carries
}

fn borrow_carry_chain(reduced_limbs: &[BigInt], base: &BigInt) -> Vec<i8> {
    let mut flags: Vec<i8> = Vec::with_capacity(reduced_limbs.len());
    for limb in reduced_limbs {
        let incoming = flags.last().copied().unwrap_or(0);
        let limb = limb + BigInt::from(incoming);
        flags.push(if limb.is_negative() {
            -1
        } else if limb >= *base {
            1
        } else {
            0
        });
    }
    flags
}

/// Computes the flags of `a + b` where `a`, `b` and `modulus_limbs` are limb sequences of the same
/// length in the given base.
pub fn compute_addition_flags(
    a: &[BigInt],
    b: &[BigInt],
    modulus_limbs: &[BigInt],
    base: &BigInt,
) -> LimbsResult<AdditionFlags> {
    let n_limbs = a.len();
    if n_limbs == 0 || n_limbs > MAX_N_LIMBS {
        return Err(LimbsError::InvalidLimbCount { n_limbs, max: MAX_N_LIMBS });
    }
    for other in [b, modulus_limbs] {
        if other.len() != n_limbs {
            return Err(LimbsError::LimbCountMismatch { left: n_limbs, right: other.len() });
        }
    }

    let sum_limbs: Vec<BigInt> = a.iter().zip(b).map(|(a_limb, b_limb)| a_limb + b_limb).collect();
    let needs_reduction = evaluate(&sum_limbs, base) >= evaluate(modulus_limbs, base);

    let mut flags = if needs_reduction {
        let reduced_limbs: Vec<BigInt> = sum_limbs
            .iter()
            .zip(modulus_limbs)
            .map(|(sum_limb, modulus_limb)| sum_limb - modulus_limb)
            .collect();
        borrow_carry_chain(&reduced_limbs, base)
    } else {
        carry_chain(&sum_limbs, base)
    };
    flags.truncate(n_limbs - 1);

    debug!("Addition flags: needs_reduction={needs_reduction}, flags={flags:?}.");
    Ok(AdditionFlags { needs_reduction, flags })
}
