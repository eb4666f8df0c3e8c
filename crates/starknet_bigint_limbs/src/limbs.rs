//! Fixed-degree positional encoding of big integers.
//!
//! A value `v` is represented by `degree + 1` limbs `d0, .., d_degree` such that
//! `v = d0 + d1 * BASE + d2 * BASE**2 + ...`. Limb 0 is the least significant. Limbs are not
//! normalized: the most significant limb absorbs whatever does not fit below it, so it may exceed
//! the base.

use std::iter::successors;
use std::sync::LazyLock;

use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{One, Signed, Zero};
use tracing::trace;

use crate::errors::{LimbsError, LimbsResult};

#[cfg(test)]
#[path = "limbs_test.rs"]
pub mod limbs_test;

pub const DEGREE: usize = 2;
pub const BASE_BITS: u32 = 86;

pub static BASE: LazyLock<BigInt> = LazyLock::new(|| BigInt::one() << BASE_BITS);

/// Returns `sum(limbs[i] * base**i)`.
pub fn evaluate(limbs: &[BigInt], base: &BigInt) -> BigInt {
    limbs.iter().rev().fold(BigInt::zero(), |acc, limb| acc * base + limb)
}

/// Splits a non-negative `value` into `degree + 1` limbs, least significant first.
///
/// The limbs are produced from the most significant position downward by dividing by
/// `base**n`, so `evaluate(&split(v, d, b)?, b) == v` for every `v >= 0`.
pub fn split(value: &BigInt, degree: usize, base: &BigInt) -> LimbsResult<Vec<BigInt>> {
    if value.is_negative() {
        return Err(LimbsError::NegativeValue(value.clone()));
    }
    if !base.is_positive() {
        return Err(LimbsError::InvalidBase(base.clone()));
    }

    // powers[n] = base**n.
    let powers: Vec<BigInt> =
        successors(Some(BigInt::one()), |power| Some(power * base)).take(degree + 1).collect();

    let mut limbs = Vec::with_capacity(degree + 1);
    let mut remainder = value.clone();
    for power in powers.iter().skip(1).rev() {
        let (quotient, rest) = remainder.div_rem(power);
        limbs.push(quotient);
        remainder = rest;
    }
    limbs.push(remainder);
    limbs.reverse();

    trace!("Split {value} into {} limbs: {limbs:?}.", limbs.len());
    Ok(limbs)
}

/// A degree and a base: the shape of a limb sequence.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LimbBasis {
    degree: usize,
    base: BigInt,
}

impl LimbBasis {
    pub fn new(degree: usize, base: BigInt) -> LimbsResult<Self> {
        if base < BigInt::from(2) {
            return Err(LimbsError::InvalidBase(base));
        }
        Ok(Self { degree, base })
    }

    /// A basis with base `2**base_bits`.
    pub fn from_bits(degree: usize, base_bits: u32) -> LimbsResult<Self> {
        Self::new(degree, BigInt::one() << base_bits)
    }

    pub fn degree(&self) -> usize {
        self.degree
    }

    pub fn n_limbs(&self) -> usize {
        self.degree + 1
    }

    pub fn base(&self) -> &BigInt {
        &self.base
    }

    pub fn split(&self, value: &BigInt) -> LimbsResult<Vec<BigInt>> {
        split(value, self.degree, &self.base)
    }

    pub fn evaluate(&self, limbs: &[BigInt]) -> BigInt {
        evaluate(limbs, &self.base)
    }
}

impl Default for LimbBasis {
    fn default() -> Self {
        Self { degree: DEGREE, base: BASE.clone() }
    }
}
