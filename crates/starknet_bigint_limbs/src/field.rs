use std::sync::LazyLock;

use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{Num, One};
use tracing::debug;

use crate::carries::{compute_addition_flags, AdditionFlags};
use crate::errors::{LimbsError, LimbsResult};
use crate::limbs::LimbBasis;

#[cfg(test)]
#[path = "field_test.rs"]
pub mod field_test;

pub const BN254_PRIME_HEX: &str =
    "30644E72E131A029B85045B68181585D97816A916871CA8D3C208C16D87CFD47";

pub static BN254_PRIME: LazyLock<BigInt> = LazyLock::new(|| {
    BigInt::from_str_radix(BN254_PRIME_HEX, 16)
        .unwrap_or_else(|error| panic!("Failed to parse the BN254 prime: {error}."))
});

static BN254_FIELD: LazyLock<PrimeField> = LazyLock::new(PrimeField::bn254);

/// Reduces `value` into `[0, modulus)`, also for negative values.
pub fn reduce(value: &BigInt, modulus: &BigInt) -> BigInt {
    value.mod_floor(modulus)
}

/// A prime modulus together with the limb basis its elements are written in.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PrimeField {
    modulus: BigInt,
    basis: LimbBasis,
}

impl PrimeField {
    pub fn new(modulus: BigInt, basis: LimbBasis) -> LimbsResult<Self> {
        if modulus <= BigInt::one() {
            return Err(LimbsError::InvalidModulus(modulus));
        }
        Ok(Self { modulus, basis })
    }

    /// The BN254 base field, 3 limbs of 86 bits.
    pub fn bn254() -> Self {
        Self { modulus: BN254_PRIME.clone(), basis: LimbBasis::default() }
    }

    pub fn modulus(&self) -> &BigInt {
        &self.modulus
    }

    pub fn basis(&self) -> &LimbBasis {
        &self.basis
    }

    /// The modulus written in the field's basis.
    pub fn modulus_limbs(&self) -> LimbsResult<Vec<BigInt>> {
        self.basis.split(&self.modulus)
    }

    pub fn reduce(&self, value: &BigInt) -> BigInt {
        reduce(value, &self.modulus)
    }

    /// Returns the limbs of `(x + y) mod p`.
    pub fn add(&self, x: &[BigInt], y: &[BigInt]) -> LimbsResult<Vec<BigInt>> {
        let sum = self.basis.evaluate(x) + self.basis.evaluate(y);
        let result = self.basis.split(&self.reduce(&sum))?;
        debug!("{x:?} + {y:?} = {result:?} (mod {}).", self.modulus);
        Ok(result)
    }

    /// Returns the limbs of `(x - y) mod p`. The difference is reduced with floored modulo, so a
    /// negative difference still yields limbs of a value in `[0, p)`.
    pub fn sub(&self, x: &[BigInt], y: &[BigInt]) -> LimbsResult<Vec<BigInt>> {
        let difference = self.basis.evaluate(x) - self.basis.evaluate(y);
        let result = self.basis.split(&self.reduce(&difference))?;
        debug!("{x:?} - {y:?} = {result:?} (mod {}).", self.modulus);
        Ok(result)
    }

    /// Carry and borrow flags of the limb-wise addition `x + y` against this field's modulus.
    pub fn addition_flags(&self, x: &[BigInt], y: &[BigInt]) -> LimbsResult<AdditionFlags> {
        compute_addition_flags(x, y, &self.modulus_limbs()?, self.basis.base())
    }
}

impl Default for PrimeField {
    fn default() -> Self {
        Self::bn254()
    }
}

pub fn add_mod_p(x: &[BigInt], y: &[BigInt]) -> LimbsResult<Vec<BigInt>> {
    BN254_FIELD.add(x, y)
}

pub fn sub_mod_p(x: &[BigInt], y: &[BigInt]) -> LimbsResult<Vec<BigInt>> {
    BN254_FIELD.sub(x, y)
}
