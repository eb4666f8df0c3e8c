use std::fs;
use std::path::Path;

use num_bigint::BigInt;
use num_traits::{Num, One};
use serde::{Deserialize, Serialize};
use tracing::info;
use validator::{Validate, ValidationError};

use crate::errors::LimbsResult;
use crate::field::{PrimeField, BN254_PRIME_HEX};
use crate::limbs::{LimbBasis, BASE_BITS, DEGREE};

#[cfg(test)]
#[path = "config_test.rs"]
pub mod config_test;

/// Parses a decimal or `0x`-prefixed hexadecimal integer, optionally negative.
pub fn parse_integer(value: &str) -> LimbsResult<BigInt> {
    let value = value.trim();
    let (negative, digits) = match value.strip_prefix('-') {
        Some(digits) => (true, digits),
        None => (false, value),
    };
    let magnitude = match digits.strip_prefix("0x").or_else(|| digits.strip_prefix("0X")) {
        Some(hex_digits) => BigInt::from_str_radix(hex_digits, 16)?,
        None => BigInt::from_str_radix(digits, 10)?,
    };
    Ok(if negative { -magnitude } else { magnitude })
}

fn validate_modulus(modulus: &str) -> Result<(), ValidationError> {
    match parse_integer(modulus) {
        Ok(value) if value > BigInt::one() => Ok(()),
        _ => Err(ValidationError::new("modulus must be an integer greater than 1")),
    }
}

/// The limb layout and modulus used to generate vectors. Defaults to the BN254 base field in
/// three 86-bit limbs.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Validate)]
#[serde(default)]
pub struct LimbsConfig {
    /// Number of limbs minus one.
    #[validate(range(max = 254))]
    pub degree: usize,
    /// The limb base is `2**base_bits`.
    #[validate(range(min = 1, max = 1024))]
    pub base_bits: u32,
    /// Decimal or `0x`-prefixed hexadecimal.
    #[validate(custom(function = "validate_modulus"))]
    pub modulus: String,
}

impl Default for LimbsConfig {
    fn default() -> Self {
        Self { degree: DEGREE, base_bits: BASE_BITS, modulus: format!("0x{BN254_PRIME_HEX}") }
    }
}

impl LimbsConfig {
    /// Reads a JSON config file if given; omitted fields keep their default values.
    pub fn load(path: Option<&Path>) -> LimbsResult<Self> {
        let config = match path {
            Some(path) => {
                info!("Loading limbs config from {path:?}.");
                serde_json::from_str::<Self>(&fs::read_to_string(path)?)?
            }
            None => Self::default(),
        };
        config.validate()?;
        Ok(config)
    }

    pub fn basis(&self) -> LimbsResult<LimbBasis> {
        LimbBasis::from_bits(self.degree, self.base_bits)
    }

    pub fn prime_field(&self) -> LimbsResult<PrimeField> {
        PrimeField::new(parse_integer(&self.modulus)?, self.basis()?)
    }
}
