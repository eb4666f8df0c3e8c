//! Test vectors for limb-wise modular addition and subtraction.
//!
//! Two small operands (`xa`, `ya`) never reach the modulus, and two operands with every limb close
//! to its maximum (`xb`, `yb`) exercise the reduction. The eight results, four sums followed by
//! four differences, are the fixtures consumed by the circuit tests.

use itertools::Itertools;
use num_bigint::BigInt;
use serde::Serialize;
use serde_with::{serde_as, DisplayFromStr};
use tracing::info;

use crate::errors::LimbsResult;
use crate::field::PrimeField;

#[cfg(test)]
#[path = "vectors_test.rs"]
pub mod vectors_test;

/// The distance of every limb of `yb` below the corresponding limb bound.
pub const LIMB_OFFSET: u32 = 123456;

/// Formats limbs the way a list of integers is printed: `[d0, d1, d2]`.
pub fn format_limbs(limbs: &[BigInt]) -> String {
    format!("[{}]", limbs.iter().join(", "))
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Fixtures {
    pub xa: Vec<BigInt>,
    pub ya: Vec<BigInt>,
    pub xb: Vec<BigInt>,
    pub yb: Vec<BigInt>,
}

impl Fixtures {
    /// Builds the operands for the given field. With `n` limbs, `xa = [1, .., n]` and
    /// `ya = [n + 1, .., 2n]`; `xb` and `yb` sit 1 and `LIMB_OFFSET` below `base` on the low limbs
    /// and below the top limb of the modulus on the most significant one.
    pub fn new(field: &PrimeField) -> LimbsResult<Self> {
        let basis = field.basis();
        let n_limbs = basis.n_limbs();
        let small = |first: usize| (first..first + n_limbs).map(BigInt::from).collect::<Vec<_>>();

        let modulus_limbs = field.modulus_limbs()?;
        let top_limb = &modulus_limbs[basis.degree()];
        let near_bound = |offset: u32| {
            let mut limbs = vec![basis.base() - offset; basis.degree()];
            limbs.push(top_limb - offset);
            limbs
        };

        Ok(Self {
            xa: small(1),
            ya: small(n_limbs + 1),
            xb: near_bound(1),
            yb: near_bound(LIMB_OFFSET),
        })
    }

    /// Operand pairs in output order.
    pub fn pairs(&self) -> [(&[BigInt], &[BigInt]); 4] {
        [
            (&self.xa[..], &self.ya[..]),
            (&self.xb[..], &self.yb[..]),
            (&self.xa[..], &self.yb[..]),
            (&self.xb[..], &self.ya[..]),
        ]
    }
}

#[serde_as]
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TestVectors {
    #[serde_as(as = "Vec<Vec<DisplayFromStr>>")]
    pub additions: Vec<Vec<BigInt>>,
    #[serde_as(as = "Vec<Vec<DisplayFromStr>>")]
    pub subtractions: Vec<Vec<BigInt>>,
}

impl TestVectors {
    pub fn generate(field: &PrimeField) -> LimbsResult<Self> {
        let fixtures = Fixtures::new(field)?;
        let pairs = fixtures.pairs();
        let additions = pairs.iter().map(|(x, y)| field.add(x, y)).collect::<LimbsResult<_>>()?;
        let subtractions =
            pairs.iter().map(|(x, y)| field.sub(x, y)).collect::<LimbsResult<_>>()?;
        info!("Generated test vectors for modulus {}.", field.modulus());
        Ok(Self { additions, subtractions })
    }

    /// Additions one per line, two empty lines, then subtractions one per line.
    pub fn to_text(&self) -> String {
        let lines = |rows: &[Vec<BigInt>]| {
            rows.iter().map(|limbs| format_limbs(limbs) + "\n").collect::<String>()
        };
        format!("{}\n\n{}", lines(&self.additions), lines(&self.subtractions))
    }

    pub fn to_json(&self) -> LimbsResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
