use num_bigint::BigInt;

use crate::limbs::BASE;

/// The most significant limb of the BN254 prime in base 2**86.
pub const BN254_TOP_LIMB: u128 = 3656382694611191768777988;

fn near_bound(offset: u32) -> Vec<BigInt> {
    vec![&*BASE - offset, &*BASE - offset, BigInt::from(BN254_TOP_LIMB) - offset]
}

pub fn xa() -> Vec<BigInt> {
    [1, 2, 3].map(BigInt::from).to_vec()
}

pub fn ya() -> Vec<BigInt> {
    [4, 5, 6].map(BigInt::from).to_vec()
}

pub fn xb() -> Vec<BigInt> {
    near_bound(1)
}

pub fn yb() -> Vec<BigInt> {
    near_bound(123456)
}

/// Parses decimal limbs.
pub fn limbs_from_str(limbs: [&str; 3]) -> Vec<BigInt> {
    limbs.map(|limb| limb.parse::<BigInt>().unwrap()).to_vec()
}
