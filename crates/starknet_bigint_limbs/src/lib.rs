//! Fixed-degree limb encoding of big integers, modular addition and subtraction over a prime
//! written in limbs, and generation of the test vectors used to check circuits implementing them.

pub mod carries;
pub mod cli;
pub mod config;
pub mod errors;
pub mod field;
pub mod limbs;
#[cfg(test)]
pub mod test_utils;
pub mod tracing_utils;
pub mod vectors;
