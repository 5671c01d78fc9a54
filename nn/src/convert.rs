use num_bigint::BigUint;
use num_traits::Zero;

use crate::{Error, Limb};

pub fn to_biguint<L: Limb>(limbs: &[L]) -> BigUint {
    limbs
        .iter()
        .rev()
        .fold(BigUint::zero(), |acc, &limb| (acc << L::BITS) + BigUint::from(limb.to_u64()))
}

/// Little-endian limbs of `value` without leading zeros, at least one limb long.
pub fn biguint_to_limbs<L: Limb>(value: &BigUint) -> Vec<L> {
    let mut limbs = L::biguint_digits(value);
    if limbs.is_empty() {
        limbs.push(L::ZERO);
    }
    limbs
}

/// Little-endian limbs of `value` zero-padded to exactly `len` limbs.
pub fn biguint_to_limbs_padded<L: Limb>(value: &BigUint, len: usize) -> Result<Vec<L>, Error> {
    let mut limbs = L::biguint_digits(value);
    if limbs.len() > len {
        return Err(Error::ValueTooLarge { required: limbs.len(), available: len });
    }
    limbs.resize(len, L::ZERO);
    Ok(limbs)
}
