use std::fmt::{Debug, LowerHex};

use num_bigint::BigUint;

/// A fixed-width unsigned digit of a little-endian big integer.
///
/// The radix of the representation is `2^BITS`.
pub trait Limb: Copy + Default + Eq + Ord + Debug + LowerHex + Send + Sync + 'static {
    const BITS: u32;
    const ZERO: Self;
    const ONE: Self;
    const MAX: Self;

    /// Computes `a·b + c + d` in double width and returns it as `(low, high)`.
    ///
    /// The sum is at most `(R - 1)^2 + 2(R - 1) = R^2 - 1`, so it always fits.
    fn mac(a: Self, b: Self, c: Self, d: Self) -> (Self, Self);

    fn to_u64(self) -> u64;

    /// Keeps the low `BITS` bits of `value`.
    fn truncate_from_u64(value: u64) -> Self;

    /// Little-endian digits of `value` in this radix, empty for zero.
    fn biguint_digits(value: &BigUint) -> Vec<Self>;
}

macro_rules! impl_limb {
    ($limb:ty, $wide:ty, $digits:ident) => {
        impl Limb for $limb {
            const BITS: u32 = <$limb>::BITS;
            const ZERO: Self = 0;
            const ONE: Self = 1;
            const MAX: Self = <$limb>::MAX;

            #[inline(always)]
            fn mac(a: Self, b: Self, c: Self, d: Self) -> (Self, Self) {
                let t = (a as $wide) * (b as $wide) + (c as $wide) + (d as $wide);
                (t as $limb, (t >> <$limb>::BITS) as $limb)
            }

            #[inline]
            #[allow(clippy::unnecessary_cast)]
            fn to_u64(self) -> u64 {
                self as u64
            }

            #[inline]
            #[allow(clippy::unnecessary_cast)]
            fn truncate_from_u64(value: u64) -> Self {
                value as $limb
            }

            fn biguint_digits(value: &BigUint) -> Vec<Self> {
                value.$digits()
            }
        }
    };
}

impl_limb!(u32, u64, to_u32_digits);
impl_limb!(u64, u128, to_u64_digits);
