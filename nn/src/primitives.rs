//! Single-limb multiply kernels composed by the classical multiplier.

use crate::Limb;

/// Multiply and multiply-accumulate of a limb sequence by one limb.
///
/// Implementations must keep every intermediate product in at least double
/// the limb width, so that the returned limb carries everything that did not
/// fit in the `m = len(x)` destination limbs.
pub trait MulPrimitives<L: Limb> {
    /// Writes `x·k mod R^m` into `d[..m]` and returns `x·k div R^m`.
    ///
    /// It assumes that len(d) >= len(x)
    fn mul1(d: &mut [L], x: &[L], k: L) -> L;

    /// Adds `x·k` into `d[..m]` in place and returns the carry-out limb,
    /// i.e. `(d + x·k) div R^m`.
    ///
    /// It assumes that len(d) >= len(x)
    fn addmul1(d: &mut [L], x: &[L], k: L) -> L;
}

/// Software kernels built on [`Limb::mac`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Portable;

impl<L: Limb> MulPrimitives<L> for Portable {
    #[inline]
    fn mul1(d: &mut [L], x: &[L], k: L) -> L {
        let d = &mut d[..x.len()];
        let mut carry = L::ZERO;
        for (di, &xi) in d.iter_mut().zip(x) {
            // Compute x[i]·k + carry
            (*di, carry) = L::mac(xi, k, L::ZERO, carry);
        }
        carry
    }

    #[inline]
    fn addmul1(d: &mut [L], x: &[L], k: L) -> L {
        let d = &mut d[..x.len()];
        let mut carry = L::ZERO;
        for (di, &xi) in d.iter_mut().zip(x) {
            // Compute x[i]·k + d[i] + carry
            (*di, carry) = L::mac(xi, k, *di, carry);
        }
        carry
    }
}

/// [`MulPrimitives::mul1`] with the portable kernels.
#[inline]
pub fn mul1<L: Limb>(d: &mut [L], x: &[L], k: L) -> L {
    <Portable as MulPrimitives<L>>::mul1(d, x, k)
}

/// [`MulPrimitives::addmul1`] with the portable kernels.
#[inline]
pub fn addmul1<L: Limb>(d: &mut [L], x: &[L], k: L) -> L {
    <Portable as MulPrimitives<L>>::addmul1(d, x, k)
}

/// In-place `x = x·k mod R^m`, returning `x·k div R^m`.
pub fn mul1_assign<L: Limb>(x: &mut [L], k: L) -> L {
    let mut carry = L::ZERO;
    for xi in x.iter_mut() {
        (*xi, carry) = L::mac(*xi, k, L::ZERO, carry);
    }
    carry
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mul1_small() {
        let x = [3u32, 5, 7];
        let mut d = [0u32; 3];
        let carry = mul1(&mut d, &x, 10);
        assert_eq!(d, [30, 50, 70]);
        assert_eq!(carry, 0);
    }

    #[test]
    fn test_mul1_carry_chain() {
        // (R^3 - 1)·(R - 1) = R^4 - R^3 - R + 1
        let x = [u32::MAX; 3];
        let mut d = [0u32; 3];
        let carry = mul1(&mut d, &x, u32::MAX);
        assert_eq!(d, [1, u32::MAX, u32::MAX]);
        assert_eq!(carry, u32::MAX - 1);
    }

    #[test]
    fn test_mul1_by_zero_overwrites() {
        let x = [9u64, 8, 7];
        let mut d = [u64::MAX; 3];
        assert_eq!(mul1(&mut d, &x, 0), 0);
        assert_eq!(d, [0, 0, 0]);
    }

    #[test]
    fn test_mul1_leaves_tail_untouched() {
        let x = [2u64, 1];
        let mut d = [0u64, 0, 0xAAAA];
        assert_eq!(mul1(&mut d, &x, 3), 0);
        assert_eq!(d, [6, 3, 0xAAAA]);
    }

    #[test]
    fn test_addmul1_accumulates() {
        let x = [1u32, 2];
        let mut d = [10u32, 20];
        let carry = addmul1(&mut d, &x, 4);
        assert_eq!(d, [14, 28]);
        assert_eq!(carry, 0);
    }

    #[test]
    fn test_addmul1_carry_out() {
        // (R^2 - 1) + (R^2 - 1)·(R - 1) = R^3 - R
        let x = [u64::MAX; 2];
        let mut d = [u64::MAX; 2];
        let carry = addmul1(&mut d, &x, u64::MAX);
        assert_eq!(d, [0, u64::MAX]);
        assert_eq!(carry, u64::MAX);
    }

    #[test]
    fn test_addmul1_zero_multiplier_keeps_destination() {
        let x = [u32::MAX; 4];
        let mut d = [1u32, 2, 3, 4];
        assert_eq!(addmul1(&mut d, &x, 0), 0);
        assert_eq!(d, [1, 2, 3, 4]);
    }

    #[test]
    fn test_mul1_assign_matches_mul1() {
        let x = [0xDEAD_BEEFu32, 0xFFFF_FFFF, 0x1234_5678];
        let mut d = [0u32; 3];
        let expected_carry = mul1(&mut d, &x, 0xCAFE_BABE);

        let mut y = x;
        let carry = mul1_assign(&mut y, 0xCAFE_BABE);
        assert_eq!(y, d);
        assert_eq!(carry, expected_carry);
    }

    #[test]
    #[should_panic]
    fn test_mul1_short_destination_panics() {
        let x = [1u32, 2, 3];
        let mut d = [0u32; 2];
        mul1(&mut d, &x, 1);
    }
}
