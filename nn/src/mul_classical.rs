use crate::{Error, Limb, MulPrimitives, Portable};

/// Multiplication of two large numbers (represented as little-endian limb slices)
///
/// Writes exactly len(a) + len(b) limbs of a·b into `r`. Limbs of `r` past that point are not
/// touched and the previous content of `r` is never read.
///
/// It assumes that len(a),len(b) > 0 and len(r) >= len(a) + len(b)
#[inline]
pub fn mul_classical<L: Limb>(r: &mut [L], a: &[L], b: &[L]) {
    mul_classical_with::<L, Portable>(r, a, b)
}

/// Same as [`mul_classical`], composing the caller's single-limb kernels.
pub fn mul_classical_with<L: Limb, P: MulPrimitives<L>>(r: &mut [L], a: &[L], b: &[L]) {
    let len_a = a.len();
    let len_b = b.len();
    #[cfg(debug_assertions)]
    {
        assert_ne!(len_a, 0, "Input 'a' must have at least one limb");
        assert_ne!(len_b, 0, "Input 'b' must have at least one limb");
        assert!(r.len() >= len_a + len_b, "Output 'r' must have at least len(a) + len(b) limbs");
    }

    // Start with a·b[0], it seeds r[0..=len_a]
    r[len_a] = P::mul1(&mut r[..len_a], a, b[0]);

    // Accumulate a·b[i] at limb offset i
    for (i, &bi) in b.iter().enumerate().skip(1) {
        r[len_a + i] = P::addmul1(&mut r[i..i + len_a], a, bi);
    }
}

/// Checked version of [`mul_classical`].
///
/// Rejects empty operands and undersized outputs before touching `r`.
pub fn try_mul_classical<L: Limb>(r: &mut [L], a: &[L], b: &[L]) -> Result<(), Error> {
    check_operands(r.len(), a, b)?;
    mul_classical(r, a, b);
    Ok(())
}

pub(crate) fn check_operands<L: Limb>(len_r: usize, a: &[L], b: &[L]) -> Result<(), Error> {
    let error = if a.is_empty() {
        Error::EmptyOperand { name: "a" }
    } else if b.is_empty() {
        Error::EmptyOperand { name: "b" }
    } else if len_r < a.len() + b.len() {
        Error::OutputTooShort { required: a.len() + b.len(), actual: len_r }
    } else {
        return Ok(());
    };

    tracing::debug!("Rejected multiplication of {}x{} limbs: {}", a.len(), b.len(), error);
    Err(error)
}
