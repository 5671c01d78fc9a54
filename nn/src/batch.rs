use rayon::prelude::*;

use crate::{mul_classical, mul_classical::check_operands, Error, Limb};

/// Multiplication of many independent pairs of large numbers, in parallel
///
/// `out` is the concatenation of the products in job order, each one taking
/// len(a) + len(b) limbs, so its length must be exactly the sum of those. All the
/// jobs are validated before any limb of `out` is written.
pub fn mul_classical_batch<L: Limb>(jobs: &[(&[L], &[L])], out: &mut [L]) -> Result<(), Error> {
    let mut required = 0;
    for &(a, b) in jobs {
        // Only the operands are checked here, the output is sized as a whole below
        check_operands(usize::MAX, a, b)?;
        required += a.len() + b.len();
    }
    if required != out.len() {
        return Err(Error::BatchOutputMismatch { required, actual: out.len() });
    }

    // Split the output into one disjoint window per job
    let mut windows = Vec::with_capacity(jobs.len());
    let mut rest = out;
    for &(a, b) in jobs {
        let (window, tail) = std::mem::take(&mut rest).split_at_mut(a.len() + b.len());
        windows.push(window);
        rest = tail;
    }

    tracing::debug!("··· Multiplying batch of {} products [{} limbs]", jobs.len(), required);

    jobs.par_iter().zip(windows.into_par_iter()).for_each(|(&(a, b), r)| mul_classical(r, a, b));

    Ok(())
}
