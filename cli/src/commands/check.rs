use anyhow::{bail, Result};
use clap::Parser;
use colored::Colorize;
use nn_mul::{mul_classical_batch, to_biguint, Limb};
use rand::{rngs::StdRng, Rng, SeedableRng};

use super::LimbWidth;

#[derive(Parser)]
pub struct CheckCmd {
    /// Number of random products
    #[clap(short = 'n', long, default_value_t = 1000, env = "NN_MUL_ITERATIONS")]
    pub iterations: usize,

    /// Maximum number of limbs of each operand
    #[clap(short = 'm', long, default_value_t = 32, env = "NN_MUL_MAX_LIMBS")]
    pub max_limbs: usize,

    /// Seed of the operand generator, random if not given
    #[clap(short = 's', long, env = "NN_MUL_SEED")]
    pub seed: Option<u64>,

    /// Limb width in bits
    #[clap(short = 'l', long, value_enum, default_value = "64", env = "NN_MUL_LIMB_BITS")]
    pub limb_bits: LimbWidth,
}

impl CheckCmd {
    pub fn run(&self) -> Result<()> {
        if self.max_limbs == 0 {
            bail!("--max-limbs must be at least 1");
        }
        let seed = self.seed.unwrap_or_else(rand::random);

        tracing::info!(
            "Checking {} products of up to {} limbs [limb_bits: {:?}, seed: {}]",
            self.iterations,
            self.max_limbs,
            self.limb_bits,
            seed
        );

        let mismatches = match self.limb_bits {
            LimbWidth::W32 => check::<u32>(self.iterations, self.max_limbs, seed)?,
            LimbWidth::W64 => check::<u64>(self.iterations, self.max_limbs, seed)?,
        };

        if mismatches > 0 {
            println!("{} {} of {} products", "FAIL".red().bold(), mismatches, self.iterations);
            bail!("{mismatches} products differ from num-bigint (seed {seed})");
        }

        println!("{} {} products", "OK".green().bold(), self.iterations);
        Ok(())
    }
}

fn random_limbs<L: Limb>(rng: &mut StdRng, len: usize) -> Vec<L> {
    (0..len)
        .map(|_| match rng.gen_range(0..8) {
            0 => L::ZERO,
            1 => L::MAX,
            _ => L::truncate_from_u64(rng.gen()),
        })
        .collect()
}

/// Runs one parallel batch and compares every product with num-bigint.
///
/// Returns the number of mismatching products.
fn check<L: Limb>(iterations: usize, max_limbs: usize, seed: u64) -> Result<usize> {
    let mut rng = StdRng::seed_from_u64(seed);
    let operands: Vec<(Vec<L>, Vec<L>)> = (0..iterations)
        .map(|_| {
            let len_a = rng.gen_range(1..=max_limbs);
            let len_b = rng.gen_range(1..=max_limbs);
            (random_limbs(&mut rng, len_a), random_limbs(&mut rng, len_b))
        })
        .collect();
    let jobs: Vec<(&[L], &[L])> =
        operands.iter().map(|(a, b)| (a.as_slice(), b.as_slice())).collect();

    let total: usize = jobs.iter().map(|(a, b)| a.len() + b.len()).sum();
    let mut out = vec![L::ZERO; total];
    mul_classical_batch(&jobs, &mut out)?;

    let mut mismatches = 0;
    let mut offset = 0;
    for (i, &(a, b)) in jobs.iter().enumerate() {
        let len = a.len() + b.len();
        let got = to_biguint(&out[offset..offset + len]);
        let expected = to_biguint(a) * to_biguint(b);
        if got != expected {
            tracing::warn!("Product #{i} mismatch: 0x{got:x} != 0x{expected:x}");
            mismatches += 1;
        }
        offset += len;
    }

    Ok(mismatches)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_finds_no_mismatch() {
        assert_eq!(check::<u32>(50, 8, 1).unwrap(), 0);
        assert_eq!(check::<u64>(50, 8, 2).unwrap(), 0);
    }

    #[test]
    fn test_check_zero_iterations() {
        assert_eq!(check::<u64>(0, 8, 3).unwrap(), 0);
    }
}
