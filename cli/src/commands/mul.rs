use anyhow::{Context, Result};
use clap::Parser;
use nn_mul::{biguint_to_limbs, to_biguint, try_mul_classical, Limb};
use num_bigint::BigUint;

use super::{parse_hex, LimbWidth};

#[derive(Parser)]
pub struct MulCmd {
    /// First operand, hexadecimal
    #[clap(short = 'a', long)]
    pub a: String,

    /// Second operand, hexadecimal
    #[clap(short = 'b', long)]
    pub b: String,

    /// Limb width in bits
    #[clap(short = 'l', long, value_enum, default_value = "64", env = "NN_MUL_LIMB_BITS")]
    pub limb_bits: LimbWidth,
}

impl MulCmd {
    pub fn run(&self) -> Result<()> {
        let a = parse_hex(&self.a).context("Operand 'a'")?;
        let b = parse_hex(&self.b).context("Operand 'b'")?;

        match self.limb_bits {
            LimbWidth::W32 => multiply::<u32>(&a, &b),
            LimbWidth::W64 => multiply::<u64>(&a, &b),
        }
    }
}

fn multiply<L: Limb>(a: &BigUint, b: &BigUint) -> Result<()> {
    let a_limbs = biguint_to_limbs::<L>(a);
    let b_limbs = biguint_to_limbs::<L>(b);

    tracing::info!(
        "Multiplying {} x {} limbs of {} bits",
        a_limbs.len(),
        b_limbs.len(),
        L::BITS
    );

    let mut r = vec![L::ZERO; a_limbs.len() + b_limbs.len()];
    try_mul_classical(&mut r, &a_limbs, &b_limbs)?;

    let width = (L::BITS / 4) as usize;
    for (i, limb) in r.iter().enumerate() {
        println!("r[{i}] = 0x{limb:0width$x}");
    }
    println!("0x{:x}", to_biguint(&r));

    Ok(())
}
