use anyhow::{bail, Context, Result};
use clap::ValueEnum;
use num_bigint::BigUint;

/// Limb width used to run a command
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum LimbWidth {
    #[value(name = "32")]
    W32,
    #[value(name = "64")]
    W64,
}

/// Parses a hexadecimal number, with an optional `0x` prefix and `_` separators.
pub fn parse_hex(input: &str) -> Result<BigUint> {
    let trimmed = input.trim();
    let digits: String = trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
        .unwrap_or(trimmed)
        .chars()
        .filter(|c| *c != '_')
        .collect();

    if digits.is_empty() {
        bail!("Empty hexadecimal value '{input}'");
    }

    BigUint::parse_bytes(digits.as_bytes(), 16)
        .with_context(|| format!("Invalid hexadecimal value '{input}'"))
}
