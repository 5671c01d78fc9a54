//! Classical (schoolbook) multiplication of big integers stored as
//! little-endian limb slices.
//!
//! [`mul_classical`] is the quadratic kernel: it composes the single-limb
//! [`mul1`] and [`addmul1`] kernels row by row into a caller-sized output and
//! never allocates. [`try_mul_classical`] and [`mul_classical_batch`] are the
//! checked and parallel layers built on top of it.

mod batch;
mod convert;
mod error;
mod limb;
mod mul_classical;
mod primitives;

pub use batch::*;
pub use convert::*;
pub use error::*;
pub use limb::*;
pub use mul_classical::*;
pub use primitives::*;
