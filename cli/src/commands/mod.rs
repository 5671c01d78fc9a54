mod check;
mod common;
mod mul;

pub use check::*;
pub use common::*;
pub use mul::*;
