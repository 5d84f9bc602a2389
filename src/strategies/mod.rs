//! Strategy implementations.

pub mod alpha_beta;
pub mod minimax;
pub mod random;
mod util;
