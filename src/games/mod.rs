//! Reference games, used by the tests and benchmarks.

pub mod tree;
pub mod ttt;
