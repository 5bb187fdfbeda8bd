//! 이산화 격자.

pub mod grid;

pub use grid::{Grid1D, GridType1D};
