//! 1차원 격자 양자역학: 상태, 연산자, 무한 사각 우물.

pub mod operator;
pub mod state;
pub mod well1d;

pub use operator::{LinearOperator1D, SecondDerivative1D};
pub use state::Wavefunction1D;
pub use well1d::{
    analytic_energy_levels, reconstruct_with_boundaries, InfiniteSquareWell1D,
    InfiniteSquareWellHamiltonian1D,
};
