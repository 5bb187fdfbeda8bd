use std::sync::{Arc, OnceLock};

use nalgebra::DMatrix;
use tracing::debug;

use crate::discretization::Grid1D;
use crate::error::{PhysError, Result};

use super::state::Wavefunction1D;

/// 격자 위 상태에 작용하는 선형 연산자.
pub trait LinearOperator1D {
    fn grid(&self) -> &Arc<Grid1D>;

    /// 행렬 표현. 구현체는 처음 호출할 때 한 번만 만든다.
    fn matrix(&self) -> &DMatrix<f64>;

    /// |φ⟩ = A|ψ⟩. 상태가 다른 격자 인스턴스 위에 있으면 영역 오류.
    fn apply(&self, psi: &Wavefunction1D) -> Result<Wavefunction1D> {
        if !Arc::ptr_eq(self.grid(), psi.grid()) {
            return Err(PhysError::domain("연산자와 상태의 격자가 다릅니다"));
        }
        Wavefunction1D::new(Arc::clone(self.grid()), self.matrix() * psi.values())
    }
}

/// 삼중대각 (1, -2, 1)/dx² 행렬. 경계 밖 값은 0(Dirichlet)으로 본다.
pub(crate) fn second_derivative_matrix(n: usize, dx: f64) -> DMatrix<f64> {
    let inv_dx2 = 1.0 / (dx * dx);
    DMatrix::from_fn(n, n, |i, j| {
        if i == j {
            -2.0 * inv_dx2
        } else if i.abs_diff(j) == 1 {
            inv_dx2
        } else {
            0.0
        }
    })
}

/// 2계 미분 연산자 d²/dx².
#[derive(Debug)]
pub struct SecondDerivative1D {
    grid: Arc<Grid1D>,
    matrix: OnceLock<DMatrix<f64>>,
}

impl SecondDerivative1D {
    pub fn new(grid: Arc<Grid1D>) -> Self {
        Self {
            grid,
            matrix: OnceLock::new(),
        }
    }
}

impl LinearOperator1D for SecondDerivative1D {
    fn grid(&self) -> &Arc<Grid1D> {
        &self.grid
    }

    fn matrix(&self) -> &DMatrix<f64> {
        self.matrix.get_or_init(|| {
            let n = self.grid.len();
            debug!(n, dx = self.grid.dx(), "2계 미분 행렬 생성");
            second_derivative_matrix(n, self.grid.dx())
        })
    }
}
