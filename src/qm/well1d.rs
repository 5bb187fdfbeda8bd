//! 1차원 무한 사각 우물의 유한차분 해밀토니안.

use std::f64::consts::PI;
use std::sync::{Arc, OnceLock};

use nalgebra::{DMatrix, DVector, SymmetricEigen};
use tracing::debug;

use crate::discretization::{Grid1D, GridType1D};
use crate::error::{PhysError, Result};
use crate::quantity::Magnitude;

use super::operator::{second_derivative_matrix, LinearOperator1D};
use super::state::Wavefunction1D;

/// (0, L) 위 무한 사각 우물. `n_points`는 양 끝 경계를 포함한 전체 점 수다.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InfiniteSquareWell1D {
    length: f64,
    n_points: usize,
    mass: f64,
    hbar: f64,
}

impl InfiniteSquareWell1D {
    pub fn new(length: f64, n_points: usize, mass: f64, hbar: f64) -> Result<Self> {
        if !(length.is_finite() && length > 0.0) {
            return Err(PhysError::validation(format!("우물 폭은 0보다 커야 합니다 ({length})")));
        }
        if n_points < 3 {
            return Err(PhysError::validation(format!(
                "경계 포함 점이 3개 이상 필요합니다 (n_points={n_points})"
            )));
        }
        if !(mass.is_finite() && mass > 0.0) {
            return Err(PhysError::validation(format!("질량은 0보다 커야 합니다 ({mass})")));
        }
        if !(hbar.is_finite() && hbar > 0.0) {
            return Err(PhysError::validation(format!("ħ는 0보다 커야 합니다 ({hbar})")));
        }
        Ok(Self {
            length,
            n_points,
            mass,
            hbar,
        })
    }

    /// 무차원 단위 (m = ħ = 1).
    pub fn dimensionless(length: f64, n_points: usize) -> Result<Self> {
        Self::new(length, n_points, 1.0, 1.0)
    }

    pub fn length(&self) -> f64 {
        self.length
    }

    pub fn n_points(&self) -> usize {
        self.n_points
    }

    /// 내부점 `n_points - 2`개로 된 Interior 격자.
    pub fn make_grid(&self) -> Result<Arc<Grid1D>> {
        let grid = Grid1D::new(0.0, self.length, self.n_points - 2, GridType1D::Interior)?;
        Ok(Arc::new(grid))
    }

    pub fn make_hamiltonian(&self) -> Result<InfiniteSquareWellHamiltonian1D> {
        Ok(InfiniteSquareWellHamiltonian1D::new(
            self.make_grid()?,
            self.mass,
            self.hbar,
        ))
    }
}

/// H = -(ħ²/2m) d²/dx², 내부점 위에서 암묵적 Dirichlet 경계 ψ(0) = ψ(L) = 0.
#[derive(Debug)]
pub struct InfiniteSquareWellHamiltonian1D {
    grid: Arc<Grid1D>,
    mass: f64,
    hbar: f64,
    matrix: OnceLock<DMatrix<f64>>,
}

impl InfiniteSquareWellHamiltonian1D {
    pub fn new(grid: Arc<Grid1D>, mass: f64, hbar: f64) -> Self {
        Self {
            grid,
            mass,
            hbar,
            matrix: OnceLock::new(),
        }
    }

    fn eigen(&self) -> SymmetricEigen<f64, nalgebra::Dyn> {
        SymmetricEigen::new(self.matrix().clone())
    }

    fn check_count(&self, k: usize) -> Result<()> {
        let n = self.grid.len();
        if k == 0 || k > n {
            return Err(PhysError::validation(format!(
                "요청한 준위 수({k})는 1 이상 격자점 수({n}) 이하여야 합니다"
            )));
        }
        Ok(())
    }

    /// 낮은 쪽부터 k개의 고유 에너지.
    pub fn energy_levels(&self, k: usize) -> Result<Vec<f64>> {
        self.check_count(k)?;
        let mut levels: Vec<f64> = self.eigen().eigenvalues.iter().copied().collect();
        levels.sort_by(|a, b| a.total_cmp(b));
        levels.truncate(k);
        Ok(levels)
    }

    /// 낮은 쪽부터 k개의 (에너지, 정규화된 고유상태).
    pub fn eigenstates(&self, k: usize) -> Result<Vec<(f64, Wavefunction1D)>> {
        self.check_count(k)?;
        let eig = self.eigen();
        let mut order: Vec<usize> = (0..eig.eigenvalues.len()).collect();
        order.sort_by(|&i, &j| eig.eigenvalues[i].total_cmp(&eig.eigenvalues[j]));
        order
            .into_iter()
            .take(k)
            .map(|i| -> Result<(f64, Wavefunction1D)> {
                let values = eig.eigenvectors.column(i).into_owned();
                let psi = Wavefunction1D::new(Arc::clone(&self.grid), values)?.normalize()?;
                Ok((eig.eigenvalues[i], psi))
            })
            .collect()
    }
}

impl LinearOperator1D for InfiniteSquareWellHamiltonian1D {
    fn grid(&self) -> &Arc<Grid1D> {
        &self.grid
    }

    fn matrix(&self) -> &DMatrix<f64> {
        self.matrix.get_or_init(|| {
            let n = self.grid.len();
            debug!(n, dx = self.grid.dx(), "해밀토니안 행렬 생성");
            let factor = -(self.hbar * self.hbar) / (2.0 * self.mass);
            second_derivative_matrix(n, self.grid.dx()) * factor
        })
    }
}

/// 해석적 준위 E_n = ħ²π²n² / (2 m L²).
pub fn analytic_energy_levels<V: Magnitude>(n: V, length: f64, mass: f64, hbar: f64) -> V {
    let c = hbar * hbar * PI * PI / (2.0 * mass * length * length);
    n.map(|n| c * n * n)
}

/// 내부점 파동함수에 ψ(0) = ψ(L) = 0 경계를 붙여 (x, ψ) 전체 배열을 만든다.
pub fn reconstruct_with_boundaries(
    wf: &Wavefunction1D,
    length: f64,
) -> (DVector<f64>, DVector<f64>) {
    let n_internal = wf.values().len();
    let n_total = n_internal + 2;
    let dx = length / (n_total - 1) as f64;
    let x_full = DVector::from_fn(n_total, |i, _| {
        if i + 1 == n_total {
            length
        } else {
            dx * i as f64
        }
    });
    let mut psi_full = DVector::zeros(n_total);
    psi_full.rows_mut(1, n_internal).copy_from(wf.values());
    (x_full, psi_full)
}
