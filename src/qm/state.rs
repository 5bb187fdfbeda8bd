use std::sync::Arc;

use nalgebra::DVector;

use crate::discretization::Grid1D;
use crate::error::{PhysError, Result};

/// 격자 위에 표본화한 실수 파동함수 ψ(x).
///
/// 격자는 `Arc`로 공유하며, 두 상태가 "같은 격자"라는 것은 같은 `Arc` 인스턴스라는 뜻이다.
#[derive(Debug, Clone, PartialEq)]
pub struct Wavefunction1D {
    grid: Arc<Grid1D>,
    values: DVector<f64>,
}

impl Wavefunction1D {
    pub fn new(grid: Arc<Grid1D>, values: DVector<f64>) -> Result<Self> {
        if values.len() != grid.len() {
            return Err(PhysError::validation(format!(
                "파동함수 길이({})가 격자점 수({})와 다릅니다",
                values.len(),
                grid.len()
            )));
        }
        Ok(Self { grid, values })
    }

    /// 격자 위 함수값으로 상태를 만든다.
    pub fn from_fn<F: Fn(f64) -> f64>(grid: Arc<Grid1D>, f: F) -> Self {
        let values = grid.points().map(f);
        Self { grid, values }
    }

    pub fn grid(&self) -> &Arc<Grid1D> {
        &self.grid
    }

    pub fn values(&self) -> &DVector<f64> {
        &self.values
    }

    pub fn into_values(self) -> DVector<f64> {
        self.values
    }

    /// 이산 L2 노름 sqrt(Σ|ψ|² dx).
    pub fn norm(&self) -> f64 {
        (self.values.norm_squared() * self.grid.dx()).sqrt()
    }

    /// ∫|ψ|² dx = 1 이 되도록 정규화한다. 영벡터면 영역 오류.
    pub fn normalize(mut self) -> Result<Self> {
        let norm = self.norm();
        if norm == 0.0 {
            return Err(PhysError::domain("영 파동함수는 정규화할 수 없습니다"));
        }
        self.values /= norm;
        Ok(self)
    }

    /// 이산 내적 ⟨self|other⟩ ≈ ∫ψφ dx. 같은 격자 인스턴스여야 한다.
    pub fn inner(&self, other: &Wavefunction1D) -> Result<f64> {
        if !Arc::ptr_eq(&self.grid, &other.grid) {
            return Err(PhysError::domain("내적은 같은 격자 위의 상태끼리만 가능합니다"));
        }
        Ok(self.values.dot(&other.values) * self.grid.dx())
    }
}
