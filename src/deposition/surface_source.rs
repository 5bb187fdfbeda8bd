//! 유한 원판 면 증발원.
//!
//! 반지름 a인 원판이 z = -h 평면에 축 대칭으로 놓여 있고 기판은 z = 0 평면이다.
//! 방출 세기는 원판 법선(+z) 기준 cos^n 분포를 따른다.

use std::f64::consts::PI;

use crate::error::{PhysError, Result};

/// 원판 증발원의 형상과 방출 지수.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DiskSourceParams {
    h: f64,
    a: f64,
    n: f64,
}

impl DiskSourceParams {
    /// `h`: 원판-기판 거리, `a`: 원판 반지름, `n`: cos 지수 (보통 1).
    pub fn new(h: f64, a: f64, n: f64) -> Result<Self> {
        if !(h.is_finite() && h > 0.0) {
            return Err(PhysError::validation(format!("h는 0보다 커야 합니다 ({h})")));
        }
        if !(a.is_finite() && a > 0.0) {
            return Err(PhysError::validation(format!("원판 반지름은 0보다 커야 합니다 ({a})")));
        }
        if !(n.is_finite() && n >= 0.0) {
            return Err(PhysError::validation(format!("방출 지수는 0 이상이어야 합니다 ({n})")));
        }
        Ok(Self { h, a, n })
    }

    pub fn h(&self) -> f64 {
        self.h
    }

    pub fn a(&self) -> f64 {
        self.a
    }

    pub fn n(&self) -> f64 {
        self.n
    }
}

/// 원판 위 균일 극좌표 격자. ρ ∈ [0, a] 양끝 포함, ψ ∈ [0, 2π) 끝점 제외.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DiskPolarGrid {
    a: f64,
    nr: usize,
    npsi: usize,
}

impl DiskPolarGrid {
    pub const DEFAULT_NR: usize = 250;
    pub const DEFAULT_NPSI: usize = 360;

    pub fn new(a: f64, nr: usize, npsi: usize) -> Result<Self> {
        if !(a.is_finite() && a > 0.0) {
            return Err(PhysError::validation(format!("원판 반지름은 0보다 커야 합니다 ({a})")));
        }
        if nr < 2 || npsi < 1 {
            return Err(PhysError::validation(format!(
                "격자 크기가 너무 작습니다 (nr={nr}, npsi={npsi})"
            )));
        }
        Ok(Self { a, nr, npsi })
    }

    pub fn with_defaults(a: f64) -> Result<Self> {
        Self::new(a, Self::DEFAULT_NR, Self::DEFAULT_NPSI)
    }

    /// (ρ 절점, ψ 절점)
    pub fn nodes(&self) -> (Vec<f64>, Vec<f64>) {
        let (drho, dpsi) = self.weights();
        let rho = (0..self.nr).map(|i| i as f64 * drho).collect();
        let psi = (0..self.npsi).map(|j| j as f64 * dpsi).collect();
        (rho, psi)
    }

    /// (Δρ, Δψ)
    pub fn weights(&self) -> (f64, f64) {
        (self.a / (self.nr - 1) as f64, 2.0 * PI / self.npsi as f64)
    }
}

/// 원판 증발원에 의한 기판 위 상대 증착 분포.
#[derive(Debug, Clone, PartialEq)]
pub struct SurfaceSourceDiskDeposition {
    params: DiskSourceParams,
    grid: DiskPolarGrid,
}

impl SurfaceSourceDiskDeposition {
    pub fn new(params: DiskSourceParams) -> Result<Self> {
        let grid = DiskPolarGrid::with_defaults(params.a)?;
        Ok(Self { params, grid })
    }

    pub fn with_grid(params: DiskSourceParams, grid: DiskPolarGrid) -> Self {
        Self { params, grid }
    }

    pub fn params(&self) -> &DiskSourceParams {
        &self.params
    }

    /// 상수배를 제외한 증착 플럭스 J(ℓ) = ∫ h^(n+1) r^-(n+3) dA.
    pub fn j_shape(&self, ell: &[f64]) -> Vec<f64> {
        let (rho, psi) = self.grid.nodes();
        let (drho, dpsi) = self.grid.weights();
        let cos_psi: Vec<f64> = psi.iter().map(|p| p.cos()).collect();
        let DiskSourceParams { h, n, .. } = self.params;
        let h_pow = h.powf(n + 1.0);
        let r_exp = -(n + 3.0) / 2.0;

        ell.iter()
            .map(|&l| {
                let mut total = 0.0;
                for &r in &rho {
                    let base = l * l + r * r + h * h;
                    let ring: f64 = cos_psi
                        .iter()
                        .map(|c| (base - 2.0 * l * r * c).powf(r_exp))
                        .sum();
                    total += h_pow * ring * dpsi * r;
                }
                total * drho
            })
            .collect()
    }

    /// 축 위 값으로 정규화한 두께 분포 d/d0, 입력은 x = ℓ/h.
    pub fn thickness_ratio(&self, ell_over_h: &[f64]) -> Vec<f64> {
        let h = self.params.h;
        let ell: Vec<f64> = ell_over_h.iter().map(|x| x * h).collect();
        let j0 = self.j_shape(&[0.0])[0];
        self.j_shape(&ell).into_iter().map(|j| j / j0).collect()
    }
}
