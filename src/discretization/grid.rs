use nalgebra::DVector;

use crate::error::{PhysError, Result};

/// 1차원 균일 격자의 끝점 포함 규칙.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GridType1D {
    /// [a, b)
    LeftClosed,
    /// (a, b]
    RightClosed,
    /// (a, b)
    Open,
    /// (a, b) 내부점 N개 (Dirichlet 경계)
    Interior,
    /// 셀 중심
    Midpoint,
    /// [a, b]
    Closed,
}

/// 구간 [a, b] 위 N개 점으로 된 균일 격자.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid1D {
    a: f64,
    b: f64,
    n: usize,
    grid_type: GridType1D,
}

impl Grid1D {
    pub fn new(a: f64, b: f64, n: usize, grid_type: GridType1D) -> Result<Self> {
        if !(a.is_finite() && b.is_finite() && b > a) {
            return Err(PhysError::validation(format!("b > a 이어야 합니다 (a={a}, b={b})")));
        }
        if n == 0 {
            return Err(PhysError::validation("격자점 수는 0보다 커야 합니다"));
        }
        if grid_type == GridType1D::Closed && n < 2 {
            return Err(PhysError::validation("Closed 격자는 점이 2개 이상 필요합니다"));
        }
        Ok(Self { a, b, n, grid_type })
    }

    pub fn a(&self) -> f64 {
        self.a
    }

    pub fn b(&self) -> f64 {
        self.b
    }

    pub fn len(&self) -> usize {
        self.n
    }

    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    pub fn grid_type(&self) -> GridType1D {
        self.grid_type
    }

    /// 구간 길이 L = b - a
    pub fn length(&self) -> f64 {
        self.b - self.a
    }

    pub fn dx(&self) -> f64 {
        let l = self.length();
        let n = self.n as f64;
        match self.grid_type {
            GridType1D::Closed => l / (n - 1.0),
            GridType1D::Open | GridType1D::Interior => l / (n + 1.0),
            GridType1D::LeftClosed | GridType1D::RightClosed | GridType1D::Midpoint => l / n,
        }
    }

    /// 격자점 좌표.
    pub fn points(&self) -> DVector<f64> {
        let (a, b, n) = (self.a, self.b, self.n);
        let dx = self.dx();
        match self.grid_type {
            GridType1D::LeftClosed => DVector::from_fn(n, |i, _| a + dx * i as f64),
            GridType1D::RightClosed | GridType1D::Open | GridType1D::Interior => {
                DVector::from_fn(n, |i, _| a + dx * (i + 1) as f64)
            }
            GridType1D::Midpoint => DVector::from_fn(n, |i, _| a + dx * (i as f64 + 0.5)),
            // 양 끝점은 정확히 a, b
            GridType1D::Closed => DVector::from_fn(n, |i, _| {
                if i + 1 == n {
                    b
                } else {
                    a + dx * i as f64
                }
            }),
        }
    }
}
