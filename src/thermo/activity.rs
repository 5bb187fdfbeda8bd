//! 응축상 활동도 모델과 활동도 기반 분압.

use std::collections::HashMap;

use crate::constants::CONSTANTS_SI;
use crate::error::{PhysError, Result};
use crate::units::temperature::from_kelvin;

use super::mixture::{MolarMixture, FRACTION_SUM_TOL};
use super::vapor_pressure::VaporPressureCurve;

/// 성분별 활동도 계수 γ_i(T, x).
pub trait ActivityModel {
    fn gamma(&self, t_k: f64, x: &MolarMixture) -> Result<HashMap<String, f64>>;
}

fn check_t_k(t_k: f64) -> Result<()> {
    if t_k > 0.0 {
        Ok(())
    } else {
        Err(PhysError::domain(format!("온도는 0 K보다 커야 합니다 (T={t_k} K)")))
    }
}

/// 이상 용액: 모든 성분 γ = 1.
#[derive(Debug, Clone, PartialEq)]
pub struct IdealSolution {
    pub species: Vec<String>,
}

impl IdealSolution {
    pub fn new<S: Into<String>>(species: Vec<S>) -> Self {
        Self {
            species: species.into_iter().map(Into::into).collect(),
        }
    }
}

impl ActivityModel for IdealSolution {
    fn gamma(&self, _t_k: f64, _x: &MolarMixture) -> Result<HashMap<String, f64>> {
        Ok(self.species.iter().map(|s| (s.clone(), 1.0)).collect())
    }
}

/// 대칭 정규 용액 이성분계. `ln γ_A = Ω x_B^2 / (R T)`, Ω는 J/mol.
#[derive(Debug, Clone, PartialEq)]
pub struct RegularSolutionBinary {
    pub species: (String, String),
    pub omega_j_per_mol: f64,
}

impl RegularSolutionBinary {
    pub fn new(a: impl Into<String>, b: impl Into<String>, omega_j_per_mol: f64) -> Result<Self> {
        if !omega_j_per_mol.is_finite() {
            return Err(PhysError::validation("Ω는 유한해야 합니다"));
        }
        Ok(Self {
            species: (a.into(), b.into()),
            omega_j_per_mol,
        })
    }
}

impl ActivityModel for RegularSolutionBinary {
    fn gamma(&self, t_k: f64, x: &MolarMixture) -> Result<HashMap<String, f64>> {
        check_t_k(t_k)?;
        let (a, b) = &self.species;
        let x_a = x.mole_fraction(a)?;
        let x_b = x.mole_fraction(b)?;
        if ((x_a + x_b) - 1.0).abs() > FRACTION_SUM_TOL {
            return Err(PhysError::validation(format!(
                "이성분 몰분율 합이 1이 아닙니다 ({a}={x_a}, {b}={x_b})"
            )));
        }
        let rt = CONSTANTS_SI.r_g * t_k;
        let ln_ga = self.omega_j_per_mol * x_b * x_b / rt;
        let ln_gb = self.omega_j_per_mol * x_a * x_a / rt;
        Ok(HashMap::from([
            (a.clone(), ln_ga.exp()),
            (b.clone(), ln_gb.exp()),
        ]))
    }
}

/// 순물질 증기압 곡선을 갖는 성분
pub type PureCurve = Box<dyn VaporPressureCurve + Send + Sync>;

/// 분압 `P_i(T, x) = γ_i x_i P_i*(T)`.
pub struct PartialPressureFromActivity {
    pure_vp: Vec<(String, PureCurve)>,
    activity: Box<dyn ActivityModel + Send + Sync>,
}

impl PartialPressureFromActivity {
    pub fn new(
        pure_vp: Vec<(String, PureCurve)>,
        activity: Box<dyn ActivityModel + Send + Sync>,
    ) -> Self {
        Self { pure_vp, activity }
    }

    /// 성분별 분압 [Pa]. 온도는 K로 받아 각 곡선의 입력 단위로 바꾼다.
    pub fn partial_pressures_pa(
        &self,
        t_k: f64,
        x: &MolarMixture,
        check_range: bool,
    ) -> Result<HashMap<String, f64>> {
        Ok(self.partial_pressures_in_order(t_k, x, check_range)?.into_iter().collect())
    }

    /// 전체 압력 [Pa]. 곡선을 등록한 순서대로 더한다.
    pub fn total_pressure_pa(&self, t_k: f64, x: &MolarMixture, check_range: bool) -> Result<f64> {
        let partial = self.partial_pressures_in_order(t_k, x, check_range)?;
        Ok(partial.iter().map(|(_, p)| p).sum())
    }

    fn partial_pressures_in_order(
        &self,
        t_k: f64,
        x: &MolarMixture,
        check_range: bool,
    ) -> Result<Vec<(String, f64)>> {
        check_t_k(t_k)?;
        let gamma = self.activity.gamma(t_k, x)?;
        let mut out = Vec::with_capacity(self.pure_vp.len());
        for (name, curve) in &self.pure_vp {
            let x_i = x.mole_fraction(name)?;
            let g_i = *gamma
                .get(name)
                .ok_or_else(|| PhysError::Lookup(format!("활동도 계수가 없는 성분 '{name}'")))?;
            let t = from_kelvin(t_k, curve.temperature_unit());
            let p_star = curve.pressure_pa(t, check_range)?;
            out.push((name.clone(), g_i * x_i * p_star));
        }
        Ok(out)
    }
}
