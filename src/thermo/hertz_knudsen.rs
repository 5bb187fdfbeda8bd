//! Hertz-Knudsen-Langmuir 계면 증발 플럭스.

use std::f64::consts::PI;

use crate::constants::CONSTANTS_SI;
use crate::error::{PhysError, Result};
use crate::quantity::Magnitude;
use crate::units::temperature::to_kelvin;

use super::vapor_pressure::VaporPressureCurve;

/// 수 플럭스 `Φ = α max(P_eq - P_bg, 0) / sqrt(2π m k_B T)` 와 질량 플럭스 `Γ = m Φ`.
///
/// 온도 입력은 증기압 곡선이 기대하는 단위로 해석한다.
#[derive(Debug, Clone)]
pub struct HertzKnudsenLangmuir<C> {
    curve: C,
    m_kg: f64,
    alpha: f64,
    p_bg_pa: f64,
}

impl<C: VaporPressureCurve> HertzKnudsenLangmuir<C> {
    /// `m_kg`는 입자 질량, `alpha`는 증발 계수, `p_bg_pa`는 배경 분압.
    pub fn new(curve: C, m_kg: f64, alpha: f64, p_bg_pa: f64) -> Result<Self> {
        if !(m_kg.is_finite() && m_kg > 0.0) {
            return Err(PhysError::validation(format!("입자 질량은 0보다 커야 합니다 ({m_kg})")));
        }
        if !(alpha.is_finite() && alpha >= 0.0) {
            return Err(PhysError::validation(format!("증발 계수는 0 이상이어야 합니다 ({alpha})")));
        }
        if !(p_bg_pa.is_finite() && p_bg_pa >= 0.0) {
            return Err(PhysError::validation(format!("배경 압력은 0 이상이어야 합니다 ({p_bg_pa})")));
        }
        Ok(Self {
            curve,
            m_kg,
            alpha,
            p_bg_pa,
        })
    }

    pub fn curve(&self) -> &C {
        &self.curve
    }

    pub fn m_kg(&self) -> f64 {
        self.m_kg
    }

    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    pub fn p_bg_pa(&self) -> f64 {
        self.p_bg_pa
    }

    /// 수 플럭스 [1/(m^2 s)].
    pub fn number_flux(&self, t: f64, check_range: bool) -> Result<f64> {
        let p_eq = self.curve.pressure_pa(t, check_range)?;
        let p_net = (p_eq - self.p_bg_pa).max(0.0);
        let t_k = to_kelvin(t, self.curve.temperature_unit());
        if !(t_k > 0.0) {
            return Err(PhysError::domain(format!("온도는 0 K보다 커야 합니다 (T={t_k} K)")));
        }
        let denom = (2.0 * PI * self.m_kg * CONSTANTS_SI.k_b * t_k).sqrt();
        Ok(self.alpha * p_net / denom)
    }

    /// 질량 플럭스 [kg/(m^2 s)].
    pub fn mass_flux(&self, t: f64, check_range: bool) -> Result<f64> {
        Ok(self.m_kg * self.number_flux(t, check_range)?)
    }

    pub fn number_flux_array<V: Magnitude>(&self, t: V, check_range: bool) -> Result<V> {
        t.try_map(|t| self.number_flux(t, check_range))
    }

    pub fn mass_flux_array<V: Magnitude>(&self, t: V, check_range: bool) -> Result<V> {
        t.try_map(|t| self.mass_flux(t, check_range))
    }
}
