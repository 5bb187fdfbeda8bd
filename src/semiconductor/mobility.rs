//! 캐리어 이동도 모델.
//!
//! 이동도는 cm^2/(V s), 온도는 K, 불순물 농도는 cm^-3, 전기장은 V/m 단위를 쓴다.
//! 모든 함수는 스칼라와 배열(`Magnitude`)을 같은 방식으로 받는다.

use crate::constants::CONSTANTS_SI;
use crate::error::{PhysError, Result};
use crate::quantity::Magnitude;

/// cm^2 -> m^2
const CM2_TO_M2: f64 = 1.0e-4;

fn check_positive_param(name: &str, value: f64) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(PhysError::validation(format!("{name}는 0보다 커야 합니다 ({value})")))
    }
}

fn check_temperature<V: Magnitude>(t: &V) -> Result<()> {
    if t.any(|v| !(v > 0.0)) {
        return Err(PhysError::domain("온도는 0 K보다 커야 합니다"));
    }
    Ok(())
}

fn check_concentration<V: Magnitude>(n_i: &V) -> Result<()> {
    if n_i.any(|v| !(v > 0.0)) {
        return Err(PhysError::domain("불순물 농도는 0보다 커야 합니다"));
    }
    Ok(())
}

/// 격자(음향 포논) 산란 한계 이동도 μ_lat(T) = μ_ref (T/T_ref)^(-α).
pub fn lattice_scattering_mobility<V: Magnitude>(
    t: V,
    t_ref: f64,
    mu_ref: f64,
    alpha: f64,
) -> Result<V> {
    check_positive_param("T_ref", t_ref)?;
    check_positive_param("mu_ref", mu_ref)?;
    check_temperature(&t)?;
    Ok(t.map(|t| mu_ref * (t / t_ref).powf(-alpha)))
}

/// 이온화 불순물 산란 한계 이동도 μ_imp = μ_ref (T/T_ref)^α_T (N_I_ref / N_I).
pub fn impurity_scattering_mobility<V: Magnitude>(
    t: V,
    n_i: &V,
    t_ref: f64,
    ni_ref: f64,
    mu_ref: f64,
    alpha_t: f64,
) -> Result<V> {
    check_positive_param("T_ref", t_ref)?;
    check_positive_param("NI_ref", ni_ref)?;
    check_positive_param("mu_ref", mu_ref)?;
    check_temperature(&t)?;
    check_concentration(n_i)?;
    t.zip_map(n_i, |t, n| mu_ref * (t / t_ref).powf(alpha_t) * (ni_ref / n))
}

/// 격자 산란 파라미터.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LatticeMobilityParameters {
    t_ref: f64,
    mu_ref: f64,
    alpha: f64,
}

impl LatticeMobilityParameters {
    /// 음향 포논 산란의 일반적인 지수
    pub const DEFAULT_ALPHA: f64 = 1.5;

    pub fn new(t_ref: f64, mu_ref: f64, alpha: f64) -> Result<Self> {
        check_positive_param("T_ref", t_ref)?;
        check_positive_param("mu_ref", mu_ref)?;
        if !alpha.is_finite() {
            return Err(PhysError::validation("alpha는 유한한 값이어야 합니다"));
        }
        Ok(Self {
            t_ref,
            mu_ref,
            alpha,
        })
    }

    pub fn t_ref(&self) -> f64 {
        self.t_ref
    }

    pub fn mu_ref(&self) -> f64 {
        self.mu_ref
    }

    pub fn alpha(&self) -> f64 {
        self.alpha
    }
}

/// 이온화 불순물 산란 파라미터.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ImpurityMobilityParameters {
    t_ref: f64,
    ni_ref: f64,
    mu_ref: f64,
    alpha_t: f64,
}

impl ImpurityMobilityParameters {
    pub const DEFAULT_ALPHA_T: f64 = 1.5;

    pub fn new(t_ref: f64, ni_ref: f64, mu_ref: f64, alpha_t: f64) -> Result<Self> {
        check_positive_param("T_ref", t_ref)?;
        check_positive_param("NI_ref", ni_ref)?;
        check_positive_param("mu_ref", mu_ref)?;
        if !alpha_t.is_finite() {
            return Err(PhysError::validation("alpha_T는 유한한 값이어야 합니다"));
        }
        Ok(Self {
            t_ref,
            ni_ref,
            mu_ref,
            alpha_t,
        })
    }

    pub fn t_ref(&self) -> f64 {
        self.t_ref
    }

    pub fn ni_ref(&self) -> f64 {
        self.ni_ref
    }

    pub fn mu_ref(&self) -> f64 {
        self.mu_ref
    }

    pub fn alpha_t(&self) -> f64 {
        self.alpha_t
    }
}

/// 한 종류의 캐리어(전자 또는 정공)에 대한 이동도 모델.
#[derive(Debug, Clone, PartialEq)]
pub struct CarrierMobilityModel {
    m_eff: f64,
    lattice: LatticeMobilityParameters,
    impurity: Option<ImpurityMobilityParameters>,
}

impl CarrierMobilityModel {
    /// `m_eff`는 유효 질량 [kg].
    pub fn new(
        m_eff: f64,
        lattice: LatticeMobilityParameters,
        impurity: Option<ImpurityMobilityParameters>,
    ) -> Result<Self> {
        check_positive_param("m_eff", m_eff)?;
        Ok(Self {
            m_eff,
            lattice,
            impurity,
        })
    }

    pub fn m_eff(&self) -> f64 {
        self.m_eff
    }

    pub fn lattice(&self) -> &LatticeMobilityParameters {
        &self.lattice
    }

    pub fn impurity(&self) -> Option<&ImpurityMobilityParameters> {
        self.impurity.as_ref()
    }

    /// 등분배 법칙에 따른 열속도 v_th = sqrt(3 k_B T / m*) [m/s].
    pub fn thermal_velocity<V: Magnitude>(&self, t: V) -> Result<V> {
        check_temperature(&t)?;
        let k_b = CONSTANTS_SI.k_b;
        let m = self.m_eff;
        Ok(t.map(|t| (3.0 * k_b * t / m).sqrt()))
    }

    /// μ [cm^2/(V s)]로부터 평균 자유 시간 τ = μ m* / q [s].
    pub fn tau_from_mu<V: Magnitude>(&self, mu_cm2_vs: V) -> V {
        let m = self.m_eff;
        let q = CONSTANTS_SI.q;
        mu_cm2_vs.map(|mu| mu * CM2_TO_M2 * m / q)
    }

    /// τ [s]로부터 μ = q τ / m* [cm^2/(V s)].
    pub fn mu_from_tau<V: Magnitude>(&self, tau: V) -> V {
        let m = self.m_eff;
        let q = CONSTANTS_SI.q;
        tau.map(|tau| q * tau / m / CM2_TO_M2)
    }

    pub fn mu_lattice<V: Magnitude>(&self, t: V) -> Result<V> {
        let p = &self.lattice;
        lattice_scattering_mobility(t, p.t_ref, p.mu_ref, p.alpha)
    }

    /// 불순물 파라미터가 없으면 검증 오류.
    pub fn mu_impurity<V: Magnitude>(&self, t: V, n_i: &V) -> Result<V> {
        let p = self
            .impurity
            .as_ref()
            .ok_or_else(|| PhysError::validation("이 캐리어에는 불순물 산란 파라미터가 없습니다"))?;
        impurity_scattering_mobility(t, n_i, p.t_ref, p.ni_ref, p.mu_ref, p.alpha_t)
    }

    /// Matthiessen 규칙 1/μ = 1/μ_lat + 1/μ_imp. 불순물 파라미터가 없으면 μ_lat.
    pub fn mu_total<V: Magnitude>(&self, t: V, n_i: &V) -> Result<V> {
        let mu_lat = self.mu_lattice(t.clone())?;
        if self.impurity.is_none() {
            return Ok(mu_lat);
        }
        let mu_imp = self.mu_impurity(t, n_i)?;
        mu_lat.zip_map(&mu_imp, |a, b| 1.0 / (1.0 / a + 1.0 / b))
    }

    /// 드리프트 속도 v_d = μ_tot E [m/s]. E는 V/m.
    pub fn drift_velocity<V: Magnitude>(&self, t: V, n_i: &V, e: &V) -> Result<V> {
        let mu = self.mu_total(t, n_i)?;
        mu.zip_map(e, |mu, e| mu * CM2_TO_M2 * e)
    }
}

/// 전자와 정공 모델 묶음.
#[derive(Debug, Clone, PartialEq)]
pub struct SemiconductorMobility {
    pub electron: CarrierMobilityModel,
    pub hole: CarrierMobilityModel,
}

impl SemiconductorMobility {
    pub fn new(electron: CarrierMobilityModel, hole: CarrierMobilityModel) -> Self {
        Self { electron, hole }
    }

    pub fn mu_n<V: Magnitude>(&self, t: V, n_i: &V) -> Result<V> {
        self.electron.mu_total(t, n_i)
    }

    pub fn mu_n_lattice<V: Magnitude>(&self, t: V) -> Result<V> {
        self.electron.mu_lattice(t)
    }

    pub fn mu_n_impurity<V: Magnitude>(&self, t: V, n_i: &V) -> Result<V> {
        self.electron.mu_impurity(t, n_i)
    }

    pub fn drift_velocity_n<V: Magnitude>(&self, t: V, n_i: &V, e: &V) -> Result<V> {
        self.electron.drift_velocity(t, n_i, e)
    }

    pub fn mu_p<V: Magnitude>(&self, t: V, n_i: &V) -> Result<V> {
        self.hole.mu_total(t, n_i)
    }

    pub fn mu_p_lattice<V: Magnitude>(&self, t: V) -> Result<V> {
        self.hole.mu_lattice(t)
    }

    pub fn mu_p_impurity<V: Magnitude>(&self, t: V, n_i: &V) -> Result<V> {
        self.hole.mu_impurity(t, n_i)
    }

    pub fn drift_velocity_p<V: Magnitude>(&self, t: V, n_i: &V, e: &V) -> Result<V> {
        self.hole.drift_velocity(t, n_i, e)
    }
}
