use crate::error::{PhysError, Result};
use crate::quantity::Magnitude;
use crate::units::molar_mass::{particle_from_molar, MolarMassUnit};

use super::hertz_knudsen::HertzKnudsenLangmuir;
use super::vapor_pressure::VaporPressureCurve;

/// 증착 물질 정보. 몰질량은 g/mol, 막 밀도는 g/cm^3.
#[derive(Debug, Clone, PartialEq)]
pub struct Species {
    name: String,
    molar_mass_g_per_mol: f64,
    density_g_per_cm3: f64,
}

impl Species {
    pub fn new(
        name: impl Into<String>,
        molar_mass_g_per_mol: f64,
        density_g_per_cm3: f64,
    ) -> Result<Self> {
        if !(molar_mass_g_per_mol.is_finite() && molar_mass_g_per_mol > 0.0) {
            return Err(PhysError::validation(format!(
                "몰질량은 0보다 커야 합니다 ({molar_mass_g_per_mol})"
            )));
        }
        if !(density_g_per_cm3.is_finite() && density_g_per_cm3 > 0.0) {
            return Err(PhysError::validation(format!(
                "밀도는 0보다 커야 합니다 ({density_g_per_cm3})"
            )));
        }
        Ok(Self {
            name: name.into(),
            molar_mass_g_per_mol,
            density_g_per_cm3,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn molar_mass_g_per_mol(&self) -> f64 {
        self.molar_mass_g_per_mol
    }

    pub fn density_g_per_cm3(&self) -> f64 {
        self.density_g_per_cm3
    }

    /// 입자 하나의 질량 [kg].
    pub fn particle_mass_kg(&self) -> f64 {
        particle_from_molar(self.molar_mass_g_per_mol, MolarMassUnit::GramPerMole)
    }

    /// 질량 플럭스 [kg/(m^2 s)]를 막 성장 속도 [m/s]로 바꾼다.
    pub fn growth_rate_m_per_s<V: Magnitude>(&self, mass_flux: V) -> V {
        let rho_kg_m3 = self.density_g_per_cm3 * 1.0e3;
        mass_flux.map(|g| g / rho_kg_m3)
    }

    /// 이 물질의 입자 질량으로 HKL 모델을 만든다.
    pub fn hertz_knudsen<C: VaporPressureCurve>(
        &self,
        curve: C,
        alpha: f64,
        p_bg_pa: f64,
    ) -> Result<HertzKnudsenLangmuir<C>> {
        HertzKnudsenLangmuir::new(curve, self.particle_mass_kg(), alpha, p_bg_pa)
    }
}
