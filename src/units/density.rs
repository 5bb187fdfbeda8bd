//! 1/2/3차원 밀도 (선밀도, 면밀도, 체적밀도).
//!
//! 차원에 따라 기준 단위가 kg/m, kg/m^2, kg/m^3으로 달라지므로 `Quantity`
//! 대신 차원을 인자로 받는 함수로 제공한다. 차원은 매 호출마다 검증한다.

use serde::{Deserialize, Serialize};

use crate::constants::CONSTANTS_SI;
use crate::error::{PhysError, Result};
use crate::quantity::{Magnitude, UnitId};

/// 밀도 단위.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DensityUnit {
    /// kg/m^dim
    KgPerMeterDim,
    /// g/cm^dim
    GramPerCentimeterDim,
    /// kg/m^3 (3차원 전용)
    KgPerCubicMeter,
    /// g/cm^3 (3차원 전용)
    GramPerCubicCentimeter,
    /// m_e / a0^dim
    Atomic,
}

impl UnitId for DensityUnit {
    const QUANTITY: &'static str = "밀도";
    const ALL: &'static [Self] = &[
        DensityUnit::KgPerMeterDim,
        DensityUnit::GramPerCentimeterDim,
        DensityUnit::KgPerCubicMeter,
        DensityUnit::GramPerCubicCentimeter,
        DensityUnit::Atomic,
    ];

    fn symbol(self) -> &'static str {
        match self {
            DensityUnit::KgPerMeterDim => "kg/m^dim",
            DensityUnit::GramPerCentimeterDim => "g/cm^dim",
            DensityUnit::KgPerCubicMeter => "kg/m3",
            DensityUnit::GramPerCubicCentimeter => "g/cm3",
            DensityUnit::Atomic => "atomic",
        }
    }

    fn aliases(self) -> &'static [&'static str] {
        match self {
            DensityUnit::KgPerCubicMeter => &["kg/m^3", "kg/m³"],
            DensityUnit::GramPerCubicCentimeter => &["g/cm^3", "g/cc", "g/cm³"],
            DensityUnit::Atomic => &["me/a0^dim"],
            _ => &[],
        }
    }

    fn ordinal(self) -> usize {
        self as usize
    }
}

impl DensityUnit {
    /// 3차원에서만 의미가 있는 단위인지 여부.
    pub fn is_fixed_3d(self) -> bool {
        matches!(
            self,
            DensityUnit::KgPerCubicMeter | DensityUnit::GramPerCubicCentimeter
        )
    }

    /// `dim` 차원에서 kg/m^dim 기준으로의 배율. 차원이 맞지 않으면 검증 오류.
    pub fn scale(self, dim: u8) -> Result<f64> {
        check_dim(dim)?;
        if self.is_fixed_3d() && dim != 3 {
            return Err(PhysError::validation(format!(
                "{} 단위는 3차원 밀도에만 쓸 수 있습니다 (dim={dim})",
                self.symbol()
            )));
        }
        let d = i32::from(dim);
        Ok(match self {
            DensityUnit::KgPerMeterDim | DensityUnit::KgPerCubicMeter => 1.0,
            DensityUnit::GramPerCentimeterDim => 1.0e-3 / 1.0e-2_f64.powi(d),
            DensityUnit::GramPerCubicCentimeter => 1.0e3,
            DensityUnit::Atomic => CONSTANTS_SI.me0 / CONSTANTS_SI.a0.powi(d),
        })
    }
}

fn check_dim(dim: u8) -> Result<()> {
    if (1..=3).contains(&dim) {
        Ok(())
    } else {
        Err(PhysError::validation(format!(
            "밀도 차원은 1, 2, 3 중 하나여야 합니다 (dim={dim})"
        )))
    }
}

/// kg/m^dim 기준값으로 변환한다.
pub fn to_canonical_density<V: Magnitude>(value: V, unit: DensityUnit, dim: u8) -> Result<V> {
    let s = unit.scale(dim)?;
    Ok(value.map(|v| v * s))
}

/// kg/m^dim 기준값을 원하는 단위로 변환한다.
pub fn from_canonical_density<V: Magnitude>(value: V, unit: DensityUnit, dim: u8) -> Result<V> {
    let s = unit.scale(dim)?;
    Ok(value.map(|v| v / s))
}

/// 같은 차원 안에서 밀도 단위를 변환한다.
pub fn convert_density<V: Magnitude>(
    value: V,
    from: DensityUnit,
    to: DensityUnit,
    dim: u8,
) -> Result<V> {
    let s_from = from.scale(dim)?;
    let s_to = to.scale(dim)?;
    if from == to {
        return Ok(value);
    }
    Ok(value.map(|v| v * s_from / s_to))
}
