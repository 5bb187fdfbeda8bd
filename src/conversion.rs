//! 문자열 단위 기반 변환 진입점.
//!
//! 단위 문자열은 각 단위 enum의 `UnitId::parse` 규칙을 따른다
//! (기호는 대소문자 구분, 별칭은 대소문자 무시).

use crate::error::{PhysError, Result};
use crate::quantity::{Quantity, QuantityKind, QuantityValue, UnitId};
use crate::units::systems::UnitSystem;
use crate::units::*;

fn convert_str<Q: Quantity>(value: f64, from: &str, to: &str) -> Result<f64> {
    let from = Q::Unit::parse(from)?;
    let to = Q::Unit::parse(to)?;
    Ok(Q::convert(value, from, to))
}

fn canonical_str<Q: Quantity>(value: f64, unit: &str) -> Result<f64> {
    let unit = Q::Unit::parse(unit)?;
    Ok(Q::to_canonical(value, unit))
}

fn convert_into<Q: Quantity>(value: f64, from: &str, target: Option<Q::Unit>, system: &str) -> Result<f64> {
    let to = target.ok_or_else(|| {
        PhysError::validation(format!("{system} 단위계에는 {} 관례 단위가 없습니다", Q::NAME))
    })?;
    let from = Q::Unit::parse(from)?;
    Ok(Q::convert(value, from, to))
}

/// 문자열로 전달된 단위명을 enum으로 변환한 뒤 지정된 단위로 환산한다.
///
/// 단위 문자열 예시는 `C`, `bar`, `A`, `kPa`, `eV`, `A/fs` 등을 사용할 수 있다.
/// 밀도는 `QuantityKind::Density { dim }`의 차원을 사용한다.
pub fn convert(
    kind: QuantityKind,
    value: f64,
    from_unit_str: &str,
    to_unit_str: &str,
) -> Result<f64> {
    let (f, t) = (from_unit_str, to_unit_str);
    match kind {
        QuantityKind::Length => convert_str::<Length>(value, f, t),
        QuantityKind::Mass => convert_str::<Mass>(value, f, t),
        QuantityKind::Time => convert_str::<Time>(value, f, t),
        QuantityKind::Pressure => convert_str::<Pressure>(value, f, t),
        QuantityKind::Temperature => convert_str::<Temperature>(value, f, t),
        QuantityKind::Energy => convert_str::<Energy>(value, f, t),
        QuantityKind::Force => convert_str::<Force>(value, f, t),
        QuantityKind::Charge => convert_str::<Charge>(value, f, t),
        QuantityKind::Dipole => convert_str::<Dipole>(value, f, t),
        QuantityKind::ElectricField => convert_str::<ElectricField>(value, f, t),
        QuantityKind::Velocity => convert_str::<Velocity>(value, f, t),
        QuantityKind::Viscosity => convert_str::<Viscosity>(value, f, t),
        QuantityKind::Torque => convert_str::<Torque>(value, f, t),
        QuantityKind::MolarMass => convert_str::<MolarMass>(value, f, t),
        QuantityKind::ParticleMass => convert_str::<ParticleMass>(value, f, t),
        QuantityKind::Density { dim } => {
            let from = DensityUnit::parse(f)?;
            let to = DensityUnit::parse(t)?;
            convert_density(value, from, to, dim)
        }
    }
}

/// 문자열 단위 값을 해당 물리량의 기준 단위 값으로 바꾼다.
pub fn to_canonical(kind: QuantityKind, value: f64, unit_str: &str) -> Result<QuantityValue> {
    let u = unit_str;
    let value_base = match kind {
        QuantityKind::Length => canonical_str::<Length>(value, u)?,
        QuantityKind::Mass => canonical_str::<Mass>(value, u)?,
        QuantityKind::Time => canonical_str::<Time>(value, u)?,
        QuantityKind::Pressure => canonical_str::<Pressure>(value, u)?,
        QuantityKind::Temperature => canonical_str::<Temperature>(value, u)?,
        QuantityKind::Energy => canonical_str::<Energy>(value, u)?,
        QuantityKind::Force => canonical_str::<Force>(value, u)?,
        QuantityKind::Charge => canonical_str::<Charge>(value, u)?,
        QuantityKind::Dipole => canonical_str::<Dipole>(value, u)?,
        QuantityKind::ElectricField => canonical_str::<ElectricField>(value, u)?,
        QuantityKind::Velocity => canonical_str::<Velocity>(value, u)?,
        QuantityKind::Viscosity => canonical_str::<Viscosity>(value, u)?,
        QuantityKind::Torque => canonical_str::<Torque>(value, u)?,
        QuantityKind::MolarMass => canonical_str::<MolarMass>(value, u)?,
        QuantityKind::ParticleMass => canonical_str::<ParticleMass>(value, u)?,
        QuantityKind::Density { dim } => {
            to_canonical_density(value, DensityUnit::parse(u)?, dim)?
        }
    };
    Ok(QuantityValue { kind, value_base })
}

/// 문자열 단위 값을 주어진 단위계의 관례 단위로 변환한다.
///
/// 단위계에 해당 물리량의 관례 단위가 없으면 검증 오류를 돌려준다.
pub fn convert_to_system(
    kind: QuantityKind,
    value: f64,
    from_unit_str: &str,
    system: &UnitSystem,
) -> Result<f64> {
    let (f, s, n) = (from_unit_str, system, system.name);
    match kind {
        QuantityKind::Length => convert_into::<Length>(value, f, Some(s.length), n),
        QuantityKind::Mass => convert_into::<Mass>(value, f, Some(s.mass), n),
        QuantityKind::Time => convert_into::<Time>(value, f, Some(s.time), n),
        QuantityKind::Temperature => convert_into::<Temperature>(value, f, Some(s.temperature), n),
        QuantityKind::Pressure => convert_into::<Pressure>(value, f, s.pressure, n),
        QuantityKind::Energy => convert_into::<Energy>(value, f, s.energy, n),
        QuantityKind::Force => convert_into::<Force>(value, f, s.force, n),
        QuantityKind::Charge => convert_into::<Charge>(value, f, s.charge, n),
        QuantityKind::Dipole => convert_into::<Dipole>(value, f, s.dipole, n),
        QuantityKind::ElectricField => convert_into::<ElectricField>(value, f, s.electric_field, n),
        QuantityKind::Velocity => convert_into::<Velocity>(value, f, s.velocity, n),
        QuantityKind::Viscosity => convert_into::<Viscosity>(value, f, s.viscosity, n),
        QuantityKind::Torque => convert_into::<Torque>(value, f, s.torque, n),
        QuantityKind::MolarMass => convert_into::<MolarMass>(value, f, None, n),
        QuantityKind::ParticleMass => convert_into::<ParticleMass>(value, f, None, n),
        QuantityKind::Density { dim } => {
            let to = system_density_unit(system).ok_or_else(|| {
                PhysError::validation(format!("{n} 단위계에는 density 관례 단위가 없습니다"))
            })?;
            convert_density(value, DensityUnit::parse(f)?, to, dim)
        }
    }
}

/// 길이/질량 관례 단위로 밀도 단위를 고른다.
fn system_density_unit(system: &UnitSystem) -> Option<DensityUnit> {
    match (system.length, system.mass) {
        (LengthUnit::Meter, MassUnit::Kilogram) => Some(DensityUnit::KgPerMeterDim),
        (LengthUnit::Centimeter, MassUnit::Gram) => Some(DensityUnit::GramPerCentimeterDim),
        (LengthUnit::Bohr, MassUnit::ElectronMass) => Some(DensityUnit::Atomic),
        _ => None,
    }
}
