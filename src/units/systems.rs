//! 단위계별 관례 단위 모음. 변환은 하지 않고 단위 선택만 제공한다.

use serde::{Deserialize, Serialize};

use super::charge::ChargeUnit;
use super::dipole::DipoleUnit;
use super::electric_field::ElectricFieldUnit;
use super::energy::EnergyUnit;
use super::force::ForceUnit;
use super::length::LengthUnit;
use super::mass::MassUnit;
use super::pressure::PressureUnit;
use super::temperature::TemperatureUnit;
use super::time::TimeUnit;
use super::torque::TorqueUnit;
use super::velocity::VelocityUnit;
use super::viscosity::ViscosityUnit;

/// 내장 단위계 선택자. 설정 파일에 그대로 기록된다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UnitSystemKind {
    SI,
    CGS,
    Imperial,
    USCS,
    /// LAMMPS `units metal`
    Metal,
    /// LAMMPS `units real`
    Real,
    /// LAMMPS `units electron`
    Electron,
    /// 하트리 원자 단위
    Hartree,
}

impl UnitSystemKind {
    pub const ALL: [UnitSystemKind; 8] = [
        UnitSystemKind::SI,
        UnitSystemKind::CGS,
        UnitSystemKind::Imperial,
        UnitSystemKind::USCS,
        UnitSystemKind::Metal,
        UnitSystemKind::Real,
        UnitSystemKind::Electron,
        UnitSystemKind::Hartree,
    ];

    pub fn units(self) -> UnitSystem {
        match self {
            UnitSystemKind::SI => UNITS_SI,
            UnitSystemKind::CGS => UNITS_CGS,
            UnitSystemKind::Imperial => UNITS_IMPERIAL,
            UnitSystemKind::USCS => UNITS_USCS,
            UnitSystemKind::Metal => UNITS_METAL,
            UnitSystemKind::Real => UNITS_REAL,
            UnitSystemKind::Electron => UNITS_ELECTRON,
            UnitSystemKind::Hartree => UNITS_HARTREE,
        }
    }
}

/// 한 단위계의 관례 단위. 길이/질량/시간/온도는 항상 정해져 있고
/// 나머지는 해당 단위계에 관례 단위가 없으면 `None`이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnitSystem {
    pub name: &'static str,
    pub length: LengthUnit,
    pub mass: MassUnit,
    pub time: TimeUnit,
    pub temperature: TemperatureUnit,
    pub pressure: Option<PressureUnit>,
    pub energy: Option<EnergyUnit>,
    pub force: Option<ForceUnit>,
    pub charge: Option<ChargeUnit>,
    pub velocity: Option<VelocityUnit>,
    pub viscosity: Option<ViscosityUnit>,
    pub dipole: Option<DipoleUnit>,
    pub electric_field: Option<ElectricFieldUnit>,
    pub torque: Option<TorqueUnit>,
}

pub const UNITS_SI: UnitSystem = UnitSystem {
    name: "SI",
    length: LengthUnit::Meter,
    mass: MassUnit::Kilogram,
    time: TimeUnit::Second,
    temperature: TemperatureUnit::Kelvin,
    pressure: Some(PressureUnit::Pascal),
    energy: Some(EnergyUnit::Joule),
    force: Some(ForceUnit::Newton),
    charge: Some(ChargeUnit::Coulomb),
    velocity: Some(VelocityUnit::MeterPerSecond),
    viscosity: Some(ViscosityUnit::PascalSecond),
    dipole: Some(DipoleUnit::CoulombMeter),
    electric_field: Some(ElectricFieldUnit::VoltPerMeter),
    torque: Some(TorqueUnit::NewtonMeter),
};

/// Gaussian CGS. 압력은 barye(dyn/cm^2).
pub const UNITS_CGS: UnitSystem = UnitSystem {
    name: "CGS",
    length: LengthUnit::Centimeter,
    mass: MassUnit::Gram,
    time: TimeUnit::Second,
    temperature: TemperatureUnit::Kelvin,
    pressure: Some(PressureUnit::Barye),
    energy: Some(EnergyUnit::Erg),
    force: Some(ForceUnit::Dyne),
    charge: Some(ChargeUnit::StatCoulomb),
    velocity: Some(VelocityUnit::CentimeterPerSecond),
    viscosity: Some(ViscosityUnit::Poise),
    dipole: Some(DipoleUnit::StatCoulombCentimeter),
    electric_field: Some(ElectricFieldUnit::StatVoltPerCentimeter),
    torque: Some(TorqueUnit::DyneCentimeter),
};

/// 절대 단위계 (힘은 lbf).
pub const UNITS_IMPERIAL: UnitSystem = UnitSystem {
    name: "Imperial",
    length: LengthUnit::Foot,
    mass: MassUnit::PoundMass,
    time: TimeUnit::Second,
    temperature: TemperatureUnit::Rankine,
    pressure: Some(PressureUnit::Psi),
    energy: Some(EnergyUnit::FootPoundForce),
    force: Some(ForceUnit::PoundForce),
    charge: None,
    velocity: Some(VelocityUnit::FootPerSecond),
    viscosity: None,
    dipole: None,
    electric_field: None,
    torque: Some(TorqueUnit::FootPoundForce),
};

pub const UNITS_USCS: UnitSystem = UnitSystem {
    name: "USCS",
    ..UNITS_IMPERIAL
};

pub const UNITS_METAL: UnitSystem = UnitSystem {
    name: "metal",
    length: LengthUnit::Angstrom,
    mass: MassUnit::Dalton,
    time: TimeUnit::Picosecond,
    temperature: TemperatureUnit::Kelvin,
    pressure: Some(PressureUnit::Bar),
    energy: Some(EnergyUnit::ElectronVolt),
    force: Some(ForceUnit::ElectronVoltPerAngstrom),
    charge: Some(ChargeUnit::Elementary),
    velocity: Some(VelocityUnit::AngstromPerPicosecond),
    viscosity: Some(ViscosityUnit::Poise),
    dipole: Some(DipoleUnit::ElementaryAngstrom),
    electric_field: Some(ElectricFieldUnit::VoltPerAngstrom),
    torque: Some(TorqueUnit::ElectronVolt),
};

pub const UNITS_REAL: UnitSystem = UnitSystem {
    name: "real",
    length: LengthUnit::Angstrom,
    mass: MassUnit::Dalton,
    time: TimeUnit::Femtosecond,
    temperature: TemperatureUnit::Kelvin,
    pressure: Some(PressureUnit::Atm),
    energy: Some(EnergyUnit::KiloCaloriePerMole),
    force: Some(ForceUnit::KiloCaloriePerMoleAngstrom),
    charge: Some(ChargeUnit::Elementary),
    velocity: Some(VelocityUnit::AngstromPerFemtosecond),
    viscosity: Some(ViscosityUnit::Poise),
    dipole: Some(DipoleUnit::ElementaryAngstrom),
    electric_field: Some(ElectricFieldUnit::VoltPerAngstrom),
    torque: Some(TorqueUnit::KiloCaloriePerMole),
};

pub const UNITS_ELECTRON: UnitSystem = UnitSystem {
    name: "electron",
    length: LengthUnit::Bohr,
    mass: MassUnit::Dalton,
    time: TimeUnit::Femtosecond,
    temperature: TemperatureUnit::Kelvin,
    pressure: Some(PressureUnit::Pascal),
    energy: Some(EnergyUnit::Hartree),
    force: Some(ForceUnit::HartreePerBohr),
    charge: Some(ChargeUnit::Elementary),
    velocity: Some(VelocityUnit::BohrPerAtomicTime),
    viscosity: None,
    dipole: Some(DipoleUnit::Debye),
    electric_field: Some(ElectricFieldUnit::VoltPerCentimeter),
    torque: Some(TorqueUnit::Hartree),
};

/// 하트리 원자 단위 (ħ = m_e = e = a0 = 1). 압력/점도는 관례 단위가 없다.
pub const UNITS_HARTREE: UnitSystem = UnitSystem {
    name: "Hartree",
    length: LengthUnit::Bohr,
    mass: MassUnit::ElectronMass,
    time: TimeUnit::Atomic,
    temperature: TemperatureUnit::Kelvin,
    pressure: None,
    energy: Some(EnergyUnit::Hartree),
    force: Some(ForceUnit::HartreePerBohr),
    charge: Some(ChargeUnit::Atomic),
    velocity: Some(VelocityUnit::Atomic),
    viscosity: None,
    dipole: Some(DipoleUnit::Atomic),
    electric_field: Some(ElectricFieldUnit::Atomic),
    torque: Some(TorqueUnit::Hartree),
};
