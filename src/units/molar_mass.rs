use serde::{Deserialize, Serialize};

use crate::constants::CONSTANTS_SI;
use crate::quantity::{Magnitude, Quantity, UnitId};

/// 몰질량 단위. 내부 기준은 kg/mol이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MolarMassUnit {
    GramPerMole,
    KilogramPerMole,
    KilogramPerKilomole,
}

impl UnitId for MolarMassUnit {
    const QUANTITY: &'static str = "몰질량";
    const ALL: &'static [Self] = &[
        MolarMassUnit::GramPerMole,
        MolarMassUnit::KilogramPerMole,
        MolarMassUnit::KilogramPerKilomole,
    ];

    fn symbol(self) -> &'static str {
        match self {
            MolarMassUnit::GramPerMole => "g/mol",
            MolarMassUnit::KilogramPerMole => "kg/mol",
            MolarMassUnit::KilogramPerKilomole => "kg/kmol",
        }
    }

    fn aliases(self) -> &'static [&'static str] {
        match self {
            MolarMassUnit::GramPerMole => &["g mol^-1"],
            MolarMassUnit::KilogramPerMole => &["kg mol^-1"],
            MolarMassUnit::KilogramPerKilomole => &["kg kmol^-1"],
        }
    }

    fn ordinal(self) -> usize {
        self as usize
    }
}

/// 몰질량 물리량.
#[derive(Debug, Clone, Copy)]
pub struct MolarMass;

impl Quantity for MolarMass {
    type Unit = MolarMassUnit;
    const NAME: &'static str = "molar_mass";
    const CANONICAL: MolarMassUnit = MolarMassUnit::KilogramPerMole;

    fn scale(unit: MolarMassUnit) -> f64 {
        match unit {
            MolarMassUnit::GramPerMole | MolarMassUnit::KilogramPerKilomole => 1.0e-3,
            MolarMassUnit::KilogramPerMole => 1.0,
        }
    }
}

/// 입자 하나의 질량 단위. 내부 기준은 kg이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ParticleMassUnit {
    Kilogram,
    Dalton,
}

impl UnitId for ParticleMassUnit {
    const QUANTITY: &'static str = "입자 질량";
    const ALL: &'static [Self] = &[ParticleMassUnit::Kilogram, ParticleMassUnit::Dalton];

    fn symbol(self) -> &'static str {
        match self {
            ParticleMassUnit::Kilogram => "kg",
            ParticleMassUnit::Dalton => "u",
        }
    }

    fn aliases(self) -> &'static [&'static str] {
        match self {
            ParticleMassUnit::Kilogram => &["kilogram"],
            ParticleMassUnit::Dalton => &["da", "amu", "dalton"],
        }
    }

    fn ordinal(self) -> usize {
        self as usize
    }
}

/// 입자 질량 물리량.
#[derive(Debug, Clone, Copy)]
pub struct ParticleMass;

impl Quantity for ParticleMass {
    type Unit = ParticleMassUnit;
    const NAME: &'static str = "particle_mass";
    const CANONICAL: ParticleMassUnit = ParticleMassUnit::Kilogram;

    fn scale(unit: ParticleMassUnit) -> f64 {
        match unit {
            ParticleMassUnit::Kilogram => 1.0,
            ParticleMassUnit::Dalton => CONSTANTS_SI.m_u,
        }
    }
}

/// 몰질량을 변환한다.
pub fn convert_molar_mass<V: Magnitude>(value: V, from: MolarMassUnit, to: MolarMassUnit) -> V {
    MolarMass::convert(value, from, to)
}

/// 입자 질량을 변환한다.
pub fn convert_particle_mass<V: Magnitude>(
    value: V,
    from: ParticleMassUnit,
    to: ParticleMassUnit,
) -> V {
    ParticleMass::convert(value, from, to)
}

/// 몰질량 M으로부터 입자 하나의 질량 m = M / N_A [kg]을 구한다.
pub fn particle_from_molar<V: Magnitude>(value: V, unit: MolarMassUnit) -> V {
    let n_a = CONSTANTS_SI.n_a;
    MolarMass::to_canonical(value, unit).map(|m| m / n_a)
}

/// 입자 질량 m으로부터 몰질량 M = m N_A [kg/mol]을 구한다.
pub fn molar_from_particle<V: Magnitude>(value: V, unit: ParticleMassUnit) -> V {
    let n_a = CONSTANTS_SI.n_a;
    ParticleMass::to_canonical(value, unit).map(|m| m * n_a)
}
