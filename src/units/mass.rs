use serde::{Deserialize, Serialize};

use crate::constants::CONSTANTS_SI;
use crate::quantity::{Magnitude, Quantity, UnitId};

/// 질량 단위. 내부 기준은 kg이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MassUnit {
    Kilogram,
    Gram,
    Milligram,
    Tonne,
    PoundMass,
    Ounce,
    /// 원자 질량 단위 (dalton)
    Dalton,
    /// 전자 질량 (하트리 원자 단위)
    ElectronMass,
}

impl UnitId for MassUnit {
    const QUANTITY: &'static str = "질량";
    const ALL: &'static [Self] = &[
        MassUnit::Kilogram,
        MassUnit::Gram,
        MassUnit::Milligram,
        MassUnit::Tonne,
        MassUnit::PoundMass,
        MassUnit::Ounce,
        MassUnit::Dalton,
        MassUnit::ElectronMass,
    ];

    fn symbol(self) -> &'static str {
        match self {
            MassUnit::Kilogram => "kg",
            MassUnit::Gram => "g",
            MassUnit::Milligram => "mg",
            MassUnit::Tonne => "t",
            MassUnit::PoundMass => "lbm",
            MassUnit::Ounce => "oz",
            MassUnit::Dalton => "u",
            MassUnit::ElectronMass => "me",
        }
    }

    fn aliases(self) -> &'static [&'static str] {
        match self {
            MassUnit::Kilogram => &["kilogram"],
            MassUnit::Gram => &["gram"],
            MassUnit::Tonne => &["tonne"],
            MassUnit::PoundMass => &["lb", "lbs"],
            MassUnit::Dalton => &["amu", "da", "dalton"],
            MassUnit::ElectronMass => &["m_e", "atomic"],
            _ => &[],
        }
    }

    fn ordinal(self) -> usize {
        self as usize
    }
}

/// 질량 물리량.
#[derive(Debug, Clone, Copy)]
pub struct Mass;

impl Quantity for Mass {
    type Unit = MassUnit;
    const NAME: &'static str = "mass";
    const CANONICAL: MassUnit = MassUnit::Kilogram;

    fn scale(unit: MassUnit) -> f64 {
        match unit {
            MassUnit::Kilogram => 1.0,
            MassUnit::Gram => 1.0e-3,
            MassUnit::Milligram => 1.0e-6,
            MassUnit::Tonne => 1.0e3,
            MassUnit::PoundMass => 0.453_592_37,
            MassUnit::Ounce => 0.028_349_523_125,
            MassUnit::Dalton => CONSTANTS_SI.m_u,
            MassUnit::ElectronMass => CONSTANTS_SI.me0,
        }
    }
}

/// 질량을 변환한다.
pub fn convert_mass<V: Magnitude>(value: V, from: MassUnit, to: MassUnit) -> V {
    Mass::convert(value, from, to)
}
