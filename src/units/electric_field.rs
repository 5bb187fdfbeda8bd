use serde::{Deserialize, Serialize};

use crate::constants::{CONSTANTS_SI, ESU_TO_C, HARTREE_J};
use crate::quantity::{Magnitude, Quantity, UnitId};

/// 전기장 단위. 내부 기준은 V/m이다.
///
/// CGS는 정전 단위(esu) 규약을 따른다: 1 statV = 1 erg / statC ≈ 299.79 V.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ElectricFieldUnit {
    VoltPerMeter,
    VoltPerCentimeter,
    VoltPerAngstrom,
    StatVoltPerCentimeter,
    /// E0 = Eh / (e a0)
    Atomic,
}

const STATV_TO_V: f64 = 1.0e-7 / ESU_TO_C;

impl UnitId for ElectricFieldUnit {
    const QUANTITY: &'static str = "전기장";
    const ALL: &'static [Self] = &[
        ElectricFieldUnit::VoltPerMeter,
        ElectricFieldUnit::VoltPerCentimeter,
        ElectricFieldUnit::VoltPerAngstrom,
        ElectricFieldUnit::StatVoltPerCentimeter,
        ElectricFieldUnit::Atomic,
    ];

    fn symbol(self) -> &'static str {
        match self {
            ElectricFieldUnit::VoltPerMeter => "V/m",
            ElectricFieldUnit::VoltPerCentimeter => "V/cm",
            ElectricFieldUnit::VoltPerAngstrom => "V/A",
            ElectricFieldUnit::StatVoltPerCentimeter => "statV/cm",
            ElectricFieldUnit::Atomic => "atomic",
        }
    }

    fn aliases(self) -> &'static [&'static str] {
        match self {
            ElectricFieldUnit::VoltPerMeter => &["v/m"],
            ElectricFieldUnit::VoltPerCentimeter => &["v/cm"],
            ElectricFieldUnit::VoltPerAngstrom => &["v/a", "v/å"],
            ElectricFieldUnit::StatVoltPerCentimeter => &["statv/cm"],
            ElectricFieldUnit::Atomic => &["e0"],
        }
    }

    fn ordinal(self) -> usize {
        self as usize
    }
}

/// 전기장 물리량.
#[derive(Debug, Clone, Copy)]
pub struct ElectricField;

impl Quantity for ElectricField {
    type Unit = ElectricFieldUnit;
    const NAME: &'static str = "electric_field";
    const CANONICAL: ElectricFieldUnit = ElectricFieldUnit::VoltPerMeter;

    fn scale(unit: ElectricFieldUnit) -> f64 {
        match unit {
            ElectricFieldUnit::VoltPerMeter => 1.0,
            ElectricFieldUnit::VoltPerCentimeter => 1.0e2,
            ElectricFieldUnit::VoltPerAngstrom => 1.0e10,
            ElectricFieldUnit::StatVoltPerCentimeter => STATV_TO_V * 1.0e2,
            ElectricFieldUnit::Atomic => HARTREE_J / (CONSTANTS_SI.q * CONSTANTS_SI.a0),
        }
    }
}

/// 전기장을 변환한다.
pub fn convert_electric_field<V: Magnitude>(
    value: V,
    from: ElectricFieldUnit,
    to: ElectricFieldUnit,
) -> V {
    ElectricField::convert(value, from, to)
}
