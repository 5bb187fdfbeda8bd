use serde::{Deserialize, Serialize};

use crate::constants::{CONSTANTS_SI, ESU_TO_C};
use crate::quantity::{Magnitude, Quantity, UnitId};

/// 전기 쌍극자 모멘트 단위. 내부 기준은 C·m이다.
///
/// 1 D = 1e-18 statC·cm (정의값).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DipoleUnit {
    CoulombMeter,
    StatCoulombCentimeter,
    Debye,
    ElementaryAngstrom,
    /// e·a0 (원자 단위)
    Atomic,
}

const CM_TO_M: f64 = 1.0e-2;
const DEBYE_C_M: f64 = 1.0e-18 * ESU_TO_C * CM_TO_M;

impl UnitId for DipoleUnit {
    const QUANTITY: &'static str = "쌍극자 모멘트";
    const ALL: &'static [Self] = &[
        DipoleUnit::CoulombMeter,
        DipoleUnit::StatCoulombCentimeter,
        DipoleUnit::Debye,
        DipoleUnit::ElementaryAngstrom,
        DipoleUnit::Atomic,
    ];

    fn symbol(self) -> &'static str {
        match self {
            DipoleUnit::CoulombMeter => "C*m",
            DipoleUnit::StatCoulombCentimeter => "esu*cm",
            DipoleUnit::Debye => "D",
            DipoleUnit::ElementaryAngstrom => "e*A",
            DipoleUnit::Atomic => "e*a0",
        }
    }

    fn aliases(self) -> &'static [&'static str] {
        match self {
            DipoleUnit::CoulombMeter => &["c·m", "c m"],
            DipoleUnit::StatCoulombCentimeter => &["esu·cm", "statc*cm"],
            DipoleUnit::Debye => &["debye"],
            DipoleUnit::ElementaryAngstrom => &["e·å", "e*å"],
            DipoleUnit::Atomic => &["atomic", "e·a0"],
        }
    }

    fn ordinal(self) -> usize {
        self as usize
    }
}

/// 쌍극자 모멘트 물리량 (크기만 다룬다).
#[derive(Debug, Clone, Copy)]
pub struct Dipole;

impl Quantity for Dipole {
    type Unit = DipoleUnit;
    const NAME: &'static str = "dipole";
    const CANONICAL: DipoleUnit = DipoleUnit::CoulombMeter;

    fn scale(unit: DipoleUnit) -> f64 {
        match unit {
            DipoleUnit::CoulombMeter => 1.0,
            DipoleUnit::StatCoulombCentimeter => ESU_TO_C * CM_TO_M,
            DipoleUnit::Debye => DEBYE_C_M,
            DipoleUnit::ElementaryAngstrom => CONSTANTS_SI.q * 1.0e-10,
            DipoleUnit::Atomic => CONSTANTS_SI.q * CONSTANTS_SI.a0,
        }
    }
}

/// 쌍극자 모멘트를 변환한다.
pub fn convert_dipole<V: Magnitude>(value: V, from: DipoleUnit, to: DipoleUnit) -> V {
    Dipole::convert(value, from, to)
}
