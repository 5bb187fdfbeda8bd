use serde::{Deserialize, Serialize};

use crate::constants::{CONSTANTS_SI, ESU_TO_C};
use crate::quantity::{Magnitude, Quantity, UnitId};

/// 전하 단위. 내부 기준은 쿨롱(C)이다.
/// 하트리 원자 단위의 전하는 정의상 e이므로 기본 전하와 같은 크기를 가진다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChargeUnit {
    Coulomb,
    /// statcoulomb (CGS-esu)
    StatCoulomb,
    /// 기본 전하 단위 (±1 = ±e)
    Elementary,
    Atomic,
}

impl UnitId for ChargeUnit {
    const QUANTITY: &'static str = "전하";
    const ALL: &'static [Self] = &[
        ChargeUnit::Coulomb,
        ChargeUnit::StatCoulomb,
        ChargeUnit::Elementary,
        ChargeUnit::Atomic,
    ];

    fn symbol(self) -> &'static str {
        match self {
            ChargeUnit::Coulomb => "C",
            ChargeUnit::StatCoulomb => "esu",
            ChargeUnit::Elementary => "e",
            ChargeUnit::Atomic => "atomic",
        }
    }

    fn aliases(self) -> &'static [&'static str] {
        match self {
            ChargeUnit::Coulomb => &["c", "coulomb"],
            ChargeUnit::StatCoulomb => &["statc", "statcoulomb"],
            _ => &[],
        }
    }

    fn ordinal(self) -> usize {
        self as usize
    }
}

/// 전하 물리량.
#[derive(Debug, Clone, Copy)]
pub struct Charge;

impl Quantity for Charge {
    type Unit = ChargeUnit;
    const NAME: &'static str = "charge";
    const CANONICAL: ChargeUnit = ChargeUnit::Coulomb;

    fn scale(unit: ChargeUnit) -> f64 {
        match unit {
            ChargeUnit::Coulomb => 1.0,
            ChargeUnit::StatCoulomb => ESU_TO_C,
            ChargeUnit::Elementary | ChargeUnit::Atomic => CONSTANTS_SI.q,
        }
    }
}

/// 전하를 변환한다.
pub fn convert_charge<V: Magnitude>(value: V, from: ChargeUnit, to: ChargeUnit) -> V {
    Charge::convert(value, from, to)
}
