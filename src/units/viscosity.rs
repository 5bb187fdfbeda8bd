use serde::{Deserialize, Serialize};

use crate::quantity::{Magnitude, Quantity, UnitId};

/// 점도(동점성이 아닌 절대 점도) 단위. 내부 기준은 Pa·s이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ViscosityUnit {
    PascalSecond,
    Poise,
    Centipoise,
}

impl UnitId for ViscosityUnit {
    const QUANTITY: &'static str = "점도";
    const ALL: &'static [Self] = &[
        ViscosityUnit::PascalSecond,
        ViscosityUnit::Poise,
        ViscosityUnit::Centipoise,
    ];

    fn symbol(self) -> &'static str {
        match self {
            ViscosityUnit::PascalSecond => "Pa*s",
            ViscosityUnit::Poise => "P",
            ViscosityUnit::Centipoise => "cP",
        }
    }

    fn aliases(self) -> &'static [&'static str] {
        match self {
            ViscosityUnit::PascalSecond => &["pa·s", "pa.s", "pas"],
            ViscosityUnit::Poise => &["poise"],
            ViscosityUnit::Centipoise => &["cp", "cps", "centipoise"],
        }
    }

    fn ordinal(self) -> usize {
        self as usize
    }
}

/// 점도 물리량.
#[derive(Debug, Clone, Copy)]
pub struct Viscosity;

impl Quantity for Viscosity {
    type Unit = ViscosityUnit;
    const NAME: &'static str = "viscosity";
    const CANONICAL: ViscosityUnit = ViscosityUnit::PascalSecond;

    fn scale(unit: ViscosityUnit) -> f64 {
        match unit {
            ViscosityUnit::PascalSecond => 1.0,
            ViscosityUnit::Poise => 1.0e-1,
            ViscosityUnit::Centipoise => 1.0e-3,
        }
    }
}

/// 점도를 변환한다.
pub fn convert_viscosity<V: Magnitude>(value: V, from: ViscosityUnit, to: ViscosityUnit) -> V {
    Viscosity::convert(value, from, to)
}
