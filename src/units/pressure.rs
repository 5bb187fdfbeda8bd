use serde::{Deserialize, Serialize};

use crate::quantity::{Magnitude, Quantity, UnitId};

/// 압력 단위. 내부 기준은 Pa(절대압)이다.
/// Torr와 mmHg는 관례대로 같은 값(101325/760 Pa)으로 취급한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PressureUnit {
    Pascal,
    KiloPascal,
    MegaPascal,
    GigaPascal,
    Bar,
    Atm,
    MilliBar,
    HectoPascal,
    Torr,
    MmHg,
    Psi,
    /// barye = dyn / cm^2
    Barye,
    CmH2O,
}

const ATM_PA: f64 = 101_325.0;

impl UnitId for PressureUnit {
    const QUANTITY: &'static str = "압력";
    const ALL: &'static [Self] = &[
        PressureUnit::Pascal,
        PressureUnit::KiloPascal,
        PressureUnit::MegaPascal,
        PressureUnit::GigaPascal,
        PressureUnit::Bar,
        PressureUnit::Atm,
        PressureUnit::MilliBar,
        PressureUnit::HectoPascal,
        PressureUnit::Torr,
        PressureUnit::MmHg,
        PressureUnit::Psi,
        PressureUnit::Barye,
        PressureUnit::CmH2O,
    ];

    fn symbol(self) -> &'static str {
        match self {
            PressureUnit::Pascal => "Pa",
            PressureUnit::KiloPascal => "kPa",
            PressureUnit::MegaPascal => "MPa",
            PressureUnit::GigaPascal => "GPa",
            PressureUnit::Bar => "bar",
            PressureUnit::Atm => "atm",
            PressureUnit::MilliBar => "mbar",
            PressureUnit::HectoPascal => "hPa",
            PressureUnit::Torr => "Torr",
            PressureUnit::MmHg => "mmHg",
            PressureUnit::Psi => "psi",
            PressureUnit::Barye => "Ba",
            PressureUnit::CmH2O => "cmH2O",
        }
    }

    fn aliases(self) -> &'static [&'static str] {
        match self {
            PressureUnit::Pascal => &["pa", "pascal"],
            PressureUnit::KiloPascal => &["kpa", "kilopascal"],
            PressureUnit::MegaPascal => &["megapascal"],
            PressureUnit::GigaPascal => &["gigapascal"],
            PressureUnit::MilliBar => &["millibar"],
            PressureUnit::HectoPascal => &["hpa"],
            PressureUnit::Torr => &["torr"],
            PressureUnit::MmHg => &["mmhg"],
            PressureUnit::Barye => &["ba", "barye", "dyn/cm2"],
            PressureUnit::CmH2O => &["cmh2o"],
            _ => &[],
        }
    }

    fn ordinal(self) -> usize {
        self as usize
    }
}

/// 압력 물리량.
#[derive(Debug, Clone, Copy)]
pub struct Pressure;

impl Quantity for Pressure {
    type Unit = PressureUnit;
    const NAME: &'static str = "pressure";
    const CANONICAL: PressureUnit = PressureUnit::Pascal;

    fn scale(unit: PressureUnit) -> f64 {
        match unit {
            PressureUnit::Pascal => 1.0,
            PressureUnit::KiloPascal => 1.0e3,
            PressureUnit::MegaPascal => 1.0e6,
            PressureUnit::GigaPascal => 1.0e9,
            PressureUnit::Bar => 1.0e5,
            PressureUnit::Atm => ATM_PA,
            PressureUnit::MilliBar => 100.0,
            PressureUnit::HectoPascal => 100.0,
            PressureUnit::Torr => ATM_PA / 760.0,
            // mmHg는 Torr와 같은 값으로 취급
            PressureUnit::MmHg => ATM_PA / 760.0,
            PressureUnit::Psi => 6894.757_293_168,
            PressureUnit::Barye => 0.1,
            PressureUnit::CmH2O => 98.0665,
        }
    }
}

/// 주어진 압력을 Pa로 변환한다.
pub fn to_pascal<V: Magnitude>(value: V, unit: PressureUnit) -> V {
    Pressure::to_canonical(value, unit)
}

/// Pa 값을 원하는 단위로 변환한다.
pub fn from_pascal<V: Magnitude>(value_pa: V, unit: PressureUnit) -> V {
    Pressure::from_canonical(value_pa, unit)
}

/// 압력을 원하는 단위로 변환한다.
pub fn convert_pressure<V: Magnitude>(value: V, from: PressureUnit, to: PressureUnit) -> V {
    Pressure::convert(value, from, to)
}
