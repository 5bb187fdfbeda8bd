use serde::{Deserialize, Serialize};

use crate::constants::CONSTANTS_SI;
use crate::quantity::{Magnitude, Quantity, UnitId};

/// 길이 단위. 내부 기준은 미터이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LengthUnit {
    Meter,
    Kilometer,
    Centimeter,
    Millimeter,
    Micrometer,
    Nanometer,
    Picometer,
    Angstrom,
    Bohr,
    Inch,
    Foot,
    Yard,
    Mile,
}

impl UnitId for LengthUnit {
    const QUANTITY: &'static str = "길이";
    const ALL: &'static [Self] = &[
        LengthUnit::Meter,
        LengthUnit::Kilometer,
        LengthUnit::Centimeter,
        LengthUnit::Millimeter,
        LengthUnit::Micrometer,
        LengthUnit::Nanometer,
        LengthUnit::Picometer,
        LengthUnit::Angstrom,
        LengthUnit::Bohr,
        LengthUnit::Inch,
        LengthUnit::Foot,
        LengthUnit::Yard,
        LengthUnit::Mile,
    ];

    fn symbol(self) -> &'static str {
        match self {
            LengthUnit::Meter => "m",
            LengthUnit::Kilometer => "km",
            LengthUnit::Centimeter => "cm",
            LengthUnit::Millimeter => "mm",
            LengthUnit::Micrometer => "um",
            LengthUnit::Nanometer => "nm",
            LengthUnit::Picometer => "pm",
            LengthUnit::Angstrom => "A",
            LengthUnit::Bohr => "bohr",
            LengthUnit::Inch => "in",
            LengthUnit::Foot => "ft",
            LengthUnit::Yard => "yd",
            LengthUnit::Mile => "mi",
        }
    }

    fn aliases(self) -> &'static [&'static str] {
        match self {
            LengthUnit::Meter => &["meter", "metre"],
            LengthUnit::Micrometer => &["µm", "micron"],
            LengthUnit::Angstrom => &["å", "angstrom"],
            LengthUnit::Bohr => &["a0"],
            LengthUnit::Inch => &["inch"],
            LengthUnit::Foot => &["foot", "feet"],
            LengthUnit::Yard => &["yard"],
            LengthUnit::Mile => &["mile"],
            _ => &[],
        }
    }

    fn ordinal(self) -> usize {
        self as usize
    }
}

/// 길이 물리량.
#[derive(Debug, Clone, Copy)]
pub struct Length;

impl Quantity for Length {
    type Unit = LengthUnit;
    const NAME: &'static str = "length";
    const CANONICAL: LengthUnit = LengthUnit::Meter;

    fn scale(unit: LengthUnit) -> f64 {
        match unit {
            LengthUnit::Meter => 1.0,
            LengthUnit::Kilometer => 1.0e3,
            LengthUnit::Centimeter => 1.0e-2,
            LengthUnit::Millimeter => 1.0e-3,
            LengthUnit::Micrometer => 1.0e-6,
            LengthUnit::Nanometer => 1.0e-9,
            LengthUnit::Picometer => 1.0e-12,
            LengthUnit::Angstrom => 1.0e-10,
            LengthUnit::Bohr => CONSTANTS_SI.a0,
            LengthUnit::Inch => 0.0254,
            LengthUnit::Foot => 0.3048,
            LengthUnit::Yard => 0.9144,
            LengthUnit::Mile => 1609.344,
        }
    }
}

/// 길이를 다른 단위로 변환한다.
pub fn convert_length<V: Magnitude>(value: V, from: LengthUnit, to: LengthUnit) -> V {
    Length::convert(value, from, to)
}
