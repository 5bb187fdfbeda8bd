use serde::{Deserialize, Serialize};

use crate::constants::{ATOMIC_TIME_S, CONSTANTS_SI};
use crate::quantity::{Magnitude, Quantity, UnitId};

/// 속도 단위. 내부 기준은 m/s이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VelocityUnit {
    MeterPerSecond,
    CentimeterPerSecond,
    AngstromPerFemtosecond,
    AngstromPerPicosecond,
    /// a0 / t0
    BohrPerAtomicTime,
    /// `BohrPerAtomicTime`와 같은 값
    Atomic,
    FootPerSecond,
    KilometerPerHour,
}

impl UnitId for VelocityUnit {
    const QUANTITY: &'static str = "속도";
    const ALL: &'static [Self] = &[
        VelocityUnit::MeterPerSecond,
        VelocityUnit::CentimeterPerSecond,
        VelocityUnit::AngstromPerFemtosecond,
        VelocityUnit::AngstromPerPicosecond,
        VelocityUnit::BohrPerAtomicTime,
        VelocityUnit::Atomic,
        VelocityUnit::FootPerSecond,
        VelocityUnit::KilometerPerHour,
    ];

    fn symbol(self) -> &'static str {
        match self {
            VelocityUnit::MeterPerSecond => "m/s",
            VelocityUnit::CentimeterPerSecond => "cm/s",
            VelocityUnit::AngstromPerFemtosecond => "A/fs",
            VelocityUnit::AngstromPerPicosecond => "A/ps",
            VelocityUnit::BohrPerAtomicTime => "bohr/t0",
            VelocityUnit::Atomic => "atomic",
            VelocityUnit::FootPerSecond => "ft/s",
            VelocityUnit::KilometerPerHour => "km/h",
        }
    }

    fn aliases(self) -> &'static [&'static str] {
        match self {
            VelocityUnit::MeterPerSecond => &["mps"],
            VelocityUnit::AngstromPerFemtosecond => &["a/fs", "å/fs"],
            VelocityUnit::AngstromPerPicosecond => &["a/ps", "å/ps"],
            VelocityUnit::FootPerSecond => &["fps"],
            VelocityUnit::KilometerPerHour => &["kph"],
            _ => &[],
        }
    }

    fn ordinal(self) -> usize {
        self as usize
    }
}

/// 속도 물리량.
#[derive(Debug, Clone, Copy)]
pub struct Velocity;

impl Quantity for Velocity {
    type Unit = VelocityUnit;
    const NAME: &'static str = "velocity";
    const CANONICAL: VelocityUnit = VelocityUnit::MeterPerSecond;

    fn scale(unit: VelocityUnit) -> f64 {
        match unit {
            VelocityUnit::MeterPerSecond => 1.0,
            VelocityUnit::CentimeterPerSecond => 1.0e-2,
            VelocityUnit::AngstromPerFemtosecond => 1.0e-10 / 1.0e-15,
            VelocityUnit::AngstromPerPicosecond => 1.0e-10 / 1.0e-12,
            VelocityUnit::BohrPerAtomicTime | VelocityUnit::Atomic => {
                CONSTANTS_SI.a0 / ATOMIC_TIME_S
            }
            VelocityUnit::FootPerSecond => 0.3048,
            VelocityUnit::KilometerPerHour => 1.0 / 3.6,
        }
    }
}

/// 속도를 변환한다.
pub fn convert_velocity<V: Magnitude>(value: V, from: VelocityUnit, to: VelocityUnit) -> V {
    Velocity::convert(value, from, to)
}
