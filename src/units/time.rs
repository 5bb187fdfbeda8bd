use serde::{Deserialize, Serialize};

use crate::constants::ATOMIC_TIME_S;
use crate::quantity::{Magnitude, Quantity, UnitId};

/// 시간 단위. 내부 기준은 초(s)이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TimeUnit {
    Second,
    Millisecond,
    Microsecond,
    Nanosecond,
    Picosecond,
    Femtosecond,
    Minute,
    Hour,
    Day,
    /// 원자 시간 단위 t0 = ħ / Eh
    Atomic,
}

impl UnitId for TimeUnit {
    const QUANTITY: &'static str = "시간";
    const ALL: &'static [Self] = &[
        TimeUnit::Second,
        TimeUnit::Millisecond,
        TimeUnit::Microsecond,
        TimeUnit::Nanosecond,
        TimeUnit::Picosecond,
        TimeUnit::Femtosecond,
        TimeUnit::Minute,
        TimeUnit::Hour,
        TimeUnit::Day,
        TimeUnit::Atomic,
    ];

    fn symbol(self) -> &'static str {
        match self {
            TimeUnit::Second => "s",
            TimeUnit::Millisecond => "ms",
            TimeUnit::Microsecond => "us",
            TimeUnit::Nanosecond => "ns",
            TimeUnit::Picosecond => "ps",
            TimeUnit::Femtosecond => "fs",
            TimeUnit::Minute => "min",
            TimeUnit::Hour => "hr",
            TimeUnit::Day => "day",
            TimeUnit::Atomic => "t0",
        }
    }

    fn aliases(self) -> &'static [&'static str] {
        match self {
            TimeUnit::Second => &["sec", "second"],
            TimeUnit::Microsecond => &["µs"],
            TimeUnit::Hour => &["h", "hour"],
            TimeUnit::Day => &["d"],
            TimeUnit::Atomic => &["atomic", "a.u."],
            _ => &[],
        }
    }

    fn ordinal(self) -> usize {
        self as usize
    }
}

/// 시간 물리량.
#[derive(Debug, Clone, Copy)]
pub struct Time;

impl Quantity for Time {
    type Unit = TimeUnit;
    const NAME: &'static str = "time";
    const CANONICAL: TimeUnit = TimeUnit::Second;

    fn scale(unit: TimeUnit) -> f64 {
        match unit {
            TimeUnit::Second => 1.0,
            TimeUnit::Millisecond => 1.0e-3,
            TimeUnit::Microsecond => 1.0e-6,
            TimeUnit::Nanosecond => 1.0e-9,
            TimeUnit::Picosecond => 1.0e-12,
            TimeUnit::Femtosecond => 1.0e-15,
            TimeUnit::Minute => 60.0,
            TimeUnit::Hour => 3600.0,
            TimeUnit::Day => 86_400.0,
            TimeUnit::Atomic => ATOMIC_TIME_S,
        }
    }
}

/// 시간을 변환한다.
pub fn convert_time<V: Magnitude>(value: V, from: TimeUnit, to: TimeUnit) -> V {
    Time::convert(value, from, to)
}
