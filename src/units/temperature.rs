use serde::{Deserialize, Serialize};

use crate::quantity::{Magnitude, Quantity, UnitId};

/// 온도 단위를 정의한다. 내부 기준은 켈빈이며 아핀 변환(배율 + 오프셋)을 사용한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TemperatureUnit {
    Kelvin,
    Celsius,
    MilliKelvin,
    Fahrenheit,
    Rankine,
}

impl UnitId for TemperatureUnit {
    const QUANTITY: &'static str = "온도";
    const ALL: &'static [Self] = &[
        TemperatureUnit::Kelvin,
        TemperatureUnit::Celsius,
        TemperatureUnit::MilliKelvin,
        TemperatureUnit::Fahrenheit,
        TemperatureUnit::Rankine,
    ];

    fn symbol(self) -> &'static str {
        match self {
            TemperatureUnit::Kelvin => "K",
            TemperatureUnit::Celsius => "C",
            TemperatureUnit::MilliKelvin => "mK",
            TemperatureUnit::Fahrenheit => "F",
            TemperatureUnit::Rankine => "R",
        }
    }

    fn aliases(self) -> &'static [&'static str] {
        match self {
            TemperatureUnit::Kelvin => &["k", "kelvin"],
            TemperatureUnit::Celsius => &["c", "celsius", "°c"],
            TemperatureUnit::MilliKelvin => &["millikelvin"],
            TemperatureUnit::Fahrenheit => &["f", "fahrenheit", "°f"],
            TemperatureUnit::Rankine => &["r", "rankine", "°r"],
        }
    }

    fn ordinal(self) -> usize {
        self as usize
    }
}

/// 온도 물리량. `T[K] = scale * T[unit] + offset`.
#[derive(Debug, Clone, Copy)]
pub struct Temperature;

impl Quantity for Temperature {
    type Unit = TemperatureUnit;
    const NAME: &'static str = "temperature";
    const CANONICAL: TemperatureUnit = TemperatureUnit::Kelvin;

    fn scale(unit: TemperatureUnit) -> f64 {
        match unit {
            TemperatureUnit::Kelvin | TemperatureUnit::Celsius => 1.0,
            TemperatureUnit::MilliKelvin => 1.0e-3,
            TemperatureUnit::Fahrenheit | TemperatureUnit::Rankine => 5.0 / 9.0,
        }
    }

    fn offset(unit: TemperatureUnit) -> f64 {
        match unit {
            TemperatureUnit::Celsius => 273.15,
            TemperatureUnit::Fahrenheit => 459.67 * 5.0 / 9.0,
            TemperatureUnit::Kelvin | TemperatureUnit::MilliKelvin | TemperatureUnit::Rankine => {
                0.0
            }
        }
    }
}

/// 주어진 값을 켈빈으로 변환한다.
pub fn to_kelvin<V: Magnitude>(value: V, unit: TemperatureUnit) -> V {
    Temperature::to_canonical(value, unit)
}

/// 켈빈 값을 원하는 단위로 변환한다.
pub fn from_kelvin<V: Magnitude>(value_k: V, unit: TemperatureUnit) -> V {
    Temperature::from_canonical(value_k, unit)
}

/// 온도를 서로 다른 단위로 변환한다.
pub fn convert_temperature<V: Magnitude>(
    value: V,
    from: TemperatureUnit,
    to: TemperatureUnit,
) -> V {
    Temperature::convert(value, from, to)
}
