use serde::{Deserialize, Serialize};

use crate::constants::{CONSTANTS_SI, FT_LBF_J, HARTREE_J, KCAL_J};
use crate::quantity::{Magnitude, Quantity, UnitId};

/// 토크 단위. 내부 기준은 N·m이다.
///
/// 차원은 에너지와 같지만 별도 물리량으로 다룬다. eV, Ha, kcal 표현은
/// 원자 시뮬레이션 관례를 위한 것이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TorqueUnit {
    NewtonMeter,
    DyneCentimeter,
    FootPoundForce,
    InchPoundForce,
    ElectronVolt,
    Hartree,
    KiloCalorie,
    /// 입자 하나당 kcal/mol
    KiloCaloriePerMole,
}

impl UnitId for TorqueUnit {
    const QUANTITY: &'static str = "토크";
    const ALL: &'static [Self] = &[
        TorqueUnit::NewtonMeter,
        TorqueUnit::DyneCentimeter,
        TorqueUnit::FootPoundForce,
        TorqueUnit::InchPoundForce,
        TorqueUnit::ElectronVolt,
        TorqueUnit::Hartree,
        TorqueUnit::KiloCalorie,
        TorqueUnit::KiloCaloriePerMole,
    ];

    fn symbol(self) -> &'static str {
        match self {
            TorqueUnit::NewtonMeter => "N*m",
            TorqueUnit::DyneCentimeter => "dyn*cm",
            TorqueUnit::FootPoundForce => "ft*lbf",
            TorqueUnit::InchPoundForce => "in*lbf",
            TorqueUnit::ElectronVolt => "eV",
            TorqueUnit::Hartree => "Ha",
            TorqueUnit::KiloCalorie => "kcal",
            TorqueUnit::KiloCaloriePerMole => "kcal/mol",
        }
    }

    fn aliases(self) -> &'static [&'static str] {
        match self {
            TorqueUnit::NewtonMeter => &["n·m", "n-m"],
            TorqueUnit::DyneCentimeter => &["dyn·cm"],
            TorqueUnit::FootPoundForce => &["ft-lbf", "ft·lbf"],
            TorqueUnit::InchPoundForce => &["in-lbf", "in·lbf"],
            TorqueUnit::ElectronVolt => &["ev"],
            TorqueUnit::Hartree => &["ha", "hartree"],
            _ => &[],
        }
    }

    fn ordinal(self) -> usize {
        self as usize
    }
}

/// 토크 물리량.
#[derive(Debug, Clone, Copy)]
pub struct Torque;

impl Quantity for Torque {
    type Unit = TorqueUnit;
    const NAME: &'static str = "torque";
    const CANONICAL: TorqueUnit = TorqueUnit::NewtonMeter;

    fn scale(unit: TorqueUnit) -> f64 {
        match unit {
            TorqueUnit::NewtonMeter => 1.0,
            // (1e-5 N)(1e-2 m)
            TorqueUnit::DyneCentimeter => 1.0e-7,
            TorqueUnit::FootPoundForce => FT_LBF_J,
            TorqueUnit::InchPoundForce => FT_LBF_J / 12.0,
            TorqueUnit::ElectronVolt => CONSTANTS_SI.q,
            TorqueUnit::Hartree => HARTREE_J,
            TorqueUnit::KiloCalorie => KCAL_J,
            TorqueUnit::KiloCaloriePerMole => KCAL_J / CONSTANTS_SI.n_a,
        }
    }
}

/// 토크를 변환한다.
pub fn convert_torque<V: Magnitude>(value: V, from: TorqueUnit, to: TorqueUnit) -> V {
    Torque::convert(value, from, to)
}
