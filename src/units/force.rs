use serde::{Deserialize, Serialize};

use crate::constants::{CONSTANTS_SI, HARTREE_J, KCAL_J};
use crate::quantity::{Magnitude, Quantity, UnitId};

/// 힘 단위. 내부 기준은 뉴턴(N)이다. lbf는 절대 힘 단위이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ForceUnit {
    Newton,
    KiloNewton,
    MegaNewton,
    Dyne,
    PoundForce,
    /// eV/Å (LAMMPS metal)
    ElectronVoltPerAngstrom,
    /// 입자 하나당 kcal/(mol·Å) (LAMMPS real)
    KiloCaloriePerMoleAngstrom,
    /// Ha/bohr (원자 단위)
    HartreePerBohr,
}

impl UnitId for ForceUnit {
    const QUANTITY: &'static str = "힘";
    const ALL: &'static [Self] = &[
        ForceUnit::Newton,
        ForceUnit::KiloNewton,
        ForceUnit::MegaNewton,
        ForceUnit::Dyne,
        ForceUnit::PoundForce,
        ForceUnit::ElectronVoltPerAngstrom,
        ForceUnit::KiloCaloriePerMoleAngstrom,
        ForceUnit::HartreePerBohr,
    ];

    fn symbol(self) -> &'static str {
        match self {
            ForceUnit::Newton => "N",
            ForceUnit::KiloNewton => "kN",
            ForceUnit::MegaNewton => "MN",
            ForceUnit::Dyne => "dyn",
            ForceUnit::PoundForce => "lbf",
            ForceUnit::ElectronVoltPerAngstrom => "eV/A",
            ForceUnit::KiloCaloriePerMoleAngstrom => "kcal/mol/A",
            ForceUnit::HartreePerBohr => "Ha/bohr",
        }
    }

    fn aliases(self) -> &'static [&'static str] {
        match self {
            ForceUnit::Newton => &["n", "newton"],
            ForceUnit::KiloNewton => &["kn"],
            ForceUnit::Dyne => &["dyne"],
            ForceUnit::ElectronVoltPerAngstrom => &["ev/a", "ev/å"],
            ForceUnit::HartreePerBohr => &["ha/bohr", "atomic"],
            _ => &[],
        }
    }

    fn ordinal(self) -> usize {
        self as usize
    }
}

/// 힘 물리량.
#[derive(Debug, Clone, Copy)]
pub struct Force;

impl Quantity for Force {
    type Unit = ForceUnit;
    const NAME: &'static str = "force";
    const CANONICAL: ForceUnit = ForceUnit::Newton;

    fn scale(unit: ForceUnit) -> f64 {
        match unit {
            ForceUnit::Newton => 1.0,
            ForceUnit::KiloNewton => 1.0e3,
            ForceUnit::MegaNewton => 1.0e6,
            ForceUnit::Dyne => 1.0e-5,
            ForceUnit::PoundForce => 4.448_221_615_260_5,
            ForceUnit::ElectronVoltPerAngstrom => CONSTANTS_SI.q / 1.0e-10,
            ForceUnit::KiloCaloriePerMoleAngstrom => KCAL_J / CONSTANTS_SI.n_a / 1.0e-10,
            ForceUnit::HartreePerBohr => HARTREE_J / CONSTANTS_SI.a0,
        }
    }
}

/// 힘을 변환한다.
pub fn convert_force<V: Magnitude>(value: V, from: ForceUnit, to: ForceUnit) -> V {
    Force::convert(value, from, to)
}
