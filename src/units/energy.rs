use serde::{Deserialize, Serialize};

use crate::constants::{CONSTANTS_SI, FT_LBF_J, HARTREE_J, KCAL_J};
use crate::quantity::{Magnitude, Quantity, UnitId};

/// 에너지 단위. 내부 기준은 줄(J)이다.
/// eV 계열은 1 eV = q J 로 환산한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EnergyUnit {
    Joule,
    Kilojoule,
    Megajoule,
    MilliElectronVolt,
    ElectronVolt,
    KiloElectronVolt,
    MegaElectronVolt,
    GigaElectronVolt,
    Erg,
    FootPoundForce,
    InchPoundForce,
    Hartree,
    KiloCalorie,
    /// 입자 하나당 kcal/mol (LAMMPS real)
    KiloCaloriePerMole,
}

impl UnitId for EnergyUnit {
    const QUANTITY: &'static str = "에너지";
    const ALL: &'static [Self] = &[
        EnergyUnit::Joule,
        EnergyUnit::Kilojoule,
        EnergyUnit::Megajoule,
        EnergyUnit::MilliElectronVolt,
        EnergyUnit::ElectronVolt,
        EnergyUnit::KiloElectronVolt,
        EnergyUnit::MegaElectronVolt,
        EnergyUnit::GigaElectronVolt,
        EnergyUnit::Erg,
        EnergyUnit::FootPoundForce,
        EnergyUnit::InchPoundForce,
        EnergyUnit::Hartree,
        EnergyUnit::KiloCalorie,
        EnergyUnit::KiloCaloriePerMole,
    ];

    fn symbol(self) -> &'static str {
        match self {
            EnergyUnit::Joule => "J",
            EnergyUnit::Kilojoule => "kJ",
            EnergyUnit::Megajoule => "MJ",
            EnergyUnit::MilliElectronVolt => "meV",
            EnergyUnit::ElectronVolt => "eV",
            EnergyUnit::KiloElectronVolt => "keV",
            EnergyUnit::MegaElectronVolt => "MeV",
            EnergyUnit::GigaElectronVolt => "GeV",
            EnergyUnit::Erg => "erg",
            EnergyUnit::FootPoundForce => "ft*lbf",
            EnergyUnit::InchPoundForce => "in*lbf",
            EnergyUnit::Hartree => "Ha",
            EnergyUnit::KiloCalorie => "kcal",
            EnergyUnit::KiloCaloriePerMole => "kcal/mol",
        }
    }

    fn aliases(self) -> &'static [&'static str] {
        match self {
            EnergyUnit::Joule => &["j", "joule"],
            EnergyUnit::Kilojoule => &["kj", "kilojoule"],
            EnergyUnit::ElectronVolt => &["ev"],
            EnergyUnit::KiloElectronVolt => &["kev"],
            EnergyUnit::GigaElectronVolt => &["gev"],
            EnergyUnit::FootPoundForce => &["ft-lbf", "ft·lbf"],
            EnergyUnit::InchPoundForce => &["in-lbf", "in·lbf"],
            EnergyUnit::Hartree => &["ha", "hartree", "eh"],
            EnergyUnit::KiloCalorie => &["kilocalorie"],
            _ => &[],
        }
    }

    fn ordinal(self) -> usize {
        self as usize
    }
}

/// 에너지 물리량.
#[derive(Debug, Clone, Copy)]
pub struct Energy;

impl Quantity for Energy {
    type Unit = EnergyUnit;
    const NAME: &'static str = "energy";
    const CANONICAL: EnergyUnit = EnergyUnit::Joule;

    fn scale(unit: EnergyUnit) -> f64 {
        let q = CONSTANTS_SI.q;
        match unit {
            EnergyUnit::Joule => 1.0,
            EnergyUnit::Kilojoule => 1.0e3,
            EnergyUnit::Megajoule => 1.0e6,
            EnergyUnit::MilliElectronVolt => 1.0e-3 * q,
            EnergyUnit::ElectronVolt => q,
            EnergyUnit::KiloElectronVolt => 1.0e3 * q,
            EnergyUnit::MegaElectronVolt => 1.0e6 * q,
            EnergyUnit::GigaElectronVolt => 1.0e9 * q,
            EnergyUnit::Erg => 1.0e-7,
            EnergyUnit::FootPoundForce => FT_LBF_J,
            EnergyUnit::InchPoundForce => FT_LBF_J / 12.0,
            EnergyUnit::Hartree => HARTREE_J,
            EnergyUnit::KiloCalorie => KCAL_J,
            EnergyUnit::KiloCaloriePerMole => KCAL_J / CONSTANTS_SI.n_a,
        }
    }
}

/// 에너지를 변환한다.
pub fn convert_energy<V: Magnitude>(value: V, from: EnergyUnit, to: EnergyUnit) -> V {
    Energy::convert(value, from, to)
}
