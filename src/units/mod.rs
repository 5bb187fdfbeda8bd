//! 단위 정의 및 변환 모듈 모음.

pub mod charge;
pub mod density;
pub mod dipole;
pub mod electric_field;
pub mod energy;
pub mod force;
pub mod length;
pub mod mass;
pub mod molar_mass;
pub mod pressure;
pub mod systems;
pub mod temperature;
pub mod time;
pub mod torque;
pub mod velocity;
pub mod viscosity;

pub use charge::{convert_charge, Charge, ChargeUnit};
pub use density::{convert_density, from_canonical_density, to_canonical_density, DensityUnit};
pub use dipole::{convert_dipole, Dipole, DipoleUnit};
pub use electric_field::{convert_electric_field, ElectricField, ElectricFieldUnit};
pub use energy::{convert_energy, Energy, EnergyUnit};
pub use force::{convert_force, Force, ForceUnit};
pub use length::{convert_length, Length, LengthUnit};
pub use mass::{convert_mass, Mass, MassUnit};
pub use molar_mass::{
    convert_molar_mass, convert_particle_mass, molar_from_particle, particle_from_molar, MolarMass,
    MolarMassUnit, ParticleMass, ParticleMassUnit,
};
pub use pressure::{convert_pressure, from_pascal, to_pascal, Pressure, PressureUnit};
pub use systems::{UnitSystem, UnitSystemKind};
pub use temperature::{convert_temperature, from_kelvin, to_kelvin, Temperature, TemperatureUnit};
pub use time::{convert_time, Time, TimeUnit};
pub use torque::{convert_torque, Torque, TorqueUnit};
pub use velocity::{convert_velocity, Velocity, VelocityUnit};
pub use viscosity::{convert_viscosity, Viscosity, ViscosityUnit};
