//! 반도체 캐리어 수송 모델.

pub mod mobility;

pub use mobility::{
    impurity_scattering_mobility, lattice_scattering_mobility, CarrierMobilityModel,
    ImpurityMobilityParameters, LatticeMobilityParameters, SemiconductorMobility,
};
