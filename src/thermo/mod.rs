//! 박막 증착 열역학: 증기압, 증발 플럭스, 혼합물/활동도.

pub mod activity;
pub mod hertz_knudsen;
pub mod mixture;
pub mod species;
pub mod vapor_pressure;

pub use activity::{
    ActivityModel, IdealSolution, PartialPressureFromActivity, PureCurve, RegularSolutionBinary,
};
pub use hertz_knudsen::HertzKnudsenLangmuir;
pub use mixture::MolarMixture;
pub use species::Species;
pub use vapor_pressure::{
    pressure_array, pressure_pa_array, AntoineCurve, ClausiusClapeyronCurve, VaporPressureCurve,
};
