//! 증착 기하와 면 증발원 두께 분포.

pub mod geometry;
pub mod surface_source;

pub use geometry::{plane_point_cos_theta, plane_point_distance};
pub use surface_source::{DiskPolarGrid, DiskSourceParams, SurfaceSourceDiskDeposition};
