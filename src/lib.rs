//! 반도체/박막 공정용 물리 공식과 단위 변환 라이브러리.
//!
//! 단위 변환은 `units`와 `conversion`, 물리 모델은 `semiconductor`, `thermo`,
//! `deposition`, 격자 양자역학은 `discretization`과 `qm`에 있다.

pub mod config;
pub mod constants;
pub mod conversion;
pub mod deposition;
pub mod discretization;
pub mod error;
pub mod qm;
pub mod quantity;
pub mod semiconductor;
pub mod thermo;
pub mod units;

pub use error::{ErrorKind, PhysError, Result};
pub use quantity::{Magnitude, Quantity, QuantityKind, QuantityValue, UnitId};
