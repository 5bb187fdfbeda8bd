//! 물리 상수 컨테이너 (SI, Gaussian CGS).
//!
//! 두 컨테이너 모두 `const` 항목이므로 컴파일 시점에 고정되며 변경할 수 없다.
//! CGS 쪽의 `eps0`는 Gaussian 단위계에서 쓰이지 않으므로 1.0 자리표시값이다.

use std::f64::consts::PI;

/// 물리 상수 묶음. 단위는 컨테이너(SI/CGS)에 따라 다르다.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhysicalConstants {
    /// 단위계 이름
    pub name: &'static str,
    /// 보어 반지름 [m | cm]
    pub a0: f64,
    /// 기본 전하 [C | statC]
    pub q: f64,
    /// 볼츠만 상수 [J/K | erg/K]
    pub k_b: f64,
    /// 진공 유전율 [F/m | 자리표시 1.0]
    pub eps0: f64,
    /// 전자 정지 질량 [kg | g]
    pub me0: f64,
    /// 아보가드로 수 [1/mol]
    pub n_a: f64,
    /// 기체 상수 [J/(mol K) | erg/(mol K)]
    pub r_g: f64,
    /// 플랑크 상수 [J s | erg s]
    pub h: f64,
    /// 환산 플랑크 상수 h / 2π
    pub hbar: f64,
    /// 원자 질량 상수 (dalton) [kg | g]
    pub m_u: f64,
    /// m_u의 표준 불확도
    pub m_u_u: f64,
}

const H_SI: f64 = 6.626_070_15e-34;
const H_CGS: f64 = 6.626_070_15e-27;

/// SI 단위 물리 상수.
pub const CONSTANTS_SI: PhysicalConstants = PhysicalConstants {
    name: "SI",
    a0: 5.291_772_109_03e-11,
    q: 1.602_176_634e-19,
    k_b: 1.380_649e-23,
    eps0: 8.854_187_812e-12,
    me0: 9.109_383_701_5e-31,
    n_a: 6.022_140_76e23,
    r_g: 8.314_462_618,
    h: H_SI,
    hbar: H_SI / (2.0 * PI),
    m_u: 1.660_539_068_92e-27,
    m_u_u: 0.000_000_000_52e-27,
};

/// Gaussian CGS(esu) 단위 물리 상수.
pub const CONSTANTS_CGS: PhysicalConstants = PhysicalConstants {
    name: "CGS",
    a0: 5.291_772_109_03e-9,
    q: 4.803_204_71e-10,
    k_b: 1.380_649e-16,
    eps0: 1.0,
    me0: 9.109_383_701_5e-28,
    n_a: 6.022_140_76e23,
    r_g: 8.314_462_618e7,
    h: H_CGS,
    hbar: H_CGS / (2.0 * PI),
    m_u: 1.660_539_068_92e-24,
    m_u_u: 0.000_000_000_52e-24,
};

/// 하트리 에너지 Eh [J]
pub const HARTREE_J: f64 = 4.359_744_722_207_1e-18;
/// 원자 시간 단위 t0 = ħ / Eh [s]
pub const ATOMIC_TIME_S: f64 = 2.418_884_326_585_7e-17;
/// 빛의 속도 [cm/s] (esu 환산용)
pub const C_CM_PER_S: f64 = 2.997_924_58e10;
/// 1 statC = 10 / c C (c는 cm/s)
pub const ESU_TO_C: f64 = 10.0 / C_CM_PER_S;
/// 열화학 칼로리 1 kcal [J]
pub const KCAL_J: f64 = 4184.0;
/// 1 ft·lbf [J]
pub const FT_LBF_J: f64 = 1.355_817_948_331_4;
