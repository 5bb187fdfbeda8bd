//! 물리량/단위 추상화. 각 물리량은 기준 단위와 단위별 배율(온도는 오프셋 포함)을 가진다.

use nalgebra::DVector;

use crate::error::{PhysError, Result};

/// 다루는 물리량 종류를 나타낸다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuantityKind {
    Length,
    Mass,
    Time,
    Pressure,
    Temperature,
    Energy,
    Force,
    Charge,
    Dipole,
    /// 밀도는 공간 차원(1, 2, 3)을 반드시 함께 지정한다.
    Density { dim: u8 },
    ElectricField,
    Velocity,
    Viscosity,
    Torque,
    MolarMass,
    ParticleMass,
}

/// 내부 기준 단위로 환산된 값을 담는 컨테이너.
///
/// 각 kind에 따라 `value_base`는 기준 단위(길이=m, 압력=Pa, 온도=K,
/// 에너지=J, 몰질량=kg/mol, 밀도=kg/m^dim 등)로 저장한다.
#[derive(Debug, Clone, Copy)]
pub struct QuantityValue {
    pub kind: QuantityKind,
    pub value_base: f64,
}

/// 닫힌 단위 열거형이 구현하는 공통 인터페이스.
///
/// `ALL`의 순서가 곧 서수(ordinal)이다. 각 enum은 같은 순서로 선언한다.
pub trait UnitId: Copy + Eq + std::fmt::Debug + 'static {
    /// 소속 물리량 이름 (오류 메시지용)
    const QUANTITY: &'static str;
    /// 서수 순서대로 나열한 전체 단위
    const ALL: &'static [Self];

    /// 표준 기호. 대소문자를 구분한다 (meV/MeV).
    fn symbol(self) -> &'static str;

    /// 대소문자 구분 없이 허용하는 별칭. 소문자로만 적는다.
    fn aliases(self) -> &'static [&'static str] {
        &[]
    }

    fn ordinal(self) -> usize;

    /// 서수로부터 단위를 찾는다. 범위 밖이면 지원하지 않는 단위 오류.
    fn from_ordinal(index: usize) -> Result<Self> {
        Self::ALL
            .get(index)
            .copied()
            .ok_or_else(|| PhysError::unsupported(Self::QUANTITY, format!("#{index}")))
    }

    /// 단위 문자열을 enum으로 변환한다. 기호는 정확히, 별칭은 소문자로 비교한다.
    fn parse(s: &str) -> Result<Self> {
        let s = s.trim();
        if let Some(u) = Self::ALL.iter().find(|u| u.symbol() == s) {
            return Ok(*u);
        }
        let lower = s.to_lowercase();
        Self::ALL
            .iter()
            .copied()
            .find(|u| u.aliases().iter().any(|a| *a == lower))
            .ok_or_else(|| PhysError::unsupported(Self::QUANTITY, s))
    }
}

/// 스칼라 또는 고정 형상 배열 값. 변환은 원소별로 수행하며 형상을 보존한다.
pub trait Magnitude: Clone {
    fn as_values(&self) -> &[f64];
    fn as_values_mut(&mut self) -> &mut [f64];

    fn len(&self) -> usize {
        self.as_values().len()
    }

    fn is_empty(&self) -> bool {
        self.as_values().is_empty()
    }

    fn map<F: Fn(f64) -> f64>(mut self, f: F) -> Self {
        for v in self.as_values_mut() {
            *v = f(*v);
        }
        self
    }

    fn try_map<F: Fn(f64) -> Result<f64>>(mut self, f: F) -> Result<Self> {
        for v in self.as_values_mut() {
            *v = f(*v)?;
        }
        Ok(self)
    }

    /// 같은 형상의 두 값을 원소별로 결합한다. 길이가 다르면 검증 오류.
    fn try_zip_map<F: Fn(f64, f64) -> Result<f64>>(mut self, other: &Self, f: F) -> Result<Self> {
        if self.len() != other.len() {
            return Err(PhysError::validation(format!(
                "배열 길이가 다릅니다: {} != {}",
                self.len(),
                other.len()
            )));
        }
        for (v, o) in self.as_values_mut().iter_mut().zip(other.as_values()) {
            *v = f(*v, *o)?;
        }
        Ok(self)
    }

    fn zip_map<F: Fn(f64, f64) -> f64>(self, other: &Self, f: F) -> Result<Self> {
        self.try_zip_map(other, |a, b| Ok(f(a, b)))
    }

    fn any<P: Fn(f64) -> bool>(&self, pred: P) -> bool {
        self.as_values().iter().any(|v| pred(*v))
    }
}

impl Magnitude for f64 {
    fn as_values(&self) -> &[f64] {
        std::slice::from_ref(self)
    }

    fn as_values_mut(&mut self) -> &mut [f64] {
        std::slice::from_mut(self)
    }
}

impl<const N: usize> Magnitude for [f64; N] {
    fn as_values(&self) -> &[f64] {
        &self[..]
    }

    fn as_values_mut(&mut self) -> &mut [f64] {
        &mut self[..]
    }
}

impl Magnitude for Vec<f64> {
    fn as_values(&self) -> &[f64] {
        &self[..]
    }

    fn as_values_mut(&mut self) -> &mut [f64] {
        &mut self[..]
    }
}

impl Magnitude for DVector<f64> {
    fn as_values(&self) -> &[f64] {
        self.as_slice()
    }

    fn as_values_mut(&mut self) -> &mut [f64] {
        self.as_mut_slice()
    }
}

/// 물리량 하나. 기준 단위 경유 변환을 기본 구현으로 제공한다.
///
/// `T[기준] = scale * T[unit] + offset` 관계를 따른다. 오프셋은 온도에서만 0이 아니다.
pub trait Quantity {
    type Unit: UnitId;
    const NAME: &'static str;
    const CANONICAL: Self::Unit;

    fn scale(unit: Self::Unit) -> f64;

    fn offset(_unit: Self::Unit) -> f64 {
        0.0
    }

    /// 기준 단위로 변환한다.
    fn to_canonical<V: Magnitude>(value: V, unit: Self::Unit) -> V {
        let s = Self::scale(unit);
        let o = Self::offset(unit);
        value.map(|v| v * s + o)
    }

    /// 기준 단위 값을 원하는 단위로 변환한다.
    fn from_canonical<V: Magnitude>(value: V, unit: Self::Unit) -> V {
        let s = Self::scale(unit);
        let o = Self::offset(unit);
        value.map(|v| (v - o) / s)
    }

    /// 단위 간 변환. 같은 단위면 값을 그대로 돌려준다.
    fn convert<V: Magnitude>(value: V, from: Self::Unit, to: Self::Unit) -> V {
        if from == to {
            return value;
        }
        Self::from_canonical(Self::to_canonical(value, from), to)
    }
}
