//! 평형 증기압 상관식.
//!
//! 평가 경로는 트레이트의 기본 구현 하나로 고정되어 있다:
//! 입력 단위 -> K 변환, T > 0 검사, 유효 범위 검사, 상관식 계산(고유 압력 단위), Pa 변환.
//! 각 상관식은 K 온도에서 고유 압력 단위 값을 계산하는 부분만 구현한다.

use crate::error::{PhysError, Result};
use crate::quantity::Magnitude;
use crate::units::pressure::{from_pascal, to_pascal, PressureUnit};
use crate::units::temperature::{from_kelvin, to_kelvin, TemperatureUnit};

/// 평형 증기압 곡선.
pub trait VaporPressureCurve {
    /// 공개 평가 함수가 받는 온도의 단위
    fn temperature_unit(&self) -> TemperatureUnit;

    /// 상관식 계수가 내놓는 압력 단위
    fn native_pressure_unit(&self) -> PressureUnit;

    /// 유효 온도 범위 (Tmin, Tmax) [K]
    fn valid_range_k(&self) -> Option<(f64, f64)>;

    /// 계수 출처
    fn source(&self) -> &str;

    /// K 온도에서 고유 압력 단위의 증기압. 호출 전에 온도 검사가 끝나 있어야 한다.
    fn native_pressure_from_kelvin(&self, t_k: f64) -> Result<f64>;

    /// `temperature_unit()` 단위의 온도에서 증기압 [Pa].
    fn pressure_pa(&self, t: f64, check_range: bool) -> Result<f64> {
        let t_k = to_kelvin(t, self.temperature_unit());
        check_temperature_k(t_k, self.valid_range_k(), check_range)?;
        let native = self.native_pressure_from_kelvin(t_k)?;
        Ok(to_pascal(native, self.native_pressure_unit()))
    }

    /// 원하는 압력 단위로 돌려준다.
    fn pressure(&self, t: f64, unit: PressureUnit, check_range: bool) -> Result<f64> {
        let p_pa = self.pressure_pa(t, check_range)?;
        Ok(from_pascal(p_pa, unit))
    }
}

/// 배열 온도에 대한 증기압 [Pa]. 형상을 보존한다.
pub fn pressure_pa_array<C, V>(curve: &C, t: V, check_range: bool) -> Result<V>
where
    C: VaporPressureCurve + ?Sized,
    V: Magnitude,
{
    t.try_map(|t| curve.pressure_pa(t, check_range))
}

/// 배열 온도에 대한 증기압을 원하는 단위로 돌려준다.
pub fn pressure_array<C, V>(curve: &C, t: V, unit: PressureUnit, check_range: bool) -> Result<V>
where
    C: VaporPressureCurve + ?Sized,
    V: Magnitude,
{
    t.try_map(|t| curve.pressure(t, unit, check_range))
}

/// T > 0 K와 (요청 시) 유효 범위를 검사한다.
pub(crate) fn check_temperature_k(
    t_k: f64,
    valid_range_k: Option<(f64, f64)>,
    check_range: bool,
) -> Result<()> {
    if !(t_k > 0.0) {
        return Err(PhysError::domain(format!("온도는 0 K보다 커야 합니다 (T={t_k} K)")));
    }
    if let Some((t_min, t_max)) = valid_range_k {
        let outside = t_k < t_min || t_k > t_max;
        if outside && check_range {
            return Err(PhysError::domain(format!(
                "T={t_k} K가 유효 범위 [{t_min}, {t_max}] K를 벗어났습니다"
            )));
        }
        if outside {
            tracing::warn!(t_k, t_min, t_max, "유효 범위 밖에서 증기압을 평가합니다");
        }
    }
    Ok(())
}

fn validate_range(t_min: f64, t_max: f64) -> Result<(f64, f64)> {
    if t_min.is_finite() && t_max.is_finite() && 0.0 < t_min && t_min < t_max {
        Ok((t_min, t_max))
    } else {
        Err(PhysError::validation(format!(
            "유효 범위는 0 < Tmin < Tmax 이어야 합니다 ({t_min}, {t_max})"
        )))
    }
}

/// 상용로그 Antoine 식 `log10(P_native) = A - B / (T_coeff + C)`.
///
/// `T_coeff`는 K 온도를 계수 표의 온도 단위(`coefficient_temperature_unit`)로 다시
/// 표현한 값이다. 기본값은 계수 K, 압력 bar, 입력 K이다.
#[derive(Debug, Clone, PartialEq)]
pub struct AntoineCurve {
    a: f64,
    b: f64,
    c: f64,
    coefficient_temperature_unit: TemperatureUnit,
    native_pressure_unit: PressureUnit,
    temperature_unit: TemperatureUnit,
    valid_range_k: Option<(f64, f64)>,
    source: String,
}

impl AntoineCurve {
    pub fn new(a: f64, b: f64, c: f64) -> Result<Self> {
        if !(a.is_finite() && b.is_finite() && c.is_finite()) {
            return Err(PhysError::validation(format!(
                "Antoine 계수는 유한해야 합니다 (A={a}, B={b}, C={c})"
            )));
        }
        Ok(Self {
            a,
            b,
            c,
            coefficient_temperature_unit: TemperatureUnit::Kelvin,
            native_pressure_unit: PressureUnit::Bar,
            temperature_unit: TemperatureUnit::Kelvin,
            valid_range_k: None,
            source: "unknown".to_string(),
        })
    }

    pub fn with_coefficient_temperature_unit(mut self, unit: TemperatureUnit) -> Self {
        self.coefficient_temperature_unit = unit;
        self
    }

    pub fn with_native_pressure_unit(mut self, unit: PressureUnit) -> Self {
        self.native_pressure_unit = unit;
        self
    }

    pub fn with_temperature_unit(mut self, unit: TemperatureUnit) -> Self {
        self.temperature_unit = unit;
        self
    }

    pub fn with_valid_range_k(mut self, t_min: f64, t_max: f64) -> Result<Self> {
        self.valid_range_k = Some(validate_range(t_min, t_max)?);
        Ok(self)
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = source.into();
        self
    }

    pub fn coefficients(&self) -> (f64, f64, f64) {
        (self.a, self.b, self.c)
    }

    pub fn coefficient_temperature_unit(&self) -> TemperatureUnit {
        self.coefficient_temperature_unit
    }

    fn log10_unchecked(&self, t_k: f64) -> Result<f64> {
        let t_coeff = from_kelvin(t_k, self.coefficient_temperature_unit);
        let denom = t_coeff + self.c;
        if denom == 0.0 {
            return Err(PhysError::AntoineSingularity { t_coeff, c: self.c });
        }
        Ok(self.a - self.b / denom)
    }

    /// K 온도에서 log10(P_native). 온도 검사를 직접 수행한다.
    pub fn log10_native_from_kelvin(&self, t_k: f64, check_range: bool) -> Result<f64> {
        check_temperature_k(t_k, self.valid_range_k, check_range)?;
        self.log10_unchecked(t_k)
    }

    /// K 온도에서 고유 압력 단위의 증기압. 온도 검사를 직접 수행한다.
    pub fn native_from_kelvin(&self, t_k: f64, check_range: bool) -> Result<f64> {
        Ok(10f64.powf(self.log10_native_from_kelvin(t_k, check_range)?))
    }
}

impl VaporPressureCurve for AntoineCurve {
    fn temperature_unit(&self) -> TemperatureUnit {
        self.temperature_unit
    }

    fn native_pressure_unit(&self) -> PressureUnit {
        self.native_pressure_unit
    }

    fn valid_range_k(&self) -> Option<(f64, f64)> {
        self.valid_range_k
    }

    fn source(&self) -> &str {
        &self.source
    }

    fn native_pressure_from_kelvin(&self, t_k: f64) -> Result<f64> {
        Ok(10f64.powf(self.log10_unchecked(t_k)?))
    }
}

/// 적분형 Clausius-Clapeyron 식 `P = P_ref exp(-ΔH/R (1/T - 1/T_ref))`.
///
/// `P_ref`는 고유 압력 단위(기본 Pa), ΔH는 J/mol이다.
#[derive(Debug, Clone, PartialEq)]
pub struct ClausiusClapeyronCurve {
    p_ref: f64,
    t_ref_k: f64,
    dh_j_per_mol: f64,
    native_pressure_unit: PressureUnit,
    temperature_unit: TemperatureUnit,
    valid_range_k: Option<(f64, f64)>,
    source: String,
}

impl ClausiusClapeyronCurve {
    pub fn new(p_ref: f64, t_ref_k: f64, dh_j_per_mol: f64) -> Result<Self> {
        if !(p_ref.is_finite() && p_ref > 0.0) {
            return Err(PhysError::validation(format!("P_ref는 0보다 커야 합니다 ({p_ref})")));
        }
        if !(t_ref_k.is_finite() && t_ref_k > 0.0) {
            return Err(PhysError::validation(format!(
                "T_ref는 0 K보다 커야 합니다 ({t_ref_k})"
            )));
        }
        if !dh_j_per_mol.is_finite() {
            return Err(PhysError::validation("ΔH는 유한해야 합니다"));
        }
        Ok(Self {
            p_ref,
            t_ref_k,
            dh_j_per_mol,
            native_pressure_unit: PressureUnit::Pascal,
            temperature_unit: TemperatureUnit::Kelvin,
            valid_range_k: None,
            source: "unknown".to_string(),
        })
    }

    pub fn with_native_pressure_unit(mut self, unit: PressureUnit) -> Self {
        self.native_pressure_unit = unit;
        self
    }

    pub fn with_temperature_unit(mut self, unit: TemperatureUnit) -> Self {
        self.temperature_unit = unit;
        self
    }

    pub fn with_valid_range_k(mut self, t_min: f64, t_max: f64) -> Result<Self> {
        self.valid_range_k = Some(validate_range(t_min, t_max)?);
        Ok(self)
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = source.into();
        self
    }
}

impl VaporPressureCurve for ClausiusClapeyronCurve {
    fn temperature_unit(&self) -> TemperatureUnit {
        self.temperature_unit
    }

    fn native_pressure_unit(&self) -> PressureUnit {
        self.native_pressure_unit
    }

    fn valid_range_k(&self) -> Option<(f64, f64)> {
        self.valid_range_k
    }

    fn source(&self) -> &str {
        &self.source
    }

    fn native_pressure_from_kelvin(&self, t_k: f64) -> Result<f64> {
        let r = crate::constants::CONSTANTS_SI.r_g;
        let exponent = -self.dh_j_per_mol / r * (1.0 / t_k - 1.0 / self.t_ref_k);
        Ok(self.p_ref * exponent.exp())
    }
}
