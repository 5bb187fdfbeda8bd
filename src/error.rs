//! 라이브러리 전체에서 사용하는 오류 타입.

use crate::config::ConfigError;

/// 오류 분류. 생성 시점 검증 오류, 평가 시점 물리 영역 오류, 조회 오류로 나눈다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    Domain,
    Lookup,
    Config,
}

/// 계산/변환 중 발생 가능한 오류.
#[derive(Debug)]
pub enum PhysError {
    /// 잘못된 생성 인자 또는 입력값
    Validation(String),
    /// 해당 물리량에 속하지 않는 단위
    UnsupportedUnit { quantity: &'static str, unit: String },
    /// 평가 시점의 물리 영역 위반 (T <= 0 K, 격자 불일치 등)
    Domain(String),
    /// Antoine 식의 특이점 (T_coeff + C = 0)
    AntoineSingularity { t_coeff: f64, c: f64 },
    /// 혼합물 등에서 존재하지 않는 키 조회
    Lookup(String),
    /// 설정 파일 오류
    Config(ConfigError),
}

impl PhysError {
    pub(crate) fn validation(msg: impl Into<String>) -> Self {
        PhysError::Validation(msg.into())
    }

    pub(crate) fn domain(msg: impl Into<String>) -> Self {
        PhysError::Domain(msg.into())
    }

    pub(crate) fn unsupported(quantity: &'static str, unit: impl Into<String>) -> Self {
        PhysError::UnsupportedUnit {
            quantity,
            unit: unit.into(),
        }
    }

    /// 오류 분류를 반환한다. 지원하지 않는 단위는 검증 오류, 특이점은 영역 오류로 취급한다.
    pub fn kind(&self) -> ErrorKind {
        match self {
            PhysError::Validation(_) | PhysError::UnsupportedUnit { .. } => ErrorKind::Validation,
            PhysError::Domain(_) | PhysError::AntoineSingularity { .. } => ErrorKind::Domain,
            PhysError::Lookup(_) => ErrorKind::Lookup,
            PhysError::Config(_) => ErrorKind::Config,
        }
    }
}

impl std::fmt::Display for PhysError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PhysError::Validation(msg) => write!(f, "입력 오류: {msg}"),
            PhysError::UnsupportedUnit { quantity, unit } => {
                write!(f, "지원하지 않는 {quantity} 단위: {unit}")
            }
            PhysError::Domain(msg) => write!(f, "물리 영역 오류: {msg}"),
            PhysError::AntoineSingularity { t_coeff, c } => write!(
                f,
                "Antoine 특이점: T_coeff + C = 0 (T_coeff={t_coeff}, C={c})"
            ),
            PhysError::Lookup(key) => write!(f, "찾을 수 없는 항목: {key}"),
            PhysError::Config(e) => write!(f, "설정 오류: {e}"),
        }
    }
}

impl std::error::Error for PhysError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PhysError::Config(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ConfigError> for PhysError {
    fn from(value: ConfigError) -> Self {
        PhysError::Config(value)
    }
}

/// 크레이트 공용 결과 타입.
pub type Result<T> = std::result::Result<T, PhysError>;
