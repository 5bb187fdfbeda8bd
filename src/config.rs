use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::units::systems::{UnitSystem, UnitSystemKind};

/// 라이브러리 사용자 설정을 표현한다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 결과를 표시할 단위계
    pub unit_system: UnitSystemKind,
    /// 증기압 곡선의 유효 온도 범위 검사 여부
    pub check_range: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            unit_system: UnitSystemKind::SI,
            check_range: true,
        }
    }
}

/// 설정 로드/저장 시 발생 가능한 오류를 표현한다.
#[derive(Debug)]
pub enum ConfigError {
    /// 파일 입출력 오류
    Io(std::io::Error),
    /// TOML 역직렬화 오류
    Serde(toml::de::Error),
    /// TOML 직렬화 오류
    Serialize(toml::ser::Error),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "파일 입출력 오류: {e}"),
            ConfigError::Serde(e) => write!(f, "설정 파싱 오류: {e}"),
            ConfigError::Serialize(e) => write!(f, "설정 직렬화 오류: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io(e) => Some(e),
            ConfigError::Serde(e) => Some(e),
            ConfigError::Serialize(e) => Some(e),
        }
    }
}

impl From<std::io::Error> for ConfigError {
    fn from(value: std::io::Error) -> Self {
        ConfigError::Io(value)
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(value: toml::de::Error) -> Self {
        ConfigError::Serde(value)
    }
}

impl From<toml::ser::Error> for ConfigError {
    fn from(value: toml::ser::Error) -> Self {
        ConfigError::Serialize(value)
    }
}

impl Config {
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// 설정 파일을 로드하거나 없으면 기본 설정을 만들어 기록한다.
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if path.exists() {
            let content = fs::read_to_string(path)?;
            let cfg = Self::from_toml_str(&content)?;
            tracing::debug!(path = %path.display(), unit_system = ?cfg.unit_system, "설정 로드");
            Ok(cfg)
        } else {
            let cfg = Self::default();
            cfg.save(path)?;
            tracing::debug!(path = %path.display(), "설정 파일이 없어 기본값을 기록");
            Ok(cfg)
        }
    }

    /// 설정을 파일에 저장한다.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        fs::write(path, self.to_toml_string()?)?;
        Ok(())
    }

    /// 현재 선택된 단위계의 관례 단위.
    pub fn units(&self) -> UnitSystem {
        self.unit_system.units()
    }
}
