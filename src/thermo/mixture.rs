use crate::error::{PhysError, Result};

/// 몰분율 합 허용 오차
pub const FRACTION_SUM_TOL: f64 = 1e-6;

/// 몰분율로 정의한 혼합물. 몰분율은 0 이상이고 합이 1이다.
#[derive(Debug, Clone, PartialEq)]
pub struct MolarMixture {
    names: Vec<String>,
    fractions: Vec<f64>,
    n_total: Option<f64>,
}

impl MolarMixture {
    pub fn new<S: Into<String>>(names: Vec<S>, fractions: Vec<f64>) -> Result<Self> {
        let names: Vec<String> = names.into_iter().map(Into::into).collect();
        if names.len() != fractions.len() {
            return Err(PhysError::validation(format!(
                "이름({})과 몰분율({}) 개수가 다릅니다",
                names.len(),
                fractions.len()
            )));
        }
        for (i, name) in names.iter().enumerate() {
            if names[..i].contains(name) {
                return Err(PhysError::validation(format!("중복된 성분 이름: {name}")));
            }
        }
        if fractions.iter().any(|x| !(x.is_finite() && *x >= 0.0)) {
            return Err(PhysError::validation("몰분율은 0 이상이어야 합니다"));
        }
        let sum: f64 = fractions.iter().sum();
        if (sum - 1.0).abs() > FRACTION_SUM_TOL {
            return Err(PhysError::validation(format!("몰분율 합이 1이 아닙니다 ({sum})")));
        }
        Ok(Self {
            names,
            fractions,
            n_total: None,
        })
    }

    /// 몰수로부터 혼합물을 만든다. 전체 몰수를 함께 기록한다.
    pub fn from_moles<S: Into<String>>(names: Vec<S>, moles: &[f64]) -> Result<Self> {
        if moles.iter().any(|n| !(n.is_finite() && *n >= 0.0)) {
            return Err(PhysError::validation("몰수는 0 이상이어야 합니다"));
        }
        let n_total: f64 = moles.iter().sum();
        if !(n_total > 0.0) {
            return Err(PhysError::validation("전체 몰수는 0보다 커야 합니다"));
        }
        let fractions = moles.iter().map(|n| n / n_total).collect();
        let mut mixture = Self::new(names, fractions)?;
        mixture.n_total = Some(n_total);
        Ok(mixture)
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn fractions(&self) -> &[f64] {
        &self.fractions
    }

    pub fn n_total(&self) -> Option<f64> {
        self.n_total
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// 성분의 몰분율. 없는 성분이면 조회 오류.
    pub fn mole_fraction(&self, name: &str) -> Result<f64> {
        self.names
            .iter()
            .position(|n| n == name)
            .map(|i| self.fractions[i])
            .ok_or_else(|| PhysError::Lookup(format!("혼합물에 없는 성분 '{name}'")))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> + '_ {
        self.names
            .iter()
            .map(String::as_str)
            .zip(self.fractions.iter().copied())
    }
}
