use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// Thresholds and rate adjustments the pricing rules read.
///
/// The default policy carries the lending desk's published constants; reason texts interpolate
/// these values, so the default yields the same wording customers already receive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoanPolicy {
    pub min_age: i64,
    pub max_age: i64,
    pub minimum_income: i64,
    pub home_minimum_income: i64,
    pub business_minimum_income: i64,
    pub self_employed_premium: f64,
    pub minimum_cibil_score: i64,
    pub prime_cibil_score: i64,
    pub cibil_penalty_per_point: f64,
    pub default_penalty: f64,
    pub delayed_payment_penalty: f64,
    pub max_debt_to_income: f64,
    pub debt_to_income_penalty: f64,
    pub existing_loans_debt_to_income: f64,
    pub existing_loans_penalty: f64,
    pub max_loan_income_multiple: i64,
    pub loan_to_income_penalty: f64,
    pub collateral_threshold: i64,
    pub collateral_penalty: f64,
    pub max_standard_tenure: i64,
    pub tenure_penalty: f64,
    pub co_applicant_age: i64,
    pub co_applicant_penalty: f64,
    pub co_applicant_discount: f64,
    pub base_rate: f64,
    pub rate_floor: f64,
    pub rate_cap: f64,
}

impl Default for LoanPolicy {
    fn default() -> Self {
        Self {
            min_age: 21,
            max_age: 65,
            minimum_income: 15_000,
            home_minimum_income: 30_000,
            business_minimum_income: 50_000,
            self_employed_premium: 0.5,
            minimum_cibil_score: 600,
            prime_cibil_score: 750,
            cibil_penalty_per_point: 0.01,
            default_penalty: 3.0,
            delayed_payment_penalty: 1.0,
            max_debt_to_income: 40.0,
            debt_to_income_penalty: 1.5,
            existing_loans_debt_to_income: 30.0,
            existing_loans_penalty: 0.5,
            max_loan_income_multiple: 50,
            loan_to_income_penalty: 0.5,
            collateral_threshold: 1_000_000,
            collateral_penalty: 1.0,
            max_standard_tenure: 15,
            tenure_penalty: 0.5,
            co_applicant_age: 55,
            co_applicant_penalty: 0.5,
            co_applicant_discount: 0.5,
            base_rate: 8.0,
            rate_floor: 8.0,
            rate_cap: 20.0,
        }
    }
}

impl LoanPolicy {
    /// Load a policy from a JSON file; omitted fields keep their default values.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, PolicyError> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|source| PolicyError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&raw)
    }

    pub fn from_json(raw: &str) -> Result<Self, PolicyError> {
        let policy: LoanPolicy = serde_json::from_str(raw)?;
        policy.validate()?;
        Ok(policy)
    }

    pub fn validate(&self) -> Result<(), PolicyError> {
        if self.min_age > self.max_age {
            return Err(PolicyError::AgeRange {
                min: self.min_age,
                max: self.max_age,
            });
        }
        if self.rate_floor > self.rate_cap {
            return Err(PolicyError::RateBounds {
                floor: self.rate_floor,
                cap: self.rate_cap,
            });
        }
        if self.max_loan_income_multiple < 0 {
            return Err(PolicyError::NegativeMultiple(self.max_loan_income_multiple));
        }
        Ok(())
    }

    /// Clamp an accumulated rate into the policy's floor and cap.
    pub fn clamp_rate(&self, rate: f64) -> f64 {
        self.rate_floor.max(rate.min(self.rate_cap))
    }
}

/// Failure loading or validating a [`LoanPolicy`].
#[derive(Debug, thiserror::Error)]
pub enum PolicyError {
    #[error("unable to read policy file {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("policy file is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("minimum age {min} exceeds maximum age {max}")]
    AgeRange { min: i64, max: i64 },
    #[error("rate floor {floor} must not exceed rate cap {cap}")]
    RateBounds { floor: f64, cap: f64 },
    #[error("loan-to-income multiple must be non-negative, got {0}")]
    NegativeMultiple(i64),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_keeps_defaults() {
        let policy = LoanPolicy::from_json(r#"{ "rate_cap": 18.5, "min_age": 23 }"#)
            .expect("policy parses");

        assert_eq!(policy.rate_cap, 18.5);
        assert_eq!(policy.min_age, 23);
        assert_eq!(policy.max_age, 65);
        assert_eq!(policy.base_rate, 8.0);
    }

    #[test]
    fn rejects_inverted_rate_bounds() {
        let err = LoanPolicy::from_json(r#"{ "rate_floor": 12.0, "rate_cap": 10.0 }"#)
            .expect_err("inverted bounds rejected");

        assert!(matches!(err, PolicyError::RateBounds { .. }));
    }

    #[test]
    fn rejects_inverted_age_range() {
        let err = LoanPolicy::from_json(r#"{ "min_age": 70 }"#).expect_err("age range rejected");
        assert!(matches!(err, PolicyError::AgeRange { min: 70, max: 65 }));
    }

    #[test]
    fn clamp_rate_respects_bounds() {
        let policy = LoanPolicy::default();
        assert_eq!(policy.clamp_rate(7.5), 8.0);
        assert_eq!(policy.clamp_rate(12.25), 12.25);
        assert_eq!(policy.clamp_rate(27.0), 20.0);
    }
}
