mod config;
mod policy;
pub(crate) mod rules;

pub use config::{LoanPolicy, PolicyError};
pub use policy::Decision;

pub(crate) use policy::decide_outcome;

use super::domain::{ApplicantRecord, Finding};
use serde::{Deserialize, Serialize};

/// Stateless evaluator that applies a lending policy to applicant records.
#[derive(Debug, Clone, Default)]
pub struct LoanEvaluator {
    policy: LoanPolicy,
}

impl LoanEvaluator {
    pub fn new(policy: LoanPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> &LoanPolicy {
        &self.policy
    }

    pub fn evaluate(&self, record: &ApplicantRecord) -> LoanAssessment {
        let state = rules::run_rules(record, &self.policy);
        let decision = decide_outcome(&state.findings);

        LoanAssessment {
            decision,
            interest_rate: self.policy.clamp_rate(state.rate),
            findings: state.findings,
        }
    }
}

/// Evaluate a record against the default lending policy.
pub fn evaluate_loan(record: &ApplicantRecord) -> LoanAssessment {
    LoanEvaluator::default().evaluate(record)
}

/// Evaluation output: verdict, clamped rate, and the ordered finding trail.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanAssessment {
    pub decision: Decision,
    pub interest_rate: f64,
    pub findings: Vec<Finding>,
}

impl LoanAssessment {
    pub fn reasons(&self) -> Vec<String> {
        self.findings
            .iter()
            .map(|finding| finding.message.clone())
            .collect()
    }

    pub fn view(&self) -> DecisionView {
        DecisionView {
            decision: self.decision,
            interest_rate: self.interest_rate,
            reasons: self.reasons(),
        }
    }
}

/// Wire representation returned to API callers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionView {
    pub decision: Decision,
    pub interest_rate: f64,
    pub reasons: Vec<String>,
}
