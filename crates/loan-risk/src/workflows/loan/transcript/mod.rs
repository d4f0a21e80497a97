//! Reduced eligibility screening for spoken applications.
//!
//! Identity-verification sessions hand over a speech transcript rather than a structured
//! record. Only age and income are recovered from the text, so this path can approve,
//! reject, or ask for more information but never prices a loan.

mod extract;

pub use extract::{extract_age, extract_income};

use super::domain::{Finding, RuleKind};
use super::evaluation::{decide_outcome, Decision};
use serde::{Deserialize, Serialize};

const MINIMUM_AGE: i64 = 18;
const MINIMUM_INCOME: i64 = 15_000;
const REVIEW_INCOME: i64 = 25_000;

/// Fields recovered from a transcript; `None` when the applicant never mentioned them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranscriptFields {
    pub age: Option<i64>,
    pub income: Option<i64>,
}

impl TranscriptFields {
    pub fn extract(text: &str) -> Self {
        Self {
            age: extract_age(text),
            income: extract_income(text),
        }
    }
}

/// Outcome of screening a transcript.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranscriptScreening {
    pub fields: TranscriptFields,
    pub decision: Decision,
    pub findings: Vec<Finding>,
}

impl TranscriptScreening {
    pub fn reasons(&self) -> Vec<String> {
        self.findings
            .iter()
            .map(|finding| finding.message.clone())
            .collect()
    }

    pub fn view(&self) -> TranscriptDecisionView {
        TranscriptDecisionView {
            decision: self.decision,
            reasons: self.reasons(),
        }
    }
}

/// Wire representation for transcript screening responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranscriptDecisionView {
    pub decision: Decision,
    pub reasons: Vec<String>,
}

pub fn screen_transcript(text: &str) -> TranscriptScreening {
    screen_fields(TranscriptFields::extract(text))
}

pub fn screen_fields(fields: TranscriptFields) -> TranscriptScreening {
    let mut findings = Vec::new();

    match fields.age {
        None => findings.push(Finding::warning(
            RuleKind::TranscriptAge,
            "Age not mentioned.",
        )),
        Some(age) if age < MINIMUM_AGE => findings.push(Finding::hard_reject(
            RuleKind::TranscriptAge,
            format!("Applicant must be at least {MINIMUM_AGE} years old."),
        )),
        Some(_) => {}
    }

    match fields.income {
        None => findings.push(Finding::warning(
            RuleKind::TranscriptIncome,
            "Income not mentioned.",
        )),
        Some(income) if income < MINIMUM_INCOME => findings.push(Finding::hard_reject(
            RuleKind::TranscriptIncome,
            "Income too low.",
        )),
        Some(income) if income < REVIEW_INCOME => findings.push(Finding::warning(
            RuleKind::TranscriptIncome,
            "More financial info needed.",
        )),
        Some(_) => {}
    }

    let decision = decide_outcome(&findings);
    tracing::debug!(?fields, ?decision, "transcript screened");

    TranscriptScreening {
        fields,
        decision,
        findings,
    }
}
