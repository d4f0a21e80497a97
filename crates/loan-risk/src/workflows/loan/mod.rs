//! Loan eligibility and pricing for structured applications and spoken transcripts.

pub mod domain;
pub mod evaluation;
pub mod router;
pub mod transcript;

#[cfg(test)]
mod tests;

pub use domain::{
    ApplicantRecord, EmploymentType, Finding, LoanPurpose, RepaymentHistory, RuleKind, Severity,
};
pub use evaluation::{
    evaluate_loan, Decision, DecisionView, LoanAssessment, LoanEvaluator, LoanPolicy, PolicyError,
};
pub use router::{loan_router, TranscriptRequest};
pub use transcript::{
    screen_fields, screen_transcript, TranscriptDecisionView, TranscriptFields,
    TranscriptScreening,
};
