use super::common::*;
use crate::workflows::loan::domain::{EmploymentType, RuleKind, Severity};
use crate::workflows::loan::evaluation::rules::{self, RunningAssessment};
use crate::workflows::loan::evaluation::LoanPolicy;

fn fresh() -> RunningAssessment {
    RunningAssessment::new(8.0)
}

#[test]
fn co_applicant_discount_applies_above_age_limit() {
    let policy = LoanPolicy::default();
    let mut record = senior_home_record();
    record.co_applicant = true;

    let state = rules::co_applicant(&record, &policy, fresh());

    assert!(state.findings.is_empty());
    assert!((state.rate - 7.5).abs() < 1e-9);
}

#[test]
fn co_applicant_penalty_without_partner_above_age_limit() {
    let policy = LoanPolicy::default();
    let record = senior_home_record();

    let state = rules::co_applicant(&record, &policy, fresh());

    assert_eq!(state.findings.len(), 1);
    assert_eq!(state.findings[0].rule, RuleKind::CoApplicant);
    assert_eq!(state.findings[0].severity, Severity::SoftWarning);
    assert!((state.rate - 8.5).abs() < 1e-9);
}

#[test]
fn co_applicant_rule_is_neutral_for_young_solo_applicants() {
    let policy = LoanPolicy::default();
    let mut record = clean_record();
    record.co_applicant = false;

    let state = rules::co_applicant(&record, &policy, fresh());

    assert_eq!(state, fresh());
}

#[test]
fn self_employed_premium_adjusts_rate_silently() {
    let policy = LoanPolicy::default();
    let mut record = clean_record();
    record.employment_type = EmploymentType::SelfEmployed;

    let state = rules::employment(&record, &policy, fresh());

    assert!(state.findings.is_empty());
    assert!((state.rate - 8.5).abs() < 1e-9);
}

#[test]
fn low_credit_score_is_soft_warning() {
    let policy = LoanPolicy::default();
    let mut record = clean_record();
    record.cibil_score = 599;

    let state = rules::credit_score(&record, &policy, fresh());

    assert_eq!(state.findings.len(), 1);
    assert_eq!(state.findings[0].rule, RuleKind::CreditScore);
    assert_eq!(state.findings[0].severity, Severity::SoftWarning);
    assert!((state.rate - 8.0).abs() < 1e-9);
}

#[test]
fn default_history_is_hard_reject_with_penalty() {
    let policy = LoanPolicy::default();
    let record = rejected_record();

    let state = rules::repayment_history(&record, &policy, fresh());

    assert_eq!(state.findings[0].severity, Severity::HardReject);
    assert!((state.rate - 11.0).abs() < 1e-9);
}

#[test]
fn rules_preserve_prior_findings() {
    let policy = LoanPolicy::default();
    let record = rejected_record();

    let state = rules::income_floor(&record, &policy, fresh());
    let state = rules::employment(&record, &policy, state);

    let kinds: Vec<RuleKind> = state.findings.iter().map(|finding| finding.rule).collect();
    assert_eq!(kinds, vec![RuleKind::IncomeFloor, RuleKind::Employment]);
}

#[test]
fn collateral_rule_ignores_secured_loans() {
    let policy = LoanPolicy::default();
    let mut record = senior_home_record();
    record.collateral_provided = true;

    let state = rules::collateral(&record, &policy, fresh());

    assert_eq!(state, fresh());
}

#[test]
fn run_rules_starts_from_policy_base_rate() {
    let policy = LoanPolicy {
        base_rate: 9.25,
        ..LoanPolicy::default()
    };
    let mut record = clean_record();
    record.co_applicant = false;

    let state = rules::run_rules(&record, &policy);

    assert!(state.findings.is_empty());
    assert!((state.rate - 9.25).abs() < 1e-9);
}
