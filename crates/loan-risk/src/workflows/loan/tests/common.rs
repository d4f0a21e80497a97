use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::response::Response;
use serde_json::Value;

use crate::workflows::loan::domain::{
    ApplicantRecord, EmploymentType, LoanPurpose, RepaymentHistory,
};
use crate::workflows::loan::evaluation::{LoanAssessment, LoanEvaluator, LoanPolicy};

/// Record that trips no rule at all.
pub(super) fn clean_record() -> ApplicantRecord {
    ApplicantRecord {
        age: 30,
        income: 60_000,
        purpose: LoanPurpose::from("personal"),
        cibil_score: 800,
        past_repayment_history: RepaymentHistory::Clean,
        employment_type: EmploymentType::Salaried,
        monthly_debts: 0,
        loan_amount: 100_000,
        loan_tenure: 5,
        collateral_provided: true,
        co_applicant: true,
    }
}

/// Older home buyer with an average score and an uncollateralized large loan.
pub(super) fn senior_home_record() -> ApplicantRecord {
    ApplicantRecord {
        age: 60,
        income: 40_000,
        purpose: LoanPurpose::Home,
        cibil_score: 700,
        past_repayment_history: RepaymentHistory::Clean,
        employment_type: EmploymentType::Salaried,
        monthly_debts: 5_000,
        loan_amount: 1_500_000,
        loan_tenure: 20,
        collateral_provided: false,
        co_applicant: false,
    }
}

/// Record that trips several hard rejects at once.
pub(super) fn rejected_record() -> ApplicantRecord {
    ApplicantRecord {
        age: 25,
        income: 10_000,
        purpose: LoanPurpose::from("personal"),
        cibil_score: 500,
        past_repayment_history: RepaymentHistory::Default,
        employment_type: EmploymentType::Unemployed,
        monthly_debts: 0,
        loan_amount: 50_000,
        loan_tenure: 2,
        collateral_provided: false,
        co_applicant: false,
    }
}

pub(super) fn evaluator() -> LoanEvaluator {
    LoanEvaluator::new(LoanPolicy::default())
}

pub(super) fn shared_evaluator() -> Arc<LoanEvaluator> {
    Arc::new(evaluator())
}

pub(super) fn assert_rate(assessment: &LoanAssessment, expected: f64) {
    assert!(
        (assessment.interest_rate - expected).abs() < 1e-9,
        "expected rate {expected}, got {}",
        assessment.interest_rate
    );
}

pub(super) fn json_request(uri: &str, body: &Value) -> Request<Body> {
    Request::post(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(
            serde_json::to_vec(body).expect("request serializes"),
        ))
        .expect("request builds")
}

pub(super) async fn read_json(response: Response) -> (StatusCode, Value) {
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body readable");
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}
