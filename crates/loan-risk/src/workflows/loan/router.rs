use std::sync::Arc;

use axum::{extract::State, routing::post, Json, Router};
use serde::{Deserialize, Serialize};
use tracing::info;

use super::domain::ApplicantRecord;
use super::evaluation::{DecisionView, LoanEvaluator};
use super::transcript::{screen_transcript, TranscriptDecisionView};

/// Body accepted by the transcript screening endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranscriptRequest {
    pub transcription: String,
}

/// Router builder exposing the structured and transcript evaluation endpoints.
pub fn loan_router(evaluator: Arc<LoanEvaluator>) -> Router {
    Router::new()
        .route("/evaluate_loan", post(evaluate_loan_handler))
        .route("/evaluate/", post(evaluate_transcript_handler))
        .route("/evaluate", post(evaluate_transcript_handler))
        .with_state(evaluator)
}

pub(crate) async fn evaluate_loan_handler(
    State(evaluator): State<Arc<LoanEvaluator>>,
    Json(record): Json<ApplicantRecord>,
) -> Json<DecisionView> {
    let assessment = evaluator.evaluate(&record);
    info!(
        decision = assessment.decision.label(),
        interest_rate = assessment.interest_rate,
        findings = assessment.findings.len(),
        "loan application evaluated"
    );
    Json(assessment.view())
}

pub(crate) async fn evaluate_transcript_handler(
    Json(request): Json<TranscriptRequest>,
) -> Json<TranscriptDecisionView> {
    let screening = screen_transcript(&request.transcription);
    info!(
        decision = screening.decision.label(),
        age_found = screening.fields.age.is_some(),
        income_found = screening.fields.income.is_some(),
        "transcript screened"
    );
    Json(screening.view())
}
