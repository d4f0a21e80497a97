use crate::workflows::loan::domain::{RuleKind, Severity};
use crate::workflows::loan::evaluation::Decision;
use crate::workflows::loan::transcript::{screen_fields, screen_transcript, TranscriptFields};

#[test]
fn complete_transcript_is_approved() {
    let screening = screen_transcript("Hi, I am 32 years old and I earn Rs. 45,000 per month.");

    assert_eq!(
        screening.fields,
        TranscriptFields {
            age: Some(32),
            income: Some(45_000),
        }
    );
    assert_eq!(screening.decision, Decision::Approved);
    assert!(screening.reasons().is_empty());
}

#[test]
fn missing_age_and_modest_income_need_more_info() {
    let screening = screen_transcript("I earn 20000 rupees every month");

    assert_eq!(screening.decision, Decision::MoreInfoNeeded);
    assert_eq!(
        screening.reasons(),
        vec![
            "Age not mentioned.".to_string(),
            "More financial info needed.".to_string(),
        ]
    );
}

#[test]
fn low_income_transcript_is_rejected() {
    let screening = screen_transcript("I'm 40 and I make 10k");

    assert_eq!(screening.fields.income, Some(10_000));
    assert_eq!(screening.decision, Decision::Rejected);
    assert_eq!(screening.reasons(), vec!["Income too low.".to_string()]);
}

#[test]
fn silent_transcript_asks_for_everything() {
    let screening = screen_transcript("");

    assert_eq!(screening.decision, Decision::MoreInfoNeeded);
    assert_eq!(
        screening.reasons(),
        vec![
            "Age not mentioned.".to_string(),
            "Income not mentioned.".to_string(),
        ]
    );
}

#[test]
fn minors_are_rejected() {
    let screening = screen_fields(TranscriptFields {
        age: Some(16),
        income: Some(50_000),
    });

    assert_eq!(screening.decision, Decision::Rejected);
    assert_eq!(screening.findings[0].rule, RuleKind::TranscriptAge);
    assert_eq!(screening.findings[0].severity, Severity::HardReject);
    assert_eq!(
        screening.findings[0].message,
        "Applicant must be at least 18 years old."
    );
}

#[test]
fn income_bands_follow_thresholds() {
    let decide = |income| {
        screen_fields(TranscriptFields {
            age: Some(30),
            income: Some(income),
        })
        .decision
    };

    assert_eq!(decide(14_999), Decision::Rejected);
    assert_eq!(decide(15_000), Decision::MoreInfoNeeded);
    assert_eq!(decide(24_999), Decision::MoreInfoNeeded);
    assert_eq!(decide(25_000), Decision::Approved);
}

#[test]
fn view_carries_decision_and_reasons_only() {
    let view = screen_transcript("age 45, salary rupees 18,000").view();
    let json = serde_json::to_value(&view).expect("view serializes");

    assert_eq!(json["decision"], "MoreInfoNeeded");
    assert_eq!(json["reasons"][0], "More financial info needed.");
    assert!(json.get("interest_rate").is_none());
}
