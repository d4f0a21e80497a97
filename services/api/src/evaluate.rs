use clap::{ArgGroup, Args};
use loan_risk::config::AppConfig;
use loan_risk::error::AppError;
use loan_risk::workflows::loan::{
    screen_transcript, ApplicantRecord, Decision, LoanAssessment, LoanEvaluator,
    TranscriptScreening,
};
use std::fmt::Write as _;
use std::fs;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub(crate) struct RecordArgs {
    /// Path to an applicant record in JSON
    #[arg(long)]
    pub(crate) input: PathBuf,
    /// Print the API response body instead of a readable summary
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug)]
#[command(group(ArgGroup::new("source").required(true).args(["input", "text"])))]
pub(crate) struct TranscriptArgs {
    /// Path to a saved transcription (UTF-8 text)
    #[arg(long)]
    pub(crate) input: Option<PathBuf>,
    /// Transcript text passed inline
    #[arg(long)]
    pub(crate) text: Option<String>,
    /// Print the API response body instead of a readable summary
    #[arg(long)]
    pub(crate) json: bool,
}

pub(crate) fn run_record_evaluation(args: RecordArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let evaluator = LoanEvaluator::new(config.lending.policy()?);

    let raw = fs::read_to_string(&args.input)?;
    let record: ApplicantRecord = serde_json::from_str(&raw)?;
    let assessment = evaluator.evaluate(&record);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&assessment.view())?);
    } else {
        print!("{}", format_assessment(&assessment));
    }
    Ok(())
}

pub(crate) fn run_transcript_screening(args: TranscriptArgs) -> Result<(), AppError> {
    let text = match (args.text, args.input) {
        (Some(text), _) => text,
        (None, Some(path)) => fs::read_to_string(path)?,
        (None, None) => String::new(),
    };

    let screening = screen_transcript(&text);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&screening.view())?);
    } else {
        print!("{}", format_screening(&screening));
    }
    Ok(())
}

pub(crate) fn decision_marker(decision: Decision) -> &'static str {
    match decision {
        Decision::Approved => "[approved]",
        Decision::Rejected => "[rejected]",
        Decision::MoreInfoNeeded => "[review]",
    }
}

pub(crate) fn format_assessment(assessment: &LoanAssessment) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "Final Decision: {} {}",
        decision_marker(assessment.decision),
        assessment.decision.label()
    );
    let _ = writeln!(out, "Interest Rate: {:.2}%", assessment.interest_rate);
    if !assessment.findings.is_empty() {
        let _ = writeln!(out, "Reasons:");
        for finding in &assessment.findings {
            let _ = writeln!(out, "- ({}) {}", finding.severity.label(), finding.message);
        }
    }
    out
}

pub(crate) fn format_screening(screening: &TranscriptScreening) -> String {
    let mut out = String::new();
    let describe = |value: Option<i64>| match value {
        Some(value) => value.to_string(),
        None => "not mentioned".to_string(),
    };
    let _ = writeln!(
        out,
        "Extracted: age {}, income {}",
        describe(screening.fields.age),
        describe(screening.fields.income)
    );
    let _ = writeln!(
        out,
        "Final Decision: {} {}",
        decision_marker(screening.decision),
        screening.decision.label()
    );
    if !screening.findings.is_empty() {
        let _ = writeln!(out, "Reasons:");
        for finding in &screening.findings {
            let _ = writeln!(out, "- {}", finding.message);
        }
    }
    out
}
