use crate::evaluate::{format_assessment, format_screening};
use clap::Args;
use loan_risk::error::AppError;
use loan_risk::workflows::loan::{
    screen_transcript, ApplicantRecord, EmploymentType, LoanEvaluator, LoanPurpose,
    RepaymentHistory,
};

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Skip the transcript screening portion of the demo.
    #[arg(long)]
    pub(crate) skip_transcripts: bool,
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let evaluator = LoanEvaluator::default();

    println!("Loan risk evaluator demo");
    for (label, record) in sample_applicants() {
        let assessment = evaluator.evaluate(&record);
        println!(
            "\n{label} (age {}, income {}, purpose {}, CIBIL {})",
            record.age,
            record.income,
            record.purpose.as_str(),
            record.cibil_score
        );
        print!("{}", format_assessment(&assessment));
    }

    if args.skip_transcripts {
        return Ok(());
    }

    println!("\nTranscript screening");
    for transcript in sample_transcripts() {
        println!("\n\"{transcript}\"");
        print!("{}", format_screening(&screen_transcript(transcript)));
    }

    Ok(())
}

pub(crate) fn sample_applicants() -> Vec<(&'static str, ApplicantRecord)> {
    vec![
        (
            "Salaried professional with co-applicant",
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
            },
        ),
        (
            "Senior home buyer without collateral",
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
            },
        ),
        (
            "Self-employed founder with heavy debts",
            ApplicantRecord {
                age: 42,
                income: 55_000,
                purpose: LoanPurpose::Business,
                cibil_score: 690,
                past_repayment_history: RepaymentHistory::Delayed,
                employment_type: EmploymentType::SelfEmployed,
                monthly_debts: 24_000,
                loan_amount: 3_000_000,
                loan_tenure: 18,
                collateral_provided: true,
                co_applicant: false,
            },
        ),
        (
            "Unemployed applicant with prior default",
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
            },
        ),
    ]
}

pub(crate) fn sample_transcripts() -> [&'static str; 3] {
    [
        "Hello, I am 34 years old and my salary is Rs. 48,000 per month.",
        "I'm 27, I make around 18k.",
        "I would like a loan for my shop, my income is 9000 rupees.",
    ]
}
