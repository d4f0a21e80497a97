use super::super::domain::{
    ApplicantRecord, EmploymentType, Finding, LoanPurpose, RepaymentHistory, RuleKind,
};
use super::config::LoanPolicy;

/// Accumulator threaded through the rule table.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct RunningAssessment {
    pub findings: Vec<Finding>,
    pub rate: f64,
}

impl RunningAssessment {
    pub(crate) fn new(base_rate: f64) -> Self {
        Self {
            findings: Vec::new(),
            rate: base_rate,
        }
    }

    fn flag(mut self, finding: Finding) -> Self {
        tracing::debug!(
            rule = ?finding.rule,
            severity = finding.severity.label(),
            "loan rule fired"
        );
        self.findings.push(finding);
        self
    }

    fn adjust(mut self, delta: f64) -> Self {
        self.rate += delta;
        self
    }
}

pub(crate) type Rule = fn(&ApplicantRecord, &LoanPolicy, RunningAssessment) -> RunningAssessment;

/// Evaluation order matters: the income chain and the co-applicant branch are exclusive,
/// and reasons are reported in this sequence.
pub(crate) const RULES: &[(RuleKind, Rule)] = &[
    (RuleKind::AgeRange, age_range),
    (RuleKind::IncomeFloor, income_floor),
    (RuleKind::Employment, employment),
    (RuleKind::CreditScore, credit_score),
    (RuleKind::RepaymentHistory, repayment_history),
    (RuleKind::DebtToIncome, debt_to_income),
    (RuleKind::ExistingLoans, existing_loans),
    (RuleKind::LoanToIncome, loan_to_income),
    (RuleKind::Collateral, collateral),
    (RuleKind::Tenure, tenure),
    (RuleKind::CoApplicant, co_applicant),
];

pub(crate) fn run_rules(record: &ApplicantRecord, policy: &LoanPolicy) -> RunningAssessment {
    RULES
        .iter()
        .fold(RunningAssessment::new(policy.base_rate), |state, (_, rule)| {
            rule(record, policy, state)
        })
}

pub(crate) fn age_range(
    record: &ApplicantRecord,
    policy: &LoanPolicy,
    state: RunningAssessment,
) -> RunningAssessment {
    if record.age < policy.min_age || record.age > policy.max_age {
        return state.flag(Finding::hard_reject(
            RuleKind::AgeRange,
            format!(
                "Applicant age must be between {} and {} years.",
                policy.min_age, policy.max_age
            ),
        ));
    }
    state
}

pub(crate) fn income_floor(
    record: &ApplicantRecord,
    policy: &LoanPolicy,
    state: RunningAssessment,
) -> RunningAssessment {
    if record.income < policy.minimum_income {
        state.flag(Finding::hard_reject(
            RuleKind::IncomeFloor,
            "Income too low for any loan.",
        ))
    } else if record.purpose == LoanPurpose::Home && record.income < policy.home_minimum_income {
        state.flag(Finding::warning(
            RuleKind::IncomeFloor,
            format!(
                "Home loans require at least ₹{} monthly income.",
                group_thousands(policy.home_minimum_income)
            ),
        ))
    } else if record.purpose == LoanPurpose::Business
        && record.income < policy.business_minimum_income
    {
        state.flag(Finding::warning(
            RuleKind::IncomeFloor,
            format!(
                "Business loans require at least ₹{} monthly income.",
                group_thousands(policy.business_minimum_income)
            ),
        ))
    } else {
        state
    }
}

pub(crate) fn employment(
    record: &ApplicantRecord,
    policy: &LoanPolicy,
    state: RunningAssessment,
) -> RunningAssessment {
    match record.employment_type {
        EmploymentType::Unemployed => state.flag(Finding::hard_reject(
            RuleKind::Employment,
            "Unemployed applicants are not eligible.",
        )),
        EmploymentType::SelfEmployed => state.adjust(policy.self_employed_premium),
        EmploymentType::Salaried => state,
    }
}

pub(crate) fn credit_score(
    record: &ApplicantRecord,
    policy: &LoanPolicy,
    state: RunningAssessment,
) -> RunningAssessment {
    if record.cibil_score < policy.minimum_cibil_score {
        state.flag(Finding::warning(
            RuleKind::CreditScore,
            "CIBIL score too low for loan approval.",
        ))
    } else if record.cibil_score < policy.prime_cibil_score {
        let shortfall = (policy.prime_cibil_score - record.cibil_score) as f64;
        state
            .flag(Finding::warning(
                RuleKind::CreditScore,
                "Average CIBIL score. Higher interest rates may apply.",
            ))
            .adjust(shortfall * policy.cibil_penalty_per_point)
    } else {
        state
    }
}

pub(crate) fn repayment_history(
    record: &ApplicantRecord,
    policy: &LoanPolicy,
    state: RunningAssessment,
) -> RunningAssessment {
    match record.past_repayment_history {
        RepaymentHistory::Default => state
            .flag(Finding::hard_reject(
                RuleKind::RepaymentHistory,
                "Previous loan default. Immediate rejection.",
            ))
            .adjust(policy.default_penalty),
        RepaymentHistory::Delayed => state
            .flag(Finding::warning(
                RuleKind::RepaymentHistory,
                "Delayed payments found. Needs review.",
            ))
            .adjust(policy.delayed_payment_penalty),
        RepaymentHistory::Clean => state,
    }
}

/// Skipped when income is not positive; the income floor has already rejected such records.
pub(crate) fn debt_to_income(
    record: &ApplicantRecord,
    policy: &LoanPolicy,
    state: RunningAssessment,
) -> RunningAssessment {
    match record.debt_to_income() {
        Some(dti) if dti > policy.max_debt_to_income => state
            .flag(Finding::warning(
                RuleKind::DebtToIncome,
                format!(
                    "High Debt-to-Income Ratio (DTI): {:.2}% exceeds {}% limit.",
                    dti, policy.max_debt_to_income
                ),
            ))
            .adjust(policy.debt_to_income_penalty),
        _ => state,
    }
}

pub(crate) fn existing_loans(
    record: &ApplicantRecord,
    policy: &LoanPolicy,
    state: RunningAssessment,
) -> RunningAssessment {
    let over_limit = record
        .debt_to_income()
        .map(|dti| dti > policy.existing_loans_debt_to_income)
        .unwrap_or(false);

    if record.monthly_debts > 0 && over_limit {
        return state
            .flag(Finding::warning(
                RuleKind::ExistingLoans,
                "Too many existing loans. Further review needed.",
            ))
            .adjust(policy.existing_loans_penalty);
    }
    state
}

pub(crate) fn loan_to_income(
    record: &ApplicantRecord,
    policy: &LoanPolicy,
    state: RunningAssessment,
) -> RunningAssessment {
    if record.income <= 0 {
        return state;
    }

    let max_loan = record.income.saturating_mul(policy.max_loan_income_multiple);
    if record.loan_amount > max_loan {
        return state
            .flag(Finding::warning(
                RuleKind::LoanToIncome,
                format!(
                    "Requested loan amount exceeds {}x monthly income (Max: ₹{}).",
                    policy.max_loan_income_multiple, max_loan
                ),
            ))
            .adjust(policy.loan_to_income_penalty);
    }
    state
}

pub(crate) fn collateral(
    record: &ApplicantRecord,
    policy: &LoanPolicy,
    state: RunningAssessment,
) -> RunningAssessment {
    if record.loan_amount > policy.collateral_threshold && !record.collateral_provided {
        return state
            .flag(Finding::warning(
                RuleKind::Collateral,
                format!(
                    "Collateral is mandatory for loans exceeding ₹{}.",
                    describe_amount(policy.collateral_threshold)
                ),
            ))
            .adjust(policy.collateral_penalty);
    }
    state
}

pub(crate) fn tenure(
    record: &ApplicantRecord,
    policy: &LoanPolicy,
    state: RunningAssessment,
) -> RunningAssessment {
    if record.loan_tenure > policy.max_standard_tenure && record.purpose != LoanPurpose::Home {
        return state
            .flag(Finding::warning(
                RuleKind::Tenure,
                format!(
                    "Only home loans can have tenures longer than {} years.",
                    policy.max_standard_tenure
                ),
            ))
            .adjust(policy.tenure_penalty);
    }
    state
}

/// An applicant above the age limit without a co-applicant is penalized; otherwise any
/// co-applicant earns the discount, including applicants above the age limit.
pub(crate) fn co_applicant(
    record: &ApplicantRecord,
    policy: &LoanPolicy,
    state: RunningAssessment,
) -> RunningAssessment {
    if record.age > policy.co_applicant_age && !record.co_applicant {
        state
            .flag(Finding::warning(
                RuleKind::CoApplicant,
                format!(
                    "Co-applicant required for applicants above {} years of age.",
                    policy.co_applicant_age
                ),
            ))
            .adjust(policy.co_applicant_penalty)
    } else if record.co_applicant {
        state.adjust(-policy.co_applicant_discount)
    } else {
        state
    }
}

fn group_thousands(amount: i64) -> String {
    let digits = amount.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    if amount < 0 {
        grouped.insert(0, '-');
    }
    grouped
}

/// Whole lakh amounts read as "10 Lakhs"; anything else falls back to grouped digits.
fn describe_amount(amount: i64) -> String {
    const LAKH: i64 = 100_000;
    if amount >= LAKH && amount % LAKH == 0 {
        format!("{} Lakhs", amount / LAKH)
    } else {
        group_thousands(amount)
    }
}
