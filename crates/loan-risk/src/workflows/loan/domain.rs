use serde::{Deserialize, Serialize};

/// Applicant snapshot submitted for loan eligibility and pricing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicantRecord {
    pub age: i64,
    /// Monthly income in currency units.
    pub income: i64,
    pub purpose: LoanPurpose,
    pub cibil_score: i64,
    pub past_repayment_history: RepaymentHistory,
    pub employment_type: EmploymentType,
    /// Existing monthly obligations (loans, rent, etc.).
    pub monthly_debts: i64,
    pub loan_amount: i64,
    /// Tenure in years.
    pub loan_tenure: i64,
    #[serde(default)]
    pub collateral_provided: bool,
    #[serde(default)]
    pub co_applicant: bool,
}

impl ApplicantRecord {
    /// Monthly debts as a percentage of income, or `None` when income is not positive.
    pub fn debt_to_income(&self) -> Option<f64> {
        if self.income <= 0 {
            return None;
        }
        Some(self.monthly_debts as f64 / self.income as f64 * 100.0)
    }
}

/// Stated purpose of the loan. Matching is case-insensitive and unknown purposes pass through.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum LoanPurpose {
    Home,
    Business,
    Other(String),
}

impl LoanPurpose {
    pub fn as_str(&self) -> &str {
        match self {
            LoanPurpose::Home => "home",
            LoanPurpose::Business => "business",
            LoanPurpose::Other(value) => value,
        }
    }
}

impl From<&str> for LoanPurpose {
    fn from(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "home" => Self::Home,
            "business" => Self::Business,
            other => Self::Other(other.to_string()),
        }
    }
}

impl From<String> for LoanPurpose {
    fn from(value: String) -> Self {
        Self::from(value.as_str())
    }
}

impl From<LoanPurpose> for String {
    fn from(value: LoanPurpose) -> Self {
        value.as_str().to_string()
    }
}

/// Past repayment behaviour. Unrecognized values carry no penalty and map to `Clean`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum RepaymentHistory {
    Clean,
    Delayed,
    Default,
}

impl RepaymentHistory {
    pub fn as_str(&self) -> &'static str {
        match self {
            RepaymentHistory::Clean => "clean",
            RepaymentHistory::Delayed => "delayed",
            RepaymentHistory::Default => "default",
        }
    }
}

impl From<&str> for RepaymentHistory {
    fn from(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "delayed" => Self::Delayed,
            "default" => Self::Default,
            _ => Self::Clean,
        }
    }
}

impl From<String> for RepaymentHistory {
    fn from(value: String) -> Self {
        Self::from(value.as_str())
    }
}

impl From<RepaymentHistory> for String {
    fn from(value: RepaymentHistory) -> Self {
        value.as_str().to_string()
    }
}

/// Employment classification. Unrecognized values map to `Salaried`, which no rule penalizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum EmploymentType {
    Salaried,
    SelfEmployed,
    Unemployed,
}

impl EmploymentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            EmploymentType::Salaried => "salaried",
            EmploymentType::SelfEmployed => "self-employed",
            EmploymentType::Unemployed => "unemployed",
        }
    }
}

impl From<&str> for EmploymentType {
    fn from(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "self-employed" => Self::SelfEmployed,
            "unemployed" => Self::Unemployed,
            _ => Self::Salaried,
        }
    }
}

impl From<String> for EmploymentType {
    fn from(value: String) -> Self {
        Self::from(value.as_str())
    }
}

impl From<EmploymentType> for String {
    fn from(value: EmploymentType) -> Self {
        value.as_str().to_string()
    }
}

/// How strongly a finding weighs on the final decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    SoftWarning,
    HardReject,
}

impl Severity {
    pub fn label(&self) -> &'static str {
        match self {
            Severity::SoftWarning => "warning",
            Severity::HardReject => "hard reject",
        }
    }
}

/// Identifies the rule (or screening check) that produced a finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleKind {
    AgeRange,
    IncomeFloor,
    Employment,
    CreditScore,
    RepaymentHistory,
    DebtToIncome,
    ExistingLoans,
    LoanToIncome,
    Collateral,
    Tenure,
    CoApplicant,
    TranscriptAge,
    TranscriptIncome,
}

/// Single reason emitted while evaluating an application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Finding {
    pub rule: RuleKind,
    pub severity: Severity,
    pub message: String,
}

impl Finding {
    pub fn new(rule: RuleKind, severity: Severity, message: impl Into<String>) -> Self {
        Self {
            rule,
            severity,
            message: message.into(),
        }
    }

    pub fn hard_reject(rule: RuleKind, message: impl Into<String>) -> Self {
        Self::new(rule, Severity::HardReject, message)
    }

    pub fn warning(rule: RuleKind, message: impl Into<String>) -> Self {
        Self::new(rule, Severity::SoftWarning, message)
    }
}
