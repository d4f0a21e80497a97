use super::super::domain::{Finding, Severity};
use serde::{Deserialize, Serialize};

/// Adjudication outcome for a loan application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Decision {
    Approved,
    Rejected,
    MoreInfoNeeded,
}

impl Decision {
    pub fn label(&self) -> &'static str {
        match self {
            Decision::Approved => "Approved",
            Decision::Rejected => "Rejected",
            Decision::MoreInfoNeeded => "More Info Needed",
        }
    }
}

/// Any hard reject wins; an empty trail approves; anything else needs more information.
pub(crate) fn decide_outcome(findings: &[Finding]) -> Decision {
    if findings
        .iter()
        .any(|finding| finding.severity == Severity::HardReject)
    {
        return Decision::Rejected;
    }

    if findings.is_empty() {
        Decision::Approved
    } else {
        Decision::MoreInfoNeeded
    }
}
