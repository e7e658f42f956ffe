use serde::{Deserialize, Serialize};
use ts_rs::TS;

use mindease_core::models::responses::ResponseSet;
use mindease_core::models::severity::{Gad7Severity, Phq9Severity};
use mindease_core::models::snapshot::AssessmentSnapshot;
use mindease_core::models::triage::TriageVerdict;

use crate::info::{SeverityInfo, gad7_info, phq9_info};
use crate::scoring::{gad7_severity, phq9_severity, total};
use crate::support::support_tips;
use crate::tips::tips;
use crate::triage::triage;

/// Everything the result view needs, derived from the two response sets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AssessmentResult {
    pub phq_total: u32,
    pub gad_total: u32,
    pub phq_level: Phq9Severity,
    pub gad_level: Gad7Severity,
    pub phq_info: SeverityInfo,
    pub gad_info: SeverityInfo,
    pub triage: TriageVerdict,
    pub tips: Vec<String>,
    pub support_tips: Vec<String>,
    /// Both questionnaires have every item answered.
    pub complete: bool,
}

impl AssessmentResult {
    pub fn evaluate(phq9: &ResponseSet, gad7: &ResponseSet) -> Self {
        let phq_total = total(phq9);
        let gad_total = total(gad7);
        let phq_level = phq9_severity(phq_total);
        let gad_level = gad7_severity(gad_total);
        let verdict = triage(phq9, gad7);
        let support = support_tips(verdict.level);

        Self {
            phq_total,
            gad_total,
            phq_level,
            gad_level,
            phq_info: phq9_info(phq_level),
            gad_info: gad7_info(gad_level),
            triage: verdict,
            tips: tips(phq_level, gad_level),
            support_tips: support,
            complete: phq9.all_answered() && gad7.all_answered(),
        }
    }

    /// The record persisted for this result, stamped with `ts` (ms since epoch).
    pub fn to_snapshot(
        &self,
        ts: i64,
        phq9: &ResponseSet,
        gad7: &ResponseSet,
    ) -> AssessmentSnapshot {
        AssessmentSnapshot {
            ts,
            phq9: phq9.values().to_vec(),
            gad7: gad7.values().to_vec(),
            phq_total: self.phq_total,
            gad_total: self.gad_total,
            phq_level: self.phq_level,
            gad_level: self.gad_level,
        }
    }
}
