use mindease_core::models::responses::ResponseSet;
use mindease_core::models::triage::{TriageLevel, TriageVerdict};

use crate::instruments::phq9::SELF_HARM_ITEM;
use crate::scoring::total;

/// PHQ-9 total at or above which triage flags very high depressive symptoms.
pub const PHQ9_HIGH_TOTAL: u32 = 20;

/// GAD-7 total at or above which triage flags very high anxiety symptoms.
pub const GAD7_HIGH_TOTAL: u32 = 15;

/// Self-harm item score at or above which the verdict escalates to crisis.
pub const CRISIS_ITEM_SCORE: u32 = 2;

pub const REASON_SELF_HARM_ITEM: &str =
    "PHQ-9 item 9 indicates thoughts of self-harm";
pub const REASON_PHQ9_HIGH_TOTAL: &str = "Very high depressive total (PHQ-9 >= 20)";
pub const REASON_GAD7_HIGH_TOTAL: &str = "Very high anxiety total (GAD-7 >= 15)";

/// Classify overall risk from both questionnaires.
///
/// Every signal that fires contributes a reason, whatever the final level.
/// Escalation is first-match: self-harm item >= 2 is a crisis; any signal
/// at all is high; otherwise none. Unanswered or missing entries never
/// raise a signal.
pub fn triage(phq9: &ResponseSet, gad7: &ResponseSet) -> TriageVerdict {
    let phq_total = total(phq9);
    let gad_total = total(gad7);
    let mut reasons = Vec::new();

    let item_risk = has_self_harm_risk(phq9);
    if item_risk {
        reasons.push(REASON_SELF_HARM_ITEM.to_string());
    }
    let phq_high = phq_total >= PHQ9_HIGH_TOTAL;
    if phq_high {
        reasons.push(REASON_PHQ9_HIGH_TOTAL.to_string());
    }
    let gad_high = gad_total >= GAD7_HIGH_TOTAL;
    if gad_high {
        reasons.push(REASON_GAD7_HIGH_TOTAL.to_string());
    }

    let level = if phq9.effective(SELF_HARM_ITEM) >= CRISIS_ITEM_SCORE {
        TriageLevel::Crisis
    } else if item_risk || phq_high || gad_high {
        TriageLevel::High
    } else {
        TriageLevel::None
    };

    TriageVerdict { level, reasons }
}

/// Whether the self-harm item alone warrants follow-up.
pub fn has_self_harm_risk(phq9: &ResponseSet) -> bool {
    phq9.effective(SELF_HARM_ITEM) >= 1
}
