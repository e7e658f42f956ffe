use serde::{Deserialize, Serialize};
use ts_rs::TS;

use mindease_core::models::severity::{Gad7Severity, Phq9Severity, Severity};

/// Display text for a severity band. Educational only, not a diagnosis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SeverityInfo {
    pub label: String,
    pub description: String,
    pub recommendation: String,
}

impl SeverityInfo {
    fn new(label: &str, description: &str, recommendation: &str) -> Self {
        Self {
            label: label.to_string(),
            description: description.to_string(),
            recommendation: recommendation.to_string(),
        }
    }
}

pub fn severity_info(severity: Severity) -> SeverityInfo {
    match severity {
        Severity::Phq9(level) => phq9_info(level),
        Severity::Gad7(level) => gad7_info(level),
    }
}

pub fn phq9_info(level: Phq9Severity) -> SeverityInfo {
    match level {
        Phq9Severity::Minimal => SeverityInfo::new(
            "Minimal",
            "Depressive symptoms are in the minimal range and may reflect everyday mood swings or short-term stress.",
            "Keep up good sleep, eating and social contact, and keep noticing small changes in how you feel.",
        ),
        Phq9Severity::Mild => SeverityInfo::new(
            "Mild",
            "Mild depressive symptoms that occasionally affect mood and productivity, while daily functioning is usually maintained.",
            "Try regular exercise, behavioral activation and social support; if this persists, talk it over with a professional.",
        ),
        Phq9Severity::Moderate => SeverityInfo::new(
            "Moderate",
            "Moderate depressive symptoms may already be affecting sleep, appetite or interest and call for more structured support.",
            "Contact a counsellor or mental health professional soon to discuss further assessment and support.",
        ),
        Phq9Severity::ModeratelySevere => SeverityInfo::new(
            "Moderately severe",
            "Moderately severe symptoms often noticeably affect work, study or relationships; actively seek help.",
            "Arrange a professional assessment soon and share how you are doing with people you trust.",
        ),
        Phq9Severity::Severe => SeverityInfo::new(
            "Severe",
            "Severe depressive symptoms indicate higher risk and may come with strong hopelessness or thoughts of self-harm.",
            "Contact a mental health service or local medical provider right away, and seek emergency help if needed.",
        ),
    }
}

pub fn gad7_info(level: Gad7Severity) -> SeverityInfo {
    match level {
        Gad7Severity::Minimal => SeverityInfo::new(
            "Minimal",
            "Anxiety symptoms are in the minimal range; you appear relatively settled.",
            "Keep your current stress management habits, such as regular exercise, relaxation practice and rest.",
        ),
        Gad7Severity::Mild => SeverityInfo::new(
            "Mild",
            "Mild anxiety symptoms may flare in particular situations but remain manageable overall.",
            "Try breathing exercises, a worry log and problem solving, and talk to a professional if needed.",
        ),
        Gad7Severity::Moderate => SeverityInfo::new(
            "Moderate",
            "Moderate anxiety may cause noticeable swings in concentration, sleep or physical comfort.",
            "Seek an assessment from a counsellor or medical professional soon, alongside ongoing self-help practice.",
        ),
        Gad7Severity::Severe => SeverityInfo::new(
            "Severe",
            "Severe anxiety often comes with constant tension and physical symptoms that significantly affect daily life.",
            "Contact a professional soon for a full assessment and to learn about treatment and medication options.",
        ),
    }
}
