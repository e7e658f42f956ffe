use mindease_core::models::triage::TriageLevel;

pub const CRISIS_SUPPORT: [&str; 3] = [
    "Contact local emergency services or go to the nearest emergency department now to keep yourself safe.",
    "If someone you trust is nearby, ask them to stay with you; try not to be alone.",
    "While you wait for professional help, call a crisis hotline or use an online emergency support service.",
];

pub const HIGH_SUPPORT: [&str; 3] = [
    "Book an appointment with a counsellor or psychiatrist soon to discuss assessment and treatment options.",
    "Tell a friend or family member you trust how you are doing and make a safety plan together.",
    "If symptoms get worse or crisis signs appear, contact local emergency services right away.",
];

/// Urgent guidance shown alongside a triage verdict. Empty for `None`.
pub fn support_tips(level: TriageLevel) -> Vec<String> {
    let lines: &[&str] = match level {
        TriageLevel::Crisis => &CRISIS_SUPPORT,
        TriageLevel::High => &HIGH_SUPPORT,
        TriageLevel::None => &[],
    };
    lines.iter().map(|l| l.to_string()).collect()
}
