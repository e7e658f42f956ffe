use mindease_core::models::severity::{Gad7Severity, Phq9Severity};
use mindease_core::models::triage::TriageLevel;
use mindease_instruments::support::{CRISIS_SUPPORT, HIGH_SUPPORT, support_tips};
use mindease_instruments::tips::{
    ANXIETY_TIPS, BASELINE_TIPS, CLOSING_TIP, DEPRESSION_TIPS, tips,
};

#[test]
fn low_severities_get_baseline_and_closing_only() {
    for phq in [Phq9Severity::Minimal, Phq9Severity::Mild] {
        for gad in [Gad7Severity::Minimal, Gad7Severity::Mild] {
            let list = tips(phq, gad);
            assert_eq!(list.len(), BASELINE_TIPS.len() + 1);
            assert_eq!(list[..4], BASELINE_TIPS.map(String::from));
            assert_eq!(list.last().unwrap(), CLOSING_TIP);
        }
    }
}

#[test]
fn depression_tips_follow_baseline() {
    let list = tips(Phq9Severity::Moderate, Gad7Severity::Minimal);
    assert_eq!(list.len(), 7);
    assert_eq!(list[4], DEPRESSION_TIPS[0]);
    assert_eq!(list[5], DEPRESSION_TIPS[1]);
    assert_eq!(list[6], CLOSING_TIP);
}

#[test]
fn anxiety_tips_follow_depression_tips() {
    let list = tips(Phq9Severity::Severe, Gad7Severity::Severe);
    assert_eq!(list.len(), 9);
    assert_eq!(list[4..6], DEPRESSION_TIPS.map(String::from));
    assert_eq!(list[6..8], ANXIETY_TIPS.map(String::from));
    assert_eq!(list[8], CLOSING_TIP);

    let list = tips(Phq9Severity::Mild, Gad7Severity::Moderate);
    assert_eq!(list.len(), 7);
    assert_eq!(list[4..6], ANXIETY_TIPS.map(String::from));
}

#[test]
fn every_moderate_or_worse_band_adds_tips() {
    for phq in Phq9Severity::ALL {
        let expected = if phq >= Phq9Severity::Moderate { 7 } else { 5 };
        assert_eq!(tips(phq, Gad7Severity::Minimal).len(), expected, "{phq}");
    }
    for gad in Gad7Severity::ALL {
        let expected = if gad >= Gad7Severity::Moderate { 7 } else { 5 };
        assert_eq!(tips(Phq9Severity::Minimal, gad).len(), expected, "{gad}");
    }
}

#[test]
fn tips_are_stable() {
    assert_eq!(
        tips(Phq9Severity::ModeratelySevere, Gad7Severity::Mild),
        tips(Phq9Severity::ModeratelySevere, Gad7Severity::Mild)
    );
}

#[test]
fn support_lines_follow_triage_level() {
    assert!(support_tips(TriageLevel::None).is_empty());
    assert_eq!(support_tips(TriageLevel::High), HIGH_SUPPORT.map(String::from));
    assert_eq!(support_tips(TriageLevel::Crisis), CRISIS_SUPPORT.map(String::from));
}
