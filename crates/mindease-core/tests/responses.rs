use mindease_core::error::CoreError;
use mindease_core::models::responses::{ResponseSet, UNANSWERED, effective_value};
use mindease_core::models::scale::ScaleKind;

#[test]
fn new_set_is_fully_unanswered() {
    let phq = ResponseSet::new(ScaleKind::Phq9);
    assert_eq!(phq.len(), 9);
    assert!(phq.values().iter().all(|v| *v == UNANSWERED));
    assert_eq!(phq.answered_count(), 0);
    assert!(!phq.all_answered());

    assert_eq!(ResponseSet::new(ScaleKind::Gad7).len(), 7);
}

#[test]
fn from_values_rejects_wrong_length() {
    let err = ResponseSet::from_values(ScaleKind::Gad7, vec![0; 9]).unwrap_err();
    assert!(matches!(
        err,
        CoreError::WrongLength {
            kind: ScaleKind::Gad7,
            expected: 7,
            actual: 9
        }
    ));
}

#[test]
fn set_rejects_invalid_values_and_indexes() {
    let mut gad = ResponseSet::new(ScaleKind::Gad7);
    assert!(matches!(
        gad.set(0, 4),
        Err(CoreError::InvalidResponse { value: 4, .. })
    ));
    assert!(matches!(
        gad.set(0, -2),
        Err(CoreError::InvalidResponse { value: -2, .. })
    ));
    assert!(matches!(
        gad.set(7, 1),
        Err(CoreError::ItemOutOfRange { index: 7, .. })
    ));

    gad.set(6, 3).unwrap();
    assert_eq!(gad.get(6), Some(3));
    gad.clear(6).unwrap();
    assert_eq!(gad.get(6), Some(UNANSWERED));
}

#[test]
fn one_unanswered_item_blocks_all_answered() {
    let mut values = vec![0; 9];
    values[4] = UNANSWERED;
    let phq = ResponseSet::from_values(ScaleKind::Phq9, values).unwrap();
    assert_eq!(phq.answered_count(), 8);
    assert!(!phq.all_answered());
    assert!(!phq.is_answered(4));
    assert!(phq.is_answered(3));
}

#[test]
fn effective_value_coerces_everything_outside_range_to_zero() {
    assert_eq!(effective_value(UNANSWERED), 0);
    assert_eq!(effective_value(-7), 0);
    assert_eq!(effective_value(4), 0);
    assert_eq!(effective_value(i32::MAX), 0);
    for v in 0..=3 {
        assert_eq!(effective_value(v), v as u32);
    }
}

#[test]
fn effective_of_missing_index_is_zero() {
    let phq = ResponseSet::from_values(ScaleKind::Phq9, vec![3; 9]).unwrap();
    assert_eq!(phq.effective(8), 3);
    assert_eq!(phq.effective(9), 0);
}

#[test]
fn severity_bands_are_ordered() {
    use mindease_core::models::severity::{Gad7Severity, Phq9Severity, Severity};

    assert!(Phq9Severity::Minimal < Phq9Severity::Mild);
    assert!(Phq9Severity::ModeratelySevere < Phq9Severity::Severe);
    assert!(Gad7Severity::Moderate < Gad7Severity::Severe);

    let ranks: Vec<u8> = Phq9Severity::ALL.iter().map(|s| s.rank()).collect();
    assert_eq!(ranks, vec![0, 1, 2, 3, 4]);

    let tagged = Severity::from(Gad7Severity::Moderate);
    assert_eq!(tagged.kind(), ScaleKind::Gad7);
    assert_eq!(tagged.rank(), 2);
    assert_eq!(tagged.as_str(), "moderate");
}
