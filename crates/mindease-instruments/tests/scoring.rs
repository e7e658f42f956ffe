use mindease_core::models::responses::{ResponseSet, UNANSWERED};
use mindease_core::models::scale::ScaleKind;
use mindease_core::models::severity::{Gad7Severity, Phq9Severity, Severity};
use mindease_instruments::scoring::{gad7_severity, phq9_severity, severity, total};

fn phq(values: [i32; 9]) -> ResponseSet {
    ResponseSet::from_values(ScaleKind::Phq9, values.to_vec()).unwrap()
}

#[test]
fn total_is_arithmetic_sum() {
    assert_eq!(total(&phq([1, 2, 3, 0, 1, 2, 3, 0, 1])), 13);
    assert_eq!(total(&phq([3; 9])), 27);
    assert_eq!(total(&phq([0; 9])), 0);
}

#[test]
fn unanswered_and_out_of_range_count_as_zero() {
    let mut values = [0; 9];
    values[2] = UNANSWERED;
    let set = phq(values);
    assert_eq!(total(&set), 0);
    assert!(!set.all_answered());

    assert_eq!(total(&phq([7, -3, 2, 0, 0, 0, 0, 0, i32::MIN])), 2);
    assert_eq!(total(&ResponseSet::new(ScaleKind::Gad7)), 0);
}

#[test]
fn total_is_monotonic_in_each_item() {
    for index in 0..9 {
        let mut values = [1; 9];
        let mut previous = 0;
        for v in 0..=3 {
            values[index] = v;
            let t = total(&phq(values));
            assert!(t >= previous);
            previous = t;
        }
    }
}

#[test]
fn phq9_breakpoints() {
    let expected = [
        (0, Phq9Severity::Minimal),
        (4, Phq9Severity::Minimal),
        (5, Phq9Severity::Mild),
        (9, Phq9Severity::Mild),
        (10, Phq9Severity::Moderate),
        (14, Phq9Severity::Moderate),
        (15, Phq9Severity::ModeratelySevere),
        (19, Phq9Severity::ModeratelySevere),
        (20, Phq9Severity::Severe),
        (27, Phq9Severity::Severe),
    ];
    for (t, level) in expected {
        assert_eq!(phq9_severity(t), level, "total {t}");
    }
}

#[test]
fn gad7_breakpoints() {
    let expected = [
        (0, Gad7Severity::Minimal),
        (4, Gad7Severity::Minimal),
        (5, Gad7Severity::Mild),
        (9, Gad7Severity::Mild),
        (10, Gad7Severity::Moderate),
        (14, Gad7Severity::Moderate),
        (15, Gad7Severity::Severe),
        (21, Gad7Severity::Severe),
    ];
    for (t, level) in expected {
        assert_eq!(gad7_severity(t), level, "total {t}");
    }
}

#[test]
fn bands_are_contiguous_and_exhaustive() {
    for kind in ScaleKind::ALL {
        let mut previous_rank = 0;
        let mut ranks_seen = Vec::new();
        for t in 0..=kind.max_total() {
            let band = severity(t, kind);
            assert_eq!(band.kind(), kind);
            // Never skips a band or moves backwards.
            assert!(band.rank() == previous_rank || band.rank() == previous_rank + 1);
            previous_rank = band.rank();
            if !ranks_seen.contains(&band.rank()) {
                ranks_seen.push(band.rank());
            }
        }
        let band_count = match kind {
            ScaleKind::Phq9 => Phq9Severity::ALL.len(),
            ScaleKind::Gad7 => Gad7Severity::ALL.len(),
        };
        assert_eq!(ranks_seen.len(), band_count);
    }
}

#[test]
fn totals_beyond_range_stay_in_top_band() {
    assert_eq!(severity(1000, ScaleKind::Phq9), Severity::Phq9(Phq9Severity::Severe));
    assert_eq!(severity(u32::MAX, ScaleKind::Gad7), Severity::Gad7(Gad7Severity::Severe));
}
