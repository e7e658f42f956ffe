use mindease_core::models::responses::{ResponseSet, UNANSWERED};
use mindease_core::models::scale::ScaleKind;
use mindease_core::models::severity::{Gad7Severity, Phq9Severity, Severity};
use mindease_instruments::error::InstrumentError;
use mindease_instruments::info::severity_info;
use mindease_instruments::{Instrument, all_instruments, get_instrument, instrument_for};

#[test]
fn registry_holds_both_scales() {
    let ids: Vec<String> = all_instruments().iter().map(|i| i.id().to_string()).collect();
    assert_eq!(ids, vec!["phq9", "gad7"]);

    let phq = get_instrument("phq9").unwrap();
    assert_eq!(phq.name(), "PHQ-9");
    assert_eq!(phq.item_count(), 9);
    assert_eq!(phq.max_total(), 27);

    let gad = instrument_for(ScaleKind::Gad7);
    assert_eq!(gad.item_count(), 7);
    assert_eq!(gad.max_total(), 21);

    assert!(matches!(
        get_instrument("pss10"),
        Err(InstrumentError::UnknownInstrument(id)) if id == "pss10"
    ));
}

#[test]
fn items_are_numbered_in_order() {
    for instrument in all_instruments() {
        assert_eq!(instrument.items().len(), instrument.kind().item_count());
        for (index, item) in instrument.items().iter().enumerate() {
            assert_eq!(item.number as usize, index + 1);
            assert!(!item.prompt.is_empty());
        }
    }
}

#[test]
fn options_cover_zero_to_three() {
    let values: Vec<i32> = instrument_for(ScaleKind::Phq9)
        .options()
        .iter()
        .map(|o| o.value)
        .collect();
    assert_eq!(values, vec![0, 1, 2, 3]);
}

#[test]
fn classify_matches_scale() {
    let phq = instrument_for(ScaleKind::Phq9);
    assert_eq!(phq.classify(15), Severity::Phq9(Phq9Severity::ModeratelySevere));
    let gad = instrument_for(ScaleKind::Gad7);
    assert_eq!(gad.classify(15), Severity::Gad7(Gad7Severity::Severe));
}

#[test]
fn formatted_responses_list_answers_and_total() {
    let gad = instrument_for(ScaleKind::Gad7);
    let responses =
        ResponseSet::from_values(ScaleKind::Gad7, vec![1, 2, UNANSWERED, 0, 0, 0, 3]).unwrap();
    let text = gad.format_responses(&responses);
    assert!(text.starts_with("## GAD-7"));
    assert!(text.contains("1. Feeling nervous, anxious, or on edge: Several days"));
    assert!(text.contains("3. Worrying too much about different things: (unanswered)"));
    assert!(text.contains("Total: 6 / 21"));
}

#[test]
fn every_band_has_info_text() {
    for level in Phq9Severity::ALL {
        let info = severity_info(level.into());
        assert!(!info.label.is_empty());
        assert!(!info.description.is_empty());
        assert!(!info.recommendation.is_empty());
    }
    for level in Gad7Severity::ALL {
        assert!(!severity_info(level.into()).label.is_empty());
    }
    assert_eq!(severity_info(Phq9Severity::ModeratelySevere.into()).label, "Moderately severe");
}
