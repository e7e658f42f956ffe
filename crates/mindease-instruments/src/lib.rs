//! mindease-instruments
//!
//! Screening questionnaire definitions and the decision logic built on them:
//! scoring, severity bands, safety triage and self-help tips. Pure data and
//! pure functions, with no storage dependency.

pub mod assessment;
pub mod error;
pub mod info;
pub mod instruments;
pub mod scoring;
pub mod support;
pub mod tips;
pub mod triage;

use mindease_core::models::responses::ResponseSet;
use mindease_core::models::scale::ScaleKind;
use mindease_core::models::severity::Severity;

use error::InstrumentError;
use scoring::{COMMON_OPTIONS, Item, ResponseOption};

/// Trait implemented by each screening questionnaire.
pub trait Instrument: Send + Sync {
    /// Unique identifier for this instrument (e.g., "phq9", "gad7").
    fn id(&self) -> &str;

    /// Human-readable name (e.g., "PHQ-9").
    fn name(&self) -> &str;

    fn kind(&self) -> ScaleKind;

    /// Item prompts in presentation order.
    fn items(&self) -> &[Item];

    /// The answer choices offered for every item.
    fn options(&self) -> &[ResponseOption] {
        &COMMON_OPTIONS
    }

    fn item_count(&self) -> usize {
        self.items().len()
    }

    fn max_total(&self) -> u32 {
        self.kind().max_total()
    }

    /// Map a total onto this instrument's severity band.
    fn classify(&self, total: u32) -> Severity {
        scoring::severity(total, self.kind())
    }

    /// Format answers as plain text, one line per item.
    fn format_responses(&self, responses: &ResponseSet) -> String {
        let mut output = format!("## {}\n\n", self.name());
        for (index, item) in self.items().iter().enumerate() {
            let answer = responses
                .get(index)
                .and_then(|v| self.options().iter().find(|o| o.value == v))
                .map(|o| o.label.as_str())
                .unwrap_or("(unanswered)");
            output.push_str(&format!("{}. {}: {}\n", item.number, item.prompt, answer));
        }
        output.push_str(&format!(
            "\nTotal: {} / {}\n",
            scoring::total(responses),
            self.max_total()
        ));
        output
    }
}

/// Return all registered instruments.
pub fn all_instruments() -> Vec<Box<dyn Instrument>> {
    vec![
        Box::new(instruments::phq9::Phq9),
        Box::new(instruments::gad7::Gad7),
    ]
}

/// Look up an instrument by ID.
pub fn get_instrument(id: &str) -> Result<Box<dyn Instrument>, InstrumentError> {
    all_instruments()
        .into_iter()
        .find(|i| i.id() == id)
        .ok_or_else(|| InstrumentError::UnknownInstrument(id.to_string()))
}

pub fn instrument_for(kind: ScaleKind) -> Box<dyn Instrument> {
    match kind {
        ScaleKind::Phq9 => Box::new(instruments::phq9::Phq9),
        ScaleKind::Gad7 => Box::new(instruments::gad7::Gad7),
    }
}
