use std::sync::LazyLock;

use mindease_core::models::scale::ScaleKind;

use crate::Instrument;
use crate::scoring::Item;

/// Zero-based index of item 9 (thoughts of self-harm), the item triage
/// watches regardless of the total.
pub const SELF_HARM_ITEM: usize = 8;

/// PHQ-9: Patient Health Questionnaire, depression module.
/// 9 items, each rated 0–3. Total 0–27.
pub struct Phq9;

impl Instrument for Phq9 {
    fn id(&self) -> &str {
        "phq9"
    }

    fn name(&self) -> &str {
        "PHQ-9"
    }

    fn kind(&self) -> ScaleKind {
        ScaleKind::Phq9
    }

    fn items(&self) -> &[Item] {
        static ITEMS: LazyLock<Vec<Item>> = LazyLock::new(|| {
            [
                "Little interest or pleasure in doing things",
                "Feeling down, depressed, or hopeless",
                "Trouble falling or staying asleep, or sleeping too much",
                "Feeling tired or having little energy",
                "Poor appetite or overeating",
                "Feeling bad about yourself, or that you are a failure or have let yourself or your family down",
                "Trouble concentrating on things, such as reading or watching television",
                "Moving or speaking so slowly that other people could have noticed, or being so fidgety or restless that you have been moving around a lot more than usual",
                "Thoughts that you would be better off dead, or of hurting yourself in some way",
            ]
            .iter()
            .zip(1u8..)
            .map(|(prompt, number)| Item {
                number,
                prompt: prompt.to_string(),
            })
            .collect()
        });
        &ITEMS
    }
}
