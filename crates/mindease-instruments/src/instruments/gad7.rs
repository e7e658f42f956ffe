use std::sync::LazyLock;

use mindease_core::models::scale::ScaleKind;

use crate::Instrument;
use crate::scoring::Item;

/// GAD-7: Generalized Anxiety Disorder scale.
/// 7 items, each rated 0–3. Total 0–21.
pub struct Gad7;

impl Instrument for Gad7 {
    fn id(&self) -> &str {
        "gad7"
    }

    fn name(&self) -> &str {
        "GAD-7"
    }

    fn kind(&self) -> ScaleKind {
        ScaleKind::Gad7
    }

    fn items(&self) -> &[Item] {
        static ITEMS: LazyLock<Vec<Item>> = LazyLock::new(|| {
            [
                "Feeling nervous, anxious, or on edge",
                "Not being able to stop or control worrying",
                "Worrying too much about different things",
                "Trouble relaxing",
                "Being so restless that it is hard to sit still",
                "Becoming easily annoyed or irritable",
                "Feeling afraid, as if something awful might happen",
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
