//! CBT-style self-help tips conditioned on severity.
//!
//! Output order is fixed: baseline, then depression tips, then anxiety
//! tips, then the closing line. Nothing is reordered or deduplicated.

use mindease_core::models::severity::{Gad7Severity, Phq9Severity};

pub const BASELINE_TIPS: [&str; 4] = [
    "Keep a regular routine and sleep schedule: fix your wake-up and bedtime, and cut back on screens in the evening",
    "Behavioral activation: list three small, doable, worthwhile activities (a 10-minute walk, a shower, tidying your desk) and work through them from easiest to hardest",
    "Worry scheduling: write worries down and set aside a fixed 10-20 minutes a day as worry time; outside that window, park worries until later",
    "Examine the evidence: for a recurring negative automatic thought, write down the evidence for and against it and form a more balanced alternative",
];

pub const DEPRESSION_TIPS: [&str; 2] = [
    "Graded activity plan: rank meaningful activities by difficulty and step up one level each day",
    "Pleasant activity diary: log each day's activities with a mood rating to see how activity and mood move together",
];

pub const ANXIETY_TIPS: [&str; 2] = [
    "Breathing and grounding: try 4-6 breathing or the 5-4-3-2-1 senses exercise to bring physical arousal down",
    "Probability re-estimation: put a realistic number on how likely the feared event is, and plan concrete steps for if it happens",
];

pub const CLOSING_TIP: &str =
    "If symptoms persist or affect daily functioning, seek professional help (counselling or psychiatry) promptly";

/// Build the tip list for a pair of severity levels.
pub fn tips(phq: Phq9Severity, gad: Gad7Severity) -> Vec<String> {
    let mut tips: Vec<String> = BASELINE_TIPS.iter().map(|t| t.to_string()).collect();

    if phq >= Phq9Severity::Moderate {
        tips.extend(DEPRESSION_TIPS.iter().map(|t| t.to_string()));
    }

    if gad >= Gad7Severity::Moderate {
        tips.extend(ANXIETY_TIPS.iter().map(|t| t.to_string()));
    }

    tips.push(CLOSING_TIP.to_string());
    tips
}
