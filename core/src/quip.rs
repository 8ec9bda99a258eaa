use std::borrow::Cow;

use crate::face::RollOutcome;

pub const ROLLING_TEXT: &str = "Rolling...";

const FACE_QUIPS: [&str; 6] = [
    "Ace in the hole!",
    "Deuce!",
    "Hat trick!",
    "Fantastic four!",
    "High five!",
    "Maxed out!",
];

// Indexed by sum - 2.
const CRAPS_QUIPS: [&str; 11] = [
    "Snake eyes!",
    "Ace deuce!",
    "Little Joe!",
    "Fever five!",
    "Jimmy Hicks!",
    "Natural seven!",
    "Eighter from Decatur!",
    "Nina!",
    "Big Dick!",
    "Yo-leven!",
    "Boxcars!",
];

pub fn face_quip(outcome: RollOutcome) -> &'static str {
    FACE_QUIPS[usize::from(outcome.value() - 1)]
}

/// Craps name for a two-dice total; totals without a name read back as `"{sum}!"`.
pub fn craps_quip(sum: u32) -> Cow<'static, str> {
    sum.checked_sub(2)
        .and_then(|idx| CRAPS_QUIPS.get(idx as usize))
        .map(|quip| Cow::Borrowed(*quip))
        .unwrap_or_else(|| Cow::Owned(format!("{sum}!")))
}
