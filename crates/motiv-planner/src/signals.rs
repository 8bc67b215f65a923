use motiv_core::{Category, Intensity, Mood};

use crate::matching::contains_word_form;

const HIGH_WORDS: &[&str] = &[
    "intense", "hard", "difficult", "challenging", "fast", "heavy", "vigorous", "extreme",
    "maximum", "all-out", "brutal", "hardcore",
];
const MEDIUM_WORDS: &[&str] = &[
    "moderate", "normal", "regular", "steady", "medium", "average", "standard",
];
const LOW_WORDS: &[&str] = &[
    "easy", "light", "gentle", "slow", "relaxed", "casual", "minimal", "basic", "simple",
    "lazy",
];

const POSITIVE_WORDS: &[&str] = &[
    "good", "great", "awesome", "amazing", "fun", "enjoyed", "enjoy", "love", "happy",
    "productive", "excellent", "fantastic", "nice", "wonderful", "proud", "motivated",
    "energized", "refreshed", "satisfying",
];
const NEGATIVE_WORDS: &[&str] = &[
    "bad", "terrible", "boring", "bored", "hate", "awful", "struggled", "tired", "exhausted",
    "stressed", "frustrated", "sad", "annoyed", "miserable", "wasted",
];

/// Above this many minutes a low-effort default is bumped to medium.
const LONG_SESSION_MINUTES: u32 = 120;
/// Below this many minutes a medium default is bumped to high.
const SHORT_SESSION_MINUTES: u32 = 20;

/// Effort a category implies when the text says nothing explicit.
pub fn category_default(category: Category) -> Intensity {
    match category {
        Category::Exercise
        | Category::Study
        | Category::Work
        | Category::Creative
        | Category::Travel
        | Category::Other => Intensity::Medium,
        Category::Entertainment | Category::Habits | Category::Social | Category::Wellness => {
            Intensity::Low
        }
    }
}

/// Explicit intensity words win (high, then medium, then low). Otherwise the
/// category default, adjusted for unusually long or short sessions.
pub fn estimate_intensity(phrase: &str, category: Category, duration: u32) -> Intensity {
    let lower = phrase.to_lowercase();
    let explicit = [
        (HIGH_WORDS, Intensity::High),
        (MEDIUM_WORDS, Intensity::Medium),
        (LOW_WORDS, Intensity::Low),
    ]
    .into_iter()
    .find(|(words, _)| words.iter().any(|w| contains_word_form(&lower, w)))
    .map(|(_, level)| level);
    if let Some(level) = explicit {
        return level;
    }

    match category_default(category) {
        Intensity::Low if duration > LONG_SESSION_MINUTES => Intensity::Medium,
        Intensity::Medium if duration < SHORT_SESSION_MINUTES => Intensity::High,
        level => level,
    }
}

/// Positive words are checked first; a phrase with both reads positive.
pub fn detect_mood(phrase: &str) -> Mood {
    let lower = phrase.to_lowercase();
    let hit = |words: &[&str]| words.iter().any(|w| contains_word_form(&lower, w));
    if hit(POSITIVE_WORDS) {
        Mood::Positive
    } else if hit(NEGATIVE_WORDS) {
        Mood::Negative
    } else {
        Mood::Neutral
    }
}
