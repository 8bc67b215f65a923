//! Situational context: when, where, with whom, and with what.
//!
//! Time of day and weather are read once from the whole input and apply to
//! every activity. Location, company and tools are read per phrase and laid
//! over the global values.

use std::sync::LazyLock;

use motiv_core::{ActivityContext, TimeOfDay, Weather};
use regex::Regex;

use crate::matching::{contains_word, contains_word_or_plural};

// ── Global cues ──

const TIME_OF_DAY: &[(&[&str], TimeOfDay)] = &[
    (&["this morning", "morning"], TimeOfDay::Morning),
    (&["afternoon"], TimeOfDay::Afternoon),
    (&["evening", "tonight"], TimeOfDay::Evening),
];

const WEATHER: &[(&[&str], Weather)] = &[
    (&["sunny", "nice weather", "beautiful day"], Weather::Good),
    (&["rainy", "raining", "cold", "bad weather"], Weather::Bad),
];

// ── Local cues ──

const LOCATIONS: &[&str] = &[
    "gym", "home", "office", "park", "library", "cafe", "outdoors", "indoors", "bedroom",
    "kitchen",
];

const TOOLS: &[&str] = &[
    "laptop", "computer", "phone", "book", "treadmill", "weights", "bike", "car", "bus",
];

static WITH_OTHERS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\bwith\s+(?:my\s+|the\s+|a\s+|some\s+)?(?:friends?|family|colleagues?|coworkers?|group|team|partner)\b",
    )
    .unwrap()
});

static ALONE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\b(?:alone|solo|by\s+myself)\b").unwrap());

/// Context cues that hold for the whole input.
pub fn global_context(raw: &str) -> ActivityContext {
    let lower = raw.to_lowercase();
    let mentions = |words: &[&str]| words.iter().any(|w| lower.contains(w));
    ActivityContext {
        time_of_day: TIME_OF_DAY
            .iter()
            .find(|(words, _)| mentions(words))
            .map(|(_, t)| *t),
        weather: WEATHER
            .iter()
            .find(|(words, _)| mentions(words))
            .map(|(_, w)| *w),
        ..ActivityContext::default()
    }
}

/// Context cues stated in one phrase.
pub fn local_context(phrase: &str) -> ActivityContext {
    let lower = phrase.to_lowercase();
    // an explicit "alone" outranks a company marker in the same phrase
    let with_others = if ALONE.is_match(&lower) {
        Some(false)
    } else if WITH_OTHERS.is_match(&lower) {
        Some(true)
    } else {
        None
    };
    ActivityContext {
        location: LOCATIONS
            .iter()
            .find(|loc| contains_word(&lower, loc))
            .map(|loc| loc.to_string()),
        with_others,
        tools: TOOLS
            .iter()
            .filter(|tool| contains_word_or_plural(&lower, tool))
            .map(|tool| tool.to_string())
            .collect(),
        ..ActivityContext::default()
    }
}

/// Global context with the phrase's own cues laid on top.
pub fn phrase_context(global: &ActivityContext, phrase: &str) -> ActivityContext {
    global.clone().overlay(local_context(phrase))
}
