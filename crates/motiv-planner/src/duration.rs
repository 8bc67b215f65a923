use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::config::PlannerConfig;

const ALL_DAY_MINUTES: f64 = 480.0;
const BRIEF_MINUTES: f64 = 15.0;
const LONG_MINUTES: f64 = 120.0;

const WALK_MINUTES: u32 = 30;
const WORKOUT_MINUTES: u32 = 60;
const STUDY_MINUTES: u32 = 90;
const WORK_MINUTES: u32 = 120;

const NUM: &str = r"(\d+(?:\.\d+)?)";

type Extract = fn(&Captures) -> Option<f64>;

/// Numeric duration shapes, most specific first. Ranges come before bare
/// quantities so "2-3 hours" reads as a range, not as "3 hours".
static NUMERIC: LazyLock<Vec<(Regex, Extract)>> = LazyLock::new(|| {
    vec![
        // "1.5 hours 30 minutes", "1 hour and 30 minutes"
        rule(
            format!(r"{NUM}\s*hours?\s+(?:and\s+)?{NUM}\s*minutes?"),
            hours_and_minutes,
        ),
        rule(format!(r"{NUM}\s*to\s*{NUM}\s*hours?"), hour_range),
        // "2-3 hours", "20-30 minutes"
        rule(format!(r"{NUM}\s*-\s*{NUM}\s*(hours?|minutes?)"), unit_range),
        // "45 minutes", "a 45-minute run"
        rule(format!(r"{NUM}[\s-]*minutes?"), minutes),
        rule(format!(r"{NUM}[\s-]*(?:hours?|h)\b"), hours),
    ]
});

fn rule(pattern: String, extract: Extract) -> (Regex, Extract) {
    (Regex::new(&format!("(?i){pattern}")).unwrap(), extract)
}

fn hours_and_minutes(c: &Captures) -> Option<f64> {
    Some(num(c, 1)? * 60.0 + num(c, 2)?)
}

fn hour_range(c: &Captures) -> Option<f64> {
    Some((num(c, 1)? + num(c, 2)?) / 2.0 * 60.0)
}

fn unit_range(c: &Captures) -> Option<f64> {
    Some((num(c, 1)? + num(c, 2)?) / 2.0 * unit(c, 3))
}

fn minutes(c: &Captures) -> Option<f64> {
    num(c, 1)
}

fn hours(c: &Captures) -> Option<f64> {
    Some(num(c, 1)? * 60.0)
}

static KEYWORD_DURATIONS: LazyLock<Vec<(Regex, f64)>> = LazyLock::new(|| {
    vec![
        (
            Regex::new(r"(?i)\b(?:all|whole|entire)\s+day\b").unwrap(),
            ALL_DAY_MINUTES,
        ),
        // word-start only: "quickly" and "shortly" count too
        (
            Regex::new(r"(?i)\b(?:quick|briefly|short)").unwrap(),
            BRIEF_MINUTES,
        ),
        (
            Regex::new(r"(?i)\b(?:long\s+time|ages|forever)\b").unwrap(),
            LONG_MINUTES,
        ),
    ]
});

static EPISODE_MENTION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(?:episodes?|eps?|shows?|movies?)\b").unwrap()
});

static EPISODE_COUNT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(\d+)\s+(?:more\s+)?(?:episodes?|eps?|shows?|movies?)\b").unwrap()
});

static EPISODE_COUNT_WORD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\b(one|two|three|four|five|six|seven|eight|nine|ten)\s+(?:more\s+)?(?:episodes?|eps?|shows?|movies?)\b",
    )
    .unwrap()
});

fn num(c: &Captures, i: usize) -> Option<f64> {
    c.get(i)?.as_str().parse().ok()
}

fn unit(c: &Captures, i: usize) -> f64 {
    match c.get(i) {
        Some(m) if m.as_str().to_lowercase().starts_with("hour") => 60.0,
        _ => 1.0,
    }
}

/// Estimate a phrase's duration in minutes. Always at least 1.
///
/// Duration words ("all day", "quickly") win, then explicit numbers, then
/// episode counts, then a per-activity guess, then `config.default_minutes`.
pub fn extract_duration(phrase: &str, config: &PlannerConfig) -> u32 {
    let minutes = explicit_minutes(phrase)
        .map(to_minutes)
        .unwrap_or_else(|| fallback_minutes(&phrase.to_lowercase(), config));
    minutes.max(1)
}

fn explicit_minutes(phrase: &str) -> Option<f64> {
    let keyword = KEYWORD_DURATIONS
        .iter()
        .find(|(re, _)| re.is_match(phrase))
        .map(|(_, minutes)| *minutes);
    keyword.or_else(|| {
        NUMERIC.iter().find_map(|(re, extract)| {
            re.captures(phrase)
                .and_then(|c| extract(&c))
                .filter(|m| m.is_finite())
        })
    })
}

fn to_minutes(minutes: f64) -> u32 {
    minutes.round().clamp(1.0, f64::from(u32::MAX)) as u32
}

fn fallback_minutes(lower: &str, config: &PlannerConfig) -> u32 {
    if EPISODE_MENTION.is_match(lower) {
        return episode_count(lower).saturating_mul(config.minutes_per_episode);
    }
    if lower.contains("walk") {
        WALK_MINUTES
    } else if ["workout", "exercise", "gym"].iter().any(|w| lower.contains(w)) {
        WORKOUT_MINUTES
    } else if ["study", "studied", "studying", "read", "homework"]
        .iter()
        .any(|w| lower.contains(w))
    {
        STUDY_MINUTES
    } else if ["work", "meeting", "project"].iter().any(|w| lower.contains(w)) {
        WORK_MINUTES
    } else {
        config.default_minutes
    }
}

/// Number of episodes/shows/movies stated in the phrase; 1 when unstated.
fn episode_count(lower: &str) -> u32 {
    let digits = EPISODE_COUNT
        .captures(lower)
        .and_then(|c| c[1].parse::<u32>().ok());
    let words = || {
        EPISODE_COUNT_WORD
            .captures(lower)
            .and_then(|c| number_word(&c[1]))
    };
    digits.or_else(words).filter(|n| *n > 0).unwrap_or(1)
}

fn number_word(word: &str) -> Option<u32> {
    const WORDS: [&str; 10] = [
        "one", "two", "three", "four", "five", "six", "seven", "eight", "nine", "ten",
    ];
    let word = word.to_lowercase();
    WORDS
        .iter()
        .position(|w| *w == word)
        .map(|i| i as u32 + 1)
}
