use std::sync::LazyLock;

use regex::Regex;

/// Contraction expansions, applied in order. The irregular forms come first so
/// the generic `n't` rule does not turn `can't` into `ca not`.
static CONTRACTIONS: LazyLock<Vec<(Regex, &'static str)>> = LazyLock::new(|| {
    vec![
        (Regex::new(r"(?i)\bcan['’]t\b").unwrap(), "cannot"),
        (Regex::new(r"(?i)\bwon['’]t\b").unwrap(), "will not"),
        (Regex::new(r"(?i)\b(\w+)n['’]t\b").unwrap(), "${1} not"),
        (Regex::new(r"(?i)\b(\w+)['’]m\b").unwrap(), "${1} am"),
        (Regex::new(r"(?i)\b(\w+)['’]ve\b").unwrap(), "${1} have"),
        (Regex::new(r"(?i)\b(\w+)['’]re\b").unwrap(), "${1} are"),
        (Regex::new(r"(?i)\b(\w+)['’]ll\b").unwrap(), "${1} will"),
    ]
});

/// Unit abbreviations folded to the canonical vocabulary later stages match on.
static UNITS: LazyLock<Vec<(Regex, &'static str)>> = LazyLock::new(|| {
    vec![
        // "2hrs", "2 hr" -> "2 hours"
        (Regex::new(r"(?i)(\d)\s*hrs?\b").unwrap(), "${1} hours"),
        (Regex::new(r"(?i)\bhrs?\b").unwrap(), "hours"),
        // "30mins", "30 min" -> "30 minutes"
        (Regex::new(r"(?i)(\d)\s*mins?\b").unwrap(), "${1} minutes"),
        (Regex::new(r"(?i)\bmins?\b").unwrap(), "minutes"),
        // "2hours", "45minutes" -> "2 hours", "45 minutes"
        (
            Regex::new(r"(?i)(\d)(hours?|minutes?)\b").unwrap(),
            "${1} ${2}",
        ),
    ]
});

/// "1 hour and 30 minutes" is one duration, not two activities.
static COMPOUND_DURATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(\d+(?:\.\d+)?\s*hours?)\s+and\s+(\d+(?:\.\d+)?\s*minutes?)").unwrap()
});

static WHITESPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

/// Rewrite raw input into the canonical form the splitter and extractors
/// expect. Casing is left alone; matching downstream is case-insensitive.
pub fn normalize(raw: &str) -> String {
    let mut text = WHITESPACE.replace_all(raw.trim(), " ").into_owned();
    for (pat, replacement) in CONTRACTIONS.iter() {
        text = pat.replace_all(&text, *replacement).into_owned();
    }
    for (pat, replacement) in UNITS.iter() {
        text = pat.replace_all(&text, *replacement).into_owned();
    }
    COMPOUND_DURATION
        .replace_all(&text, "${1} ${2}")
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn folds_hour_abbreviations() {
        assert_eq!(normalize("ran for 2 hrs"), "ran for 2 hours");
        assert_eq!(normalize("ran for 1hr"), "ran for 1 hours");
        assert_eq!(normalize("read for an hr"), "read for an hours");
    }

    #[test]
    fn folds_minute_abbreviations() {
        assert_eq!(normalize("walked 30 min"), "walked 30 minutes");
        assert_eq!(normalize("walked 30mins"), "walked 30 minutes");
        assert_eq!(normalize("yoga 45minutes"), "yoga 45 minutes");
    }

    #[test]
    fn leaves_words_containing_units_alone() {
        assert_eq!(
            normalize("admin work for a minute"),
            "admin work for a minute"
        );
        assert_eq!(normalize("threw shrimp"), "threw shrimp");
    }

    #[test]
    fn expands_contractions_keeping_case() {
        assert_eq!(normalize("Didn't go to the gym"), "Did not go to the gym");
        assert_eq!(normalize("I can't focus"), "I cannot focus");
        assert_eq!(normalize("I won't lie"), "I will not lie");
        assert_eq!(normalize("I'm tired"), "I am tired");
        assert_eq!(normalize("we've been out"), "we have been out");
    }

    #[test]
    fn expands_curly_apostrophes() {
        assert_eq!(normalize("didn’t sleep"), "did not sleep");
    }

    #[test]
    fn collapses_whitespace() {
        assert_eq!(
            normalize("  walked \t 30   minutes \n"),
            "walked 30 minutes"
        );
    }

    #[test]
    fn folds_compound_duration_conjunction() {
        assert_eq!(normalize("ran 1 hr and 30 mins"), "ran 1 hours 30 minutes");
        assert_eq!(
            normalize("studied 1.5 hours and 30 minutes"),
            "studied 1.5 hours 30 minutes"
        );
    }

    #[test]
    fn activity_conjunction_untouched() {
        assert_eq!(
            normalize("walked 30 minutes and watched TV"),
            "walked 30 minutes and watched TV"
        );
    }

    #[test]
    fn empty_input_stays_empty() {
        assert_eq!(normalize("   "), "");
    }
}
