use std::sync::LazyLock;

use regex::Regex;

/// Separator rules, in application order. Each rule is applied to every
/// fragment the previous rules produced, so order matters: later rules only
/// ever see the output of earlier ones.
static SPLIT_RULES: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        // "walked, then read" / "walked; and read"
        r"(?i)\s*[,;]\s*(?:(?:and|then)\s+)?",
        // "I walked. Then I read"
        r"(?i)\.\s+(?:then|after)\s+(?:that\s+)?(?:I\s+)?",
        r"(?i)\s+and\s+(?:then\s+)?(?:I\s+)?",
        r"(?i)\s+then\s+(?:I\s+)?",
        r"(?i)\s+after\s+(?:that\s+)?(?:I\s+)?",
        r"(?i)\s+before\s+(?:that\s+)?(?:I\s+)?",
        r"(?i)\s+while\s+(?:I\s+)?",
        r"(?i)\s+during\s+(?:the\s+)?",
    ]
    .iter()
    .map(|p| Regex::new(p).unwrap())
    .collect()
});

/// Split normalized text into candidate activity phrases.
///
/// Fragments are trimmed of surrounding whitespace and terminal punctuation;
/// anything shorter than `min_chars` afterwards is dropped as noise. Empty
/// fragments are always dropped.
pub fn smart_split(text: &str, min_chars: usize) -> Vec<String> {
    let min_chars = min_chars.max(1);
    let fragments = SPLIT_RULES
        .iter()
        .fold(vec![text.to_string()], |fragments, rule| {
            fragments
                .iter()
                .flat_map(|f| rule.split(f).map(str::to_string).collect::<Vec<_>>())
                .collect()
        });

    fragments
        .iter()
        .map(|f| trim_phrase(f))
        .filter(|f| f.chars().count() >= min_chars)
        .map(str::to_string)
        .collect()
}

fn trim_phrase(s: &str) -> &str {
    s.trim_matches(|c: char| c.is_whitespace() || matches!(c, '.' | '!' | '?'))
}
