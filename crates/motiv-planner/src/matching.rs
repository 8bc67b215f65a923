//! Word-boundary helpers shared by the extractors.
//!
//! A boundary is the start or end of the text, or any non-alphanumeric
//! character. Both sides are expected to be lower-cased already.

fn is_boundary(c: Option<char>) -> bool {
    c.is_none_or(|c| !c.is_alphanumeric())
}

/// `needle` occurs as a whole word (or phrase) somewhere in `haystack`.
pub fn contains_word(haystack: &str, needle: &str) -> bool {
    if needle.is_empty() {
        return false;
    }
    haystack.match_indices(needle).any(|(i, m)| {
        is_boundary(haystack[..i].chars().next_back())
            && is_boundary(haystack[i + m.len()..].chars().next())
    })
}

/// Endings an inflected form may add to a base word.
const INFLECTIONS: &[&str] = &["", "s", "es", "d", "ed", "ly", "er", "est", "ing", "ness"];

/// Some word in `haystack` is `needle` or `needle` plus a common ending:
/// `intense` hits `intensely`, but `hard` does not hit `hardware` and `fast`
/// does not hit `breakfast`.
pub fn contains_word_form(haystack: &str, needle: &str) -> bool {
    if needle.is_empty() {
        return false;
    }
    haystack.match_indices(needle).any(|(i, m)| {
        if !is_boundary(haystack[..i].chars().next_back()) {
            return false;
        }
        let rest = &haystack[i + m.len()..];
        let end = rest.find(|c: char| !c.is_alphanumeric()).unwrap_or(rest.len());
        INFLECTIONS.contains(&&rest[..end])
    })
}

/// Whole-word match that also accepts a trailing plural `s`.
pub fn contains_word_or_plural(haystack: &str, needle: &str) -> bool {
    contains_word(haystack, needle) || contains_word(haystack, &format!("{needle}s"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whole_word() {
        assert!(contains_word("went to the park", "park"));
        assert!(contains_word("park, then home", "park"));
        assert!(!contains_word("found parking", "park"));
        assert!(!contains_word("did homework", "home"));
        assert!(contains_word("went to meal prep class", "meal prep"));
    }

    #[test]
    fn word_forms() {
        assert!(contains_word_form("studied intensely", "intense"));
        assert!(contains_word_form("a harder climb", "hard"));
        assert!(contains_word_form("fast-paced run", "fast"));
        assert!(contains_word_form("fast", "fast"));
        assert!(!contains_word_form("ate breakfast", "fast"));
        assert!(!contains_word_form("fixed hardware", "hard"));
        assert!(!contains_word_form("went to a funeral", "fun"));
    }

    #[test]
    fn plural() {
        assert!(contains_word_or_plural("used two laptops", "laptop"));
        assert!(contains_word_or_plural("on my laptop", "laptop"));
        assert!(!contains_word_or_plural("laptopbag", "laptop"));
    }

    #[test]
    fn empty_needle_never_matches() {
        assert!(!contains_word("anything", ""));
        assert!(!contains_word_form("anything", ""));
    }

    #[test]
    fn multibyte_neighbours() {
        assert!(contains_word("café·gym time", "gym"));
        assert!(!contains_word("ügym", "gym"));
    }
}
