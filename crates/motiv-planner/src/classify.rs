use motiv_core::{Category, DEFAULT_SUBCATEGORY};

use crate::matching::contains_word;
use crate::taxonomy::{CategoryEntry, TAXONOMY};

/// A keyword matched on word boundaries is stronger evidence than one buried
/// inside a longer word.
const BOUNDARY_BOOST: f64 = 1.5;
/// Applied when any of the category's support words also appears.
const SUPPORT_BOOST: f64 = 1.3;

#[derive(Debug, Clone, PartialEq)]
pub struct Classification {
    pub category: Category,
    pub subcategory: &'static str,
    /// In [0, 1]; 0.0 when no keyword matched.
    pub confidence: f64,
    /// Keywords of the chosen category found in the phrase, in table order.
    pub keywords: Vec<&'static str>,
}

impl Classification {
    fn unmatched() -> Self {
        Classification {
            category: Category::Other,
            subcategory: DEFAULT_SUBCATEGORY,
            confidence: 0.0,
            keywords: Vec::new(),
        }
    }
}

/// Pick the category whose best keyword scores highest for `phrase`.
///
/// A keyword scores `len(keyword) / len(phrase)`, boosted for a word-boundary
/// match and again when a support word is present. A category's score is its
/// best keyword's. On equal scores the earlier taxonomy entry wins.
pub fn classify(phrase: &str) -> Classification {
    let lower = phrase.to_lowercase();
    let len = lower.chars().count();
    if len == 0 {
        return Classification::unmatched();
    }

    let mut best: Option<(&CategoryEntry, f64)> = None;
    for entry in TAXONOMY.iter() {
        let score = category_score(entry, &lower, len);
        if score > 0.0 && best.is_none_or(|(_, top)| score > top) {
            best = Some((entry, score));
        }
    }

    match best {
        None => Classification::unmatched(),
        Some((entry, score)) => Classification {
            category: entry.category,
            subcategory: subcategory(entry, &lower),
            confidence: score.min(1.0),
            keywords: entry
                .keywords
                .iter()
                .copied()
                .filter(|kw| lower.contains(kw))
                .collect(),
        },
    }
}

fn category_score(entry: &CategoryEntry, lower: &str, len: usize) -> f64 {
    let supported = entry.support.iter().any(|w| lower.contains(w));
    entry
        .keywords
        .iter()
        .filter(|kw| lower.contains(*kw))
        .map(|kw| {
            let mut score = kw.chars().count() as f64 / len as f64;
            if contains_word(lower, kw) {
                score *= BOUNDARY_BOOST;
            }
            if supported {
                score *= SUPPORT_BOOST;
            }
            score
        })
        .fold(0.0, f64::max)
}

/// First subcategory (in table order) with a keyword in the phrase.
fn subcategory(entry: &CategoryEntry, lower: &str) -> &'static str {
    entry
        .subcategories
        .iter()
        .find(|(_, kws)| kws.iter().any(|kw| lower.contains(kw)))
        .map_or(DEFAULT_SUBCATEGORY, |(name, _)| *name)
}
