//! Post-processing over the per-phrase records: duplicate removal, merging of
//! repeated similar activities, and sequence numbering.

use std::collections::HashSet;

use motiv_core::Activity;

/// Drop records whose trimmed, case-folded text was already seen. The first
/// occurrence is kept.
pub fn dedupe(activities: Vec<Activity>) -> Vec<Activity> {
    let mut seen = HashSet::new();
    activities
        .into_iter()
        .filter(|a| seen.insert(a.text.trim().to_lowercase()))
        .collect()
}

/// Fold runs of adjacent records with the same category and subcategory whose
/// durations are within `window_minutes` of the run's first record.
///
/// The merged record keeps the first record's fields, sums the durations,
/// appends ` (×N)` to the text and sets `merged_count`. Records that already
/// carry a `merged_count` are left alone, so merging twice changes nothing.
pub fn merge_similar(activities: Vec<Activity>, window_minutes: u32) -> Vec<Activity> {
    let mut out = Vec::with_capacity(activities.len());
    let mut iter = activities.into_iter().peekable();

    while let Some(mut anchor) = iter.next() {
        if anchor.merged_count.is_some() {
            out.push(anchor);
            continue;
        }

        let mut count = 1u32;
        let mut total = anchor.duration;
        while let Some(next) = iter.next_if(|next| mergeable(&anchor, next, window_minutes)) {
            count += 1;
            total = total.saturating_add(next.duration);
        }

        if count > 1 {
            anchor.text = format!("{} (×{count})", anchor.text);
            anchor.duration = total;
            anchor.merged_count = Some(count);
        }
        out.push(anchor);
    }
    out
}

fn mergeable(anchor: &Activity, next: &Activity, window_minutes: u32) -> bool {
    next.merged_count.is_none()
        && next.category == anchor.category
        && next.subcategory == anchor.subcategory
        && next.duration.abs_diff(anchor.duration) < window_minutes
}

/// Number records 1..=N and flag the first and last.
pub fn assign_sequence(activities: &mut [Activity]) {
    let last = activities.len();
    for (i, a) in activities.iter_mut().enumerate() {
        a.sequence_order = (i + 1) as u32;
        a.is_first = i == 0;
        a.is_last = i + 1 == last;
    }
}

/// Dedupe, merge, then number.
pub fn post_process(activities: Vec<Activity>, window_minutes: u32) -> Vec<Activity> {
    let mut activities = merge_similar(dedupe(activities), window_minutes);
    assign_sequence(&mut activities);
    activities
}

#[cfg(test)]
mod tests {
    use super::*;
    use motiv_core::Category;

    fn record(text: &str, category: Category, sub: &str, duration: u32) -> Activity {
        let mut a = Activity::unclassified(text, duration);
        a.category = category;
        a.subcategory = sub.to_string();
        a.confidence = 0.5;
        a
    }

    fn episode(text: &str) -> Activity {
        record(text, Category::Entertainment, "streaming", 25)
    }

    #[test]
    fn dedupe_is_case_and_space_insensitive() {
        let out = dedupe(vec![
            episode("watched an episode"),
            episode("  Watched an Episode "),
            episode("watched another episode"),
        ]);
        let texts: Vec<_> = out.iter().map(|a| a.text.as_str()).collect();
        assert_eq!(texts, vec!["watched an episode", "watched another episode"]);
    }

    #[test]
    fn three_similar_records_merge() {
        let out = post_process(
            vec![
                episode("watched an episode"),
                episode("watched another episode"),
                episode("watched one more episode"),
            ],
            10,
        );
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].duration, 75);
        assert_eq!(out[0].merged_count, Some(3));
        assert_eq!(out[0].text, "watched an episode (×3)");
        assert!(out[0].is_first && out[0].is_last);
    }

    #[test]
    fn window_is_exclusive() {
        let out = merge_similar(
            vec![
                record("ran a bit", Category::Exercise, "cardio", 20),
                record("ran more", Category::Exercise, "cardio", 30),
            ],
            10,
        );
        assert_eq!(out.len(), 2);
        assert!(out.iter().all(|a| a.merged_count.is_none()));
    }

    #[test]
    fn window_measured_from_anchor() {
        // 25 -> 33 is within 10 of the anchor, 25 -> 40 is not
        let out = merge_similar(
            vec![
                record("jog one", Category::Exercise, "cardio", 25),
                record("jog two", Category::Exercise, "cardio", 33),
                record("jog three", Category::Exercise, "cardio", 40),
            ],
            10,
        );
        assert_eq!(out.len(), 2);
        assert_eq!(out[0].duration, 58);
        assert_eq!(out[0].merged_count, Some(2));
        assert_eq!(out[1].text, "jog three");
    }

    #[test]
    fn different_subcategory_breaks_run() {
        let out = merge_similar(
            vec![
                episode("watched an episode"),
                record("played a game", Category::Entertainment, "gaming", 25),
                episode("watched another episode"),
            ],
            10,
        );
        assert_eq!(out.len(), 3);
    }

    #[test]
    fn post_process_is_idempotent() {
        let input = vec![
            episode("watched an episode"),
            episode("watched another episode"),
            record("walked 30 minutes", Category::Exercise, "walking", 30),
            record("walked again", Category::Exercise, "walking", 35),
            record("read a book", Category::Study, "reading", 90),
        ];
        let once = post_process(input, 10);
        let twice = post_process(once.clone(), 10);
        assert_eq!(once, twice);
        assert_eq!(once.len(), 3);
    }

    #[test]
    fn sequence_flags() {
        let out = post_process(
            vec![
                record("walked", Category::Exercise, "walking", 30),
                record("read", Category::Study, "reading", 90),
                record("napped", Category::Habits, "sleep", 30),
            ],
            10,
        );
        let orders: Vec<_> = out.iter().map(|a| a.sequence_order).collect();
        assert_eq!(orders, vec![1, 2, 3]);
        assert!(out[0].is_first && !out[0].is_last);
        assert!(!out[1].is_first && !out[1].is_last);
        assert!(!out[2].is_first && out[2].is_last);
    }

    #[test]
    fn empty_input() {
        assert!(post_process(Vec::new(), 10).is_empty());
    }
}
