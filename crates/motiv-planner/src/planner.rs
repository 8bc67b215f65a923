use motiv_core::{Activity, ActivityContext};
use tracing::debug;

use crate::classify::classify;
use crate::config::PlannerConfig;
use crate::context::{global_context, phrase_context};
use crate::duration::extract_duration;
use crate::merge::post_process;
use crate::normalize::normalize;
use crate::segment::smart_split;
use crate::signals::{detect_mood, estimate_intensity};

/// Turns free-form reflection text into an ordered list of activities.
///
/// Stateless apart from its config: construct once and share by reference.
#[derive(Debug, Clone, Default)]
pub struct Planner {
    config: PlannerConfig,
}

impl Planner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: PlannerConfig) -> Self {
        Planner { config }
    }

    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    /// Parse `text` into activities. Never fails and never returns an empty
    /// list: input with nothing usable yields a single `other` record carrying
    /// the raw text.
    pub fn parse(&self, text: &str) -> Vec<Activity> {
        let normalized = normalize(text);
        let phrases = smart_split(&normalized, self.config.min_phrase_chars);
        debug!(phrases = phrases.len(), "segmented input");

        if phrases.is_empty() {
            debug!("no usable phrase, emitting default activity");
            return vec![Activity::unclassified(text, self.config.default_minutes)];
        }

        let global = global_context(text);
        let activities = phrases
            .iter()
            .map(|phrase| self.parse_phrase(phrase, &global))
            .collect();
        post_process(activities, self.config.merge_window_minutes)
    }

    fn parse_phrase(&self, phrase: &str, global: &ActivityContext) -> Activity {
        let class = classify(phrase);
        let duration = extract_duration(phrase, &self.config);
        debug!(
            phrase,
            category = %class.category,
            subcategory = class.subcategory,
            confidence = class.confidence,
            duration,
            "classified phrase"
        );

        Activity {
            text: phrase.to_string(),
            category: class.category,
            subcategory: class.subcategory.to_string(),
            duration,
            intensity: estimate_intensity(phrase, class.category, duration),
            mood: detect_mood(phrase),
            context: phrase_context(global, phrase),
            confidence: class.confidence,
            keywords: class.keywords.iter().map(|k| k.to_string()).collect(),
            // numbered by post-processing
            sequence_order: 0,
            is_first: false,
            is_last: false,
            merged_count: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use motiv_core::{Category, Intensity, Mood, TimeOfDay, DEFAULT_SUBCATEGORY};

    fn parse(text: &str) -> Vec<Activity> {
        Planner::new().parse(text)
    }

    #[test]
    fn walk_and_show() {
        let out = parse("walked 30 minutes and watched 2 episodes of a show");
        assert_eq!(out.len(), 2);

        assert_eq!(out[0].category, Category::Exercise);
        assert_eq!(out[0].subcategory, "walking");
        assert_eq!(out[0].duration, 30);
        assert_eq!(out[0].intensity, Intensity::Medium);
        assert_eq!(out[0].sequence_order, 1);
        assert!(out[0].is_first && !out[0].is_last);

        assert_eq!(out[1].category, Category::Entertainment);
        assert_eq!(out[1].subcategory, "streaming");
        assert_eq!(out[1].duration, 50);
        assert_eq!(out[1].intensity, Intensity::Low);
        assert_eq!(out[1].sequence_order, 2);
        assert!(out[1].is_last);
    }

    #[test]
    fn intense_study_session() {
        let out = parse("studied intensely for 2 hours at the library with friends");
        assert_eq!(out.len(), 1);
        let a = &out[0];
        assert_eq!(a.category, Category::Study);
        assert_eq!(a.intensity, Intensity::High);
        assert_eq!(a.duration, 120);
        assert_eq!(a.context.location.as_deref(), Some("library"));
        assert_eq!(a.context.with_others, Some(true));
        assert!(a.keywords.contains(&"studied".to_string()));
    }

    #[test]
    fn empty_input_yields_default() {
        for text in ["", "   \n\t"] {
            let out = parse(text);
            assert_eq!(out.len(), 1);
            let a = &out[0];
            assert_eq!(a.category, Category::Other);
            assert_eq!(a.confidence, 0.0);
            assert_eq!(a.duration, 30);
            assert_eq!(a.text, text);
            assert!(a.is_first && a.is_last);
        }
    }

    #[test]
    fn noise_only_input_yields_default() {
        let out = parse("ok, hm");
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].category, Category::Other);
        assert_eq!(out[0].text, "ok, hm");
    }

    #[test]
    fn unknown_phrase_is_other() {
        let out = parse("stared at the wall");
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].category, Category::Other);
        assert_eq!(out[0].subcategory, DEFAULT_SUBCATEGORY);
        assert_eq!(out[0].confidence, 0.0);
        assert_eq!(out[0].duration, 30);
    }

    #[test]
    fn repeated_episodes_merge() {
        let out = parse(
            "watched an episode, then watched another episode, then watched one more episode",
        );
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].duration, 75);
        assert_eq!(out[0].merged_count, Some(3));
        assert!(out[0].text.ends_with("(×3)"));
    }

    #[test]
    fn compound_duration_stays_one_activity() {
        let out = parse("studied 1.5 hours and 30 minutes");
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].duration, 120);
    }

    #[test]
    fn global_context_reaches_every_phrase() {
        let out = parse("This morning I jogged at the park, then read a book at home");
        assert_eq!(out.len(), 2);
        assert!(out
            .iter()
            .all(|a| a.context.time_of_day == Some(TimeOfDay::Morning)));
        assert_eq!(out[0].context.location.as_deref(), Some("park"));
        assert_eq!(out[0].subcategory, "cardio");
        assert_eq!(out[1].context.location.as_deref(), Some("home"));
        assert_eq!(out[1].subcategory, "reading");
    }

    #[test]
    fn mood_is_per_phrase() {
        let out = parse("had a great run and a boring meeting");
        assert_eq!(out[0].mood, Mood::Positive);
        assert_eq!(out[1].mood, Mood::Negative);
        assert_eq!(out[1].category, Category::Work);
    }

    #[test]
    fn invariants_hold_for_varied_input() {
        let planner = Planner::new();
        let inputs = [
            "gym",
            "0 minutes of nothing",
            "quick shower; long time gaming; all day at the office",
            "I can't believe I slept 10 hrs",
            "!!!",
        ];
        for text in inputs {
            let out = planner.parse(text);
            assert!(!out.is_empty(), "{text}");
            for a in &out {
                assert!(a.duration >= 1, "{text}");
                assert!((0.0..=1.0).contains(&a.confidence), "{text}");
                if a.confidence == 0.0 {
                    assert_eq!(a.category, Category::Other, "{text}");
                }
            }
            assert!(out[0].is_first);
            assert!(out[out.len() - 1].is_last);
        }
    }

    #[test]
    fn separator_only_input_never_yields_empty_text() {
        let planner = Planner::with_config(PlannerConfig {
            min_phrase_chars: 0,
            ..PlannerConfig::default()
        });
        let out = planner.parse(",,");
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].text, ",,");
        assert_eq!(out[0].category, Category::Other);
    }

    #[test]
    fn config_changes_episode_length() {
        let planner = Planner::with_config(PlannerConfig {
            minutes_per_episode: 40,
            ..PlannerConfig::default()
        });
        let out = planner.parse("watched 2 episodes");
        assert_eq!(out[0].duration, 80);
        assert_eq!(planner.config().minutes_per_episode, 40);
    }

    #[test]
    fn planner_is_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Planner>();
    }
}
