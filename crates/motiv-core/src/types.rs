use std::fmt;

use serde::{Deserialize, Serialize};

/// Subcategory assigned when no refinement keyword matches.
pub const DEFAULT_SUBCATEGORY: &str = "general";

/// Duration (minutes) used when nothing in the text states or implies one.
pub const DEFAULT_DURATION_MINUTES: u32 = 30;

/// Closed set of activity categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Exercise,
    Study,
    Work,
    Entertainment,
    Habits,
    Social,
    Creative,
    Wellness,
    Travel,
    Other,
}

impl Category {
    /// Every category a keyword can select, in taxonomy order.
    /// `Other` is the fallback and is never matched directly.
    pub const CLASSIFIED: [Category; 9] = [
        Category::Exercise,
        Category::Study,
        Category::Work,
        Category::Entertainment,
        Category::Habits,
        Category::Social,
        Category::Creative,
        Category::Wellness,
        Category::Travel,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Exercise => "exercise",
            Category::Study => "study",
            Category::Work => "work",
            Category::Entertainment => "entertainment",
            Category::Habits => "habits",
            Category::Social => "social",
            Category::Creative => "creative",
            Category::Wellness => "wellness",
            Category::Travel => "travel",
            Category::Other => "other",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Qualitative effort level.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intensity {
    Low,
    #[default]
    Medium,
    High,
}

impl Intensity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Intensity::Low => "low",
            Intensity::Medium => "medium",
            Intensity::High => "high",
        }
    }
}

impl fmt::Display for Intensity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mood {
    Positive,
    Negative,
    #[default]
    Neutral,
}

impl Mood {
    pub fn as_str(&self) -> &'static str {
        match self {
            Mood::Positive => "positive",
            Mood::Negative => "negative",
            Mood::Neutral => "neutral",
        }
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeOfDay {
    Morning,
    Afternoon,
    Evening,
}

impl TimeOfDay {
    pub fn as_str(&self) -> &'static str {
        match self {
            TimeOfDay::Morning => "morning",
            TimeOfDay::Afternoon => "afternoon",
            TimeOfDay::Evening => "evening",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Weather {
    Good,
    Bad,
}

impl Weather {
    pub fn as_str(&self) -> &'static str {
        match self {
            Weather::Good => "good",
            Weather::Bad => "bad",
        }
    }
}

/// Situational attributes attached to an activity. Every key is optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ActivityContext {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub with_others: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_of_day: Option<TimeOfDay>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weather: Option<Weather>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tools: Vec<String>,
}

impl ActivityContext {
    pub fn is_empty(&self) -> bool {
        self.location.is_none()
            && self.with_others.is_none()
            && self.time_of_day.is_none()
            && self.weather.is_none()
            && self.tools.is_empty()
    }

    /// Lay `local` over `self`: every key set in `local` replaces the
    /// corresponding key here, unset keys leave `self` untouched.
    pub fn overlay(mut self, local: ActivityContext) -> ActivityContext {
        if local.location.is_some() {
            self.location = local.location;
        }
        if local.with_others.is_some() {
            self.with_others = local.with_others;
        }
        if local.time_of_day.is_some() {
            self.time_of_day = local.time_of_day;
        }
        if local.weather.is_some() {
            self.weather = local.weather;
        }
        if !local.tools.is_empty() {
            self.tools = local.tools;
        }
        self
    }
}

/// One structured activity extracted from a phrase of user text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Activity {
    /// Normalized phrase the record was derived from (original casing kept).
    pub text: String,
    pub category: Category,
    pub subcategory: String,
    /// Minutes, always >= 1.
    pub duration: u32,
    pub intensity: Intensity,
    pub mood: Mood,
    #[serde(default)]
    pub context: ActivityContext,
    /// Classification certainty in [0, 1]. 0.0 means the category is a fallback.
    pub confidence: f64,
    /// Taxonomy keywords of the chosen category found in the phrase.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub keywords: Vec<String>,
    /// 1-based position in the final list.
    pub sequence_order: u32,
    pub is_first: bool,
    pub is_last: bool,
    /// Number of input phrases folded into this record, when more than one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub merged_count: Option<u32>,
}

impl Activity {
    /// The record emitted when nothing usable could be extracted:
    /// `other`, zero confidence, medium intensity, neutral mood, empty context.
    pub fn unclassified(text: &str, duration: u32) -> Self {
        Activity {
            text: text.to_string(),
            category: Category::Other,
            subcategory: DEFAULT_SUBCATEGORY.to_string(),
            duration: duration.max(1),
            intensity: Intensity::Medium,
            mood: Mood::Neutral,
            context: ActivityContext::default(),
            confidence: 0.0,
            keywords: Vec::new(),
            sequence_order: 1,
            is_first: true,
            is_last: true,
            merged_count: None,
        }
    }

    /// True when the category was chosen by keyword evidence.
    pub fn is_classified(&self) -> bool {
        self.category != Category::Other && self.confidence > 0.0
    }
}
