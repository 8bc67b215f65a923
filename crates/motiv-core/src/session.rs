//! Boundary to the collaborators that consume parsed activities.
//!
//! Scoring, message generation and storage live outside this workspace. They
//! plug in through [`ActivityEnricher`] and [`SessionStore`].

use serde::{Deserialize, Serialize};

use crate::types::Activity;

/// An activity after the scoring collaborator has attached its results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnrichedActivity {
    #[serde(flatten)]
    pub activity: Activity,
    pub calories_burned: u32,
    /// 1..=10
    pub productivity_score: u8,
    pub motivation_message: String,
}

/// Attaches calories, a productivity score and a message to one activity.
pub trait ActivityEnricher {
    fn enrich(&self, activity: &Activity) -> EnrichedActivity;
}

/// One completed reflection: the enriched activities plus aggregate totals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    /// RFC 3339, UTC.
    pub recorded_at: String,
    pub activities: Vec<EnrichedActivity>,
    pub total_calories: u32,
    pub avg_productivity: f64,
}

impl Session {
    pub fn new(recorded_at: String, activities: Vec<EnrichedActivity>) -> Self {
        let total_calories = activities.iter().map(|a| a.calories_burned).sum();
        let avg_productivity = if activities.is_empty() {
            0.0
        } else {
            let sum: u32 = activities
                .iter()
                .map(|a| u32::from(a.productivity_score))
                .sum();
            f64::from(sum) / activities.len() as f64
        };
        Session {
            recorded_at,
            activities,
            total_calories,
            avg_productivity,
        }
    }

    /// Build a session stamped with the current UTC time.
    pub fn now(activities: Vec<EnrichedActivity>) -> Self {
        Session::new(now_rfc3339(), activities)
    }
}

/// Append-only sink for completed sessions.
pub trait SessionStore {
    type Error;

    fn append(&mut self, session: &Session) -> Result<(), Self::Error>;
}

fn now_rfc3339() -> String {
    let now = time::OffsetDateTime::now_utc();
    now.format(&time::format_description::well_known::Rfc3339)
        .unwrap_or_else(|_| now.unix_timestamp().to_string())
}
