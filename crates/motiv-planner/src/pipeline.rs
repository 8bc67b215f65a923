use motiv_core::{ActivityEnricher, Session, SessionStore};
use tracing::debug;

use crate::planner::Planner;

/// Parse `text`, enrich every activity, stamp a session and hand it to the
/// store. The stored session is returned on success.
pub fn run_session<E, S>(
    planner: &Planner,
    enricher: &E,
    store: &mut S,
    text: &str,
) -> Result<Session, S::Error>
where
    E: ActivityEnricher + ?Sized,
    S: SessionStore + ?Sized,
{
    let enriched = planner
        .parse(text)
        .iter()
        .map(|activity| enricher.enrich(activity))
        .collect();
    let session = Session::now(enriched);
    store.append(&session)?;
    debug!(
        activities = session.activities.len(),
        total_calories = session.total_calories,
        "session recorded"
    );
    Ok(session)
}
