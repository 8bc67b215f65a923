pub mod classify;
pub mod config;
pub mod context;
pub mod duration;
pub mod matching;
pub mod merge;
pub mod normalize;
pub mod pipeline;
pub mod planner;
pub mod segment;
pub mod signals;
pub mod taxonomy;

pub use config::{ConfigError, PlannerConfig};
pub use pipeline::run_session;
pub use planner::Planner;
