pub mod resolution_stats;

pub use resolution_stats::{ResolutionStats, StatsSnapshot};
