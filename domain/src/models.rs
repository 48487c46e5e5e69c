mod statistics;
mod stats_payload;

pub use statistics::{ActivePlayerCount, ServerHealth, TopScores, WinLossRatio};
pub use stats_payload::{LatestStats, StatsPayload};
