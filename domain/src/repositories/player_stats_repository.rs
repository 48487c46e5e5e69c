use crate::models::StatsPayload;
use crate::types::TimeStamped;

#[async_trait::async_trait]
pub trait PlayerStatsRepository {
    /// Fetches the full stats history, stamped with the time the request was issued.
    async fn fetch_stats_history(&self) -> anyhow::Result<TimeStamped<StatsPayload>>;
}
