use serde::Deserialize;

use super::{ActivePlayerCount, ServerHealth, TopScores, WinLossRatio};

/// Body of `GET /api/player-stats-history`.
///
/// Every field is a history ordered oldest first, one element per record the
/// server has stored. Only the newest element of each sequence is ever shown.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct StatsPayload {
    #[serde(default)]
    pub timestamps: Vec<u64>,
    pub active_players: Vec<ActivePlayerCount>,
    pub top_scores: Vec<TopScores>,
    #[serde(default)]
    pub server_health: Vec<ServerHealth>,
    #[serde(default)]
    pub win_loss_ratio: Vec<WinLossRatio>,
}

/// The newest element of each history in a [`StatsPayload`].
///
/// A field is `None` when its history was empty.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LatestStats {
    pub record_id: Option<u64>,
    pub active_players: Option<ActivePlayerCount>,
    pub top_scores: Option<TopScores>,
    pub server_health: Option<ServerHealth>,
    pub win_loss_ratio: Option<WinLossRatio>,
}

impl StatsPayload {
    pub fn latest(&self) -> LatestStats {
        LatestStats {
            record_id: self.timestamps.last().copied(),
            active_players: self.active_players.last().copied(),
            top_scores: self.top_scores.last().cloned(),
            server_health: self.server_health.last().cloned(),
            win_loss_ratio: self.win_loss_ratio.last().copied(),
        }
    }

    pub fn into_latest(mut self) -> LatestStats {
        LatestStats {
            record_id: self.timestamps.pop(),
            active_players: self.active_players.pop(),
            top_scores: self.top_scores.pop(),
            server_health: self.server_health.pop(),
            win_loss_ratio: self.win_loss_ratio.pop(),
        }
    }
}
