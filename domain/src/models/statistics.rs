use derive_more::{Display, From, Into};
use serde::Deserialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, From, Into, Display)]
pub struct ActivePlayerCount(pub u64);

/// One row of top scores as recorded by the stats server, best player first.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize, From, Into)]
pub struct TopScores(pub Vec<u64>);

impl TopScores {
    pub fn as_slice(&self) -> &[u64] {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, From, Into, Display)]
pub struct ServerHealth(pub String);

#[derive(Debug, Clone, Copy, PartialEq, Deserialize, From, Into, Display)]
pub struct WinLossRatio(pub f64);
