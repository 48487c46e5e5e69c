#![deny(clippy::all, clippy::cargo)]
#![warn(clippy::nursery, clippy::pedantic)]
#![allow(clippy::cargo_common_metadata, clippy::multiple_crate_versions)]

use config::StatsServerConfig;
use domain::models::StatsPayload;
use domain::repositories::PlayerStatsRepository;
use domain::types::TimeStamped;
use thiserror::Error;

const STATS_HISTORY_PATH: &str = "/api/player-stats-history";

#[derive(Debug, Error)]
pub enum UpstreamError {
    #[error("stats server answered {url} with unexpected status {status}")]
    UnexpectedStatus {
        url: String,
        status: reqwest::StatusCode,
    },
}

#[derive(Debug)]
pub struct HttpUpstreamRepository {
    client: reqwest::Client,
    stats_history_url: String,
}

impl HttpUpstreamRepository {
    pub fn try_new(config: &StatsServerConfig) -> anyhow::Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.request_timeout() {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            stats_history_url: format!(
                "{}{STATS_HISTORY_PATH}",
                config.base_url.trim_end_matches('/')
            ),
        })
    }

    pub fn stats_history_url(&self) -> &str {
        &self.stats_history_url
    }
}

#[async_trait::async_trait]
impl PlayerStatsRepository for HttpUpstreamRepository {
    #[tracing::instrument(skip(self), fields(url = %self.stats_history_url))]
    async fn fetch_stats_history(&self) -> anyhow::Result<TimeStamped<StatsPayload>> {
        let request_time = chrono::Utc::now();
        let response = self.client.get(&self.stats_history_url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(UpstreamError::UnexpectedStatus {
                url: self.stats_history_url.clone(),
                status,
            }
            .into());
        }

        let payload = response.json::<StatsPayload>().await?;
        tracing::debug!(
            records = payload.active_players.len(),
            "fetched player stats history"
        );

        Ok(TimeStamped {
            data: payload,
            utc_timestamp: request_time,
        })
    }
}
