use std::future::Future;
use std::time::Duration;

use domain::charts::ChartSurface;
use domain::repositories::PlayerStatsRepository;
use tokio::time::{Instant, MissedTickBehavior};

use crate::refresher::{tick_label, ChartRefresher};

/// Dashboard whose charts have not been seeded yet.
pub struct UninitializedDashboard<Repository, Surface> {
    repository: Repository,
    refresher: ChartRefresher<Surface>,
}

/// Dashboard with seeded charts, refreshed by [`RunningDashboard::tick`].
pub struct RunningDashboard<Repository, Surface> {
    repository: Repository,
    refresher: ChartRefresher<Surface>,
}

impl<Repository, Surface> UninitializedDashboard<Repository, Surface>
where
    Repository: PlayerStatsRepository + Sync,
    Surface: ChartSurface + Send,
{
    pub const fn new(repository: Repository, refresher: ChartRefresher<Surface>) -> Self {
        Self {
            repository,
            refresher,
        }
    }

    /// Fetches once and seeds both charts with the newest values.
    ///
    /// The dashboard only starts running if this first fetch succeeds.
    #[tracing::instrument(skip(self))]
    pub async fn initialize(mut self) -> anyhow::Result<RunningDashboard<Repository, Surface>> {
        let fetched = self.repository.fetch_stats_history().await?;
        let label = tick_label(fetched.utc_timestamp);
        self.refresher.apply_latest(label, fetched.data.into_latest());

        tracing::info!("charts seeded");
        Ok(RunningDashboard {
            repository: self.repository,
            refresher: self.refresher,
        })
    }
}

impl<Repository, Surface> RunningDashboard<Repository, Surface>
where
    Repository: PlayerStatsRepository + Sync,
    Surface: ChartSurface + Send,
{
    /// Fetches and applies the newest values. On error both charts keep their state.
    pub async fn tick(&mut self) -> anyhow::Result<()> {
        let fetched = self.repository.fetch_stats_history().await?;
        let label = tick_label(fetched.utc_timestamp);
        self.refresher.apply_latest(label, fetched.data.into_latest());
        Ok(())
    }

    /// Ticks every `period` until `shutdown` resolves, starting one period from now.
    ///
    /// A tick runs to completion before the timer is polled again, and timer
    /// firings missed meanwhile are dropped, so fetches never overlap and
    /// results are applied in the order they were requested.
    pub async fn run_until(mut self, period: Duration, shutdown: impl Future<Output = ()>) -> Self {
        let mut ticker = tokio::time::interval_at(Instant::now() + period, period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
        tokio::pin!(shutdown);

        tracing::info!(?period, "refresh loop started");
        loop {
            tokio::select! {
                () = &mut shutdown => break,
                _ = ticker.tick() => {}
            }

            tokio::select! {
                () = &mut shutdown => break,
                result = self.tick() => {
                    if let Err(error) = result {
                        tracing::warn!("skipping refresh: {error:#}");
                    }
                }
            }
        }

        tracing::info!("refresh loop stopped");
        self
    }

    pub const fn refresher(&self) -> &ChartRefresher<Surface> {
        &self.refresher
    }
}
