use chrono::{DateTime, Local, Utc};
use domain::charts::{
    BarChartState, ChartSurface, TimeSeriesState, ACTIVE_PLAYERS_CHART, TOP_SCORES_CHART,
};
use domain::models::{ActivePlayerCount, LatestStats, TopScores};

/// Label of a time series point fetched at `utc_timestamp`, in local wall clock time.
pub fn tick_label(utc_timestamp: DateTime<Utc>) -> String {
    utc_timestamp
        .with_timezone(&Local)
        .format("%H:%M:%S")
        .to_string()
}

/// Owns the state of both charts and redraws them on `Surface` whenever it changes.
#[derive(Debug)]
pub struct ChartRefresher<Surface> {
    active_players: TimeSeriesState,
    top_scores: BarChartState,
    surface: Surface,
}

impl<Surface: ChartSurface> ChartRefresher<Surface> {
    pub fn new(max_data_points: usize, surface: Surface) -> Self {
        Self {
            active_players: TimeSeriesState::with_max_data_points(max_data_points),
            top_scores: BarChartState::default(),
            surface,
        }
    }

    pub fn push_active_players(&mut self, label: String, count: ActivePlayerCount) {
        self.active_players.push(label, count.0);
        self.surface.draw_time_series(&ACTIVE_PLAYERS_CHART, &self.active_players);
    }

    pub fn replace_top_scores(&mut self, scores: &TopScores) {
        self.top_scores.replace_values(scores.as_slice());
        self.surface.draw_bar_chart(&TOP_SCORES_CHART, &self.top_scores);
    }

    /// Applies whatever the newest record carries. A chart whose history came
    /// back empty is left as it was.
    pub fn apply_latest(&mut self, label: String, latest: LatestStats) {
        match latest.active_players {
            Some(count) => self.push_active_players(label, count),
            None => tracing::debug!("active player history is empty, keeping time series"),
        }

        match latest.top_scores {
            Some(scores) => self.replace_top_scores(&scores),
            None => tracing::debug!("top score history is empty, keeping bar chart"),
        }

        tracing::info!(
            record_id = ?latest.record_id,
            server_health = %latest.server_health.map_or_else(|| "Unknown".into(), |h| h.0),
            win_loss_ratio = ?latest.win_loss_ratio.map(|r| r.0),
            "charts refreshed"
        );
    }

    pub const fn active_players(&self) -> &TimeSeriesState {
        &self.active_players
    }

    pub const fn top_scores(&self) -> &BarChartState {
        &self.top_scores
    }

    pub const fn surface(&self) -> &Surface {
        &self.surface
    }
}

#[cfg(test)]
pub(crate) mod test {
    use super::*;
    use domain::charts::ChartSpec;

    #[derive(Debug, Default)]
    pub struct CountingSurface {
        pub time_series_draws: usize,
        pub bar_chart_draws: usize,
    }

    impl ChartSurface for CountingSurface {
        fn draw_time_series(&mut self, _spec: &ChartSpec, _state: &TimeSeriesState) {
            self.time_series_draws += 1;
        }

        fn draw_bar_chart(&mut self, _spec: &ChartSpec, _state: &BarChartState) {
            self.bar_chart_draws += 1;
        }
    }

    #[test]
    fn every_update_redraws_its_chart() {
        let mut refresher = ChartRefresher::new(20, CountingSurface::default());

        refresher.push_active_players("a".to_string(), ActivePlayerCount(1));
        refresher.push_active_players("b".to_string(), ActivePlayerCount(2));
        refresher.replace_top_scores(&TopScores(vec![1, 2, 3, 4, 5]));

        assert_eq!(refresher.surface().time_series_draws, 2);
        assert_eq!(refresher.surface().bar_chart_draws, 1);
    }

    #[test]
    fn empty_latest_stats_leave_charts_untouched() {
        let mut refresher = ChartRefresher::new(20, CountingSurface::default());
        refresher.push_active_players("a".to_string(), ActivePlayerCount(7));
        refresher.replace_top_scores(&TopScores(vec![5, 4, 3, 2, 1]));

        refresher.apply_latest("b".to_string(), LatestStats::default());

        assert_eq!(refresher.active_players().values().collect::<Vec<_>>(), vec![7]);
        assert_eq!(
            refresher.top_scores().values(),
            &[Some(5), Some(4), Some(3), Some(2), Some(1)]
        );
        assert_eq!(refresher.surface().time_series_draws, 1);
        assert_eq!(refresher.surface().bar_chart_draws, 1);
    }

    #[test]
    fn respects_configured_window() {
        let mut refresher = ChartRefresher::new(3, CountingSurface::default());

        for value in 0..5 {
            refresher.push_active_players(value.to_string(), ActivePlayerCount(value));
        }

        assert_eq!(
            refresher.active_players().values().collect::<Vec<_>>(),
            vec![2, 3, 4]
        );
    }

    #[test]
    fn tick_label_is_wall_clock_time() {
        let label = tick_label(Utc::now());

        assert_eq!(label.len(), 8);
        assert_eq!(label.matches(':').count(), 2);
    }
}
