mod bar_chart;
mod chart_spec;
mod surface;
mod time_series;

pub use bar_chart::{BarChartState, BAR_CHART_SLOTS};
pub use chart_spec::{ChartSpec, ACTIVE_PLAYERS_CHART, TOP_SCORES_CHART};
pub use surface::ChartSurface;
pub use time_series::{DataPoint, TimeSeriesState, DEFAULT_MAX_DATA_POINTS};
