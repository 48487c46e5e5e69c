use super::{BarChartState, ChartSpec, TimeSeriesState};

/// Something both charts can be redrawn on.
///
/// Implementations are called after every change to a chart's state and are
/// expected to redraw it from scratch.
pub trait ChartSurface {
    fn draw_time_series(&mut self, spec: &ChartSpec, state: &TimeSeriesState);

    fn draw_bar_chart(&mut self, spec: &ChartSpec, state: &BarChartState);
}
