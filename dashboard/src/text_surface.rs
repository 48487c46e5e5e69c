use domain::charts::{BarChartState, ChartSpec, ChartSurface, TimeSeriesState};

const SPARK_LEVELS: [char; 8] = ['▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];
const BAR_WIDTH: u64 = 40;

/// `value * range / max`, computed wide so any `u64` pair scales without overflow.
fn scale(value: u64, range: u64, max: u64) -> usize {
    let scaled = u128::from(value) * u128::from(range) / u128::from(max.max(1));
    usize::try_from(scaled).unwrap_or(usize::MAX)
}

fn title(spec: &ChartSpec) -> String {
    match spec.x_axis_title {
        Some(x_axis_title) => format!(
            "{} ({} / {})",
            spec.dataset_label, x_axis_title, spec.y_axis_title
        ),
        None => format!("{} ({})", spec.dataset_label, spec.y_axis_title),
    }
}

/// Renders the series as a single sparkline scaled from zero, followed by its newest point.
pub fn render_time_series(spec: &ChartSpec, state: &TimeSeriesState) -> String {
    let mut rendered = title(spec);
    let Some(latest) = state.latest() else {
        rendered.push_str("\n  (no data)");
        return rendered;
    };

    let max = state.values().max().unwrap_or(0);
    let top_level = SPARK_LEVELS.len() - 1;
    let sparkline: String = state
        .values()
        .map(|value| SPARK_LEVELS[scale(value, top_level as u64, max).min(top_level)])
        .collect();

    let oldest = state.labels().next().unwrap_or_default();
    rendered.push_str(&format!(
        "\n  {sparkline}  {oldest} .. {}  latest {}",
        latest.label, latest.value
    ));
    rendered
}

/// Renders one horizontal bar per slot, scaled to the largest value shown.
pub fn render_bar_chart(spec: &ChartSpec, state: &BarChartState) -> String {
    let mut rendered = title(spec);
    let max = state.values().iter().flatten().copied().max().unwrap_or(0);

    for (label, value) in state.bars() {
        match value {
            Some(value) => {
                let bar = "#".repeat(scale(value, BAR_WIDTH, max));
                rendered.push_str(&format!("\n  {label:<10} {bar} {value}"));
            }
            None => rendered.push_str(&format!("\n  {label:<10} -")),
        }
    }
    rendered
}

/// Draws charts as text and emits every frame through `tracing`.
#[derive(Debug, Default)]
pub struct TextChartSurface {
    last_time_series_frame: Option<String>,
    last_bar_chart_frame: Option<String>,
}

impl TextChartSurface {
    pub fn last_time_series_frame(&self) -> Option<&str> {
        self.last_time_series_frame.as_deref()
    }

    pub fn last_bar_chart_frame(&self) -> Option<&str> {
        self.last_bar_chart_frame.as_deref()
    }
}

impl ChartSurface for TextChartSurface {
    fn draw_time_series(&mut self, spec: &ChartSpec, state: &TimeSeriesState) {
        let frame = render_time_series(spec, state);
        tracing::info!("\n{frame}");
        self.last_time_series_frame = Some(frame);
    }

    fn draw_bar_chart(&mut self, spec: &ChartSpec, state: &BarChartState) {
        let frame = render_bar_chart(spec, state);
        tracing::info!("\n{frame}");
        self.last_bar_chart_frame = Some(frame);
    }
}
