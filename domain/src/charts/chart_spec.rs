/// Presentation settings a surface needs to draw a chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChartSpec {
    pub dataset_label: &'static str,
    pub x_axis_title: Option<&'static str>,
    pub y_axis_title: &'static str,
}

pub const ACTIVE_PLAYERS_CHART: ChartSpec = ChartSpec {
    dataset_label: "Active Players",
    x_axis_title: Some("Time"),
    y_axis_title: "Number of Active Players",
};

pub const TOP_SCORES_CHART: ChartSpec = ChartSpec {
    dataset_label: "Top Scores",
    x_axis_title: None,
    y_axis_title: "Score",
};
