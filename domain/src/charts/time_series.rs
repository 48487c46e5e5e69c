use std::collections::VecDeque;

pub const DEFAULT_MAX_DATA_POINTS: usize = 20;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataPoint {
    pub label: String,
    pub value: u64,
}

/// Rolling window of the most recent labelled values, oldest first.
///
/// Once full, every push evicts exactly one point from the front. Values are
/// kept as received; nothing is averaged or decimated.
#[derive(Debug, Clone)]
pub struct TimeSeriesState {
    points: VecDeque<DataPoint>,
    max_data_points: usize,
}

impl TimeSeriesState {
    /// A `max_data_points` of zero is treated as one.
    pub fn with_max_data_points(max_data_points: usize) -> Self {
        let max_data_points = max_data_points.max(1);
        Self {
            points: VecDeque::with_capacity(max_data_points + 1),
            max_data_points,
        }
    }

    pub fn push(&mut self, label: impl Into<String>, value: u64) {
        self.points.push_back(DataPoint {
            label: label.into(),
            value,
        });

        if self.points.len() > self.max_data_points {
            self.points.pop_front();
        }
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> + '_ {
        self.points.iter().map(|point| point.label.as_str())
    }

    pub fn values(&self) -> impl Iterator<Item = u64> + '_ {
        self.points.iter().map(|point| point.value)
    }

    pub fn latest(&self) -> Option<&DataPoint> {
        self.points.back()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub const fn max_data_points(&self) -> usize {
        self.max_data_points
    }
}

impl Default for TimeSeriesState {
    fn default() -> Self {
        Self::with_max_data_points(DEFAULT_MAX_DATA_POINTS)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn label_of(tick: u64) -> String {
        format!("t{tick}")
    }

    #[test]
    fn seeding_with_single_value_yields_one_point() {
        let mut series = TimeSeriesState::default();

        series.push("12:00:00", 5);

        assert_eq!(series.len(), 1);
        assert_eq!(
            series.latest(),
            Some(&DataPoint {
                label: "12:00:00".to_string(),
                value: 5
            })
        );
    }

    #[test]
    fn never_grows_beyond_max_data_points() {
        let mut series = TimeSeriesState::default();

        for tick in 0..100 {
            series.push(label_of(tick), tick);
            assert!(series.len() <= DEFAULT_MAX_DATA_POINTS);
            assert_eq!(series.labels().count(), series.values().count());
        }
    }

    #[test]
    fn keeps_most_recent_points_in_arrival_order() {
        let mut series = TimeSeriesState::default();

        for tick in 0..21 {
            series.push(label_of(tick), tick * 10);
        }

        assert_eq!(series.len(), 20);
        assert_eq!(
            series.values().collect::<Vec<_>>(),
            (1..21u64).map(|tick| tick * 10).collect::<Vec<_>>()
        );
        assert_eq!(series.labels().next(), Some("t1"));
        assert_eq!(series.labels().last(), Some("t20"));
    }

    #[test]
    fn evicts_oldest_first() {
        let mut series = TimeSeriesState::with_max_data_points(3);

        series.push("a", 1);
        series.push("b", 1);
        series.push("c", 1);
        series.push("d", 1);

        assert_eq!(series.labels().collect::<Vec<_>>(), vec!["b", "c", "d"]);
    }

    #[test]
    fn zero_max_data_points_still_keeps_latest() {
        let mut series = TimeSeriesState::with_max_data_points(0);

        series.push("a", 1);
        series.push("b", 2);

        assert_eq!(series.max_data_points(), 1);
        assert_eq!(series.values().collect::<Vec<_>>(), vec![2]);
    }
}
