pub const BAR_CHART_SLOTS: usize = 5;

const PLACEHOLDER_LABELS: [&str; BAR_CHART_SLOTS] =
    ["Player 1", "Player 2", "Player 3", "Player 4", "Player 5"];

/// Five fixed bars whose values are swapped out as a whole on every update.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BarChartState {
    values: [Option<u64>; BAR_CHART_SLOTS],
}

impl BarChartState {
    /// Replaces every bar. Slots past the end of `values` become empty and
    /// values past the fifth are dropped.
    pub fn replace_values(&mut self, values: &[u64]) {
        let mut incoming = values.iter().copied();
        self.values = std::array::from_fn(|_| incoming.next());
    }

    pub const fn labels(&self) -> &'static [&'static str; BAR_CHART_SLOTS] {
        &PLACEHOLDER_LABELS
    }

    pub const fn values(&self) -> &[Option<u64>; BAR_CHART_SLOTS] {
        &self.values
    }

    pub fn bars(&self) -> impl Iterator<Item = (&'static str, Option<u64>)> + '_ {
        PLACEHOLDER_LABELS.into_iter().zip(self.values.iter().copied())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn replaces_values_wholesale() {
        let mut chart = BarChartState::default();
        chart.replace_values(&[9, 9, 9, 9, 9]);

        chart.replace_values(&[1, 2, 3, 4, 5]);

        assert_eq!(chart.values(), &[Some(1), Some(2), Some(3), Some(4), Some(5)]);
        assert_eq!(
            chart.labels(),
            &["Player 1", "Player 2", "Player 3", "Player 4", "Player 5"]
        );
    }

    #[test]
    fn replacing_twice_with_same_values_is_idempotent() {
        let mut once = BarChartState::default();
        once.replace_values(&[4999, 4001, 3000, 2500, 1200]);

        let mut twice = once.clone();
        twice.replace_values(&[4999, 4001, 3000, 2500, 1200]);

        assert_eq!(once, twice);
    }

    #[test]
    fn short_rows_leave_remaining_bars_empty() {
        let mut chart = BarChartState::default();
        chart.replace_values(&[1, 2, 3, 4, 5]);

        chart.replace_values(&[7, 8]);

        assert_eq!(chart.values(), &[Some(7), Some(8), None, None, None]);
    }

    #[test]
    fn long_rows_are_truncated() {
        let mut chart = BarChartState::default();

        chart.replace_values(&[1, 2, 3, 4, 5, 6, 7]);

        assert_eq!(chart.bars().last(), Some(("Player 5", Some(5))));
    }
}
