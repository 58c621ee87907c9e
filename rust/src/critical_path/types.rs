//! Types for critical path calculation.

/// Per-task timing information produced by a scheduling run.
///
/// All fields stay at their defaults until a run succeeds.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TaskTiming {
    /// Earliest possible start time (from forward pass).
    pub earliest_start: f64,
    /// Earliest possible finish time (from forward pass).
    pub earliest_finish: f64,
    /// Latest allowable start time (from backward pass).
    pub latest_start: f64,
    /// Latest allowable finish time (from backward pass).
    pub latest_finish: f64,
    /// Slack = latest_start - earliest_start, snapped to exactly `0.0` when
    /// within the run's relative tolerance. For a snapped task the stored
    /// latest start may still differ from earliest start by a rounding residue.
    pub slack: f64,
    /// True exactly when `slack == 0.0`.
    pub is_critical: bool,
}

impl TaskTiming {
    /// Whether every computed field is still at its reset value.
    pub fn is_reset(&self) -> bool {
        *self == Self::default()
    }
}

/// Aggregate slack statistics for a run.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SlackSummary {
    pub critical_count: usize,
    pub non_critical_count: usize,
    /// Smallest slack over all tasks; 0 for an empty task set.
    pub min_slack: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_timing_is_reset() {
        let timing = TaskTiming::default();
        assert!(timing.is_reset());
        assert!(!timing.is_critical);
        assert_eq!(timing.slack, 0.0);
    }

    #[test]
    fn test_populated_timing_is_not_reset() {
        let timing = TaskTiming {
            earliest_start: 0.0,
            earliest_finish: 5.0,
            latest_start: 2.0,
            latest_finish: 7.0,
            slack: 2.0,
            is_critical: false,
        };
        assert!(!timing.is_reset());
    }
}
