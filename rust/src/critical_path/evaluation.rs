//! Slack and criticality evaluation.

use crate::backward_pass::BackwardPassResult;
use crate::forward_pass::ForwardPassResult;
use crate::log_checks;

use super::types::{SlackSummary, TaskTiming};

/// Combine forward and backward pass results into per-task timings.
///
/// Rounding error grows with the magnitude of the times involved, so the
/// tolerance is relative: slack within `epsilon * max(project_duration, 1)` of
/// zero is snapped to exactly `0.0`. Latest start/finish keep their computed
/// values, so for a snapped task `latest_start - earliest_start` may differ
/// from `slack` by that rounding residue.
/// Returns timings indexed like the pass results, plus aggregate statistics.
pub fn evaluate_slack(
    forward: &ForwardPassResult,
    backward: &BackwardPassResult,
    epsilon: f64,
    verbosity: u8,
) -> (Vec<TaskTiming>, SlackSummary) {
    let n = forward.earliest_start.len();
    let mut timings = Vec::with_capacity(n);
    let mut summary = SlackSummary::default();
    let mut min_slack: Option<f64> = None;
    let tolerance = epsilon * forward.project_duration.max(1.0);

    for idx in 0..n {
        let earliest_start = forward.earliest_start[idx];
        let latest_start = backward.latest_start[idx];

        let mut slack = latest_start - earliest_start;
        if slack.abs() < tolerance {
            slack = 0.0;
        }
        let is_critical = slack == 0.0;

        if is_critical {
            summary.critical_count += 1;
        } else {
            summary.non_critical_count += 1;
        }
        min_slack = Some(min_slack.map_or(slack, |m: f64| m.min(slack)));

        log_checks!(verbosity, "task #{} slack={} critical={}", idx, slack, is_critical);

        timings.push(TaskTiming {
            earliest_start,
            earliest_finish: forward.earliest_finish[idx],
            latest_start,
            latest_finish: backward.latest_finish[idx],
            slack,
            is_critical,
        });
    }

    summary.min_slack = min_slack.unwrap_or(0.0);
    (timings, summary)
}
