//! The CPM batch pipeline.
//!
//! Graph build, topological sort, forward pass, backward pass, slack
//! evaluation and critical path extraction run in sequence over a borrowed
//! task slice. Nothing is written back to the input; a failed run produces no
//! timings at all.

use thiserror::Error;

use crate::backward_pass::backward_pass;
use crate::config::CpmConfig;
use crate::critical_path::{evaluate_slack, extract_critical_path};
use crate::forward_pass::forward_pass;
use crate::graph::{DependencyGraph, GraphError};
use crate::models::{Schedule, ScheduledTask, Task};
use crate::sorting::{topological_sort, SortingError};
use crate::{log_changes, log_checks};

/// Errors that reject a scheduling run.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CpmError {
    #[error("Invalid duration for task {task_id}: {duration} (must be a positive number)")]
    InvalidDuration { task_id: String, duration: f64 },
    #[error("Duplicate task id: {0}")]
    DuplicateTaskId(String),
    #[error("Task {task_id} depends on unknown task {dependency_id}")]
    UnresolvedDependency {
        task_id: String,
        dependency_id: String,
    },
    #[error("Circular dependency detected among tasks: {}", .unresolved.join(", "))]
    CycleDetected { unresolved: Vec<String> },
}

impl From<GraphError> for CpmError {
    fn from(err: GraphError) -> Self {
        match err {
            GraphError::DuplicateTaskId(id) => CpmError::DuplicateTaskId(id),
        }
    }
}

impl From<SortingError> for CpmError {
    fn from(err: SortingError) -> Self {
        match err {
            SortingError::CycleDetected { unresolved } => CpmError::CycleDetected { unresolved },
        }
    }
}

/// Compute the full CPM schedule for a task set.
///
/// # Arguments
/// * `tasks` - Tasks in caller order; the order breaks ties deterministically
/// * `config` - Run configuration
///
/// # Returns
/// * `Ok(Schedule)` with every task's timings, summary statistics and one critical path
/// * `Err(CpmError)` if a duration is invalid, an id repeats, the graph has a
///   cycle, or (in strict mode) a dependency id matches no task
pub fn schedule(tasks: &[Task], config: &CpmConfig) -> Result<Schedule, CpmError> {
    let verbosity = config.verbosity;

    if let Some(task) = tasks.iter().find(|t| !t.has_valid_duration()) {
        return Err(CpmError::InvalidDuration {
            task_id: task.id.clone(),
            duration: task.duration,
        });
    }

    let graph = DependencyGraph::build(tasks)?;

    for dangling in graph.dangling() {
        if config.strict_dependencies {
            return Err(CpmError::UnresolvedDependency {
                task_id: dangling.task_id.clone(),
                dependency_id: dangling.dependency_id.clone(),
            });
        }
        log_checks!(
            verbosity,
            "Ignoring dependency {} of task {}: no such task",
            dangling.dependency_id,
            dangling.task_id
        );
    }

    let topo_order = match topological_sort(&graph, verbosity) {
        Ok(order) => order,
        Err(err) => {
            tracing::warn!("Scheduling rejected: {}", err);
            return Err(err.into());
        }
    };

    let durations: Vec<f64> = tasks.iter().map(|t| t.duration).collect();
    let forward = forward_pass(&graph, &durations, &topo_order, verbosity);
    let backward = backward_pass(
        &graph,
        &durations,
        &topo_order,
        forward.project_duration,
        verbosity,
    );
    let (timings, summary) = evaluate_slack(&forward, &backward, config.slack_epsilon, verbosity);
    let path = extract_critical_path(&graph, &timings);

    let critical_path = graph.index().resolve_all(&path);
    log_changes!(
        verbosity,
        "Scheduled {} tasks: duration={} critical={} path=[{}]",
        tasks.len(),
        forward.project_duration,
        summary.critical_count,
        critical_path.join(" -> ")
    );

    let scheduled = tasks
        .iter()
        .cloned()
        .zip(timings)
        .map(|(task, timing)| ScheduledTask { task, timing })
        .collect();

    Ok(Schedule {
        tasks: scheduled,
        project_duration: forward.project_duration,
        summary,
        critical_path,
        topological_order: graph.index().resolve_all(&topo_order),
        dangling_dependencies: graph.dangling().to_vec(),
    })
}
