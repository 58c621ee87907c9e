//! Backward pass: latest start and finish times.

use crate::graph::DependencyGraph;
use crate::interner::TaskIdInt;
use crate::log_debug;

/// Result from the backward pass, indexed by task.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BackwardPassResult {
    pub latest_start: Vec<f64>,
    pub latest_finish: Vec<f64>,
}

/// Invert the resolved dependency lists into per-task successor lists.
///
/// Kept separate from the graph's own adjacency so the backward pass only
/// relies on the dependency relation itself.
fn build_successors(graph: &DependencyGraph) -> Vec<Vec<TaskIdInt>> {
    let n = graph.len();
    let mut successors: Vec<Vec<TaskIdInt>> = vec![Vec::new(); n];
    for task_id in 0..n as TaskIdInt {
        for &dep in graph.dependencies_of(task_id) {
            successors[dep as usize].push(task_id);
        }
    }
    successors
}

/// Compute latest finish/start for every task, walking `topo_order` in reverse.
///
/// A task with no successors must finish by `project_duration`; any other task
/// must finish before its earliest-latest-starting successor.
///
/// # Arguments
/// * `graph` - Dependency graph built from the task set
/// * `durations` - Task durations indexed like the graph
/// * `topo_order` - Output of the topological sort
/// * `project_duration` - Project duration from the forward pass
/// * `verbosity` - Logging verbosity
pub fn backward_pass(
    graph: &DependencyGraph,
    durations: &[f64],
    topo_order: &[TaskIdInt],
    project_duration: f64,
    verbosity: u8,
) -> BackwardPassResult {
    let n = graph.len();
    let successors = build_successors(graph);
    let mut latest_start = vec![0.0; n];
    let mut latest_finish = vec![0.0; n];

    for &task_id in topo_order.iter().rev() {
        let idx = task_id as usize;

        let finish = successors[idx]
            .iter()
            .map(|&succ| latest_start[succ as usize])
            .reduce(f64::min)
            .unwrap_or(project_duration);

        latest_finish[idx] = finish;
        latest_start[idx] = finish - durations[idx];

        log_debug!(
            verbosity,
            "backward: {} LS={} LF={}",
            graph.index().resolve(task_id).unwrap_or("?"),
            latest_start[idx],
            latest_finish[idx]
        );
    }

    BackwardPassResult {
        latest_start,
        latest_finish,
    }
}
