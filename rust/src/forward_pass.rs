//! Forward pass: earliest start and finish times.

use crate::graph::DependencyGraph;
use crate::interner::TaskIdInt;
use crate::log_debug;

/// Result from the forward pass, indexed by task.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ForwardPassResult {
    pub earliest_start: Vec<f64>,
    pub earliest_finish: Vec<f64>,
    /// Maximum earliest finish over all tasks (0 when there are none).
    pub project_duration: f64,
}

/// Compute earliest start/finish for every task.
///
/// `topo_order` must list each task after all of its resolved dependencies,
/// so every dependency's earliest finish is final when its dependent is visited.
///
/// # Arguments
/// * `graph` - Dependency graph built from the task set
/// * `durations` - Task durations indexed like the graph
/// * `topo_order` - Output of the topological sort
/// * `verbosity` - Logging verbosity
pub fn forward_pass(
    graph: &DependencyGraph,
    durations: &[f64],
    topo_order: &[TaskIdInt],
    verbosity: u8,
) -> ForwardPassResult {
    let n = graph.len();
    let mut earliest_start = vec![0.0; n];
    let mut earliest_finish = vec![0.0; n];

    for &task_id in topo_order {
        let idx = task_id as usize;

        // Earliest start = max of all dependency finish times
        let start = graph
            .dependencies_of(task_id)
            .iter()
            .map(|&dep| earliest_finish[dep as usize])
            .fold(0.0, f64::max);

        earliest_start[idx] = start;
        earliest_finish[idx] = start + durations[idx];

        log_debug!(
            verbosity,
            "forward: {} ES={} EF={}",
            graph.index().resolve(task_id).unwrap_or("?"),
            earliest_start[idx],
            earliest_finish[idx]
        );
    }

    let project_duration = earliest_finish.iter().copied().fold(0.0, f64::max);

    ForwardPassResult {
        earliest_start,
        earliest_finish,
        project_duration,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Task;
    use crate::sorting::topological_sort;

    fn make_task(id: &str, duration: f64, deps: Vec<&str>) -> Task {
        Task::named(id, duration, deps)
    }

    fn run(tasks: &[Task]) -> ForwardPassResult {
        let graph = DependencyGraph::build(tasks).unwrap();
        let order = topological_sort(&graph, 0).unwrap();
        let durations: Vec<f64> = tasks.iter().map(|t| t.duration).collect();
        forward_pass(&graph, &durations, &order, 0)
    }

    #[test]
    fn test_empty_project() {
        let result = run(&[]);
        assert!(result.earliest_start.is_empty());
        assert_eq!(result.project_duration, 0.0);
    }

    #[test]
    fn test_single_task() {
        let result = run(&[make_task("a", 5.0, vec![])]);
        assert_eq!(result.earliest_start, vec![0.0]);
        assert_eq!(result.earliest_finish, vec![5.0]);
        assert_eq!(result.project_duration, 5.0);
    }

    #[test]
    fn test_diamond_takes_longest_branch() {
        let tasks = vec![
            make_task("a", 3.0, vec![]),
            make_task("b", 2.0, vec!["a"]),
            make_task("c", 5.0, vec!["a"]),
            make_task("d", 1.0, vec!["b", "c"]),
        ];
        let result = run(&tasks);

        assert_eq!(result.earliest_start, vec![0.0, 3.0, 3.0, 8.0]);
        assert_eq!(result.earliest_finish, vec![3.0, 5.0, 8.0, 9.0]);
        assert_eq!(result.project_duration, 9.0);
    }

    #[test]
    fn test_dangling_dependency_does_not_delay() {
        let tasks = vec![
            make_task("a", 2.0, vec![]),
            make_task("b", 4.0, vec!["ghost", "a"]),
            make_task("c", 1.0, vec!["ghost"]),
        ];
        let result = run(&tasks);

        assert_eq!(result.earliest_start, vec![0.0, 2.0, 0.0]);
        assert_eq!(result.project_duration, 6.0);
    }

    #[test]
    fn test_project_duration_from_non_terminal_order() {
        // The longest task is listed first and has no dependents
        let tasks = vec![
            make_task("long", 10.0, vec![]),
            make_task("a", 1.0, vec![]),
            make_task("b", 1.0, vec!["a"]),
        ];
        assert_eq!(run(&tasks).project_duration, 10.0);
    }
}
