//! Topological ordering of the dependency graph (Kahn's algorithm).
//!
//! This is the engine's only cycle detector: if the queue drains before every
//! task has been emitted, the remaining tasks sit on or behind a cycle.

use std::collections::VecDeque;

use thiserror::Error;

use crate::graph::DependencyGraph;
use crate::interner::TaskIdInt;
use crate::log_debug;

/// Errors from topological sorting.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SortingError {
    /// Tasks that were never dequeued, in task-set order.
    #[error("Circular dependency detected among tasks: {}", .unresolved.join(", "))]
    CycleDetected { unresolved: Vec<String> },
}

/// Order every task so each one comes after all of its resolved dependencies.
///
/// The queue is seeded with zero in-degree tasks in task-set order; tasks that
/// become ready later are appended in the order they are discovered, so the
/// result is deterministic for a given input order.
pub fn topological_sort(
    graph: &DependencyGraph,
    verbosity: u8,
) -> Result<Vec<TaskIdInt>, SortingError> {
    let n = graph.len();
    let mut in_degree: Vec<usize> = graph.in_degrees().to_vec();

    let mut queue: VecDeque<TaskIdInt> = (0..n as TaskIdInt)
        .filter(|&id| in_degree[id as usize] == 0)
        .collect();

    let mut result: Vec<TaskIdInt> = Vec::with_capacity(n);

    while let Some(task_id) = queue.pop_front() {
        result.push(task_id);
        log_debug!(
            verbosity,
            "sort: emit {} (position {})",
            graph.index().resolve(task_id).unwrap_or("?"),
            result.len() - 1
        );

        for &succ in graph.successors_of(task_id) {
            let degree = &mut in_degree[succ as usize];
            *degree -= 1;
            if *degree == 0 {
                queue.push_back(succ);
            }
        }
    }

    if result.len() != n {
        let unresolved: Vec<String> = (0..n as TaskIdInt)
            .filter(|&id| in_degree[id as usize] > 0)
            .filter_map(|id| graph.index().resolve(id))
            .map(str::to_string)
            .collect();
        return Err(SortingError::CycleDetected { unresolved });
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Task;

    fn make_task(id: &str, deps: Vec<&str>) -> Task {
        Task::named(id, 1.0, deps)
    }

    fn sorted_ids(tasks: &[Task]) -> Result<Vec<String>, SortingError> {
        let graph = DependencyGraph::build(tasks).unwrap();
        topological_sort(&graph, 0).map(|order| graph.index().resolve_all(&order))
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(sorted_ids(&[]), Ok(vec![]));
    }

    #[test]
    fn test_independent_tasks_keep_input_order() {
        let tasks = vec![
            make_task("c", vec![]),
            make_task("a", vec![]),
            make_task("b", vec![]),
        ];
        assert_eq!(sorted_ids(&tasks).unwrap(), vec!["c", "a", "b"]);
    }

    #[test]
    fn test_dependencies_come_first() {
        // Listed dependents-first on purpose
        let tasks = vec![
            make_task("d", vec!["b", "c"]),
            make_task("c", vec!["a"]),
            make_task("b", vec!["a"]),
            make_task("a", vec![]),
        ];
        let order = sorted_ids(&tasks).unwrap();
        assert_eq!(order, vec!["a", "c", "b", "d"]);
    }

    #[test]
    fn test_discovery_order_breaks_ties() {
        // x and y both become ready when a is emitted; y is a's first successor
        let tasks = vec![
            make_task("a", vec![]),
            make_task("y", vec!["a"]),
            make_task("x", vec!["a"]),
            make_task("z", vec![]),
        ];
        assert_eq!(sorted_ids(&tasks).unwrap(), vec!["a", "z", "y", "x"]);
    }

    #[test]
    fn test_two_node_cycle() {
        let tasks = vec![make_task("a", vec!["b"]), make_task("b", vec!["a"])];
        assert_eq!(
            sorted_ids(&tasks),
            Err(SortingError::CycleDetected {
                unresolved: vec!["a".to_string(), "b".to_string()],
            })
        );
    }

    #[test]
    fn test_self_dependency_is_a_cycle() {
        let tasks = vec![make_task("a", vec![]), make_task("b", vec!["b"])];
        assert_eq!(
            sorted_ids(&tasks),
            Err(SortingError::CycleDetected {
                unresolved: vec!["b".to_string()],
            })
        );
    }

    #[test]
    fn test_cycle_reports_downstream_tasks() {
        // c hangs off the a<->b cycle and can never be dequeued either
        let tasks = vec![
            make_task("start", vec![]),
            make_task("a", vec!["start", "b"]),
            make_task("b", vec!["a"]),
            make_task("c", vec!["b"]),
        ];
        let err = sorted_ids(&tasks).unwrap_err();
        assert_eq!(
            err,
            SortingError::CycleDetected {
                unresolved: vec!["a".to_string(), "b".to_string(), "c".to_string()],
            }
        );
        assert_eq!(
            err.to_string(),
            "Circular dependency detected among tasks: a, b, c"
        );
    }

    #[test]
    fn test_dangling_reference_does_not_block() {
        let tasks = vec![make_task("a", vec!["ghost"]), make_task("b", vec!["a"])];
        assert_eq!(sorted_ids(&tasks).unwrap(), vec!["a", "b"]);
    }
}
