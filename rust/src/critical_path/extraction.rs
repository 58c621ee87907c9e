//! Critical path extraction.

use crate::graph::DependencyGraph;
use crate::interner::TaskIdInt;

use super::types::TaskTiming;

/// Extract one start-to-finish chain of critical tasks.
///
/// The chain ends at the critical task with the greatest earliest finish
/// (first in task-set order on ties). From there it walks backward, each step
/// taking the first dependency, in the order the task listed them, that is
/// itself critical. When several critical chains exist this picks one of
/// them deterministically, not necessarily the one a reader would expect.
///
/// Returns task indices ordered from project start to project finish; empty
/// if no task is critical.
pub fn extract_critical_path(graph: &DependencyGraph, timings: &[TaskTiming]) -> Vec<TaskIdInt> {
    let mut terminal: Option<TaskIdInt> = None;
    for (idx, timing) in timings.iter().enumerate() {
        if !timing.is_critical {
            continue;
        }
        let better = match terminal {
            None => true,
            Some(best) => timing.earliest_finish > timings[best as usize].earliest_finish,
        };
        if better {
            terminal = Some(idx as TaskIdInt);
        }
    }

    let Some(mut current) = terminal else {
        return Vec::new();
    };

    let mut path = vec![current];
    // Every step moves to a dependency, so the walk ends on an acyclic graph;
    // the length bound only guards against misuse with inconsistent timings.
    while path.len() < timings.len() {
        let next = graph
            .dependencies_of(current)
            .iter()
            .copied()
            .find(|&dep| timings[dep as usize].is_critical);

        match next {
            Some(dep) => {
                path.push(dep);
                current = dep;
            }
            None => break,
        }
    }

    path.reverse();
    path
}
