//! Dependency graph construction.
//!
//! Turns the caller's task list into integer-indexed adjacency data. A
//! dependency id that matches no task contributes no edge and no in-degree;
//! it is recorded as dangling so callers can report it.

use rustc_hash::FxHashSet;
use thiserror::Error;

use crate::interner::{TaskIdInt, TaskIdInterner};
use crate::models::{DanglingDependency, Task};

/// Errors raised while building the dependency graph.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    #[error("Duplicate task id: {0}")]
    DuplicateTaskId(String),
}

/// Integer-indexed dependency graph over a task set.
///
/// Index `i` is the `i`-th task of the input slice.
#[derive(Debug, Clone)]
pub struct DependencyGraph {
    index: TaskIdInterner,
    /// Resolved dependencies per task, deduplicated, in listed order.
    dependencies: Vec<Vec<TaskIdInt>>,
    /// Tasks that directly depend on each task, in task-set order.
    successors: Vec<Vec<TaskIdInt>>,
    /// Number of resolved dependency edges per task.
    in_degree: Vec<usize>,
    dangling: Vec<DanglingDependency>,
}

impl DependencyGraph {
    /// Build the graph from a task slice without mutating it.
    pub fn build(tasks: &[Task]) -> Result<Self, GraphError> {
        let n = tasks.len();
        let mut index = TaskIdInterner::with_capacity(n);
        for task in tasks {
            if index.insert_new(&task.id).is_none() {
                return Err(GraphError::DuplicateTaskId(task.id.clone()));
            }
        }

        let mut dependencies: Vec<Vec<TaskIdInt>> = vec![Vec::new(); n];
        let mut successors: Vec<Vec<TaskIdInt>> = vec![Vec::new(); n];
        let mut in_degree = vec![0usize; n];
        let mut dangling = Vec::new();

        for (idx, task) in tasks.iter().enumerate() {
            let id = idx as TaskIdInt;
            let mut seen: FxHashSet<TaskIdInt> = FxHashSet::default();
            let mut seen_dangling: FxHashSet<&str> = FxHashSet::default();
            for dep_id in &task.dependencies {
                match index.get(dep_id) {
                    Some(dep) => {
                        if seen.insert(dep) {
                            dependencies[idx].push(dep);
                            successors[dep as usize].push(id);
                            in_degree[idx] += 1;
                        }
                    }
                    None => {
                        if seen_dangling.insert(dep_id.as_str()) {
                            dangling.push(DanglingDependency {
                                task_id: task.id.clone(),
                                dependency_id: dep_id.clone(),
                            });
                        }
                    }
                }
            }
        }

        Ok(Self {
            index,
            dependencies,
            successors,
            in_degree,
            dangling,
        })
    }

    /// Number of tasks.
    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    pub fn index(&self) -> &TaskIdInterner {
        &self.index
    }

    /// Resolved dependencies of a task, in the order the task listed them.
    pub fn dependencies_of(&self, id: TaskIdInt) -> &[TaskIdInt] {
        self.dependencies
            .get(id as usize)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Tasks that list this task as a resolved dependency.
    pub fn successors_of(&self, id: TaskIdInt) -> &[TaskIdInt] {
        self.successors
            .get(id as usize)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// In-degree counts, indexed by task.
    pub fn in_degrees(&self) -> &[usize] {
        &self.in_degree
    }

    /// Dependency references that matched no task, in encounter order.
    pub fn dangling(&self) -> &[DanglingDependency] {
        &self.dangling
    }
}
