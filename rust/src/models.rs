//! Core data types for the CPM engine.

use crate::critical_path::{SlackSummary, TaskTiming};

/// A unit of schedulable work.
///
/// `id` is the identity used for dependency resolution; `name` is a display
/// label the engine never reads.
#[derive(Clone, Debug, PartialEq)]
pub struct Task {
    pub id: String,
    pub name: String,
    pub duration: f64,
    /// Ids of tasks that must finish before this one may start.
    pub dependencies: Vec<String>,
}

impl Task {
    pub fn new<I, S>(
        id: impl Into<String>,
        name: impl Into<String>,
        duration: f64,
        dependencies: I,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            id: id.into(),
            name: name.into(),
            duration,
            dependencies: dependencies.into_iter().map(Into::into).collect(),
        }
    }

    /// Create a task whose id is its display name.
    pub fn named<I, S>(name: impl Into<String>, duration: f64, dependencies: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let name = name.into();
        Self::new(name.clone(), name, duration, dependencies)
    }

    /// Whether the duration is a finite, strictly positive number.
    pub fn has_valid_duration(&self) -> bool {
        self.duration.is_finite() && self.duration > 0.0
    }
}

/// A task together with its computed schedule fields.
#[derive(Clone, Debug, PartialEq)]
pub struct ScheduledTask {
    pub task: Task,
    pub timing: TaskTiming,
}

impl ScheduledTask {
    /// Wrap a task with all computed fields at their defaults.
    pub fn unscheduled(task: Task) -> Self {
        Self {
            task,
            timing: TaskTiming::default(),
        }
    }

    pub fn id(&self) -> &str {
        &self.task.id
    }

    pub fn is_critical(&self) -> bool {
        self.timing.is_critical
    }
}

/// A dependency reference that matched no task in the set.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DanglingDependency {
    /// The task listing the reference.
    pub task_id: String,
    /// The id that did not resolve.
    pub dependency_id: String,
}

/// Result of a successful scheduling run.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Schedule {
    /// Tasks with computed fields, in the caller's original order.
    pub tasks: Vec<ScheduledTask>,
    /// Maximum earliest finish over all tasks (0 for an empty set).
    pub project_duration: f64,
    /// Critical and non-critical counts plus minimum slack.
    pub summary: SlackSummary,
    /// One start-to-finish chain of critical task ids.
    pub critical_path: Vec<String>,
    /// The topological order the passes ran in.
    pub topological_order: Vec<String>,
    /// Dependency references that were ignored because they matched no task.
    pub dangling_dependencies: Vec<DanglingDependency>,
}

impl Schedule {
    /// Look up a scheduled task by id.
    pub fn get(&self, task_id: &str) -> Option<&ScheduledTask> {
        self.tasks.iter().find(|t| t.task.id == task_id)
    }

    /// Iterate over the critical tasks in original order.
    pub fn critical_tasks(&self) -> impl Iterator<Item = &ScheduledTask> {
        self.tasks.iter().filter(|t| t.timing.is_critical)
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}
