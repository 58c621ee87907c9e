//! In-memory task repository.
//!
//! Holds the caller's task records between runs and applies a run's computed
//! fields back onto them. Every recompute starts by resetting all computed
//! fields, and only a successful run writes new ones.

use thiserror::Error;

use crate::config::CpmConfig;
use crate::critical_path::TaskTiming;
use crate::engine::{schedule, CpmError};
use crate::log_changes;
use crate::models::{Schedule, ScheduledTask, Task};

/// Errors from editing the repository.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RepositoryError {
    #[error("Task id must not be empty")]
    EmptyTaskId,
    #[error("Duplicate task id: {0}")]
    DuplicateTaskId(String),
    #[error("Task not found: {0}")]
    TaskNotFound(String),
    #[error("Invalid duration for task {task_id}: {duration} (must be a positive number)")]
    InvalidDuration { task_id: String, duration: f64 },
}

/// Ordered collection of tasks plus the outcome of the last run.
#[derive(Debug, Clone, Default)]
pub struct TaskRepository {
    records: Vec<ScheduledTask>,
    last_schedule: Option<Schedule>,
}

impl TaskRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a repository from tasks, validating each as `add` would.
    pub fn with_tasks(tasks: impl IntoIterator<Item = Task>) -> Result<Self, RepositoryError> {
        let mut repo = Self::new();
        for task in tasks {
            repo.add(task)?;
        }
        Ok(repo)
    }

    fn position(&self, task_id: &str) -> Option<usize> {
        self.records.iter().position(|r| r.task.id == task_id)
    }

    fn check_duration(task_id: &str, duration: f64) -> Result<(), RepositoryError> {
        if duration.is_finite() && duration > 0.0 {
            Ok(())
        } else {
            Err(RepositoryError::InvalidDuration {
                task_id: task_id.to_string(),
                duration,
            })
        }
    }

    /// Forget computed fields; called on every edit and at the start of a run.
    fn invalidate(&mut self) {
        for record in &mut self.records {
            record.timing = TaskTiming::default();
        }
        self.last_schedule = None;
    }

    /// Append a new task.
    pub fn add(&mut self, task: Task) -> Result<(), RepositoryError> {
        if task.id.is_empty() {
            return Err(RepositoryError::EmptyTaskId);
        }
        if self.position(&task.id).is_some() {
            return Err(RepositoryError::DuplicateTaskId(task.id));
        }
        Self::check_duration(&task.id, task.duration)?;

        self.invalidate();
        self.records.push(ScheduledTask::unscheduled(task));
        Ok(())
    }

    /// Replace the name, duration and dependencies of an existing task.
    ///
    /// The task keeps its id and its position in the repository.
    pub fn update(
        &mut self,
        task_id: &str,
        name: impl Into<String>,
        duration: f64,
        dependencies: Vec<String>,
    ) -> Result<(), RepositoryError> {
        let pos = self
            .position(task_id)
            .ok_or_else(|| RepositoryError::TaskNotFound(task_id.to_string()))?;
        Self::check_duration(task_id, duration)?;

        self.invalidate();
        let task = &mut self.records[pos].task;
        task.name = name.into();
        task.duration = duration;
        task.dependencies = dependencies;
        Ok(())
    }

    /// Remove a task and strip its id from every other task's dependencies.
    pub fn remove(&mut self, task_id: &str) -> Result<Task, RepositoryError> {
        let pos = self
            .position(task_id)
            .ok_or_else(|| RepositoryError::TaskNotFound(task_id.to_string()))?;

        self.invalidate();
        let removed = self.records.remove(pos).task;
        for record in &mut self.records {
            record.task.dependencies.retain(|dep| dep != task_id);
        }
        Ok(removed)
    }

    /// Remove every task.
    pub fn clear(&mut self) {
        self.records.clear();
        self.last_schedule = None;
    }

    pub fn get(&self, task_id: &str) -> Option<&ScheduledTask> {
        self.records.iter().find(|r| r.task.id == task_id)
    }

    /// Task records with their current computed fields, in insertion order.
    pub fn records(&self) -> &[ScheduledTask] {
        &self.records
    }

    /// A detached copy of the task definitions, in insertion order.
    pub fn snapshot(&self) -> Vec<Task> {
        self.records.iter().map(|r| r.task.clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The schedule from the last successful run, if no edit happened since.
    pub fn last_schedule(&self) -> Option<&Schedule> {
        self.last_schedule.as_ref()
    }

    /// Recompute the schedule for the current tasks.
    ///
    /// Computed fields are reset first. On success they are replaced with the
    /// run's timings; on failure they stay at their defaults.
    pub fn calculate(&mut self, config: &CpmConfig) -> Result<&Schedule, CpmError> {
        self.invalidate();

        let tasks = self.snapshot();
        let result = schedule(&tasks, config)?;

        for (record, scheduled) in self.records.iter_mut().zip(&result.tasks) {
            record.timing = scheduled.timing.clone();
        }
        log_changes!(
            config.verbosity,
            "Repository schedule updated: {} tasks, duration {}",
            self.records.len(),
            result.project_duration
        );

        Ok(&*self.last_schedule.insert(result))
    }
}
