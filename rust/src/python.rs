//! PyO3 bindings for the CPM engine.
//!
//! Wrapper classes mirror the Rust types field-for-field and convert at the
//! boundary; every engine error is raised as `ValueError`.

// Allow clippy warning triggered by PyO3 macro expansion
#![allow(clippy::useless_conversion)]

use pyo3::prelude::*;

use crate::config::{CpmConfig, DEFAULT_SLACK_EPSILON};
use crate::engine::schedule;
use crate::models::{Schedule, ScheduledTask, Task};

/// A task to be scheduled.
#[pyclass(name = "Task")]
#[derive(Clone, Debug)]
pub struct PyTask {
    #[pyo3(get, set)]
    pub id: String,
    #[pyo3(get, set)]
    pub name: String,
    #[pyo3(get, set)]
    pub duration: f64,
    #[pyo3(get, set)]
    pub dependencies: Vec<String>,
}

#[pymethods]
impl PyTask {
    #[new]
    #[pyo3(signature = (id, duration, dependencies=None, name=None))]
    fn new(
        id: String,
        duration: f64,
        dependencies: Option<Vec<String>>,
        name: Option<String>,
    ) -> Self {
        Self {
            name: name.unwrap_or_else(|| id.clone()),
            id,
            duration,
            dependencies: dependencies.unwrap_or_default(),
        }
    }

    fn __repr__(&self) -> String {
        format!(
            "Task(id={:?}, duration={}, deps={})",
            self.id,
            self.duration,
            self.dependencies.len()
        )
    }
}

impl From<PyTask> for Task {
    fn from(t: PyTask) -> Self {
        Task {
            id: t.id,
            name: t.name,
            duration: t.duration,
            dependencies: t.dependencies,
        }
    }
}

/// A task with its computed schedule fields.
#[pyclass(name = "ScheduledTask")]
#[derive(Clone, Debug)]
pub struct PyScheduledTask {
    #[pyo3(get)]
    pub id: String,
    #[pyo3(get)]
    pub name: String,
    #[pyo3(get)]
    pub duration: f64,
    #[pyo3(get)]
    pub dependencies: Vec<String>,
    #[pyo3(get)]
    pub earliest_start: f64,
    #[pyo3(get)]
    pub earliest_finish: f64,
    #[pyo3(get)]
    pub latest_start: f64,
    #[pyo3(get)]
    pub latest_finish: f64,
    #[pyo3(get)]
    pub slack: f64,
    #[pyo3(get)]
    pub is_critical: bool,
}

#[pymethods]
impl PyScheduledTask {
    fn __repr__(&self) -> String {
        format!(
            "ScheduledTask(id={:?}, es={}, ef={}, ls={}, lf={}, slack={}, critical={})",
            self.id,
            self.earliest_start,
            self.earliest_finish,
            self.latest_start,
            self.latest_finish,
            self.slack,
            self.is_critical
        )
    }
}

impl From<ScheduledTask> for PyScheduledTask {
    fn from(s: ScheduledTask) -> Self {
        Self {
            id: s.task.id,
            name: s.task.name,
            duration: s.task.duration,
            dependencies: s.task.dependencies,
            earliest_start: s.timing.earliest_start,
            earliest_finish: s.timing.earliest_finish,
            latest_start: s.timing.latest_start,
            latest_finish: s.timing.latest_finish,
            slack: s.timing.slack,
            is_critical: s.timing.is_critical,
        }
    }
}

/// Result of a successful scheduling run.
#[pyclass(name = "Schedule")]
#[derive(Clone, Debug)]
pub struct PySchedule {
    #[pyo3(get)]
    pub tasks: Vec<PyScheduledTask>,
    #[pyo3(get)]
    pub project_duration: f64,
    #[pyo3(get)]
    pub critical_path: Vec<String>,
    #[pyo3(get)]
    pub critical_count: usize,
    #[pyo3(get)]
    pub non_critical_count: usize,
    #[pyo3(get)]
    pub min_slack: f64,
    #[pyo3(get)]
    pub topological_order: Vec<String>,
    /// (task_id, missing_dependency_id) pairs that were ignored.
    #[pyo3(get)]
    pub dangling_dependencies: Vec<(String, String)>,
}

#[pymethods]
impl PySchedule {
    fn __repr__(&self) -> String {
        format!(
            "Schedule(tasks={}, duration={}, critical_path={:?})",
            self.tasks.len(),
            self.project_duration,
            self.critical_path
        )
    }
}

impl From<Schedule> for PySchedule {
    fn from(s: Schedule) -> Self {
        Self {
            tasks: s.tasks.into_iter().map(Into::into).collect(),
            project_duration: s.project_duration,
            critical_path: s.critical_path,
            critical_count: s.summary.critical_count,
            non_critical_count: s.summary.non_critical_count,
            min_slack: s.summary.min_slack,
            topological_order: s.topological_order,
            dangling_dependencies: s
                .dangling_dependencies
                .into_iter()
                .map(|d| (d.task_id, d.dependency_id))
                .collect(),
        }
    }
}

/// Configuration for a scheduling run.
#[pyclass(name = "CpmConfig")]
#[derive(Clone, Debug)]
pub struct PyCpmConfig {
    #[pyo3(get, set)]
    pub verbosity: u8,
    #[pyo3(get, set)]
    pub slack_epsilon: f64,
    #[pyo3(get, set)]
    pub strict_dependencies: bool,
}

#[pymethods]
impl PyCpmConfig {
    #[new]
    #[pyo3(signature = (verbosity=0, slack_epsilon=DEFAULT_SLACK_EPSILON, strict_dependencies=false))]
    fn new(verbosity: u8, slack_epsilon: f64, strict_dependencies: bool) -> Self {
        Self {
            verbosity,
            slack_epsilon,
            strict_dependencies,
        }
    }

    fn __repr__(&self) -> String {
        format!(
            "CpmConfig(verbosity={}, slack_epsilon={}, strict_dependencies={})",
            self.verbosity, self.slack_epsilon, self.strict_dependencies
        )
    }
}

impl From<PyCpmConfig> for CpmConfig {
    fn from(c: PyCpmConfig) -> Self {
        CpmConfig {
            verbosity: c.verbosity,
            slack_epsilon: c.slack_epsilon,
            strict_dependencies: c.strict_dependencies,
        }
    }
}

/// Compute the CPM schedule for a list of tasks.
///
/// # Arguments
/// * `tasks` - List of tasks in display order
/// * `config` - Optional run configuration
///
/// # Returns
/// * Schedule with per-task timings, summary counts and one critical path
///
/// # Raises
/// * ValueError on invalid duration, duplicate id, or circular dependency
#[pyfunction]
#[pyo3(signature = (tasks, config=None))]
fn calculate_cpm(tasks: Vec<PyTask>, config: Option<PyCpmConfig>) -> PyResult<PySchedule> {
    let tasks: Vec<Task> = tasks.into_iter().map(Into::into).collect();
    let config: CpmConfig = config.map(Into::into).unwrap_or_default();

    match schedule(&tasks, &config) {
        Ok(result) => Ok(result.into()),
        Err(e) => Err(pyo3::exceptions::PyValueError::new_err(e.to_string())),
    }
}

/// Install a stderr log subscriber; returns False if one already exists.
#[pyfunction]
#[pyo3(signature = (verbosity=1))]
fn init_logging(verbosity: u8) -> bool {
    crate::logging::init_logging(verbosity)
}

/// The critpath.rust Python module.
#[pymodule]
pub fn rust(m: &Bound<'_, PyModule>) -> PyResult<()> {
    // Core data types
    m.add_class::<PyTask>()?;
    m.add_class::<PyScheduledTask>()?;
    m.add_class::<PySchedule>()?;
    m.add_class::<PyCpmConfig>()?;

    // Engine
    m.add_function(wrap_pyfunction!(calculate_cpm, m)?)?;
    m.add_function(wrap_pyfunction!(init_logging, m)?)?;

    Ok(())
}
