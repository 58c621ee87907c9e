//! Critical Path Method scheduling engine.
//!
//! Given tasks with durations and precedence dependencies, computes earliest
//! and latest start/finish, slack and criticality for every task, the project
//! duration, and one end-to-end critical path. Each run is a pure function of
//! its input; [`TaskRepository`] layers editable task storage on top.

pub mod backward_pass;
mod config;
pub mod critical_path;
mod engine;
pub mod forward_pass;
pub mod graph;
mod interner;
pub mod logging;
mod models;
#[cfg(feature = "python")]
mod python;
mod repository;
pub mod sorting;

pub use backward_pass::{backward_pass, BackwardPassResult};
pub use config::{CpmConfig, DEFAULT_SLACK_EPSILON};
pub use critical_path::{evaluate_slack, extract_critical_path, SlackSummary, TaskTiming};
pub use engine::{schedule, CpmError};
pub use forward_pass::{forward_pass, ForwardPassResult};
pub use graph::{DependencyGraph, GraphError};
pub use interner::{TaskIdInt, TaskIdInterner};
pub use models::{DanglingDependency, Schedule, ScheduledTask, Task};
pub use repository::{RepositoryError, TaskRepository};
pub use sorting::{topological_sort, SortingError};
