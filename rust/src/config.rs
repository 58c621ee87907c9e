//! Configuration types for the CPM engine.

/// Default relative tolerance below which a computed slack counts as zero.
///
/// Scaled by the project duration (at least 1) before comparing.
pub const DEFAULT_SLACK_EPSILON: f64 = 1e-9;

/// Configuration for a scheduling run.
#[derive(Clone, Debug, PartialEq)]
pub struct CpmConfig {
    /// Verbosity level: 0=silent, 1=changes, 2=checks, 3=debug.
    pub verbosity: u8,
    /// Slack magnitudes below `slack_epsilon * max(project_duration, 1)` are
    /// snapped to exactly zero.
    pub slack_epsilon: f64,
    /// Fail the run on a dependency id that matches no task instead of ignoring it.
    pub strict_dependencies: bool,
}

impl Default for CpmConfig {
    fn default() -> Self {
        Self {
            verbosity: 0,
            slack_epsilon: DEFAULT_SLACK_EPSILON,
            strict_dependencies: false,
        }
    }
}

impl CpmConfig {
    /// Default configuration with the given verbosity.
    pub fn with_verbosity(verbosity: u8) -> Self {
        Self {
            verbosity,
            ..Self::default()
        }
    }

    /// Default configuration that rejects dangling dependency references.
    pub fn strict() -> Self {
        Self {
            strict_dependencies: true,
            ..Self::default()
        }
    }
}
