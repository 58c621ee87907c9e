//! Logging macros for the CPM engine with verbosity level control.
//!
//! Messages are emitted through `tracing`, gated by the run's verbosity so a
//! silent run (verbosity=0) never builds its log arguments.
//! Verbosity levels:
//! - 0: SILENT (only warnings)
//! - 1: CHANGES (run outcome, project duration, critical path)
//! - 2: CHECKS (dangling dependencies, per-task slack)
//! - 3: DEBUG (full pass internals)

/// Verbosity level constants.
pub const VERBOSITY_SILENT: u8 = 0;
pub const VERBOSITY_CHANGES: u8 = 1;
pub const VERBOSITY_CHECKS: u8 = 2;
pub const VERBOSITY_DEBUG: u8 = 3;

/// Log at CHANGES level (verbosity >= 1).
///
/// Used for: run outcomes, project duration, extracted critical path.
#[macro_export]
macro_rules! log_changes {
    ($verbosity:expr, $($arg:tt)*) => {
        if $verbosity >= $crate::logging::VERBOSITY_CHANGES {
            ::tracing::info!($($arg)*);
        }
    };
}

/// Log at CHECKS level (verbosity >= 2).
///
/// Used for: ignored dependency references, per-task slack decisions.
#[macro_export]
macro_rules! log_checks {
    ($verbosity:expr, $($arg:tt)*) => {
        if $verbosity >= $crate::logging::VERBOSITY_CHECKS {
            ::tracing::debug!($($arg)*);
        }
    };
}

/// Log at DEBUG level (verbosity >= 3).
///
/// Used for: queue operations in the sorter, per-task pass values.
#[macro_export]
macro_rules! log_debug {
    ($verbosity:expr, $($arg:tt)*) => {
        if $verbosity >= $crate::logging::VERBOSITY_DEBUG {
            ::tracing::trace!($($arg)*);
        }
    };
}

/// Map a verbosity level to the most detailed `tracing` level it emits.
pub fn max_level_for(verbosity: u8) -> tracing::Level {
    match verbosity {
        VERBOSITY_SILENT => tracing::Level::WARN,
        VERBOSITY_CHANGES => tracing::Level::INFO,
        VERBOSITY_CHECKS => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    }
}

/// Install a stderr `tracing-subscriber` for the given verbosity.
///
/// Returns `false` if a global subscriber was already installed (by an
/// earlier call or by the host application); that subscriber is left in place.
pub fn init_logging(verbosity: u8) -> bool {
    tracing_subscriber::fmt()
        .with_max_level(max_level_for(verbosity))
        .with_target(true)
        .with_writer(std::io::stderr)
        .try_init()
        .is_ok()
}
