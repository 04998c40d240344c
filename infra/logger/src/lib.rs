//! # Logger
//!
//! One place to install the process-wide `tracing` subscriber: a compact console
//! layer, an optional rolling file layer written through a non-blocking worker, and
//! an [`EnvFilter`](tracing_subscriber::EnvFilter) built from a default level plus
//! either programmatic directives or `RUST_LOG`.
//!
//! ## Example
//!
//! ```rust
//! # use annc_logger::{Logger, LevelFilter};
//! let _logger = Logger::builder()
//!     .name("annc")
//!     .console(true)
//!     .level(LevelFilter::DEBUG)
//!     .init()
//!     .unwrap();
//! ```

mod builder;
mod error;

pub use crate::builder::{LoggerBuilder, NoFile, NoName, WithFile, WithName};
pub use crate::error::{LoggerError, LoggerErrorExt};
pub use tracing::level_filters::LevelFilter;
pub use tracing_appender::rolling::Rotation;

use tracing_appender::non_blocking::WorkerGuard;

/// Handle to the installed logging system.
///
/// Holds the file writer's worker guard, if any. Drop it only at shutdown.
#[must_use = "Dropping this handle will stop background logging threads."]
#[derive(Debug)]
pub struct Logger {
    guard: Option<WorkerGuard>,
}

impl Logger {
    /// Starts configuring the global subscriber.
    ///
    /// The name prefixes rolling log files (e.g. `annc.2026-10-18.log`).
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }

    pub(crate) const fn new(guard: Option<WorkerGuard>) -> Self {
        Self { guard }
    }

    /// The file writer's guard; `None` for console-only logging.
    #[must_use]
    pub const fn guard(&self) -> Option<&WorkerGuard> {
        self.guard.as_ref()
    }
}

impl Drop for Logger {
    fn drop(&mut self) {
        if self.guard.is_some() {
            tracing::info!("Logging system shutting down, flushing buffers...");
        }
    }
}
