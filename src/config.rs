//! Configuration constants for the pause process
//!
//! The process takes no arguments and reads no files, so everything it can
//! be tuned with lives here at compile time.

use nix::sys::signal::Signal;

/// Signals that stop the process
///
/// `SIGINT` is the interactive Ctrl-C request. `SIGTERM` is what container
/// runtimes send when a pod is torn down.
pub const TERMINATION_SIGNALS: &[Signal] = &[Signal::SIGINT, Signal::SIGTERM];

/// Written to stderr when a termination signal is received
pub const SHUTDOWN_MESSAGE: &str = "received signal, shutting down...";

/// Written to stderr when the signal handler cannot be installed
pub const INSTALL_FAILURE_MESSAGE: &str = "error: unable to set controller";

/// Log filter used when `RUST_LOG` is unset
///
/// Kept at `warn` so a normal run prints nothing besides the two messages above.
pub const DEFAULT_LOG_FILTER: &str = "warn";
