//! pause: a placeholder process for a pod's shared namespaces
//!
//! The process holds a process slot open and does nothing else. It stops in
//! one of two ways:
//!
//! - a termination signal (`SIGINT` or `SIGTERM`) arrives: it prints
//!   `received signal, shutting down...` to stderr and exits with 0
//! - the signal handler cannot be installed: it prints
//!   `error: unable to set controller` to stderr and exits with 1
//!
//! Any other signal keeps its default disposition.
//!
//! ## Example
//!
//! ```rust,no_run
//! use pause::{run, TERMINATION_SIGNALS};
//! use std::process::ExitCode;
//!
//! let outcome = run(TERMINATION_SIGNALS, &mut std::io::stderr());
//! let _code = ExitCode::from(outcome.exit_code());
//! ```

#![deny(warnings)]

#[cfg(not(unix))]
compile_error!("pause relies on unix signal delivery and only builds for unix targets");

pub mod config;
pub mod error;
pub mod signal;
pub mod telemetry;

use nix::sys::signal::Signal;
use std::io::Write;

// Re-export core types
pub use config::{INSTALL_FAILURE_MESSAGE, SHUTDOWN_MESSAGE, TERMINATION_SIGNALS};
pub use error::{PauseError, Result};
pub use signal::Pause;

/// How a run of the pause process ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// A watched signal arrived
    Terminated(Option<Signal>),
    /// The handler could not be installed
    InstallFailed,
}

impl Outcome {
    pub fn exit_code(&self) -> u8 {
        match self {
            Outcome::Terminated(_) => 0,
            Outcome::InstallFailed => 1,
        }
    }
}

/// Install the handler for `signals`, then sleep until one of them arrives
///
/// The matching diagnostic line is written to `diagnostics` before returning.
/// Write errors are ignored: the exit code still reports the outcome when
/// stderr is closed.
pub fn run<W: Write>(signals: &[Signal], diagnostics: &mut W) -> Outcome {
    let pause = match Pause::install(signals) {
        Ok(pause) => pause,
        Err(e) => {
            tracing::error!("{}", e);
            let _ = writeln!(diagnostics, "{}", INSTALL_FAILURE_MESSAGE);
            let _ = diagnostics.flush();
            return Outcome::InstallFailed;
        }
    };

    let received = pause.wait();
    match received {
        Some(signal) => tracing::info!("Received signal {}, shutting down", signal),
        None => tracing::warn!("Signal stream closed, shutting down"),
    }

    let _ = writeln!(diagnostics, "{}", SHUTDOWN_MESSAGE);
    let _ = diagnostics.flush();
    Outcome::Terminated(received)
}
