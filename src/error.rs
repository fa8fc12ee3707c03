//! Error types for installing the signal handler

use nix::sys::signal::Signal;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PauseError {
    #[error("no termination signals given")]
    NoSignals,

    #[error("signal {0} cannot be caught")]
    Uncatchable(Signal),

    #[error("failed to register handler for {signals:?}: {source}")]
    Install {
        signals: Vec<Signal>,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, PauseError>;
