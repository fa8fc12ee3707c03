//! Signal handling module
//!
//! This module installs the termination handler using the signal-hook crate.
//! The handler itself only writes to signal-hook's self-pipe; [`Pause::wait`]
//! blocks reading that pipe on the calling thread, so the process sleeps
//! without polling until a watched signal arrives.
//!
//! Signals outside the watched set are left alone and keep their default
//! disposition.

use nix::sys::signal::Signal;
use signal_hook::consts::FORBIDDEN;
use signal_hook::iterator::Signals;
use std::os::raw::c_int;

use crate::error::{PauseError, Result};

/// An installed termination handler
pub struct Pause {
    watched: Vec<Signal>,
    signals: Signals,
}

impl Pause {
    /// Register a handler for every signal in `watched`
    pub fn install(watched: &[Signal]) -> Result<Self> {
        if watched.is_empty() {
            return Err(PauseError::NoSignals);
        }

        if let Some(&signal) = watched
            .iter()
            .find(|&&signal| FORBIDDEN.contains(&(signal as c_int)))
        {
            return Err(PauseError::Uncatchable(signal));
        }

        let raw: Vec<c_int> = watched.iter().map(|&signal| signal as c_int).collect();
        let signals = Signals::new(&raw).map_err(|source| PauseError::Install {
            signals: watched.to_vec(),
            source,
        })?;

        tracing::debug!(signals = ?watched, "termination handler installed");

        Ok(Self {
            watched: watched.to_vec(),
            signals,
        })
    }

    /// The signals this handler stops on
    pub fn signals(&self) -> &[Signal] {
        &self.watched
    }

    /// Block until one of the watched signals arrives
    ///
    /// Returns `None` only if the signal stream was closed, which cannot
    /// happen while `self` owns it.
    pub fn wait(mut self) -> Option<Signal> {
        tracing::debug!(signals = ?self.watched, "waiting for termination signal");

        self.signals
            .forever()
            .next()
            .and_then(|raw| Signal::try_from(raw).ok())
    }
}
