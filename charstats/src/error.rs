// src/error.rs
use std::fmt;
use std::io;
use thiserror::Error;

/// The pipeline step an I/O failure happened in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    OpenInput,
    OpenOutput,
    Count,
    Write,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::OpenInput => "open-input",
            Self::OpenOutput => "open-output",
            Self::Count => "count",
            Self::Write => "write",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Error)]
#[error("File error encountered ({phase}): {source}")]
pub struct StatsError {
    phase: Phase,
    #[source]
    source: io::Error,
}

impl StatsError {
    #[must_use]
    pub const fn new(phase: Phase, source: io::Error) -> Self {
        Self { phase, source }
    }

    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    /// Adapter for `map_err` that tags an I/O error with `phase`.
    pub fn tag(phase: Phase) -> impl FnOnce(io::Error) -> Self {
        move |source| Self::new(phase, source)
    }
}
