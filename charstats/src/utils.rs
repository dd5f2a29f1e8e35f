// src/utils.rs
use crate::error::{Phase, StatsError};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

/// Asks for a path on `out` and reads one line from `input`.
///
/// The trailing line ending is stripped. Failures, including stdin closing
/// before a line arrives, are tagged with `phase`.
pub fn prompt_for_path<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    message: &str,
    phase: Phase,
) -> Result<PathBuf, StatsError> {
    write!(out, "{message}")
        .and_then(|()| out.flush())
        .map_err(StatsError::tag(phase))?;

    let mut line = String::new();
    let read = input.read_line(&mut line).map_err(StatsError::tag(phase))?;
    if read == 0 {
        return Err(StatsError::new(
            phase,
            io::Error::new(io::ErrorKind::UnexpectedEof, "no file name entered"),
        ));
    }

    Ok(PathBuf::from(line.trim_end_matches(['\r', '\n'])))
}

/// Uses the first of `explicit` and `configured` that is set, prompting
/// otherwise.
pub fn resolve_path<R: BufRead, W: Write>(
    explicit: Option<&PathBuf>,
    configured: Option<&PathBuf>,
    input: &mut R,
    out: &mut W,
    message: &str,
    phase: Phase,
) -> Result<PathBuf, StatsError> {
    match explicit.or(configured) {
        Some(path) => Ok(path.clone()),
        None => prompt_for_path(input, out, message, phase),
    }
}
