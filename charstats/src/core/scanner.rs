// src/core/scanner.rs
use log::debug;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use crate::core::classify::categories_of;
use crate::error::{Phase, StatsError};
use crate::models::{Category, StatsAccumulator};

#[cfg(test)]
pub mod test_utils;

/// Opens `path` for reading.
///
/// # Errors
///
/// Returns an [`Phase::OpenInput`] error if the file does not exist or cannot
/// be opened.
#[inline]
pub fn open_input(path: &Path) -> Result<File, StatsError> {
    debug!("Opening input {}", path.display());
    File::open(path).map_err(StatsError::tag(Phase::OpenInput))
}

/// Counts `byte` towards `Total` and every other category it belongs to.
#[inline]
pub fn record_byte(stats: &mut StatsAccumulator, byte: u8) {
    for category in categories_of(byte) {
        stats.increment(category);
    }
}

/// Reads `source` to the end and counts every byte.
///
/// # Arguments
///
/// * `source` - Any byte source; it is buffered internally
///
/// # Returns
///
/// * `Ok(StatsAccumulator)` - Counts for the whole stream
///
/// # Errors
///
/// Returns a [`Phase::Count`] error if a read fails before end-of-stream. The
/// counts gathered so far are dropped.
#[inline]
pub fn count_stats<R: Read>(source: R) -> Result<StatsAccumulator, StatsError> {
    let mut stats = StatsAccumulator::new();

    for byte in BufReader::new(source).bytes() {
        let byte = byte.map_err(StatsError::tag(Phase::Count))?;
        record_byte(&mut stats, byte);
    }

    debug!("Counted {} bytes", stats.count(Category::Total));
    Ok(stats)
}

/// Opens `path` and counts its bytes. The file is closed before returning.
///
/// # Errors
///
/// This function may return an error if:
/// * The file cannot be opened ([`Phase::OpenInput`])
/// * Reading fails part way through ([`Phase::Count`])
#[inline]
pub fn count_file(path: &Path) -> Result<StatsAccumulator, StatsError> {
    let file = open_input(path)?;
    count_stats(file)
}
