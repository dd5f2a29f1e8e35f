// src/report.rs
use log::info;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::{Phase, StatsError};
use crate::models::{Category, StatsAccumulator};

const NAME_WIDTH: usize = 15;
const COUNT_WIDTH: usize = 5;
const PERCENT_WIDTH: usize = 8;

/// Renders the fixed-column report for `stats`.
///
/// One row per reported category with its count and share of the total,
/// followed by a `Total` row without a percentage. The `Total` row has no
/// trailing newline.
#[must_use]
pub fn render_report(stats: &StatsAccumulator) -> String {
    let mut out = format!(
        "{:<NAME_WIDTH$}{:>COUNT_WIDTH$}{:>PERCENT_WIDTH$}\n",
        "Category", "Count", "Percent"
    );
    out.push_str(&format!(
        "{:-<NAME_WIDTH$}{:->COUNT_WIDTH$}{:->PERCENT_WIDTH$}\n",
        "", "", ""
    ));

    for category in Category::REPORTED {
        out.push_str(&format!(
            "{:<NAME_WIDTH$}{:>COUNT_WIDTH$}{:>PERCENT_WIDTH$.2}\n",
            category.label(),
            stats.count(category),
            stats.percent_of_total(category)
        ));
    }

    out.push_str(&format!(
        "{:<NAME_WIDTH$}{:>COUNT_WIDTH$}",
        Category::Total.label(),
        stats.count(Category::Total)
    ));

    out
}

/// Writes the report to `sink` and flushes it.
///
/// # Errors
///
/// Returns a [`Phase::Write`] error if writing or flushing fails.
#[inline]
pub fn write_report<W: Write>(sink: &mut W, stats: &StatsAccumulator) -> Result<(), StatsError> {
    sink.write_all(render_report(stats).as_bytes())
        .and_then(|()| sink.flush())
        .map_err(StatsError::tag(Phase::Write))
}

/// Creates or truncates `path` for the report.
///
/// # Errors
///
/// Returns a [`Phase::OpenOutput`] error if the file cannot be created.
#[inline]
pub fn open_output(path: &Path) -> Result<BufWriter<File>, StatsError> {
    File::create(path)
        .map(BufWriter::new)
        .map_err(StatsError::tag(Phase::OpenOutput))
}

/// Writes the report to `path`. The file is closed before returning.
///
/// # Errors
///
/// This function may return an error if:
/// * The file cannot be created ([`Phase::OpenOutput`])
/// * Writing fails ([`Phase::Write`])
#[inline]
pub fn write_report_file(path: &Path, stats: &StatsAccumulator) -> Result<(), StatsError> {
    let mut sink = open_output(path)?;
    write_report(&mut sink, stats)?;
    info!("Report written to {}", path.display());
    Ok(())
}
