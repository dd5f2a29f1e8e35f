// src/cli.rs
use clap::Parser;
use log::debug;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use crate::core::config::Config;
use crate::core::scanner::count_file;
use crate::error::{Phase, StatsError};
use crate::models::StatsAccumulator;
use crate::report::write_report_file;
use crate::utils::resolve_path;

pub const INPUT_PROMPT: &str = "Enter a filename to open for INPUT: ";
pub const OUTPUT_PROMPT: &str = "Enter a filename to open for OUTPUT: ";

#[derive(Parser, Debug, Default)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// File to read (prompted for when neither given nor configured)
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// File to write the report to (prompted for when neither given nor configured)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Log debug output to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

/// Runs the pipeline, prompting on stdout/stdin for any missing path.
///
/// # Errors
///
/// Returns the first I/O failure, tagged with the phase it happened in.
#[inline]
pub fn run(args: &Args, config: &Config) -> Result<StatsAccumulator, StatsError> {
    let stdin = io::stdin();
    run_with(args, config, &mut stdin.lock(), &mut io::stdout())
}

/// Counts the input file and writes the report.
///
/// The input is read and closed before the output path is even resolved, so
/// a failed count never creates or truncates the output file.
///
/// # Errors
///
/// This function may return an error if:
/// * The input path cannot be read from the prompt or opened ([`Phase::OpenInput`])
/// * Reading the input fails ([`Phase::Count`])
/// * The output path cannot be read from the prompt or created ([`Phase::OpenOutput`])
/// * Writing the report fails ([`Phase::Write`])
pub fn run_with<R: BufRead, W: Write>(
    args: &Args,
    config: &Config,
    prompt_input: &mut R,
    prompt_output: &mut W,
) -> Result<StatsAccumulator, StatsError> {
    let input = resolve_path(
        args.input.as_ref(),
        config.input.as_ref(),
        prompt_input,
        prompt_output,
        INPUT_PROMPT,
        Phase::OpenInput,
    )?;
    let stats = count_file(&input)?;

    let output = resolve_path(
        args.output.as_ref(),
        config.output.as_ref(),
        prompt_input,
        prompt_output,
        OUTPUT_PROMPT,
        Phase::OpenOutput,
    )?;
    debug!("Writing report for {} to {}", input.display(), output.display());
    write_report_file(&output, &stats)?;

    Ok(stats)
}
