// src/lib.rs
pub mod cli;
pub mod core;
pub mod error;
pub mod models;
pub mod report;
mod utils;

pub use cli::{Args, INPUT_PROMPT, OUTPUT_PROMPT, run, run_with};
pub use crate::core::classify::categories_of;
pub use crate::core::config::{CONFIG_FILE_NAME, Config, load_config};
pub use crate::core::scanner::{count_file, count_stats, open_input, record_byte};
pub use error::{Phase, StatsError};
pub use models::{Category, StatsAccumulator};
pub use report::{open_output, render_report, write_report, write_report_file};
