// src/main.rs
use charstats::{Args, Config, load_config, run};
use clap::Parser;
use log::{LevelFilter, warn};
use std::env;
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = Args::parse();

    let cwd = env::current_dir().unwrap_or_default();
    let config = load_config(&cwd);
    let verbose = args.verbose || config.as_ref().is_ok_and(|config| config.verbose);

    env_logger::Builder::new()
        .filter_level(if verbose {
            LevelFilter::Debug
        } else {
            LevelFilter::Warn
        })
        .parse_default_env()
        .format_timestamp(None)
        .init();

    let config = config.unwrap_or_else(|err| {
        warn!("Ignoring config: {err:#}");
        Config::default()
    });

    match run(&args, &config) {
        Ok(_) => {
            println!("Complete.");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
