// src/core/config.rs
use serde::Deserialize;
use std::path::{Path, PathBuf};

pub mod loader;

pub use loader::{CONFIG_FILE_NAME, load_config};

/// Defaults read from `.charstats.toml`.
///
/// ```toml
/// input = "notes/today.md"
/// output = "reports/today.txt"
/// verbose = true
/// ```
#[derive(Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub input: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub verbose: bool,
}

impl Config {
    /// Makes relative `input`/`output` paths relative to `base` instead of
    /// the working directory.
    #[must_use]
    pub fn relative_to(mut self, base: &Path) -> Self {
        let rebase = |path: PathBuf| {
            if path.is_relative() {
                base.join(path)
            } else {
                path
            }
        };
        self.input = self.input.map(rebase);
        self.output = self.output.map(rebase);
        self
    }
}
