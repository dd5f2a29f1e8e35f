// src/models.rs
pub mod category;
pub mod stats_accumulator;

pub use category::Category;
pub use stats_accumulator::StatsAccumulator;
