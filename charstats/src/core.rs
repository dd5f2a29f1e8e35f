// src/core.rs
pub mod classify;
pub mod config;
pub mod scanner;
