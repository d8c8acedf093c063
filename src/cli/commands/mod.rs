//! CLI Commands module
//!
//! Each command follows a consistent pattern: an `Args` struct parsed by
//! clap and an async `execute` entry point.

pub mod browse;
pub mod items;
