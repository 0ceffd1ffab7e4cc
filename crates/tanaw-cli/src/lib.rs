//! CLI library components for the enrollment cleaner.

pub mod cli;
pub mod commands;
pub mod config;
pub mod logging;
