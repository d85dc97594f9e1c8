//! CLI library components for the country select inspector.

pub mod cli;
pub mod commands;
pub mod logging;
