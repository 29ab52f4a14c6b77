//! CLI library components for scorecard data preparation.

pub mod cli;
pub mod commands;
pub mod logging;
pub mod summary;
