//! CLI library components for flowsel.

pub mod cli;
pub mod commands;
pub mod logging;
pub mod summary;
