//! wellbeing-cli library root.
//!
//! The binary is a thin shell over these modules so that integration tests
//! can drive commands and config loading without spawning a process.

pub mod cli;
pub mod commands;
pub mod config;
pub mod render;
