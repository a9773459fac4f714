//! CLI module for tritimer.
//!
//! This module provides the command-line interface:
//! - `commands`: Command definitions using clap derive
//! - `prompt`: Interactive startup prompt for the countdown target time

pub mod commands;
pub mod prompt;

pub use commands::{Cli, Commands, RunArgs};
pub use prompt::prompt_target_time;
