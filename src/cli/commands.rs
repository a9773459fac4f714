//! Command definitions for the tritimer CLI.
//!
//! Uses clap derive macro for argument parsing.

use clap::{Args, Parser, Subcommand};

use crate::timer::TargetTime;

// ============================================================================
// CLI Structure
// ============================================================================

/// Triple-timer terminal utility
#[derive(Parser, Debug)]
#[command(
    name = "tritimer",
    version,
    about = "Stopwatch, interval beeper, and countdown alarm in one terminal panel",
    long_about = "Runs three timers side by side, refreshed once per second:\n\
                  an unbounded stopwatch, an interval beeper that sounds a short\n\
                  tone every N seconds, and a countdown that sounds a long tone\n\
                  and posts a desktop notification at a target wall-clock time.",
    propagate_version = true
)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Enable verbose output for debugging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

// ============================================================================
// Subcommands
// ============================================================================

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Run the three timers (default when no subcommand is given)
    Run(RunArgs),

    /// Generate shell completion scripts
    Completions {
        /// Shell type for completion script
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

// ============================================================================
// Run Command Arguments
// ============================================================================

/// Arguments for the run command
#[derive(Args, Debug, Clone)]
pub struct RunArgs {
    /// Interval beeper period in seconds (1-3600)
    #[arg(
        short,
        long,
        default_value = "5",
        value_parser = clap::value_parser!(u32).range(1..=3600)
    )]
    pub interval: u32,

    /// Target time in packed HHMM form (e.g. 1430 for 14:30); prompted for when omitted
    #[arg(short, long, value_parser = parse_target)]
    pub target: Option<TargetTime>,

    /// Disable alert tones (the expiry notification still fires)
    #[arg(long)]
    pub no_sound: bool,
}

impl Default for RunArgs {
    fn default() -> Self {
        Self {
            interval: 5,
            target: None,
            no_sound: false,
        }
    }
}

// ============================================================================
// Validation Functions
// ============================================================================

/// Parses and validates a packed `HHMM` target time.
///
/// - Must be a decimal integer
/// - Hour component must be 00-23, minute component 00-59
pub(crate) fn parse_target(s: &str) -> Result<TargetTime, String> {
    let packed: u32 = s
        .parse()
        .map_err(|_| format!("'{s}' is not a number; enter a packed HHMM time such as 1430"))?;
    let target = TargetTime::from_packed(packed);
    if !target.is_valid() {
        return Err(format!(
            "{packed:04} is out of range; hour must be 00-23 and minute 00-59"
        ));
    }
    Ok(target)
}

// ============================================================================
// Tests
// ============================================================================
