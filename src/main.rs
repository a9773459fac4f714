//! tritimer - three timers in one terminal panel
//!
//! Runs a stopwatch, an interval beeper, and a countdown-to-target alarm
//! side by side, refreshed once per second:
//! - the stopwatch counts up without bound
//! - the interval beeper sounds a short tone every N seconds
//! - the countdown sounds a long tone and posts a desktop notification when
//!   the target wall-clock time arrives

use std::sync::Arc;

use anyhow::Result;
use chrono::Local;
use clap::{CommandFactory, Parser};
use tokio::sync::watch;

use tritimer::alert::{AlertSink, DesktopAlertSink};
use tritimer::cli::{prompt_target_time, Cli, Commands, RunArgs};
use tritimer::display::TerminalPanel;
use tritimer::engine::Driver;
use tritimer::timer::{CountdownAlarm, IntervalAlarm, Stopwatch};

/// Main entry point
#[tokio::main(flavor = "current_thread")]
async fn main() {
    // Initialize logging
    init_tracing();

    // Parse command line arguments
    let cli = Cli::parse();

    // Execute command
    if let Err(e) = execute(cli).await {
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}

/// Initializes the tracing subscriber for logging.
fn init_tracing() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .init();
}

/// Executes the CLI command.
async fn execute(cli: Cli) -> Result<()> {
    if cli.verbose {
        tracing::info!("Verbose mode enabled");
    }

    match cli.command {
        Some(Commands::Run(args)) => run_timers(args).await,
        Some(Commands::Completions { shell }) => {
            generate_completions(shell);
            Ok(())
        }
        // No subcommand: running the timers is the whole point.
        None => run_timers(RunArgs::default()).await,
    }
}

/// Wires the three timers to their display lines and runs the driver until
/// Ctrl-C.
async fn run_timers(args: RunArgs) -> Result<()> {
    let target = match args.target {
        Some(target) => target,
        None => match prompt_target_time()? {
            Some(target) => target,
            // Cancelling the prompt is a normal exit, not an error.
            None => return Ok(()),
        },
    };

    let alerts: Arc<dyn AlertSink> = Arc::new(DesktopAlertSink::new(args.no_sound));
    let panel = TerminalPanel::new();
    let now = Local::now().naive_local();

    let mut driver = Driver::new(alerts);
    driver.register(Box::new(Stopwatch::new()), Box::new(panel.line()));
    driver.register(
        Box::new(IntervalAlarm::new(args.interval)?),
        Box::new(panel.line()),
    );
    driver.register(
        Box::new(CountdownAlarm::new(target, now)),
        Box::new(panel.line()),
    );

    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            let _ = shutdown_tx.send(true);
        }
    });

    driver.run(shutdown_rx).await
}

/// Generates shell completion scripts.
fn generate_completions(shell: clap_complete::Shell) {
    use clap_complete::generate;
    use std::io;

    let mut cmd = Cli::command();
    let bin_name = cmd.get_name().to_string();
    generate(shell, &mut cmd, bin_name, &mut io::stdout());
}

// ============================================================================
// Tests
// ============================================================================
