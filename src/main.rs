//! Countdown Chime - a countdown timer driven by natural-language durations
//! 
//! This is the main entry point for the countdown-chime application.

use tokio::{
    io::{self, BufReader},
    sync::{mpsc, watch},
    task::JoinError,
};
use tracing::{error, info};

use countdown_chime::{
    config::Config,
    console::{input_task, render_task, usage, InputEnd},
    controller::Countdown,
    services::build_alert_player,
    state::TimerSnapshot,
    tasks::{countdown_task, TokioScheduler},
    utils::shutdown_signal,
};

const COMMAND_BUFFER: usize = 16;
const SUCCESS: i32 = 0;
const FAILURE: i32 = 1;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    // Logs go to stderr so the timer display owns stdout
    tracing_subscriber::fmt()
        .with_env_filter(format!("countdown_chime={}", config.log_level()))
        .with_writer(std::io::stderr)
        .init();

    info!("Starting countdown-chime v{}", env!("CARGO_PKG_VERSION"));
    info!("Configuration: alert={:?}, json={}", config.alert, config.json);

    let (scheduler, timer_events) = TokioScheduler::new();
    let mut countdown = Countdown::new(scheduler, build_alert_player(config.alert));

    if let Some(input) = config.initial_input() {
        // Failure is shown in the first snapshot
        let _ = countdown.submit(&input);
    }

    let (command_tx, command_rx) = mpsc::channel(COMMAND_BUFFER);
    let (snapshot_tx, snapshot_rx) = watch::channel(TimerSnapshot::default());

    let mut countdown_handle = tokio::spawn(countdown_task(
        countdown,
        command_rx,
        timer_events,
        snapshot_tx,
    ));
    let mut render_handle = tokio::spawn(render_task(
        snapshot_rx,
        config.output_format(),
        std::io::stdout(),
    ));

    info!("{}", usage());
    let input_handle = tokio::spawn(input_task(BufReader::new(io::stdin()), command_tx));

    let session = async {
        match input_handle.await {
            Ok(InputEnd::Eof) => {
                info!("Input closed, letting the countdown finish");
                let countdown = match (&mut countdown_handle).await {
                    Ok(countdown) => countdown,
                    Err(e) => {
                        error!("Countdown task failed: {}", e);
                        return FAILURE;
                    }
                };
                // The countdown task dropped its snapshot sender, so the renderer drains and stops
                if let Err(e) = (&mut render_handle).await {
                    error!("Render task failed: {}", e);
                }
                if let Err(e) = tokio::task::spawn_blocking(move || countdown.finish()).await {
                    error!("Alert player failed while finishing: {}", e);
                    return FAILURE;
                }
                SUCCESS
            }
            other => input_exit_code(other),
        }
    };

    let code = tokio::select! {
        code = session => code,
        result = shutdown_signal() => signal_exit_code(result),
    };

    countdown_handle.abort();
    render_handle.abort();
    info!("Shutdown complete (exit code {})", code);

    // A pending blocking read on stdin would otherwise hold the runtime open
    std::process::exit(code);
}

fn input_exit_code(result: Result<InputEnd, JoinError>) -> i32 {
    match result {
        Ok(end) => {
            info!("Input stopped: {:?}", end);
            SUCCESS
        }
        Err(e) => {
            error!("Input task failed: {}", e);
            FAILURE
        }
    }
}

fn signal_exit_code(result: std::io::Result<i32>) -> i32 {
    match result {
        Ok(signal) => {
            info!("Shutdown signal {} received", signal);
            SUCCESS
        }
        Err(e) => {
            error!("Failed to listen for shutdown signals: {}", e);
            FAILURE
        }
    }
}
