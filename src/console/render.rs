//! Rendering of timer snapshots for the terminal

use std::io::Write;

use anyhow::Result;
use tokio::sync::watch;
use tracing::{debug, warn};

use crate::{
    parser::Seconds,
    state::{TimerSnapshot, TimerStatus},
};

const BAR_WIDTH: usize = 20;
/// Ring glyphs from empty to full
const RING: [char; 5] = ['○', '◔', '◑', '◕', '●'];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

/// `MM:SS`, or `H:MM:SS` from one hour up
pub fn format_remaining(seconds: Seconds) -> String {
    let hours = seconds / 3600;
    let minutes = (seconds % 3600) / 60;
    let secs = seconds % 60;

    if hours > 0 {
        format!("{}:{:02}:{:02}", hours, minutes, secs)
    } else {
        format!("{:02}:{:02}", minutes, secs)
    }
}

/// Circular progress indicator as a single glyph
pub fn ring_glyph(progress: f64) -> char {
    let last = RING.len() - 1;
    let index = (progress.clamp(0.0, 1.0) * last as f64).floor() as usize;
    RING[index.min(last)]
}

pub fn progress_bar(progress: f64, width: usize) -> String {
    let filled = ((progress.clamp(0.0, 1.0) * width as f64).round() as usize).min(width);
    format!("[{}{}]", "#".repeat(filled), "-".repeat(width - filled))
}

pub fn render_line(snapshot: &TimerSnapshot) -> String {
    let mut line = match snapshot.status {
        TimerStatus::Idle => "○ --:--  ready".to_string(),
        TimerStatus::Complete => format!(
            "● {}  {}  time's up!",
            format_remaining(0),
            progress_bar(1.0, BAR_WIDTH)
        ),
        TimerStatus::Running | TimerStatus::Paused => format!(
            "{} {}  {}  {}",
            ring_glyph(snapshot.progress),
            format_remaining(snapshot.remaining_seconds),
            progress_bar(snapshot.progress, BAR_WIDTH),
            snapshot.status.as_str()
        ),
    };

    if let Some(error) = &snapshot.error {
        line.push_str(&format!("  ({})", error));
    }
    line
}

pub fn render(snapshot: &TimerSnapshot, format: OutputFormat) -> Result<String> {
    Ok(match format {
        OutputFormat::Text => render_line(snapshot),
        OutputFormat::Json => serde_json::to_string(snapshot)?,
    })
}

/// Write one rendered snapshot followed by a newline
pub fn write_snapshot<W: Write>(out: &mut W, snapshot: &TimerSnapshot, format: OutputFormat) -> Result<()> {
    writeln!(out, "{}", render(snapshot, format)?)?;
    out.flush()?;
    Ok(())
}

/// Draw every published snapshot until the countdown task goes away
pub async fn render_task<W: Write>(
    mut snapshots: watch::Receiver<TimerSnapshot>,
    format: OutputFormat,
    mut out: W,
) {
    loop {
        let snapshot = snapshots.borrow_and_update().clone();
        if let Err(e) = write_snapshot(&mut out, &snapshot, format) {
            warn!("Failed to draw timer: {}", e);
        }

        if snapshots.changed().await.is_err() {
            debug!("Snapshot channel closed, stopping renderer");
            break;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::TimerState;

    #[test]
    fn test_format_remaining() {
        assert_eq!(format_remaining(0), "00:00");
        assert_eq!(format_remaining(59), "00:59");
        assert_eq!(format_remaining(300), "05:00");
        assert_eq!(format_remaining(3599), "59:59");
        assert_eq!(format_remaining(5400), "1:30:00");
        assert_eq!(format_remaining(36_061), "10:01:01");
    }

    #[test]
    fn test_ring_glyph() {
        assert_eq!(ring_glyph(0.0), '○');
        assert_eq!(ring_glyph(0.3), '◔');
        assert_eq!(ring_glyph(0.5), '◑');
        assert_eq!(ring_glyph(0.9), '◕');
        assert_eq!(ring_glyph(1.0), '●');
    }

    #[test]
    fn test_progress_bar() {
        assert_eq!(progress_bar(0.0, 4), "[----]");
        assert_eq!(progress_bar(0.5, 4), "[##--]");
        assert_eq!(progress_bar(1.0, 4), "[####]");
    }

    #[test]
    fn test_render_line_states() {
        let mut state = TimerState::new();
        assert_eq!(render_line(&state.snapshot()), "○ --:--  ready");

        state.start(300);
        state.tick();
        let line = render_line(&state.snapshot());
        assert!(line.starts_with("○ 04:59"));
        assert!(line.ends_with("running"));

        state.toggle();
        assert!(render_line(&state.snapshot()).ends_with("paused"));

        state.set_error("could not understand the time".to_string());
        assert!(render_line(&state.snapshot()).ends_with("(could not understand the time)"));
    }

    #[test]
    fn test_write_snapshot_json() {
        let mut state = TimerState::new();
        state.start(2);
        state.tick();
        state.tick();

        let mut out = Vec::new();
        write_snapshot(&mut out, &state.snapshot(), OutputFormat::Json).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.ends_with('\n'));
        let value: serde_json::Value = serde_json::from_str(text.trim()).unwrap();
        assert_eq!(value["status"], "complete");
        assert_eq!(value["remainingSeconds"], 0);
        assert_eq!(value["progress"], 1.0);
    }

    #[tokio::test]
    async fn test_render_task_draws_until_closed() {
        let (tx, rx) = watch::channel(TimerSnapshot::default());
        let mut state = TimerState::new();
        state.start(61);

        let sender = tokio::spawn(async move {
            tx.send(state.snapshot()).unwrap();
        });

        let mut out = Vec::new();
        render_task(rx, OutputFormat::Text, &mut out).await;
        sender.await.unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("○ --:--  ready\n"));
        assert!(text.contains("01:01"));
    }
}
