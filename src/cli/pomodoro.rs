//! focusboard pomodoro command implementations.

use std::io::Write;
use std::path::PathBuf;
use std::time::Duration;

use serde::Serialize;

use crate::cli::load_context;
use crate::error::{Error, Result};
use crate::notify::{NoopNotifier, TerminalNotifier};
use crate::output::{emit_success, HumanOutput, OutputOptions};
use crate::pomodoro::{
    format_time, minutes_to_seconds, Completion, Mode, PomodoroEngine, RuntimeState, Settings,
    LONG_BREAK_INTERVAL,
};
use crate::ticker::{IntervalTicker, ManualTicker};

/// Longest accepted work or long-break interval, in minutes
const MAX_LONG_MINUTES: u32 = 60;

/// Longest accepted short break, in minutes
const MAX_SHORT_MINUTES: u32 = 30;

pub struct StatusOptions {
    pub data_dir: Option<PathBuf>,
    pub json: bool,
    pub quiet: bool,
}

pub struct SettingsOptions {
    pub work: Option<String>,
    pub short_break: Option<String>,
    pub long_break: Option<String>,
    pub data_dir: Option<PathBuf>,
    pub json: bool,
    pub quiet: bool,
}

pub struct RunOptions {
    pub mode: String,
    pub intervals: u32,
    pub data_dir: Option<PathBuf>,
    pub json: bool,
    pub quiet: bool,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct StatusOutput {
    settings: Settings,
    state: RuntimeState,
    display: String,
    current_cycle: u32,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct RunOutput {
    completions: Vec<Completion>,
    interrupted: bool,
    state: RuntimeState,
    current_cycle: u32,
    total_completed_cycles: u32,
}

pub fn run_status(options: StatusOptions) -> Result<()> {
    let ctx = load_context(options.data_dir)?;
    let engine = PomodoroEngine::new(&ctx.store, ManualTicker::new(), NoopNotifier);
    let settings = engine.settings();
    let state = engine.state();

    let mut human = HumanOutput::new(format!(
        "{} {}",
        state.mode.label(),
        format_time(state.time_left)
    ));
    human.push_summary("Cycle", cycle_label(engine.current_cycle()));
    push_settings_summary(&mut human, &settings);

    let output = StatusOutput {
        settings,
        state,
        display: format_time(state.time_left),
        current_cycle: engine.current_cycle(),
    };

    emit_success(
        OutputOptions {
            json: options.json,
            quiet: options.quiet,
        },
        "pomodoro status",
        &output,
        Some(&human),
    )
}

pub fn run_settings(options: SettingsOptions) -> Result<()> {
    let work = bounded_seconds("work", options.work.as_deref(), MAX_LONG_MINUTES)?;
    let short_break =
        bounded_seconds("short-break", options.short_break.as_deref(), MAX_SHORT_MINUTES)?;
    let long_break = bounded_seconds("long-break", options.long_break.as_deref(), MAX_LONG_MINUTES)?;

    let ctx = load_context(options.data_dir)?;
    let mut engine = PomodoroEngine::new(&ctx.store, ManualTicker::new(), NoopNotifier);
    let current = engine.settings();
    let changed = work.is_some() || short_break.is_some() || long_break.is_some();
    if changed {
        engine.update_durations(
            work.unwrap_or(current.work_time),
            short_break.unwrap_or(current.short_break_time),
            long_break.unwrap_or(current.long_break_time),
        );
    }
    let settings = engine.settings();

    let header = if changed {
        "Settings updated"
    } else {
        "Settings unchanged"
    };
    let mut human = HumanOutput::new(header);
    push_settings_summary(&mut human, &settings);
    if !changed {
        human.push_next_step("focusboard pomodoro settings --work <minutes>");
    }

    emit_success(
        OutputOptions {
            json: options.json,
            quiet: options.quiet,
        },
        "pomodoro settings",
        &settings,
        Some(&human),
    )
}

pub fn run_timer(options: RunOptions) -> Result<()> {
    let mode: Mode = options.mode.parse()?;
    let intervals = options.intervals;
    if intervals == 0 {
        return Err(Error::InvalidArgument(
            "--intervals must be at least 1".to_string(),
        ));
    }

    let ctx = load_context(options.data_dir)?;
    let ticker = IntervalTicker::new(Duration::from_millis(ctx.config.pomodoro.tick_ms));
    let notifier = TerminalNotifier::new(ctx.config.notify.clone(), options.quiet);
    let mut engine = PomodoroEngine::new(&ctx.store, ticker, notifier);
    if mode != engine.mode() {
        engine.change_mode(mode);
    }

    let show_progress = !options.quiet && !options.json;
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    let mut completions = Vec::new();
    let mut interrupted = false;
    runtime.block_on(async {
        for _ in 0..intervals {
            engine.start();
            let outcome = tokio::select! {
                done = engine.run_until_paused(|state| {
                    if show_progress {
                        draw_progress(state);
                    }
                }) => Some(done),
                _ = tokio::signal::ctrl_c() => None,
            };
            if show_progress {
                eprintln!();
            }
            match outcome {
                Some(Some(completion)) => completions.push(completion),
                Some(None) => break,
                None => {
                    tracing::debug!("interrupted; pausing timer");
                    engine.pause();
                    interrupted = true;
                    break;
                }
            }
        }
    });

    let state = engine.state();
    let output = RunOutput {
        completions,
        interrupted,
        state,
        current_cycle: engine.current_cycle(),
        total_completed_cycles: engine.settings().total_completed_cycles,
    };

    let header = if interrupted {
        "Timer interrupted"
    } else {
        "Timer finished"
    };
    let mut human = HumanOutput::new(header);
    human.push_summary("Intervals completed", output.completions.len().to_string());
    human.push_summary(
        "Next",
        format!("{} {}", state.mode.label(), format_time(state.time_left)),
    );
    human.push_summary("Cycle", cycle_label(output.current_cycle));
    human.push_summary(
        "Total completed cycles",
        output.total_completed_cycles.to_string(),
    );

    emit_success(
        OutputOptions {
            json: options.json,
            quiet: options.quiet,
        },
        "pomodoro run",
        &output,
        Some(&human),
    )
}

/// Seconds for a minutes flag, rejecting values outside `1..=max_minutes`
fn bounded_seconds(flag: &str, raw: Option<&str>, max_minutes: u32) -> Result<Option<u32>> {
    let Some(raw) = raw else {
        return Ok(None);
    };
    let seconds = minutes_to_seconds(raw);
    if !(60..=max_minutes * 60).contains(&seconds) {
        return Err(Error::InvalidArgument(format!(
            "--{flag} must be between 1 and {max_minutes} minutes"
        )));
    }
    Ok(Some(seconds))
}

fn cycle_label(position: u32) -> String {
    format!("{position}/{LONG_BREAK_INTERVAL}")
}

fn push_settings_summary(human: &mut HumanOutput, settings: &Settings) {
    human.push_summary("Work", format_time(settings.work_time));
    human.push_summary("Short break", format_time(settings.short_break_time));
    human.push_summary("Long break", format_time(settings.long_break_time));
    human.push_summary(
        "Total completed cycles",
        settings.total_completed_cycles.to_string(),
    );
}

fn draw_progress(state: &RuntimeState) {
    let mut stderr = std::io::stderr().lock();
    let _ = write!(
        stderr,
        "\r{} {}",
        state.mode.label(),
        format_time(state.time_left)
    );
    let _ = stderr.flush();
}
