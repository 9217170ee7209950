//! Pomodoro engine.
//!
//! A small state machine over three modes (work, short break, long break).
//! Ticks arrive from an injected [`TickSource`] while the timer is active;
//! when the countdown reaches zero the [`Notifier`] is called once, the
//! engine moves to the next mode and stops.
//!
//! Only the durations and the lifetime `totalCompletedCycles` counter are
//! persisted (under `pomodoroSettings`); mode, countdown and the cycle counter
//! start fresh in work mode on every load.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::notify::{NotificationKind, Notifier};
use crate::storage::{self, KeyValueStore, POMODORO_SETTINGS_KEY};
use crate::ticker::TickSource;

/// Work intervals between long breaks
pub const LONG_BREAK_INTERVAL: u32 = 4;

pub const DEFAULT_WORK_TIME: u32 = 25 * 60;
pub const DEFAULT_SHORT_BREAK_TIME: u32 = 5 * 60;
pub const DEFAULT_LONG_BREAK_TIME: u32 = 15 * 60;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Mode {
    Work,
    ShortBreak,
    LongBreak,
}

impl Mode {
    pub fn as_str(self) -> &'static str {
        match self {
            Mode::Work => "work",
            Mode::ShortBreak => "shortBreak",
            Mode::LongBreak => "longBreak",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Mode::Work => "Work",
            Mode::ShortBreak => "Short break",
            Mode::LongBreak => "Long break",
        }
    }

    pub fn is_break(self) -> bool {
        !matches!(self, Mode::Work)
    }
}

impl FromStr for Mode {
    type Err = Error;

    fn from_str(raw: &str) -> Result<Self> {
        let normalized: String = raw
            .trim()
            .chars()
            .filter(|ch| *ch != '-' && *ch != '_')
            .collect::<String>()
            .to_ascii_lowercase();
        match normalized.as_str() {
            "work" => Ok(Mode::Work),
            "short" | "shortbreak" => Ok(Mode::ShortBreak),
            "long" | "longbreak" => Ok(Mode::LongBreak),
            _ => Err(Error::InvalidArgument(format!(
                "unknown mode '{}' (expected work, short-break, or long-break)",
                raw.trim()
            ))),
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Persisted durations (seconds) and lifetime totals
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    pub work_time: u32,
    pub short_break_time: u32,
    pub long_break_time: u32,
    #[serde(default)]
    pub total_completed_cycles: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            work_time: DEFAULT_WORK_TIME,
            short_break_time: DEFAULT_SHORT_BREAK_TIME,
            long_break_time: DEFAULT_LONG_BREAK_TIME,
            total_completed_cycles: 0,
        }
    }
}

impl Settings {
    pub fn duration_of(&self, mode: Mode) -> u32 {
        match mode {
            Mode::Work => self.work_time,
            Mode::ShortBreak => self.short_break_time,
            Mode::LongBreak => self.long_break_time,
        }
    }

    /// Every duration floored at one second
    pub fn sanitized(self) -> Self {
        Self {
            work_time: self.work_time.max(1),
            short_break_time: self.short_break_time.max(1),
            long_break_time: self.long_break_time.max(1),
            ..self
        }
    }
}

/// Snapshot of the countdown; never persisted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RuntimeState {
    pub mode: Mode,
    pub time_left: u32,
    pub is_active: bool,
    pub cycles: u32,
}

/// Result of a countdown reaching zero
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Completion {
    pub finished: Mode,
    pub next: Mode,
    pub cycles: u32,
    pub total_completed_cycles: u32,
}

/// `max(1, floor(minutes * 60))` from user text; unparseable input gives 1.
///
/// Parses the longest leading numeric prefix, so `"2 min"` reads as 2.
pub fn minutes_to_seconds(raw: &str) -> u32 {
    let seconds = (parse_leading_number(raw) * 60.0).floor();
    if seconds.is_nan() || seconds < 1.0 {
        1
    } else {
        // saturating cast
        seconds as u32
    }
}

fn parse_leading_number(raw: &str) -> f64 {
    let trimmed = raw.trim_start();
    let mut value = f64::NAN;
    for (end, ch) in trimmed.char_indices() {
        let end = end + ch.len_utf8();
        if let Ok(parsed) = trimmed[..end].parse::<f64>() {
            value = parsed;
        }
    }
    value
}

/// `MM:SS`, minutes zero padded to two digits
pub fn format_time(seconds: u32) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}

/// Position within the current long-break round, 1..=4; zero cycles reads as 4
pub fn current_cycle(cycles: u32) -> u32 {
    match cycles % LONG_BREAK_INTERVAL {
        0 => LONG_BREAK_INTERVAL,
        position => position,
    }
}

pub struct PomodoroEngine<S: KeyValueStore, T: TickSource, N: Notifier> {
    store: S,
    ticks: T,
    notifier: N,
    settings: Settings,
    state: RuntimeState,
}

impl<S: KeyValueStore, T: TickSource, N: Notifier> PomodoroEngine<S, T, N> {
    /// Load settings from `store` (defaults when absent or malformed) and
    /// start paused in work mode.
    pub fn new(store: S, ticks: T, notifier: N) -> Self {
        let settings = storage::load_typed::<Settings>(&store, POMODORO_SETTINGS_KEY)
            .map(Settings::sanitized)
            .unwrap_or_default();
        let state = RuntimeState {
            mode: Mode::Work,
            time_left: settings.work_time,
            is_active: false,
            cycles: 0,
        };
        let engine = Self {
            store,
            ticks,
            notifier,
            settings,
            state,
        };
        engine.persist();
        engine
    }

    pub fn settings(&self) -> Settings {
        self.settings
    }

    pub fn state(&self) -> RuntimeState {
        self.state
    }

    pub fn mode(&self) -> Mode {
        self.state.mode
    }

    pub fn time_left(&self) -> u32 {
        self.state.time_left
    }

    pub fn is_active(&self) -> bool {
        self.state.is_active
    }

    pub fn cycles(&self) -> u32 {
        self.state.cycles
    }

    /// Cycle position shown as `N/4`
    pub fn current_cycle(&self) -> u32 {
        current_cycle(self.state.cycles)
    }

    pub fn duration_of(&self, mode: Mode) -> u32 {
        self.settings.duration_of(mode)
    }

    /// Start or pause the countdown without touching mode or time left
    pub fn toggle_active(&mut self) {
        self.state.is_active = !self.state.is_active;
        if self.state.is_active {
            self.ticks.subscribe();
        } else {
            self.ticks.cancel();
        }
    }

    pub fn start(&mut self) {
        if !self.state.is_active {
            self.toggle_active();
        }
    }

    pub fn pause(&mut self) {
        if self.state.is_active {
            self.toggle_active();
        }
    }

    /// Stop and refill the countdown for the current mode
    pub fn reset(&mut self) {
        self.deactivate();
        self.state.time_left = self.duration_of(self.state.mode);
    }

    /// Stop, switch to `mode` and load its full duration
    pub fn change_mode(&mut self, mode: Mode) {
        self.deactivate();
        self.state.mode = mode;
        self.state.time_left = self.duration_of(mode);
    }

    /// Advance one second. Returns the completion when the countdown hits zero.
    ///
    /// Does nothing while paused.
    pub fn tick(&mut self) -> Option<Completion> {
        if !self.state.is_active {
            return None;
        }
        if self.state.time_left > 0 {
            self.state.time_left -= 1;
        }
        if self.state.time_left == 0 {
            return Some(self.complete());
        }
        None
    }

    /// Replace the three durations from minute values typed by the user.
    pub fn update_settings(&mut self, work: &str, short_break: &str, long_break: &str) {
        self.update_durations(
            minutes_to_seconds(work),
            minutes_to_seconds(short_break),
            minutes_to_seconds(long_break),
        );
    }

    /// Replace the three durations (seconds, floored at 1). If the current
    /// mode's duration changed, the countdown restarts from the new value.
    pub fn update_durations(&mut self, work: u32, short_break: u32, long_break: u32) {
        let before = self.duration_of(self.state.mode);
        self.settings.work_time = work.max(1);
        self.settings.short_break_time = short_break.max(1);
        self.settings.long_break_time = long_break.max(1);

        let after = self.duration_of(self.state.mode);
        if after != before {
            self.state.time_left = after;
        }
        self.persist();
        tracing::debug!(settings = ?self.settings, "pomodoro settings updated");
    }

    /// Drive the countdown from the tick source until it completes or stops.
    ///
    /// `on_tick` sees the state after every tick that did not complete.
    /// Returns `None` when the engine was paused or the tick source ended.
    pub async fn run_until_paused<F>(&mut self, mut on_tick: F) -> Option<Completion>
    where
        F: FnMut(&RuntimeState),
    {
        loop {
            if !self.state.is_active {
                return None;
            }
            if self.state.time_left == 0 {
                return self.tick();
            }
            if !self.ticks.next_tick().await {
                return None;
            }
            if let Some(completion) = self.tick() {
                return Some(completion);
            }
            on_tick(&self.state);
        }
    }

    fn complete(&mut self) -> Completion {
        let finished = self.state.mode;
        let kind = if finished.is_break() {
            NotificationKind::Break
        } else {
            NotificationKind::Work
        };
        self.notifier.notify(kind);

        let next = match finished {
            Mode::Work => {
                self.state.cycles = self.state.cycles.saturating_add(1);
                if self.state.cycles % LONG_BREAK_INTERVAL == 0 {
                    Mode::LongBreak
                } else {
                    Mode::ShortBreak
                }
            }
            Mode::ShortBreak | Mode::LongBreak => {
                if finished == Mode::LongBreak {
                    self.settings.total_completed_cycles =
                        self.settings.total_completed_cycles.saturating_add(1);
                    self.persist();
                }
                Mode::Work
            }
        };

        self.state.mode = next;
        self.state.time_left = self.duration_of(next);
        self.deactivate();
        tracing::debug!(from = %finished, to = %next, cycles = self.state.cycles, "pomodoro interval complete");

        Completion {
            finished,
            next,
            cycles: self.state.cycles,
            total_completed_cycles: self.settings.total_completed_cycles,
        }
    }

    fn deactivate(&mut self) {
        self.state.is_active = false;
        self.ticks.cancel();
    }

    fn persist(&self) {
        storage::save_typed(&self.store, POMODORO_SETTINGS_KEY, &self.settings);
    }
}

impl<S: KeyValueStore, T: TickSource, N: Notifier> Drop for PomodoroEngine<S, T, N> {
    fn drop(&mut self) {
        self.ticks.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notify::NoopNotifier;
    use crate::storage::MemoryStore;
    use crate::ticker::ManualTicker;
    use serde_json::json;
    use std::cell::RefCell;

    #[derive(Default)]
    struct RecordingNotifier {
        kinds: RefCell<Vec<NotificationKind>>,
    }

    impl Notifier for RecordingNotifier {
        fn notify(&self, kind: NotificationKind) {
            self.kinds.borrow_mut().push(kind);
        }
    }

    type TestEngine<'a> = PomodoroEngine<&'a MemoryStore, ManualTicker, &'a RecordingNotifier>;

    fn engine<'a>(store: &'a MemoryStore, notifier: &'a RecordingNotifier) -> TestEngine<'a> {
        PomodoroEngine::new(store, ManualTicker::new(), notifier)
    }

    fn run_to_completion(engine: &mut TestEngine<'_>) -> Completion {
        engine.start();
        loop {
            if let Some(completion) = engine.tick() {
                return completion;
            }
        }
    }

    #[test]
    fn starts_paused_in_work_mode_with_defaults() {
        let store = MemoryStore::new();
        let notifier = RecordingNotifier::default();
        let engine = engine(&store, &notifier);

        assert_eq!(engine.settings(), Settings::default());
        assert_eq!(
            engine.state(),
            RuntimeState {
                mode: Mode::Work,
                time_left: 1500,
                is_active: false,
                cycles: 0,
            }
        );
        assert_eq!(
            store.get(POMODORO_SETTINGS_KEY),
            Some(json!({
                "workTime": 1500,
                "shortBreakTime": 300,
                "longBreakTime": 900,
                "totalCompletedCycles": 0
            }))
        );
    }

    #[test]
    fn loads_persisted_settings_and_sanitizes_zero_durations() {
        let store = MemoryStore::new();
        store.insert(
            POMODORO_SETTINGS_KEY,
            json!({ "workTime": 0, "shortBreakTime": 120, "longBreakTime": 600, "totalCompletedCycles": 7 }),
        );
        let notifier = RecordingNotifier::default();
        let engine = engine(&store, &notifier);

        assert_eq!(engine.settings().work_time, 1);
        assert_eq!(engine.settings().short_break_time, 120);
        assert_eq!(engine.settings().total_completed_cycles, 7);
        assert_eq!(engine.time_left(), 1);
    }

    #[test]
    fn malformed_settings_fall_back_to_defaults() {
        let store = MemoryStore::new();
        store.insert(POMODORO_SETTINGS_KEY, json!({ "workTime": "soon" }));
        let notifier = RecordingNotifier::default();
        let engine = engine(&store, &notifier);

        assert_eq!(engine.settings(), Settings::default());
    }

    #[test]
    fn tick_counts_down_only_while_active() {
        let store = MemoryStore::new();
        let notifier = RecordingNotifier::default();
        let mut engine = engine(&store, &notifier);

        assert!(engine.tick().is_none());
        assert_eq!(engine.time_left(), 1500);

        engine.toggle_active();
        engine.tick();
        engine.tick();
        assert_eq!(engine.time_left(), 1498);
        assert!(notifier.kinds.borrow().is_empty());
    }

    #[test]
    fn fourth_work_completion_goes_to_long_break() {
        let store = MemoryStore::new();
        let notifier = RecordingNotifier::default();
        let mut engine = engine(&store, &notifier);
        engine.update_durations(3, 2, 4);

        for round in 1..=3 {
            let done = run_to_completion(&mut engine);
            assert_eq!(done.finished, Mode::Work);
            assert_eq!(done.next, Mode::ShortBreak, "round {round}");
            assert_eq!(engine.cycles(), round);

            let done = run_to_completion(&mut engine);
            assert_eq!(done.next, Mode::Work);
            assert_eq!(engine.settings().total_completed_cycles, 0);
        }

        let done = run_to_completion(&mut engine);
        assert_eq!(done.next, Mode::LongBreak);
        assert_eq!(engine.cycles(), 4);
        assert_eq!(engine.time_left(), 4);
        assert_eq!(engine.settings().total_completed_cycles, 0);

        let done = run_to_completion(&mut engine);
        assert_eq!(done.finished, Mode::LongBreak);
        assert_eq!(done.next, Mode::Work);
        assert_eq!(done.total_completed_cycles, 1);
        assert_eq!(
            store.get(POMODORO_SETTINGS_KEY).unwrap()["totalCompletedCycles"],
            json!(1)
        );

        let kinds = notifier.kinds.borrow();
        assert_eq!(kinds.len(), 8);
        assert_eq!(
            kinds.iter().filter(|kind| **kind == NotificationKind::Work).count(),
            4
        );
    }

    #[test]
    fn completion_at_zero_with_three_cycles_enters_long_break() {
        let store = MemoryStore::new();
        let notifier = RecordingNotifier::default();
        let mut engine = engine(&store, &notifier);
        engine.state = RuntimeState {
            mode: Mode::Work,
            time_left: 0,
            is_active: true,
            cycles: 3,
        };

        let done = engine.tick().expect("completion");
        assert_eq!(done.next, Mode::LongBreak);
        assert_eq!(
            engine.state(),
            RuntimeState {
                mode: Mode::LongBreak,
                time_left: 900,
                is_active: false,
                cycles: 4,
            }
        );
        assert_eq!(*notifier.kinds.borrow(), vec![NotificationKind::Work]);
    }

    #[test]
    fn cycles_keep_wrapping_every_four() {
        let store = MemoryStore::new();
        let notifier = RecordingNotifier::default();
        let mut engine = engine(&store, &notifier);
        engine.state = RuntimeState {
            mode: Mode::Work,
            time_left: 0,
            is_active: true,
            cycles: 7,
        };

        assert_eq!(engine.tick().map(|done| done.next), Some(Mode::LongBreak));
        assert_eq!(engine.cycles(), 8);
    }

    #[test]
    fn counters_saturate_instead_of_overflowing() {
        let store = MemoryStore::new();
        store.insert(
            POMODORO_SETTINGS_KEY,
            json!({ "workTime": 1, "shortBreakTime": 1, "longBreakTime": 1, "totalCompletedCycles": u32::MAX }),
        );
        let notifier = RecordingNotifier::default();
        let mut engine = engine(&store, &notifier);

        engine.change_mode(Mode::LongBreak);
        let done = run_to_completion(&mut engine);
        assert_eq!(done.total_completed_cycles, u32::MAX);

        engine.state.cycles = u32::MAX;
        let done = run_to_completion(&mut engine);
        assert_eq!(done.cycles, u32::MAX);
        assert_eq!(engine.mode(), Mode::ShortBreak);
    }

    #[test]
    fn current_cycle_wraps_at_four() {
        assert_eq!(current_cycle(0), 4);
        assert_eq!(current_cycle(1), 1);
        assert_eq!(current_cycle(3), 3);
        assert_eq!(current_cycle(4), 4);
        assert_eq!(current_cycle(5), 1);
        assert_eq!(current_cycle(8), 4);
    }

    #[test]
    fn short_break_completion_does_not_count_a_cycle() {
        let store = MemoryStore::new();
        let notifier = RecordingNotifier::default();
        let mut engine = engine(&store, &notifier);
        engine.change_mode(Mode::ShortBreak);
        engine.update_durations(10, 1, 10);

        let done = run_to_completion(&mut engine);
        assert_eq!(done.next, Mode::Work);
        assert_eq!(done.total_completed_cycles, 0);
        assert_eq!(engine.cycles(), 0);
        assert_eq!(*notifier.kinds.borrow(), vec![NotificationKind::Break]);
    }

    #[test]
    fn reset_restores_full_duration_and_pauses() {
        let store = MemoryStore::new();
        let notifier = RecordingNotifier::default();
        let mut engine = engine(&store, &notifier);
        engine.change_mode(Mode::LongBreak);
        engine.toggle_active();
        for _ in 0..30 {
            engine.tick();
        }
        assert_eq!(engine.time_left(), 870);

        engine.reset();
        assert_eq!(engine.time_left(), 900);
        assert!(!engine.is_active());
        assert!(!engine.ticks.is_subscribed());
    }

    #[test]
    fn change_mode_abandons_countdown_without_side_effects() {
        let store = MemoryStore::new();
        let notifier = RecordingNotifier::default();
        let mut engine = engine(&store, &notifier);
        engine.toggle_active();
        engine.tick();

        engine.change_mode(Mode::ShortBreak);
        assert_eq!(engine.mode(), Mode::ShortBreak);
        assert_eq!(engine.time_left(), 300);
        assert!(!engine.is_active());
        assert_eq!(engine.cycles(), 0);
        assert!(notifier.kinds.borrow().is_empty());
    }

    #[test]
    fn toggle_active_drives_tick_subscription() {
        let store = MemoryStore::new();
        let notifier = RecordingNotifier::default();
        let mut engine = engine(&store, &notifier);

        engine.toggle_active();
        assert!(engine.is_active());
        assert!(engine.ticks.is_subscribed());
        assert_eq!(engine.time_left(), 1500);

        engine.toggle_active();
        assert!(!engine.is_active());
        assert!(!engine.ticks.is_subscribed());
        assert_eq!(engine.ticks.subscribe_count(), 1);
        assert_eq!(engine.ticks.cancel_count(), 1);
    }

    #[test]
    fn dropping_the_engine_cancels_ticks() {
        let store = MemoryStore::new();
        let mut ticker = ManualTicker::new();
        {
            let mut engine = PomodoroEngine::new(&store, &mut ticker, NoopNotifier);
            engine.toggle_active();
        }
        assert!(!ticker.is_subscribed());
        assert_eq!(ticker.cancel_count(), 1);
    }

    #[test]
    fn update_settings_floors_bad_input_at_one_second() {
        let store = MemoryStore::new();
        let notifier = RecordingNotifier::default();
        let mut engine = engine(&store, &notifier);

        engine.update_settings("0", "abc", "-4");
        assert_eq!(engine.settings().work_time, 1);
        assert_eq!(engine.settings().short_break_time, 1);
        assert_eq!(engine.settings().long_break_time, 1);
        assert_eq!(engine.time_left(), 1);

        engine.update_settings("1.5", "5", "15");
        assert_eq!(engine.settings().work_time, 90);
        assert_eq!(engine.settings().short_break_time, 300);
        assert_eq!(engine.settings().long_break_time, 900);
    }

    #[test]
    fn update_settings_only_restarts_when_current_duration_changes() {
        let store = MemoryStore::new();
        let notifier = RecordingNotifier::default();
        let mut engine = engine(&store, &notifier);
        engine.toggle_active();
        for _ in 0..10 {
            engine.tick();
        }
        assert_eq!(engine.time_left(), 1490);

        engine.update_settings("25", "10", "20");
        assert_eq!(engine.time_left(), 1490);
        assert!(engine.is_active());

        engine.update_settings("30", "10", "20");
        assert_eq!(engine.time_left(), 1800);
        assert_eq!(
            store.get(POMODORO_SETTINGS_KEY).unwrap()["workTime"],
            json!(1800)
        );
    }

    #[test]
    fn failed_notifier_does_not_block_transition() {
        struct Broken;
        impl Notifier for Broken {
            fn notify(&self, _kind: NotificationKind) {
                tracing::warn!("audio blocked");
            }
        }

        let store = MemoryStore::new();
        store.set_fail_writes(true);
        let mut engine = PomodoroEngine::new(&store, ManualTicker::new(), Broken);
        engine.update_durations(1, 1, 1);
        engine.start();

        let done = engine.tick().expect("completion");
        assert_eq!(done.next, Mode::ShortBreak);
        assert!(!engine.is_active());
    }

    #[tokio::test]
    async fn run_until_paused_completes_after_duration_ticks() {
        let store = MemoryStore::new();
        let notifier = RecordingNotifier::default();
        let mut engine = engine(&store, &notifier);
        engine.update_durations(3, 1, 1);
        engine.start();

        let mut seen = Vec::new();
        let done = engine
            .run_until_paused(|state| seen.push(state.time_left))
            .await
            .expect("completion");

        assert_eq!(done.finished, Mode::Work);
        assert_eq!(seen, vec![2, 1]);
        assert_eq!(engine.ticks.delivered(), 3);
        assert!(!engine.ticks.is_subscribed());
    }

    #[tokio::test]
    async fn run_until_paused_returns_immediately_when_paused() {
        let store = MemoryStore::new();
        let notifier = RecordingNotifier::default();
        let mut engine = engine(&store, &notifier);

        assert!(engine.run_until_paused(|_| {}).await.is_none());
        assert_eq!(engine.ticks.delivered(), 0);
    }

    #[test]
    fn minutes_to_seconds_follows_parse_float() {
        assert_eq!(minutes_to_seconds("25"), 1500);
        assert_eq!(minutes_to_seconds(" 2 min"), 120);
        assert_eq!(minutes_to_seconds("0.5"), 30);
        assert_eq!(minutes_to_seconds("0.001"), 1);
        assert_eq!(minutes_to_seconds("0"), 1);
        assert_eq!(minutes_to_seconds(""), 1);
        assert_eq!(minutes_to_seconds("abc"), 1);
        assert_eq!(minutes_to_seconds("-10"), 1);
    }

    #[test]
    fn format_time_pads_minutes_and_seconds() {
        assert_eq!(format_time(1500), "25:00");
        assert_eq!(format_time(61), "01:01");
        assert_eq!(format_time(0), "00:00");
        assert_eq!(format_time(6000), "100:00");
    }

    #[test]
    fn mode_parses_cli_spellings() {
        assert_eq!("work".parse::<Mode>().unwrap(), Mode::Work);
        assert_eq!("short-break".parse::<Mode>().unwrap(), Mode::ShortBreak);
        assert_eq!("shortBreak".parse::<Mode>().unwrap(), Mode::ShortBreak);
        assert_eq!("long_break".parse::<Mode>().unwrap(), Mode::LongBreak);
        assert!("nap".parse::<Mode>().is_err());
    }
}
