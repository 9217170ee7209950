//! Completion cues for the Pomodoro engine.
//!
//! Notifiers are best-effort: an unavailable bell, a missing notification
//! program, or a failed spawn is logged and otherwise ignored so a mode
//! transition is never blocked by a missed cue.

use std::io::Write;
use std::process::{Command, Stdio};

use serde::Serialize;

use crate::config::NotifyConfig;

/// What just finished
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    Work,
    Break,
}

impl NotificationKind {
    pub fn title(self) -> &'static str {
        match self {
            NotificationKind::Work => "Work session complete!",
            NotificationKind::Break => "Break complete!",
        }
    }

    pub fn body(self) -> &'static str {
        match self {
            NotificationKind::Work => "Time for a break!",
            NotificationKind::Break => "Time to get back to work!",
        }
    }
}

pub trait Notifier {
    /// Raise the cue for `kind`. Must not block or fail the caller.
    fn notify(&self, kind: NotificationKind);
}

impl<N: Notifier + ?Sized> Notifier for &N {
    fn notify(&self, kind: NotificationKind) {
        (**self).notify(kind)
    }
}

/// Discards every cue
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopNotifier;

impl Notifier for NoopNotifier {
    fn notify(&self, _kind: NotificationKind) {}
}

/// Terminal bell plus an optional desktop notification program
#[derive(Debug, Clone)]
pub struct TerminalNotifier {
    config: NotifyConfig,
    quiet: bool,
}

impl TerminalNotifier {
    pub fn new(config: NotifyConfig, quiet: bool) -> Self {
        Self { config, quiet }
    }

    fn ring(&self, kind: NotificationKind) -> std::io::Result<()> {
        let mut stderr = std::io::stderr().lock();
        if self.config.bell {
            stderr.write_all(b"\x07")?;
        }
        if !self.quiet {
            writeln!(stderr, "{} {}", kind.title(), kind.body())?;
        }
        stderr.flush()
    }

    fn raise_desktop(&self, kind: NotificationKind) -> std::io::Result<()> {
        // Spawned and left to finish on its own; the timer does not wait.
        Command::new(self.config.command.trim())
            .arg(kind.title())
            .arg(kind.body())
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map(|_| ())
    }
}

impl Notifier for TerminalNotifier {
    fn notify(&self, kind: NotificationKind) {
        if let Err(err) = self.ring(kind) {
            tracing::warn!(error = %err, "failed to ring terminal cue");
        }
        if self.config.desktop {
            if let Err(err) = self.raise_desktop(kind) {
                tracing::warn!(
                    command = %self.config.command,
                    error = %err,
                    "desktop notification failed"
                );
            }
        }
    }
}
