//! focusboard - task list and Pomodoro timer
//!
//! This library provides the core of the focusboard CLI: a persisted task
//! list and a Pomodoro state machine, both written against small ports so
//! hosts can swap storage, time and notification backends.
//!
//! # Core Concepts
//!
//! - **Task Store**: ordered tasks with add/toggle/remove/clear and filtered views
//! - **Pomodoro Engine**: work/short-break/long-break cycles driven by ticks
//! - **Persistence**: best-effort JSON blobs under string keys
//! - **Notifier**: a completion cue that never blocks a transition
//!
//! # Module Organization
//!
//! - `cli`: Command-line interface using clap
//! - `config`: Configuration loading from `config.toml`
//! - `error`: Error types and result aliases
//! - `storage`: Key-value persistence port and file/memory stores
//! - `lock`: File locking and atomic writes
//! - `clock`: Wall-clock port
//! - `ticker`: Tick-source port backed by tokio intervals
//! - `notify`: Completion cue port
//! - `task`: Task Store
//! - `pomodoro`: Pomodoro Engine
//! - `output`: Human and JSON output envelopes

pub mod cli;
pub mod clock;
pub mod config;
pub mod error;
pub mod lock;
pub mod notify;
pub mod output;
pub mod pomodoro;
pub mod storage;
pub mod task;
pub mod ticker;

pub use error::{Error, Result};
