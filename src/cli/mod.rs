//! Command-line interface for focusboard
//!
//! This module defines the CLI structure using clap derive macros.
//! Each command group is defined in its own submodule.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::Config;
use crate::error::Result;
use crate::storage::{self, FileStore, DATA_DIR_ENV};

mod pomodoro;
mod task;

/// focusboard - task list and Pomodoro timer
///
/// Keeps a local to-do list and runs work/break intervals with a
/// completion cue. State lives as JSON files in the data directory.
#[derive(Parser, Debug)]
#[command(name = "focusboard")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Directory holding tasks, settings and config.toml
    #[arg(long, global = true, env = DATA_DIR_ENV)]
    pub data_dir: Option<PathBuf>,

    /// Output in JSON format
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Task list management
    #[command(subcommand)]
    Task(TaskCommands),

    /// Pomodoro timer
    #[command(subcommand)]
    Pomodoro(PomodoroCommands),
}

/// Task subcommands
#[derive(Subcommand, Debug)]
pub enum TaskCommands {
    /// Add a task
    Add {
        /// Task text (words are joined with spaces)
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,
    },

    /// List tasks
    List {
        /// View: all, active, completed
        #[arg(long, short, default_value = "all")]
        filter: String,
    },

    /// Flip a task between active and completed
    Toggle {
        /// Task ID
        id: i64,
    },

    /// Remove a task
    #[command(alias = "remove")]
    Rm {
        /// Task ID
        id: i64,
    },

    /// Remove every completed task
    ClearCompleted,

    /// Show total, active and completed counts
    Count,
}

/// Pomodoro subcommands
#[derive(Subcommand, Debug)]
pub enum PomodoroCommands {
    /// Show durations and lifetime totals
    Status,

    /// Change interval durations (minutes)
    Settings {
        /// Work interval, 1-60 minutes
        #[arg(long, allow_hyphen_values = true)]
        work: Option<String>,

        /// Short break, 1-30 minutes
        #[arg(long, allow_hyphen_values = true)]
        short_break: Option<String>,

        /// Long break, 1-60 minutes
        #[arg(long, allow_hyphen_values = true)]
        long_break: Option<String>,
    },

    /// Run the timer in the foreground
    Run {
        /// Starting mode: work, short-break, long-break
        #[arg(long, default_value = "work")]
        mode: String,

        /// Number of consecutive intervals to run
        #[arg(long, default_value_t = 1)]
        intervals: u32,
    },
}

/// Resolved data directory plus the file store rooted there
pub(crate) struct Context {
    pub store: FileStore,
    pub config: Config,
}

pub(crate) fn load_context(data_dir: Option<PathBuf>) -> Result<Context> {
    let store = FileStore::new(storage::resolve_data_dir(data_dir)?);
    std::fs::create_dir_all(store.root())?;
    tracing::debug!(data_dir = %store.root().display(), "using data directory");
    let config = Config::load_from_dir(store.root());
    Ok(Context { store, config })
}

impl Cli {
    /// Execute the CLI command
    pub fn run(self) -> Result<()> {
        match self.command {
            Commands::Task(cmd) => match cmd {
                TaskCommands::Add { text } => task::run_add(task::AddOptions {
                    text: text.join(" "),
                    data_dir: self.data_dir,
                    json: self.json,
                    quiet: self.quiet,
                }),
                TaskCommands::List { filter } => task::run_list(task::ListOptions {
                    filter,
                    data_dir: self.data_dir,
                    json: self.json,
                    quiet: self.quiet,
                }),
                TaskCommands::Toggle { id } => task::run_toggle(task::IdOptions {
                    id,
                    data_dir: self.data_dir,
                    json: self.json,
                    quiet: self.quiet,
                }),
                TaskCommands::Rm { id } => task::run_remove(task::IdOptions {
                    id,
                    data_dir: self.data_dir,
                    json: self.json,
                    quiet: self.quiet,
                }),
                TaskCommands::ClearCompleted => {
                    task::run_clear_completed(task::BasicOptions {
                        data_dir: self.data_dir,
                        json: self.json,
                        quiet: self.quiet,
                    })
                }
                TaskCommands::Count => task::run_count(task::BasicOptions {
                    data_dir: self.data_dir,
                    json: self.json,
                    quiet: self.quiet,
                }),
            },
            Commands::Pomodoro(cmd) => match cmd {
                PomodoroCommands::Status => pomodoro::run_status(pomodoro::StatusOptions {
                    data_dir: self.data_dir,
                    json: self.json,
                    quiet: self.quiet,
                }),
                PomodoroCommands::Settings {
                    work,
                    short_break,
                    long_break,
                } => pomodoro::run_settings(pomodoro::SettingsOptions {
                    work,
                    short_break,
                    long_break,
                    data_dir: self.data_dir,
                    json: self.json,
                    quiet: self.quiet,
                }),
                PomodoroCommands::Run { mode, intervals } => {
                    pomodoro::run_timer(pomodoro::RunOptions {
                        mode,
                        intervals,
                        data_dir: self.data_dir,
                        json: self.json,
                        quiet: self.quiet,
                    })
                }
            },
        }
    }
}
