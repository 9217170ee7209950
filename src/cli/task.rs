//! focusboard task command implementations.

use std::path::PathBuf;

use serde::Serialize;

use crate::cli::load_context;
use crate::error::Result;
use crate::output::{emit_success, HumanOutput, OutputOptions};
use crate::task::{Counts, Filter, Task, TaskId, TaskStore};

pub struct AddOptions {
    pub text: String,
    pub data_dir: Option<PathBuf>,
    pub json: bool,
    pub quiet: bool,
}

pub struct ListOptions {
    pub filter: String,
    pub data_dir: Option<PathBuf>,
    pub json: bool,
    pub quiet: bool,
}

pub struct IdOptions {
    pub id: TaskId,
    pub data_dir: Option<PathBuf>,
    pub json: bool,
    pub quiet: bool,
}

pub struct BasicOptions {
    pub data_dir: Option<PathBuf>,
    pub json: bool,
    pub quiet: bool,
}

#[derive(Serialize)]
struct TaskListOutput<'a> {
    filter: Filter,
    tasks: Vec<&'a Task>,
    counts: Counts,
}

/// Result of toggle/rm; an unknown id is a no-op with `task: null`
#[derive(Serialize)]
struct TaskChangeOutput {
    id: TaskId,
    found: bool,
    task: Option<Task>,
}

#[derive(Serialize)]
struct ClearOutput {
    removed: usize,
    counts: Counts,
}

pub fn run_add(options: AddOptions) -> Result<()> {
    let ctx = load_context(options.data_dir)?;
    let mut store = TaskStore::new(&ctx.store);
    let task = store.add(&options.text)?.clone();

    let mut human = HumanOutput::new("Task added");
    human.push_summary("ID", task.id.to_string());
    human.push_summary("Text", task.text.clone());
    human.push_summary("Pending", store.counts().pending_label());

    emit_success(
        OutputOptions {
            json: options.json,
            quiet: options.quiet,
        },
        "task add",
        &task,
        Some(&human),
    )
}

pub fn run_list(options: ListOptions) -> Result<()> {
    let filter: Filter = options.filter.parse()?;
    let ctx = load_context(options.data_dir)?;
    let store = TaskStore::new(&ctx.store);

    let view = store.filtered_view(filter);
    let counts = store.counts();

    let mut human = HumanOutput::new(format!("Tasks ({filter})"));
    if view.is_empty() {
        human.push_detail(filter.empty_message());
    }
    for task in &view {
        human.push_detail(format_task_line(task, &store.created_ago(task)));
    }
    human.push_summary("Pending", counts.pending_label());

    let output = TaskListOutput {
        filter,
        tasks: view,
        counts,
    };

    emit_success(
        OutputOptions {
            json: options.json,
            quiet: options.quiet,
        },
        "task list",
        &output,
        Some(&human),
    )
}

pub fn run_toggle(options: IdOptions) -> Result<()> {
    let ctx = load_context(options.data_dir)?;
    let mut store = TaskStore::new(&ctx.store);
    let task = store.toggle(options.id).cloned();

    let human = match &task {
        Some(task) => {
            let header = if task.completed {
                "Task completed"
            } else {
                "Task reopened"
            };
            let mut human = HumanOutput::new(header);
            human.push_summary("ID", task.id.to_string());
            human.push_summary("Text", task.text.clone());
            human
        }
        None => missing_task(options.id),
    };

    emit_success(
        OutputOptions {
            json: options.json,
            quiet: options.quiet,
        },
        "task toggle",
        &TaskChangeOutput {
            id: options.id,
            found: task.is_some(),
            task,
        },
        Some(&human),
    )
}

pub fn run_remove(options: IdOptions) -> Result<()> {
    let ctx = load_context(options.data_dir)?;
    let mut store = TaskStore::new(&ctx.store);
    let task = store.remove(options.id);

    let human = match &task {
        Some(task) => {
            let mut human = HumanOutput::new("Task removed");
            human.push_summary("ID", task.id.to_string());
            human.push_summary("Text", task.text.clone());
            human.push_summary("Pending", store.counts().pending_label());
            human
        }
        None => missing_task(options.id),
    };

    emit_success(
        OutputOptions {
            json: options.json,
            quiet: options.quiet,
        },
        "task rm",
        &TaskChangeOutput {
            id: options.id,
            found: task.is_some(),
            task,
        },
        Some(&human),
    )
}

pub fn run_clear_completed(options: BasicOptions) -> Result<()> {
    let ctx = load_context(options.data_dir)?;
    let mut store = TaskStore::new(&ctx.store);
    let removed = store.clear_completed();
    let output = ClearOutput {
        removed,
        counts: store.counts(),
    };

    let mut human = HumanOutput::new(format!("Cleared {removed} completed task(s)"));
    human.push_summary("Pending", output.counts.pending_label());

    emit_success(
        OutputOptions {
            json: options.json,
            quiet: options.quiet,
        },
        "task clear-completed",
        &output,
        Some(&human),
    )
}

pub fn run_count(options: BasicOptions) -> Result<()> {
    let ctx = load_context(options.data_dir)?;
    let store = TaskStore::new(&ctx.store);
    let counts = store.counts();

    let mut human = HumanOutput::new(counts.pending_label());
    human.push_summary("Total", counts.total.to_string());
    human.push_summary("Active", counts.active.to_string());
    human.push_summary("Completed", counts.completed.to_string());

    emit_success(
        OutputOptions {
            json: options.json,
            quiet: options.quiet,
        },
        "task count",
        &counts,
        Some(&human),
    )
}

fn format_task_line(task: &Task, age: &str) -> String {
    let mark = if task.completed { "x" } else { " " };
    format!("[{mark}] {} {} ({age})", task.id, task.text)
}

fn missing_task(id: TaskId) -> HumanOutput {
    let mut human = HumanOutput::new(format!("No task with ID {id}; nothing changed"));
    human.push_next_step("focusboard task list");
    human
}
