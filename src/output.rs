//! Shared output formatting for focusboard commands.
//!
//! Every command reports through [`emit_success`]: a JSON envelope with
//! `--json`, a human block otherwise, nothing with `--quiet`. Failures go
//! through [`emit_error`], which `main` calls before exiting.

use serde::Serialize;

use crate::error::{exit_codes, Error, Result};

pub const SCHEMA_VERSION: &str = "focusboard.v1";

/// Command groups whose first positional argument names a subcommand
const GROUPED_COMMANDS: [&str; 2] = ["task", "pomodoro"];

/// Global flags that consume the following argument
const VALUE_FLAGS: [&str; 1] = ["--data-dir"];

#[derive(Debug, Clone, Copy)]
pub struct OutputOptions {
    pub json: bool,
    pub quiet: bool,
}

/// Human-readable report: a header line, then optional sections
#[derive(Debug, Clone)]
pub struct HumanOutput {
    header: String,
    summary: Vec<(String, String)>,
    details: Vec<String>,
    next_steps: Vec<String>,
}

impl HumanOutput {
    pub fn new(header: impl Into<String>) -> Self {
        Self {
            header: header.into(),
            summary: Vec::new(),
            details: Vec::new(),
            next_steps: Vec::new(),
        }
    }

    pub fn push_summary(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.summary.push((key.into(), value.into()));
    }

    pub fn push_detail(&mut self, value: impl Into<String>) {
        self.details.push(value.into());
    }

    pub fn push_next_step(&mut self, value: impl Into<String>) {
        self.next_steps.push(value.into());
    }
}

#[derive(Serialize)]
struct SuccessEnvelope<'a, T: Serialize> {
    schema_version: &'static str,
    command: &'a str,
    status: &'static str,
    data: &'a T,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    next_steps: Vec<String>,
}

#[derive(Serialize)]
struct ErrorEnvelope<'a> {
    schema_version: &'static str,
    command: &'a str,
    status: &'static str,
    error: ErrorBody,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    next_steps: Vec<String>,
}

#[derive(Serialize)]
struct ErrorBody {
    message: String,
    code: i32,
    kind: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<serde_json::Value>,
}

pub fn emit_success<T: Serialize>(
    options: OutputOptions,
    command: &str,
    data: &T,
    human: Option<&HumanOutput>,
) -> Result<()> {
    if options.json {
        let envelope = SuccessEnvelope {
            schema_version: SCHEMA_VERSION,
            command,
            status: "success",
            data,
            next_steps: human.map(|h| h.next_steps.clone()).unwrap_or_default(),
        };
        println!("{}", serde_json::to_string_pretty(&envelope)?);
        return Ok(());
    }

    if let (false, Some(human)) = (options.quiet, human) {
        println!("{}", format_human(human));
    }
    Ok(())
}

/// Report `err` on stdout (JSON) or stderr (human)
pub fn emit_error(command: &str, err: &Error, json: bool) -> Result<()> {
    let next_steps = error_next_steps(err);
    if !json {
        eprintln!("error: {err}");
        if let Some(hint) = next_steps.first() {
            eprintln!("hint: {hint}");
        }
        return Ok(());
    }

    let envelope = ErrorEnvelope {
        schema_version: SCHEMA_VERSION,
        command,
        status: "error",
        error: ErrorBody {
            message: err.to_string(),
            code: err.exit_code(),
            kind: error_kind(err),
            details: err.details(),
        },
        next_steps,
    };
    println!("{}", serde_json::to_string_pretty(&envelope)?);
    Ok(())
}

pub fn format_human(output: &HumanOutput) -> String {
    let mut lines = vec![output.header.clone()];

    if !output.summary.is_empty() {
        lines.push(String::new());
        lines.push("Summary:".to_string());
        lines.extend(output.summary.iter().map(|(key, value)| {
            if value.is_empty() {
                format!("- {key}")
            } else {
                format!("- {key}: {value}")
            }
        }));
    }
    push_section(&mut lines, "Details", &output.details);
    push_section(&mut lines, "Next steps", &output.next_steps);

    lines.join("\n")
}

/// Command label for error envelopes, e.g. `task add`, read from argv so
/// it is available even when parsing failed.
pub fn infer_command_name_from_args() -> String {
    command_name(std::env::args().skip(1))
}

fn command_name(args: impl Iterator<Item = String>) -> String {
    let mut positionals = Vec::new();
    let mut skip_value = false;
    for arg in args {
        if skip_value {
            skip_value = false;
            continue;
        }
        if arg.starts_with('-') {
            skip_value = VALUE_FLAGS.contains(&arg.as_str());
            continue;
        }
        positionals.push(arg);
        if positionals.len() == 2 {
            break;
        }
    }

    let mut positionals = positionals.into_iter();
    let Some(command) = positionals.next() else {
        return "focusboard".to_string();
    };
    if !GROUPED_COMMANDS.contains(&command.as_str()) {
        return command;
    }
    match positionals.next() {
        Some(sub) => format!("{command} {sub}"),
        None => command,
    }
}

fn error_kind(err: &Error) -> &'static str {
    match err.exit_code() {
        exit_codes::USER_ERROR => "user_error",
        _ => "operation_failed",
    }
}

fn error_next_steps(err: &Error) -> Vec<String> {
    match err {
        Error::EmptyTaskText => vec!["focusboard task add \"<text>\"".to_string()],
        Error::InvalidConfig(_) => {
            vec!["fix config.toml in the data directory then retry".to_string()]
        }
        Error::LockFailed(_) => {
            vec!["retry once the other focusboard process finishes".to_string()]
        }
        _ => Vec::new(),
    }
}

fn push_section(lines: &mut Vec<String>, title: &str, items: &[String]) {
    if items.is_empty() {
        return;
    }
    lines.push(String::new());
    lines.push(format!("{title}:"));
    lines.extend(items.iter().map(|item| format!("- {item}")));
}
