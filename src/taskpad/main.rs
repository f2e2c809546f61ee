use colored::*;
use directories::ProjectDirs;
use std::io::{self, BufRead};
use std::path::PathBuf;
use taskpad::api::TaskpadApi;
use taskpad::commands::{CmdMessage, ListedTask, MessageLevel};
use taskpad::error::{Result, TaskpadError};
use taskpad::model::TaskKind;
use taskpad::parser::{classify, InstructionKind};
use taskpad::store::fs::FileStore;
use unicode_width::UnicodeWidthStr;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let store = FileStore::new(storage_path()?);
    let (mut api, warnings) = TaskpadApi::start(store);

    greet();
    print_messages(&warnings);

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line.map_err(TaskpadError::Io)?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        match api.execute(line) {
            Ok(result) => {
                print_messages(&result.messages);
                print_tasks(&result.listed_tasks);
            }
            Err(e) => println!("{}", e.to_string().red()),
        }

        if classify(line) == InstructionKind::Bye {
            break;
        }
    }
    Ok(())
}

/// The task file lives under `$TASKPAD_HOME` when set (integration tests
/// point this at a temp dir), otherwise in the platform data directory.
fn storage_path() -> Result<PathBuf> {
    if let Some(home) = std::env::var_os("TASKPAD_HOME") {
        return Ok(PathBuf::from(home).join("tasks.txt"));
    }
    let dirs = ProjectDirs::from("com", "taskpad", "taskpad")
        .ok_or_else(|| TaskpadError::Store("Could not determine a data directory".to_string()))?;
    Ok(dirs.data_dir().join("tasks.txt"))
}

fn greet() {
    println!("{}", "Hello! I'm Taskpad.".bold());
    println!("What can I do for you?");
}

fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

const LINE_WIDTH: usize = 100;
const DUE_WIDTH: usize = 40;

fn print_tasks(listed: &[ListedTask]) {
    for lt in listed {
        let idx_str = format!("{:>3}. ", lt.position);
        let status = format!(
            "[{}][{}] ",
            lt.task.type_marker(),
            if lt.task.is_done() { 'X' } else { ' ' }
        );
        let due = due_column(&lt.task.kind);

        let fixed_width = idx_str.width() + status.width() + DUE_WIDTH;
        let available = LINE_WIDTH.saturating_sub(fixed_width);
        let description = truncate_to_width(&lt.task.description, available);
        let padding = available.saturating_sub(description.width());

        let status_colored = if lt.task.is_done() {
            status.green()
        } else {
            status.normal()
        };

        println!(
            "{}{}{}{}{}",
            idx_str,
            status_colored,
            description,
            " ".repeat(padding),
            format!("{:>width$}", due, width = DUE_WIDTH).dimmed()
        );
    }
}

fn due_column(kind: &TaskKind) -> String {
    match kind {
        TaskKind::Todo => String::new(),
        TaskKind::Deadline { by } => format!("by {}", by),
        TaskKind::Event { from, to } => format!("from {} to {}", from, to),
    }
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    use unicode_width::UnicodeWidthChar;

    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}
