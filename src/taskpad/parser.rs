//! Turns raw input lines into validated [`Instruction`]s.
//!
//! Classification and field extraction are separate steps. [`classify`] only
//! looks at the leading keyword and always produces a kind; [`parse`] then
//! runs the per-kind validation in a fixed short-circuit order — structural
//! checks (separator presence) before content checks (non-empty) before
//! semantic checks (number parse, bounds, date format) — so the first error
//! surfaced is deterministic when a line has several problems.

use crate::error::{Result, TaskpadError};
use crate::model::{DueDate, Task};
use crate::tasks::TaskList;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstructionKind {
    List,
    Mark,
    Unmark,
    Todo,
    Deadline,
    Event,
    Delete,
    Find,
    Bye,
    Unrecognized,
}

// Priority order matters for intent, but matching is against the full first
// token: "unmark 2" must never classify as Mark, and "listings" is not List.
const KEYWORDS: [(&str, InstructionKind); 9] = [
    ("list", InstructionKind::List),
    ("mark", InstructionKind::Mark),
    ("unmark", InstructionKind::Unmark),
    ("todo", InstructionKind::Todo),
    ("deadline", InstructionKind::Deadline),
    ("event", InstructionKind::Event),
    ("delete", InstructionKind::Delete),
    ("find", InstructionKind::Find),
    ("bye", InstructionKind::Bye),
];

pub fn classify(line: &str) -> InstructionKind {
    let keyword = line.split_whitespace().next().unwrap_or("");
    for (word, kind) in KEYWORDS {
        if keyword.eq_ignore_ascii_case(word) {
            return kind;
        }
    }
    InstructionKind::Unrecognized
}

/// A fully validated instruction, ready to apply.
///
/// Creation commands already carry the constructed [`Task`]; positional
/// commands carry a position that has been checked against the live list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Instruction {
    List,
    Add(Task),
    Mark(usize),
    Unmark(usize),
    Delete(usize),
    Find(String),
    Bye,
}

pub fn parse(line: &str, tasks: &TaskList) -> Result<Instruction> {
    match classify(line) {
        InstructionKind::List => Ok(Instruction::List),
        InstructionKind::Todo => parse_todo(line).map(Instruction::Add),
        InstructionKind::Deadline => parse_deadline(line).map(Instruction::Add),
        InstructionKind::Event => parse_event(line).map(Instruction::Add),
        InstructionKind::Mark => resolve_mark_target(line, tasks).map(Instruction::Mark),
        InstructionKind::Unmark => resolve_unmark_target(line, tasks).map(Instruction::Unmark),
        InstructionKind::Delete => resolve_delete_target(line, tasks).map(Instruction::Delete),
        InstructionKind::Find => extract_find_keyword(line).map(Instruction::Find),
        InstructionKind::Bye => Ok(Instruction::Bye),
        InstructionKind::Unrecognized => {
            let keyword = line.split_whitespace().next().unwrap_or("");
            Err(TaskpadError::UnknownInstruction(keyword.to_string()))
        }
    }
}

/// Everything after the leading keyword token.
fn rest(line: &str) -> &str {
    let trimmed = line.trim_start();
    match trimmed.find(char::is_whitespace) {
        Some(i) => &trimmed[i..],
        None => "",
    }
}

fn parse_todo(line: &str) -> Result<Task> {
    let description = rest(line).trim();
    if description.is_empty() {
        return Err(TaskpadError::EmptyDescription);
    }
    Ok(Task::todo(description))
}

fn parse_deadline(line: &str) -> Result<Task> {
    let body = rest(line);
    let (description, date) = body
        .split_once("/by")
        .ok_or(TaskpadError::MissingDeadlineMarker)?;
    let description = description.trim();
    if description.is_empty() {
        return Err(TaskpadError::EmptyDescription);
    }
    let by: DueDate = date.parse()?;
    Ok(Task::deadline(description, by))
}

fn parse_event(line: &str) -> Result<Task> {
    let body = rest(line);
    let (description, tail) = body
        .split_once("/from")
        .ok_or(TaskpadError::MissingFromMarker)?;
    let (from_part, to_part) = tail.split_once("/to").ok_or(TaskpadError::MissingToMarker)?;
    let description = description.trim();
    if description.is_empty() {
        return Err(TaskpadError::EmptyDescription);
    }
    let from: DueDate = from_part.parse()?;
    let to: DueDate = to_part.parse()?;
    Ok(Task::event(description, from, to))
}

/// Parses the trailing task number and checks it against the live list.
fn target_position(line: &str, tasks: &TaskList) -> Result<usize> {
    let raw = rest(line).trim();
    let position: usize = raw
        .parse()
        .map_err(|_| TaskpadError::NotANumber(raw.to_string()))?;
    if position < 1 || position > tasks.len() {
        return Err(TaskpadError::IndexOutOfRange {
            position,
            len: tasks.len(),
        });
    }
    Ok(position)
}

fn resolve_mark_target(line: &str, tasks: &TaskList) -> Result<usize> {
    let position = target_position(line, tasks)?;
    if tasks.get(position).is_some_and(Task::is_done) {
        return Err(TaskpadError::AlreadyDone(position));
    }
    Ok(position)
}

fn resolve_unmark_target(line: &str, tasks: &TaskList) -> Result<usize> {
    let position = target_position(line, tasks)?;
    if !tasks.get(position).is_some_and(Task::is_done) {
        return Err(TaskpadError::AlreadyUndone(position));
    }
    Ok(position)
}

fn resolve_delete_target(line: &str, tasks: &TaskList) -> Result<usize> {
    target_position(line, tasks)
}

fn extract_find_keyword(line: &str) -> Result<String> {
    let keyword = rest(line).trim();
    if keyword.is_empty() {
        return Err(TaskpadError::EmptyKeyword);
    }
    Ok(keyword.to_string())
}
