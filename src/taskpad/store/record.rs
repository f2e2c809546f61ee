//! Codec for the durable one-line-per-task record format:
//!
//! ```text
//! T | 0 | buy milk
//! D | 1 | submit report | 2024-05-01
//! E | 0 | team sync | 2024-05-02 1400 | 2024-05-02 1500
//! ```
//!
//! Date fields are split off the right-hand end when decoding, so a
//! description that happens to contain the delimiter text still survives a
//! round trip.

use crate::error::{Result, TaskpadError};
use crate::model::{DueDate, Task, TaskKind};

const SEP: &str = " | ";

pub fn encode(task: &Task) -> String {
    let done = if task.is_done() { '1' } else { '0' };
    let head = format!("{}{SEP}{}{SEP}{}", task.type_marker(), done, task.description);
    match &task.kind {
        TaskKind::Todo => head,
        TaskKind::Deadline { by } => format!("{head}{SEP}{by}"),
        TaskKind::Event { from, to } => format!("{head}{SEP}{from}{SEP}{to}"),
    }
}

pub fn decode(line: &str) -> Result<Task> {
    let mut fields = line.splitn(3, SEP);
    let marker = fields.next().unwrap_or("");
    let done = fields
        .next()
        .ok_or_else(|| corrupt("missing done marker"))?;
    let rest = fields
        .next()
        .ok_or_else(|| corrupt("missing description"))?;

    let done = match done {
        "0" => false,
        "1" => true,
        other => return Err(corrupt(&format!("bad done marker '{other}'"))),
    };

    let (description, kind) = match marker {
        "T" => (rest, TaskKind::Todo),
        "D" => {
            let (description, by) = rest
                .rsplit_once(SEP)
                .ok_or_else(|| corrupt("deadline record is missing its date"))?;
            (description, TaskKind::Deadline { by: parse_date(by)? })
        }
        "E" => {
            let (head, to) = rest
                .rsplit_once(SEP)
                .ok_or_else(|| corrupt("event record is missing its dates"))?;
            let (description, from) = head
                .rsplit_once(SEP)
                .ok_or_else(|| corrupt("event record is missing its start date"))?;
            (
                description,
                TaskKind::Event {
                    from: parse_date(from)?,
                    to: parse_date(to)?,
                },
            )
        }
        other => return Err(corrupt(&format!("unknown type marker '{other}'"))),
    };

    if description.is_empty() {
        return Err(corrupt("empty description"));
    }

    let mut task = match kind {
        TaskKind::Todo => Task::todo(description),
        TaskKind::Deadline { by } => Task::deadline(description, by),
        TaskKind::Event { from, to } => Task::event(description, from, to),
    };
    if done {
        task.mark_done();
    }
    Ok(task)
}

fn parse_date(field: &str) -> Result<DueDate> {
    field
        .parse()
        .map_err(|_| corrupt(&format!("bad date field '{field}'")))
}

fn corrupt(reason: &str) -> TaskpadError {
    TaskpadError::CorruptRecord(reason.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_each_variant() {
        let mut todo = Task::todo("buy milk");
        assert_eq!(encode(&todo), "T | 0 | buy milk");
        todo.mark_done();
        assert_eq!(encode(&todo), "T | 1 | buy milk");

        let deadline = Task::deadline("submit report", "2024-05-01".parse().unwrap());
        assert_eq!(encode(&deadline), "D | 0 | submit report | 2024-05-01");

        let event = Task::event(
            "team sync",
            "2024-05-02 1400".parse().unwrap(),
            "2024-05-02 1500".parse().unwrap(),
        );
        assert_eq!(
            encode(&event),
            "E | 0 | team sync | 2024-05-02 1400 | 2024-05-02 1500"
        );
    }

    #[test]
    fn decodes_what_it_encodes() {
        let mut deadline = Task::deadline("submit report", "2024-05-01".parse().unwrap());
        deadline.mark_done();
        let tasks = [
            Task::todo("buy milk"),
            deadline,
            Task::event(
                "team sync",
                "2024-05-02 1400".parse().unwrap(),
                "2024-05-02 1500".parse().unwrap(),
            ),
        ];
        for task in &tasks {
            assert_eq!(&decode(&encode(task)).unwrap(), task);
        }
    }

    #[test]
    fn delimiter_text_inside_a_description_survives() {
        let task = Task::deadline("review a | b merge", "2024-05-01".parse().unwrap());
        let decoded = decode(&encode(&task)).unwrap();
        assert_eq!(decoded.description, "review a | b merge");
        assert_eq!(decoded, task);
    }

    #[test]
    fn rejects_malformed_lines() {
        let bad = [
            "",
            "T",
            "T | 0",
            "X | 0 | what",
            "T | 2 | bad flag",
            "D | 0 | no date here",
            "D | 0 | desc | not-a-date",
            "E | 0 | desc | 2024-05-02 1400",
            "T | 0 | ",
        ];
        for line in bad {
            assert!(
                matches!(decode(line), Err(TaskpadError::CorruptRecord(_))),
                "expected corrupt record for {line:?}"
            );
        }
    }
}
