use thiserror::Error;

#[derive(Error, Debug)]
pub enum TaskpadError {
    #[error("The description of a task cannot be empty.")]
    EmptyDescription,

    #[error("A deadline needs a '/by' segment: deadline <description> /by <date>")]
    MissingDeadlineMarker,

    #[error("An event needs a '/from' segment: event <description> /from <date> /to <date>")]
    MissingFromMarker,

    #[error("An event needs a '/to' segment after '/from'.")]
    MissingToMarker,

    #[error("Cannot read '{0}' as a date. Use yyyy-mm-dd or yyyy-mm-dd HHMM.")]
    UnparsableDate(String),

    #[error("Tell me what to search for: find <keyword>")]
    EmptyKeyword,

    #[error("'{0}' is not a task number.")]
    NotANumber(String),

    #[error("Task {position} does not exist; the list has {len} task(s).")]
    IndexOutOfRange { position: usize, len: usize },

    #[error("Task {0} is already marked as done.")]
    AlreadyDone(usize),

    #[error("Task {0} is not marked as done.")]
    AlreadyUndone(usize),

    #[error("I don't know the command '{0}'.")]
    UnknownInstruction(String),

    #[error("Unreadable record: {0}")]
    CorruptRecord(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Store error: {0}")]
    Store(String),
}

pub type Result<T> = std::result::Result<T, TaskpadError>;
