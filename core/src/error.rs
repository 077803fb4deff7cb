use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AttendanceError {
    #[error("{0} cannot be empty.")]
    EmptyInput(&'static str),

    #[error("Invalid date format: '{0}'. Use YYYY-MM-DD.")]
    InvalidDate(String),

    #[error("No students found. Add students first.")]
    NoStudents,

    #[error("A student named '{0}' already exists.")]
    DuplicateStudent(String),

    #[error("Student not found: {0}")]
    StudentNotFound(String),

    #[error("No records for {0}.")]
    DateNotFound(String),

    /// Reading the operator's answer failed (closed or broken console).
    #[error("failed to read input: {0}")]
    Input(#[source] io::Error),

    #[error("file error: {0}")]
    Io(#[from] io::Error),

    #[error("failed to write CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Storage(#[from] anyhow::Error),
}

impl AttendanceError {
    /// True when the console reached end of input.
    pub fn is_input_closed(&self) -> bool {
        matches!(self, AttendanceError::Input(e) if e.kind() == io::ErrorKind::UnexpectedEof)
    }
}
