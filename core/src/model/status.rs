use std::fmt;

use serde::{Deserialize, Serialize};

/// Text shown wherever a student has no entry for a date.
pub const NOT_RECORDED: &str = "Not recorded";

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Present,
    Absent,
}

impl Status {
    pub fn as_str(self) -> &'static str {
        match self {
            Status::Present => "Present",
            Status::Absent => "Absent",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Label for a lookup that may have missed.
pub fn describe(status: Option<Status>) -> &'static str {
    status.map(Status::as_str).unwrap_or(NOT_RECORDED)
}

/// What the operator chose for one student while taking attendance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mark {
    Present,
    Absent,
    Skip,
}

impl Mark {
    /// Accepts `p`, `a` or `s`, ignoring case and surrounding whitespace.
    pub fn from_choice(input: &str) -> Option<Self> {
        match input.trim().to_lowercase().as_str() {
            "p" => Some(Mark::Present),
            "a" => Some(Mark::Absent),
            "s" => Some(Mark::Skip),
            _ => None,
        }
    }

    pub fn status(self) -> Option<Status> {
        match self {
            Mark::Present => Some(Status::Present),
            Mark::Absent => Some(Status::Absent),
            Mark::Skip => None,
        }
    }
}
