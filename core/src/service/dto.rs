use chrono::NaiveDate;

use crate::model::status::Status;

/// One line of the numbered roster listing.
#[derive(Debug, Clone, PartialEq)]
pub struct StudentRow {
    pub position: usize,
    pub name: String,
    pub group: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DayEntry {
    pub name: String,
    pub group: String,
    pub status: Option<Status>, // None = not recorded that day
}

/// Every current roster student against one ledger date.
#[derive(Debug, Clone, PartialEq)]
pub struct DayReport {
    pub date: NaiveDate,
    pub entries: Vec<DayEntry>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct HistoryEntry {
    pub date: NaiveDate,
    pub status: Option<Status>,
}

/// One student against every ledger date, oldest first.
#[derive(Debug, Clone, PartialEq)]
pub struct StudentHistory {
    pub name: String,
    pub group: String,
    pub entries: Vec<HistoryEntry>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RecordSummary {
    pub date: NaiveDate,
    pub present: usize,
    pub absent: usize,
    pub skipped: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub enum LoadOutcome {
    NoSavedData,
    Corrupted { reason: String },
    /// Totals after merging the saved data over the defaults.
    Loaded { students: usize, dates: usize },
}
