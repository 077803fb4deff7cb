use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::error::AttendanceError;
use crate::input::non_empty;
use crate::model::register::Register;
use crate::model::status::{Mark, Status};
use crate::repository::{RegisterRepository, Stored};
use crate::service::dto::{
    DayEntry, DayReport, HistoryEntry, LoadOutcome, RecordSummary, StudentHistory, StudentRow,
};
use crate::service::export::write_day_csv;
use crate::time::parse_date;

/// Owns the roster and ledger for the whole session.
pub struct AttendanceService<R: RegisterRepository> {
    repo: R,
    register: Register,
}

impl<R: RegisterRepository> AttendanceService<R> {
    /// Starts from the seeded roster. Call [`load`](Self::load) to overlay saved data.
    pub fn new(repo: R) -> Self {
        Self::with_register(repo, Register::seeded())
    }

    pub fn with_register(repo: R, register: Register) -> Self {
        Self { repo, register }
    }

    pub fn repository(&self) -> &R {
        &self.repo
    }

    pub fn register(&self) -> &Register {
        &self.register
    }

    pub fn student_count(&self) -> usize {
        self.register.students.len()
    }

    pub fn has_records(&self) -> bool {
        !self.register.attendance.is_empty()
    }

    pub fn has_student(&self, name: &str) -> bool {
        self.register.students.contains_key(name)
    }

    pub fn load(&mut self) -> Result<LoadOutcome, AttendanceError> {
        match self.repo.load()? {
            Stored::Missing => {
                info!(path = %self.repo.location().display(), "no saved data");
                Ok(LoadOutcome::NoSavedData)
            }
            Stored::Corrupted(reason) => {
                warn!(
                    path = %self.repo.location().display(),
                    %reason,
                    "ignoring corrupted data file"
                );
                Ok(LoadOutcome::Corrupted { reason })
            }
            Stored::Found(saved) => {
                self.register.merge(saved);
                let outcome = LoadOutcome::Loaded {
                    students: self.register.students.len(),
                    dates: self.register.attendance.len(),
                };
                info!(?outcome, "loaded saved data");
                Ok(outcome)
            }
        }
    }

    pub fn save(&self) -> Result<PathBuf, AttendanceError> {
        self.repo.save(&self.register)?;
        let path = self.repo.location().to_path_buf();
        info!(
            path = %path.display(),
            students = self.register.students.len(),
            dates = self.register.attendance.len(),
            "saved data"
        );
        Ok(path)
    }

    pub fn add_student(&mut self, name: &str, group: &str) -> Result<(), AttendanceError> {
        let name = non_empty(name).ok_or(AttendanceError::EmptyInput("Name"))?;
        let group = non_empty(group).ok_or(AttendanceError::EmptyInput("Class group"))?;

        if self.has_student(name) {
            return Err(AttendanceError::DuplicateStudent(name.to_string()));
        }
        self.register
            .students
            .insert(name.to_string(), group.to_string());
        info!(name, group, "added student");
        Ok(())
    }

    /// Roster in name order, numbered from 1.
    pub fn list_students(&self) -> Vec<StudentRow> {
        self.register
            .students
            .iter()
            .enumerate()
            .map(|(i, (name, group))| StudentRow {
                position: i + 1,
                name: name.clone(),
                group: group.clone(),
            })
            .collect()
    }

    /// Walks the roster in name order and asks `choose` what to do with each
    /// student, given their current status for `date`.
    ///
    /// The day is committed only once every student has been visited, so a
    /// failing `choose` leaves the ledger as it was.
    pub fn record_attendance<F>(
        &mut self,
        date: &str,
        mut choose: F,
    ) -> Result<RecordSummary, AttendanceError>
    where
        F: FnMut(&str, Option<Status>) -> Result<Mark, AttendanceError>,
    {
        let date = parse_date(date).ok_or_else(|| AttendanceError::InvalidDate(date.to_string()))?;
        if self.register.students.is_empty() {
            return Err(AttendanceError::NoStudents);
        }

        let mut day = self
            .register
            .attendance
            .get(&date)
            .cloned()
            .unwrap_or_default();
        let mut summary = RecordSummary {
            date,
            present: 0,
            absent: 0,
            skipped: 0,
        };

        for name in self.register.students.keys() {
            let mark = choose(name.as_str(), day.get(name).copied())?;
            match mark.status() {
                Some(status) => {
                    match status {
                        Status::Present => summary.present += 1,
                        Status::Absent => summary.absent += 1,
                    }
                    day.insert(name.clone(), status);
                }
                None => summary.skipped += 1,
            }
        }

        self.register.attendance.insert(date, day);
        info!(?summary, "recorded attendance");
        Ok(summary)
    }

    pub fn attendance_on(&self, date: &str) -> Result<DayReport, AttendanceError> {
        let not_found = || AttendanceError::DateNotFound(date.to_string());
        let day_date = parse_date(date).ok_or_else(not_found)?;
        let day = self.register.attendance.get(&day_date).ok_or_else(not_found)?;

        let entries = self
            .register
            .students
            .iter()
            .map(|(name, group)| DayEntry {
                name: name.clone(),
                group: group.clone(),
                status: day.get(name).copied(),
            })
            .collect();
        debug!(date, "looked up day");

        Ok(DayReport {
            date: day_date,
            entries,
        })
    }

    pub fn student_history(&self, name: &str) -> Result<StudentHistory, AttendanceError> {
        let group = self
            .register
            .students
            .get(name)
            .ok_or_else(|| AttendanceError::StudentNotFound(name.to_string()))?;

        let entries = self
            .register
            .attendance
            .iter()
            .map(|(date, day)| HistoryEntry {
                date: *date,
                status: day.get(name).copied(),
            })
            .collect();
        debug!(name, "looked up student history");

        Ok(StudentHistory {
            name: name.to_string(),
            group: group.clone(),
            entries,
        })
    }

    /// Writes `attendance_<date>.csv` into `dir`. Nothing is written when the
    /// date has no ledger entry.
    pub fn export_csv(&self, date: &str, dir: &Path) -> Result<PathBuf, AttendanceError> {
        let report = self.attendance_on(date)?;
        write_day_csv(&report, dir)
    }
}
