use std::io::{BufRead, Write};
use std::path::PathBuf;

use anyhow::Result;
use rollcall_core::{
    describe, is_valid_date, AttendanceError, AttendanceService, LoadOutcome, Mark,
    RegisterRepository,
};
use tracing::{debug, error, warn};

use crate::console::Console;
use crate::table::roster_table;

const MENU: &str = "
=== Bright Minds Attendance System ===
1. Add new student
2. Record attendance for a date
3. View attendance by date
4. Search student attendance record
5. List students
6. Export attendance (CSV)
7. Save & exit
0. Exit without saving";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    AddStudent,
    RecordAttendance,
    ViewByDate,
    SearchStudent,
    ListStudents,
    ExportCsv,
    SaveAndExit,
    ExitWithoutSaving,
}

impl Command {
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(Command::AddStudent),
            "2" => Some(Command::RecordAttendance),
            "3" => Some(Command::ViewByDate),
            "4" => Some(Command::SearchStudent),
            "5" => Some(Command::ListStudents),
            "6" => Some(Command::ExportCsv),
            "7" => Some(Command::SaveAndExit),
            "0" => Some(Command::ExitWithoutSaving),
            _ => None,
        }
    }
}

/// How the session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    Saved,
    Discarded,
    InputClosed,
}

type Step = Result<(), AttendanceError>;

pub struct Menu<'a, R, W, S: RegisterRepository> {
    console: Console<R, W>,
    service: &'a mut AttendanceService<S>,
    export_dir: PathBuf,
}

impl<'a, R: BufRead, W: Write, S: RegisterRepository> Menu<'a, R, W, S> {
    pub fn new(
        console: Console<R, W>,
        service: &'a mut AttendanceService<S>,
        export_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            console,
            service,
            export_dir: export_dir.into(),
        }
    }

    #[cfg(test)]
    pub fn into_console(self) -> Console<R, W> {
        self.console
    }

    /// Loads saved data once, then runs the menu until the operator leaves.
    pub fn start(&mut self) -> Result<SessionEnd> {
        self.report_load()?;
        self.run()
    }

    fn report_load(&mut self) -> Step {
        let message = match self.service.load() {
            Ok(LoadOutcome::NoSavedData) => format!(
                "No saved data found. Starting with {} dummy students.",
                self.service.student_count()
            ),
            Ok(LoadOutcome::Corrupted { .. }) => {
                "Warning: Data file corrupted. Starting with dummy data.".to_string()
            }
            Ok(LoadOutcome::Loaded { students, dates }) => {
                format!("Loaded data: {} students, {} dates.", students, dates)
            }
            Err(err) => {
                warn!(error = %err, "could not read data file");
                format!(
                    "Warning: could not read saved data ({}). Starting with dummy data.",
                    err
                )
            }
        };
        self.console.say(message)
    }

    fn run(&mut self) -> Result<SessionEnd> {
        loop {
            match self.step() {
                Ok(Some(end)) => return Ok(end),
                Ok(None) => {}
                Err(err) if err.is_input_closed() => {
                    // Write errors here are ignored.
                    let _ = self.console.say("\nInput closed. Exiting without saving.");
                    return Ok(SessionEnd::InputClosed);
                }
                Err(AttendanceError::Input(e)) => return Err(e.into()),
                Err(err) => {
                    debug!(error = %err, "operation abandoned");
                    self.console.say(err.to_string())?;
                }
            }
        }
    }

    fn step(&mut self) -> Result<Option<SessionEnd>, AttendanceError> {
        self.console.say(MENU)?;
        let choice = self.console.prompt("Choose an option: ")?;
        let Some(command) = Command::parse(&choice) else {
            self.console
                .say("Invalid choice. Please enter a valid option.")?;
            return Ok(None);
        };
        debug!(?command, "dispatching");

        match command {
            Command::AddStudent => self.add_student()?,
            Command::RecordAttendance => self.record_attendance()?,
            Command::ViewByDate => self.view_by_date()?,
            Command::SearchStudent => self.search_student()?,
            Command::ListStudents => self.list_students()?,
            Command::ExportCsv => self.export_csv()?,
            Command::SaveAndExit => return self.save_and_exit(),
            Command::ExitWithoutSaving => {
                self.console.say("Exiting without saving. Goodbye!")?;
                return Ok(Some(SessionEnd::Discarded));
            }
        }
        Ok(None)
    }

    fn add_student(&mut self) -> Step {
        self.console.say("\n--- Add New Student ---")?;
        let name = self.console.prompt_nonempty("Enter student's full name: ")?;
        if self.service.has_student(&name) {
            return Err(AttendanceError::DuplicateStudent(name));
        }
        let group = self
            .console
            .prompt_nonempty("Enter class group (e.g., Class A): ")?;

        self.service.add_student(&name, &group)?;
        self.console
            .say(format!("Added student: {} (Group: {})", name, group))
    }

    fn list_students(&mut self) -> Step {
        self.console.say("\n--- Student List ---")?;
        let rows = self.service.list_students();
        if rows.is_empty() {
            return self.console.say("No students have been added yet.");
        }
        self.console.say(roster_table(&rows))
    }

    fn record_attendance(&mut self) -> Step {
        self.console.say("\n--- Record Attendance ---")?;
        if self.service.student_count() == 0 {
            return Err(AttendanceError::NoStudents);
        }
        let date = self.console.prompt_nonempty("Enter date (YYYY-MM-DD): ")?;
        if !is_valid_date(&date) {
            return Err(AttendanceError::InvalidDate(date));
        }

        self.console.say(format!(
            "\nMarking attendance for {}. Enter 'p' for Present, 'a' for Absent, or 's' to skip.\n",
            date
        ))?;

        let console = &mut self.console;
        let summary = self.service.record_attendance(&date, |name, current| loop {
            let answer = console.prompt(&format!("{} [{}] (p/a/s): ", name, describe(current)))?;
            match Mark::from_choice(&answer) {
                Some(mark) => return Ok(mark),
                None => console
                    .say("Invalid input. Use 'p' for present, 'a' for absent, 's' to skip.")?,
            }
        })?;

        self.console.say(format!(
            "Attendance recorded for {} ({} present, {} absent, {} skipped).",
            summary.date, summary.present, summary.absent, summary.skipped
        ))
    }

    fn view_by_date(&mut self) -> Step {
        self.console.say("\n--- View Attendance by Date ---")?;
        if !self.service.has_records() {
            return self.console.say("No attendance records available.");
        }
        let date = self.console.prompt_nonempty("Enter date (YYYY-MM-DD): ")?;
        let report = self.service.attendance_on(&date)?;

        self.console.say(format!("\nAttendance for {}:", report.date))?;
        for entry in &report.entries {
            self.console
                .say(format!("- {}: {}", entry.name, describe(entry.status)))?;
        }
        Ok(())
    }

    fn search_student(&mut self) -> Step {
        self.console.say("\n--- Search Student Record ---")?;
        if self.service.student_count() == 0 {
            return self.console.say("No students in the system.");
        }
        let name = self.console.prompt_nonempty("Enter student's full name: ")?;
        let history = self.service.student_history(&name)?;

        self.console.say(format!(
            "\nAttendance history for {} (Group: {}):",
            history.name, history.group
        ))?;
        if history.entries.is_empty() {
            return self.console.say("No attendance recorded yet.");
        }
        for entry in &history.entries {
            self.console
                .say(format!("{}: {}", entry.date, describe(entry.status)))?;
        }
        Ok(())
    }

    fn export_csv(&mut self) -> Step {
        self.console.say("\n--- Export Attendance (CSV) ---")?;
        let date = self
            .console
            .prompt_nonempty("Enter date to export (YYYY-MM-DD): ")?;
        let path = self.service.export_csv(&date, &self.export_dir)?;
        self.console
            .say(format!("Exported attendance to {}.", path.display()))
    }

    fn save_and_exit(&mut self) -> Result<Option<SessionEnd>, AttendanceError> {
        match self.service.save() {
            Ok(path) => {
                self.console
                    .say(format!("Data saved to {}.", path.display()))?;
                self.console.say("Exiting. Goodbye!")?;
                Ok(Some(SessionEnd::Saved))
            }
            Err(err) => {
                error!(error = %err, "save failed");
                self.console.say(format!("Could not save data: {}", err))?;
                Ok(None)
            }
        }
    }
}
