use std::path::{Path, PathBuf};

use csv::Writer;
use tracing::info;

use crate::error::AttendanceError;
use crate::model::status::describe;
use crate::service::dto::DayReport;

const HEADER: [&str; 3] = ["Name", "Class Group", "Status"];

pub fn export_file_name(report: &DayReport) -> String {
    format!("attendance_{}.csv", report.date)
}

/// Writes `report` as CSV into `dir`, replacing any earlier export of the same date.
pub fn write_day_csv(report: &DayReport, dir: &Path) -> Result<PathBuf, AttendanceError> {
    let path = dir.join(export_file_name(report));
    let mut writer = Writer::from_path(&path)?;
    writer.write_record(HEADER)?;
    for entry in &report.entries {
        writer.write_record([
            entry.name.as_str(),
            entry.group.as_str(),
            describe(entry.status),
        ])?;
    }
    writer.flush()?;

    info!(path = %path.display(), rows = report.entries.len(), "exported attendance");
    Ok(path)
}
