pub mod error;
pub mod input;
pub mod model;
pub mod repository;
pub mod service;
pub mod time;

pub use error::AttendanceError;
pub use input::non_empty;
pub use model::register::{DayRecord, Ledger, Register, Roster};
pub use model::status::{describe, Mark, Status, NOT_RECORDED};
pub use repository::{FileRegisterRepository, RegisterRepository, Stored};
pub use service::attendance_service::AttendanceService;
pub use service::dto::{
    DayEntry, DayReport, HistoryEntry, LoadOutcome, RecordSummary, StudentHistory, StudentRow,
};
pub use time::{is_valid_date, parse_date};
