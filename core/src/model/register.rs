use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};

use crate::model::status::Status;
use crate::time::parse_date;

/// Student name -> class group.
pub type Roster = BTreeMap<String, String>;
/// Student name -> status for a single day. Unmarked students have no key.
pub type DayRecord = BTreeMap<String, Status>;
/// Date -> day record, iterated in chronological order.
pub type Ledger = BTreeMap<NaiveDate, DayRecord>;

const SEED_STUDENTS: [(&str, &str); 10] = [
    ("Ali Khan", "Class A"),
    ("Sara Ahmed", "Class A"),
    ("Hassan Raza", "Class B"),
    ("Ayesha Noor", "Class B"),
    ("Bilal Hussain", "Class C"),
    ("Fatima Zia", "Class C"),
    ("Usman Tariq", "Class D"),
    ("Zainab Iqbal", "Class D"),
    ("Ahmed Faraz", "Class E"),
    ("Maryam Ali", "Class E"),
];

/// Roster plus ledger. This is also the exact shape of the data file.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct Register {
    #[serde(default)]
    pub students: Roster,
    #[serde(default, deserialize_with = "deserialize_ledger")]
    pub attendance: Ledger,
}

/// Parses ledger keys with `parse_date`. A key that is not strict
/// `YYYY-MM-DD` fails the whole document.
fn deserialize_ledger<'de, D>(deserializer: D) -> Result<Ledger, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = BTreeMap::<String, DayRecord>::deserialize(deserializer)?;
    raw.into_iter()
        .map(|(key, day)| match parse_date(&key) {
            Some(date) => Ok((date, day)),
            None => Err(<D::Error as de::Error>::custom(format!(
                "invalid date key '{}', expected YYYY-MM-DD",
                key
            ))),
        })
        .collect()
}

impl Register {
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in roster every session starts from.
    pub fn seeded() -> Self {
        let students = SEED_STUDENTS
            .iter()
            .map(|(name, group)| (name.to_string(), group.to_string()))
            .collect();
        Self {
            students,
            attendance: Ledger::new(),
        }
    }

    /// Overlays `saved` on top of the current contents. Keys from `saved` win;
    /// keys only present here are kept, so seeded students are never removed.
    pub fn merge(&mut self, saved: Register) {
        self.students.extend(saved.students);
        self.attendance.extend(saved.attendance);
    }

    pub fn status_of(&self, date: NaiveDate, name: &str) -> Option<Status> {
        self.attendance
            .get(&date)
            .and_then(|day| day.get(name))
            .copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_seeded_has_ten_students() {
        let register = Register::seeded();
        assert_eq!(register.students.len(), 10);
        assert_eq!(register.students.get("Ali Khan"), Some(&"Class A".to_string()));
        assert_eq!(register.students.get("Maryam Ali"), Some(&"Class E".to_string()));
        assert!(register.attendance.is_empty());
    }

    #[test]
    fn test_merge_overlays_loaded_entries() {
        let mut register = Register::seeded();

        let mut saved = Register::new();
        saved.students.insert("Ali Khan".to_string(), "Class Z".to_string());
        saved.students.insert("New Kid".to_string(), "Class F".to_string());
        let mut day = DayRecord::new();
        day.insert("New Kid".to_string(), Status::Present);
        saved.attendance.insert(date("2025-03-01"), day);

        register.merge(saved);

        assert_eq!(register.students.len(), 11);
        assert_eq!(register.students.get("Ali Khan"), Some(&"Class Z".to_string()));
        assert_eq!(register.students.get("Sara Ahmed"), Some(&"Class A".to_string()));
        assert_eq!(
            register.status_of(date("2025-03-01"), "New Kid"),
            Some(Status::Present)
        );
        assert_eq!(register.status_of(date("2025-03-01"), "Ali Khan"), None);
    }

    #[test]
    fn test_document_shape() {
        let mut register = Register::new();
        register.students.insert("Ali Khan".to_string(), "Class A".to_string());
        let mut day = DayRecord::new();
        day.insert("Ali Khan".to_string(), Status::Absent);
        register.attendance.insert(date("2025-03-01"), day);

        let value = serde_json::to_value(&register).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "students": { "Ali Khan": "Class A" },
                "attendance": { "2025-03-01": { "Ali Khan": "Absent" } }
            })
        );
    }

    #[test]
    fn test_missing_fields_default_to_empty() {
        let raw = r#"{"students": {"A": "B"}, "extra": 1}"#;
        let register: Register = serde_json::from_str(raw).unwrap();
        assert_eq!(register.students.len(), 1);
        assert!(register.attendance.is_empty());
    }

    #[test]
    fn test_malformed_date_key_is_rejected() {
        for key in ["not-a-date", "2025-3-1", " 2025-03-01", "2025-03-1", "2023-02-29"] {
            let raw = format!(
                r#"{{"attendance": {{"{}": {{"Ali Khan": "Present"}}}}}}"#,
                key
            );
            let parsed = serde_json::from_str::<Register>(&raw);
            assert!(parsed.is_err(), "key {:?} should be rejected", key);
        }
    }

    #[test]
    fn test_loose_and_strict_keys_do_not_collapse() {
        let raw = r#"{"attendance": {
            "2025-3-1": {"Ali Khan": "Present"},
            "2025-03-01": {"Sara Ahmed": "Absent"}
        }}"#;
        assert!(serde_json::from_str::<Register>(raw).is_err());
    }

    #[test]
    fn test_strict_key_loads() {
        let raw = r#"{"attendance": {"2024-02-29": {"Ali Khan": "Present"}}}"#;
        let register: Register = serde_json::from_str(raw).unwrap();
        assert_eq!(
            register.status_of(date("2024-02-29"), "Ali Khan"),
            Some(Status::Present)
        );
    }
}
