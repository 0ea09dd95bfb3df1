//! Frontend Models
//!
//! Data structures for the to-do list.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Fixed category set for items
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Work,
    Personal,
    Shopping,
    #[default]
    Other,
}

impl Category {
    /// All categories in display order
    pub const ALL: [Category; 4] = [
        Category::Work,
        Category::Personal,
        Category::Shopping,
        Category::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Work => "work",
            Category::Personal => "personal",
            Category::Shopping => "shopping",
            Category::Other => "other",
        }
    }

    /// Display label for badges, tabs and selector buttons
    pub fn label(&self) -> &'static str {
        match self {
            Category::Work => "Work",
            Category::Personal => "Personal",
            Category::Shopping => "Shopping",
            Category::Other => "Other",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s {
            "work" => Category::Work,
            "personal" => Category::Personal,
            "shopping" => Category::Shopping,
            _ => Category::Other,
        }
    }
}

/// To-do item data structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Todo {
    pub id: u32,
    pub text: String,
    pub completed: bool,
    pub category: Category,
    pub due_date: Option<NaiveDateTime>,
}

/// Wire format of the datetime-local input
const DATETIME_LOCAL_FMT: &str = "%Y-%m-%dT%H:%M";

/// Parse a raw due-date string leniently.
///
/// Accepts datetime-local values with and without seconds, and a bare
/// date (read as midnight). Anything else means "no due date".
pub fn parse_due_date(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    NaiveDateTime::parse_from_str(raw, DATETIME_LOCAL_FMT)
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S"))
        .ok()
        .or_else(|| {
            NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                .ok()
                .and_then(|d| d.and_hms_opt(0, 0, 0))
        })
}

/// Format a due date as a datetime-local input value
pub fn due_date_input_value(due: Option<NaiveDateTime>) -> String {
    due.map(|d| d.format(DATETIME_LOCAL_FMT).to_string())
        .unwrap_or_default()
}

/// Format a due date for the row badge
pub fn due_date_label(due: NaiveDateTime) -> String {
    due.format("%Y-%m-%d %H:%M").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_string_forms() {
        assert_eq!(Category::Work.as_str(), "work");
        assert_eq!(Category::from_str("shopping"), Category::Shopping);
        assert_eq!(Category::from_str("unknown"), Category::Other);
        assert_eq!(Category::default(), Category::Other);
    }

    #[test]
    fn test_parse_datetime_local() {
        let due = parse_due_date("2024-01-05T09:30").unwrap();
        assert_eq!(due_date_label(due), "2024-01-05 09:30");

        let with_seconds = parse_due_date("2024-01-05T09:30:15").unwrap();
        assert_eq!(due_date_label(with_seconds), "2024-01-05 09:30");
    }

    #[test]
    fn test_parse_bare_date_is_midnight() {
        let due = parse_due_date("2024-01-05").unwrap();
        assert_eq!(due_date_label(due), "2024-01-05 00:00");
    }

    #[test]
    fn test_invalid_input_is_no_due_date() {
        assert_eq!(parse_due_date(""), None);
        assert_eq!(parse_due_date("   "), None);
        assert_eq!(parse_due_date("next tuesday"), None);
        assert_eq!(parse_due_date("2024-13-45"), None);
    }

    #[test]
    fn test_input_value_round_trip() {
        let due = parse_due_date("2024-02-29T23:59");
        assert_eq!(due_date_input_value(due), "2024-02-29T23:59");
        assert_eq!(due_date_input_value(None), "");
    }
}
