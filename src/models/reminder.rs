use chrono::{DateTime, Local, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

const NAIVE_DATE_TIME_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

const ZONED_MINUTES_FORMAT: &str = "%Y-%m-%dT%H:%M%#z";

const DATE_FORMATS: [&str; 2] = ["%Y-%m-%d", "%Y/%m/%d"];

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Reminder {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub due_date: String,
    #[serde(default)]
    pub is_completed: bool,
}

impl Reminder {
    /// Whether the calendar date of `due_date`, read in server-local time,
    /// is `day`. Unparseable due dates are never due.
    pub fn is_due_on(&self, day: NaiveDate) -> bool {
        parse_due_date(&self.due_date) == Some(day)
    }
}

/// Body of `POST /reminders`. Every field is optional at the type level so a
/// missing field is reported as a validation error instead of a parse error.
#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct NewReminder {
    pub title: Option<String>,
    pub description: Option<String>,
    pub due_date: Option<String>,
    pub is_completed: Option<bool>,
}

impl NewReminder {
    /// Builds a stored reminder under `id`, or `None` when `title` or
    /// `dueDate` is absent.
    pub fn into_reminder(self, id: String) -> Option<Reminder> {
        Some(Reminder {
            id,
            title: self.title?,
            description: self.description.unwrap_or_default(),
            due_date: self.due_date?,
            is_completed: self.is_completed.unwrap_or(false),
        })
    }
}

/// Body of `PATCH /reminders/{id}`. Present fields overwrite, absent ones
/// are kept. `id` cannot be patched.
#[derive(Deserialize, Debug, Default, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ReminderPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub due_date: Option<String>,
    pub is_completed: Option<bool>,
}

impl ReminderPatch {
    pub fn apply_to(self, existing: &Reminder) -> Reminder {
        Reminder {
            id: existing.id.clone(),
            title: self.title.unwrap_or_else(|| existing.title.clone()),
            description: self
                .description
                .unwrap_or_else(|| existing.description.clone()),
            due_date: self.due_date.unwrap_or_else(|| existing.due_date.clone()),
            is_completed: self.is_completed.unwrap_or(existing.is_completed),
        }
    }
}

#[derive(Serialize, Deserialize, Debug)]
pub struct ReminderMessage {
    pub message: String,
    pub reminder: Reminder,
}

/// Calendar date of a due date string. Zoned timestamps (RFC 3339, RFC 2822,
/// or ISO with minutes and an offset but no seconds) are moved into local
/// time first. Naive date-times and bare dates keep the date as written.
pub fn parse_due_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();

    let zoned = DateTime::parse_from_rfc3339(value)
        .or_else(|_| DateTime::parse_from_rfc2822(value))
        .or_else(|_| DateTime::parse_from_str(value, ZONED_MINUTES_FORMAT));
    if let Ok(zoned) = zoned {
        return Some(zoned.with_timezone(&Local).date_naive());
    }
    if let Some(naive) = NAIVE_DATE_TIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
    {
        return Some(naive.date());
    }
    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(value, format).ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn reminder(due_date: &str) -> Reminder {
        Reminder {
            id: "r1".to_string(),
            title: "Pay rent".to_string(),
            description: String::new(),
            due_date: due_date.to_string(),
            is_completed: false,
        }
    }

    #[test]
    fn parses_bare_dates() {
        let expected = NaiveDate::from_ymd_opt(2024, 1, 1);
        assert_eq!(parse_due_date("2024-01-01"), expected);
        assert_eq!(parse_due_date("2024/01/01"), expected);
        assert_eq!(parse_due_date(" 2024-01-01 "), expected);
    }

    #[test]
    fn parses_naive_date_times_as_local() {
        let expected = NaiveDate::from_ymd_opt(2024, 3, 15);
        assert_eq!(parse_due_date("2024-03-15T23:59:59"), expected);
        assert_eq!(parse_due_date("2024-03-15 08:30"), expected);
        assert_eq!(parse_due_date("2024-03-15T08:30:00.250"), expected);
    }

    #[test]
    fn zoned_timestamps_use_the_local_calendar_date() {
        let instant = Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap();
        let expected = Some(instant.with_timezone(&Local).date_naive());
        assert_eq!(parse_due_date("2024-06-01T12:00:00Z"), expected);
        assert_eq!(parse_due_date("2024-06-01T14:00:00+02:00"), expected);
        assert_eq!(parse_due_date("Sat, 01 Jun 2024 12:00:00 +0000"), expected);
        assert_eq!(parse_due_date("2024-06-01T12:00Z"), expected);
        assert_eq!(parse_due_date("2024-06-01T14:00+02:00"), expected);
    }

    #[test]
    fn rejects_garbage() {
        assert_eq!(parse_due_date("tomorrow-ish"), None);
        assert_eq!(parse_due_date(""), None);
        assert_eq!(parse_due_date("2024-13-40"), None);
    }

    #[test]
    fn due_on_compares_calendar_dates() {
        let day = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        assert!(reminder("2024-01-01").is_due_on(day));
        assert!(reminder("2024-01-01 18:00").is_due_on(day));
        assert!(!reminder("2024-01-02").is_due_on(day));
        assert!(!reminder("not a date").is_due_on(day));
    }

    #[test]
    fn new_reminder_requires_title_and_due_date() {
        let missing_title = NewReminder {
            due_date: Some("2024-01-01".to_string()),
            ..Default::default()
        };
        assert!(missing_title.into_reminder("a".to_string()).is_none());

        let missing_due = NewReminder {
            title: Some("Pay rent".to_string()),
            ..Default::default()
        };
        assert!(missing_due.into_reminder("b".to_string()).is_none());
    }

    #[test]
    fn new_reminder_fills_defaults() {
        let body: NewReminder =
            serde_json::from_str(r#"{"title":"Pay rent","dueDate":"2024-01-01"}"#).unwrap();
        let built = body.into_reminder("id-1".to_string()).unwrap();
        assert_eq!(built.id, "id-1");
        assert_eq!(built.description, "");
        assert!(!built.is_completed);
    }

    #[test]
    fn new_reminder_accepts_empty_title() {
        let body: NewReminder = serde_json::from_str(r#"{"title":"","dueDate":"x"}"#).unwrap();
        assert_eq!(body.into_reminder("id".to_string()).unwrap().title, "");
    }

    #[test]
    fn patch_overwrites_only_present_fields() {
        let existing = Reminder {
            description: "monthly".to_string(),
            ..reminder("2024-01-01")
        };
        let patch: ReminderPatch =
            serde_json::from_str(r#"{"title":"Pay landlord","id":"other","extra":1}"#).unwrap();
        let patched = patch.clone().apply_to(&existing);

        assert_eq!(patched.id, "r1");
        assert_eq!(patched.title, "Pay landlord");
        assert_eq!(patched.description, "monthly");
        assert_eq!(patched.due_date, "2024-01-01");
        assert_eq!(patch.apply_to(&patched), patched);
    }

    #[test]
    fn serializes_camel_case() {
        let json = serde_json::to_value(reminder("2024-01-01")).unwrap();
        assert_eq!(json["dueDate"], "2024-01-01");
        assert_eq!(json["isCompleted"], false);
        assert!(json.get("due_date").is_none());
    }
}
