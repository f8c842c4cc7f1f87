//! AddressBook: the name-keyed collection of records.

use super::record::Record;
use crate::error::{BookError, BookResult};
use chrono::{Duration, Local, NaiveDate};
use indexmap::IndexMap;

/// Days ahead covered by [`AddressBook::get_birthdays_per_week`].
pub const WEEK_DAYS: u32 = 7;

/// Contacts keyed by lowercased name, kept in insertion order.
///
/// The map is never handed out mutably, so every key is the lowercase
/// form of its record's name.
#[derive(Debug, Clone, Default)]
pub struct AddressBook {
    records: IndexMap<String, Record>,
}

impl AddressBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record, replacing any record whose name differs only by case.
    ///
    /// A replaced record keeps its original position.
    pub fn add_record(&mut self, record: Record) {
        self.records.insert(record.name().key(), record);
    }

    /// Remove the record for `name`. Remaining records keep their order.
    pub fn delete(&mut self, name: &str) -> BookResult<()> {
        self.records
            .shift_remove(&name.to_lowercase())
            .map(|_| ())
            .ok_or_else(|| not_found(name))
    }

    /// Look up a record by name, ignoring case.
    pub fn find(&self, name: &str) -> BookResult<&Record> {
        self.records
            .get(&name.to_lowercase())
            .ok_or_else(|| not_found(name))
    }

    /// Mutable lookup; changes are visible to later `find` calls.
    pub fn find_mut(&mut self, name: &str) -> BookResult<&mut Record> {
        self.records
            .get_mut(&name.to_lowercase())
            .ok_or_else(|| not_found(name))
    }

    /// Records in insertion order.
    pub fn records(&self) -> impl Iterator<Item = &Record> {
        self.records.values()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Rendered records whose birthday falls on or before a week from today.
    pub fn get_birthdays_per_week(&self) -> Vec<String> {
        self.birthdays_due_by(Local::now().date_naive(), WEEK_DAYS)
    }

    /// Rendered records whose birthday date is on or before
    /// `today + window_days`, in insertion order.
    ///
    /// Only the upper bound is checked, and the stored date is compared
    /// as-is (birth year included), so birthdays in the past also match.
    /// A horizon past the end of the calendar is clamped to `NaiveDate::MAX`.
    pub fn birthdays_due_by(&self, today: NaiveDate, window_days: u32) -> Vec<String> {
        let horizon = today
            .checked_add_signed(Duration::days(i64::from(window_days)))
            .unwrap_or(NaiveDate::MAX);

        self.records
            .values()
            .filter(|record| {
                record
                    .birthday()
                    .and_then(|birthday| birthday.date())
                    .is_some_and(|date| date <= horizon)
            })
            .map(Record::to_string)
            .collect()
    }
}

fn not_found(name: &str) -> BookError {
    BookError::NotFound(format!("Record {} not found in the address book", name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Birthday, Phone};

    fn record(name: &str, phone: &str) -> Record {
        let mut record = Record::new(name);
        record.add_phone(Phone::new(phone)).unwrap();
        record
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 10).unwrap()
    }

    fn with_birthday(name: &str, date: NaiveDate) -> Record {
        let mut record = Record::new(name);
        record.add_birthday(Birthday::from(date)).unwrap();
        record
    }

    #[test]
    fn test_find_is_case_insensitive() {
        let mut book = AddressBook::new();
        book.add_record(record("Alice", "1111111111"));

        let found = book.find("alice").unwrap();
        assert_eq!(found.name().as_str(), "Alice");
        assert_eq!(book.find("ALICE").unwrap(), found);
    }

    #[test]
    fn test_find_missing() {
        let book = AddressBook::new();
        assert!(matches!(book.find("nobody"), Err(BookError::NotFound(_))));
    }

    #[test]
    fn test_add_record_overwrites_same_name_in_place() {
        let mut book = AddressBook::new();
        book.add_record(record("Alice", "1111111111"));
        book.add_record(record("Bob", "2222222222"));
        book.add_record(record("ALICE", "3333333333"));

        assert_eq!(book.len(), 2);
        let names: Vec<_> = book.records().map(|r| r.name().as_str()).collect();
        assert_eq!(names, vec!["ALICE", "Bob"]);
        assert_eq!(book.find("alice").unwrap().phones()[0].as_str(), "3333333333");
    }

    #[test]
    fn test_delete() {
        let mut book = AddressBook::new();
        book.add_record(record("Alice", "1111111111"));
        book.add_record(record("Bob", "2222222222"));
        book.add_record(record("Carol", "3333333333"));

        book.delete("BOB").unwrap();

        assert_eq!(book.len(), 2);
        assert!(book.find("bob").is_err());
        let names: Vec<_> = book.records().map(|r| r.name().as_str()).collect();
        assert_eq!(names, vec!["Alice", "Carol"]);
    }

    #[test]
    fn test_delete_missing() {
        let mut book = AddressBook::new();
        book.add_record(record("Alice", "1111111111"));

        assert!(matches!(book.delete("Bob"), Err(BookError::NotFound(_))));
        assert_eq!(book.len(), 1);
    }

    #[test]
    fn test_find_mut_changes_are_visible() {
        let mut book = AddressBook::new();
        book.add_record(record("Alice", "1111111111"));

        book.find_mut("alice")
            .unwrap()
            .add_phone(Phone::new("2222222222"))
            .unwrap();

        assert_eq!(book.find("Alice").unwrap().phones().len(), 2);
    }

    #[test]
    fn test_birthdays_due_by_window() {
        let mut book = AddressBook::new();
        book.add_record(with_birthday("Today", today()));
        book.add_record(with_birthday("Soon", today() + Duration::days(3)));
        book.add_record(with_birthday("Later", today() + Duration::days(10)));
        book.add_record(Record::new("Unset"));

        let result = book.birthdays_due_by(today(), WEEK_DAYS);

        assert_eq!(
            result,
            vec![
                "Contact name: Today, phones: , Birthday: 10.03.2024".to_string(),
                "Contact name: Soon, phones: , Birthday: 13.03.2024".to_string(),
            ]
        );
    }

    #[test]
    fn test_birthdays_due_by_horizon_is_inclusive() {
        let mut book = AddressBook::new();
        book.add_record(with_birthday("Edge", today() + Duration::days(7)));
        book.add_record(with_birthday("Past", today() + Duration::days(8)));

        let result = book.birthdays_due_by(today(), WEEK_DAYS);
        assert_eq!(result.len(), 1);
        assert!(result[0].starts_with("Contact name: Edge"));
    }

    #[test]
    fn test_birthdays_due_by_includes_past_dates() {
        // No lower bound: a birth date decades ago is "due".
        let mut book = AddressBook::new();
        book.add_record(with_birthday(
            "Old",
            NaiveDate::from_ymd_opt(1990, 12, 25).unwrap(),
        ));

        assert_eq!(book.birthdays_due_by(today(), WEEK_DAYS).len(), 1);
    }

    #[test]
    fn test_birthdays_due_by_huge_window_does_not_overflow() {
        let mut book = AddressBook::new();
        book.add_record(with_birthday("Far", today() + Duration::days(3650)));
        book.add_record(Record::new("Unset"));

        let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let result = book.birthdays_due_by(start, u32::MAX);
        assert_eq!(result.len(), 1);
        assert!(result[0].starts_with("Contact name: Far"));

        assert_eq!(book.birthdays_due_by(NaiveDate::MAX, 1).len(), 1);
    }

    #[test]
    fn test_birthdays_follow_insertion_order() {
        let mut book = AddressBook::new();
        book.add_record(with_birthday("Zed", today() + Duration::days(5)));
        book.add_record(with_birthday("Amy", today()));

        let result = book.birthdays_due_by(today(), WEEK_DAYS);
        assert!(result[0].starts_with("Contact name: Zed"));
        assert!(result[1].starts_with("Contact name: Amy"));
    }

    #[test]
    fn test_get_birthdays_per_week_uses_current_date() {
        let now = Local::now().date_naive();
        let mut book = AddressBook::new();
        book.add_record(with_birthday("Now", now));
        book.add_record(with_birthday("Far", now + Duration::days(30)));

        let result = book.get_birthdays_per_week();
        assert_eq!(result.len(), 1);
        assert!(result[0].starts_with("Contact name: Now"));
    }
}
