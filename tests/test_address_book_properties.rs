//! Property and scenario tests for the address book core.

use chrono::NaiveDate;
use contact_assistant::domain::{Birthday, Name, Phone, ValidationError};
use contact_assistant::error::AddressBookError;
use contact_assistant::models::{AddressBook, Record};
use proptest::prelude::*;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

proptest! {
    #[test]
    fn prop_ten_digit_strings_are_phones(digits in "[0-9]{10}") {
        let first = Phone::new(&digits).unwrap();
        let second = Phone::new(&digits).unwrap();
        prop_assert_eq!(&first, &second);
        prop_assert_eq!(first.as_str(), digits.as_str());
    }

    #[test]
    fn prop_wrong_length_digit_strings_are_rejected(digits in "[0-9]{0,9}|[0-9]{11,15}") {
        prop_assert!(matches!(
            Phone::new(&digits),
            Err(ValidationError::InvalidPhone(_))
        ));
    }

    #[test]
    fn prop_non_digit_characters_are_rejected(
        prefix in "[0-9]{0,9}",
        bad in "[a-zA-Z+()\\-.]",
    ) {
        let mut candidate = prefix.clone();
        candidate.push_str(&bad);
        while candidate.len() < 10 {
            candidate.push('0');
        }
        prop_assert!(Phone::new(&candidate).is_err());
    }

    #[test]
    fn prop_edit_onto_self_is_identity(
        phones in proptest::collection::hash_set("[0-9]{10}", 1..6),
    ) {
        let phones: Vec<String> = phones.into_iter().collect();
        let mut record = Record::named("prop").unwrap();
        for phone in &phones {
            record.add_phone(phone.as_str()).unwrap();
        }
        let before = record.clone();

        for phone in &phones {
            record.edit_phone(phone.as_str(), phone.as_str()).unwrap();
        }
        prop_assert_eq!(record, before);
    }

    #[test]
    fn prop_added_record_is_found_by_name(
        name in "[a-z]{1,10}( [a-z]{1,10})?",
        phone in "[0-9]{10}",
    ) {
        let mut record = Record::named(&name).unwrap();
        record.add_phone(phone.as_str()).unwrap();

        let mut book = AddressBook::new();
        book.add_record(record.clone());

        prop_assert_eq!(book.find(&name), Some(&record));
        prop_assert_eq!(book.find(&name.to_uppercase()), Some(&record));
    }

    #[test]
    fn prop_upcoming_birthdays_are_within_window_and_on_weekdays(
        day_offsets in proptest::collection::vec(0i64..365, 0..20),
    ) {
        use chrono::{Datelike, Duration, Weekday};

        let today = date(2024, 6, 10);
        let book: AddressBook = day_offsets
            .iter()
            .enumerate()
            .map(|(i, offset)| {
                let mut record = Record::named(&format!("person{}", i)).unwrap();
                let born = (today + Duration::days(*offset)).with_year(1990).unwrap_or(date(1990, 3, 1));
                record.add_birthday(Birthday::from(born)).unwrap();
                record
            })
            .collect();

        let upcoming = book.get_upcoming_birthdays(today);
        for entry in &upcoming {
            let delta = (entry.congratulation_date - today).num_days();
            // A weekend birthday on day 7 can be pushed up to two days further
            prop_assert!((0..=9).contains(&delta));
            prop_assert!(!matches!(entry.congratulation_date.weekday(), Weekday::Sat | Weekday::Sun));
        }
        for pair in upcoming.windows(2) {
            prop_assert!(
                (pair[0].congratulation_date, &pair[0].name) <= (pair[1].congratulation_date, &pair[1].name)
            );
        }
    }
}

#[test]
fn test_name_normalization() {
    assert_eq!(Name::new("  jane doe ").unwrap().as_str(), "Jane Doe");
}

#[test]
fn test_leap_day_birthdays() {
    assert!(matches!(
        Birthday::new("29.02.2021"),
        Err(ValidationError::InvalidBirthday(_))
    ));
    assert_eq!(Birthday::new("29.02.2020").unwrap().to_string(), "29.02.2020");
}

#[test]
fn test_edit_phone_collapses_onto_existing_number() {
    let mut record = Record::named("dedup").unwrap();
    record.add_phone("1111111111").unwrap();
    record.add_phone("2222222222").unwrap();

    record.edit_phone("1111111111", "2222222222").unwrap();

    assert_eq!(record.phones(), &[Phone::new("2222222222").unwrap()]);
}

#[test]
fn test_upcoming_birthday_scenario() {
    // Monday 2024-06-10
    let today = date(2024, 6, 10);
    let mut book = AddressBook::new();
    for (name, birthday) in [
        ("wed", "12.06.1990"),
        ("sat", "15.06.1990"),
        ("far", "20.06.1990"),
    ] {
        let mut record = Record::named(name).unwrap();
        record.add_birthday(birthday).unwrap();
        book.add_record(record);
    }

    let upcoming: Vec<(String, String)> = book
        .get_upcoming_birthdays(today)
        .into_iter()
        .map(|u| {
            let date = u.formatted_date();
            (u.name, date)
        })
        .collect();

    assert_eq!(
        upcoming,
        vec![
            ("Wed".to_string(), "12.06.2024".to_string()),
            ("Sat".to_string(), "17.06.2024".to_string()),
        ]
    );
}

#[test]
fn test_delete_then_find() {
    let mut book = AddressBook::new();
    assert_eq!(book.delete("nobody"), Err(AddressBookError::NotFound));

    book.add_record(Record::named("somebody").unwrap());
    book.delete("somebody").unwrap();
    assert!(book.find("somebody").is_none());
}
