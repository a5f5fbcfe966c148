use chrono::NaiveDate;

use fixtura_core::{Error, Gender, Human, age_on, group_by_gender, mask_national_id};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

#[test]
fn age_counts_completed_years() {
    let today = date(2024, 6, 15);
    assert_eq!(age_on(date(1990, 6, 15), today), 34);
    assert_eq!(age_on(date(1990, 6, 16), today), 33);
    assert_eq!(age_on(date(1990, 1, 1), today), 34);
    assert_eq!(age_on(today, today), 0);
}

#[test]
fn mask_keeps_trailing_digits() {
    let masked = mask_national_id("123-45-6789", 4, 'X').expect("mask");
    assert_eq!(masked, "XXX-XX-6789");

    let masked = mask_national_id("123456789", 0, '*').expect("mask");
    assert_eq!(masked, "***-**-****");
}

#[test]
fn mask_handles_blank_and_invalid_input() {
    assert_eq!(mask_national_id("   ", 4, 'X').expect("blank"), "");
    assert!(matches!(
        mask_national_id("12345", 4, 'X'),
        Err(Error::InvalidNationalId(_))
    ));
    assert!(matches!(
        mask_national_id("12345678a", 4, 'X'),
        Err(Error::InvalidNationalId(_))
    ));
}

#[test]
fn groups_people_by_gender_sorted_by_last_name() {
    let person = |id, last: &str, gender| Human {
        id,
        last_name: last.to_string(),
        gender,
        ..Human::default()
    };
    let humans = vec![
        person(1, "Young", Gender::Female),
        person(2, "Adams", Gender::Male),
        person(3, "Baker", Gender::Female),
    ];

    let groups = group_by_gender(&humans);
    assert_eq!(groups.len(), 2);
    assert_eq!(groups[0].gender, Gender::Male);
    assert_eq!(groups[1].gender, Gender::Female);
    let females: Vec<_> = groups[1].people.iter().map(|h| h.id).collect();
    assert_eq!(females, vec![3, 1]);
}
