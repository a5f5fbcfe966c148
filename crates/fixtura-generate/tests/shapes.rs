use chrono::NaiveDate;
use fixtura_core::{EntityShape, Human, PASSWORD_LENGTH};
use fixtura_generate::shapes::catalog::categories;
use fixtura_generate::shapes::person::{addresses, earliest_birth_date, humans};
use fixtura_generate::shapes::user::users;
use fixtura_generate::{EntityGenerator, RandomSource, shapes};

fn slug(name: &str) -> String {
    name.chars()
        .filter(char::is_ascii_alphanumeric)
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

#[test]
fn email_is_derived_from_names() {
    for human in humans(30, true).expect("humans") {
        let (local, domain) = human.email.split_once('@').expect("mailbox");
        assert!(!domain.is_empty());
        assert!(local.starts_with(&slug(&human.first_name)), "{}", human.email);
        assert!(local.contains(&slug(&human.last_name)), "{}", human.email);
    }
}

#[test]
fn national_ids_are_nine_digits() {
    for human in humans(30, false).expect("humans") {
        assert_eq!(human.national_id.len(), 9);
        assert!(human.national_id.bytes().all(|b| b.is_ascii_digit()));
    }
}

#[test]
fn owned_address_shares_the_person_id() {
    let people = humans(8, true).expect("humans");
    for human in &people {
        assert_eq!(human.address.id, human.id);
        assert!(!human.address.city.is_empty());
        assert!(!human.address.street.is_empty());
    }
}

#[test]
fn birth_dates_stay_within_the_reference_window() {
    let reference = NaiveDate::from_ymd_opt(1950, 6, 30).expect("date");
    let mut source = RandomSource::install(Some(11)).with_reference_date(reference);
    let rules = shapes::person::human_rules().expect("rules");
    let people: Vec<Human> = EntityGenerator::new(rules)
        .generate_with(50, &mut source)
        .expect("humans");

    for human in &people {
        assert!(human.birth_date >= earliest_birth_date());
        assert!(human.birth_date <= reference);
    }
}

#[test]
fn reference_date_before_earliest_birth_fails() {
    let reference = NaiveDate::from_ymd_opt(1850, 1, 1).expect("date");
    let mut source = RandomSource::install(Some(1)).with_reference_date(reference);
    let rules = shapes::person::human_rules().expect("rules");
    let err = EntityGenerator::new(rules)
        .generate_with(1, &mut source)
        .unwrap_err();
    assert!(err.to_string().contains("human.birth_date"), "{err}");
}

#[test]
fn passwords_are_word_characters() {
    for user in users(20, true).expect("users") {
        assert_eq!(user.password.chars().count(), PASSWORD_LENGTH);
        assert!(
            user.password
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_')
        );
        assert!(!user.user_name.is_empty());
    }
}

#[test]
fn standalone_batches_have_sequential_ids() {
    let ids: Vec<u32> = addresses(4, true)
        .expect("addresses")
        .iter()
        .map(EntityShape::id)
        .collect();
    assert_eq!(ids, vec![1, 2, 3, 4]);

    let names = categories(3, true).expect("categories");
    assert!(names.iter().all(|c| c.products.is_empty() && !c.name.is_empty()));
}
