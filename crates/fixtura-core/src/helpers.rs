use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::person::{Gender, Human};

const NATIONAL_ID_LEN: usize = 9;

/// Whole years between `birth_date` and `today`.
///
/// One year is subtracted when the birthday has not yet come around in
/// `today`'s year.
pub fn age_on(birth_date: NaiveDate, today: NaiveDate) -> i32 {
    let mut age = today.year() - birth_date.year();
    if (today.month(), today.day()) < (birth_date.month(), birth_date.day()) {
        age -= 1;
    }
    age
}

/// Mask a nine-digit national id, keeping the last `digits_to_show` digits.
///
/// Dashes in the input are ignored and the output uses the `XXX-XX-1234`
/// layout. Blank input yields an empty string.
pub fn mask_national_id(value: &str, digits_to_show: usize, mask: char) -> Result<String> {
    if value.trim().is_empty() {
        return Ok(String::new());
    }

    let digits: String = value.chars().filter(|c| *c != '-').collect();
    if digits.len() != NATIONAL_ID_LEN {
        return Err(Error::InvalidNationalId(format!(
            "expected {NATIONAL_ID_LEN} digits, got {}",
            digits.len()
        )));
    }
    if !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(Error::InvalidNationalId("not numeric".to_string()));
    }
    if digits_to_show > NATIONAL_ID_LEN {
        return Err(Error::InvalidNationalId(format!(
            "cannot show {digits_to_show} of {NATIONAL_ID_LEN} digits"
        )));
    }

    let hidden = NATIONAL_ID_LEN - digits_to_show;
    let mut out = String::with_capacity(NATIONAL_ID_LEN + 2);
    for (index, digit) in digits.chars().enumerate() {
        if index == 3 || index == 5 {
            out.push('-');
        }
        out.push(if index < hidden { mask } else { digit });
    }
    Ok(out)
}

/// People sharing one gender, ordered by last name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenderGroup {
    pub gender: Gender,
    pub people: Vec<Human>,
}

pub fn group_by_gender(humans: &[Human]) -> Vec<GenderGroup> {
    let mut groups: BTreeMap<Gender, Vec<Human>> = BTreeMap::new();
    for human in humans {
        groups.entry(human.gender).or_default().push(human.clone());
    }

    groups
        .into_iter()
        .map(|(gender, mut people)| {
            people.sort_by(|a, b| a.last_name.cmp(&b.last_name));
            GenderGroup { gender, people }
        })
        .collect()
}
