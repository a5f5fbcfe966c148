use chrono::{NaiveDate, TimeDelta};
use fake::Fake;
use fake::faker::address::en::{BuildingNumber, CityName, CountryName, StateName, StreetName, ZipCode};
use fake::faker::internet::en::FreeEmailProvider;
use fake::faker::name::en::LastName;
use rand::Rng;
use rand::seq::IndexedRandom;

use fixtura_core::{Address, Gender, Human};

use super::pick;
use crate::engine::{EntityGenerator, build_entity};
use crate::errors::GenerationError;
use crate::rules::{RuleContext, RuleSet};

const MALE_FIRST_NAMES: &[&str] = &[
    "Aaron", "Adam", "Brian", "Carlos", "Daniel", "David", "Edward", "Frank", "George", "Henry",
    "Isaac", "James", "John", "Kevin", "Lucas", "Mark", "Nathan", "Oscar", "Paul", "Robert",
    "Samuel", "Thomas", "Victor", "William",
];

const FEMALE_FIRST_NAMES: &[&str] = &[
    "Abigail", "Alice", "Bianca", "Carla", "Diana", "Elena", "Emma", "Fiona", "Grace", "Hannah",
    "Isabel", "Julia", "Karen", "Laura", "Maria", "Natalie", "Olivia", "Paula", "Rachel", "Sarah",
    "Sophia", "Teresa", "Valerie", "Zoe",
];

/// Earliest birth date a generated person can have.
pub fn earliest_birth_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(1900, 1, 1).unwrap_or_default()
}

fn first_names(gender: Gender) -> &'static [&'static str] {
    match gender {
        Gender::Male => MALE_FIRST_NAMES,
        Gender::Female => FEMALE_FIRST_NAMES,
    }
}

fn email_slug(name: &str) -> String {
    name.chars()
        .filter(char::is_ascii_alphanumeric)
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

/// Mailbox derived from the person's names, e.g. `jane.doe@gmail.com`.
fn derive_email<R: Rng + ?Sized>(first_name: &str, last_name: &str, rng: &mut R) -> String {
    let first = email_slug(first_name);
    let last = email_slug(last_name);
    let local = match rng.random_range(0..3) {
        0 => format!("{first}.{last}"),
        1 => format!("{first}_{last}"),
        _ => format!("{first}{last}{}", rng.random_range(10..100)),
    };
    let provider: String = FreeEmailProvider().fake_with_rng(rng);
    format!("{local}@{provider}")
}

fn birth_date(ctx: &mut RuleContext<'_>) -> Result<NaiveDate, GenerationError> {
    let earliest = earliest_birth_date();
    let span = (ctx.reference_date() - earliest).num_days();
    if span < 0 {
        return Err(ctx.fail(format!(
            "reference date {} precedes {earliest}",
            ctx.reference_date()
        )));
    }
    let offset = ctx.rng().random_range(0..=span);
    earliest
        .checked_add_signed(TimeDelta::days(offset))
        .ok_or_else(|| ctx.fail("birth date out of range"))
}

/// Rules for standalone addresses.
pub fn address_rules() -> RuleSet<Address> {
    RuleSet::new()
        .rule_for(
            "street",
            |a: &mut Address, v| a.street = v,
            |ctx, _| {
                let rng = ctx.rng();
                let number: String = BuildingNumber().fake_with_rng(rng);
                let street: String = StreetName().fake_with_rng(rng);
                Ok(format!("{number} {street}"))
            },
        )
        .rule_for(
            "city",
            |a: &mut Address, v| a.city = v,
            |ctx, _| Ok(CityName().fake_with_rng::<String, _>(ctx.rng())),
        )
        .rule_for(
            "state",
            |a: &mut Address, v| a.state = v,
            |ctx, _| Ok(StateName().fake_with_rng::<String, _>(ctx.rng())),
        )
        .rule_for(
            "postal_code",
            |a: &mut Address, v| a.postal_code = v,
            |ctx, _| Ok(ZipCode().fake_with_rng::<String, _>(ctx.rng())),
        )
        .rule_for(
            "country",
            |a: &mut Address, v| a.country = v,
            |ctx, _| Ok(CountryName().fake_with_rng::<String, _>(ctx.rng())),
        )
}

/// Rules for people.
///
/// The first name depends on the gender and the email on both names, so
/// those fields are declared in that order. Each person owns an address
/// built from the same source, carrying the person's id.
pub fn human_rules() -> Result<RuleSet<Human>, GenerationError> {
    let addresses = address_rules();
    addresses.validate()?;

    Ok(RuleSet::new()
        .rule_for(
            "gender",
            |h: &mut Human, v| h.gender = v,
            |ctx, _| Ok(Gender::ALL.choose(ctx.rng()).copied().unwrap_or_default()),
        )
        .rule_for(
            "first_name",
            |h: &mut Human, v| h.first_name = v,
            |ctx, h| Ok(pick(first_names(h.gender), ctx.rng())),
        )
        .rule_for(
            "last_name",
            |h: &mut Human, v| h.last_name = v,
            |ctx, _| Ok(LastName().fake_with_rng::<String, _>(ctx.rng())),
        )
        .rule_for(
            "birth_date",
            |h: &mut Human, v| h.birth_date = v,
            |ctx, _| birth_date(ctx),
        )
        .rule_for(
            "email",
            |h: &mut Human, v| h.email = v,
            |ctx, h| Ok(derive_email(&h.first_name, &h.last_name, ctx.rng())),
        )
        .rule_for(
            "national_id",
            |h: &mut Human, v| h.national_id = v,
            |ctx, _| Ok(format!("{:09}", ctx.rng().random_range(0..1_000_000_000_u32))),
        )
        .rule_for(
            "address",
            |h: &mut Human, v| h.address = v,
            move |ctx, _| {
                let id = ctx.entity();
                build_entity(&addresses, ctx.source(), id)
            },
        ))
}

pub fn humans(count: i64, seeded: bool) -> Result<Vec<Human>, GenerationError> {
    EntityGenerator::new(human_rules()?).generate(count, seeded)
}

pub fn addresses(count: i64, seeded: bool) -> Result<Vec<Address>, GenerationError> {
    EntityGenerator::new(address_rules()).generate(count, seeded)
}
