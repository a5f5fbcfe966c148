use std::fmt;

use chrono::NaiveDate;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entity::{DomainViolation, EntityShape};

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
pub enum Gender {
    #[default]
    Male,
    Female,
}

impl Gender {
    pub const ALL: [Gender; 2] = [Gender::Male, Gender::Female];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Male => "Male",
            Self::Female => "Female",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Postal address owned by a [`Human`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Address {
    pub id: u32,
    pub street: String,
    pub city: String,
    pub state: String,
    pub postal_code: String,
    pub country: String,
}

impl EntityShape for Address {
    const NAME: &'static str = "address";
    const FIELDS: &'static [&'static str] = &["street", "city", "state", "postal_code", "country"];

    fn id(&self) -> u32 {
        self.id
    }

    fn set_id(&mut self, id: u32) {
        self.id = id;
    }
}

/// A generated person.
///
/// `email` is derived from `first_name` and `last_name`, and `first_name`
/// from `gender`, so rule order matters for this shape.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Human {
    pub id: u32,
    pub first_name: String,
    pub last_name: String,
    pub birth_date: NaiveDate,
    pub email: String,
    pub gender: Gender,
    /// Nine-digit national identification number.
    pub national_id: String,
    pub address: Address,
}

impl Human {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

impl EntityShape for Human {
    const NAME: &'static str = "human";
    const FIELDS: &'static [&'static str] = &[
        "gender",
        "first_name",
        "last_name",
        "birth_date",
        "email",
        "national_id",
        "address",
    ];

    fn id(&self) -> u32 {
        self.id
    }

    fn set_id(&mut self, id: u32) {
        self.id = id;
    }

    fn check(&self) -> Result<(), DomainViolation> {
        if self.national_id.len() != 9 || !self.national_id.bytes().all(|b| b.is_ascii_digit()) {
            return Err(DomainViolation::new(
                "national_id",
                format!("expected 9 digits, got '{}'", self.national_id),
            ));
        }
        Ok(())
    }
}
