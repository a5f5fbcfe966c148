use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entity::{DomainViolation, EntityShape};

/// Length of generated passwords.
pub const PASSWORD_LENGTH: usize = 12;

/// Generated credential record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct User {
    pub id: u32,
    pub user_name: String,
    pub password: String,
}

impl EntityShape for User {
    const NAME: &'static str = "user";
    const FIELDS: &'static [&'static str] = &["user_name", "password"];

    fn id(&self) -> u32 {
        self.id
    }

    fn set_id(&mut self, id: u32) {
        self.id = id;
    }

    fn check(&self) -> Result<(), DomainViolation> {
        let len = self.password.chars().count();
        if len != PASSWORD_LENGTH {
            return Err(DomainViolation::new(
                "password",
                format!("expected {PASSWORD_LENGTH} characters, got {len}"),
            ));
        }
        Ok(())
    }
}
