use fake::Fake;
use fake::faker::internet::en::Username;
use rand::Rng;
use rand_regex::Regex as RandRegex;

use fixtura_core::{PASSWORD_LENGTH, User};

use crate::engine::EntityGenerator;
use crate::errors::GenerationError;
use crate::rules::RuleSet;

/// Rules for credential records. Passwords are word characters only.
pub fn user_rules() -> Result<RuleSet<User>, GenerationError> {
    let pattern = format!("[0-9A-Za-z_]{{{PASSWORD_LENGTH}}}");
    let password = RandRegex::compile(&pattern, PASSWORD_LENGTH as u32)
        .map_err(|err| GenerationError::InvalidPattern(format!("{pattern}: {err}")))?;

    Ok(RuleSet::new()
        .rule_for(
            "user_name",
            |u: &mut User, v| u.user_name = v,
            |ctx, _| Ok(Username().fake_with_rng::<String, _>(ctx.rng())),
        )
        .rule_for(
            "password",
            |u: &mut User, v| u.password = v,
            move |ctx, _| Ok(ctx.rng().sample::<String, _>(&password)),
        ))
}

pub fn users(count: i64, seeded: bool) -> Result<Vec<User>, GenerationError> {
    EntityGenerator::new(user_rules()?).generate(count, seeded)
}
