use std::time::Instant;

use tracing::{debug, info};

use fixtura_core::EntityShape;

use crate::errors::GenerationError;
use crate::random::RandomSource;
use crate::rules::{RuleContext, RuleSet};

/// Runs a rule set once per entity of a batch.
#[derive(Debug)]
pub struct EntityGenerator<T> {
    rules: RuleSet<T>,
}

impl<T: EntityShape> EntityGenerator<T> {
    pub fn new(rules: RuleSet<T>) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &RuleSet<T> {
        &self.rules
    }

    /// Generate `count` entities from a fresh source.
    ///
    /// `seeded` installs [`crate::DEFAULT_SEED`], so two seeded calls with the
    /// same rules return equal batches.
    pub fn generate(&self, count: i64, seeded: bool) -> Result<Vec<T>, GenerationError> {
        let mut source = RandomSource::for_mode(seeded);
        self.generate_with(count, &mut source)
    }

    /// Generate `count` entities drawing from `source`.
    ///
    /// A zero or negative count yields an empty batch. Ids run from 1 to
    /// `count`. The first failing rule or domain check aborts the batch.
    pub fn generate_with(
        &self,
        count: i64,
        source: &mut RandomSource,
    ) -> Result<Vec<T>, GenerationError> {
        if count <= 0 {
            debug!(shape = T::NAME, count, "empty batch requested");
            return Ok(Vec::new());
        }

        self.rules.validate()?;
        let total = u32::try_from(count).map_err(|_| GenerationError::CountTooLarge(count))?;

        let start = Instant::now();
        info!(
            shape = T::NAME,
            count = total,
            seeded = source.is_seeded(),
            strict = self.rules.is_strict(),
            "generation started"
        );

        let mut entities = Vec::with_capacity(total as usize);
        for id in 1..=total {
            entities.push(build_entity(&self.rules, source, id)?);
        }

        info!(
            shape = T::NAME,
            count = entities.len(),
            duration_ms = start.elapsed().as_millis() as u64,
            "generation completed"
        );
        Ok(entities)
    }

    /// First entity of a one-element batch.
    pub fn generate_one(&self, seeded: bool) -> Result<T, GenerationError> {
        let mut source = RandomSource::for_mode(seeded);
        self.rules.validate()?;
        build_entity(&self.rules, &mut source, 1)
    }
}

impl<T: EntityShape> From<RuleSet<T>> for EntityGenerator<T> {
    fn from(rules: RuleSet<T>) -> Self {
        Self::new(rules)
    }
}

/// Build one entity with identifier `id`.
///
/// Does not validate `rules`; callers run [`RuleSet::validate`] once per batch.
/// Shapes that own sub-entities call this from inside a rule so the owned
/// value draws from the same source.
pub fn build_entity<T: EntityShape>(
    rules: &RuleSet<T>,
    source: &mut RandomSource,
    id: u32,
) -> Result<T, GenerationError> {
    let mut entity = T::default();
    entity.set_id(id);

    let mut ctx = RuleContext::new(source, T::NAME, id);
    rules.evaluate(&mut ctx, &mut entity)?;

    entity
        .check()
        .map_err(|violation| GenerationError::RuleEvaluation {
            shape: T::NAME,
            field: violation.field,
            entity: id,
            message: violation.message,
        })?;
    Ok(entity)
}
