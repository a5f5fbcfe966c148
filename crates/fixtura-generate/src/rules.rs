use std::fmt;

use chrono::NaiveDate;
use rand_chacha::ChaCha8Rng;

use fixtura_core::EntityShape;

use crate::errors::GenerationError;
use crate::random::RandomSource;

/// What a rule sees while one entity is being built.
pub struct RuleContext<'a> {
    source: &'a mut RandomSource,
    shape: &'static str,
    field: &'static str,
    entity: u32,
}

impl<'a> RuleContext<'a> {
    pub fn new(source: &'a mut RandomSource, shape: &'static str, entity: u32) -> Self {
        Self {
            source,
            shape,
            field: "",
            entity,
        }
    }

    pub fn rng(&mut self) -> &mut ChaCha8Rng {
        self.source.rng()
    }

    /// Source for building owned sub-entities with the same draws.
    pub fn source(&mut self) -> &mut RandomSource {
        &mut *self.source
    }

    pub fn reference_date(&self) -> NaiveDate {
        self.source.reference_date()
    }

    /// Identifier of the entity under construction.
    pub fn entity(&self) -> u32 {
        self.entity
    }

    /// Field whose rule is running.
    pub fn field(&self) -> &'static str {
        self.field
    }

    /// Build a rule failure for the current field.
    pub fn fail(&self, message: impl Into<String>) -> GenerationError {
        GenerationError::RuleEvaluation {
            shape: self.shape,
            field: self.field,
            entity: self.entity,
            message: message.into(),
        }
    }
}

type ApplyFn<T> = Box<dyn Fn(&mut RuleContext<'_>, &mut T) -> Result<(), GenerationError>>;

struct FieldRule<T> {
    field: &'static str,
    apply: ApplyFn<T>,
}

/// Ordered field rules for one entity shape.
pub struct RuleSet<T> {
    rules: Vec<FieldRule<T>>,
    strict: bool,
}

impl<T: EntityShape> Default for RuleSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for RuleSet<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RuleSet")
            .field(
                "fields",
                &self.rules.iter().map(|rule| rule.field).collect::<Vec<_>>(),
            )
            .field("strict", &self.strict)
            .finish()
    }
}

impl<T: EntityShape> RuleSet<T> {
    /// Empty rule set with strict mode on.
    pub fn new() -> Self {
        Self {
            rules: Vec::new(),
            strict: true,
        }
    }

    /// Toggle strict mode. Without it, fields lacking a rule keep their
    /// default value.
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    pub fn is_strict(&self) -> bool {
        self.strict
    }

    /// Register the rule for `field`.
    ///
    /// `rule` receives the context and the entity built so far and returns
    /// the field value, which `set` writes before the next rule runs.
    /// Registering a field again replaces its rule in place.
    pub fn rule_for<V, S, R>(mut self, field: &'static str, set: S, rule: R) -> Self
    where
        S: Fn(&mut T, V) + 'static,
        R: Fn(&mut RuleContext<'_>, &T) -> Result<V, GenerationError> + 'static,
    {
        let apply: ApplyFn<T> = Box::new(move |ctx: &mut RuleContext<'_>, entity: &mut T| {
            let value = rule(ctx, entity)?;
            set(entity, value);
            Ok(())
        });

        match self.rules.iter_mut().find(|existing| existing.field == field) {
            Some(existing) => existing.apply = apply,
            None => self.rules.push(FieldRule { field, apply }),
        }
        self
    }

    pub fn has_rule(&self, field: &str) -> bool {
        self.rules.iter().any(|rule| rule.field == field)
    }

    /// Registered fields, in evaluation order.
    pub fn fields(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.rules.iter().map(|rule| rule.field)
    }

    /// Check the rules against the shape's declared fields.
    ///
    /// In strict mode every unruled field is reported before any rule for an
    /// undeclared field.
    pub fn validate(&self) -> Result<(), GenerationError> {
        if self.strict {
            let missing: Vec<&'static str> = T::FIELDS
                .iter()
                .copied()
                .filter(|field| !self.has_rule(field))
                .collect();
            if !missing.is_empty() {
                return Err(GenerationError::MissingRules {
                    shape: T::NAME,
                    fields: missing,
                });
            }
        }

        if let Some(rule) = self
            .rules
            .iter()
            .find(|rule| !T::FIELDS.contains(&rule.field))
        {
            return Err(GenerationError::UnknownField {
                shape: T::NAME,
                field: rule.field,
            });
        }

        Ok(())
    }

    /// Apply every rule to `entity`, in declaration order.
    pub fn evaluate(&self, ctx: &mut RuleContext<'_>, entity: &mut T) -> Result<(), GenerationError> {
        for rule in &self.rules {
            ctx.field = rule.field;
            (rule.apply)(ctx, entity)?;
        }
        Ok(())
    }
}
