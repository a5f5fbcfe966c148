use std::collections::BTreeSet;

/// A value that falls outside the domain of its field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomainViolation {
    pub field: &'static str,
    pub message: String,
}

impl DomainViolation {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// A record the generator builds field by field.
///
/// `FIELDS` is the static list of fields that must receive a value from a
/// generation rule. The identifier is assigned by the generator itself and
/// is never listed.
pub trait EntityShape: Default {
    /// Shape name used in errors and log events.
    const NAME: &'static str;
    /// Fields that require a rule, in declaration order.
    const FIELDS: &'static [&'static str];

    fn id(&self) -> u32;

    fn set_id(&mut self, id: u32);

    /// Domain check run after all rules have been applied.
    fn check(&self) -> Result<(), DomainViolation> {
        Ok(())
    }
}

/// Parent side of a one-to-many relationship.
pub trait ParentEntity {
    fn key(&self) -> u32;

    fn children(&self) -> &BTreeSet<u32>;

    fn children_mut(&mut self) -> &mut BTreeSet<u32>;
}

/// Child side of a one-to-many relationship.
pub trait ChildEntity {
    fn key(&self) -> u32;

    fn parent_key(&self) -> u32;
}
