//! Rule-based entity generation for Fixtura.
//!
//! Rule sets describe how every field of a shape is drawn from a seeded
//! random source. The generator runs them once per entity, and the linker
//! joins generated categories and products into a consistent catalog.

pub mod engine;
pub mod errors;
pub mod linker;
pub mod model;
pub mod output;
pub mod random;
pub mod rules;
pub mod shapes;

pub use engine::{EntityGenerator, build_entity};
pub use errors::GenerationError;
pub use linker::{DEFAULT_CATEGORY_COUNT, RelationshipLinker};
pub use model::GenerateOptions;
pub use random::{DEFAULT_SEED, RandomSource};
pub use rules::{RuleContext, RuleSet};
