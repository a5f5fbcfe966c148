//! Built-in rule sets for the Fixtura entities.

pub mod catalog;
pub mod person;
pub mod user;

use rand::Rng;
use rand::seq::IndexedRandom;

fn pick<R: Rng + ?Sized>(values: &[&str], rng: &mut R) -> String {
    values.choose(rng).copied().unwrap_or_default().to_string()
}
