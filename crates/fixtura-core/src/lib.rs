//! Core entity contracts for Fixtura.
//!
//! This crate defines the generated records, the category/product graph and
//! its back-fill, and the change-notification wrapper shared by the
//! generator and the CLI.

pub mod catalog;
pub mod entity;
pub mod error;
pub mod helpers;
pub mod notify;
pub mod person;
pub mod schema;
pub mod user;

pub use catalog::{
    Catalog, CatalogParts, Category, LinkedProduct, Product, ProductItem, ProductListing, backfill,
};
pub use entity::{ChildEntity, DomainViolation, EntityShape, ParentEntity};
pub use error::{Error, Result};
pub use helpers::{GenderGroup, age_on, group_by_gender, mask_national_id};
pub use notify::{ChangeNotifier, Observed, SubscriptionId};
pub use person::{Address, Gender, Human};
pub use schema::{EntityKind, entity_schema};
pub use user::{PASSWORD_LENGTH, User};
