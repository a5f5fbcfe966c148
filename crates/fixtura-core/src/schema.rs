use std::fmt;

use schemars::schema::RootSchema;
use schemars::schema_for;

use crate::catalog::{CatalogParts, Category, Product, ProductListing};
use crate::person::{Address, Human};
use crate::user::User;

/// Entity kinds that can be generated and exported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Category,
    Product,
    ProductListing,
    Catalog,
    Human,
    Address,
    User,
}

impl EntityKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Category => "category",
            Self::Product => "product",
            Self::ProductListing => "product_listing",
            Self::Catalog => "catalog",
            Self::Human => "human",
            Self::Address => "address",
            Self::User => "user",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// JSON Schema of a batch (array) of the given entity kind.
///
/// A catalog is exported as its `{ categories, products }` object. Product
/// listings carry the resolved `category_name` next to the product fields.
pub fn entity_schema(kind: EntityKind) -> RootSchema {
    match kind {
        EntityKind::Category => schema_for!(Vec<Category>),
        EntityKind::Product => schema_for!(Vec<Product>),
        EntityKind::ProductListing => schema_for!(Vec<ProductListing>),
        EntityKind::Catalog => schema_for!(CatalogParts),
        EntityKind::Human => schema_for!(Vec<Human>),
        EntityKind::Address => schema_for!(Vec<Address>),
        EntityKind::User => schema_for!(Vec<User>),
    }
}
