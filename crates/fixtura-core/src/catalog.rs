use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use rust_decimal::Decimal;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entity::{ChildEntity, DomainViolation, EntityShape, ParentEntity};
use crate::error::{Error, Result};

/// A product category (parent side of the catalog).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Category {
    pub id: u32,
    pub name: String,
    /// Ids of the products that reference this category.
    #[serde(default)]
    pub products: BTreeSet<u32>,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

impl EntityShape for Category {
    const NAME: &'static str = "category";
    const FIELDS: &'static [&'static str] = &["name", "products"];

    fn id(&self) -> u32 {
        self.id
    }

    fn set_id(&mut self, id: u32) {
        self.id = id;
    }
}

impl ParentEntity for Category {
    fn key(&self) -> u32 {
        self.id
    }

    fn children(&self) -> &BTreeSet<u32> {
        &self.products
    }

    fn children_mut(&mut self) -> &mut BTreeSet<u32> {
        &mut self.products
    }
}

/// A product (child side of the catalog).
///
/// The category reference is not stored; it is resolved by id through
/// [`Catalog::category_of`], which keeps the serialized graph acyclic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Product {
    pub id: u32,
    pub name: String,
    pub category_id: u32,
    pub unit_price: Decimal,
    pub units_in_stock: u16,
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

impl EntityShape for Product {
    const NAME: &'static str = "product";
    const FIELDS: &'static [&'static str] =
        &["name", "category_id", "unit_price", "units_in_stock"];

    fn id(&self) -> u32 {
        self.id
    }

    fn set_id(&mut self, id: u32) {
        self.id = id;
    }

    fn check(&self) -> std::result::Result<(), DomainViolation> {
        if self.unit_price < Decimal::ZERO {
            return Err(DomainViolation::new(
                "unit_price",
                format!("price must not be negative, got {}", self.unit_price),
            ));
        }
        Ok(())
    }
}

impl ChildEntity for Product {
    fn key(&self) -> u32 {
        self.id
    }

    fn parent_key(&self) -> u32 {
        self.category_id
    }
}

/// Display projection of a [`Product`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ProductItem {
    pub id: u32,
    pub name: String,
    pub unit_price: Decimal,
}

impl From<&Product> for ProductItem {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id,
            name: product.name.clone(),
            unit_price: product.unit_price,
        }
    }
}

impl fmt::Display for ProductItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// A product together with its resolved category.
///
/// Serializes the product fields plus `category_name`; the category itself
/// is never written.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct LinkedProduct<'a> {
    #[serde(flatten)]
    pub product: &'a Product,
    pub category_name: &'a str,
    #[serde(skip)]
    pub category: &'a Category,
}

/// Owned form of a [`LinkedProduct`] as written to JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ProductListing {
    #[serde(flatten)]
    pub product: Product,
    pub category_name: String,
}

impl From<LinkedProduct<'_>> for ProductListing {
    fn from(linked: LinkedProduct<'_>) -> Self {
        Self {
            product: linked.product.clone(),
            category_name: linked.category_name.to_string(),
        }
    }
}

/// Recompute every parent's child set from the children's parent keys.
///
/// Prior child sets are overwritten. Children whose parent key matches no
/// parent are ignored here; [`Catalog::relink`] rejects them up front.
pub fn backfill<P: ParentEntity, C: ChildEntity>(parents: &mut [P], children: &[C]) {
    let mut by_parent: BTreeMap<u32, BTreeSet<u32>> = BTreeMap::new();
    for child in children {
        by_parent
            .entry(child.parent_key())
            .or_default()
            .insert(child.key());
    }

    for parent in parents.iter_mut() {
        *parent.children_mut() = by_parent.remove(&parent.key()).unwrap_or_default();
    }
}

/// Raw catalog collections, as read back from the interchange format.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct CatalogParts {
    pub categories: Vec<Category>,
    pub products: Vec<Product>,
}

/// Linked category/product graph.
///
/// Invariants: every product's `category_id` names a category of this
/// catalog, and every category's `products` set holds exactly the ids of the
/// products that reference it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "CatalogParts")]
pub struct Catalog {
    categories: Vec<Category>,
    products: Vec<Product>,
}

impl Catalog {
    /// Join products to categories by id and back-fill the category sets.
    ///
    /// Category ids and product ids must each be unique.
    pub fn relink(mut categories: Vec<Category>, products: Vec<Product>) -> Result<Self> {
        let known = unique_ids(&categories)?;
        unique_ids(&products)?;
        if let Some(orphan) = products
            .iter()
            .find(|product| !known.contains(&product.category_id))
        {
            return Err(Error::UnresolvedReference {
                product: orphan.id,
                category: orphan.category_id,
            });
        }

        backfill(&mut categories, &products);

        Ok(Self {
            categories,
            products,
        })
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn category(&self, id: u32) -> Option<&Category> {
        self.categories.iter().find(|category| category.id == id)
    }

    pub fn product(&self, id: u32) -> Option<&Product> {
        self.products.iter().find(|product| product.id == id)
    }

    pub fn category_of(&self, product: &Product) -> Option<&Category> {
        self.category(product.category_id)
    }

    pub fn products_of<'a>(&'a self, category: &'a Category) -> impl Iterator<Item = &'a Product> {
        self.products
            .iter()
            .filter(move |product| category.products.contains(&product.id))
    }

    pub fn linked_products(&self) -> Vec<LinkedProduct<'_>> {
        self.products
            .iter()
            .filter_map(|product| {
                self.category_of(product).map(|category| LinkedProduct {
                    product,
                    category_name: &category.name,
                    category,
                })
            })
            .collect()
    }

    pub fn into_parts(self) -> (Vec<Category>, Vec<Product>) {
        (self.categories, self.products)
    }
}

fn unique_ids<T: EntityShape>(entities: &[T]) -> Result<BTreeSet<u32>> {
    let mut seen = BTreeSet::new();
    for entity in entities {
        if !seen.insert(entity.id()) {
            return Err(Error::DuplicateId {
                shape: T::NAME,
                id: entity.id(),
            });
        }
    }
    Ok(seen)
}

impl TryFrom<CatalogParts> for Catalog {
    type Error = Error;

    fn try_from(parts: CatalogParts) -> Result<Self> {
        Catalog::relink(parts.categories, parts.products)
    }
}
