use tracing::info;

use fixtura_core::Catalog;

use crate::engine::EntityGenerator;
use crate::errors::GenerationError;
use crate::model::GenerateOptions;
use crate::random::RandomSource;
use crate::shapes::catalog::{category_rules, product_rules};

/// Categories generated per catalog unless configured otherwise.
pub const DEFAULT_CATEGORY_COUNT: u32 = 5;

/// Generates categories, then products referencing them, then back-fills
/// each category's product set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RelationshipLinker {
    category_count: u32,
}

impl Default for RelationshipLinker {
    fn default() -> Self {
        Self::new(DEFAULT_CATEGORY_COUNT)
    }
}

impl From<&GenerateOptions> for RelationshipLinker {
    fn from(options: &GenerateOptions) -> Self {
        Self::new(options.category_count)
    }
}

impl RelationshipLinker {
    pub fn new(category_count: u32) -> Self {
        Self { category_count }
    }

    pub fn category_count(&self) -> u32 {
        self.category_count
    }

    pub fn link(&self, product_count: i64, seeded: bool) -> Result<Catalog, GenerationError> {
        let mut source = RandomSource::for_mode(seeded);
        self.link_with(product_count, &mut source)
    }

    /// Link a catalog drawing every value from `source`.
    ///
    /// Categories are always generated. A zero or negative `product_count`
    /// leaves every product set empty.
    pub fn link_with(
        &self,
        product_count: i64,
        source: &mut RandomSource,
    ) -> Result<Catalog, GenerationError> {
        let categories = EntityGenerator::new(category_rules())
            .generate_with(i64::from(self.category_count), source)?;

        let category_ids: Vec<u32> = categories.iter().map(|category| category.id).collect();
        let products =
            EntityGenerator::new(product_rules(category_ids)).generate_with(product_count, source)?;

        let catalog = Catalog::relink(categories, products)?;
        info!(
            categories = catalog.categories().len(),
            products = catalog.products().len(),
            largest_category = catalog
                .categories()
                .iter()
                .map(|category| category.products.len())
                .max()
                .unwrap_or(0),
            "catalog linked"
        );
        Ok(catalog)
    }
}
