use rand::Rng;
use rand::seq::IndexedRandom;
use rust_decimal::Decimal;

use fixtura_core::{Category, Product};

use super::pick;
use crate::engine::EntityGenerator;
use crate::errors::GenerationError;
use crate::rules::RuleSet;

const DEPARTMENTS: &[&str] = &[
    "Automotive",
    "Baby",
    "Beauty",
    "Books",
    "Clothing",
    "Computers",
    "Electronics",
    "Games",
    "Garden",
    "Grocery",
    "Health",
    "Home",
    "Industrial",
    "Jewelery",
    "Kids",
    "Movies",
    "Music",
    "Outdoors",
    "Shoes",
    "Sports",
    "Tools",
    "Toys",
];

const ADJECTIVES: &[&str] = &[
    "Awesome",
    "Ergonomic",
    "Fantastic",
    "Generic",
    "Gorgeous",
    "Handcrafted",
    "Handmade",
    "Incredible",
    "Intelligent",
    "Licensed",
    "Practical",
    "Refined",
    "Rustic",
    "Sleek",
    "Small",
    "Tasty",
    "Unbranded",
];

const MATERIALS: &[&str] = &[
    "Concrete", "Cotton", "Fresh", "Frozen", "Granite", "Metal", "Plastic", "Rubber", "Soft",
    "Steel", "Wooden",
];

const PRODUCTS: &[&str] = &[
    "Bacon", "Ball", "Bike", "Car", "Chair", "Cheese", "Chicken", "Chips", "Computer", "Fish",
    "Gloves", "Hat", "Keyboard", "Mouse", "Pants", "Pizza", "Salad", "Sausages", "Shirt", "Shoes",
    "Soap", "Table", "Towels", "Tuna",
];

const MIN_PRICE_CENTS: i64 = 100;
const MAX_PRICE_CENTS: i64 = 50_000;
const MAX_UNITS_IN_STOCK: u16 = 500;

/// Category names drawn from the department list; product sets start empty.
pub fn category_rules() -> RuleSet<Category> {
    RuleSet::new()
        .rule_for(
            "name",
            |c: &mut Category, v| c.name = v,
            |ctx, _| Ok(pick(DEPARTMENTS, ctx.rng())),
        )
        .rule_for(
            "products",
            |c: &mut Category, v| c.products = v,
            |_, _| Ok(Default::default()),
        )
}

/// Product rules whose `category_id` is drawn uniformly from `category_ids`.
pub fn product_rules(category_ids: Vec<u32>) -> RuleSet<Product> {
    RuleSet::new()
        .rule_for(
            "name",
            |p: &mut Product, v| p.name = v,
            |ctx, _| {
                let rng = ctx.rng();
                let adjective = pick(ADJECTIVES, rng);
                let material = pick(MATERIALS, rng);
                let noun = pick(PRODUCTS, rng);
                Ok(format!("{adjective} {material} {noun}"))
            },
        )
        .rule_for(
            "category_id",
            |p: &mut Product, v| p.category_id = v,
            move |ctx, _| {
                category_ids
                    .choose(ctx.rng())
                    .copied()
                    .ok_or(GenerationError::UnresolvedReference {
                        shape: "product",
                        field: "category_id",
                    })
            },
        )
        .rule_for(
            "unit_price",
            |p: &mut Product, v| p.unit_price = v,
            |ctx, _| {
                let cents = ctx.rng().random_range(MIN_PRICE_CENTS..=MAX_PRICE_CENTS);
                Ok(Decimal::new(cents, 2))
            },
        )
        .rule_for(
            "units_in_stock",
            |p: &mut Product, v| p.units_in_stock = v,
            |ctx, _| Ok(ctx.rng().random_range(0..=MAX_UNITS_IN_STOCK)),
        )
}

/// Standalone categories, not linked to any product.
pub fn categories(count: i64, seeded: bool) -> Result<Vec<Category>, GenerationError> {
    EntityGenerator::new(category_rules()).generate(count, seeded)
}
