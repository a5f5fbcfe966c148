use std::fs;
use std::path::PathBuf;

use fixtura_core::{Catalog, CatalogParts, EntityKind, Human, ProductListing, entity_schema};
use fixtura_generate::output::json::{
    categories_as_json, humans_as_json, products_as_json, to_json_pretty, users_as_json,
    write_json,
};
use fixtura_generate::RelationshipLinker;
use fixtura_generate::shapes::person::humans;
use serde_json::Value;
use sha2::{Digest, Sha256};

fn digest(json: &str) -> String {
    hex::encode(Sha256::digest(json.as_bytes()))
}

fn assert_valid(kind: EntityKind, json: &str) {
    let schema = serde_json::to_value(entity_schema(kind)).expect("schema to json");
    let compiled = jsonschema::JSONSchema::compile(&schema).expect("compile schema");
    let instance: Value = serde_json::from_str(json).expect("parse instance");
    assert!(compiled.is_valid(&instance), "{kind} output violates its schema");
}

#[test]
fn seeded_json_is_byte_identical() {
    let first = humans_as_json(10, true).expect("first");
    let second = humans_as_json(10, true).expect("second");
    assert_eq!(digest(&first), digest(&second));

    let first = products_as_json(10, true).expect("first");
    let second = products_as_json(10, true).expect("second");
    assert_eq!(digest(&first), digest(&second));
}

#[test]
fn humans_round_trip() {
    let people = humans(6, true).expect("humans");
    let json = to_json_pretty(&people).expect("serialize");
    let back: Vec<Human> = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(back, people);
}

#[test]
fn catalog_round_trip_relinks_categories() {
    let catalog = RelationshipLinker::default().link(20, true).expect("link");
    let json = to_json_pretty(&catalog).expect("serialize");

    let mut parts: CatalogParts = serde_json::from_str(&json).expect("parts");
    for category in &mut parts.categories {
        category.products.clear();
    }
    let relinked = Catalog::relink(parts.categories, parts.products).expect("relink");
    assert_eq!(relinked, catalog);

    let direct: Catalog = serde_json::from_str(&json).expect("catalog");
    assert_eq!(direct, catalog);
}

#[test]
fn products_json_names_category_without_embedding_it() {
    let json = products_as_json(5, true).expect("products");
    let value: Value = serde_json::from_str(&json).expect("parse");
    let items = value.as_array().expect("array");
    assert_eq!(items.len(), 5);
    for item in items {
        assert!(item.get("category_id").is_some());
        assert!(item.get("category_name").and_then(Value::as_str).is_some());
        assert!(item.get("category").is_none());
    }
}

#[test]
fn generated_json_matches_exported_schemas() {
    assert_valid(EntityKind::Human, &humans_as_json(5, true).expect("humans"));
    assert_valid(
        EntityKind::ProductListing,
        &products_as_json(5, true).expect("products"),
    );
    assert_valid(
        EntityKind::Category,
        &categories_as_json(5, true).expect("categories"),
    );
    assert_valid(EntityKind::User, &users_as_json(5, true).expect("users"));

    let catalog = RelationshipLinker::default().link(10, true).expect("link");
    assert_valid(
        EntityKind::Catalog,
        &to_json_pretty(&catalog).expect("catalog"),
    );
}

#[test]
fn product_listing_schema_requires_category_name() {
    let catalog = RelationshipLinker::default().link(4, true).expect("link");
    let bare = to_json_pretty(catalog.products()).expect("bare products");

    let schema = serde_json::to_value(entity_schema(EntityKind::ProductListing)).expect("schema");
    let compiled = jsonschema::JSONSchema::compile(&schema).expect("compile schema");
    let instance: Value = serde_json::from_str(&bare).expect("parse");
    assert!(!compiled.is_valid(&instance));

    let json = products_as_json(4, true).expect("products");
    let listings: Vec<ProductListing> = serde_json::from_str(&json).expect("listings");
    let expected: Vec<ProductListing> = catalog
        .linked_products()
        .into_iter()
        .map(ProductListing::from)
        .collect();
    assert_eq!(listings, expected);
}

#[test]
fn write_json_reports_bytes_written() {
    let path = temp_path("users");
    let users = fixtura_generate::shapes::user::users(3, true).expect("users");
    let bytes = write_json(&path, &users).expect("write");

    let contents = fs::read_to_string(&path).expect("read back");
    assert_eq!(bytes, contents.len() as u64);
    assert!(contents.ends_with('\n'));
    fs::remove_file(&path).ok();
}

fn temp_path(label: &str) -> PathBuf {
    let mut path = std::env::temp_dir();
    path.push(format!("fixtura_generate_{label}_{}.json", uuid::Uuid::new_v4()));
    path
}
