use std::collections::BTreeSet;

use rust_decimal::Decimal;

use fixtura_core::{Catalog, Category, Product};

fn product(id: u32, category_id: u32) -> Product {
    Product {
        id,
        name: "Desk".to_string(),
        category_id,
        unit_price: Decimal::new(1999, 2),
        units_in_stock: 5,
    }
}

#[test]
fn serializes_product_deterministically() {
    let json = serde_json::to_string_pretty(&product(1, 2)).expect("serialize product");
    let expected = r#"{
  "id": 1,
  "name": "Desk",
  "category_id": 2,
  "unit_price": "19.99",
  "units_in_stock": 5
}"#;
    assert_eq!(json, expected);
}

#[test]
fn catalog_json_relinks_on_read() {
    let catalog = Catalog::relink(
        vec![Category {
            id: 1,
            name: "Books".to_string(),
            products: BTreeSet::new(),
        }],
        vec![product(1, 1), product(2, 1)],
    )
    .expect("relink");

    let json = serde_json::to_string(&catalog).expect("serialize catalog");
    let back: Catalog = serde_json::from_str(&json).expect("deserialize catalog");

    assert_eq!(back, catalog);
    assert_eq!(back.categories()[0].products, BTreeSet::from([1, 2]));
}

#[test]
fn catalog_json_with_orphan_product_is_rejected() {
    let json = r#"{
  "categories": [{ "id": 1, "name": "Books", "products": [] }],
  "products": [{ "id": 1, "name": "Desk", "category_id": 9, "unit_price": "1.00", "units_in_stock": 0 }]
}"#;

    let result: Result<Catalog, _> = serde_json::from_str(json);
    assert!(result.is_err());
}
