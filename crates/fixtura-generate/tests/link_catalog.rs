use std::collections::BTreeSet;

use fixtura_generate::{GenerateOptions, GenerationError, RandomSource, RelationshipLinker};

#[test]
fn linked_catalog_keeps_referential_integrity() {
    let catalog = RelationshipLinker::new(5).link(20, true).expect("link catalog");

    assert_eq!(catalog.categories().len(), 5);
    assert_eq!(catalog.products().len(), 20);

    let category_ids: BTreeSet<u32> = catalog.categories().iter().map(|c| c.id).collect();
    assert_eq!(category_ids, (1..=5).collect());

    for product in catalog.products() {
        assert!(category_ids.contains(&product.category_id));
        let category = catalog.category_of(product).expect("resolved category");
        assert!(category.products.contains(&product.id));
    }

    for category in catalog.categories() {
        let expected: BTreeSet<u32> = catalog
            .products()
            .iter()
            .filter(|product| product.category_id == category.id)
            .map(|product| product.id)
            .collect();
        assert_eq!(category.products, expected);
    }

    let total: usize = catalog.categories().iter().map(|c| c.products.len()).sum();
    assert_eq!(total, 20);
}

#[test]
fn seeded_catalogs_are_equal() {
    let linker = RelationshipLinker::default();
    assert_eq!(linker.category_count(), 5);
    assert_eq!(
        linker.link(12, true).expect("first"),
        linker.link(12, true).expect("second")
    );
}

#[test]
fn no_products_leaves_categories_empty() {
    let catalog = RelationshipLinker::default().link(0, true).expect("link");
    assert_eq!(catalog.categories().len(), 5);
    assert!(catalog.products().is_empty());
    assert!(catalog.categories().iter().all(|c| c.products.is_empty()));

    let catalog = RelationshipLinker::default().link(-4, false).expect("link");
    assert!(catalog.products().is_empty());
}

#[test]
fn products_without_categories_are_unresolved() {
    let err = RelationshipLinker::new(0).link(3, true).unwrap_err();
    assert!(matches!(
        err,
        GenerationError::UnresolvedReference {
            field: "category_id",
            ..
        }
    ));

    let catalog = RelationshipLinker::new(0).link(0, true).expect("empty catalog");
    assert!(catalog.categories().is_empty());
}

#[test]
fn category_count_comes_from_options() {
    let options = GenerateOptions {
        category_count: 2,
        ..GenerateOptions::default()
    };
    let catalog = RelationshipLinker::from(&options)
        .link_with(10, &mut RandomSource::install(Some(5)))
        .expect("link");
    assert_eq!(catalog.categories().len(), 2);
    assert!(catalog.products().iter().all(|p| p.category_id <= 2));
}

#[test]
fn linked_products_carry_category_names() {
    let catalog = RelationshipLinker::default().link(8, true).expect("link");
    for linked in catalog.linked_products() {
        assert_eq!(linked.category.id, linked.product.category_id);
        assert_eq!(linked.category_name, linked.category.name);
    }
}
