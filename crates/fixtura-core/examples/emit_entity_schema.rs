use fixtura_core::{EntityKind, entity_schema};

fn main() {
    let schema = entity_schema(EntityKind::Catalog);
    let json = serde_json::to_string_pretty(&schema).expect("serialize json schema");
    println!("{json}");
}
