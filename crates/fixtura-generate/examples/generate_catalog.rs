use std::env;
use std::path::PathBuf;

use fixtura_generate::output::json::write_json;
use fixtura_generate::{GenerateOptions, RelationshipLinker};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let mut args = env::args().skip(1);
    let mut count: i64 = 20;
    let mut out: Option<PathBuf> = None;
    let mut options = GenerateOptions::default();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--count" => count = args.next().ok_or("missing --count value")?.parse()?,
            "--categories" => {
                options.category_count = args.next().ok_or("missing --categories value")?.parse()?
            }
            "--random" => options.seeded = false,
            "--out" => out = args.next().map(PathBuf::from),
            _ => return Err(format!("unexpected argument '{arg}'").into()),
        }
    }

    let catalog = RelationshipLinker::from(&options).link(count, options.seeded)?;
    match out {
        Some(path) => {
            let bytes = write_json(&path, &catalog)?;
            println!("wrote {bytes} bytes to {}", path.display());
        }
        None => {
            for category in catalog.categories() {
                println!("{} ({} products)", category.name, category.products.len());
                for product in catalog.products_of(category) {
                    println!("  {:<40} {:>8}", product.name, product.unit_price);
                }
            }
        }
    }
    Ok(())
}
