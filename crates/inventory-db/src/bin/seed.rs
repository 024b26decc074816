//! # Seed Data Generator
//!
//! Populates a database with demo items for development.
//!
//! ## Usage
//! ```bash
//! # Generate 200 items (default)
//! cargo run -p inventory-db --bin seed
//!
//! # Generate custom amount into a specific file
//! cargo run -p inventory-db --bin seed -- --count 1000 --db ./inventory_dev.db
//! ```
//!
//! Items cycle through a few workshop categories. Numbers look like
//! `TL-0007`, quantities range from 0 to 49.

use std::env;

use inventory_core::ItemFields;
use inventory_db::{Database, DbConfig};

/// Category name, number prefix, item names
const CATEGORIES: &[(&str, &str, &[&str])] = &[
    (
        "Tools",
        "TL",
        &["Hammer", "Screwdriver", "Wrench", "Pliers", "Hand Saw", "Chisel"],
    ),
    (
        "Fasteners",
        "FS",
        &["Wood Screws", "Machine Bolts", "Hex Nuts", "Washers", "Wall Anchors"],
    ),
    (
        "Paint",
        "PT",
        &["Primer", "Gloss White", "Matte Black", "Brush Set", "Roller"],
    ),
    (
        "Electrical",
        "EL",
        &["Cable 2.5mm", "Wall Socket", "Switch", "Fuse 16A", "Junction Box"],
    ),
    (
        "Garden",
        "GD",
        &["Rake", "Shovel", "Hose 20m", "Pruning Shears", "Watering Can"],
    ),
];

const DEFAULT_COUNT: usize = 200;
const DEFAULT_DB_PATH: &str = "./inventory_dev.db";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = env::args().collect();

    let mut count = DEFAULT_COUNT;
    let mut db_path = String::from(DEFAULT_DB_PATH);

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--count" | "-c" => {
                if i + 1 < args.len() {
                    count = args[i + 1].parse().unwrap_or(DEFAULT_COUNT);
                    i += 1;
                }
            }
            "--db" | "-d" => {
                if i + 1 < args.len() {
                    db_path = args[i + 1].clone();
                    i += 1;
                }
            }
            "--help" | "-h" => {
                println!("Inventory Seed Data Generator");
                println!();
                println!("Usage: seed [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -c, --count <N>    Number of items to generate (default: {DEFAULT_COUNT})");
                println!("  -d, --db <PATH>    Database file path (default: {DEFAULT_DB_PATH})");
                println!("  -h, --help         Show this help message");
                return Ok(());
            }
            _ => {}
        }
        i += 1;
    }

    println!("Inventory Seed Data Generator");
    println!("=============================");
    println!("Database: {}", db_path);
    println!("Items:    {}", count);
    println!();

    let db = Database::new(DbConfig::new(&db_path)).await?;
    println!("✓ Connected to database");

    let existing = db.items().count().await?;
    if existing > 0 {
        println!("⚠ Database already has {} items", existing);
        println!("  Skipping seed to avoid duplicates.");
        println!("  Delete the database file to regenerate.");
        db.close().await;
        return Ok(());
    }

    let start = std::time::Instant::now();
    let mut generated = 0;

    for seed in 0..count {
        let fields = generate_item(seed);
        if let Err(e) = db.items().insert(&fields).await {
            eprintln!("Failed to insert {}: {}", fields.number, e);
            continue;
        }
        generated += 1;
    }

    println!("✓ Generated {} items in {:?}", generated, start.elapsed());

    let categories = db.items().distinct_categories().await?;
    println!("  Categories: {}", categories.join(", "));

    db.close().await;
    println!();
    println!("✓ Seed complete!");

    Ok(())
}

/// Generates one demo item. Deterministic for a given seed.
fn generate_item(seed: usize) -> ItemFields {
    let (category, prefix, names) = CATEGORIES[seed % CATEGORIES.len()];
    let name = names[(seed / CATEGORIES.len()) % names.len()];
    let quantity = ((seed * 7) % 50) as i64;

    ItemFields::new(format!("{}-{:04}", prefix, seed + 1), category, name, quantity)
}
