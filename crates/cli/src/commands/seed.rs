//! Reset the catalog to randomized sample data.
//!
//! Clears the products table, then inserts generated products with names
//! of the form "adjective material product", a price between 1.00 and
//! 999.99, a department-style category, and a coin-flip stock flag.

use anyhow::Context;
use rand::Rng;
use rust_decimal::Decimal;

use shelf_db::models::product::CreateProduct;
use shelf_db::repositories::ProductRepo;
use shelf_db::DbPool;

const ADJECTIVES: &[&str] = &[
    "Small", "Ergonomic", "Rustic", "Intelligent", "Gorgeous", "Incredible", "Fantastic",
    "Practical", "Sleek", "Awesome", "Handcrafted", "Refined",
];

const MATERIALS: &[&str] = &[
    "Steel", "Wooden", "Concrete", "Plastic", "Cotton", "Granite", "Rubber", "Metal", "Soft",
    "Bronze",
];

const PRODUCTS: &[&str] = &[
    "Chair", "Car", "Computer", "Keyboard", "Mouse", "Bike", "Ball", "Gloves", "Pants", "Shirt",
    "Table", "Shoes", "Hat", "Towels", "Lamp",
];

/// Department names used as categories.
const CATEGORIES: &[&str] = &[
    "Books", "Movies", "Music", "Games", "Electronics", "Home", "Garden", "Tools", "Grocery",
    "Health", "Toys", "Clothing", "Sports", "Outdoors", "Automotive",
];

/// Wipe the products table and insert `count` random products.
///
/// Runs migrations first so seeding works against a fresh database.
pub async fn run(count: usize) -> anyhow::Result<()> {
    let database_url = std::env::var("DATABASE_URL").context("DATABASE_URL must be set")?;

    let pool = shelf_db::create_pool(&database_url)
        .await
        .context("Failed to connect to database")?;

    shelf_db::run_migrations(&pool)
        .await
        .context("Failed to run migrations")?;

    let cleared = ProductRepo::delete_all(&pool)
        .await
        .context("Failed to clear products")?;
    tracing::info!(cleared, "Cleared existing products");

    insert_random(&pool, count).await?;

    tracing::info!(count, "Seeding complete");
    Ok(())
}

async fn insert_random(pool: &DbPool, count: usize) -> anyhow::Result<()> {
    let mut rng = rand::rng();

    for _ in 0..count {
        let input = CreateProduct {
            name: random_name(&mut rng),
            price: random_price(&mut rng),
            category: pick(&mut rng, CATEGORIES).to_string(),
            in_stock: rng.random_bool(0.5),
        };
        ProductRepo::create(pool, &input)
            .await
            .context("Failed to insert product")?;
    }
    Ok(())
}

fn random_name(rng: &mut impl Rng) -> String {
    format!(
        "{} {} {}",
        pick(rng, ADJECTIVES),
        pick(rng, MATERIALS),
        pick(rng, PRODUCTS),
    )
}

/// A price between 1.00 and 999.99 with exactly two decimal places.
fn random_price(rng: &mut impl Rng) -> Decimal {
    Decimal::new(rng.random_range(100..100_000), 2)
}

fn pick<'a>(rng: &mut impl Rng, words: &'a [&'a str]) -> &'a str {
    words[rng.random_range(0..words.len())]
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn generated_names_use_the_word_lists() {
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..20 {
            let name = random_name(&mut rng);
            let words: Vec<&str> = name.split(' ').collect();
            assert_eq!(words.len(), 3);
            assert!(ADJECTIVES.contains(&words[0]));
            assert!(MATERIALS.contains(&words[1]));
            assert!(PRODUCTS.contains(&words[2]));
        }
    }

    #[test]
    fn generated_prices_stay_in_range() {
        let mut rng = StdRng::seed_from_u64(7);
        let min = Decimal::new(100, 2);
        let max = Decimal::new(99_999, 2);

        for _ in 0..100 {
            let price = random_price(&mut rng);
            assert!(price >= min && price <= max, "price out of range: {price}");
        }
    }
}
