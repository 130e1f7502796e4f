//! Apply pending database migrations.

use anyhow::Context;

/// Connect using `DATABASE_URL` and run the embedded migrations.
pub async fn run() -> anyhow::Result<()> {
    let database_url = std::env::var("DATABASE_URL").context("DATABASE_URL must be set")?;

    tracing::info!("Connecting to database");
    let pool = shelf_db::create_pool(&database_url)
        .await
        .context("Failed to connect to database")?;

    tracing::info!("Applying migrations");
    shelf_db::run_migrations(&pool)
        .await
        .context("Failed to run migrations")?;

    tracing::info!("Migrations applied");
    Ok(())
}
