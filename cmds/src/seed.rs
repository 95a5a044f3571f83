use anyhow::Context;
use entity::categories;
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, EntityTrait, PaginatorTrait, Set};
use std::{env, process::ExitCode};
use tracing::{error, info, level_filters::LevelFilter};
use tracing_subscriber::EnvFilter;

const CATEGORIES: [&str; 6] = [
    "Science",
    "Art",
    "Geography",
    "History",
    "Entertainment",
    "Sports",
];

/// Applies pending migrations and inserts the default categories into an empty table.
async fn seed() -> anyhow::Result<()> {
    let url = env::var("DATABASE_URL").context("DATABASE_URL is not set")?;
    let db = Database::connect(ConnectOptions::new(url)).await?;

    Migrator::up(&db, None)
        .await
        .context("failed to apply migrations")?;

    let existing = categories::Entity::find().count(&db).await?;

    if existing > 0 {
        info!("{existing} categories exist already, skipping");
        return Ok(());
    }

    let models = CATEGORIES.map(|kind| categories::ActiveModel {
        kind: Set(kind.to_owned()),
        ..Default::default()
    });

    categories::Entity::insert_many(models).exec(&db).await?;

    info!("inserted {} categories", CATEGORIES.len());

    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .from_env_lossy(),
        )
        .init();

    match seed().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err:#}");
            ExitCode::FAILURE
        }
    }
}
