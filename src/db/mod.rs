use std::str::FromStr;

use color_eyre::Result;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};

pub mod models;
pub use models::*;

mod category;
mod question;
mod schema;

/// Cloneable handle to the question store; clones share one connection pool.
#[derive(Clone)]
pub struct Db {
    pool: SqlitePool,
}

impl Db {
    /// Connects to the SQLite database at `url`, creating the file if needed,
    /// then makes sure the tables exist and the categories are seeded.
    pub async fn new(url: &str) -> Result<Self> {
        let options = SqliteConnectOptions::from_str(url)?
            .create_if_missing(true)
            .foreign_keys(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect_with(options)
            .await?;

        let one: i32 = sqlx::query_scalar("SELECT 1").fetch_one(&pool).await?;
        if one != 1 {
            color_eyre::eyre::bail!("connection check failed");
        }

        schema::create_schema(&pool).await?;
        schema::seed_categories(&pool).await?;

        tracing::info!("database connection has been verified");

        Ok(Self { pool })
    }
}
