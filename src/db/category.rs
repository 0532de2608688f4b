use std::collections::BTreeMap;

use color_eyre::Result;

use super::models::Category;
use super::Db;

impl Db {
    /// All categories keyed by id.
    pub async fn categories(&self) -> Result<BTreeMap<i64, String>> {
        let categories = sqlx::query_as::<_, Category>("SELECT id, type FROM categories ORDER BY id")
            .fetch_all(&self.pool)
            .await?;

        Ok(categories.into_iter().map(|c| (c.id, c.kind)).collect())
    }

    pub async fn category_exists(&self, category_id: i64) -> Result<bool> {
        let exists: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM categories WHERE id = ?1)")
                .bind(category_id)
                .fetch_one(&self.pool)
                .await?;

        Ok(exists)
    }
}
