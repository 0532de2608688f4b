use color_eyre::Result;

use super::models::{NewQuestion, Question};
use super::Db;

impl Db {
    /// Inserts a question and returns its id, or `None` when the category
    /// does not exist. The category check and the insert are one statement.
    pub async fn create_question(&self, new: &NewQuestion) -> Result<Option<i64>> {
        let id: Option<i64> = sqlx::query_scalar(
            r#"
            INSERT INTO questions (question, answer, category, difficulty)
            SELECT ?1, ?2, ?3, ?4
            WHERE EXISTS (SELECT 1 FROM categories WHERE id = ?3)
            RETURNING id
            "#,
        )
        .bind(&new.question)
        .bind(&new.answer)
        .bind(new.category)
        .bind(new.difficulty)
        .fetch_optional(&self.pool)
        .await?;

        if let Some(id) = id {
            tracing::info!("new question created with id: {id}");
        }

        Ok(id)
    }

    /// Returns `false` when no question with `question_id` existed.
    pub async fn delete_question(&self, question_id: i64) -> Result<bool> {
        let result = sqlx::query("DELETE FROM questions WHERE id = ?1")
            .bind(question_id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    pub async fn get_question(&self, question_id: i64) -> Result<Option<Question>> {
        let question = sqlx::query_as::<_, Question>(
            "SELECT id, question, answer, category, difficulty FROM questions WHERE id = ?1",
        )
        .bind(question_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(question)
    }

    /// One page of questions in id order, plus the total count over all categories.
    pub async fn questions_page(&self, offset: i64, limit: i64) -> Result<(Vec<Question>, i64)> {
        let questions = sqlx::query_as::<_, Question>(
            r#"
            SELECT id, question, answer, category, difficulty FROM questions
            ORDER BY id
            LIMIT ?1 OFFSET ?2
            "#,
        )
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;

        let total = self.questions_count().await?;

        Ok((questions, total))
    }

    pub async fn questions_count(&self) -> Result<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM questions")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }

    pub async fn questions_by_category(&self, category_id: i64) -> Result<Vec<Question>> {
        let questions = sqlx::query_as::<_, Question>(
            r#"
            SELECT id, question, answer, category, difficulty FROM questions
            WHERE category = ?1
            ORDER BY id
            "#,
        )
        .bind(category_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(questions)
    }

    /// Questions whose text contains `term`, ignoring case. An empty term matches all.
    ///
    /// Case folding happens here rather than in SQL: SQLite's `lower()` only
    /// folds ASCII letters.
    pub async fn search_questions(&self, term: &str) -> Result<Vec<Question>> {
        let questions = sqlx::query_as::<_, Question>(
            "SELECT id, question, answer, category, difficulty FROM questions ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;

        let needle = term.to_lowercase();
        Ok(questions
            .into_iter()
            .filter(|q| q.question.to_lowercase().contains(&needle))
            .collect())
    }

    /// Questions a quiz may draw from: one category, or every question when `None`.
    pub async fn quiz_candidates(&self, category_id: Option<i64>) -> Result<Vec<Question>> {
        match category_id {
            Some(id) => self.questions_by_category(id).await,
            None => {
                let questions = sqlx::query_as::<_, Question>(
                    "SELECT id, question, answer, category, difficulty FROM questions ORDER BY id",
                )
                .fetch_all(&self.pool)
                .await?;

                Ok(questions)
            }
        }
    }
}
