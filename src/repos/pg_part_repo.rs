/*
 * Responsibility
 * - parts テーブル向け SQLx 操作
 * - PgPool を受け取り CRUD を提供
 * - 1 操作 = 1 statement (途中状態を他のリクエストに見せない)
 *
 * Table
 *   parts ("partId" BIGSERIAL PRIMARY KEY, name TEXT NOT NULL, code TEXT NULL)
 */
use async_trait::async_trait;
use sqlx::PgPool;

use crate::repos::error::RepoResult;
use crate::repos::part_repo::{NewPart, Part, PartRepo};

#[derive(Clone, Debug)]
pub struct PgPartRepo {
    db: PgPool,
}

impl PgPartRepo {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl PartRepo for PgPartRepo {
    async fn list(&self) -> RepoResult<Vec<Part>> {
        let rows = sqlx::query_as::<_, Part>(
            r#"
            SELECT "partId", name, code
            FROM parts
            ORDER BY "partId" ASC
            "#,
        )
        .fetch_all(&self.db)
        .await?;

        Ok(rows)
    }

    async fn get(&self, id: i64) -> RepoResult<Option<Part>> {
        let row = sqlx::query_as::<_, Part>(
            r#"
            SELECT "partId", name, code
            FROM parts
            WHERE "partId" = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.db)
        .await?;

        Ok(row)
    }

    async fn insert(&self, part: NewPart) -> RepoResult<Part> {
        let row = sqlx::query_as::<_, Part>(
            r#"
            INSERT INTO parts (name, code)
            VALUES ($1, $2)
            RETURNING "partId", name, code
            "#,
        )
        .bind(&part.name)
        .bind(part.code.as_deref())
        .fetch_one(&self.db)
        .await?;

        Ok(row)
    }

    async fn update(&self, id: i64, part: NewPart) -> RepoResult<Option<Part>> {
        // Full replacement: an absent code clears the column.
        let row = sqlx::query_as::<_, Part>(
            r#"
            UPDATE parts
            SET
                name = $2,
                code = $3
            WHERE "partId" = $1
            RETURNING "partId", name, code
            "#,
        )
        .bind(id)
        .bind(&part.name)
        .bind(part.code.as_deref())
        .fetch_optional(&self.db)
        .await?;

        Ok(row)
    }

    async fn delete(&self, id: i64) -> RepoResult<bool> {
        let result = sqlx::query(
            r#"
            DELETE FROM parts
            WHERE "partId" = $1
            "#,
        )
        .bind(id)
        .execute(&self.db)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn ping(&self) -> RepoResult<()> {
        sqlx::query("SELECT 1").execute(&self.db).await?;
        Ok(())
    }
}
