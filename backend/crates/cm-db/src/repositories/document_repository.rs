use crate::Result as DbErrorResult;
use crate::repositories::row::{parse_enum, parse_opt_date, parse_timestamp, parse_uuid};

use cm_core::Document;

use chrono::NaiveDate;
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use uuid::Uuid;

pub struct DocumentRepository {
    pool: SqlitePool,
}

impl DocumentRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, document: &Document) -> DbErrorResult<()> {
        sqlx::query(
            r#"
                INSERT INTO documents (
                    id, organization_id, athlete_id, name, category,
                    issued_at, expires_at, created_at, updated_at
                ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(document.id.to_string())
        .bind(document.organization_id.to_string())
        .bind(document.athlete_id.to_string())
        .bind(&document.name)
        .bind(document.category.as_str())
        .bind(document.issued_at.map(|d| d.to_string()))
        .bind(document.expires_at.map(|d| d.to_string()))
        .bind(document.created_at.timestamp())
        .bind(document.updated_at.timestamp())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn find_by_id(
        &self,
        organization_id: Uuid,
        id: Uuid,
    ) -> DbErrorResult<Option<Document>> {
        let row = sqlx::query("SELECT * FROM documents WHERE id = ? AND organization_id = ?")
            .bind(id.to_string())
            .bind(organization_id.to_string())
            .fetch_optional(&self.pool)
            .await?;

        row.as_ref().map(map_document).transpose()
    }

    pub async fn find_all(&self, organization_id: Uuid) -> DbErrorResult<Vec<Document>> {
        let rows = sqlx::query(
            "SELECT * FROM documents WHERE organization_id = ? ORDER BY expires_at IS NULL, expires_at",
        )
        .bind(organization_id.to_string())
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(map_document).collect()
    }

    pub async fn find_by_athlete(
        &self,
        organization_id: Uuid,
        athlete_id: Uuid,
    ) -> DbErrorResult<Vec<Document>> {
        let rows = sqlx::query(
            r#"
                SELECT * FROM documents
                WHERE organization_id = ? AND athlete_id = ?
                ORDER BY expires_at IS NULL, expires_at
            "#,
        )
        .bind(organization_id.to_string())
        .bind(athlete_id.to_string())
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(map_document).collect()
    }

    /// Documents expiring on or before `before` (and not yet expired
    /// before `from`), oldest expiry first
    pub async fn find_expiring(
        &self,
        organization_id: Uuid,
        from: NaiveDate,
        before: NaiveDate,
    ) -> DbErrorResult<Vec<Document>> {
        let rows = sqlx::query(
            r#"
                SELECT * FROM documents
                WHERE organization_id = ? AND expires_at IS NOT NULL
                  AND expires_at >= ? AND expires_at <= ?
                ORDER BY expires_at
            "#,
        )
        .bind(organization_id.to_string())
        .bind(from.to_string())
        .bind(before.to_string())
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(map_document).collect()
    }

    pub async fn count_expiring(
        &self,
        organization_id: Uuid,
        from: NaiveDate,
        before: NaiveDate,
    ) -> DbErrorResult<i64> {
        let row = sqlx::query(
            r#"
                SELECT COUNT(*) AS n FROM documents
                WHERE organization_id = ? AND expires_at IS NOT NULL
                  AND expires_at >= ? AND expires_at <= ?
            "#,
        )
        .bind(organization_id.to_string())
        .bind(from.to_string())
        .bind(before.to_string())
        .fetch_one(&self.pool)
        .await?;

        Ok(row.try_get("n")?)
    }

    pub async fn update(&self, document: &Document) -> DbErrorResult<()> {
        sqlx::query(
            r#"
                UPDATE documents
                SET name = ?, category = ?, issued_at = ?, expires_at = ?, updated_at = ?
                WHERE id = ? AND organization_id = ?
            "#,
        )
        .bind(&document.name)
        .bind(document.category.as_str())
        .bind(document.issued_at.map(|d| d.to_string()))
        .bind(document.expires_at.map(|d| d.to_string()))
        .bind(document.updated_at.timestamp())
        .bind(document.id.to_string())
        .bind(document.organization_id.to_string())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn delete(&self, organization_id: Uuid, id: Uuid) -> DbErrorResult<()> {
        sqlx::query("DELETE FROM documents WHERE id = ? AND organization_id = ?")
            .bind(id.to_string())
            .bind(organization_id.to_string())
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}

fn map_document(row: &SqliteRow) -> DbErrorResult<Document> {
    let id: String = row.try_get("id")?;
    let organization_id: String = row.try_get("organization_id")?;
    let athlete_id: String = row.try_get("athlete_id")?;
    let category: String = row.try_get("category")?;
    let issued_at: Option<String> = row.try_get("issued_at")?;
    let expires_at: Option<String> = row.try_get("expires_at")?;

    Ok(Document {
        id: parse_uuid(&id, "documents.id")?,
        organization_id: parse_uuid(&organization_id, "documents.organization_id")?,
        athlete_id: parse_uuid(&athlete_id, "documents.athlete_id")?,
        name: row.try_get("name")?,
        category: parse_enum(&category, "documents.category")?,
        issued_at: parse_opt_date(issued_at.as_deref(), "documents.issued_at")?,
        expires_at: parse_opt_date(expires_at.as_deref(), "documents.expires_at")?,
        created_at: parse_timestamp(row.try_get("created_at")?, "documents.created_at")?,
        updated_at: parse_timestamp(row.try_get("updated_at")?, "documents.updated_at")?,
    })
}
