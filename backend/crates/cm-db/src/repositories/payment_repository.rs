use crate::Result as DbErrorResult;
use crate::repositories::row::{
    parse_date, parse_enum, parse_opt_timestamp, parse_timestamp, parse_uuid,
};

use cm_core::{Payment, PaymentStatus};

use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use uuid::Uuid;

pub struct PaymentRepository {
    pool: SqlitePool,
}

impl PaymentRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, payment: &Payment) -> DbErrorResult<()> {
        sqlx::query(
            r#"
                INSERT INTO payments (
                    id, organization_id, athlete_id, description, amount_cents,
                    currency, status, due_date, paid_at, method,
                    created_at, updated_at
                ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(payment.id.to_string())
        .bind(payment.organization_id.to_string())
        .bind(payment.athlete_id.to_string())
        .bind(&payment.description)
        .bind(payment.amount_cents)
        .bind(&payment.currency)
        .bind(payment.status.as_str())
        .bind(payment.due_date.to_string())
        .bind(payment.paid_at.map(|dt| dt.timestamp()))
        .bind(&payment.method)
        .bind(payment.created_at.timestamp())
        .bind(payment.updated_at.timestamp())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn find_by_id(
        &self,
        organization_id: Uuid,
        id: Uuid,
    ) -> DbErrorResult<Option<Payment>> {
        let row = sqlx::query("SELECT * FROM payments WHERE id = ? AND organization_id = ?")
            .bind(id.to_string())
            .bind(organization_id.to_string())
            .fetch_optional(&self.pool)
            .await?;

        row.as_ref().map(map_payment).transpose()
    }

    pub async fn find_all(
        &self,
        organization_id: Uuid,
        status: Option<PaymentStatus>,
    ) -> DbErrorResult<Vec<Payment>> {
        let rows = match status {
            Some(status) => {
                sqlx::query(
                    r#"
                        SELECT * FROM payments
                        WHERE organization_id = ? AND status = ?
                        ORDER BY due_date DESC
                    "#,
                )
                .bind(organization_id.to_string())
                .bind(status.as_str())
                .fetch_all(&self.pool)
                .await?
            }
            None => {
                sqlx::query(
                    "SELECT * FROM payments WHERE organization_id = ? ORDER BY due_date DESC",
                )
                .bind(organization_id.to_string())
                .fetch_all(&self.pool)
                .await?
            }
        };

        rows.iter().map(map_payment).collect()
    }

    pub async fn find_by_athlete(
        &self,
        organization_id: Uuid,
        athlete_id: Uuid,
    ) -> DbErrorResult<Vec<Payment>> {
        let rows = sqlx::query(
            r#"
                SELECT * FROM payments
                WHERE organization_id = ? AND athlete_id = ?
                ORDER BY due_date DESC
            "#,
        )
        .bind(organization_id.to_string())
        .bind(athlete_id.to_string())
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(map_payment).collect()
    }

    pub async fn count_by_status(
        &self,
        organization_id: Uuid,
        status: PaymentStatus,
    ) -> DbErrorResult<i64> {
        let row = sqlx::query(
            "SELECT COUNT(*) AS n FROM payments WHERE organization_id = ? AND status = ?",
        )
        .bind(organization_id.to_string())
        .bind(status.as_str())
        .fetch_one(&self.pool)
        .await?;

        Ok(row.try_get("n")?)
    }

    pub async fn update(&self, payment: &Payment) -> DbErrorResult<()> {
        sqlx::query(
            r#"
                UPDATE payments
                SET description = ?, amount_cents = ?, currency = ?, status = ?,
                    due_date = ?, paid_at = ?, method = ?, updated_at = ?
                WHERE id = ? AND organization_id = ?
            "#,
        )
        .bind(&payment.description)
        .bind(payment.amount_cents)
        .bind(&payment.currency)
        .bind(payment.status.as_str())
        .bind(payment.due_date.to_string())
        .bind(payment.paid_at.map(|dt| dt.timestamp()))
        .bind(&payment.method)
        .bind(payment.updated_at.timestamp())
        .bind(payment.id.to_string())
        .bind(payment.organization_id.to_string())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn delete(&self, organization_id: Uuid, id: Uuid) -> DbErrorResult<()> {
        sqlx::query("DELETE FROM payments WHERE id = ? AND organization_id = ?")
            .bind(id.to_string())
            .bind(organization_id.to_string())
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}

fn map_payment(row: &SqliteRow) -> DbErrorResult<Payment> {
    let id: String = row.try_get("id")?;
    let organization_id: String = row.try_get("organization_id")?;
    let athlete_id: String = row.try_get("athlete_id")?;
    let status: String = row.try_get("status")?;
    let due_date: String = row.try_get("due_date")?;

    Ok(Payment {
        id: parse_uuid(&id, "payments.id")?,
        organization_id: parse_uuid(&organization_id, "payments.organization_id")?,
        athlete_id: parse_uuid(&athlete_id, "payments.athlete_id")?,
        description: row.try_get("description")?,
        amount_cents: row.try_get("amount_cents")?,
        currency: row.try_get("currency")?,
        status: parse_enum(&status, "payments.status")?,
        due_date: parse_date(&due_date, "payments.due_date")?,
        paid_at: parse_opt_timestamp(row.try_get("paid_at")?, "payments.paid_at")?,
        method: row.try_get("method")?,
        created_at: parse_timestamp(row.try_get("created_at")?, "payments.created_at")?,
        updated_at: parse_timestamp(row.try_get("updated_at")?, "payments.updated_at")?,
    })
}
