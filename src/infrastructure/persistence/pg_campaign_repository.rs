//! PostgreSQL implementation of the campaign repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{Campaign, CampaignStatus, NewCampaign};
use crate::domain::repositories::{CampaignFilter, CampaignRepository};
use crate::error::AppError;

const CAMPAIGN_COLUMNS: &str = "id, name, advertiser, budget, start_date, end_date, status, \
                                impressions, clicks, created_at, updated_at";

/// Row shape of the `campaigns` table.
#[derive(Debug, sqlx::FromRow)]
struct CampaignRow {
    id: i64,
    name: String,
    advertiser: String,
    budget: f64,
    start_date: DateTime<Utc>,
    end_date: DateTime<Utc>,
    status: String,
    impressions: i64,
    clicks: i64,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<CampaignRow> for Campaign {
    type Error = AppError;

    fn try_from(row: CampaignRow) -> Result<Self, Self::Error> {
        let status = row.status.parse::<CampaignStatus>().map_err(|e| {
            tracing::error!(campaign_id = row.id, error = %e, "Stored campaign has invalid status");
            AppError::internal("Stored campaign has invalid status")
        })?;

        Ok(Campaign {
            id: row.id,
            name: row.name,
            advertiser: row.advertiser,
            budget: row.budget,
            start_date: row.start_date,
            end_date: row.end_date,
            status,
            impressions: row.impressions,
            clicks: row.clicks,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

/// PostgreSQL repository for campaign storage and retrieval.
///
/// Uses bound parameters for every value; the schema is created by the
/// embedded migrations in `migrations/`.
pub struct PgCampaignRepository {
    pool: Arc<PgPool>,
}

impl PgCampaignRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CampaignRepository for PgCampaignRepository {
    async fn create(&self, new_campaign: NewCampaign) -> Result<Campaign, AppError> {
        let sql = format!(
            r#"
            INSERT INTO campaigns
                (name, advertiser, budget, start_date, end_date, status, impressions, clicks)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING {CAMPAIGN_COLUMNS}
            "#
        );

        let row = sqlx::query_as::<_, CampaignRow>(&sql)
            .bind(&new_campaign.name)
            .bind(&new_campaign.advertiser)
            .bind(new_campaign.budget)
            .bind(new_campaign.start_date)
            .bind(new_campaign.end_date)
            .bind(new_campaign.status.as_str())
            .bind(new_campaign.impressions)
            .bind(new_campaign.clicks)
            .fetch_one(self.pool.as_ref())
            .await?;

        row.try_into()
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Campaign>, AppError> {
        let sql = format!("SELECT {CAMPAIGN_COLUMNS} FROM campaigns WHERE id = $1");

        let row = sqlx::query_as::<_, CampaignRow>(&sql)
            .bind(id)
            .fetch_optional(self.pool.as_ref())
            .await?;

        row.map(Campaign::try_from).transpose()
    }

    async fn list(&self, filter: CampaignFilter) -> Result<Vec<Campaign>, AppError> {
        let sql = format!(
            r#"
            SELECT {CAMPAIGN_COLUMNS}
            FROM campaigns
            WHERE ($1::text IS NULL OR status = $1)
            ORDER BY created_at DESC, id DESC
            LIMIT $2 OFFSET $3
            "#
        );

        let rows = sqlx::query_as::<_, CampaignRow>(&sql)
            .bind(filter.status.map(|s| s.as_str()))
            .bind(filter.limit)
            .bind(filter.offset)
            .fetch_all(self.pool.as_ref())
            .await?;

        rows.into_iter().map(Campaign::try_from).collect()
    }

    async fn count(&self, status: Option<CampaignStatus>) -> Result<i64, AppError> {
        let count: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM campaigns WHERE ($1::text IS NULL OR status = $1)",
        )
        .bind(status.map(|s| s.as_str()))
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(count)
    }

    async fn update_status(
        &self,
        id: i64,
        status: CampaignStatus,
    ) -> Result<Option<Campaign>, AppError> {
        let sql = format!(
            r#"
            UPDATE campaigns
            SET status = $2, updated_at = NOW()
            WHERE id = $1
            RETURNING {CAMPAIGN_COLUMNS}
            "#
        );

        let row = sqlx::query_as::<_, CampaignRow>(&sql)
            .bind(id)
            .bind(status.as_str())
            .fetch_optional(self.pool.as_ref())
            .await?;

        row.map(Campaign::try_from).transpose()
    }

    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1")
            .execute(self.pool.as_ref())
            .await?;

        Ok(())
    }
}
