use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

use crate::common::ChapterId;

/// Chapter - a local organising group that runs workshops
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Chapter {
    pub id: ChapterId,
    pub name: String,
    pub city: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Chapter {
    /// Find chapter by ID
    pub async fn find_by_id(id: ChapterId, pool: &PgPool) -> Result<Self> {
        sqlx::query_as::<_, Self>("SELECT * FROM chapters WHERE id = $1")
            .bind(id)
            .fetch_one(pool)
            .await
            .map_err(Into::into)
    }

    /// Insert new chapter
    pub async fn create(name: &str, city: &str, pool: &PgPool) -> Result<Self> {
        sqlx::query_as::<_, Self>(
            "INSERT INTO chapters (id, name, city)
             VALUES ($1, $2, $3)
             RETURNING *",
        )
        .bind(ChapterId::new())
        .bind(name)
        .bind(city)
        .fetch_one(pool)
        .await
        .map_err(Into::into)
    }
}
