use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

use crate::common::SponsorId;

/// Sponsor - a company hosting physical workshops.
///
/// `seats` and `coach_spots` bound the capacity of any physical workshop the
/// sponsor hosts; virtual workshops carry their own figures instead.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Sponsor {
    pub id: SponsorId,
    pub name: String,
    pub address: String,
    pub seats: i32,
    pub coach_spots: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Sponsor {
    /// Find sponsor by ID
    pub async fn find_by_id(id: SponsorId, pool: &PgPool) -> Result<Self> {
        sqlx::query_as::<_, Self>("SELECT * FROM sponsors WHERE id = $1")
            .bind(id)
            .fetch_one(pool)
            .await
            .map_err(Into::into)
    }

    /// Insert new sponsor
    pub async fn create(
        name: &str,
        address: &str,
        seats: i32,
        coach_spots: i32,
        pool: &PgPool,
    ) -> Result<Self> {
        sqlx::query_as::<_, Self>(
            "INSERT INTO sponsors (id, name, address, seats, coach_spots)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING *",
        )
        .bind(SponsorId::new())
        .bind(name)
        .bind(address)
        .bind(seats)
        .bind(coach_spots)
        .fetch_one(pool)
        .await
        .map_err(Into::into)
    }
}
