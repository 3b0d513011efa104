use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use typed_builder::TypedBuilder;

use crate::common::{ChapterId, MemberId, SponsorId, WorkshopId};
use crate::domains::member::Member;

/// Workshop - a scheduled session run by a chapter at a sponsor's venue
/// (or online when `is_virtual` is set).
///
/// `student_spaces`/`coach_spaces` only bound capacity for virtual workshops;
/// physical capacity comes from the hosting sponsor.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Workshop {
    pub id: WorkshopId,
    pub chapter_id: ChapterId,
    pub sponsor_id: SponsorId,
    pub starts_at: DateTime<Utc>,
    pub ends_at: Option<DateTime<Utc>>,
    pub is_virtual: bool,
    pub student_spaces: i32,
    pub coach_spaces: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Creation parameters
#[derive(TypedBuilder)]
pub struct CreateWorkshop {
    pub chapter_id: ChapterId,
    pub sponsor_id: SponsorId,
    pub starts_at: DateTime<Utc>,
    #[builder(default)]
    pub ends_at: Option<DateTime<Utc>>,
    #[builder(default = false)]
    pub is_virtual: bool,
    #[builder(default = 0)]
    pub student_spaces: i32,
    #[builder(default = 0)]
    pub coach_spaces: i32,
}

impl Workshop {
    /// Find workshop by ID
    pub async fn find_by_id(id: WorkshopId, pool: &PgPool) -> Result<Self> {
        sqlx::query_as::<_, Self>("SELECT * FROM workshops WHERE id = $1")
            .bind(id)
            .fetch_one(pool)
            .await
            .map_err(Into::into)
    }

    /// Find workshops that have not started yet, soonest first
    pub async fn find_upcoming(pool: &PgPool) -> Result<Vec<Self>> {
        sqlx::query_as::<_, Self>(
            "SELECT * FROM workshops WHERE starts_at > NOW() ORDER BY starts_at ASC",
        )
        .fetch_all(pool)
        .await
        .map_err(Into::into)
    }

    /// Insert new workshop
    pub async fn create(params: CreateWorkshop, pool: &PgPool) -> Result<Self> {
        sqlx::query_as::<_, Self>(
            "INSERT INTO workshops (
                id, chapter_id, sponsor_id, starts_at, ends_at,
                is_virtual, student_spaces, coach_spaces
             )
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
             RETURNING *",
        )
        .bind(WorkshopId::new())
        .bind(params.chapter_id)
        .bind(params.sponsor_id)
        .bind(params.starts_at)
        .bind(params.ends_at)
        .bind(params.is_virtual)
        .bind(params.student_spaces)
        .bind(params.coach_spaces)
        .fetch_one(pool)
        .await
        .map_err(Into::into)
    }

    /// Grant a member explicit organiser permission on this workshop only
    pub async fn grant_permission(
        workshop_id: WorkshopId,
        member_id: MemberId,
        pool: &PgPool,
    ) -> Result<()> {
        sqlx::query(
            "INSERT INTO workshop_permissions (workshop_id, member_id)
             VALUES ($1, $2)
             ON CONFLICT (workshop_id, member_id) DO NOTHING",
        )
        .bind(workshop_id)
        .bind(member_id)
        .execute(pool)
        .await?;

        Ok(())
    }

    /// Members holding an explicit per-workshop permission grant, in grant
    /// order
    pub async fn permission_holders(workshop_id: WorkshopId, pool: &PgPool) -> Result<Vec<Member>> {
        sqlx::query_as::<_, Member>(
            "SELECT m.*
             FROM members m
             JOIN workshop_permissions p ON p.member_id = m.id
             WHERE p.workshop_id = $1
             ORDER BY p.created_at ASC",
        )
        .bind(workshop_id)
        .fetch_all(pool)
        .await
        .map_err(Into::into)
    }
}
