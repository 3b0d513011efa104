use anyhow::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

use super::Member;
use crate::common::auth::{AuthError, RoleLookup, RoleSet};
use crate::common::{ChapterId, MemberId, RoleId};

/// Role names with a defined meaning in the authorization policy.
pub const ADMIN: &str = "admin";
pub const ORGANISER: &str = "organiser";

/// Role grant - links a member to a named role, optionally scoped to a chapter.
///
/// Global roles (admin) have a NULL chapter_id; organiser grants are always
/// chapter-scoped.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Role {
    pub id: RoleId,
    pub member_id: MemberId,
    pub name: String,
    pub chapter_id: Option<ChapterId>,
    pub created_at: DateTime<Utc>,
}

impl Role {
    /// Grant a global role to a member (idempotent)
    pub async fn grant(member_id: MemberId, name: &str, pool: &PgPool) -> Result<Self> {
        sqlx::query_as::<_, Self>(
            "INSERT INTO roles (id, member_id, name)
             VALUES ($1, $2, $3)
             ON CONFLICT (member_id, name, chapter_id) DO UPDATE SET name = EXCLUDED.name
             RETURNING *",
        )
        .bind(RoleId::new())
        .bind(member_id)
        .bind(name)
        .fetch_one(pool)
        .await
        .map_err(Into::into)
    }

    /// Grant a chapter-scoped role to a member (idempotent)
    pub async fn grant_scoped(
        member_id: MemberId,
        name: &str,
        chapter_id: ChapterId,
        pool: &PgPool,
    ) -> Result<Self> {
        sqlx::query_as::<_, Self>(
            "INSERT INTO roles (id, member_id, name, chapter_id)
             VALUES ($1, $2, $3, $4)
             ON CONFLICT (member_id, name, chapter_id) DO UPDATE SET name = EXCLUDED.name
             RETURNING *",
        )
        .bind(RoleId::new())
        .bind(member_id)
        .bind(name)
        .bind(chapter_id)
        .fetch_one(pool)
        .await
        .map_err(Into::into)
    }

    /// Find all members holding the organiser role within a chapter.
    ///
    /// Retrieval order follows the grant order, which keeps attendee exports
    /// stable between requests.
    pub async fn find_organisers(chapter_id: ChapterId, pool: &PgPool) -> Result<Vec<Member>> {
        sqlx::query_as::<_, Member>(
            "SELECT m.*
             FROM members m
             JOIN roles r ON r.member_id = m.id
             WHERE r.name = $1 AND r.chapter_id = $2
             ORDER BY r.created_at ASC",
        )
        .bind(ORGANISER)
        .bind(chapter_id)
        .fetch_all(pool)
        .await
        .map_err(Into::into)
    }

    /// Load the full role snapshot for a member
    pub async fn role_set(member_id: MemberId, pool: &PgPool) -> Result<RoleSet> {
        let roles = sqlx::query_as::<_, Self>("SELECT * FROM roles WHERE member_id = $1")
            .bind(member_id)
            .fetch_all(pool)
            .await?;

        let admin = roles
            .iter()
            .any(|r| r.name == ADMIN && r.chapter_id.is_none());
        let organiser_chapters = roles
            .iter()
            .filter(|r| r.name == ORGANISER)
            .filter_map(|r| r.chapter_id)
            .collect();

        Ok(RoleSet {
            admin,
            organiser_chapters,
        })
    }
}

/// The production `RoleLookup` implementation reads straight from the pool.
#[async_trait]
impl RoleLookup for PgPool {
    async fn role_set(&self, member_id: MemberId) -> Result<RoleSet, AuthError> {
        Role::role_set(member_id, self)
            .await
            .map_err(AuthError::InternalError)
    }
}
