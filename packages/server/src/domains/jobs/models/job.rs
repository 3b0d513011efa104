use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use typed_builder::TypedBuilder;

use crate::common::{JobId, MemberId};

/// Job board listing - community-submitted, staff-moderated
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Job {
    pub id: JobId,
    pub title: String,
    pub company: String,
    pub location: String,
    pub url: Option<String>,
    pub description: String,
    pub status: String, // Maps to JobStatus

    // Submission and moderation audit trail
    pub submitted_by: Option<MemberId>,
    pub approved_by: Option<MemberId>,
    pub approved_at: Option<DateTime<Utc>>,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Status enum for type-safe handlers
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum JobStatus {
    Pending,
    Published,
    Unpublished,
}

impl std::fmt::Display for JobStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            JobStatus::Pending => write!(f, "pending"),
            JobStatus::Published => write!(f, "published"),
            JobStatus::Unpublished => write!(f, "unpublished"),
        }
    }
}

impl std::str::FromStr for JobStatus {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "pending" => Ok(JobStatus::Pending),
            "published" => Ok(JobStatus::Published),
            "unpublished" => Ok(JobStatus::Unpublished),
            _ => Err(anyhow::anyhow!("Invalid job status: {}", s)),
        }
    }
}

/// Creation parameters
#[derive(TypedBuilder)]
#[builder(field_defaults(setter(into)))]
pub struct CreateJob {
    pub title: String,
    pub company: String,
    pub location: String,
    #[builder(default)]
    pub url: Option<String>,
    pub description: String,
    #[builder(default)]
    pub submitted_by: Option<MemberId>,
}

// =============================================================================
// SQL Queries - ALL queries must be in models/
// =============================================================================

impl Job {
    /// Find job by ID
    pub async fn find_by_id(id: JobId, pool: &PgPool) -> Result<Self> {
        sqlx::query_as::<_, Self>("SELECT * FROM jobs WHERE id = $1")
            .bind(id)
            .fetch_one(pool)
            .await
            .map_err(Into::into)
    }

    /// Find jobs by status, newest first
    pub async fn find_by_status(
        status: JobStatus,
        limit: i64,
        offset: i64,
        pool: &PgPool,
    ) -> Result<Vec<Self>> {
        sqlx::query_as::<_, Self>(
            "SELECT * FROM jobs
             WHERE status = $1
             ORDER BY created_at DESC
             LIMIT $2 OFFSET $3",
        )
        .bind(status.to_string())
        .bind(limit)
        .bind(offset)
        .fetch_all(pool)
        .await
        .map_err(Into::into)
    }

    /// Find all jobs regardless of status, newest first
    pub async fn find_all(limit: i64, offset: i64, pool: &PgPool) -> Result<Vec<Self>> {
        sqlx::query_as::<_, Self>(
            "SELECT * FROM jobs
             ORDER BY created_at DESC
             LIMIT $1 OFFSET $2",
        )
        .bind(limit)
        .bind(offset)
        .fetch_all(pool)
        .await
        .map_err(Into::into)
    }

    /// Insert new job in pending status
    pub async fn create(params: CreateJob, pool: &PgPool) -> Result<Self> {
        sqlx::query_as::<_, Self>(
            "INSERT INTO jobs (id, title, company, location, url, description, status, submitted_by)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
             RETURNING *",
        )
        .bind(JobId::new())
        .bind(&params.title)
        .bind(&params.company)
        .bind(&params.location)
        .bind(&params.url)
        .bind(&params.description)
        .bind(JobStatus::Pending.to_string())
        .bind(params.submitted_by)
        .fetch_one(pool)
        .await
        .map_err(Into::into)
    }

    /// Publish a job, recording who approved it and when
    pub async fn approve(id: JobId, approved_by: MemberId, pool: &PgPool) -> Result<Self> {
        sqlx::query_as::<_, Self>(
            "UPDATE jobs
             SET status = $2, approved_by = $3, approved_at = NOW(), updated_at = NOW()
             WHERE id = $1
             RETURNING *",
        )
        .bind(id)
        .bind(JobStatus::Published.to_string())
        .bind(approved_by)
        .fetch_one(pool)
        .await
        .map_err(Into::into)
    }

    /// Take a job down
    pub async fn unpublish(id: JobId, pool: &PgPool) -> Result<Self> {
        sqlx::query_as::<_, Self>(
            "UPDATE jobs
             SET status = $2, updated_at = NOW()
             WHERE id = $1
             RETURNING *",
        )
        .bind(id)
        .bind(JobStatus::Unpublished.to_string())
        .fetch_one(pool)
        .await
        .map_err(Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_status_roundtrip() {
        for status in [
            JobStatus::Pending,
            JobStatus::Published,
            JobStatus::Unpublished,
        ] {
            let parsed = JobStatus::from_str(&status.to_string()).unwrap();
            assert_eq!(parsed, status);
        }
    }

    #[test]
    fn test_invalid_status_rejected() {
        assert!(JobStatus::from_str("archived").is_err());
    }
}
