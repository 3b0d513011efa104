//! Job board moderation endpoints.
//!
//! Every endpoint is gated by the job access policy: the actor must hold the
//! global admin role or organise at least one chapter. Missing authentication
//! is a 401, a failed policy check is a 403.

use axum::{
    extract::{Extension, Path, Query},
    Json,
};
use serde::Deserialize;
use std::str::FromStr;

use crate::common::auth::{Actor, AuthError, JobAction};
use crate::common::JobId;
use crate::domains::jobs::models::{Job, JobStatus};
use crate::server::app::AxumAppState;
use crate::server::errors::ApiError;
use crate::server::middleware::AuthUser;

const DEFAULT_PAGE_SIZE: i64 = 50;

#[derive(Debug, Deserialize)]
pub struct JobListParams {
    pub status: Option<String>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

fn require_auth(auth: Option<Extension<AuthUser>>) -> Result<AuthUser, ApiError> {
    auth.map(|Extension(user)| user)
        .ok_or(ApiError::Auth(AuthError::AuthenticationRequired))
}

/// GET /admin/jobs
pub async fn list_jobs(
    Extension(state): Extension<AxumAppState>,
    auth: Option<Extension<AuthUser>>,
    Query(params): Query<JobListParams>,
) -> Result<Json<Vec<Job>>, ApiError> {
    let user = require_auth(auth)?;

    Actor::new(user.member_id)
        .can(JobAction::Index)
        .check(&state.db_pool)
        .await?;

    let limit = params.limit.unwrap_or(DEFAULT_PAGE_SIZE).clamp(1, 200);
    let offset = params.offset.unwrap_or(0).max(0);

    let jobs = match params.status.as_deref() {
        Some(raw) => {
            let status = JobStatus::from_str(raw)
                .map_err(|_| ApiError::BadRequest(format!("unknown job status: {}", raw)))?;
            Job::find_by_status(status, limit, offset, &state.db_pool).await
        }
        None => Job::find_all(limit, offset, &state.db_pool).await,
    }
    .map_err(ApiError::from_model)?;

    Ok(Json(jobs))
}

/// GET /admin/jobs/:id
pub async fn show_job(
    Extension(state): Extension<AxumAppState>,
    auth: Option<Extension<AuthUser>>,
    Path(id): Path<JobId>,
) -> Result<Json<Job>, ApiError> {
    let user = require_auth(auth)?;

    Actor::new(user.member_id)
        .can(JobAction::Show)
        .check(&state.db_pool)
        .await?;

    let job = Job::find_by_id(id, &state.db_pool)
        .await
        .map_err(ApiError::from_model)?;

    Ok(Json(job))
}

/// POST /admin/jobs/:id/approve
pub async fn approve_job(
    Extension(state): Extension<AxumAppState>,
    auth: Option<Extension<AuthUser>>,
    Path(id): Path<JobId>,
) -> Result<Json<Job>, ApiError> {
    let user = require_auth(auth)?;

    Actor::new(user.member_id)
        .can(JobAction::Approve)
        .check(&state.db_pool)
        .await?;

    let job = Job::approve(id, user.member_id, &state.db_pool)
        .await
        .map_err(ApiError::from_model)?;

    tracing::info!(job_id = %job.id, approved_by = %user.member_id, "Job approved");

    Ok(Json(job))
}

/// POST /admin/jobs/:id/unpublish
pub async fn unpublish_job(
    Extension(state): Extension<AxumAppState>,
    auth: Option<Extension<AuthUser>>,
    Path(id): Path<JobId>,
) -> Result<Json<Job>, ApiError> {
    let user = require_auth(auth)?;

    Actor::new(user.member_id)
        .can(JobAction::Unpublish)
        .check(&state.db_pool)
        .await?;

    let job = Job::unpublish(id, &state.db_pool)
        .await
        .map_err(ApiError::from_model)?;

    tracing::info!(job_id = %job.id, unpublished_by = %user.member_id, "Job unpublished");

    Ok(Json(job))
}
