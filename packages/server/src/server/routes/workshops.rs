//! Workshop display and attendee-export endpoints.
//!
//! The show endpoint is public. The CSV and email exports reveal member
//! contact details, so they require the actor to be an admin or an organiser
//! of the workshop's chapter.

use axum::{
    extract::{Extension, Path},
    http::header,
    response::IntoResponse,
    Json,
};
use serde::Serialize;

use crate::common::auth::{Actor, AuthError};
use crate::common::WorkshopId;
use crate::domains::workshops::WorkshopPresenter;
use crate::server::app::AxumAppState;
use crate::server::errors::ApiError;
use crate::server::middleware::AuthUser;

#[derive(Serialize)]
pub struct VenueView {
    pub name: String,
    pub address: String,
}

#[derive(Serialize)]
pub struct WorkshopView {
    pub id: WorkshopId,
    pub venue: VenueView,
    pub time: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time: Option<String>,
    pub start_and_end_time: String,
    pub organisers: Vec<String>,
    pub virtual_workshop: bool,
    pub spaces: bool,
}

fn require_auth(auth: Option<Extension<AuthUser>>) -> Result<AuthUser, ApiError> {
    auth.map(|Extension(user)| user)
        .ok_or(ApiError::Auth(AuthError::AuthenticationRequired))
}

/// GET /workshops/:id
pub async fn show_workshop(
    Extension(state): Extension<AxumAppState>,
    Path(id): Path<WorkshopId>,
) -> Result<Json<WorkshopView>, ApiError> {
    let presenter = WorkshopPresenter::load(id, &state.db_pool)
        .await
        .map_err(ApiError::from_model)?;

    let venue = presenter.venue();
    let view = WorkshopView {
        id: presenter.workshop().id,
        venue: VenueView {
            name: venue.name.clone(),
            address: venue.address.clone(),
        },
        time: presenter.time(),
        end_time: presenter.end_time(),
        start_and_end_time: presenter.start_and_end_time(),
        organisers: presenter
            .organisers()
            .iter()
            .map(|m| m.full_name())
            .collect(),
        virtual_workshop: presenter.workshop().is_virtual,
        spaces: presenter.has_spaces(),
    };

    Ok(Json(view))
}

/// GET /workshops/:id/attendees.csv
pub async fn workshop_attendees_csv(
    Extension(state): Extension<AxumAppState>,
    auth: Option<Extension<AuthUser>>,
    Path(id): Path<WorkshopId>,
) -> Result<impl IntoResponse, ApiError> {
    let user = require_auth(auth)?;

    let presenter = WorkshopPresenter::load(id, &state.db_pool)
        .await
        .map_err(ApiError::from_model)?;

    Actor::new(user.member_id)
        .organises(presenter.workshop().chapter_id)
        .check(&state.db_pool)
        .await?;

    let csv = presenter.attendees_csv()?;

    Ok((
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8"),
            (
                header::CONTENT_DISPOSITION,
                "attachment; filename=\"attendees.csv\"",
            ),
        ],
        csv,
    ))
}

/// GET /workshops/:id/attendees/emails
pub async fn workshop_attendees_emails(
    Extension(state): Extension<AxumAppState>,
    auth: Option<Extension<AuthUser>>,
    Path(id): Path<WorkshopId>,
) -> Result<String, ApiError> {
    let user = require_auth(auth)?;

    let presenter = WorkshopPresenter::load(id, &state.db_pool)
        .await
        .map_err(ApiError::from_model)?;

    Actor::new(user.member_id)
        .organises(presenter.workshop().chapter_id)
        .check(&state.db_pool)
        .await?;

    Ok(presenter.attendees_emails())
}
