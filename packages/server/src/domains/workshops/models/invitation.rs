use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

use crate::common::{InvitationId, MemberId, WorkshopId};

/// Role a member is invited to a workshop in.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum WorkshopRole {
    Student,
    Coach,
}

impl std::fmt::Display for WorkshopRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WorkshopRole::Student => write!(f, "student"),
            WorkshopRole::Coach => write!(f, "coach"),
        }
    }
}

impl std::str::FromStr for WorkshopRole {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "student" => Ok(WorkshopRole::Student),
            "coach" => Ok(WorkshopRole::Coach),
            _ => Err(anyhow::anyhow!("Invalid workshop role: {}", s)),
        }
    }
}

/// Workshop invitation - links a member to a workshop with a role and an
/// attendance status
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Invitation {
    pub id: InvitationId,
    pub workshop_id: WorkshopId,
    pub member_id: MemberId,
    pub role: String, // Maps to WorkshopRole
    pub attending: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// An attending invitation joined with its member - the row shape the
/// presenter reads for exports and capacity checks.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Attendee {
    pub member_id: MemberId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub role: String,
}

impl Attendee {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    pub fn is_coach(&self) -> bool {
        self.role == WorkshopRole::Coach.to_string()
    }

    pub fn is_student(&self) -> bool {
        self.role == WorkshopRole::Student.to_string()
    }
}

impl Invitation {
    /// Invite a member to a workshop
    pub async fn invite(
        workshop_id: WorkshopId,
        member_id: MemberId,
        role: WorkshopRole,
        pool: &PgPool,
    ) -> Result<Self> {
        sqlx::query_as::<_, Self>(
            "INSERT INTO workshop_invitations (id, workshop_id, member_id, role)
             VALUES ($1, $2, $3, $4)
             RETURNING *",
        )
        .bind(InvitationId::new())
        .bind(workshop_id)
        .bind(member_id)
        .bind(role.to_string())
        .fetch_one(pool)
        .await
        .map_err(Into::into)
    }

    /// Record the member's RSVP
    pub async fn respond(id: InvitationId, attending: bool, pool: &PgPool) -> Result<Self> {
        sqlx::query_as::<_, Self>(
            "UPDATE workshop_invitations
             SET attending = $2, updated_at = NOW()
             WHERE id = $1
             RETURNING *",
        )
        .bind(id)
        .bind(attending)
        .fetch_one(pool)
        .await
        .map_err(Into::into)
    }

    /// All invitations for a workshop, in creation order
    pub async fn find_by_workshop(workshop_id: WorkshopId, pool: &PgPool) -> Result<Vec<Self>> {
        sqlx::query_as::<_, Self>(
            "SELECT * FROM workshop_invitations
             WHERE workshop_id = $1
             ORDER BY created_at ASC",
        )
        .bind(workshop_id)
        .fetch_all(pool)
        .await
        .map_err(Into::into)
    }

    /// Attending invitations joined with their members, in invitation order.
    ///
    /// This is the retrieval order the CSV and email exports follow.
    pub async fn attendances(workshop_id: WorkshopId, pool: &PgPool) -> Result<Vec<Attendee>> {
        sqlx::query_as::<_, Attendee>(
            "SELECT m.id AS member_id, m.first_name, m.last_name, m.email, i.role
             FROM workshop_invitations i
             JOIN members m ON m.id = i.member_id
             WHERE i.workshop_id = $1 AND i.attending = true
             ORDER BY i.created_at ASC",
        )
        .bind(workshop_id)
        .fetch_all(pool)
        .await
        .map_err(Into::into)
    }
}
