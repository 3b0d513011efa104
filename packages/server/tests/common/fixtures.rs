//! Fixture builders - all rows are created through the model methods the
//! application itself uses.

use anyhow::Result;
use chrono::{Duration, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use server_core::domains::chapters::Chapter;
use server_core::domains::jobs::models::{CreateJob, Job};
use server_core::domains::member::models::{role, Member, Role};
use server_core::domains::workshops::models::{
    CreateWorkshop, Invitation, Sponsor, Workshop, WorkshopRole,
};

/// Create a member with a unique email.
pub async fn create_member(first_name: &str, pool: &PgPool) -> Result<Member> {
    let email = format!("{}-{}@example.com", first_name.to_lowercase(), Uuid::new_v4());
    Member::create(first_name, "Tester", &email, pool).await
}

/// Create a member holding the global admin role.
pub async fn create_admin(pool: &PgPool) -> Result<Member> {
    let member = create_member("Admin", pool).await?;
    Role::grant(member.id, role::ADMIN, pool).await?;
    Ok(member)
}

/// Create a member organising the given chapter.
pub async fn create_organiser(chapter: &Chapter, pool: &PgPool) -> Result<Member> {
    let member = create_member("Organiser", pool).await?;
    Role::grant_scoped(member.id, role::ORGANISER, chapter.id, pool).await?;
    Ok(member)
}

pub async fn create_chapter(pool: &PgPool) -> Result<Chapter> {
    Chapter::create(&format!("Chapter {}", Uuid::new_v4()), "London", pool).await
}

pub async fn create_sponsor(seats: i32, coach_spots: i32, pool: &PgPool) -> Result<Sponsor> {
    Sponsor::create(
        "Thoughtworks",
        "1 Example Street, London",
        seats,
        coach_spots,
        pool,
    )
    .await
}

/// A physical workshop next week, 18:30 to 20:00.
pub async fn create_workshop(
    chapter: &Chapter,
    sponsor: &Sponsor,
    pool: &PgPool,
) -> Result<Workshop> {
    let starts_at = (Utc::now() + Duration::days(7))
        .date_naive()
        .and_hms_opt(18, 30, 0)
        .expect("valid time")
        .and_utc();

    Workshop::create(
        CreateWorkshop::builder()
            .chapter_id(chapter.id)
            .sponsor_id(sponsor.id)
            .starts_at(starts_at)
            .ends_at(Some(starts_at + Duration::minutes(90)))
            .build(),
        pool,
    )
    .await
}

/// Invite a member and mark them attending.
pub async fn attend(
    workshop: &Workshop,
    member: &Member,
    workshop_role: WorkshopRole,
    pool: &PgPool,
) -> Result<Invitation> {
    let invitation = Invitation::invite(workshop.id, member.id, workshop_role, pool).await?;
    Invitation::respond(invitation.id, true, pool).await
}

/// A pending job listing.
pub async fn create_pending_job(pool: &PgPool) -> Result<Job> {
    Job::create(
        CreateJob::builder()
            .title("Junior Rust Engineer")
            .company("Example Ltd")
            .location("Remote (UK)")
            .url(Some("https://example.com/jobs/1".to_string()))
            .description("Entry-level role with mentoring.")
            .build(),
        pool,
    )
    .await
}
