//! View-model for a workshop and its related records.
//!
//! The presenter is constructed from fully-loaded records and is pure from
//! then on: every operation is a side-effect-free formatting or counting
//! function. `load` is the only place that touches the database, and it is
//! where missing associations surface as errors.

use anyhow::{Context, Result};
use std::collections::HashSet;

use super::models::{Attendee, Invitation, Sponsor, Workshop};
use crate::common::WorkshopId;
use crate::domains::member::models::{role::Role, Member};

const TIME_FORMAT: &str = "%H:%M";

pub struct WorkshopPresenter {
    workshop: Workshop,
    host: Sponsor,
    organisers: Vec<Member>,
    attendances: Vec<Attendee>,
}

impl WorkshopPresenter {
    /// Build a presenter from already-loaded records.
    pub fn new(
        workshop: Workshop,
        host: Sponsor,
        organisers: Vec<Member>,
        attendances: Vec<Attendee>,
    ) -> Self {
        Self {
            workshop,
            host,
            organisers,
            attendances,
        }
    }

    /// Load a workshop and all records the presenter reads.
    ///
    /// Organisers are the chapter's organiser-role holders combined with the
    /// workshop's explicit permission grants, deduplicated by member,
    /// retrieval order preserved.
    pub async fn load(workshop_id: WorkshopId, pool: &sqlx::PgPool) -> Result<Self> {
        let workshop = Workshop::find_by_id(workshop_id, pool).await?;
        let host = Sponsor::find_by_id(workshop.sponsor_id, pool)
            .await
            .context("workshop has no host sponsor")?;

        let mut organisers = Role::find_organisers(workshop.chapter_id, pool).await?;
        let granted = Workshop::permission_holders(workshop_id, pool).await?;

        let mut seen: HashSet<_> = organisers.iter().map(|m| m.id).collect();
        for member in granted {
            if seen.insert(member.id) {
                organisers.push(member);
            }
        }

        let attendances = Invitation::attendances(workshop_id, pool).await?;

        Ok(Self::new(workshop, host, organisers, attendances))
    }

    pub fn workshop(&self) -> &Workshop {
        &self.workshop
    }

    /// The hosting sponsor
    pub fn venue(&self) -> &Sponsor {
        &self.host
    }

    /// Chapter organisers plus explicit per-workshop grants
    pub fn organisers(&self) -> &[Member] {
        &self.organisers
    }

    /// Clock time of the start instant
    pub fn time(&self) -> String {
        self.workshop.starts_at.format(TIME_FORMAT).to_string()
    }

    /// Clock time of the end instant, if one is set
    pub fn end_time(&self) -> Option<String> {
        self.workshop
            .ends_at
            .map(|t| t.format(TIME_FORMAT).to_string())
    }

    /// `"{start} - {end}"`, or the start time alone when no end is set
    pub fn start_and_end_time(&self) -> String {
        match self.end_time() {
            Some(end) => format!("{} - {}", self.time(), end),
            None => self.time(),
        }
    }

    /// CSV document of all attendances plus organisers.
    ///
    /// One row per attending invitation with the role uppercased, then one
    /// ORGANISER row per organiser. Organisers appear even when they also
    /// hold an invitation.
    pub fn attendees_csv(&self) -> Result<String> {
        let mut writer = csv::Writer::from_writer(vec![]);
        writer.write_record(["Name", "Role"])?;

        for attendee in &self.attendances {
            writer.write_record([attendee.full_name(), attendee.role.to_uppercase()])?;
        }
        for organiser in &self.organisers {
            writer.write_record([organiser.full_name(), "ORGANISER".to_string()])?;
        }

        let bytes = writer.into_inner().context("CSV writer flush failed")?;
        String::from_utf8(bytes).context("CSV output was not valid UTF-8")
    }

    /// Email addresses of all attending members (any role), deduplicated by
    /// member, joined by ", "
    pub fn attendees_emails(&self) -> String {
        let mut seen = HashSet::new();
        self.attendances
            .iter()
            .filter(|a| seen.insert(a.member_id))
            .map(|a| a.email.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Whether any coach or student capacity remains.
    ///
    /// Virtual workshops are bounded by their own figures, physical ones by
    /// the hosting sponsor's. A remainder of zero counts as no space.
    pub fn has_spaces(&self) -> bool {
        let attending_coaches = self.attendances.iter().filter(|a| a.is_coach()).count() as i32;
        let attending_students = self.attendances.iter().filter(|a| a.is_student()).count() as i32;

        let (coach_capacity, student_capacity) = if self.workshop.is_virtual {
            (self.workshop.coach_spaces, self.workshop.student_spaces)
        } else {
            (self.host.coach_spots, self.host.seats)
        };

        coach_capacity - attending_coaches > 0 || student_capacity - attending_students > 0
    }
}
