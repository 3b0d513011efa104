use crate::common::entity_ids::ChapterId;

/// Actions on the moderated job board.
///
/// Every job action is staff-only: the policy is identical for viewing and
/// for mutating, so `RoleSet::permits` treats all four the same way.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JobAction {
    /// List jobs (including unpublished ones)
    Index,

    /// View a single job
    Show,

    /// Approve a pending job for publication
    Approve,

    /// Take a published job down
    Unpublish,
}

impl std::fmt::Display for JobAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            JobAction::Index => write!(f, "index"),
            JobAction::Show => write!(f, "show"),
            JobAction::Approve => write!(f, "approve"),
            JobAction::Unpublish => write!(f, "unpublish"),
        }
    }
}

/// Snapshot of a member's role grants, loaded once per authorization check.
///
/// `admin` is a global role (NULL chapter scope in the roles table);
/// `organiser_chapters` holds each chapter the member organises.
#[derive(Debug, Clone, Default)]
pub struct RoleSet {
    pub admin: bool,
    pub organiser_chapters: Vec<ChapterId>,
}

impl RoleSet {
    /// Pure predicate: may a member with these roles perform `action`?
    ///
    /// Admins may do everything; organisers of at least one chapter moderate
    /// the job board for the whole community.
    pub fn permits(&self, action: JobAction) -> bool {
        match action {
            JobAction::Index | JobAction::Show | JobAction::Approve | JobAction::Unpublish => {
                self.admin || !self.organiser_chapters.is_empty()
            }
        }
    }

    /// Chapter-scoped check: admins pass everywhere, organisers only within
    /// their own chapter.
    pub fn organises(&self, chapter_id: ChapterId) -> bool {
        self.admin || self.organiser_chapters.contains(&chapter_id)
    }
}
