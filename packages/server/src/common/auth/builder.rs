use super::{AuthError, JobAction, RoleSet};
use crate::common::entity_ids::{ChapterId, MemberId};
use async_trait::async_trait;

/// Dependency seam for authorization checks.
///
/// Implemented for `PgPool` in the member domain's role model (SQL lives in
/// models), and by in-memory doubles in tests.
#[async_trait]
pub trait RoleLookup: Send + Sync {
    /// Load the role snapshot for a member.
    async fn role_set(&self, member_id: MemberId) -> Result<RoleSet, AuthError>;
}

/// Entry point for authorization checks
///
/// Usage:
/// ```rust,ignore
/// Actor::new(actor_id)
///     .can(JobAction::Approve)
///     .check(&state.db_pool)
///     .await?;
/// ```
pub struct Actor {
    actor_id: MemberId,
}

impl Actor {
    /// Create a new actor for authorization checks
    pub fn new(actor_id: MemberId) -> Self {
        Self { actor_id }
    }

    /// Specify the job-board action the actor wants to perform
    pub fn can(self, action: JobAction) -> ActionCheck {
        ActionCheck {
            actor_id: self.actor_id,
            action,
        }
    }

    /// Require organiser permission within a specific chapter (admin bypasses)
    pub fn organises(self, chapter_id: ChapterId) -> ChapterCheck {
        ChapterCheck {
            actor_id: self.actor_id,
            chapter_id,
        }
    }
}

/// Builder after specifying a job-board action
pub struct ActionCheck {
    actor_id: MemberId,
    action: JobAction,
}

impl ActionCheck {
    /// Perform the authorization check
    pub async fn check<D>(self, deps: &D) -> Result<(), AuthError>
    where
        D: RoleLookup,
    {
        let roles = deps.role_set(self.actor_id).await?;

        if roles.permits(self.action) {
            Ok(())
        } else {
            Err(AuthError::PermissionDenied(format!(
                "{} requires an admin or organiser role",
                self.action
            )))
        }
    }
}

/// Builder after specifying a chapter scope
pub struct ChapterCheck {
    actor_id: MemberId,
    chapter_id: ChapterId,
}

impl ChapterCheck {
    /// Perform the authorization check
    pub async fn check<D>(self, deps: &D) -> Result<(), AuthError>
    where
        D: RoleLookup,
    {
        let roles = deps.role_set(self.actor_id).await?;

        if roles.organises(self.chapter_id) {
            Ok(())
        } else {
            Err(AuthError::PermissionDenied(
                "requires an organiser role for this chapter".to_string(),
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct StaticRoles(RoleSet);

    #[async_trait]
    impl RoleLookup for StaticRoles {
        async fn role_set(&self, _member_id: MemberId) -> Result<RoleSet, AuthError> {
            Ok(self.0.clone())
        }
    }

    #[tokio::test]
    async fn test_admin_check_passes() {
        let deps = StaticRoles(RoleSet {
            admin: true,
            organiser_chapters: vec![],
        });

        let result = Actor::new(MemberId::new())
            .can(JobAction::Approve)
            .check(&deps)
            .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_organiser_check_passes() {
        let deps = StaticRoles(RoleSet {
            admin: false,
            organiser_chapters: vec![ChapterId::new()],
        });

        let result = Actor::new(MemberId::new())
            .can(JobAction::Index)
            .check(&deps)
            .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_plain_member_rejected() {
        let deps = StaticRoles(RoleSet::default());

        let result = Actor::new(MemberId::new())
            .can(JobAction::Unpublish)
            .check(&deps)
            .await;

        assert!(matches!(result, Err(AuthError::PermissionDenied(_))));
    }

    #[tokio::test]
    async fn test_chapter_scoped_check() {
        let home = ChapterId::new();
        let deps = StaticRoles(RoleSet {
            admin: false,
            organiser_chapters: vec![home],
        });

        let ok = Actor::new(MemberId::new())
            .organises(home)
            .check(&deps)
            .await;
        assert!(ok.is_ok());

        let denied = Actor::new(MemberId::new())
            .organises(ChapterId::new())
            .check(&deps)
            .await;
        assert!(matches!(denied, Err(AuthError::PermissionDenied(_))));
    }
}
