/// Authorization module for Chapterhouse
///
/// Provides a fluent API for authorization checks in handler code:
///
/// ```rust,ignore
/// use crate::common::auth::{Actor, JobAction};
///
/// // In a handler:
/// Actor::new(actor_id)
///     .can(JobAction::Approve)
///     .check(&state.db_pool)
///     .await?;
/// ```
///
/// This pattern keeps authorization logic at the handler boundary, before any
/// model code runs. Role grants live in the database; the `RoleLookup` seam
/// (implemented for `PgPool` in the member domain's role model, where its SQL
/// belongs) fetches a `RoleSet` snapshot, and the `permits` predicate over
/// that snapshot is pure.

mod builder;
mod errors;
mod roles;

pub use builder::{ActionCheck, Actor, ChapterCheck, RoleLookup};
pub use errors::AuthError;
pub use roles::{JobAction, RoleSet};
