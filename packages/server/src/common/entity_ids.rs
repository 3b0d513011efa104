//! Typed ID definitions for all domain entities.
//!
//! This module defines type aliases for each domain entity, providing
//! compile-time type safety for ID usage throughout the application.
//!
//! # Example
//!
//! ```rust
//! use server_core::common::{MemberId, WorkshopId};
//!
//! // These are incompatible types - compiler prevents mixing them up
//! let member_id: MemberId = MemberId::new();
//! let workshop_id: WorkshopId = WorkshopId::new();
//!
//! // This would be a compile error:
//! // let wrong: WorkshopId = member_id;
//! ```

// Re-export the core Id type and version markers
pub use super::id::{Id, V4, V7};

// ============================================================================
// Entity marker types
// ============================================================================

/// Marker type for Member entities (users).
pub struct Member;

/// Marker type for Chapter entities (local organising groups).
pub struct Chapter;

/// Marker type for Role entities (role grants on members).
pub struct Role;

/// Marker type for Sponsor entities (workshop hosts).
pub struct Sponsor;

/// Marker type for Workshop entities.
pub struct Workshop;

/// Marker type for WorkshopInvitation entities.
pub struct WorkshopInvitation;

/// Marker type for Job entities (job board listings).
pub struct Job;

// ============================================================================
// Type aliases - the primary API
// ============================================================================

/// Typed ID for Member entities.
pub type MemberId = Id<Member>;

/// Typed ID for Chapter entities.
pub type ChapterId = Id<Chapter>;

/// Typed ID for Role entities.
pub type RoleId = Id<Role>;

/// Typed ID for Sponsor entities.
pub type SponsorId = Id<Sponsor>;

/// Typed ID for Workshop entities.
pub type WorkshopId = Id<Workshop>;

/// Typed ID for WorkshopInvitation entities.
pub type InvitationId = Id<WorkshopInvitation>;

/// Typed ID for Job entities.
pub type JobId = Id<Job>;
