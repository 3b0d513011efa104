pub mod models;
pub mod presenter;

pub use models::{Attendee, Invitation, Sponsor, Workshop, WorkshopRole};
pub use presenter::WorkshopPresenter;
