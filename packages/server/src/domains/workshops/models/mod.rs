pub mod invitation;
pub mod sponsor;
pub mod workshop;

pub use invitation::{Attendee, Invitation, WorkshopRole};
pub use sponsor::Sponsor;
pub use workshop::{CreateWorkshop, Workshop};
