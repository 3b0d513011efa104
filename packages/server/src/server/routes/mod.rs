pub mod health;
pub mod jobs;
pub mod workshops;

pub use health::health_handler;
pub use jobs::{approve_job, list_jobs, show_job, unpublish_job};
pub use workshops::{show_workshop, workshop_attendees_csv, workshop_attendees_emails};
