pub mod job;

pub use job::{CreateJob, Job, JobStatus};
