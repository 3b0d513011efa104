// Domain modules - each owns its models (and all their SQL)

pub mod auth;
pub mod chapters;
pub mod jobs;
pub mod member;
pub mod workshops;
