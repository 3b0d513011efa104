pub mod models;

pub use models::Chapter;
