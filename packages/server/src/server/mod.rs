// HTTP server layer

pub mod app;
pub mod errors;
pub mod middleware;
pub mod routes;

pub use app::{build_app, AxumAppState};
pub use errors::ApiError;
