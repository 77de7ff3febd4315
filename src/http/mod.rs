//! HTTP server exposing the forecast proxy routes.

pub mod handlers;
pub mod routes;
pub mod state;
pub mod types;

pub use routes::build_router;
pub use state::AppState;
