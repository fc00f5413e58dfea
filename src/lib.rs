pub mod config;
pub mod error;
pub mod observability;
pub mod routes;
pub mod server;

pub use config::Config;
pub use routes::AppState;

/// Create app router for testing
///
/// Builds the Axum router over a fresh in-memory store, useful for
/// integration testing without starting the full server.
pub fn create_app(config: Config) -> axum::Router {
    routes::router(AppState::new(config))
}
