//! Lumina HTTP server.
//!
//! Serves the public site pages, the password-gated admin panel at `/admin`,
//! and a JSON API at `/api/*`, all rendered from one [`lumina_core::SiteStore`].

pub mod app;
pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod state;

pub use app::build_router;
