//! Core library for Lumina.
//!
//! Contains the site content and theme schema, the compiled-in default
//! content, the action reducer, the observable site store, the style
//! publisher, the icon registry, the admin access gate, and editor helpers.
//! This crate depends on `lumina-storage` for the storage backend trait and
//! knows nothing about HTTP or page rendering.

pub mod action;
pub mod content;
pub mod defaults;
pub mod editor;
pub mod error;
pub mod gate;
pub mod icons;
pub mod reducer;
pub mod state;
pub mod store;
pub mod style;
pub mod theme;

pub use action::Action;
pub use state::AppState;
pub use store::{STATE_KEY, SiteStore};
