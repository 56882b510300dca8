//! HTTP route handlers.

pub mod admin;
pub mod admin_views;
pub mod api;
pub mod layout;
pub mod pages;
