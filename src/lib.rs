//! A small todo CRUD service: an axum HTTP surface over a SQLite-backed store.

pub mod application;
pub mod domain;
pub mod http;
pub mod infrastructure;
