//! Perennial Wisdom: a read-only knowledge base of philosophical quotes.
//!
//! Quotes are attributed to philosophers, who belong to traditions (schools of
//! thought). Themes cut across traditions, and scientific evidence supports themes.
//! The content is fixed: a reference dataset is seeded once at startup and served
//! as JSON and server-rendered HTML.
//!
//! # Architecture
//!
//! - **Storage**: one [`wisdom::Repository`] contract with two backends, in-memory
//!   maps and SQLite (FTS5 for quote search)
//! - **Seeding**: idempotent, atomic load of [`wisdom::dataset::reference`]
//! - **Transport**: axum over HTTP, JSON under `/api`, pages under `/pages`
//!
//! # Modules
//!
//! - [`config`]: configuration from TOML files and environment variables
//! - [`db`]: SQLite open, schema, migrations and health checks
//! - [`error`]: repository error taxonomy
//! - [`wisdom`]: entity types, reference dataset, repositories and the seed loader
//! - [`web`]: router, JSON handlers and HTML pages

pub mod cli;
pub mod config;
pub mod db;
pub mod error;
pub mod server;
pub mod web;
pub mod wisdom;
