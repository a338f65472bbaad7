//! Database module: models and schema for persistent storage.
//!
//! Layout:
//! - `models.rs`: Rust structs mirroring DB rows
//! - `schema.rs`: SQL DDL and seed data for initializing the database
//! - `sqlite.rs`: pooled store handle and queries

pub mod models;
pub mod schema;
pub mod sqlite;

pub use models::UserRow;
pub use schema::SQLITE_INIT;
pub use sqlite::{SqlitePool, UserStore};
