//! SQL DDL for initializing the user storage.
//! SQLite-first design; can be adapted for other RDBMS.

/// Single-table schema. `password` is stored as given, deliberately
/// unhashed; there are no write endpoints after seeding.
pub const SQLITE_INIT: &str = r#"
CREATE TABLE IF NOT EXISTS users (
    id INTEGER PRIMARY KEY,
    username TEXT,
    password TEXT
);
"#;

/// Seed row inserted at startup. `INSERT OR IGNORE` keeps repeated startups
/// from duplicating or overwriting id 1.
pub const SEED_USER: &str =
    "INSERT OR IGNORE INTO users (id, username, password) VALUES (1, 'alice', 'password123')";
