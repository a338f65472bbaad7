use serde::Serialize;
use sqlx::FromRow;

/// Row shape returned by the `/user` lookup. The `password` column exists in
/// the table but is never selected, so it cannot leak through serialization.
#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
pub struct UserRow {
    pub id: i64,
    pub username: String,
}
