use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Pool, Sqlite};

use crate::db::models::UserRow;
use crate::db::schema::{SEED_USER, SQLITE_INIT};
use crate::error::AppError;

pub type SqlitePool = Pool<Sqlite>;

#[derive(Clone)]
pub struct UserStore {
    pool: SqlitePool,
}

impl UserStore {
    /// Open (or create) the backing file and return a pooled handle.
    pub async fn connect(database_url: &str) -> Result<Self, AppError> {
        let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);
        let pool = SqlitePoolOptions::new().connect_with(options).await?;
        Ok(Self { pool })
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Initialize the schema by executing the bundled DDL.
    pub async fn init_schema(&self) -> Result<(), AppError> {
        // execute multiple statements safely (SQLite supports multi-commands but sqlx::query doesn't)
        for stmt in SQLITE_INIT.split(';') {
            let s = stmt.trim();
            if s.is_empty() {
                continue;
            }
            sqlx::query(s).execute(&self.pool).await?;
        }
        Ok(())
    }

    /// Insert the default row if id 1 is absent. Idempotent.
    pub async fn seed(&self) -> Result<(), AppError> {
        sqlx::query(SEED_USER).execute(&self.pool).await?;
        Ok(())
    }

    /// Parameterized lookup. The `id` string is bound verbatim and SQLite's
    /// INTEGER affinity coerces it against the column, so a non-numeric
    /// string simply matches nothing. Zero or one rows come back.
    pub async fn find_by_id(&self, id: &str) -> Result<Vec<UserRow>, AppError> {
        let rows = sqlx::query_as::<_, UserRow>("SELECT id, username FROM users WHERE id = ?")
            .bind(id)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }
}
