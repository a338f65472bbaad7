use axum::Json;
use axum::extract::{Query, State};
use serde::Deserialize;

use crate::db::UserRow;
use crate::error::AppError;
use crate::router::AppState;

#[derive(Debug, Deserialize)]
pub struct UserQuery {
    pub id: Option<String>,
}

/// GET /user -> JSON array of matching `{id, username}` rows. A missing `id`
/// defaults to "1"; no numeric validation happens here, the raw string goes
/// straight into the parameterized query.
pub async fn lookup(
    State(state): State<AppState>,
    Query(query): Query<UserQuery>,
) -> Result<Json<Vec<UserRow>>, AppError> {
    let id = query.id.as_deref().unwrap_or("1");
    let rows = state.store.find_by_id(id).await?;
    Ok(Json(rows))
}
