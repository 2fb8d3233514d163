//! Worksheet catalog routes
//!
//! Listing and fetching are public; creation requires an admin token.

use crate::auth::AdminUser;
use crate::error::{ApiError, ApiResult};
use crate::models::{NewWorksheet, Worksheet};
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use serde::Serialize;
use tracing::info;

/// Create worksheet routes
pub fn worksheet_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_worksheets).post(add_worksheet))
        .route("/:id", get(get_worksheet))
}

/// GET /api/worksheets - full catalog
async fn list_worksheets(State(state): State<AppState>) -> Json<Vec<Worksheet>> {
    Json(state.catalog.list())
}

/// GET /api/worksheets/:id - worksheet details
async fn get_worksheet(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<Json<Worksheet>> {
    state
        .catalog
        .get(id)
        .map(Json)
        .ok_or_else(|| ApiError::NotFound("Worksheet not found".to_string()))
}

#[derive(Serialize)]
struct CreatedWorksheetResponse {
    success: bool,
    worksheet: Worksheet,
}

/// POST /api/worksheets - create a worksheet (admin only)
async fn add_worksheet(
    State(state): State<AppState>,
    admin: AdminUser,
    Json(req): Json<NewWorksheet>,
) -> ApiResult<Json<CreatedWorksheetResponse>> {
    if req.title.trim().is_empty() {
        return Err(ApiError::Validation("Title is required".to_string()));
    }

    let worksheet = state.catalog.add(req);
    info!(
        worksheet_id = worksheet.id,
        admin_id = admin.claims.user_id,
        "worksheet created"
    );

    Ok(Json(CreatedWorksheetResponse {
        success: true,
        worksheet,
    }))
}
