//! View session routes: page render, grid rebuild, row paging, cell events.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{Html, Json};
use serde::Deserialize;
use uuid::Uuid;

use crate::frame::Frame;
use crate::services::view::{self, GridSummary, RowPage, ViewError};
use crate::state::AppState;
use crate::toolbar::ToolbarInput;
use crate::views;

/// Rows returned when the client does not name a limit.
pub const DEFAULT_ROWS_LIMIT: u32 = 50;

fn default_limit() -> u32 {
    DEFAULT_ROWS_LIMIT
}

#[derive(Debug, Deserialize)]
pub struct RowsParams {
    #[serde(default)]
    pub offset: u32,
    #[serde(default = "default_limit")]
    pub limit: u32,
}

/// `GET /`: open a view session and render the page.
pub async fn index(State(state): State<AppState>) -> Html<String> {
    let view_id = view::open_view(&state).await;
    Html(views::page::render_page(view_id))
}

/// `POST /api/views/:id/grid`: rebuild the grid from toolbar input.
pub async fn render_grid(
    State(state): State<AppState>,
    Path(view_id): Path<Uuid>,
    Json(input): Json<ToolbarInput>,
) -> Result<Json<GridSummary>, StatusCode> {
    let summary = view::rebuild_grid(&state, view_id, input.shape())
        .await
        .map_err(view_error_to_status)?;
    Ok(Json(summary))
}

/// `GET /api/views/:id/rows?offset&limit`: render one window of rows.
pub async fn rows(
    State(state): State<AppState>,
    Path(view_id): Path<Uuid>,
    Query(params): Query<RowsParams>,
) -> Result<Json<RowPage>, StatusCode> {
    let page = view::query_rows(&state, view_id, params.offset, params.limit)
        .await
        .map_err(view_error_to_status)?;
    Ok(Json(page))
}

/// `POST /api/views/:id/events`: dispatch one cell event frame.
///
/// Always answers 200; failures travel as an error frame.
pub async fn events(
    State(state): State<AppState>,
    Path(view_id): Path<Uuid>,
    Json(req): Json<Frame>,
) -> Json<Vec<Frame>> {
    Json(view::handle_event(&state, view_id, &req).await)
}

/// `POST /api/views/:id/close`: drop the view session.
pub async fn close(State(state): State<AppState>, Path(view_id): Path<Uuid>) -> StatusCode {
    match view::close_view(&state, view_id).await {
        Ok(()) => StatusCode::NO_CONTENT,
        Err(e) => view_error_to_status(e),
    }
}

pub(crate) fn view_error_to_status(err: ViewError) -> StatusCode {
    match err {
        ViewError::NotFound(_) => StatusCode::NOT_FOUND,
        ViewError::NoGrid => StatusCode::CONFLICT,
        ViewError::MalformedEvent(_) | ViewError::Grid(_) => StatusCode::BAD_REQUEST,
    }
}

#[cfg(test)]
#[path = "view_test.rs"]
mod tests;
