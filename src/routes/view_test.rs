use super::*;
use serde_json::json;

use crate::frame::{Data, FRAME_CODE, Status};
use crate::grid::GridError;
use crate::state::test_helpers;

fn toolbar(value: serde_json::Value) -> Json<ToolbarInput> {
    Json(serde_json::from_value(value).expect("toolbar input should deserialize"))
}

#[test]
fn view_error_to_status_maps_variants() {
    assert_eq!(view_error_to_status(ViewError::NotFound(Uuid::nil())), StatusCode::NOT_FOUND);
    assert_eq!(view_error_to_status(ViewError::NoGrid), StatusCode::CONFLICT);
    assert_eq!(view_error_to_status(ViewError::MalformedEvent(String::new())), StatusCode::BAD_REQUEST);
    assert_eq!(view_error_to_status(ViewError::Grid(GridError::RowOutOfRange(1))), StatusCode::BAD_REQUEST);
}

#[test]
fn rows_params_default_offset_and_limit() {
    let params: RowsParams = serde_json::from_value(json!({})).expect("defaults");
    assert_eq!(params.offset, 0);
    assert_eq!(params.limit, DEFAULT_ROWS_LIMIT);
}

#[tokio::test]
async fn index_opens_a_view_and_embeds_its_id() {
    let state = test_helpers::test_app_state();
    let Html(html) = index(State(state.clone())).await;

    let views = state.views.read().await;
    assert_eq!(views.len(), 1);
    let view_id = views.keys().next().expect("one view");
    assert!(html.contains(&view_id.to_string()));
}

#[tokio::test]
async fn render_grid_coalesces_blank_inputs() {
    let state = test_helpers::test_app_state();
    let view_id = test_helpers::seed_view(&state).await;

    let Json(summary) = render_grid(
        State(state.clone()),
        Path(view_id),
        toolbar(json!({ "text_columns": "2", "template_button_columns": "", "component_button_columns": -3 })),
    )
    .await
    .expect("render should succeed");

    assert_eq!(summary.columns.len(), 2);
    assert_eq!(summary.shape.text, 2);
    assert_eq!(summary.shape.component_button, 0);
}

#[tokio::test]
async fn render_grid_unknown_view_is_not_found() {
    let state = test_helpers::test_app_state();
    let result = render_grid(State(state), Path(Uuid::new_v4()), toolbar(json!({}))).await;
    assert_eq!(result.err(), Some(StatusCode::NOT_FOUND));
}

#[tokio::test]
async fn rows_before_render_is_conflict() {
    let state = test_helpers::test_app_state();
    let view_id = test_helpers::seed_view(&state).await;
    let result = rows(State(state), Path(view_id), Query(RowsParams { offset: 0, limit: 10 })).await;
    assert_eq!(result.err(), Some(StatusCode::CONFLICT));
}

#[tokio::test]
async fn render_then_rows_then_click() {
    let state = test_helpers::test_app_state();
    let view_id = test_helpers::seed_view(&state).await;
    let Json(summary) =
        render_grid(State(state.clone()), Path(view_id), toolbar(json!({ "component_button_columns": 1 })))
            .await
            .expect("render should succeed");
    assert_eq!(summary.row_count, 10_000);

    let Json(page) = rows(State(state.clone()), Path(view_id), Query(RowsParams { offset: 100, limit: 5 }))
        .await
        .expect("rows should succeed");
    assert_eq!(page.rows.len(), 5);
    assert!(page.rows[0].html.contains("Component-Button-0-100"));

    let req = Frame::request("grid:click", Data::new()).with_data("row", 100).with_data("column", 0);
    let Json(frames) = events(State(state), Path(view_id), Json(req)).await;
    assert_eq!(frames.len(), 2);
    assert_eq!(frames[1].status, Status::Done);
}

#[tokio::test]
async fn events_on_unknown_view_return_error_frame() {
    let state = test_helpers::test_app_state();
    let req = Frame::request("grid:click", Data::new()).with_data("row", 0).with_data("column", 0);
    let Json(frames) = events(State(state), Path(Uuid::new_v4()), Json(req)).await;
    assert_eq!(frames.len(), 1);
    assert_eq!(frames[0].data_str(FRAME_CODE), Some("E_VIEW_NOT_FOUND"));
}

#[tokio::test]
async fn close_removes_view_once() {
    let state = test_helpers::test_app_state();
    let view_id = test_helpers::seed_view(&state).await;
    assert_eq!(close(State(state.clone()), Path(view_id)).await, StatusCode::NO_CONTENT);
    assert_eq!(close(State(state), Path(view_id)).await, StatusCode::NOT_FOUND);
}
