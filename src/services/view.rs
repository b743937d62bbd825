//! View service — per-page grid lifecycle, row paging, and cell events.
//!
//! DESIGN
//! ======
//! A view session is opened when the page renders and holds at most one
//! grid. Rebuilding swaps the whole grid in one write under the view lock,
//! so a rows or events request sees either the old grid or the new one and
//! never a mix of columns.
//!
//! The view map lock only guards lookups and swaps of each view's grid
//! handle. Building a grid, rendering rows, and dispatching events all run on
//! a cloned `Arc<Grid>` after the lock is released.
//!
//! Cell listeners report through the view's `ChannelNotifier`. After a
//! dispatch the queue is drained into `notification:show` frames, which keeps
//! the grid API free of return-value side channels. The per-view queue lock is
//! held across dispatch and drain so concurrent events on one view never take
//! each other's notifications.

use std::sync::Arc;

use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::frame::{ErrorCode, Frame};
use crate::grid::builder::{GridBuilder, GridShape};
use crate::grid::column::ColumnKind;
use crate::grid::data::Query;
use crate::grid::{CellEvent, Grid, GridError};
use crate::notify;
use crate::state::{AppState, ViewState};
use crate::views;

// =============================================================================
// TYPES
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum ViewError {
    #[error("view not found: {0}")]
    NotFound(Uuid),
    #[error("no grid has been rendered in this view")]
    NoGrid,
    #[error("malformed event: {0}")]
    MalformedEvent(String),
    #[error(transparent)]
    Grid(#[from] GridError),
}

impl ErrorCode for ViewError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::NotFound(_) => "E_VIEW_NOT_FOUND",
            Self::NoGrid => "E_NO_GRID",
            Self::MalformedEvent(_) => "E_MALFORMED_EVENT",
            Self::Grid(err) => err.error_code(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ColumnSummary {
    pub kind: ColumnKind,
    pub index: usize,
    pub header: String,
    pub auto_width: bool,
}

/// Result of a rebuild: what the toolbar asked for and what was installed.
#[derive(Debug, Clone, Serialize)]
pub struct GridSummary {
    pub shape: GridShape,
    pub columns: Vec<ColumnSummary>,
    pub row_count: usize,
    pub header_html: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct RenderedRow {
    pub row: u32,
    pub html: String,
}

/// One window of rendered rows.
#[derive(Debug, Clone, Serialize)]
pub struct RowPage {
    pub offset: u32,
    pub total: usize,
    pub rows: Vec<RenderedRow>,
}

// =============================================================================
// LIFECYCLE
// =============================================================================

/// Open a new view session with no grid.
pub async fn open_view(state: &AppState) -> Uuid {
    let view_id = Uuid::new_v4();
    let mut views = state.views.write().await;
    views.insert(view_id, ViewState::new(state.config.notification_queue_capacity));
    info!(%view_id, open_views = views.len(), "view: opened");
    view_id
}

/// Drop a view session and its grid.
///
/// # Errors
///
/// Returns `ViewError::NotFound` if the view does not exist.
pub async fn close_view(state: &AppState, view_id: Uuid) -> Result<(), ViewError> {
    let mut views = state.views.write().await;
    if views.remove(&view_id).is_none() {
        return Err(ViewError::NotFound(view_id));
    }
    info!(%view_id, open_views = views.len(), "view: closed");
    Ok(())
}

/// Evict every view idle for longer than the configured timeout. Returns
/// the number of views removed.
pub async fn evict_idle(state: &AppState) -> usize {
    let timeout = state.config.view_idle_timeout;
    let mut views = state.views.write().await;
    let before = views.len();
    views.retain(|_, view| view.last_seen.elapsed() <= timeout);
    let evicted = before - views.len();
    if evicted > 0 {
        info!(evicted, open_views = views.len(), "view: evicted idle sessions");
    }
    evicted
}

// =============================================================================
// GRID
// =============================================================================

/// Replace the view's grid with a fresh one of `shape`.
///
/// The grid is built and its header rendered outside the view map lock; the
/// lock is only taken to look up the view and to install the result.
///
/// # Errors
///
/// Returns `ViewError::NotFound` if the view does not exist, or if it was
/// closed while the grid was being built.
pub async fn rebuild_grid(state: &AppState, view_id: Uuid, shape: GridShape) -> Result<GridSummary, ViewError> {
    let notifier = {
        let mut views = state.views.write().await;
        let view = views.get_mut(&view_id).ok_or(ViewError::NotFound(view_id))?;
        view.touch();
        view.notifier.clone()
    };

    let builder = GridBuilder::new(
        state.config.variant.text_order(),
        state.config.combo_items.clone(),
        notifier,
        state.provider.clone(),
    );
    let grid = Arc::new(builder.build(&shape));

    let summary = GridSummary {
        shape,
        columns: grid
            .columns()
            .iter()
            .map(|c| ColumnSummary { kind: c.kind, index: c.index, header: c.header.clone(), auto_width: c.auto_width })
            .collect(),
        row_count: grid.row_count(),
        header_html: views::grid::render_header(grid.columns()),
    };

    let mut views = state.views.write().await;
    let view = views.get_mut(&view_id).ok_or(ViewError::NotFound(view_id))?;
    let replaced = view.grid.replace(grid).is_some();
    info!(%view_id, replaced, columns = shape.total(), "view: grid rebuilt");
    Ok(summary)
}

/// Render the rows in `[offset, offset + limit)`, clamped to the row count
/// and the configured page size. Rendering runs outside the view map lock.
///
/// # Errors
///
/// Fails if the view does not exist or has no grid yet.
pub async fn query_rows(state: &AppState, view_id: Uuid, offset: u32, limit: u32) -> Result<RowPage, ViewError> {
    let grid = current_grid(state, view_id).await?;

    let total = grid.row_count();
    let remaining = u32::try_from(total).unwrap_or(u32::MAX).saturating_sub(offset);
    let limit = limit.min(state.config.max_page_size).min(remaining);

    let rows = grid
        .rows(&Query::new(offset, limit))
        .into_iter()
        .map(|(row, cells)| RenderedRow { row, html: views::grid::render_row(row, cells) })
        .collect();

    Ok(RowPage { offset, total, rows })
}

/// Touch the view and take a shared handle to its grid.
async fn current_grid(state: &AppState, view_id: Uuid) -> Result<Arc<Grid>, ViewError> {
    let mut views = state.views.write().await;
    let view = views.get_mut(&view_id).ok_or(ViewError::NotFound(view_id))?;
    view.touch();
    view.grid.clone().ok_or(ViewError::NoGrid)
}

// =============================================================================
// EVENTS
// =============================================================================

/// Translate a request frame into a cell event.
///
/// # Errors
///
/// Returns `ViewError::MalformedEvent` for unknown syscalls or missing fields.
pub fn parse_event(req: &Frame) -> Result<CellEvent, ViewError> {
    let row = req
        .data_u64("row")
        .and_then(|r| u32::try_from(r).map_or(None, Some))
        .ok_or_else(|| ViewError::MalformedEvent("row must be a non-negative integer".into()))?;
    let column = req
        .data_u64("column")
        .and_then(|c| usize::try_from(c).map_or(None, Some))
        .ok_or_else(|| ViewError::MalformedEvent("column must be a non-negative integer".into()))?;

    match req.syscall.as_str() {
        "grid:click" => Ok(CellEvent::Click { row, column, handler: req.data_str("handler").map(str::to_owned) }),
        "grid:select" => {
            let value = req
                .data_str("value")
                .ok_or_else(|| ViewError::MalformedEvent("value is required".into()))?;
            Ok(CellEvent::Select { row, column, value: value.to_owned() })
        }
        other => Err(ViewError::MalformedEvent(format!("unknown syscall: {other}"))),
    }
}

/// Dispatch one cell event and return the frames for the sender:
/// notifications followed by `done`, or a single error frame.
pub async fn handle_event(state: &AppState, view_id: Uuid, req: &Frame) -> Vec<Frame> {
    let req = req.clone().with_view_id(view_id);
    match dispatch(state, view_id, &req).await {
        Ok(notifications) => {
            let duration_ms = state.config.notification_duration_ms;
            let mut frames: Vec<Frame> =
                notifications.into_iter().map(|n| req.notification(n.message, duration_ms)).collect();
            frames.push(req.done());
            frames
        }
        Err(e) => {
            warn!(%view_id, syscall = %req.syscall, error = %e, "view: event rejected");
            vec![req.error_from(&e)]
        }
    }
}

async fn dispatch(state: &AppState, view_id: Uuid, req: &Frame) -> Result<Vec<notify::Notification>, ViewError> {
    let event = parse_event(req)?;

    let (grid, queue) = {
        let mut views = state.views.write().await;
        let view = views.get_mut(&view_id).ok_or(ViewError::NotFound(view_id))?;
        view.touch();
        let grid = view.grid.clone().ok_or(ViewError::NoGrid)?;
        (grid, view.notifications.clone())
    };

    let mut queue = queue.lock().await;
    let outcome = grid.dispatch(&event);
    let notifications = notify::drain(&mut queue);
    outcome?;
    Ok(notifications)
}

#[cfg(test)]
#[path = "view_test.rs"]
mod tests;
