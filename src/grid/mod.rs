//! Virtualized grid model.
//!
//! ARCHITECTURE
//! ============
//! A `Grid` is an ordered list of columns plus a row-data source. It never
//! materializes rows: the virtualization layer asks for a window, the grid
//! pulls those row ids from its provider and renders one cell per column.
//! Cell interactions come back as `CellEvent`s addressed by row id and
//! absolute column position.

pub mod builder;
pub mod column;
pub mod data;
pub mod renderer;

use std::sync::Arc;

use crate::frame::ErrorCode;
use column::{Column, Renderer};
use data::{DataProvider, Query, RangeDataProvider};
use renderer::{Cell, Component};

// =============================================================================
// ERRORS
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum GridError {
    #[error("column {0} does not exist")]
    ColumnOutOfRange(usize),
    #[error("row {0} does not exist")]
    RowOutOfRange(u32),
    #[error("column {column} does not accept {event} events")]
    UnsupportedEvent { column: usize, event: &'static str },
    #[error("unknown option: {0}")]
    UnknownOption(String),
    #[error("unknown event handler: {0}")]
    UnknownHandler(String),
}

impl ErrorCode for GridError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::ColumnOutOfRange(_) => "E_COLUMN_OUT_OF_RANGE",
            Self::RowOutOfRange(_) => "E_ROW_OUT_OF_RANGE",
            Self::UnsupportedEvent { .. } => "E_UNSUPPORTED_EVENT",
            Self::UnknownOption(_) => "E_UNKNOWN_OPTION",
            Self::UnknownHandler(_) => "E_UNKNOWN_HANDLER",
        }
    }
}

// =============================================================================
// EVENTS
// =============================================================================

/// Interaction with a single cell. `column` is the absolute column position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CellEvent {
    /// Button click. Template cells name the handler bound in their markup.
    Click { row: u32, column: usize, handler: Option<String> },
    /// Combo-box selection.
    Select { row: u32, column: usize, value: String },
}

impl CellEvent {
    fn name(&self) -> &'static str {
        match self {
            Self::Click { .. } => "click",
            Self::Select { .. } => "select",
        }
    }
}

// =============================================================================
// GRID
// =============================================================================

pub struct Grid {
    columns: Vec<Column>,
    provider: Arc<dyn DataProvider>,
}

impl Grid {
    #[must_use]
    pub fn new() -> Self {
        Self { columns: Vec::new(), provider: Arc::new(RangeDataProvider::new()) }
    }

    pub fn add_column(&mut self, column: Column) {
        self.columns.push(column);
    }

    pub fn set_data_provider(&mut self, provider: Arc<dyn DataProvider>) {
        self.provider = provider;
    }

    #[must_use]
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    #[must_use]
    pub fn row_count(&self) -> usize {
        self.provider.size(&Query::new(0, 0))
    }

    /// Render every cell of the rows in `query`, in provider order.
    #[must_use]
    pub fn rows(&self, query: &Query) -> Vec<(u32, Vec<Cell>)> {
        self.provider
            .fetch(query)
            .map(|row| (row, self.columns.iter().map(|c| c.render_cell(row)).collect()))
            .collect()
    }

    /// Route an interaction to the cell it targets.
    ///
    /// # Errors
    ///
    /// Fails if the row or column does not exist, if the column kind does
    /// not accept the event, or if the event names an unknown handler or
    /// option.
    pub fn dispatch(&self, event: &CellEvent) -> Result<(), GridError> {
        let (row, column_pos) = match event {
            CellEvent::Click { row, column, .. } | CellEvent::Select { row, column, .. } => (*row, *column),
        };
        let column = self
            .columns
            .get(column_pos)
            .ok_or(GridError::ColumnOutOfRange(column_pos))?;
        if usize::try_from(row).map_or(true, |r| r >= self.row_count()) {
            return Err(GridError::RowOutOfRange(row));
        }
        let unsupported = || GridError::UnsupportedEvent { column: column_pos, event: event.name() };

        match (column.renderer(), event) {
            (Renderer::Template(template), CellEvent::Click { handler, .. }) => {
                let name = match handler.as_deref() {
                    Some(name) => name,
                    None => template.handler_names().next().ok_or_else(unsupported)?,
                };
                template.handle(name, &row)
            }
            (Renderer::Component(factory), _) => match (factory(row), event) {
                (Component::Button(button), CellEvent::Click { .. }) => {
                    button.click();
                    Ok(())
                }
                (Component::ComboBox(mut combo), CellEvent::Select { value, .. }) => combo.select(value),
                _ => Err(unsupported()),
            },
            _ => Err(unsupported()),
        }
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
