//! Column definitions and their cell-rendering rules.

use std::fmt;
use std::sync::Arc;

use serde::Serialize;

use super::renderer::{Cell, Component, TemplateRenderer};

/// Text value for a row.
pub type ValueFn = Arc<dyn Fn(u32) -> String + Send + Sync>;

/// Per-row component factory.
pub type ComponentFn = Arc<dyn Fn(u32) -> Component + Send + Sync>;

/// The four column kinds, in the order the builder emits them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnKind {
    Text,
    TemplateButton,
    ComponentButton,
    ComponentComboBox,
}

impl ColumnKind {
    /// Header text for the `index`-th column of this kind.
    #[must_use]
    pub fn header(self, index: usize) -> String {
        match self {
            Self::Text => format!("Text-{index}"),
            Self::TemplateButton => format!("Template-Button-{index}"),
            Self::ComponentButton => format!("Component-Button-{index}"),
            Self::ComponentComboBox => format!("Component-Combo-Box-{index}"),
        }
    }
}

/// How a column turns a row into a cell.
pub enum Renderer {
    Value(ValueFn),
    Template(TemplateRenderer<u32>),
    Component(ComponentFn),
}

/// One vertical slice of the grid.
pub struct Column {
    pub kind: ColumnKind,
    /// Zero-based index among columns of the same kind.
    pub index: usize,
    pub header: String,
    pub auto_width: bool,
    renderer: Renderer,
}

impl Column {
    /// Read-only text column.
    pub fn value(index: usize, value: impl Fn(u32) -> String + Send + Sync + 'static) -> Self {
        Self::new(ColumnKind::Text, index, Renderer::Value(Arc::new(value)))
    }

    /// Column rendered through a markup template.
    #[must_use]
    pub fn template(index: usize, renderer: TemplateRenderer<u32>) -> Self {
        Self::new(ColumnKind::TemplateButton, index, Renderer::Template(renderer))
    }

    /// Column whose cells are freshly built components.
    pub fn component(
        kind: ColumnKind,
        index: usize,
        factory: impl Fn(u32) -> Component + Send + Sync + 'static,
    ) -> Self {
        Self::new(kind, index, Renderer::Component(Arc::new(factory)))
    }

    fn new(kind: ColumnKind, index: usize, renderer: Renderer) -> Self {
        Self { kind, index, header: kind.header(index), auto_width: false, renderer }
    }

    #[must_use]
    pub fn with_auto_width(mut self, auto_width: bool) -> Self {
        self.auto_width = auto_width;
        self
    }

    #[must_use]
    pub fn renderer(&self) -> &Renderer {
        &self.renderer
    }

    /// Render this column's cell for `row`.
    #[must_use]
    pub fn render_cell(&self, row: u32) -> Cell {
        match &self.renderer {
            Renderer::Value(value) => Cell::Text(value(row)),
            Renderer::Template(template) => Cell::Markup(template.render(&row)),
            Renderer::Component(factory) => Cell::Component(factory(row)),
        }
    }
}

impl fmt::Debug for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Column")
            .field("kind", &self.kind)
            .field("index", &self.index)
            .field("header", &self.header)
            .field("auto_width", &self.auto_width)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
#[path = "column_test.rs"]
mod tests;
