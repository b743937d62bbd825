//! Grid builder — turns four column counts into a fresh grid.
//!
//! DESIGN
//! ======
//! Columns are emitted kind by kind: text, template buttons, component
//! buttons, component combo boxes. Each column's closures capture their own
//! index by value, and every listener reports through the builder's
//! `Notifier`, never through a return value.

use std::sync::Arc;

use serde::Serialize;

use super::Grid;
use super::column::{Column, ColumnKind};
use super::data::DataProvider;
use super::renderer::{Button, ComboBox, Component, TemplateRenderer};
use crate::notify::{self, Notifier};

/// Button markup shared by every template-button column; `%d` is replaced by
/// the column index when the column is built.
pub const BUTTON_TEMPLATE: &str =
    "<button type='button' class='grid-button' on-click='showNotification'>Template-Button-[[item.number]]-%d</button>";

/// Handler name referenced by [`BUTTON_TEMPLATE`].
pub const SHOW_NOTIFICATION: &str = "showNotification";

/// Requested number of columns of each kind.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct GridShape {
    pub text: usize,
    pub template_button: usize,
    pub component_button: usize,
    pub combo_box: usize,
}

impl GridShape {
    #[must_use]
    pub fn new(text: usize, template_button: usize, component_button: usize, combo_box: usize) -> Self {
        Self { text, template_button, component_button, combo_box }
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.text + self.template_button + self.component_button + self.combo_box
    }
}

/// Argument order of text cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextOrder {
    /// `Text-{row}-{column}`
    RowFirst,
    /// `Text-{column}-{row}`
    ColumnFirst,
}

impl TextOrder {
    #[must_use]
    pub fn format(self, row: u32, column: usize) -> String {
        match self {
            Self::RowFirst => format!("Text-{row}-{column}"),
            Self::ColumnFirst => format!("Text-{column}-{row}"),
        }
    }
}

pub struct GridBuilder {
    text_order: TextOrder,
    combo_items: Arc<[String]>,
    notifier: Arc<dyn Notifier>,
    provider: Arc<dyn DataProvider>,
}

impl GridBuilder {
    pub fn new(
        text_order: TextOrder,
        combo_items: Arc<[String]>,
        notifier: Arc<dyn Notifier>,
        provider: Arc<dyn DataProvider>,
    ) -> Self {
        Self { text_order, combo_items, notifier, provider }
    }

    /// Build a grid with `shape` columns attached to the builder's provider.
    #[must_use]
    pub fn build(&self, shape: &GridShape) -> Grid {
        let mut grid = Grid::new();

        for c in 0..shape.text {
            grid.add_column(self.text_column(c).with_auto_width(true));
        }
        for c in 0..shape.template_button {
            grid.add_column(self.template_button_column(c).with_auto_width(true));
        }
        for c in 0..shape.component_button {
            grid.add_column(self.component_button_column(c).with_auto_width(true));
        }
        for c in 0..shape.combo_box {
            grid.add_column(self.combo_box_column(c).with_auto_width(true));
        }

        grid.set_data_provider(self.provider.clone());
        grid
    }

    fn text_column(&self, column: usize) -> Column {
        let order = self.text_order;
        Column::value(column, move |row| order.format(row, column))
    }

    fn template_button_column(&self, column: usize) -> Column {
        let notifier = self.notifier.clone();
        let template = TemplateRenderer::of(BUTTON_TEMPLATE.replace("%d", &column.to_string()))
            .with_property("number", u32::to_string)
            .with_event_handler(SHOW_NOTIFICATION, move |row| {
                notifier.show(notify::clicked_message(notify::TEMPLATE_BUTTON, *row, column));
            });
        Column::template(column, template)
    }

    fn component_button_column(&self, column: usize) -> Column {
        let notifier = self.notifier.clone();
        Column::component(ColumnKind::ComponentButton, column, move |row| {
            let notifier = notifier.clone();
            Component::Button(
                Button::new(format!("Component-Button-{column}-{row}")).on_click(move || {
                    notifier.show(notify::clicked_message(notify::COMPONENT_BUTTON, row, column));
                }),
            )
        })
    }

    fn combo_box_column(&self, column: usize) -> Column {
        let notifier = self.notifier.clone();
        let items = self.combo_items.clone();
        Column::component(ColumnKind::ComponentComboBox, column, move |row| {
            let notifier = notifier.clone();
            Component::ComboBox(
                ComboBox::new(format!("Component-Combo-Box-{column}-{row}"))
                    .with_items(&items)
                    .on_value_change(move |value| {
                        notifier.show(notify::selected_message(value, row, column));
                    }),
            )
        })
    }
}

#[cfg(test)]
#[path = "builder_test.rs"]
mod tests;
