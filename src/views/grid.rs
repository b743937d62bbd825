//! Grid fragments: header row and body rows.

use leptos::prelude::*;

use crate::grid::column::Column;
use crate::grid::renderer::{Cell, Component};

/// Render the `<tr>` of column headers.
pub fn render_header(columns: &[Column]) -> String {
    let headers: Vec<(String, &'static str)> = columns
        .iter()
        .map(|c| {
            let class = if c.auto_width { "grid__header grid__header--auto" } else { "grid__header" };
            (c.header.clone(), class)
        })
        .collect();

    view! {
        <tr class="grid__header-row">
            {headers
                .into_iter()
                .map(|(header, class)| view! { <th class=class>{header}</th> })
                .collect_view()}
        </tr>
    }
    .to_html()
}

/// Render one body `<tr>`. Cells are addressed by `data-row` on the row and
/// `data-column` (absolute position) on each cell.
pub fn render_row(row: u32, cells: Vec<Cell>) -> String {
    view! {
        <tr class="grid__row" data-row=row.to_string()>
            {cells
                .into_iter()
                .enumerate()
                .map(|(column, cell)| {
                    view! {
                        <td class="grid__cell" data-column=column.to_string()>
                            {cell_view(cell)}
                        </td>
                    }
                })
                .collect_view()}
        </tr>
    }
    .to_html()
}

fn cell_view(cell: Cell) -> AnyView {
    match cell {
        Cell::Text(text) => view! { <span class="grid-text">{text}</span> }.into_any(),
        Cell::Markup(markup) => view! { <span class="grid-template" inner_html=markup></span> }.into_any(),
        Cell::Component(Component::Button(button)) => {
            let label = button.label().to_owned();
            view! {
                <button type="button" class="grid-button" data-action="click">
                    {label}
                </button>
            }
            .into_any()
        }
        Cell::Component(Component::ComboBox(combo)) => {
            let label = combo.label().to_owned();
            let items = combo.items().to_vec();
            view! {
                <label class="grid-combo">
                    <span class="grid-combo__label">{label}</span>
                    <select class="grid-combo__select" data-action="select">
                        <option value="" selected=true disabled=true>
                            "Select"
                        </option>
                        {items
                            .into_iter()
                            .map(|item| {
                                let value = item.clone();
                                view! { <option value=value>{item}</option> }
                            })
                            .collect_view()}
                    </select>
                </label>
            }
            .into_any()
        }
    }
}

#[cfg(test)]
#[path = "grid_test.rs"]
mod tests;
