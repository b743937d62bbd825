//! Main page: toolbar plus an empty grid host.

use leptos::prelude::*;
use uuid::Uuid;

/// Label and form field name of each toolbar input, in display order.
pub const TOOLBAR_FIELDS: [(&str, &str); 4] = [
    ("Text columns", "text_columns"),
    ("Template columns (Button)", "template_button_columns"),
    ("Component columns (Button)", "component_button_columns"),
    ("Component columns (Combo box)", "component_combo_box_columns"),
];

/// Numeric inputs and the Render trigger.
#[component]
pub fn Toolbar() -> impl IntoView {
    view! {
        <form class="toolbar" id="toolbar" autocomplete="off">
            {TOOLBAR_FIELDS
                .iter()
                .map(|(label, name)| {
                    view! {
                        <label class="toolbar__field">
                            <span class="toolbar__label">{*label}</span>
                            <input class="toolbar__input" type="number" min="0" step="1" name={*name} />
                        </label>
                    }
                })
                .collect_view()}
            <button type="submit" class="btn toolbar__render">
                "Render"
            </button>
        </form>
    }
}

/// Toolbar, grid host, and notification stack for one view session.
#[component]
pub fn MainView(view_id: String) -> impl IntoView {
    view! {
        <main class="main-view" id="main-view" data-view-id=view_id>
            <Toolbar />
            <section class="grid-host" id="grid-host"></section>
            <div class="notifications" id="notifications" aria-live="polite"></div>
        </main>
    }
}

/// Render the full HTML document for a freshly opened view session.
pub fn render_page(view_id: Uuid) -> String {
    let body = view! {
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <title>"Grid renderers"</title>
                <link rel="stylesheet" href="/assets/grid.css" />
            </head>
            <body>
                <MainView view_id=view_id.to_string() />
                <script src="/assets/grid.js" defer=true></script>
            </body>
        </html>
    }
    .to_html();
    format!("<!DOCTYPE html>{body}")
}

#[cfg(test)]
#[path = "page_test.rs"]
mod tests;
