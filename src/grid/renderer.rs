//! Cell renderers: markup templates and per-cell components.
//!
//! DESIGN
//! ======
//! A `TemplateRenderer` is one markup string shared by every row. Row data
//! reaches it through named properties (`[[item.<name>]]` placeholders) and
//! interactions come back through named event handlers.
//!
//! A component factory instead builds a fresh `Component` for each row. The
//! component carries its own listener, so dispatching an interaction means
//! rebuilding the component for that row and firing it. Components are never
//! stored between requests.

use std::fmt;
use std::sync::Arc;

use super::GridError;

/// Row-to-text binding for a template property.
pub type PropertyFn<T> = Arc<dyn Fn(&T) -> String + Send + Sync>;

/// Row-scoped template event handler.
pub type HandlerFn<T> = Arc<dyn Fn(&T) + Send + Sync>;

// =============================================================================
// TEMPLATE RENDERER
// =============================================================================

/// Markup template bound to row data via named placeholders.
pub struct TemplateRenderer<T> {
    template: String,
    properties: Vec<(String, PropertyFn<T>)>,
    handlers: Vec<(String, HandlerFn<T>)>,
}

impl<T> TemplateRenderer<T> {
    pub fn of(template: impl Into<String>) -> Self {
        Self { template: template.into(), properties: Vec::new(), handlers: Vec::new() }
    }

    /// Bind `[[item.<name>]]` to a value computed from the row.
    #[must_use]
    pub fn with_property(
        mut self,
        name: impl Into<String>,
        value: impl Fn(&T) -> String + Send + Sync + 'static,
    ) -> Self {
        self.properties.push((name.into(), Arc::new(value)));
        self
    }

    /// Register a handler the template can reference by name.
    #[must_use]
    pub fn with_event_handler(
        mut self,
        name: impl Into<String>,
        handler: impl Fn(&T) + Send + Sync + 'static,
    ) -> Self {
        self.handlers.push((name.into(), Arc::new(handler)));
        self
    }

    pub fn handler_names(&self) -> impl Iterator<Item = &str> {
        self.handlers.iter().map(|(name, _)| name.as_str())
    }

    /// Substitute every bound placeholder. Values are HTML-escaped; placeholders
    /// without a binding are left untouched.
    pub fn render(&self, item: &T) -> String {
        let mut out = self.template.clone();
        for (name, value) in &self.properties {
            let placeholder = format!("[[item.{name}]]");
            if out.contains(&placeholder) {
                out = out.replace(&placeholder, &escape_html(&value(item)));
            }
        }
        out
    }

    /// Invoke the handler registered under `name` for `item`.
    ///
    /// # Errors
    ///
    /// Returns `GridError::UnknownHandler` if no handler has that name.
    pub fn handle(&self, name: &str, item: &T) -> Result<(), GridError> {
        let Some((_, handler)) = self.handlers.iter().find(|(n, _)| n == name) else {
            return Err(GridError::UnknownHandler(name.to_owned()));
        };
        handler(item);
        Ok(())
    }
}

impl<T> fmt::Debug for TemplateRenderer<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TemplateRenderer")
            .field("template", &self.template)
            .field("properties", &self.properties.iter().map(|(n, _)| n).collect::<Vec<_>>())
            .field("handlers", &self.handlers.iter().map(|(n, _)| n).collect::<Vec<_>>())
            .finish()
    }
}

/// Minimal HTML text/attribute escaping for substituted template values.
fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    out
}

// =============================================================================
// COMPONENTS
// =============================================================================

type ClickListener = Box<dyn Fn() + Send + Sync>;
type ValueListener = Box<dyn Fn(&str) + Send + Sync>;

/// Live control built for a single cell.
pub enum Component {
    Button(Button),
    ComboBox(ComboBox),
}

/// Clickable button with an optional click listener.
pub struct Button {
    label: String,
    on_click: Option<ClickListener>,
}

impl Button {
    pub fn new(label: impl Into<String>) -> Self {
        Self { label: label.into(), on_click: None }
    }

    #[must_use]
    pub fn on_click(mut self, listener: impl Fn() + Send + Sync + 'static) -> Self {
        self.on_click = Some(Box::new(listener));
        self
    }

    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn click(&self) {
        if let Some(listener) = &self.on_click {
            listener();
        }
    }
}

/// Selection control over a fixed list of string options.
pub struct ComboBox {
    label: String,
    items: Vec<String>,
    value: Option<String>,
    on_value_change: Option<ValueListener>,
}

impl ComboBox {
    pub fn new(label: impl Into<String>) -> Self {
        Self { label: label.into(), items: Vec::new(), value: None, on_value_change: None }
    }

    #[must_use]
    pub fn with_items(mut self, items: &[String]) -> Self {
        self.items = items.to_vec();
        self
    }

    #[must_use]
    pub fn on_value_change(mut self, listener: impl Fn(&str) + Send + Sync + 'static) -> Self {
        self.on_value_change = Some(Box::new(listener));
        self
    }

    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    #[must_use]
    pub fn items(&self) -> &[String] {
        &self.items
    }

    #[cfg(test)]
    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    /// Select one of the items and fire the value-change listener.
    ///
    /// # Errors
    ///
    /// Returns `GridError::UnknownOption` if `value` is not one of the items.
    pub fn select(&mut self, value: &str) -> Result<(), GridError> {
        if !self.items.iter().any(|item| item == value) {
            return Err(GridError::UnknownOption(value.to_owned()));
        }
        if self.value.as_deref() == Some(value) {
            return Ok(());
        }
        self.value = Some(value.to_owned());
        if let Some(listener) = &self.on_value_change {
            listener(value);
        }
        Ok(())
    }
}

// =============================================================================
// CELLS
// =============================================================================

/// Rendered content of one grid cell, ready for markup generation.
pub enum Cell {
    Text(String),
    Markup(String),
    Component(Component),
}

#[cfg(test)]
#[path = "renderer_test.rs"]
mod tests;
