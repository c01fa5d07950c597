//! Override registry.
//!
//! Custom cell rendering dispatches through an explicit registry resolved at
//! configuration time: per-column handlers, display-type (list UI) handlers,
//! and underlying-field-type handlers. Per-column handlers receive only the
//! record, not a pre-formatted value, so they can skip formatting work the
//! caller does not need.

use std::collections::HashMap;

use listgrid_core::{ColumnType, ListColumn, ListUi, Record};

use crate::context::RenderContext;
use crate::format::render_text_column;
use crate::inplace::render_checkbox_column;

/// Handler for a per-column override.
pub type ColumnOverride = Box<dyn Fn(&RenderContext, &dyn Record) -> String>;

/// Handler for a list-UI or column-type override.
pub type UiOverride = Box<dyn Fn(&RenderContext, &ListColumn, &dyn Record) -> String>;

/// Registry of cell-rendering overrides.
pub struct OverrideRegistry {
    columns: HashMap<String, ColumnOverride>,
    uis: HashMap<ListUi, UiOverride>,
    types: HashMap<ColumnType, UiOverride>,
}

impl OverrideRegistry {
    /// Create an empty registry (no built-in UIs).
    #[must_use]
    pub fn empty() -> Self {
        Self {
            columns: HashMap::new(),
            uis: HashMap::new(),
            types: HashMap::new(),
        }
    }

    /// Create a registry with the built-in handlers: the text UI
    /// (truncate + escape) for `ListUi::Text` and `ColumnType::Text`, and
    /// the checkbox UI for `ListUi::Checkbox`.
    #[must_use]
    pub fn new() -> Self {
        let mut registry = Self::empty();
        registry.register_ui(ListUi::Text, Box::new(render_text_column));
        registry.register_ui(ListUi::Checkbox, Box::new(render_checkbox_column));
        registry.register_type(ColumnType::Text, Box::new(render_text_column));
        registry
    }

    /// Register a per-column handler. A trailing `?` on the column name
    /// (predicate-style accessors) is stripped, so `"active?"` and
    /// `"active"` share one handler.
    pub fn register_column(&mut self, name: &str, handler: ColumnOverride) {
        self.columns.insert(Self::column_key(name), handler);
    }

    /// Register a handler for a display-type hint.
    pub fn register_ui(&mut self, ui: ListUi, handler: UiOverride) {
        self.uis.insert(ui, handler);
    }

    /// Register a handler for an underlying field type.
    pub fn register_type(&mut self, column_type: ColumnType, handler: UiOverride) {
        self.types.insert(column_type, handler);
    }

    /// Look up a per-column handler.
    #[must_use]
    pub fn column_override(&self, name: &str) -> Option<&ColumnOverride> {
        self.columns.get(&Self::column_key(name))
    }

    /// Look up a display-type handler.
    #[must_use]
    pub fn ui_override(&self, ui: ListUi) -> Option<&UiOverride> {
        self.uis.get(&ui)
    }

    /// Look up a field-type handler.
    #[must_use]
    pub fn type_override(&self, column_type: ColumnType) -> Option<&UiOverride> {
        self.types.get(&column_type)
    }

    fn column_key(name: &str) -> String {
        name.trim_end_matches('?').to_string()
    }
}

impl Default for OverrideRegistry {
    fn default() -> Self {
        Self::new()
    }
}
