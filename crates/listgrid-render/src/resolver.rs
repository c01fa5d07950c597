//! Top-level cell resolution.
//!
//! The ordered decision procedure computing the display representation for
//! one (record, column) pair, and the convenience entry point that also
//! applies link wrapping.

use listgrid_core::{ListColumn, Record};

use crate::context::RenderContext;
use crate::format::format_column_value;
use crate::inplace::{inplace_edit_allowed, render_inplace_edit};
use crate::link::render_list_column;

/// Placeholder keeping empty cells at full height with visible borders.
pub const NBSP: &str = "&nbsp;";

/// Resolve the display value for one cell. First match wins:
///
/// 1. per-column override
/// 2. the column's display-type (list UI) handler
/// 3. inline editing, when the column opts in and the viewer may update it
/// 4. the underlying field type's handler
/// 5. generic formatting
///
/// A nil or empty result is replaced by a non-breaking space so the cell
/// keeps its height and borders.
pub fn resolve_cell(ctx: &RenderContext, record: &dyn Record, column: &ListColumn) -> String {
    let value = resolve_raw(ctx, record, column);
    if value.is_empty() {
        NBSP.to_string()
    } else {
        value
    }
}

fn resolve_raw(ctx: &RenderContext, record: &dyn Record, column: &ListColumn) -> String {
    if let Some(handler) = ctx.overrides.column_override(&column.name) {
        return handler(ctx, record);
    }
    if let Some(ui) = column.list_ui {
        if let Some(handler) = ctx.overrides.ui_override(ui) {
            return handler(ctx, column, record);
        }
    }
    if inplace_edit_allowed(ctx, record, column) {
        return render_inplace_edit(ctx, record, column);
    }
    if let Some(column_type) = column.column_type {
        if let Some(handler) = ctx.overrides.type_override(column_type) {
            return handler(ctx, column, record);
        }
    }
    format_column_value(ctx, record, column)
}

/// Resolve a cell and wrap it in the column's link, when one applies.
pub fn render_cell(ctx: &RenderContext, record: &dyn Record, column: &ListColumn) -> String {
    let text = resolve_cell(ctx, record, column);
    render_list_column(ctx, &text, column, record)
}
