//! Column value resolution pipeline for listgrid.
//!
//! Given a record and a column descriptor, this crate computes the HTML
//! fragment for one table cell:
//!
//! - override dispatch (per-column, display-type, field-type)
//! - type-aware, localized, escaped value formatting
//! - bounded association previews without full eager loads
//! - authorization-gated link wrapping with create/edit/show inference
//! - inline-edit spans with their client-side editor initializers
//!
//! The pipeline is synchronous and request-scoped: assemble a
//! [`RenderContext`] per request and call [`render_cell`] per cell.

pub mod cache;
pub mod context;
pub mod format;
pub mod inplace;
pub mod link;
pub mod overrides;
pub mod resolver;

pub use cache::cache_association;
pub use context::RenderContext;
pub use format::{format_association_collection, format_column_value, format_value, render_text_column};
pub use inplace::{
    INPLACE_FIELD_CLASS, INPLACE_PATTERN_CLASS, column_header_id, element_cell_id,
    format_inplace_edit_column, inplace_edit_allowed, inplace_edit_control, render_checkbox_column,
    render_inplace_edit,
};
pub use link::{action_link_to_inline_form, render_list_column};
pub use overrides::{ColumnOverride, OverrideRegistry, UiOverride};
pub use resolver::{NBSP, render_cell, resolve_cell};
