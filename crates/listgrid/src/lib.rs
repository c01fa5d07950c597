//! listgrid: list-cell rendering for scaffolded CRUD admin interfaces.
//!
//! listgrid computes the HTML fragment for each cell of an automatically
//! generated record table: type-aware localized formatting, bounded
//! association previews, authorization-gated links, and in-place editing
//! affordances. The host application supplies records, authorization, and
//! localization through small collaborator traits.
//!
//! # Quick Start
//!
//! ```ignore
//! use listgrid::prelude::*;
//!
//! let config = ListConfig::new("heroes", "Hero").csrf_token(token);
//! let overrides = OverrideRegistry::new();
//! let ctx = RenderContext::new(&config, &auth, &locale, &overrides);
//!
//! let name = ListColumn::new("name").inplace_edit(true);
//! let team = ListColumn::new("team")
//!     .association(AssociationInfo::new("team", AssociationKind::BelongsTo, "Team"))
//!     .autolink(ActionLink::new("show").controller("teams"));
//!
//! for hero in &heroes {
//!     let cell = render_cell(&ctx, hero, &name);
//!     // …emit into the row template
//! }
//! ```

// Re-export all public types from sub-crates
pub use listgrid_core::{
    ActionLink, AssociationCollection, AssociationInfo, AssociationKind, AssociationValue,
    AuthorizationGate, CollectionSource, ColumnOptions, ColumnSet, ColumnType, CrudType,
    DefaultLocale, Error, FormUi, LinkAction, ListColumn, ListConfig, ListUi, Localizer,
    PermitAll, Record, Result, Value, foreign_key_param, snake_case,
};
pub use listgrid_html::{
    Attrs, CleanPolicy, JsValue, UrlParams, check_box_tag, clean, content_tag, escape,
    javascript_tag, js_object, js_string, percent_encode, truncate_text,
};
pub use listgrid_render::{
    ColumnOverride, INPLACE_FIELD_CLASS, INPLACE_PATTERN_CLASS, NBSP, OverrideRegistry,
    RenderContext, UiOverride, cache_association, column_header_id, element_cell_id,
    format_association_collection, format_column_value, format_inplace_edit_column, format_value,
    inplace_edit_allowed, inplace_edit_control, render_cell, render_checkbox_column,
    render_inplace_edit, render_list_column, render_text_column, resolve_cell,
};

/// Convenience prelude importing the types most list templates need.
pub mod prelude {
    pub use listgrid_core::{
        ActionLink, AssociationCollection, AssociationInfo, AssociationKind, AssociationValue,
        AuthorizationGate, CollectionSource, ColumnSet, ColumnType, CrudType, DefaultLocale,
        FormUi, LinkAction, ListColumn, ListConfig, ListUi, Localizer, PermitAll, Record, Value,
    };
    pub use listgrid_render::{
        OverrideRegistry, RenderContext, inplace_edit_control, render_cell, resolve_cell,
    };
}
