//! Inline (in-place) editing.
//!
//! An eligible cell renders its normal display value inside a uniquely-ID'd
//! span, followed by a script that binds the client-side in-place editor to
//! that span. The editor posts new values to the `update_column` endpoint;
//! a hidden per-column edit control provides the input the editor clones on
//! activation. Checkbox columns skip the editor and toggle through a live
//! checkbox instead.

use listgrid_core::{CrudType, FormUi, ListColumn, ListUi, Record};
use listgrid_html::{
    Attrs, JsValue, UrlParams, check_box_tag, content_tag, javascript_tag, js_object, js_string,
    tag,
};

use crate::context::RenderContext;
use crate::format::format_column_value;

/// Class of the hidden edit-control pattern the editor clones.
pub const INPLACE_PATTERN_CLASS: &str = "listgrid-inplace-pattern";

/// Class of the always-visible display span.
pub const INPLACE_FIELD_CLASS: &str = "in_place_editor_field";

/// Whether a cell is eligible for inline editing: the column opts in and
/// the viewer may update that column on this record.
pub fn inplace_edit_allowed(ctx: &RenderContext, record: &dyn Record, column: &ListColumn) -> bool {
    column.inplace_edit
        && ctx
            .auth
            .record_allows(record, CrudType::Update, Some(&column.name))
}

/// Deterministic DOM id for one cell's editable span.
#[must_use]
pub fn element_cell_id(ctx: &RenderContext, action: &str, name: &str, record_id: &str) -> String {
    format!("{}__{}__{}__{}", ctx.config.controller, action, name, record_id)
}

/// Deterministic DOM id for a column's header cell.
#[must_use]
pub fn column_header_id(ctx: &RenderContext, column: &ListColumn) -> String {
    format!("{}__{}__column_header", ctx.config.controller, column.name)
}

/// The display value shown inside an editable cell: checkbox columns reuse
/// the live checkbox rendering, everything else formats normally.
pub fn format_inplace_edit_column(
    ctx: &RenderContext,
    record: &dyn Record,
    column: &ListColumn,
) -> String {
    if column.list_ui == Some(ListUi::Checkbox) {
        render_checkbox_column(ctx, column, record)
    } else {
        format_column_value(ctx, record, column)
    }
}

/// Render the editable cell: display span plus editor initializer script.
pub fn render_inplace_edit(ctx: &RenderContext, record: &dyn Record, column: &ListColumn) -> String {
    let formatted = format_inplace_edit_column(ctx, record, column);
    let record_id = record
        .id()
        .map(|v| v.to_display_string())
        .unwrap_or_default();
    let cell_id = element_cell_id(ctx, "update_column", &column.name, &record_id);

    let mut url = UrlParams::new(&ctx.config.controller).action("update_column");
    url.set("column", &column.name);
    url.set("id", &record_id);

    let span = content_tag(
        "span",
        &Attrs::new().set("id", cell_id.clone()).set("class", INPLACE_FIELD_CLASS),
        &formatted,
    );
    span + &in_place_editor_script(ctx, &cell_id, &url.to_path(), column, &record_id)
}

/// The client-side initializer binding the editor widget to a cell.
///
/// The form-serialize callback is emitted only when there is something to
/// append: an editor session id (`eid`) or, with forgery protection on, the
/// CSRF `authenticity_token`.
fn in_place_editor_script(
    ctx: &RenderContext,
    field_id: &str,
    url: &str,
    column: &ListColumn,
    record_id: &str,
) -> String {
    let mut with = ctx
        .config
        .eid
        .as_ref()
        .map(|eid| format!("Form.serialize(form) + '&eid={eid}'"));
    if let Some(token) = &ctx.config.csrf_token {
        let base = with.take().unwrap_or_else(|| "Form.serialize(form)".to_string());
        with = Some(format!(
            "{base} + '&authenticity_token=' + encodeURIComponent({})",
            js_string(token)
        ));
    }

    let selector = format!("#{} .{}", column_header_id(ctx, column), INPLACE_PATTERN_CLASS);
    let mut pairs: Vec<(&str, JsValue)> = vec![
        ("cancelText", JsValue::str(ctx.locale.translate("cancel"))),
        ("okText", JsValue::str(ctx.locale.translate("update"))),
        ("loadingText", JsValue::str(ctx.locale.translate("loading"))),
        ("savingText", JsValue::str(ctx.locale.translate("saving"))),
        ("clickToEditText", JsValue::str(ctx.locale.translate("click_to_edit"))),
        ("ajaxOptions", JsValue::raw("{method: 'post'}")),
        ("htmlResponse", JsValue::Bool(false)),
        ("inplacePatternSelector", JsValue::str(selector)),
        ("nodeIdSuffix", JsValue::str(record_id)),
    ];
    if let Some(with) = &with {
        pairs.push(("callback", JsValue::raw(format!("function(form) {{ return {with} }}"))));
    }
    for (key, value) in &column.options.params {
        pairs.push((key.as_str(), JsValue::str(value.clone())));
    }

    let function = format!(
        "new Listgrid.InPlaceEditor({}, {}, {})",
        js_string(field_id),
        js_string(url),
        js_object(&pairs)
    );
    javascript_tag(&function)
}

/// Render a boolean column as a checkbox: live (posting a toggle) when the
/// column is inline-editable and authorized, disabled otherwise.
pub fn render_checkbox_column(
    ctx: &RenderContext,
    column: &ListColumn,
    record: &dyn Record,
) -> String {
    let value = record.get(&column.name);
    let checked = match value.as_bool() {
        Some(b) => b,
        None => value.as_i64() == Some(1),
    };

    if column.inplace_edit
        && ctx
            .auth
            .record_allows(record, CrudType::Update, Some(&column.name))
    {
        let record_id = record
            .id()
            .map(|v| v.to_display_string())
            .unwrap_or_default();
        let cell_id = element_cell_id(ctx, "update_column", &column.name, &record_id);

        let mut url = UrlParams::new(&ctx.config.controller).action("update_column");
        url.set("column", &column.name);
        url.set("id", &record_id);
        url.set("value", if checked { "false" } else { "true" });
        if let Some(eid) = &ctx.config.eid {
            url.set("eid", eid);
        }
        let script = format!("Listgrid.post({});", js_string(&url.to_path()));

        // the inner input gets its own id; the wrapping span owns the cell id
        let input_id = format!("{cell_id}__input");
        let checkbox = check_box_tag(Some(&input_id), "1", checked, Attrs::new().set("onclick", script));
        content_tag(
            "span",
            &Attrs::new().set("id", cell_id).set("class", INPLACE_FIELD_CLASS),
            &checkbox,
        )
    } else {
        check_box_tag(None, "1", checked, Attrs::new().flag("disabled", true))
    }
}

/// The hidden per-column edit control the editor clones on activation.
///
/// Rendered once per column (not per row) when the column is
/// inline-editable at the entity level. The control works on a derived
/// column copy: the `update_column` pass-through option is stripped, and
/// association columns without a form UI, or with the heavyweight
/// record-picker, are downgraded to a plain select.
pub fn inplace_edit_control(ctx: &RenderContext, column: &ListColumn) -> Option<String> {
    if !(column.inplace_edit
        && ctx
            .auth
            .entity_allows(&ctx.config.entity, CrudType::Update, Some(&column.name)))
    {
        return None;
    }

    let column = column.without_param("update_column");
    let force_select = (column.association.is_some() && column.options.form_ui.is_none())
        || column.options.form_ui == Some(FormUi::RecordSelect);
    let column = if force_select {
        column.with_form_ui(FormUi::Select)
    } else {
        column
    };

    Some(content_tag(
        "div",
        &Attrs::new().set("style", "display:none;").set("class", INPLACE_PATTERN_CLASS),
        &edit_control_markup(&column),
    ))
}

fn edit_control_markup(column: &ListColumn) -> String {
    let name = format!("record[{}]", column.name);
    match column.options.form_ui {
        Some(FormUi::Select) => content_tag("select", &Attrs::new().set("name", name), ""),
        Some(FormUi::Checkbox) => tag(
            "input",
            &Attrs::new().set("type", "checkbox").set("name", name).set("value", "1"),
        ),
        _ => tag("input", &Attrs::new().set("type", "text").set("name", name)),
    }
}
