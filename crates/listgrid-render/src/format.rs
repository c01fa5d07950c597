//! Value formatting.
//!
//! Turns raw field values into localized, escaped display strings, including
//! the association summaries (singular labels, bounded comma-joined lists
//! with ellipsis and count).

use listgrid_core::{
    AssociationCollection, AssociationValue, ColumnOptions, ListColumn, Record, Value,
};
use listgrid_html::{CleanPolicy, clean, escape, truncate_text};

use crate::cache::cache_association;
use crate::context::RenderContext;

/// Default truncation length for the text UI.
const DEFAULT_TRUNCATE: usize = 50;

/// The built-in text UI: natural string conversion, truncated and escaped.
pub fn render_text_column(_ctx: &RenderContext, column: &ListColumn, record: &dyn Record) -> String {
    let raw = record.get(&column.name).to_display_string();
    let length = column.options.truncate.unwrap_or(DEFAULT_TRUNCATE);
    escape(&truncate_text(&raw, length))
}

/// Format a single value: empty text for NULL/empty, locale formatting for
/// dates and booleans, natural conversion otherwise. Output is escaped.
pub fn format_value(ctx: &RenderContext, value: &Value, options: &ColumnOptions) -> String {
    let text = if value.is_empty() {
        ctx.config.empty_field_text.clone()
    } else {
        match value {
            Value::Date(date) => ctx.locale.format_date(date, options.format.as_deref()),
            Value::DateTime(dt) => ctx.locale.format_datetime(dt, options.format.as_deref()),
            Value::Bool(b) => ctx.locale.translate(if *b { "true" } else { "false" }),
            other => other.to_display_string(),
        }
    };
    clean(&text, CleanPolicy::default())
}

/// Format a column's value for a record, resolving associations.
///
/// For plural associations the true collection size is captured before the
/// bounded window is installed (the window caps at limit + 1 and cannot
/// answer "how many in total" afterwards).
pub fn format_column_value(ctx: &RenderContext, record: &dyn Record, column: &ListColumn) -> String {
    let Some(info) = &column.association else {
        return format_value(ctx, &record.get(&column.name), &column.options);
    };

    match record.association(info.name) {
        Some(AssociationValue::Singular(Some(related))) => {
            format_value(ctx, &Value::Text(related.to_label()), &ColumnOptions::default())
        }
        Some(AssociationValue::Collection(collection)) => {
            let size = if column.plural_association() && column.options.associated_number {
                Some(collection.size())
            } else {
                None
            };
            cache_association(collection, column);
            if collection.is_empty() {
                format_value(ctx, &Value::Null, &column.options)
            } else {
                format_association_collection(ctx, collection, column, size)
            }
        }
        Some(AssociationValue::Singular(None)) | None => {
            format_value(ctx, &Value::Null, &column.options)
        }
    }
}

/// Format a plural association as a bounded, comma-joined label list.
///
/// With limit L and a window larger than L, the list ends with an ellipsis
/// marker and (when count display is on) a parenthesized total. Limit 0
/// shows only the count; limit 0 with count display off yields an empty
/// string, which the resolver's placeholder post-step turns into `&nbsp;`.
/// No limit lists every label in the window.
pub fn format_association_collection(
    ctx: &RenderContext,
    collection: &AssociationCollection,
    column: &ListColumn,
    size: Option<usize>,
) -> String {
    let records = collection.records();
    let limit = column.options.associated_limit;
    let truncated = limit.is_some_and(|l| records.len() > l);

    if limit == Some(0) {
        if column.options.associated_number {
            return size.map(|n| n.to_string()).unwrap_or_default();
        }
        return String::new();
    }

    let mut labels: Vec<String> = match limit {
        Some(l) => records.iter().take(l).map(|r| r.to_label()).collect(),
        None => records.iter().map(|r| r.to_label()).collect(),
    };
    if truncated {
        labels.push("…".to_string());
    }

    let mut joined = format_value(ctx, &Value::Text(labels.join(", ")), &ColumnOptions::default());
    if column.options.associated_number && truncated {
        if let Some(n) = size {
            joined.push_str(&format!(" ({n})"));
        }
    }
    joined
}
