//! Smoke test: the facade exposes enough to render a row without touching
//! the sub-crates directly.

use listgrid::prelude::*;

struct Gadget;

impl Record for Gadget {
    fn entity_name(&self) -> &str {
        "Gadget"
    }

    fn id(&self) -> Option<Value> {
        Some(Value::Int(1))
    }

    fn get(&self, field: &str) -> Value {
        match field {
            "label" => Value::Text("Widget".to_string()),
            "broken" => Value::Bool(false),
            _ => Value::Null,
        }
    }

    fn to_label(&self) -> String {
        "Widget".to_string()
    }

    fn association(&self, _name: &str) -> Option<AssociationValue<'_>> {
        None
    }
}

#[test]
fn test_render_row_through_prelude() {
    let config = ListConfig::new("gadgets", "Gadget");
    let auth = PermitAll;
    let locale = DefaultLocale::new();
    let overrides = OverrideRegistry::new();
    let ctx = RenderContext::new(&config, &auth, &locale, &overrides);

    let columns: ColumnSet = [
        ListColumn::new("label"),
        ListColumn::new("broken"),
        ListColumn::new("serial"),
    ]
    .into_iter()
    .collect();
    let row: Vec<String> = columns
        .iter()
        .map(|column| render_cell(&ctx, &Gadget, column))
        .collect();
    assert_eq!(row, vec!["Widget", "False", "-"]);
    assert!(columns.require("label").is_ok());
    assert!(columns.require("missing").is_err());
}

#[test]
fn test_inplace_control_through_prelude() {
    let config = ListConfig::new("gadgets", "Gadget");
    let auth = PermitAll;
    let locale = DefaultLocale::new();
    let overrides = OverrideRegistry::new();
    let ctx = RenderContext::new(&config, &auth, &locale, &overrides);

    let column = ListColumn::new("label").inplace_edit(true);
    let control = inplace_edit_control(&ctx, &column).unwrap();
    assert!(control.contains("record[label]"));
}
