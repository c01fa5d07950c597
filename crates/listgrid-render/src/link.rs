//! Authorization-gated link rendering.
//!
//! Wraps a resolved cell value in an anchor when the column carries a link
//! and the viewer is authorized for the target action. Association-backed
//! columns get foreign-key parameter rewriting for cross-controller links
//! and, for automatic links on singular associations, create/edit/show
//! inference against the column's allow-list.

use listgrid_core::{
    ActionLink, AssociationValue, CrudType, LinkAction, ListColumn, Record, foreign_key_param,
};
use listgrid_html::{Attrs, UrlParams, content_tag};

use crate::context::RenderContext;

/// Wrap `text` in the column's link, or return it unchanged when the column
/// has no link. Unauthorized links render as inert disabled markup, never a
/// live anchor.
pub fn render_list_column(
    ctx: &RenderContext,
    text: &str,
    column: &ListColumn,
    record: &dyn Record,
) -> String {
    let Some(base_link) = &column.link else {
        return text.to_string();
    };
    let mut link = base_link.clone();

    let association = column
        .association
        .as_ref()
        .and_then(|info| record.association(info.name));

    let record_id = record
        .id()
        .map(|v| v.to_display_string())
        .unwrap_or_default();
    let mut url = UrlParams::new(&ctx.config.controller).id(record_id);
    url.set("link", text);

    // cross-controller association links identify the record by foreign key;
    // the id slot belongs to the associated record (singular only)
    if let Some(info) = &column.association {
        let targets_other_controller = link
            .controller
            .as_deref()
            .is_some_and(|c| c != ctx.config.controller);
        if targets_other_controller {
            if let Some(id) = url.take_id() {
                url.set(foreign_key_param(record.entity_name()), id);
            }
            if info.is_singular() {
                if let Some(AssociationValue::Singular(Some(related))) = &association {
                    if let Some(id) = related.id() {
                        url.id = Some(id.to_display_string());
                    }
                }
            }
        }
    }

    // automatic link on a singular association: infer create/edit/show
    if column.autolink && column.singular_association() {
        let present = matches!(&association, Some(AssociationValue::Singular(Some(_))));
        link = action_link_to_inline_form(&link, column, present);
        let Some(crud) = link.crud_type else {
            return text.to_string();
        };
        if crud == CrudType::Create {
            url.set("link", ctx.locale.translate("create_new"));
        }
    }

    let crud = link.crud_type.unwrap_or(CrudType::Read);
    let authorized = if let Some(info) = &column.association {
        let granted = match &association {
            Some(AssociationValue::Singular(Some(related))) => {
                ctx.auth.record_allows(*related, crud, None)
            }
            Some(AssociationValue::Collection(collection)) if !collection.is_empty() => {
                match collection.records().first() {
                    Some(first) => ctx.auth.record_allows(first.as_ref(), crud, None),
                    // unloaded window: fall back to the entity kind
                    None => ctx.auth.entity_allows(info.entity, crud, None),
                }
            }
            _ => ctx.auth.entity_allows(info.entity, crud, None),
        };
        // creating a related record from this cell is really an edit of
        // this record's association
        if crud == CrudType::Create {
            granted && ctx.auth.record_allows(record, CrudType::Update, Some(&column.name))
        } else {
            granted
        }
    } else {
        ctx.auth.record_allows(record, crud, None)
    };

    if !authorized {
        return content_tag("a", &Attrs::new().set("class", "disabled"), text);
    }

    render_action_link(ctx, &link, url)
}

/// Derive the action link for a singular association cell: empty
/// associations can only link to the create form; populated ones prefer
/// edit, then show. When the allow-list permits none of these, the derived
/// link keeps an unset CRUD kind and the caller renders plain text.
pub fn action_link_to_inline_form(
    link: &ActionLink,
    column: &ListColumn,
    associated_present: bool,
) -> ActionLink {
    let allowed = &column.association_link_actions;
    if !associated_present {
        if allowed.contains(&LinkAction::New) {
            return link.with_action("new", CrudType::Create);
        }
    } else if allowed.contains(&LinkAction::Edit) {
        return link.with_action("edit", CrudType::Update);
    } else if allowed.contains(&LinkAction::Show) {
        return link.with_action("show", CrudType::Read);
    }
    link.clone()
}

fn render_action_link(ctx: &RenderContext, link: &ActionLink, mut url: UrlParams) -> String {
    url.controller = link
        .controller
        .clone()
        .unwrap_or_else(|| ctx.config.controller.clone());
    url.action = Some(link.action.clone());
    let label = url.delete("link").unwrap_or_default();
    content_tag(
        "a",
        &Attrs::new().set("href", url.to_path()).set("class", "action"),
        &label,
    )
}
