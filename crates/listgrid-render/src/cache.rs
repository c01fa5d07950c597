//! Bounded association preview loading.

use listgrid_core::{AssociationCollection, ListColumn};

/// Make sure a bounded preview of `collection` is materialized.
///
/// Already-loaded (eager) collections are left alone. Otherwise, with a
/// configured preview limit, `limit + 1` records are fetched restricted to
/// the column's label projection; the extra record is the truncation
/// sentinel and is never displayed. Without a limit nothing is fetched:
/// loading an unbounded collection per row is the host's mistake, so this
/// warns and leaves the handle unloaded rather than papering over it.
pub fn cache_association(collection: &AssociationCollection, column: &ListColumn) {
    if collection.loaded() {
        return;
    }
    match column.options.associated_limit {
        Some(limit) => {
            let window = collection.fetch(limit + 1, &column.select_columns);
            collection.install(window);
        }
        None => {
            tracing::warn!(
                column = %column.name,
                "association has no preview limit and is not eager-loaded; \
                 enable eager loading to avoid per-row queries"
            );
        }
    }
}
