//! Record trait and association handles.
//!
//! `Record` is the contract the ORM collaborator fulfils: named field
//! accessors, an identity, a human label, and association accessors. The
//! renderer works entirely through `&dyn Record`, so any backing store can
//! plug in.

use std::cell::RefCell;
use std::rc::Rc;

use crate::value::Value;

/// An entity with named field accessors, an identity, and associations.
pub trait Record {
    /// The entity kind this record belongs to (e.g., `"Hero"`).
    ///
    /// Used to derive the foreign-key parameter name for cross-controller
    /// links and for class-level authorization checks.
    fn entity_name(&self) -> &str;

    /// The record's identity, if persisted.
    fn id(&self) -> Option<Value>;

    /// Named field accessor. Unknown fields yield [`Value::Null`].
    fn get(&self, field: &str) -> Value;

    /// Human-readable label used when this record appears as an
    /// association value in another record's row.
    fn to_label(&self) -> String;

    /// Association accessor. Returns `None` when the record has no
    /// association by that name.
    fn association(&self, name: &str) -> Option<AssociationValue<'_>>;
}

/// The resolved value of an association on a record.
pub enum AssociationValue<'a> {
    /// A has-one / belongs-to association: the related record, if any.
    Singular(Option<&'a dyn Record>),
    /// A has-many / has-and-belongs-to-many association.
    Collection(&'a AssociationCollection),
}

/// Query primitive for lazily-loaded association collections.
///
/// The renderer only ever issues bounded fetches through this trait; the
/// implementation decides what "fetch" means (SQL, in-memory, fixture).
pub trait CollectionSource {
    /// True size of the underlying collection.
    fn count(&self) -> usize;

    /// Fetch up to `limit` records, restricted to `columns` (the fields
    /// needed for label display). Implementations may ignore `columns`.
    fn fetch(&self, limit: usize, columns: &[String]) -> Vec<Rc<dyn Record>>;
}

/// A request-scoped handle over a related collection.
///
/// The handle starts either eager-loaded (window already materialized) or
/// lazy (backed by a [`CollectionSource`]). The cache loader installs a
/// bounded preview window of at most `limit + 1` records on lazy handles;
/// the extra record is a sentinel used only to detect truncation and is
/// never displayed.
///
/// Interior mutability is deliberate: the handle is scoped to one
/// request/render pass with no cross-request sharing, and the loaded-flag
/// check makes installation idempotent.
pub struct AssociationCollection {
    source: Option<Box<dyn CollectionSource>>,
    window: RefCell<Option<Vec<Rc<dyn Record>>>>,
}

impl AssociationCollection {
    /// Create a lazy handle backed by a query source.
    #[must_use]
    pub fn lazy(source: Box<dyn CollectionSource>) -> Self {
        Self {
            source: Some(source),
            window: RefCell::new(None),
        }
    }

    /// Create an eager-loaded handle with its full collection materialized.
    #[must_use]
    pub fn eager(records: Vec<Rc<dyn Record>>) -> Self {
        Self {
            source: None,
            window: RefCell::new(Some(records)),
        }
    }

    /// Whether a window has been materialized.
    #[must_use]
    pub fn loaded(&self) -> bool {
        self.window.borrow().is_some()
    }

    /// Install a materialized window. No-op if one is already installed.
    pub fn install(&self, records: Vec<Rc<dyn Record>>) {
        let mut window = self.window.borrow_mut();
        if window.is_none() {
            *window = Some(records);
        }
    }

    /// The materialized window. Empty when the handle is unloaded: callers
    /// iterating an unloaded lazy handle see no records rather than an
    /// implicit full load.
    #[must_use]
    pub fn records(&self) -> Vec<Rc<dyn Record>> {
        self.window.borrow().clone().unwrap_or_default()
    }

    /// Number of records visible through this handle: the window size when
    /// loaded, else the source count.
    #[must_use]
    pub fn len(&self) -> usize {
        if let Some(window) = self.window.borrow().as_ref() {
            return window.len();
        }
        self.source.as_ref().map_or(0, |s| s.count())
    }

    /// Whether the collection reads as empty through this handle.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// True size of the underlying collection, bypassing the preview window.
    ///
    /// For lazy handles this consults the source (a count query); for eager
    /// handles the window is the full collection.
    #[must_use]
    pub fn size(&self) -> usize {
        match &self.source {
            Some(source) => source.count(),
            None => self.window.borrow().as_ref().map_or(0, Vec::len),
        }
    }

    /// Bounded fetch against the source. Eager handles fetch nothing.
    #[must_use]
    pub fn fetch(&self, limit: usize, columns: &[String]) -> Vec<Rc<dyn Record>> {
        self.source
            .as_ref()
            .map_or_else(Vec::new, |s| s.fetch(limit, columns))
    }
}

impl std::fmt::Debug for AssociationCollection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AssociationCollection")
            .field("loaded", &self.loaded())
            .field("lazy", &self.source.is_some())
            .finish()
    }
}
