//! Association metadata.
//!
//! Associations are described statically on a column and resolved against a
//! record at render time. The renderer only needs the cardinality, the target
//! entity kind, and (for cross-controller links) the controller that manages
//! the target entity.

/// The cardinality of an association between two entities.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AssociationKind {
    /// One related record, owned by the other side (`Profile` of a `Hero`).
    HasOne,
    /// One related record, owned by this side via a foreign key.
    #[default]
    BelongsTo,
    /// A collection of related records.
    HasMany,
    /// A collection of related records via a join table.
    HasAndBelongsToMany,
}

impl AssociationKind {
    /// Whether this association resolves to a single record.
    #[must_use]
    pub const fn is_singular(&self) -> bool {
        matches!(self, AssociationKind::HasOne | AssociationKind::BelongsTo)
    }

    /// Whether this association resolves to a collection.
    #[must_use]
    pub const fn is_plural(&self) -> bool {
        !self.is_singular()
    }
}

/// Metadata about an association-backed column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssociationInfo {
    /// Name of the association field on the record.
    pub name: &'static str,

    /// Cardinality of the association.
    pub kind: AssociationKind,

    /// The target entity kind (e.g., `"Team"`), used for class-level
    /// authorization checks when the association is empty.
    pub entity: &'static str,

    /// Controller managing the target entity, when it differs from the
    /// current one. Used by the link renderer for cross-controller links.
    pub controller: Option<&'static str>,
}

impl AssociationInfo {
    /// Create a new association descriptor.
    #[must_use]
    pub const fn new(name: &'static str, kind: AssociationKind, entity: &'static str) -> Self {
        Self {
            name,
            kind,
            entity,
            controller: None,
        }
    }

    /// Set the controller managing the target entity.
    #[must_use]
    pub const fn controller(mut self, controller: &'static str) -> Self {
        self.controller = Some(controller);
        self
    }

    /// Whether this association resolves to a single record.
    #[must_use]
    pub const fn is_singular(&self) -> bool {
        self.kind.is_singular()
    }

    /// Whether this association resolves to a collection.
    #[must_use]
    pub const fn is_plural(&self) -> bool {
        self.kind.is_plural()
    }
}
